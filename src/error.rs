/// Custom Result type for bdir operations, wrapping the custom [`Error`] type
pub type Result<T> = std::result::Result<T, Error>;

use crate::modality::Modality;

/// The main error type for the bdir library, encompassing all possible error cases
/// that can occur while encoding, decoding, or validating biometric data
/// interchange records.
#[derive(thiserror::Error, Debug)]
#[error(transparent)]
pub enum Error {
    /// Errors that occur while decoding a record from its wire form
    ReadError(#[from] ReadError),
    /// Errors that occur while encoding a record to its wire form
    WriteError(#[from] WriteError),
    /// Errors raised for unrecognized purpose or modality selectors
    PolicyError(#[from] PolicyError),
    /// Standard I/O errors from the Rust standard library
    IoError(#[from] std::io::Error),
    /// Generic errors that can occur in any part of the system
    AnyhowError(#[from] anyhow::Error),
}

/// Errors that can occur while decoding a biometric record
#[derive(thiserror::Error, Debug)]
pub enum ReadError {
    /// The stream ended before a fixed-size or length-prefixed field could be
    /// fully read
    ///
    /// # Arguments
    /// * `usize` - The number of bytes the field still required
    #[error("Unexpected end of data: {0} more bytes required")]
    UnexpectedEndOfData(usize),

    /// A strictly enumerated field holds a value outside its defined range
    ///
    /// # Fields
    /// * `field` - The name of the offending field
    /// * `value` - The out-of-range value found on the wire
    #[error("Invalid value for {field}: {value:#x}")]
    InvalidFieldValue { field: &'static str, value: u32 },

    /// A declared length field does not equal the serialized size of the
    /// payload it measures
    ///
    /// # Fields
    /// * `field` - The name of the length field
    /// * `declared` - The length carried on the wire
    /// * `actual` - The length computed from the payload itself
    #[error("Declared {field} ({declared}) does not match actual size ({actual})")]
    LengthMismatch {
        field: &'static str,
        declared: usize,
        actual: usize,
    },

    /// The record carries a number of representations the codec does not
    /// support (exactly one is supported end-to-end)
    ///
    /// # Arguments
    /// * `u16` - The number of representations declared by the record
    #[error("Unsupported number of representations: {0}")]
    UnsupportedRepresentationCount(u16),

    /// The record's format identifier names a different modality than the
    /// caller asked to decode
    ///
    /// # Fields
    /// * `expected` - The modality the caller selected
    /// * `found` - The modality declared by the record
    #[error("Record modality ({found}) does not match requested modality ({expected})")]
    ModalityMismatch { expected: Modality, found: Modality },
}

/// Errors that can occur while encoding a biometric record
#[derive(thiserror::Error, Debug)]
pub enum WriteError {
    /// The image payload exceeds the 4-byte length field
    ///
    /// # Arguments
    /// * `usize` - The size of the rejected image payload
    #[error("Image payload of {0} bytes exceeds the 4-byte length field")]
    ImageTooLarge(usize),

    /// A pixel dimension reported by the image probe exceeds the 2-byte
    /// width/height fields
    ///
    /// # Arguments
    /// * `u32` - The rejected dimension in pixels
    #[error("Image dimension of {0} pixels exceeds the 2-byte field")]
    OversizedImageDimension(u32),

    /// More quality blocks were supplied than the 1-byte count field can carry
    #[error("Too many quality blocks: {0} (at most 255)")]
    TooManyQualityBlocks(usize),

    /// More landmark points were supplied than the 2-byte count field can carry
    #[error("Too many landmark points: {0} (at most 65535)")]
    TooManyLandmarkPoints(usize),

    /// The image probe reported a compression kind that contradicts the
    /// selected capture purpose
    ///
    /// # Fields
    /// * `purpose` - The purpose the encoder was built with
    /// * `lossless` - Whether the probe reported lossless compression
    #[error("Image compression (lossless: {lossless}) contradicts purpose {purpose}")]
    CompressionPolicyMismatch {
        purpose: crate::policy::Purpose,
        lossless: bool,
    },

    /// A mandatory field was not supplied to the metadata builder
    #[error("Missing field in capture metadata builder: {0}")]
    MissingField(&'static str),
}

/// Errors raised for unrecognized or unsupported purpose/modality selectors
#[derive(thiserror::Error, Debug)]
pub enum PolicyError {
    /// The purpose token is not one of the recognized profiles
    #[error("Unknown capture purpose: {0:?}")]
    UnknownPurpose(String),

    /// The modality token does not name a known biometric modality
    #[error("Unknown modality: {0:?}")]
    UnknownModality(String),

    /// The modality is recognized but not implemented end-to-end
    #[error("Modality {0} is not supported")]
    UnsupportedModality(Modality),
}

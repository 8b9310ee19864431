//! General header of a biometric data interchange record
//!
//! The general header opens every record: format identifier, version number,
//! overall record length, number of representations, certification flag, and
//! one modality-specific trailing field (temporal semantics for face, number
//! of eyes represented for iris). The record length carried on the wire
//! covers the general header itself plus every representation; in memory the
//! representations' total is derived at write time and never stored.

use std::io::{Read, Write};

use crate::error::{PolicyError, ReadError, Result};
use crate::fields::{CertificationFlag, FormatIdentifier, TemporalSemantics, VersionNumber};
use crate::modality::Modality;
use crate::primitive;

/// Size of the face general header in bytes
pub const SIZE_GENERAL_HEADER_FACE: usize = 17;

/// Size of the iris general header in bytes
pub const SIZE_GENERAL_HEADER_IRIS: usize = 16;

/// Modality-specific trailing field of the general header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalityField {
    /// Face records close the general header with a 2-byte temporal semantics
    /// field relating multiple representations in time
    Face { temporal_semantics: TemporalSemantics },
    /// Iris records close the general header with a 1-byte count of eyes
    /// represented in the record (0, 1 or 2)
    Iris { eyes_present: u8 },
}
impl ModalityField {
    #[must_use]
    pub fn modality(&self) -> Modality {
        match self {
            Self::Face { .. } => Modality::Face,
            Self::Iris { .. } => Modality::Iris,
        }
    }
}

/// General header structure for biometric records
///
/// The header identifies the record's modality and format edition and frames
/// the representations that follow. Every multi-byte field is big-endian.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneralHeader {
    /// Format identifier declaring the modality
    ///
    /// 4 bytes, "FAC\0" or "IIR\0"
    pub format: FormatIdentifier,

    /// Version of the record format
    ///
    /// 4 bytes, ASCII digits
    pub version: VersionNumber,

    /// Number of representations in the record
    ///
    /// 2 bytes; only a value of 1 is supported end-to-end
    pub representation_count: u16,

    /// Certification flag, mandated zero by the standard
    ///
    /// 1 byte
    pub certification: CertificationFlag,

    /// Modality-specific trailing field
    ///
    /// 2 bytes (face) or 1 byte (iris)
    pub modality_field: ModalityField,
}
impl GeneralHeader {
    /// Creates a general header with standard-mandated defaults for a single
    /// representation
    #[must_use]
    pub fn new(modality_field: ModalityField) -> Self {
        let format = FormatIdentifier::for_modality(modality_field.modality());
        Self {
            format,
            version: VersionNumber::for_modality(modality_field.modality()),
            representation_count: 1,
            certification: CertificationFlag::Unspecified,
            modality_field,
        }
    }

    /// The modality this header declares
    #[must_use]
    pub fn modality(&self) -> Modality {
        self.modality_field.modality()
    }

    /// Serialized size of this header in bytes
    #[must_use]
    pub fn wire_len(&self) -> usize {
        match self.modality_field {
            ModalityField::Face { .. } => SIZE_GENERAL_HEADER_FACE,
            ModalityField::Iris { .. } => SIZE_GENERAL_HEADER_IRIS,
        }
    }

    /// Reads a general header from a stream
    ///
    /// Returns the header together with the declared total size of the
    /// representations that follow it, i.e. the wire record length minus the
    /// header's own size. The declared total is a consistency hint only; the
    /// representations' self-describing lengths govern cursor movement.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// * The format identifier or version number is unknown, or the version
    ///   does not match the modality's edition
    /// * The certification flag is non-zero
    /// * The record declares finger data, which this codec does not implement
    /// * The declared record length is smaller than the header itself
    pub fn from_reader<R: Read>(reader: &mut R) -> Result<(Self, u32)> {
        let format = FormatIdentifier::from_value(primitive::read_u32(reader)?)?;
        let modality = format.modality();
        if modality == Modality::Finger {
            return Err(PolicyError::UnsupportedModality(modality).into());
        }

        let version = VersionNumber::from_value(primitive::read_u32(reader)?)?;
        if version != VersionNumber::for_modality(modality) {
            return Err(ReadError::InvalidFieldValue {
                field: "version number",
                value: version.value(),
            }
            .into());
        }

        let record_length = primitive::read_u32(reader)? as usize;
        let representation_count = primitive::read_u16(reader)?;
        let certification = CertificationFlag::from_value(primitive::read_u8(reader)?)?;
        let modality_field = match modality {
            Modality::Face => ModalityField::Face {
                temporal_semantics: TemporalSemantics::from_value(primitive::read_u16(reader)?),
            },
            Modality::Iris => ModalityField::Iris {
                eyes_present: primitive::read_u8(reader)?,
            },
            Modality::Finger => unreachable!("finger rejected above"),
        };

        let header = Self {
            format,
            version,
            representation_count,
            certification,
            modality_field,
        };
        let own_len = header.wire_len();
        if record_length < own_len {
            return Err(ReadError::LengthMismatch {
                field: "record length",
                declared: record_length,
                actual: own_len,
            }
            .into());
        }
        Ok((header, (record_length - own_len) as u32))
    }

    /// Writes the header to a stream
    ///
    /// `representations_len` is the total serialized size of every
    /// representation that will follow; the wire record length field is the
    /// sum of that total and the header's own size, recomputed on every call.
    pub fn write_bytes<W: Write>(&self, writer: &mut W, representations_len: u32) -> Result<()> {
        primitive::write_u32(writer, self.format.value())?;
        primitive::write_u32(writer, self.version.value())?;
        primitive::write_u32(writer, self.wire_len() as u32 + representations_len)?;
        primitive::write_u16(writer, self.representation_count)?;
        primitive::write_u8(writer, self.certification.value())?;
        match self.modality_field {
            ModalityField::Face { temporal_semantics } => {
                primitive::write_u16(writer, temporal_semantics.value())?;
            }
            ModalityField::Iris { eyes_present } => {
                primitive::write_u8(writer, eyes_present)?;
            }
        }
        Ok(())
    }
}

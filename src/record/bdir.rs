//! The top-level biometric data interchange record

use std::io::{Cursor, Read, Write};

use crate::error::{ReadError, Result, WriteError};
use crate::modality::Modality;
use crate::record::general::GeneralHeader;
use crate::record::representation::Representation;

/// A complete biometric data interchange record
///
/// One general header framing exactly one representation. The record is
/// immutable value data: it is built either from capture metadata and image
/// bytes (encode path) or from a raw byte buffer (decode path) and lives only
/// as long as the caller keeps it.
///
/// Encoding is bottom-up by construction: the representation data's size
/// feeds the representation header's length field, whose size in turn feeds
/// the general header's record length. All three are derived from live field
/// values during `write_bytes`, so a record mutated before encoding always
/// serializes with consistent lengths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bdir {
    pub general: GeneralHeader,
    pub representation: Representation,
}
impl Bdir {
    /// The modality declared by the general header
    #[must_use]
    pub fn modality(&self) -> Modality {
        self.general.modality()
    }

    /// Total serialized size of the record in bytes
    #[must_use]
    pub fn wire_len(&self) -> usize {
        self.general.wire_len() + self.representation.wire_len()
    }

    /// Reads a complete record from a stream
    ///
    /// The representation's self-describing lengths govern cursor movement;
    /// the general header's declared record length is cross-checked against
    /// the actual representation size and a disagreement is logged, not
    /// rejected.
    ///
    /// # Errors
    ///
    /// Returns an error if the general header is invalid, the record declares
    /// a number of representations other than one, or the representation
    /// itself is malformed or truncated.
    pub fn from_reader<R: Read>(reader: &mut R) -> Result<Self> {
        let (general, declared_representations_len) = GeneralHeader::from_reader(reader)?;
        if general.representation_count != 1 {
            return Err(
                ReadError::UnsupportedRepresentationCount(general.representation_count).into(),
            );
        }
        let representation = Representation::from_reader(reader, general.modality())?;
        let actual = representation.wire_len();
        if declared_representations_len as usize != actual {
            log::warn!(
                "record length declares {declared_representations_len} representation bytes, found {actual}"
            );
        }
        Ok(Self {
            general,
            representation,
        })
    }

    /// Parses a record from an in-memory buffer
    pub fn from_buffer(buffer: &[u8]) -> Result<Self> {
        Self::from_reader(&mut Cursor::new(buffer))
    }

    /// Writes the complete record to a stream, recomputing every length field
    pub fn write_bytes<W: Write>(&self, writer: &mut W) -> Result<()> {
        let representation_len = self.representation.wire_len();
        let representation_len = u32::try_from(representation_len)
            .map_err(|_| WriteError::ImageTooLarge(self.representation.data.wire_len()))?;
        self.general.write_bytes(writer, representation_len)?;
        self.representation.write_bytes(writer)?;
        Ok(())
    }

    /// Serializes the record into a freshly allocated buffer
    pub fn to_vec(&self) -> Result<Vec<u8>> {
        let mut buffer = Vec::with_capacity(self.wire_len());
        self.write_bytes(&mut buffer)?;
        Ok(buffer)
    }
}

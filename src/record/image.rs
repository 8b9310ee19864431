//! Representation data: the opaque image payload and its optional trailer

use std::io::{Read, Write};

use crate::error::{ReadError, Result, WriteError};
use crate::primitive;

/// Length-prefixed opaque image payload
///
/// Four bytes of big-endian length followed by exactly that many bytes of
/// compressed image data. The codec never looks inside the payload; its
/// format is declared by the surrounding header fields.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ImageData {
    pub image: Vec<u8>,
}
impl ImageData {
    #[must_use]
    pub fn new(image: Vec<u8>) -> Self {
        Self { image }
    }

    /// Reads the length prefix and the payload it declares
    ///
    /// There is no reduced decode mode for this block: the length field must
    /// be consumed from the stream either way to keep the cursor correct.
    pub fn from_reader<R: Read>(reader: &mut R) -> Result<Self> {
        let image_length = primitive::read_u32(reader)? as usize;
        let image = primitive::read_exact_vec(reader, image_length)?;
        Ok(Self { image })
    }

    pub fn write_bytes<W: Write>(&self, writer: &mut W) -> Result<()> {
        let image_length = u32::try_from(self.image.len())
            .map_err(|_| WriteError::ImageTooLarge(self.image.len()))?;
        primitive::write_u32(writer, image_length)?;
        primitive::write_bytes(writer, &self.image)?;
        Ok(())
    }

    #[must_use]
    pub fn wire_len(&self) -> usize {
        4 + self.image.len()
    }
}

/// The data portion of a representation
///
/// The image payload, optionally followed by a trailing extended-data block.
/// Only face representations whose image type declares 3D content may carry
/// the trailer; it is sized by the representation's declared length and is
/// present with zero bytes when empty. Trailing bytes on any other
/// representation are a length mismatch.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RepresentationData {
    pub image_data: ImageData,
    pub extended_data: Vec<u8>,
}
impl RepresentationData {
    #[must_use]
    pub fn new(image: Vec<u8>) -> Self {
        Self {
            image_data: ImageData::new(image),
            extended_data: Vec::new(),
        }
    }

    /// Reads the data portion of a representation
    ///
    /// `declared_len` is the size the representation header assigned to this
    /// portion; `allow_extended` is true only for face representations whose
    /// image type declares 3D content.
    pub fn from_reader<R: Read>(
        reader: &mut R,
        declared_len: usize,
        allow_extended: bool,
    ) -> Result<Self> {
        let image_data = ImageData::from_reader(reader)?;
        let consumed = image_data.wire_len();
        if consumed > declared_len {
            return Err(ReadError::LengthMismatch {
                field: "representation length",
                declared: declared_len,
                actual: consumed,
            }
            .into());
        }
        let remaining = declared_len - consumed;
        if remaining > 0 && !allow_extended {
            return Err(ReadError::LengthMismatch {
                field: "representation length",
                declared: declared_len,
                actual: consumed,
            }
            .into());
        }
        let extended_data = primitive::read_exact_vec(reader, remaining)?;
        Ok(Self {
            image_data,
            extended_data,
        })
    }

    pub fn write_bytes<W: Write>(&self, writer: &mut W) -> Result<()> {
        self.image_data.write_bytes(writer)?;
        primitive::write_bytes(writer, &self.extended_data)?;
        Ok(())
    }

    #[must_use]
    pub fn wire_len(&self) -> usize {
        self.image_data.wire_len() + self.extended_data.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use anyhow::Result;
    use std::io::Cursor;

    #[test]
    fn test_image_data_roundtrip() -> Result<()> {
        let data = ImageData::new(vec![0xDE, 0xAD, 0xBE, 0xEF, 0x42]);
        let mut buffer = Vec::new();
        data.write_bytes(&mut buffer)?;
        assert_eq!(buffer.len(), 4 + 5);
        assert_eq!(&buffer[..4], &5u32.to_be_bytes());

        let decoded = ImageData::from_reader(&mut Cursor::new(buffer))?;
        assert_eq!(decoded, data);
        Ok(())
    }

    #[test]
    fn test_image_payload_truncated() {
        let mut buffer = Vec::new();
        ImageData::new(vec![1, 2, 3, 4]).write_bytes(&mut buffer).unwrap();
        buffer.truncate(6);
        let err = ImageData::from_reader(&mut Cursor::new(buffer)).unwrap_err();
        assert!(matches!(
            err,
            Error::ReadError(ReadError::UnexpectedEndOfData(4))
        ));
    }

    #[test]
    fn test_extended_data_requires_declaration() {
        let data = RepresentationData {
            image_data: ImageData::new(vec![1, 2, 3]),
            extended_data: vec![9, 9],
        };
        let mut buffer = Vec::new();
        data.write_bytes(&mut buffer).unwrap();
        let declared = data.wire_len();

        // a 3D representation accepts the trailer
        let decoded =
            RepresentationData::from_reader(&mut Cursor::new(&buffer), declared, true).unwrap();
        assert_eq!(decoded, data);

        // anything else rejects it as a length mismatch
        let err = RepresentationData::from_reader(&mut Cursor::new(&buffer), declared, false)
            .unwrap_err();
        assert!(matches!(
            err,
            Error::ReadError(ReadError::LengthMismatch { .. })
        ));
    }

    #[test]
    fn test_declared_shorter_than_image_rejected() {
        let data = RepresentationData::new(vec![1, 2, 3, 4, 5]);
        let mut buffer = Vec::new();
        data.write_bytes(&mut buffer).unwrap();
        let err =
            RepresentationData::from_reader(&mut Cursor::new(&buffer), 6, false).unwrap_err();
        assert!(matches!(
            err,
            Error::ReadError(ReadError::LengthMismatch { .. })
        ));
    }

    #[test]
    fn test_empty_trailer_is_zero_bytes_not_omitted() -> Result<()> {
        let data = RepresentationData::new(vec![7; 10]);
        let mut buffer = Vec::new();
        data.write_bytes(&mut buffer)?;
        let decoded =
            RepresentationData::from_reader(&mut Cursor::new(&buffer), data.wire_len(), true)?;
        assert!(decoded.extended_data.is_empty());
        Ok(())
    }
}

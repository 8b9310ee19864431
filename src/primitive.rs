//! Primitive field I/O for biometric records
//!
//! All multi-byte fields in the ISO/IEC 19794 family are big-endian unsigned
//! integers, so every read and write in this module is big-endian. Reads that
//! run off the end of the stream surface [`ReadError::UnexpectedEndOfData`]
//! rather than a bare I/O error, because a short stream is a malformed record,
//! not a transport failure.

use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};
use std::io::{Read, Seek, SeekFrom, Write};

use crate::error::{Error, ReadError, Result};

fn map_eof(err: std::io::Error, needed: usize) -> Error {
    if err.kind() == std::io::ErrorKind::UnexpectedEof {
        ReadError::UnexpectedEndOfData(needed).into()
    } else {
        err.into()
    }
}

/// Reads a single unsigned byte
pub fn read_u8<R: Read>(reader: &mut R) -> Result<u8> {
    reader.read_u8().map_err(|e| map_eof(e, 1))
}

/// Reads a 2-byte big-endian unsigned integer
pub fn read_u16<R: Read>(reader: &mut R) -> Result<u16> {
    reader.read_u16::<BigEndian>().map_err(|e| map_eof(e, 2))
}

/// Reads a 3-byte big-endian unsigned integer, zero-extended to `u32`
pub fn read_u24<R: Read>(reader: &mut R) -> Result<u32> {
    reader.read_u24::<BigEndian>().map_err(|e| map_eof(e, 3))
}

/// Reads a 4-byte big-endian unsigned integer
pub fn read_u32<R: Read>(reader: &mut R) -> Result<u32> {
    reader.read_u32::<BigEndian>().map_err(|e| map_eof(e, 4))
}

/// Reads a fixed-size byte block
pub fn read_array<const N: usize, R: Read>(reader: &mut R) -> Result<[u8; N]> {
    let mut buffer = [0u8; N];
    reader.read_exact(&mut buffer).map_err(|e| map_eof(e, N))?;
    Ok(buffer)
}

/// Reads exactly `n` bytes into a freshly allocated buffer
pub fn read_exact_vec<R: Read>(reader: &mut R, n: usize) -> Result<Vec<u8>> {
    let mut buffer = vec![0u8; n];
    reader.read_exact(&mut buffer).map_err(|e| map_eof(e, n))?;
    Ok(buffer)
}

/// Advances the stream cursor by `n` bytes without reading
///
/// Used by the reduced header-only decode mode to step over fixed-size
/// sub-blocks. Seeking past the end of a stream is not an error in itself;
/// the next actual read reports the truncation.
pub fn skip<R: Read + Seek>(reader: &mut R, n: u64) -> Result<()> {
    reader.seek(SeekFrom::Current(i64::try_from(n).unwrap_or(i64::MAX)))?;
    Ok(())
}

/// Writes a single unsigned byte
pub fn write_u8<W: Write>(writer: &mut W, value: u8) -> Result<()> {
    writer.write_u8(value)?;
    Ok(())
}

/// Writes a 2-byte big-endian unsigned integer
pub fn write_u16<W: Write>(writer: &mut W, value: u16) -> Result<()> {
    writer.write_u16::<BigEndian>(value)?;
    Ok(())
}

/// Writes the low 3 bytes of `value` big-endian
pub fn write_u24<W: Write>(writer: &mut W, value: u32) -> Result<()> {
    writer.write_u24::<BigEndian>(value)?;
    Ok(())
}

/// Writes a 4-byte big-endian unsigned integer
pub fn write_u32<W: Write>(writer: &mut W, value: u32) -> Result<()> {
    writer.write_u32::<BigEndian>(value)?;
    Ok(())
}

/// Writes a raw byte block
pub fn write_bytes<W: Write>(writer: &mut W, bytes: &[u8]) -> Result<()> {
    writer.write_all(bytes)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use std::io::Cursor;

    #[test]
    fn test_primitive_roundtrip() -> Result<()> {
        let mut buffer = Vec::new();
        write_u8(&mut buffer, 0xAB)?;
        write_u16(&mut buffer, 0x1234)?;
        write_u24(&mut buffer, 0x00AB_CDEF)?;
        write_u32(&mut buffer, 0xDEAD_BEEF)?;
        write_bytes(&mut buffer, b"FAC\0")?;

        let mut cursor = Cursor::new(buffer);
        assert_eq!(read_u8(&mut cursor)?, 0xAB);
        assert_eq!(read_u16(&mut cursor)?, 0x1234);
        assert_eq!(read_u24(&mut cursor)?, 0x00AB_CDEF);
        assert_eq!(read_u32(&mut cursor)?, 0xDEAD_BEEF);
        assert_eq!(&read_array::<4, _>(&mut cursor)?, b"FAC\0");
        Ok(())
    }

    #[test]
    fn test_big_endian_byte_order() -> Result<()> {
        let mut buffer = Vec::new();
        write_u16(&mut buffer, 0x0102)?;
        write_u32(&mut buffer, 0x0304_0506)?;
        assert_eq!(buffer, [0x01, 0x02, 0x03, 0x04, 0x05, 0x06]);
        Ok(())
    }

    #[test]
    fn test_short_stream_reports_end_of_data() {
        let mut cursor = Cursor::new(vec![0x01, 0x02]);
        let err = read_u32(&mut cursor).unwrap_err();
        assert!(matches!(
            err,
            crate::Error::ReadError(ReadError::UnexpectedEndOfData(4))
        ));
    }

    #[test]
    fn test_read_exact_vec_truncated() {
        let mut cursor = Cursor::new(vec![0u8; 3]);
        let err = read_exact_vec(&mut cursor, 10).unwrap_err();
        assert!(matches!(
            err,
            crate::Error::ReadError(ReadError::UnexpectedEndOfData(10))
        ));
    }

    #[test]
    fn test_skip_advances_cursor() -> Result<()> {
        let mut cursor = Cursor::new(vec![0x00, 0x00, 0x00, 0x2A]);
        skip(&mut cursor, 3)?;
        assert_eq!(read_u8(&mut cursor)?, 0x2A);
        Ok(())
    }
}

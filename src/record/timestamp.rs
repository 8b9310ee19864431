use std::io::{Read, Write};

use crate::error::Result;
use crate::primitive;

/// Size of the capture datetime block in bytes
pub const SIZE_DATETIME: usize = 9;

/// Capture timestamp of a representation
///
/// Nine bytes on the wire: year (2), month (1, January = 1), day (1),
/// hour (1), minute (1), second (1), millisecond (2). A capture time unknown
/// to the device is written with every byte set to 0xFF.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaptureDateTime {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    pub millisecond: u16,
}
impl CaptureDateTime {
    /// Sentinel value declaring the capture time unknown
    pub const UNKNOWN: Self = Self {
        year: 0xFFFF,
        month: 0xFF,
        day: 0xFF,
        hour: 0xFF,
        minute: 0xFF,
        second: 0xFF,
        millisecond: 0xFFFF,
    };

    #[must_use]
    pub fn is_unknown(&self) -> bool {
        *self == Self::UNKNOWN
    }

    pub fn from_reader<R: Read>(reader: &mut R) -> Result<Self> {
        Ok(Self {
            year: primitive::read_u16(reader)?,
            month: primitive::read_u8(reader)?,
            day: primitive::read_u8(reader)?,
            hour: primitive::read_u8(reader)?,
            minute: primitive::read_u8(reader)?,
            second: primitive::read_u8(reader)?,
            millisecond: primitive::read_u16(reader)?,
        })
    }

    pub fn write_bytes<W: Write>(&self, writer: &mut W) -> Result<()> {
        primitive::write_u16(writer, self.year)?;
        primitive::write_u8(writer, self.month)?;
        primitive::write_u8(writer, self.day)?;
        primitive::write_u8(writer, self.hour)?;
        primitive::write_u8(writer, self.minute)?;
        primitive::write_u8(writer, self.second)?;
        primitive::write_u16(writer, self.millisecond)?;
        Ok(())
    }

    #[must_use]
    pub fn wire_len(&self) -> usize {
        SIZE_DATETIME
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use std::io::Cursor;

    #[test]
    fn test_datetime_roundtrip() -> Result<()> {
        let datetime = CaptureDateTime {
            year: 2024,
            month: 11,
            day: 30,
            hour: 23,
            minute: 59,
            second: 58,
            millisecond: 999,
        };
        let mut buffer = Vec::new();
        datetime.write_bytes(&mut buffer)?;
        assert_eq!(buffer.len(), SIZE_DATETIME);
        let decoded = CaptureDateTime::from_reader(&mut Cursor::new(buffer))?;
        assert_eq!(decoded, datetime);
        Ok(())
    }

    #[test]
    fn test_month_is_one_based_on_the_wire() -> Result<()> {
        let datetime = CaptureDateTime {
            year: 2023,
            month: 1,
            day: 2,
            hour: 3,
            minute: 4,
            second: 5,
            millisecond: 6,
        };
        let mut buffer = Vec::new();
        datetime.write_bytes(&mut buffer)?;
        // January serializes as 0x01, not 0x00
        assert_eq!(buffer[2], 0x01);
        Ok(())
    }

    #[test]
    fn test_unknown_sentinel() {
        let mut buffer = Vec::new();
        CaptureDateTime::UNKNOWN.write_bytes(&mut buffer).unwrap();
        assert!(buffer.iter().all(|&b| b == 0xFF));
        assert!(CaptureDateTime::UNKNOWN.is_unknown());
    }
}

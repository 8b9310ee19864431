use std::io::{Read, Seek, Write};

use crate::error::Result;
use crate::fields::{QualityAlgorithmId, QualityAlgorithmVendor};
use crate::primitive;

/// Size of one quality block in bytes
pub const SIZE_QUALITY_BLOCK: usize = 5;

/// Sentinel quality score meaning "no score reported"
pub const SCORE_UNREPORTED: u8 = 255;

/// One quality assessment of a representation
///
/// Five bytes on the wire: score (1, 0-100 or 255 for unreported), algorithm
/// vendor identifier (2), algorithm identifier (2). The algorithm identifiers
/// are vendor-assigned and pass through raw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QualityBlock {
    pub score: u8,
    pub algorithm_vendor: QualityAlgorithmVendor,
    pub algorithm_id: QualityAlgorithmId,
}
impl QualityBlock {
    #[must_use]
    pub fn new(score: u8, vendor: u16, algorithm: u16) -> Self {
        Self {
            score,
            algorithm_vendor: QualityAlgorithmVendor(vendor),
            algorithm_id: QualityAlgorithmId(algorithm),
        }
    }

    pub fn from_reader<R: Read>(reader: &mut R) -> Result<Self> {
        Ok(Self {
            score: primitive::read_u8(reader)?,
            algorithm_vendor: QualityAlgorithmVendor::from_value(primitive::read_u16(reader)?),
            algorithm_id: QualityAlgorithmId::from_value(primitive::read_u16(reader)?),
        })
    }

    pub fn write_bytes<W: Write>(&self, writer: &mut W) -> Result<()> {
        primitive::write_u8(writer, self.score)?;
        primitive::write_u16(writer, self.algorithm_vendor.value())?;
        primitive::write_u16(writer, self.algorithm_id.value())?;
        Ok(())
    }

    /// Steps over one quality block without materializing it
    pub fn skip_from<R: Read + Seek>(reader: &mut R) -> Result<()> {
        primitive::skip(reader, SIZE_QUALITY_BLOCK as u64)
    }

    #[must_use]
    pub fn wire_len(&self) -> usize {
        SIZE_QUALITY_BLOCK
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use std::io::Cursor;

    #[test]
    fn test_quality_block_roundtrip() -> Result<()> {
        let block = QualityBlock::new(40, 0x0101, 0x0037);
        let mut buffer = Vec::new();
        block.write_bytes(&mut buffer)?;
        assert_eq!(buffer.len(), SIZE_QUALITY_BLOCK);
        let decoded = QualityBlock::from_reader(&mut Cursor::new(buffer))?;
        assert_eq!(decoded, block);
        Ok(())
    }

    #[test]
    fn test_skip_consumes_exactly_one_block() -> Result<()> {
        let mut buffer = Vec::new();
        QualityBlock::new(80, 1, 2).write_bytes(&mut buffer)?;
        QualityBlock::new(SCORE_UNREPORTED, 3, 4).write_bytes(&mut buffer)?;
        let mut cursor = Cursor::new(buffer);
        QualityBlock::skip_from(&mut cursor)?;
        let second = QualityBlock::from_reader(&mut cursor)?;
        assert_eq!(second.score, SCORE_UNREPORTED);
        Ok(())
    }
}

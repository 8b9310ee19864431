//! Iris-specific blocks of the representation header (ISO/IEC 19794-6)

use std::io::{Read, Write};

use crate::error::Result;
use crate::fields::{IrisImageFormat, IrisImageType, IrisProperties};
use crate::primitive;

/// Size of the iris image information block in bytes
pub const SIZE_IRIS_IMAGE_INFORMATION: usize = 27;

/// Properties of the embedded iris image
///
/// Twenty-seven bytes on the wire: image type (1), image format (2),
/// bit-packed properties byte (1), width (2), height (2), bit depth (1),
/// range (2), roll angle (2), roll angle uncertainty (2), iris centre
/// smallest/largest x and y (2 each), iris diameter smallest/largest
/// (2 each). Roll angle 0xFFFF means undefined; all-zero coordinate bounds
/// mean the position was not assessed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IrisImageInformation {
    pub image_type: IrisImageType,
    pub image_format: IrisImageFormat,
    pub properties: IrisProperties,
    pub width: u16,
    pub height: u16,
    pub bit_depth: u8,
    pub range: u16,
    pub roll_angle: u16,
    pub roll_angle_uncertainty: u16,
    pub centre_x_smallest: u16,
    pub centre_x_largest: u16,
    pub centre_y_smallest: u16,
    pub centre_y_largest: u16,
    pub diameter_smallest: u16,
    pub diameter_largest: u16,
}
impl IrisImageInformation {
    pub fn from_reader<R: Read>(reader: &mut R) -> Result<Self> {
        Ok(Self {
            image_type: IrisImageType::from_value(primitive::read_u8(reader)?)?,
            image_format: IrisImageFormat::from_value(primitive::read_u16(reader)?)?,
            properties: IrisProperties::from_byte(primitive::read_u8(reader)?)?,
            width: primitive::read_u16(reader)?,
            height: primitive::read_u16(reader)?,
            bit_depth: primitive::read_u8(reader)?,
            range: primitive::read_u16(reader)?,
            roll_angle: primitive::read_u16(reader)?,
            roll_angle_uncertainty: primitive::read_u16(reader)?,
            centre_x_smallest: primitive::read_u16(reader)?,
            centre_x_largest: primitive::read_u16(reader)?,
            centre_y_smallest: primitive::read_u16(reader)?,
            centre_y_largest: primitive::read_u16(reader)?,
            diameter_smallest: primitive::read_u16(reader)?,
            diameter_largest: primitive::read_u16(reader)?,
        })
    }

    pub fn write_bytes<W: Write>(&self, writer: &mut W) -> Result<()> {
        primitive::write_u8(writer, self.image_type.value())?;
        primitive::write_u16(writer, self.image_format.value())?;
        primitive::write_u8(writer, self.properties.to_byte())?;
        primitive::write_u16(writer, self.width)?;
        primitive::write_u16(writer, self.height)?;
        primitive::write_u8(writer, self.bit_depth)?;
        primitive::write_u16(writer, self.range)?;
        primitive::write_u16(writer, self.roll_angle)?;
        primitive::write_u16(writer, self.roll_angle_uncertainty)?;
        primitive::write_u16(writer, self.centre_x_smallest)?;
        primitive::write_u16(writer, self.centre_x_largest)?;
        primitive::write_u16(writer, self.centre_y_smallest)?;
        primitive::write_u16(writer, self.centre_y_largest)?;
        primitive::write_u16(writer, self.diameter_smallest)?;
        primitive::write_u16(writer, self.diameter_largest)?;
        Ok(())
    }

    #[must_use]
    pub fn wire_len(&self) -> usize {
        SIZE_IRIS_IMAGE_INFORMATION
    }
}

/// The complete iris-specific portion of a representation header
///
/// A 2-byte representation number followed by the iris image information
/// block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IrisInfo {
    pub representation_no: u16,
    pub image_info: IrisImageInformation,
}
impl IrisInfo {
    pub fn from_reader<R: Read>(reader: &mut R) -> Result<Self> {
        Ok(Self {
            representation_no: primitive::read_u16(reader)?,
            image_info: IrisImageInformation::from_reader(reader)?,
        })
    }

    pub fn write_bytes<W: Write>(&self, writer: &mut W) -> Result<()> {
        primitive::write_u16(writer, self.representation_no)?;
        self.image_info.write_bytes(writer)?;
        Ok(())
    }

    #[must_use]
    pub fn wire_len(&self) -> usize {
        2 + SIZE_IRIS_IMAGE_INFORMATION
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::{IrisCompression, Orientation};
    use anyhow::Result;
    use std::io::Cursor;

    pub(crate) fn sample_iris_info() -> IrisInfo {
        IrisInfo {
            representation_no: 1,
            image_info: IrisImageInformation {
                image_type: IrisImageType::CroppedAndMasked,
                image_format: IrisImageFormat::MonoJpeg2000,
                properties: IrisProperties {
                    horizontal_orientation: Orientation::Base,
                    vertical_orientation: Orientation::Base,
                    compression: IrisCompression::Lossy,
                },
                width: 640,
                height: 480,
                bit_depth: 8,
                range: 120,
                roll_angle: 0xFFFF,
                roll_angle_uncertainty: 0xFFFF,
                centre_x_smallest: 300,
                centre_x_largest: 340,
                centre_y_smallest: 220,
                centre_y_largest: 260,
                diameter_smallest: 180,
                diameter_largest: 200,
            },
        }
    }

    #[test]
    fn test_iris_info_roundtrip() -> Result<()> {
        let info = sample_iris_info();
        let mut buffer = Vec::new();
        info.write_bytes(&mut buffer)?;
        assert_eq!(buffer.len(), info.wire_len());
        assert_eq!(buffer.len(), 2 + SIZE_IRIS_IMAGE_INFORMATION);

        let decoded = IrisInfo::from_reader(&mut Cursor::new(buffer))?;
        assert_eq!(decoded, info);
        Ok(())
    }

    #[test]
    fn test_properties_byte_position() -> Result<()> {
        let info = sample_iris_info();
        let mut buffer = Vec::new();
        info.write_bytes(&mut buffer)?;
        // representation number (2) + image type (1) + image format (2)
        assert_eq!(buffer[5], info.image_info.properties.to_byte());
        Ok(())
    }

    #[test]
    fn test_truncated_info_fails() {
        let info = sample_iris_info();
        let mut buffer = Vec::new();
        info.write_bytes(&mut buffer).unwrap();
        buffer.truncate(10);
        assert!(IrisInfo::from_reader(&mut Cursor::new(buffer)).is_err());
    }
}

//! Enumerations specific to iris (ISO/IEC 19794-6) records

use crate::error::{ReadError, Result};

/// Kind of iris image carried by the representation (1 byte), strict
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IrisImageType {
    Uncropped,
    Vga,
    Cropped,
    CroppedAndMasked,
}
impl IrisImageType {
    #[must_use]
    pub fn value(&self) -> u8 {
        match self {
            Self::Uncropped => 0x01,
            Self::Vga => 0x02,
            Self::Cropped => 0x03,
            Self::CroppedAndMasked => 0x07,
        }
    }

    pub fn from_value(value: u8) -> Result<Self> {
        match value {
            0x01 => Ok(Self::Uncropped),
            0x02 => Ok(Self::Vga),
            0x03 => Ok(Self::Cropped),
            0x07 => Ok(Self::CroppedAndMasked),
            _ => Err(ReadError::InvalidFieldValue {
                field: "iris image type",
                value: u32::from(value),
            }
            .into()),
        }
    }
}

/// Storage format of the embedded iris image (2 bytes), strict
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IrisImageFormat {
    MonoRaw,
    RgbRaw,
    MonoJpeg2000,
    RgbJpeg2000,
    MonoPng,
    RgbPng,
}
impl IrisImageFormat {
    #[must_use]
    pub fn value(&self) -> u16 {
        match self {
            Self::MonoRaw => 0x0002,
            Self::RgbRaw => 0x0004,
            Self::MonoJpeg2000 => 0x0006,
            Self::RgbJpeg2000 => 0x0008,
            Self::MonoPng => 0x000A,
            Self::RgbPng => 0x000E,
        }
    }

    pub fn from_value(value: u16) -> Result<Self> {
        match value {
            0x0002 => Ok(Self::MonoRaw),
            0x0004 => Ok(Self::RgbRaw),
            0x0006 => Ok(Self::MonoJpeg2000),
            0x0008 => Ok(Self::RgbJpeg2000),
            0x000A => Ok(Self::MonoPng),
            0x000E => Ok(Self::RgbPng),
            _ => Err(ReadError::InvalidFieldValue {
                field: "iris image format",
                value: u32::from(value),
            }
            .into()),
        }
    }
}

/// Orientation of the image along one axis (2-bit field), strict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    Undefined,
    Base,
    Flipped,
}
impl Orientation {
    #[must_use]
    pub fn value(&self) -> u8 {
        match self {
            Self::Undefined => 0b00,
            Self::Base => 0b01,
            Self::Flipped => 0b10,
        }
    }

    pub fn from_value(value: u8) -> Result<Self> {
        match value {
            0b00 => Ok(Self::Undefined),
            0b01 => Ok(Self::Base),
            0b10 => Ok(Self::Flipped),
            _ => Err(ReadError::InvalidFieldValue {
                field: "orientation",
                value: u32::from(value),
            }
            .into()),
        }
    }
}

/// Compression applied to the iris image (2-bit field), strict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IrisCompression {
    #[default]
    Undefined,
    Lossless,
    Lossy,
}
impl IrisCompression {
    #[must_use]
    pub fn value(&self) -> u8 {
        match self {
            Self::Undefined => 0b00,
            Self::Lossless => 0b01,
            Self::Lossy => 0b10,
        }
    }

    pub fn from_value(value: u8) -> Result<Self> {
        match value {
            0b00 => Ok(Self::Undefined),
            0b01 => Ok(Self::Lossless),
            0b10 => Ok(Self::Lossy),
            _ => Err(ReadError::InvalidFieldValue {
                field: "iris compression type",
                value: u32::from(value),
            }
            .into()),
        }
    }
}

/// Packs the iris properties byte from its raw 2-bit components
///
/// Bits 0-1 carry the horizontal orientation, bits 2-3 the vertical
/// orientation, bits 4-5 are reserved zero, bits 6-7 the compression type.
/// Each component is masked to its 2-bit width.
#[must_use]
pub fn pack_properties(horizontal: u8, vertical: u8, compression: u8) -> u8 {
    (horizontal & 0b11) | ((vertical & 0b11) << 2) | ((compression & 0b11) << 6)
}

/// Splits the iris properties byte into (horizontal, vertical, compression)
#[must_use]
pub fn unpack_properties(byte: u8) -> (u8, u8, u8) {
    (byte & 0b11, (byte >> 2) & 0b11, (byte >> 6) & 0b11)
}

/// Decoded form of the bit-packed iris properties byte
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IrisProperties {
    pub horizontal_orientation: Orientation,
    pub vertical_orientation: Orientation,
    pub compression: IrisCompression,
}
impl IrisProperties {
    #[must_use]
    pub fn to_byte(&self) -> u8 {
        pack_properties(
            self.horizontal_orientation.value(),
            self.vertical_orientation.value(),
            self.compression.value(),
        )
    }

    /// Decodes the properties byte; the reserved bits must be zero
    pub fn from_byte(byte: u8) -> Result<Self> {
        if byte & 0b0011_0000 != 0 {
            return Err(ReadError::InvalidFieldValue {
                field: "iris properties",
                value: u32::from(byte),
            }
            .into());
        }
        let (horizontal, vertical, compression) = unpack_properties(byte);
        Ok(Self {
            horizontal_orientation: Orientation::from_value(horizontal)?,
            vertical_orientation: Orientation::from_value(vertical)?,
            compression: IrisCompression::from_value(compression)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_properties_bit_packing_all_combinations() {
        // exhaustive over the three 2-bit components; reserved bits stay zero
        for h in 0u8..4 {
            for v in 0u8..4 {
                for c in 0u8..4 {
                    let byte = pack_properties(h, v, c);
                    assert_eq!(byte & 0b0011_0000, 0);
                    assert_eq!(unpack_properties(byte), (h, v, c));
                }
            }
        }
    }

    #[test]
    fn test_properties_reserved_bits_rejected() {
        assert!(IrisProperties::from_byte(0b0001_0000).is_err());
        assert!(IrisProperties::from_byte(0b0010_0000).is_err());
    }

    #[test]
    fn test_properties_roundtrip() {
        let props = IrisProperties {
            horizontal_orientation: Orientation::Base,
            vertical_orientation: Orientation::Flipped,
            compression: IrisCompression::Lossy,
        };
        assert_eq!(IrisProperties::from_byte(props.to_byte()).unwrap(), props);
    }

    #[test]
    fn test_reserved_two_bit_values_rejected() {
        assert!(Orientation::from_value(0b11).is_err());
        assert!(IrisCompression::from_value(0b11).is_err());
    }

    #[test]
    fn test_iris_image_type_strict() {
        assert!(IrisImageType::from_value(0x07).is_ok());
        assert!(IrisImageType::from_value(0x04).is_err());
    }

    #[test]
    fn test_iris_image_format_strict() {
        assert!(IrisImageFormat::from_value(0x000A).is_ok());
        assert!(IrisImageFormat::from_value(0x000C).is_err());
    }
}

//! Enumerations specific to face (ISO/IEC 19794-5) records

use crate::error::{ReadError, Result};

/// Gender of the captured subject (1 byte)
///
/// Lenient: values outside the defined table fall back to `Unspecified`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Gender {
    #[default]
    Unspecified,
    Male,
    Female,
    Unknown,
}
impl Gender {
    #[must_use]
    pub fn value(&self) -> u8 {
        match self {
            Self::Unspecified => 0x00,
            Self::Male => 0x01,
            Self::Female => 0x02,
            Self::Unknown => 0xFF,
        }
    }

    #[must_use]
    pub fn from_value(value: u8) -> Self {
        match value {
            0x01 => Self::Male,
            0x02 => Self::Female,
            0xFF => Self::Unknown,
            _ => Self::Unspecified,
        }
    }
}

/// Eye colour of the captured subject (1 byte), lenient
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EyeColour {
    #[default]
    Unspecified,
    Black,
    Blue,
    Brown,
    Grey,
    Green,
    MultiColoured,
    Pink,
    Unknown,
}
impl EyeColour {
    #[must_use]
    pub fn value(&self) -> u8 {
        match self {
            Self::Unspecified => 0x00,
            Self::Black => 0x01,
            Self::Blue => 0x02,
            Self::Brown => 0x03,
            Self::Grey => 0x04,
            Self::Green => 0x05,
            Self::MultiColoured => 0x06,
            Self::Pink => 0x07,
            Self::Unknown => 0xFF,
        }
    }

    #[must_use]
    pub fn from_value(value: u8) -> Self {
        match value {
            0x01 => Self::Black,
            0x02 => Self::Blue,
            0x03 => Self::Brown,
            0x04 => Self::Grey,
            0x05 => Self::Green,
            0x06 => Self::MultiColoured,
            0x07 => Self::Pink,
            0xFF => Self::Unknown,
            _ => Self::Unspecified,
        }
    }
}

/// Hair colour of the captured subject (1 byte), lenient
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HairColour {
    #[default]
    Unspecified,
    Bald,
    Black,
    Blonde,
    Brown,
    Grey,
    White,
    Red,
    Unknown,
}
impl HairColour {
    #[must_use]
    pub fn value(&self) -> u8 {
        match self {
            Self::Unspecified => 0x00,
            Self::Bald => 0x01,
            Self::Black => 0x02,
            Self::Blonde => 0x03,
            Self::Brown => 0x04,
            Self::Grey => 0x05,
            Self::White => 0x06,
            Self::Red => 0x07,
            Self::Unknown => 0xFF,
        }
    }

    #[must_use]
    pub fn from_value(value: u8) -> Self {
        match value {
            0x01 => Self::Bald,
            0x02 => Self::Black,
            0x03 => Self::Blonde,
            0x04 => Self::Brown,
            0x05 => Self::Grey,
            0x06 => Self::White,
            0x07 => Self::Red,
            0xFF => Self::Unknown,
            _ => Self::Unspecified,
        }
    }
}

/// 24-bit feature mask describing properties of the captured face
///
/// Bits 0 through 10 are defined by the standard; the remaining bits are
/// reserved and must be zero on the wire. Strict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FeatureMask(u32);
impl FeatureMask {
    pub const FEATURES_SPECIFIED: u32 = 0x00_0001;
    pub const GLASSES: u32 = 0x00_0002;
    pub const MOUSTACHE: u32 = 0x00_0004;
    pub const BEARD: u32 = 0x00_0008;
    pub const TEETH_VISIBLE: u32 = 0x00_0010;
    pub const BLINK: u32 = 0x00_0020;
    pub const MOUTH_OPEN: u32 = 0x00_0040;
    pub const LEFT_EYE_PATCH: u32 = 0x00_0080;
    pub const RIGHT_EYE_PATCH: u32 = 0x00_0100;
    pub const DARK_GLASSES: u32 = 0x00_0200;
    pub const MEDICAL_CONDITION: u32 = 0x00_0400;

    /// Union of all defined bits; everything above is reserved
    pub const DEFINED_BITS: u32 = 0x00_07FF;

    #[must_use]
    pub fn new(bits: u32) -> Self {
        Self(bits & Self::DEFINED_BITS)
    }

    #[must_use]
    pub fn value(&self) -> u32 {
        self.0
    }

    pub fn from_value(value: u32) -> Result<Self> {
        if value & !Self::DEFINED_BITS != 0 {
            return Err(ReadError::InvalidFieldValue {
                field: "feature mask",
                value,
            }
            .into());
        }
        Ok(Self(value))
    }

    #[must_use]
    pub fn contains(&self, bit: u32) -> bool {
        self.0 & bit != 0
    }
}

/// Facial expression (2 bytes)
///
/// Values 0 through 7 are defined; 0x0100 and above are vendor-assigned and
/// pass through raw. Lenient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Expression(pub u16);
impl Expression {
    pub const UNSPECIFIED: Self = Self(0x0000);
    pub const NEUTRAL: Self = Self(0x0001);
    pub const SMILE_CLOSED_JAW: Self = Self(0x0002);
    pub const SMILE_OPEN_JAW: Self = Self(0x0003);
    pub const RAISED_EYEBROWS: Self = Self(0x0004);
    pub const EYES_LOOKING_AWAY: Self = Self(0x0005);
    pub const SQUINTING: Self = Self(0x0006);
    pub const FROWNING: Self = Self(0x0007);

    /// First vendor-assignable value
    pub const VENDOR_BASE: u16 = 0x0100;

    #[must_use]
    pub fn value(&self) -> u16 {
        self.0
    }

    #[must_use]
    pub fn from_value(value: u16) -> Self {
        Self(value)
    }

    /// Whether the value lies in a range the standard assigns meaning to
    #[must_use]
    pub fn is_assigned(&self) -> bool {
        self.0 <= Self::FROWNING.0 || self.0 >= Self::VENDOR_BASE
    }
}

/// Kind of face image carried by the representation (1 byte)
///
/// Strict: the table is closed. The 3D variants signal that the
/// representation data carries a trailing extended-data block after the
/// compressed image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaceImageType {
    Basic,
    FullFrontal,
    TokenFrontal,
    PostProcessedFrontal,
    Basic3d,
    FullFrontal3d,
    TokenFrontal3d,
}
impl FaceImageType {
    #[must_use]
    pub fn value(&self) -> u8 {
        match self {
            Self::Basic => 0x00,
            Self::FullFrontal => 0x01,
            Self::TokenFrontal => 0x02,
            Self::PostProcessedFrontal => 0x03,
            Self::Basic3d => 0x80,
            Self::FullFrontal3d => 0x81,
            Self::TokenFrontal3d => 0x82,
        }
    }

    pub fn from_value(value: u8) -> Result<Self> {
        match value {
            0x00 => Ok(Self::Basic),
            0x01 => Ok(Self::FullFrontal),
            0x02 => Ok(Self::TokenFrontal),
            0x03 => Ok(Self::PostProcessedFrontal),
            0x80 => Ok(Self::Basic3d),
            0x81 => Ok(Self::FullFrontal3d),
            0x82 => Ok(Self::TokenFrontal3d),
            _ => Err(ReadError::InvalidFieldValue {
                field: "face image type",
                value: u32::from(value),
            }
            .into()),
        }
    }

    /// Whether this image type declares 3D content
    #[must_use]
    pub fn is_three_dimensional(&self) -> bool {
        matches!(
            self,
            Self::Basic3d | Self::FullFrontal3d | Self::TokenFrontal3d
        )
    }
}

/// Compression format of the embedded face image (1 byte), strict
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageDataType {
    Jpeg,
    Jpeg2000Lossy,
    Jpeg2000Lossless,
    Png,
}
impl ImageDataType {
    #[must_use]
    pub fn value(&self) -> u8 {
        match self {
            Self::Jpeg => 0x00,
            Self::Jpeg2000Lossy => 0x01,
            Self::Jpeg2000Lossless => 0x02,
            Self::Png => 0x03,
        }
    }

    pub fn from_value(value: u8) -> Result<Self> {
        match value {
            0x00 => Ok(Self::Jpeg),
            0x01 => Ok(Self::Jpeg2000Lossy),
            0x02 => Ok(Self::Jpeg2000Lossless),
            0x03 => Ok(Self::Png),
            _ => Err(ReadError::InvalidFieldValue {
                field: "image data type",
                value: u32::from(value),
            }
            .into()),
        }
    }

    #[must_use]
    pub fn is_lossless(&self) -> bool {
        matches!(self, Self::Jpeg2000Lossless | Self::Png)
    }
}

/// Colour space of the face image (1 byte)
///
/// Values 0 through 4 are defined, 0x80 through 0xFF are vendor-assigned and
/// preserved verbatim, anything between is reserved and rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColourSpace {
    #[default]
    Unspecified,
    Rgb24,
    Yuv422,
    Greyscale8,
    Other,
    Vendor(u8),
}
impl ColourSpace {
    #[must_use]
    pub fn value(&self) -> u8 {
        match self {
            Self::Unspecified => 0x00,
            Self::Rgb24 => 0x01,
            Self::Yuv422 => 0x02,
            Self::Greyscale8 => 0x03,
            Self::Other => 0x04,
            Self::Vendor(v) => *v,
        }
    }

    pub fn from_value(value: u8) -> Result<Self> {
        match value {
            0x00 => Ok(Self::Unspecified),
            0x01 => Ok(Self::Rgb24),
            0x02 => Ok(Self::Yuv422),
            0x03 => Ok(Self::Greyscale8),
            0x04 => Ok(Self::Other),
            0x80..=0xFF => Ok(Self::Vendor(value)),
            _ => Err(ReadError::InvalidFieldValue {
                field: "colour space",
                value: u32::from(value),
            }
            .into()),
        }
    }
}

/// Cross reference to a co-captured representation (1 byte)
///
/// With exactly one representation per record there is nothing to reference,
/// so only the basic (no reference) value is accepted. Strict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CrossReference {
    #[default]
    Basic,
}
impl CrossReference {
    #[must_use]
    pub fn value(&self) -> u8 {
        0x00
    }

    pub fn from_value(value: u8) -> Result<Self> {
        match value {
            0x00 => Ok(Self::Basic),
            _ => Err(ReadError::InvalidFieldValue {
                field: "cross reference",
                value: u32::from(value),
            }
            .into()),
        }
    }
}

/// Bitmask of processing applied to the image after acquisition (2 bytes)
///
/// Lenient: unknown bits pass through raw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PostAcquisitionProcessing(pub u16);
impl PostAcquisitionProcessing {
    pub const ROTATED: u16 = 0x0001;
    pub const CROPPED: u16 = 0x0002;
    pub const DOWN_SAMPLED: u16 = 0x0004;
    pub const WHITE_BALANCE_ADJUSTED: u16 = 0x0008;
    pub const MULTIPLY_COMPRESSED: u16 = 0x0010;
    pub const INTERPOLATED: u16 = 0x0020;
    pub const CONTRAST_STRETCHED: u16 = 0x0040;
    pub const POSE_CORRECTED: u16 = 0x0080;

    #[must_use]
    pub fn value(&self) -> u16 {
        self.0
    }

    #[must_use]
    pub fn from_value(value: u16) -> Self {
        Self(value)
    }

    #[must_use]
    pub fn contains(&self, bit: u16) -> bool {
        self.0 & bit != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gender_lenient_fallback() {
        assert_eq!(Gender::from_value(0x01), Gender::Male);
        assert_eq!(Gender::from_value(0xFF), Gender::Unknown);
        assert_eq!(Gender::from_value(0x42), Gender::Unspecified);
    }

    #[test]
    fn test_feature_mask_reserved_bits_rejected() {
        assert!(FeatureMask::from_value(FeatureMask::GLASSES | FeatureMask::BEARD).is_ok());
        assert!(FeatureMask::from_value(0x00_0800).is_err());
        assert!(FeatureMask::from_value(0x80_0000).is_err());
    }

    #[test]
    fn test_face_image_type_strict() {
        assert!(FaceImageType::from_value(0x02).is_ok());
        assert!(FaceImageType::from_value(0x04).is_err());
        assert!(FaceImageType::from_value(0x81).unwrap().is_three_dimensional());
        assert!(!FaceImageType::from_value(0x01).unwrap().is_three_dimensional());
    }

    #[test]
    fn test_image_data_type_lossless_split() {
        assert!(!ImageDataType::Jpeg.is_lossless());
        assert!(!ImageDataType::Jpeg2000Lossy.is_lossless());
        assert!(ImageDataType::Jpeg2000Lossless.is_lossless());
        assert!(ImageDataType::Png.is_lossless());
        assert!(ImageDataType::from_value(0x04).is_err());
    }

    #[test]
    fn test_colour_space_vendor_range() {
        assert_eq!(ColourSpace::from_value(0x03).unwrap(), ColourSpace::Greyscale8);
        assert_eq!(ColourSpace::from_value(0x9A).unwrap(), ColourSpace::Vendor(0x9A));
        assert!(ColourSpace::from_value(0x10).is_err());
    }

    #[test]
    fn test_cross_reference_only_basic() {
        assert!(CrossReference::from_value(0x00).is_ok());
        assert!(CrossReference::from_value(0x01).is_err());
    }

    #[test]
    fn test_expression_assigned_ranges() {
        assert!(Expression::NEUTRAL.is_assigned());
        assert!(Expression::from_value(0x0150).is_assigned());
        assert!(!Expression::from_value(0x0042).is_assigned());
    }
}

//! Enumerations shared by every modality's general and representation headers

use crate::error::{ReadError, Result};
use crate::modality::Modality;

/// Format identifier opening every record: four ASCII bytes, NUL terminated
///
/// `"FAC\0"` for face records, `"IIR\0"` for iris records, `"FIR\0"` for
/// finger records. Strict: any other tag is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatIdentifier {
    Face,
    Iris,
    Finger,
}
impl FormatIdentifier {
    /// The identifier mandated for records of the given modality
    #[must_use]
    pub fn for_modality(modality: Modality) -> Self {
        match modality {
            Modality::Face => Self::Face,
            Modality::Iris => Self::Iris,
            Modality::Finger => Self::Finger,
        }
    }

    /// The modality this identifier declares
    #[must_use]
    pub fn modality(&self) -> Modality {
        match self {
            Self::Face => Modality::Face,
            Self::Iris => Modality::Iris,
            Self::Finger => Modality::Finger,
        }
    }

    /// Canonical 4-byte wire value ("FAC\0" / "IIR\0" / "FIR\0" big-endian)
    #[must_use]
    pub fn value(&self) -> u32 {
        match self {
            Self::Face => 0x4641_4300,
            Self::Iris => 0x4949_5200,
            Self::Finger => 0x4649_5200,
        }
    }

    pub fn from_value(value: u32) -> Result<Self> {
        match value {
            0x4641_4300 => Ok(Self::Face),
            0x4949_5200 => Ok(Self::Iris),
            0x4649_5200 => Ok(Self::Finger),
            _ => Err(ReadError::InvalidFieldValue {
                field: "format identifier",
                value,
            }
            .into()),
        }
    }
}

/// Version number field: four ASCII digit bytes, NUL terminated
///
/// The 2011 editions carry `"030\0"` for face and `"020\0"` for iris and
/// finger. Strict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionNumber {
    V030,
    V020,
}
impl VersionNumber {
    /// The version mandated for records of the given modality
    #[must_use]
    pub fn for_modality(modality: Modality) -> Self {
        match modality {
            Modality::Face => Self::V030,
            Modality::Iris | Modality::Finger => Self::V020,
        }
    }

    /// Canonical 4-byte wire value ("030\0" / "020\0" big-endian)
    #[must_use]
    pub fn value(&self) -> u32 {
        match self {
            Self::V030 => 0x3033_3000,
            Self::V020 => 0x3032_3000,
        }
    }

    pub fn from_value(value: u32) -> Result<Self> {
        match value {
            0x3033_3000 => Ok(Self::V030),
            0x3032_3000 => Ok(Self::V020),
            _ => Err(ReadError::InvalidFieldValue {
                field: "version number",
                value,
            }
            .into()),
        }
    }
}

/// Certification flag in the general header
///
/// The standard mandates zero; strict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CertificationFlag {
    #[default]
    Unspecified,
}
impl CertificationFlag {
    #[must_use]
    pub fn value(&self) -> u8 {
        0x00
    }

    pub fn from_value(value: u8) -> Result<Self> {
        match value {
            0x00 => Ok(Self::Unspecified),
            _ => Err(ReadError::InvalidFieldValue {
                field: "certification flag",
                value: u32::from(value),
            }
            .into()),
        }
    }
}

/// Temporal semantics of a face record's representations (2 bytes)
///
/// Zero declares a single still image. Lenient: the remaining range carries
/// relationships between multiple representations and passes through raw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TemporalSemantics(pub u16);
impl TemporalSemantics {
    pub const STILL_IMAGE: Self = Self(0x0000);

    #[must_use]
    pub fn value(&self) -> u16 {
        self.0
    }

    #[must_use]
    pub fn from_value(value: u16) -> Self {
        Self(value)
    }
}

/// Class of capture device that produced the sample (1 byte)
///
/// Lenient: vendor-assigned codes fall back to `Unspecified` rather than
/// failing the decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaptureDeviceTechnology {
    #[default]
    Unspecified,
    StaticPhotographUnknownSource,
    StaticPhotographDigitalCamera,
    StaticPhotographScanner,
    VideoFrameUnknownSource,
    VideoFrameAnalogueCamera,
    VideoFrameDigitalCamera,
    Unknown,
}
impl CaptureDeviceTechnology {
    #[must_use]
    pub fn value(&self) -> u8 {
        match self {
            Self::Unspecified => 0x00,
            Self::StaticPhotographUnknownSource => 0x01,
            Self::StaticPhotographDigitalCamera => 0x02,
            Self::StaticPhotographScanner => 0x03,
            Self::VideoFrameUnknownSource => 0x04,
            Self::VideoFrameAnalogueCamera => 0x05,
            Self::VideoFrameDigitalCamera => 0x06,
            Self::Unknown => 0x07,
        }
    }

    #[must_use]
    pub fn from_value(value: u8) -> Self {
        match value {
            0x01 => Self::StaticPhotographUnknownSource,
            0x02 => Self::StaticPhotographDigitalCamera,
            0x03 => Self::StaticPhotographScanner,
            0x04 => Self::VideoFrameUnknownSource,
            0x05 => Self::VideoFrameAnalogueCamera,
            0x06 => Self::VideoFrameDigitalCamera,
            0x07 => Self::Unknown,
            other => {
                if other != 0x00 {
                    log::debug!("unrecognized capture device technology {other:#x}, treating as unspecified");
                }
                Self::Unspecified
            }
        }
    }
}

/// CBEFF-registered identifier of the capture device vendor (2 bytes)
///
/// The whole range is vendor-assignable, so the value passes through raw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CaptureDeviceVendor(pub u16);
impl CaptureDeviceVendor {
    pub const UNSPECIFIED: Self = Self(0x0000);

    #[must_use]
    pub fn value(&self) -> u16 {
        self.0
    }

    #[must_use]
    pub fn from_value(value: u16) -> Self {
        Self(value)
    }

    #[must_use]
    pub fn is_unspecified(&self) -> bool {
        self.0 == 0
    }
}

/// Vendor-assigned identifier of the capture device model (2 bytes)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CaptureDeviceType(pub u16);
impl CaptureDeviceType {
    pub const UNSPECIFIED: Self = Self(0x0000);

    #[must_use]
    pub fn value(&self) -> u16 {
        self.0
    }

    #[must_use]
    pub fn from_value(value: u16) -> Self {
        Self(value)
    }

    #[must_use]
    pub fn is_unspecified(&self) -> bool {
        self.0 == 0
    }
}

/// CBEFF-registered identifier of the vendor of a quality algorithm (2 bytes)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct QualityAlgorithmVendor(pub u16);
impl QualityAlgorithmVendor {
    pub const UNSPECIFIED: Self = Self(0x0000);

    #[must_use]
    pub fn value(&self) -> u16 {
        self.0
    }

    #[must_use]
    pub fn from_value(value: u16) -> Self {
        Self(value)
    }
}

/// Vendor-assigned identifier of the quality scoring algorithm (2 bytes)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct QualityAlgorithmId(pub u16);
impl QualityAlgorithmId {
    pub const UNSPECIFIED: Self = Self(0x0000);

    #[must_use]
    pub fn value(&self) -> u16 {
        self.0
    }

    #[must_use]
    pub fn from_value(value: u16) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, ReadError};

    #[test]
    fn test_format_identifier_ascii_values() {
        assert_eq!(
            FormatIdentifier::Face.value().to_be_bytes(),
            *b"FAC\0"
        );
        assert_eq!(
            FormatIdentifier::Iris.value().to_be_bytes(),
            *b"IIR\0"
        );
        assert_eq!(
            FormatIdentifier::Finger.value().to_be_bytes(),
            *b"FIR\0"
        );
    }

    #[test]
    fn test_format_identifier_strict() {
        assert!(FormatIdentifier::from_value(0x4641_4300).is_ok());
        let err = FormatIdentifier::from_value(0x0000_0000).unwrap_err();
        assert!(matches!(
            err,
            Error::ReadError(ReadError::InvalidFieldValue {
                field: "format identifier",
                ..
            })
        ));
    }

    #[test]
    fn test_version_number_per_modality() {
        assert_eq!(
            VersionNumber::for_modality(Modality::Face).value().to_be_bytes(),
            *b"030\0"
        );
        assert_eq!(
            VersionNumber::for_modality(Modality::Iris).value().to_be_bytes(),
            *b"020\0"
        );
        assert!(VersionNumber::from_value(0x3031_3000).is_err());
    }

    #[test]
    fn test_certification_flag_strict() {
        assert!(CertificationFlag::from_value(0).is_ok());
        assert!(CertificationFlag::from_value(1).is_err());
    }

    #[test]
    fn test_device_technology_lenient_fallback() {
        assert_eq!(
            CaptureDeviceTechnology::from_value(0x06),
            CaptureDeviceTechnology::VideoFrameDigitalCamera
        );
        // vendor-assigned codes fall back instead of failing the decode
        assert_eq!(
            CaptureDeviceTechnology::from_value(0x9C),
            CaptureDeviceTechnology::Unspecified
        );
    }

    #[test]
    fn test_vendor_codes_pass_through_raw() {
        assert_eq!(CaptureDeviceVendor::from_value(0xBEEF).value(), 0xBEEF);
        assert_eq!(QualityAlgorithmId::from_value(0x0101).value(), 0x0101);
        assert!(CaptureDeviceVendor::UNSPECIFIED.is_unspecified());
    }
}

//! Field enumerations for biometric record headers
//!
//! Each enumeration exposes the canonical integer written to the wire and a
//! from-wire constructor. Two lookup policies coexist deliberately, mirroring
//! the intent of the underlying standards:
//!
//! - **Strict** fields (`from_value -> Result<Self>`) reject unknown values,
//!   because the standard defines a closed table and anything else means the
//!   record cannot be interpreted.
//! - **Lenient** fields (`from_value -> Self`) fall back to an unspecified
//!   variant or carry the raw value, because the standard declares the range
//!   vendor-assignable and a decoder must not reject a record merely for
//!   carrying a vendor code it does not recognize.

mod common;
mod face;
mod iris;

pub use common::{
    CaptureDeviceTechnology, CaptureDeviceType, CaptureDeviceVendor, CertificationFlag,
    FormatIdentifier, QualityAlgorithmId, QualityAlgorithmVendor, TemporalSemantics, VersionNumber,
};
pub use face::{
    ColourSpace, CrossReference, Expression, EyeColour, FaceImageType, FeatureMask, Gender,
    HairColour, ImageDataType, PostAcquisitionProcessing,
};
pub use iris::{
    pack_properties, unpack_properties, IrisCompression, IrisImageFormat, IrisImageType,
    IrisProperties, Orientation,
};

//! Wire blocks of a biometric data interchange record
//!
//! Each block reads itself from a stream (`from_reader`), writes itself back
//! (`write_bytes`) and reports its serialized size (`wire_len`). Sizes are
//! always computed from live field values so that mutating a block before
//! encoding automatically produces consistent headers; no length is ever
//! cached. Blocks that support header-only introspection additionally expose
//! `skip_from`, which steps over fixed-size fields without allocating.

mod bdir;
mod face;
mod general;
mod image;
mod iris;
mod quality;
mod representation;
mod timestamp;

pub use bdir::Bdir;
pub use face::{FaceInfo, FacialInformation, ImageInformation, LandmarkPoint};
pub use general::{GeneralHeader, ModalityField};
pub use image::{ImageData, RepresentationData};
pub use iris::{IrisImageInformation, IrisInfo};
pub use quality::{QualityBlock, SCORE_UNREPORTED};
pub use representation::{
    CaptureDevice, ModalityInfo, Representation, RepresentationHeader, RepresentationSummary,
};
pub use timestamp::CaptureDateTime;

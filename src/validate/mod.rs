//! Validation engines for decoded or about-to-be-encoded records
//!
//! One stateless validator per modality, each exposing independent pure
//! predicates over record fields plus purpose-aware checks that encode the
//! capture-profile policy (authentication vs registration). Every predicate
//! is total over its documented input domain: in-range and out-of-range
//! values alike come back as a boolean, never an error. Only parsing a
//! purpose or modality token can fail, and that is a typed error raised
//! before any predicate runs.
//!
//! The codec never invokes these checks implicitly. Decoding accepts any
//! structurally well-formed record; whether a policy-violating record is
//! fatal is the caller's decision.

mod face;
mod iris;

pub use face::FaceValidator;
pub use iris::IrisValidator;

use crate::modality::Modality;
use crate::policy::Purpose;
use crate::record::{Bdir, CaptureDateTime, QualityBlock, SCORE_UNREPORTED};
use crate::fields::{CaptureDeviceType, CaptureDeviceVendor};

/// Checks a decoded record against the validator for its own modality
#[must_use]
pub fn conforms(record: &Bdir, purpose: Purpose) -> bool {
    violations(record, purpose).is_empty()
}

/// Collects every profile violation in a decoded record
///
/// Dispatches on the record's declared modality; the per-modality validators
/// expose the same checks individually.
#[must_use]
pub fn violations(record: &Bdir, purpose: Purpose) -> Vec<String> {
    match record.modality() {
        Modality::Face => FaceValidator::new().violations(record, purpose),
        Modality::Iris => IrisValidator::new().violations(record, purpose),
        Modality::Finger => vec![format!("unsupported modality {}", record.modality())],
    }
}

pub(crate) fn quality_score_in_range(score: u8) -> bool {
    score <= 100 || score == SCORE_UNREPORTED
}

pub(crate) fn quality_blocks_in_range(blocks: &[QualityBlock]) -> bool {
    blocks.len() <= usize::from(u8::MAX) && blocks.iter().all(|b| quality_score_in_range(b.score))
}

/// An unspecified vendor forces an unspecified device type
pub(crate) fn device_type_consistent(
    device_type: CaptureDeviceType,
    vendor: CaptureDeviceVendor,
) -> bool {
    !vendor.is_unspecified() || device_type.is_unspecified()
}

pub(crate) fn datetime_in_range(datetime: &CaptureDateTime) -> bool {
    if datetime.is_unknown() {
        return true;
    }
    (1..=12).contains(&datetime.month)
        && (1..=31).contains(&datetime.day)
        && datetime.hour <= 23
        && datetime.minute <= 59
        && datetime.second <= 59
        && datetime.millisecond <= 999
}

pub(crate) fn record_length_matches(declared: usize, actual: usize) -> bool {
    declared == actual
}

pub(crate) fn single_representation(count: u16) -> bool {
    count == 1
}

//! Validation engine for face (ISO/IEC 19794-5) records

use crate::fields::{
    CaptureDeviceType, CaptureDeviceVendor, Expression, FaceImageType, FormatIdentifier,
    ImageDataType, VersionNumber,
};
use crate::policy::Purpose;
use crate::record::{Bdir, CaptureDateTime, LandmarkPoint, ModalityInfo, QualityBlock};

/// Stateless validator for face records
///
/// Safe to share freely or construct per call; it carries no state.
#[derive(Debug, Clone, Copy, Default)]
pub struct FaceValidator;
impl FaceValidator {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    #[must_use]
    pub fn is_valid_format_identifier(&self, format: FormatIdentifier) -> bool {
        format == FormatIdentifier::Face
    }

    #[must_use]
    pub fn is_valid_version_number(&self, version: VersionNumber) -> bool {
        version == VersionNumber::V030
    }

    /// The declared record length must equal the actual serialized size
    #[must_use]
    pub fn is_valid_record_length(&self, declared: usize, actual: usize) -> bool {
        super::record_length_matches(declared, actual)
    }

    #[must_use]
    pub fn is_valid_no_of_representations(&self, count: u16) -> bool {
        super::single_representation(count)
    }

    #[must_use]
    pub fn is_valid_capture_datetime(&self, datetime: &CaptureDateTime) -> bool {
        super::datetime_in_range(datetime)
    }

    /// 0 through 100 inclusive, or 255 for "not reported"
    #[must_use]
    pub fn is_valid_quality_score(&self, score: u8) -> bool {
        super::quality_score_in_range(score)
    }

    #[must_use]
    pub fn is_valid_quality_blocks(&self, blocks: &[QualityBlock]) -> bool {
        super::quality_blocks_in_range(blocks)
    }

    /// A concrete device type requires a concrete vendor
    #[must_use]
    pub fn is_valid_capture_device_type(
        &self,
        device_type: CaptureDeviceType,
        vendor: CaptureDeviceVendor,
    ) -> bool {
        super::device_type_consistent(device_type, vendor)
    }

    #[must_use]
    pub fn is_valid_spatial_sampling_level(&self, level: u8) -> bool {
        level <= 7
    }

    #[must_use]
    pub fn is_valid_pose_angle(&self, angle: i8) -> bool {
        (-90..=90).contains(&angle)
    }

    #[must_use]
    pub fn is_valid_pose_angle_uncertainty(&self, uncertainty: u8) -> bool {
        uncertainty <= 90
    }

    #[must_use]
    pub fn is_valid_expression(&self, expression: Expression) -> bool {
        expression.is_assigned()
    }

    #[must_use]
    pub fn is_valid_image_dimensions(&self, width: u16, height: u16) -> bool {
        width > 0 && height > 0
    }

    #[must_use]
    pub fn is_valid_landmark_points(&self, landmarks: &[LandmarkPoint]) -> bool {
        landmarks.len() <= usize::from(u16::MAX)
    }

    /// Authentication records carry lossy imagery, registration records
    /// lossless imagery
    #[must_use]
    pub fn is_valid_image_compression_type(
        &self,
        purpose: Purpose,
        data_type: ImageDataType,
    ) -> bool {
        data_type.is_lossless() == purpose.requires_lossless()
    }

    /// Authentication expects the token frontal geometry, registration the
    /// full frontal one
    #[must_use]
    pub fn is_valid_image_type(&self, purpose: Purpose, image_type: FaceImageType) -> bool {
        match purpose {
            Purpose::Auth => matches!(
                image_type,
                FaceImageType::TokenFrontal | FaceImageType::TokenFrontal3d
            ),
            Purpose::Registration => matches!(
                image_type,
                FaceImageType::FullFrontal | FaceImageType::FullFrontal3d
            ),
        }
    }

    /// Whether the record satisfies every face predicate for the purpose
    #[must_use]
    pub fn conforms(&self, record: &Bdir, purpose: Purpose) -> bool {
        self.violations(record, purpose).is_empty()
    }

    /// Every predicate failure in the record, as diagnostic strings
    #[must_use]
    pub fn violations(&self, record: &Bdir, purpose: Purpose) -> Vec<String> {
        let mut found = Vec::new();
        if !self.is_valid_format_identifier(record.general.format) {
            found.push("format identifier is not a face record".to_string());
        }
        if !self.is_valid_version_number(record.general.version) {
            found.push("version number is not the face edition".to_string());
        }
        if !self.is_valid_no_of_representations(record.general.representation_count) {
            found.push(format!(
                "number of representations is {}, expected 1",
                record.general.representation_count
            ));
        }

        let header = &record.representation.header;
        if !self.is_valid_capture_datetime(&header.datetime) {
            found.push("capture datetime out of range".to_string());
        }
        if !self.is_valid_quality_blocks(&header.quality_blocks) {
            found.push("quality score out of range".to_string());
        }
        if !self.is_valid_capture_device_type(header.device.device_type, header.device.vendor) {
            found.push("capture device type set while vendor is unspecified".to_string());
        }

        match &header.info {
            ModalityInfo::Face(info) => {
                for angle in info.facial.pose_angles {
                    if !self.is_valid_pose_angle(angle) {
                        found.push(format!("pose angle {angle} out of range"));
                    }
                }
                for uncertainty in info.facial.pose_angle_uncertainties {
                    if !self.is_valid_pose_angle_uncertainty(uncertainty) {
                        found.push(format!("pose angle uncertainty {uncertainty} out of range"));
                    }
                }
                if !self.is_valid_expression(info.facial.expression) {
                    found.push("expression value lies in a reserved range".to_string());
                }
                if !self.is_valid_landmark_points(&info.landmarks) {
                    found.push("too many landmark points".to_string());
                }
                if !self.is_valid_spatial_sampling_level(info.image_info.spatial_sampling_level) {
                    found.push("spatial sampling level out of range".to_string());
                }
                if !self.is_valid_image_dimensions(info.image_info.width, info.image_info.height) {
                    found.push("image dimensions must be non-zero".to_string());
                }
                if !self.is_valid_image_compression_type(purpose, info.image_info.data_type) {
                    found.push(format!(
                        "image data type {:?} violates the {purpose} compression profile",
                        info.image_info.data_type
                    ));
                }
                if !self.is_valid_image_type(purpose, info.image_info.image_type) {
                    found.push(format!(
                        "face image type {:?} violates the {purpose} profile",
                        info.image_info.image_type
                    ));
                }
            }
            ModalityInfo::Iris(_) => {
                found.push("representation carries iris data in a face record".to_string());
            }
        }
        found
    }
}

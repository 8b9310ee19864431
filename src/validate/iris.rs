//! Validation engine for iris (ISO/IEC 19794-6) records

use crate::fields::{
    CaptureDeviceType, CaptureDeviceVendor, FormatIdentifier, IrisCompression, IrisImageType,
    VersionNumber,
};
use crate::policy::Purpose;
use crate::record::{
    Bdir, CaptureDateTime, IrisImageInformation, ModalityField, ModalityInfo, QualityBlock,
};

/// Stateless validator for iris records
#[derive(Debug, Clone, Copy, Default)]
pub struct IrisValidator;
impl IrisValidator {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    #[must_use]
    pub fn is_valid_format_identifier(&self, format: FormatIdentifier) -> bool {
        format == FormatIdentifier::Iris
    }

    #[must_use]
    pub fn is_valid_version_number(&self, version: VersionNumber) -> bool {
        version == VersionNumber::V020
    }

    #[must_use]
    pub fn is_valid_record_length(&self, declared: usize, actual: usize) -> bool {
        super::record_length_matches(declared, actual)
    }

    #[must_use]
    pub fn is_valid_no_of_representations(&self, count: u16) -> bool {
        super::single_representation(count)
    }

    #[must_use]
    pub fn is_valid_eyes_present(&self, eyes: u8) -> bool {
        eyes <= 2
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
    pub fn is_valid_bit_depth(&self, bit_depth: u8) -> bool {
        (8..=16).contains(&bit_depth)
    }

    #[must_use]
    pub fn is_valid_image_dimensions(&self, width: u16, height: u16) -> bool {
        width > 0 && height > 0
    }

    /// Coordinate bounds must be ordered; all-zero pairs mean unassessed and
    /// pass
    #[must_use]
    pub fn is_valid_coordinate_bounds(&self, info: &IrisImageInformation) -> bool {
        let ordered = |smallest: u16, largest: u16| {
            (smallest == 0 && largest == 0) || smallest <= largest
        };
        ordered(info.centre_x_smallest, info.centre_x_largest)
            && ordered(info.centre_y_smallest, info.centre_y_largest)
            && ordered(info.diameter_smallest, info.diameter_largest)
    }

    /// Authentication records carry lossy imagery, registration records
    /// lossless imagery
    #[must_use]
    pub fn is_valid_image_compression_type(
        &self,
        purpose: Purpose,
        compression: IrisCompression,
    ) -> bool {
        match purpose {
            Purpose::Auth => compression == IrisCompression::Lossy,
            Purpose::Registration => compression == IrisCompression::Lossless,
        }
    }

    /// Authentication requires the cropped-and-masked image, registration the
    /// cropped but unmasked one
    #[must_use]
    pub fn is_valid_image_type(&self, purpose: Purpose, image_type: IrisImageType) -> bool {
        match purpose {
            Purpose::Auth => image_type == IrisImageType::CroppedAndMasked,
            Purpose::Registration => image_type == IrisImageType::Cropped,
        }
    }

    /// Whether the record satisfies every iris predicate for the purpose
    #[must_use]
    pub fn conforms(&self, record: &Bdir, purpose: Purpose) -> bool {
        self.violations(record, purpose).is_empty()
    }

    /// Every predicate failure in the record, as diagnostic strings
    #[must_use]
    pub fn violations(&self, record: &Bdir, purpose: Purpose) -> Vec<String> {
        let mut found = Vec::new();
        if !self.is_valid_format_identifier(record.general.format) {
            found.push("format identifier is not an iris record".to_string());
        }
        if !self.is_valid_version_number(record.general.version) {
            found.push("version number is not the iris edition".to_string());
        }
        if !self.is_valid_no_of_representations(record.general.representation_count) {
            found.push(format!(
                "number of representations is {}, expected 1",
                record.general.representation_count
            ));
        }
        if let ModalityField::Iris { eyes_present } = record.general.modality_field {
            if !self.is_valid_eyes_present(eyes_present) {
                found.push(format!("{eyes_present} eyes represented, at most 2"));
            }
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
            ModalityInfo::Iris(info) => {
                let image = &info.image_info;
                if !self.is_valid_bit_depth(image.bit_depth) {
                    found.push(format!("bit depth {} out of range", image.bit_depth));
                }
                if !self.is_valid_image_dimensions(image.width, image.height) {
                    found.push("image dimensions must be non-zero".to_string());
                }
                if !self.is_valid_coordinate_bounds(image) {
                    found.push("iris coordinate bounds are not ordered".to_string());
                }
                if !self.is_valid_image_compression_type(purpose, image.properties.compression) {
                    found.push(format!(
                        "compression type {:?} violates the {purpose} profile",
                        image.properties.compression
                    ));
                }
                if !self.is_valid_image_type(purpose, image.image_type) {
                    found.push(format!(
                        "iris image type {:?} violates the {purpose} profile",
                        image.image_type
                    ));
                }
            }
            ModalityInfo::Face(_) => {
                found.push("representation carries face data in an iris record".to_string());
            }
        }
        found
    }
}

//! Encoding facade: capture metadata plus image bytes in, standard bytes out
//!
//! The encoder owns the purpose profile: it fills standard-mandated defaults
//! (one representation, certification flag zero), takes pixel dimensions from
//! the external image probe, and derives the compression and cropping fields
//! from the selected purpose. It never inspects image pixels itself.

use crate::error::{PolicyError, Result, WriteError};
use crate::fields::{
    ColourSpace, CrossReference, FaceImageType, ImageDataType, IrisCompression, IrisImageFormat,
    IrisImageType, IrisProperties, Orientation, PostAcquisitionProcessing, TemporalSemantics,
};
use crate::modality::Modality;
use crate::policy::Purpose;
use crate::record::{
    Bdir, CaptureDateTime, CaptureDevice, FaceInfo, FacialInformation, GeneralHeader, ImageData,
    ImageInformation, IrisImageInformation, IrisInfo, LandmarkPoint, ModalityField, ModalityInfo,
    QualityBlock, Representation, RepresentationData, RepresentationHeader,
};

/// Pixel-level facts about an opaque compressed image
///
/// Produced by the external image-metadata collaborator; the codec only uses
/// them to fill and cross-check header fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageTraits {
    pub width: u32,
    pub height: u32,
    pub lossless: bool,
}

/// External collaborator that inspects compressed image bytes
///
/// Implementations wrap whatever image libraries the application links; the
/// codec itself never decodes pixels.
#[auto_impl::auto_impl(&, Box, Arc)]
pub trait ImageProbe {
    fn probe(&self, image: &[u8]) -> Result<ImageTraits>;
}

/// Capture-time metadata for one representation
///
/// Every field has a standard-mandated default, so a builder carrying only a
/// capture timestamp produces a valid record. Modality-irrelevant fields are
/// ignored by the encoder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureMetadata {
    pub datetime: CaptureDateTime,
    pub device: CaptureDevice,
    pub quality_blocks: Vec<QualityBlock>,
    pub temporal_semantics: TemporalSemantics,
    pub facial: FacialInformation,
    pub landmarks: Vec<LandmarkPoint>,
    pub face_image_type: Option<FaceImageType>,
    pub image_data_type: Option<ImageDataType>,
    pub colour_space: ColourSpace,
    pub spatial_sampling_level: u8,
    pub post_processing: PostAcquisitionProcessing,
    pub eyes_present: u8,
    pub representation_no: u16,
    pub iris_image_format: Option<IrisImageFormat>,
    pub horizontal_orientation: Orientation,
    pub vertical_orientation: Orientation,
    pub bit_depth: u8,
    pub range: u16,
    pub roll_angle: u16,
    pub roll_angle_uncertainty: u16,
}
impl CaptureMetadata {
    #[must_use]
    pub fn builder() -> CaptureMetadataBuilder {
        CaptureMetadataBuilder::new()
    }
}

/// Builder for [`CaptureMetadata`]
///
/// Only the capture timestamp is mandatory; everything else defaults to the
/// standard's unspecified values.
#[derive(Debug, Clone, Default)]
pub struct CaptureMetadataBuilder {
    datetime: Option<CaptureDateTime>,
    device: CaptureDevice,
    quality_blocks: Vec<QualityBlock>,
    temporal_semantics: TemporalSemantics,
    facial: Option<FacialInformation>,
    landmarks: Vec<LandmarkPoint>,
    face_image_type: Option<FaceImageType>,
    image_data_type: Option<ImageDataType>,
    colour_space: ColourSpace,
    spatial_sampling_level: u8,
    post_processing: PostAcquisitionProcessing,
    eyes_present: Option<u8>,
    representation_no: Option<u16>,
    iris_image_format: Option<IrisImageFormat>,
    bit_depth: Option<u8>,
    range: u16,
    roll_angle: Option<u16>,
    roll_angle_uncertainty: Option<u16>,
}
impl CaptureMetadataBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn datetime(mut self, datetime: CaptureDateTime) -> Self {
        self.datetime = Some(datetime);
        self
    }

    #[must_use]
    pub fn device(mut self, device: CaptureDevice) -> Self {
        self.device = device;
        self
    }

    #[must_use]
    pub fn quality_block(mut self, block: QualityBlock) -> Self {
        self.quality_blocks.push(block);
        self
    }

    #[must_use]
    pub fn temporal_semantics(mut self, semantics: TemporalSemantics) -> Self {
        self.temporal_semantics = semantics;
        self
    }

    #[must_use]
    pub fn facial(mut self, facial: FacialInformation) -> Self {
        self.facial = Some(facial);
        self
    }

    #[must_use]
    pub fn landmark(mut self, landmark: LandmarkPoint) -> Self {
        self.landmarks.push(landmark);
        self
    }

    #[must_use]
    pub fn face_image_type(mut self, image_type: FaceImageType) -> Self {
        self.face_image_type = Some(image_type);
        self
    }

    #[must_use]
    pub fn image_data_type(mut self, data_type: ImageDataType) -> Self {
        self.image_data_type = Some(data_type);
        self
    }

    #[must_use]
    pub fn colour_space(mut self, colour_space: ColourSpace) -> Self {
        self.colour_space = colour_space;
        self
    }

    #[must_use]
    pub fn eyes_present(mut self, eyes: u8) -> Self {
        self.eyes_present = Some(eyes);
        self
    }

    #[must_use]
    pub fn representation_no(mut self, representation_no: u16) -> Self {
        self.representation_no = Some(representation_no);
        self
    }

    #[must_use]
    pub fn iris_image_format(mut self, format: IrisImageFormat) -> Self {
        self.iris_image_format = Some(format);
        self
    }

    #[must_use]
    pub fn bit_depth(mut self, bit_depth: u8) -> Self {
        self.bit_depth = Some(bit_depth);
        self
    }

    #[must_use]
    pub fn roll_angle(mut self, angle: u16, uncertainty: u16) -> Self {
        self.roll_angle = Some(angle);
        self.roll_angle_uncertainty = Some(uncertainty);
        self
    }

    pub fn build(self) -> Result<CaptureMetadata> {
        Ok(CaptureMetadata {
            datetime: if let Some(datetime) = self.datetime {
                datetime
            } else {
                return Err(WriteError::MissingField("capture datetime").into());
            },
            device: self.device,
            quality_blocks: self.quality_blocks,
            temporal_semantics: self.temporal_semantics,
            facial: self.facial.unwrap_or_else(FacialInformation::unspecified),
            landmarks: self.landmarks,
            face_image_type: self.face_image_type,
            image_data_type: self.image_data_type,
            colour_space: self.colour_space,
            spatial_sampling_level: self.spatial_sampling_level,
            post_processing: self.post_processing,
            eyes_present: self.eyes_present.unwrap_or(1),
            representation_no: self.representation_no.unwrap_or(1),
            iris_image_format: self.iris_image_format,
            horizontal_orientation: Orientation::Base,
            vertical_orientation: Orientation::Base,
            bit_depth: self.bit_depth.unwrap_or(8),
            range: self.range,
            roll_angle: self.roll_angle.unwrap_or(0xFFFF),
            roll_angle_uncertainty: self.roll_angle_uncertainty.unwrap_or(0xFFFF),
        })
    }
}

/// Encoding entry point for one modality and purpose
#[derive(Debug, Clone, Copy)]
pub struct BdirEncoder {
    modality: Modality,
    purpose: Purpose,
}
impl BdirEncoder {
    pub fn new(modality: Modality, purpose: Purpose) -> Result<Self> {
        if modality == Modality::Finger {
            return Err(PolicyError::UnsupportedModality(modality).into());
        }
        Ok(Self { modality, purpose })
    }

    /// Builds an encoder from caller-supplied tokens, failing with a typed
    /// error on unknown tokens
    pub fn from_tokens(modality: &str, purpose: &str) -> Result<Self> {
        Self::new(
            modality.parse::<Modality>()?,
            purpose.parse::<Purpose>()?,
        )
    }

    #[must_use]
    pub fn modality(&self) -> Modality {
        self.modality
    }

    #[must_use]
    pub fn purpose(&self) -> Purpose {
        self.purpose
    }

    /// Composes a complete record around the opaque image payload
    ///
    /// The probe supplies pixel dimensions and the lossless/lossy signal; a
    /// probe result contradicting the purpose profile fails before anything
    /// is serialized.
    pub fn encode<P: ImageProbe>(
        &self,
        metadata: &CaptureMetadata,
        image: &[u8],
        probe: &P,
    ) -> Result<Vec<u8>> {
        let traits = probe.probe(image)?;
        if traits.lossless != self.purpose.requires_lossless() {
            return Err(WriteError::CompressionPolicyMismatch {
                purpose: self.purpose,
                lossless: traits.lossless,
            }
            .into());
        }
        let width = u16::try_from(traits.width)
            .map_err(|_| WriteError::OversizedImageDimension(traits.width))?;
        let height = u16::try_from(traits.height)
            .map_err(|_| WriteError::OversizedImageDimension(traits.height))?;

        let record = match self.modality {
            Modality::Face => self.face_record(metadata, image, &traits, width, height)?,
            Modality::Iris => self.iris_record(metadata, image, &traits, width, height),
            Modality::Finger => unreachable!("rejected in constructor"),
        };
        log::debug!(
            "encoded {} record, purpose {}, {} image bytes",
            self.modality,
            self.purpose,
            image.len()
        );
        record.to_vec()
    }

    fn face_record(
        &self,
        metadata: &CaptureMetadata,
        image: &[u8],
        traits: &ImageTraits,
        width: u16,
        height: u16,
    ) -> Result<Bdir> {
        let data_type = metadata.image_data_type.unwrap_or(match self.purpose {
            Purpose::Auth => ImageDataType::Jpeg2000Lossy,
            Purpose::Registration => ImageDataType::Jpeg2000Lossless,
        });
        if data_type.is_lossless() != traits.lossless {
            return Err(WriteError::CompressionPolicyMismatch {
                purpose: self.purpose,
                lossless: traits.lossless,
            }
            .into());
        }
        let image_type = metadata.face_image_type.unwrap_or(match self.purpose {
            Purpose::Auth => FaceImageType::TokenFrontal,
            Purpose::Registration => FaceImageType::FullFrontal,
        });

        let header = RepresentationHeader {
            datetime: metadata.datetime,
            device: metadata.device,
            quality_blocks: metadata.quality_blocks.clone(),
            info: ModalityInfo::Face(FaceInfo {
                facial: metadata.facial,
                landmarks: metadata.landmarks.clone(),
                image_info: ImageInformation {
                    image_type,
                    data_type,
                    width,
                    height,
                    spatial_sampling_level: metadata.spatial_sampling_level,
                    post_processing: metadata.post_processing,
                    cross_reference: CrossReference::Basic,
                    colour_space: metadata.colour_space,
                },
            }),
        };
        Ok(Bdir {
            general: GeneralHeader::new(ModalityField::Face {
                temporal_semantics: metadata.temporal_semantics,
            }),
            representation: Representation {
                header,
                data: RepresentationData::new(image.to_vec()),
            },
        })
    }

    fn iris_record(
        &self,
        metadata: &CaptureMetadata,
        image: &[u8],
        traits: &ImageTraits,
        width: u16,
        height: u16,
    ) -> Bdir {
        let compression = if traits.lossless {
            IrisCompression::Lossless
        } else {
            IrisCompression::Lossy
        };
        let image_format = metadata.iris_image_format.unwrap_or(match self.purpose {
            Purpose::Auth => IrisImageFormat::MonoJpeg2000,
            Purpose::Registration => IrisImageFormat::MonoPng,
        });
        let image_type = match self.purpose {
            Purpose::Auth => IrisImageType::CroppedAndMasked,
            Purpose::Registration => IrisImageType::Cropped,
        };

        let header = RepresentationHeader {
            datetime: metadata.datetime,
            device: metadata.device,
            quality_blocks: metadata.quality_blocks.clone(),
            info: ModalityInfo::Iris(IrisInfo {
                representation_no: metadata.representation_no,
                image_info: IrisImageInformation {
                    image_type,
                    image_format,
                    properties: IrisProperties {
                        horizontal_orientation: metadata.horizontal_orientation,
                        vertical_orientation: metadata.vertical_orientation,
                        compression,
                    },
                    width,
                    height,
                    bit_depth: metadata.bit_depth,
                    range: metadata.range,
                    roll_angle: metadata.roll_angle,
                    roll_angle_uncertainty: metadata.roll_angle_uncertainty,
                    centre_x_smallest: 0,
                    centre_x_largest: 0,
                    centre_y_smallest: 0,
                    centre_y_largest: 0,
                    diameter_smallest: 0,
                    diameter_largest: 0,
                },
            }),
        };
        Bdir {
            general: GeneralHeader::new(ModalityField::Iris {
                eyes_present: metadata.eyes_present,
            }),
            representation: Representation {
                header,
                data: RepresentationData {
                    image_data: ImageData::new(image.to_vec()),
                    extended_data: Vec::new(),
                },
            },
        }
    }
}

/// One-shot facade: compose a record from tokens, metadata and image bytes
pub fn encode_from_image<P: ImageProbe>(
    modality: &str,
    purpose: &str,
    metadata: &CaptureMetadata,
    image: &[u8],
    probe: &P,
) -> Result<Vec<u8>> {
    BdirEncoder::from_tokens(modality, purpose)?.encode(metadata, image, probe)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use anyhow::Result;

    /// Probe stub reporting fixed dimensions and trusting the constructor's
    /// lossless flag
    pub(crate) struct StubProbe {
        pub width: u32,
        pub height: u32,
        pub lossless: bool,
    }
    impl ImageProbe for StubProbe {
        fn probe(&self, _image: &[u8]) -> crate::Result<ImageTraits> {
            Ok(ImageTraits {
                width: self.width,
                height: self.height,
                lossless: self.lossless,
            })
        }
    }

    fn sample_metadata() -> CaptureMetadata {
        CaptureMetadata::builder()
            .datetime(CaptureDateTime {
                year: 2025,
                month: 2,
                day: 1,
                hour: 9,
                minute: 15,
                second: 30,
                millisecond: 0,
            })
            .quality_block(QualityBlock::new(40, 0x0101, 0x0001))
            .build()
            .unwrap()
    }

    #[test]
    fn test_builder_requires_datetime() {
        let err = CaptureMetadata::builder().build().unwrap_err();
        assert!(matches!(
            err,
            Error::WriteError(WriteError::MissingField("capture datetime"))
        ));
    }

    #[test]
    fn test_finger_rejected_up_front() {
        let err = BdirEncoder::new(Modality::Finger, Purpose::Auth).unwrap_err();
        assert!(matches!(
            err,
            Error::PolicyError(PolicyError::UnsupportedModality(Modality::Finger))
        ));
    }

    #[test]
    fn test_unknown_purpose_token() {
        let err = BdirEncoder::from_tokens("FACE", "MATCHING").unwrap_err();
        assert!(matches!(
            err,
            Error::PolicyError(PolicyError::UnknownPurpose(_))
        ));
    }

    #[test]
    fn test_lossless_image_rejected_for_auth() {
        let encoder = BdirEncoder::new(Modality::Iris, Purpose::Auth).unwrap();
        let probe = StubProbe {
            width: 640,
            height: 480,
            lossless: true,
        };
        let err = encoder
            .encode(&sample_metadata(), &[0u8; 16], &probe)
            .unwrap_err();
        assert!(matches!(
            err,
            Error::WriteError(WriteError::CompressionPolicyMismatch { .. })
        ));
    }

    #[test]
    fn test_oversized_dimension_rejected() {
        let encoder = BdirEncoder::new(Modality::Face, Purpose::Auth).unwrap();
        let probe = StubProbe {
            width: 70_000,
            height: 480,
            lossless: false,
        };
        let err = encoder
            .encode(&sample_metadata(), &[0u8; 16], &probe)
            .unwrap_err();
        assert!(matches!(
            err,
            Error::WriteError(WriteError::OversizedImageDimension(70_000))
        ));
    }

    #[test]
    fn test_face_encode_starts_with_format_identifier() -> Result<()> {
        let encoder = BdirEncoder::new(Modality::Face, Purpose::Registration).unwrap();
        let probe = StubProbe {
            width: 640,
            height: 480,
            lossless: true,
        };
        let bytes = encoder.encode(&sample_metadata(), &[0xAB; 100], &probe)?;
        assert_eq!(&bytes[..4], b"FAC\0");
        Ok(())
    }

    #[test]
    fn test_purpose_defaults_validate() -> Result<()> {
        let probe = StubProbe {
            width: 320,
            height: 240,
            lossless: false,
        };
        let bytes = encode_from_image("IRIS", "AUTH", &sample_metadata(), &[0x11; 64], &probe)?;
        let record = Bdir::from_buffer(&bytes)?;
        assert!(crate::validate::conforms(&record, Purpose::Auth));
        assert!(!crate::validate::conforms(&record, Purpose::Registration));
        Ok(())
    }
}

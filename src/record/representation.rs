//! Representation header and the representation it frames
//!
//! A representation is one captured sample: a header carrying capture
//! metadata and the modality-specific information block, followed by the
//! image payload. The header's leading length field covers the header and
//! the data together and is derived from live field values at write time.
//! Decode order inside the header is fixed by the standards: timestamp,
//! device identifiers, quality blocks, modality information block, then (for
//! face) the landmark array and image information.

use std::io::{Read, Seek, Write};

use crate::error::{PolicyError, ReadError, Result, WriteError};
use crate::fields::{CaptureDeviceTechnology, CaptureDeviceType, CaptureDeviceVendor};
use crate::modality::Modality;
use crate::primitive;
use crate::record::face::{FaceInfo, FacialInformation, ImageInformation, LandmarkPoint};
use crate::record::image::RepresentationData;
use crate::record::iris::{IrisImageInformation, IrisInfo};
use crate::record::quality::QualityBlock;
use crate::record::timestamp::CaptureDateTime;

/// Size of the capture device identifier block in bytes
pub const SIZE_CAPTURE_DEVICE: usize = 5;

/// Fixed-size prefix of every representation header: length field, capture
/// datetime, device identifiers, quality block count
const SIZE_HEADER_PREFIX: usize = 4 + 9 + SIZE_CAPTURE_DEVICE + 1;

/// Identifiers of the device that captured the sample
///
/// Five bytes on the wire: technology class (1), CBEFF vendor identifier (2),
/// vendor-assigned device type (2). All three ranges are vendor-assignable
/// and decode leniently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CaptureDevice {
    pub technology: CaptureDeviceTechnology,
    pub vendor: CaptureDeviceVendor,
    pub device_type: CaptureDeviceType,
}
impl CaptureDevice {
    pub fn from_reader<R: Read>(reader: &mut R) -> Result<Self> {
        Ok(Self {
            technology: CaptureDeviceTechnology::from_value(primitive::read_u8(reader)?),
            vendor: CaptureDeviceVendor::from_value(primitive::read_u16(reader)?),
            device_type: CaptureDeviceType::from_value(primitive::read_u16(reader)?),
        })
    }

    pub fn write_bytes<W: Write>(&self, writer: &mut W) -> Result<()> {
        primitive::write_u8(writer, self.technology.value())?;
        primitive::write_u16(writer, self.vendor.value())?;
        primitive::write_u16(writer, self.device_type.value())?;
        Ok(())
    }

    #[must_use]
    pub fn wire_len(&self) -> usize {
        SIZE_CAPTURE_DEVICE
    }
}

/// Modality-specific information block of a representation header
///
/// The general/representation split is shared across the 19794 family; only
/// this block differs in shape between modalities.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalityInfo {
    Face(FaceInfo),
    Iris(IrisInfo),
}
impl ModalityInfo {
    #[must_use]
    pub fn modality(&self) -> Modality {
        match self {
            Self::Face(_) => Modality::Face,
            Self::Iris(_) => Modality::Iris,
        }
    }

    pub fn from_reader<R: Read>(reader: &mut R, modality: Modality) -> Result<Self> {
        match modality {
            Modality::Face => Ok(Self::Face(FaceInfo::from_reader(reader)?)),
            Modality::Iris => Ok(Self::Iris(IrisInfo::from_reader(reader)?)),
            Modality::Finger => Err(PolicyError::UnsupportedModality(modality).into()),
        }
    }

    pub fn write_bytes<W: Write>(&self, writer: &mut W) -> Result<()> {
        match self {
            Self::Face(info) => info.write_bytes(writer),
            Self::Iris(info) => info.write_bytes(writer),
        }
    }

    #[must_use]
    pub fn wire_len(&self) -> usize {
        match self {
            Self::Face(info) => info.wire_len(),
            Self::Iris(info) => info.wire_len(),
        }
    }

    /// Whether the representation data may carry a trailing extended block
    #[must_use]
    pub fn allows_extended_data(&self) -> bool {
        match self {
            Self::Face(info) => info.image_info.image_type.is_three_dimensional(),
            Self::Iris(_) => false,
        }
    }
}

/// Header of one representation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepresentationHeader {
    pub datetime: CaptureDateTime,
    pub device: CaptureDevice,
    pub quality_blocks: Vec<QualityBlock>,
    pub info: ModalityInfo,
}
impl RepresentationHeader {
    /// Serialized size of this header, including its own length field
    #[must_use]
    pub fn wire_len(&self) -> usize {
        SIZE_HEADER_PREFIX
            + self.quality_blocks.len() * crate::record::quality::SIZE_QUALITY_BLOCK
            + self.info.wire_len()
    }

    /// Reads a representation header
    ///
    /// Returns the header together with the representation length it
    /// declares, which covers the header itself and the data portion.
    pub fn from_reader<R: Read>(reader: &mut R, modality: Modality) -> Result<(Self, usize)> {
        let representation_length = primitive::read_u32(reader)? as usize;
        let datetime = CaptureDateTime::from_reader(reader)?;
        let device = CaptureDevice::from_reader(reader)?;
        let quality_count = primitive::read_u8(reader)?;
        let mut quality_blocks = Vec::with_capacity(usize::from(quality_count));
        for _ in 0..quality_count {
            quality_blocks.push(QualityBlock::from_reader(reader)?);
        }
        let info = ModalityInfo::from_reader(reader, modality)?;
        Ok((
            Self {
                datetime,
                device,
                quality_blocks,
                info,
            },
            representation_length,
        ))
    }

    /// Writes the header, deriving the representation length field from the
    /// header's own size plus `data_len`
    pub fn write_bytes<W: Write>(&self, writer: &mut W, data_len: usize) -> Result<()> {
        let quality_count = u8::try_from(self.quality_blocks.len())
            .map_err(|_| WriteError::TooManyQualityBlocks(self.quality_blocks.len()))?;
        let total = self.wire_len() + data_len;
        let representation_length =
            u32::try_from(total).map_err(|_| WriteError::ImageTooLarge(data_len))?;

        primitive::write_u32(writer, representation_length)?;
        self.datetime.write_bytes(writer)?;
        self.device.write_bytes(writer)?;
        primitive::write_u8(writer, quality_count)?;
        for block in &self.quality_blocks {
            block.write_bytes(writer)?;
        }
        self.info.write_bytes(writer)?;
        Ok(())
    }

    /// Header-only skim of a representation
    ///
    /// Reads the fixed-size capture fields, steps over the quality and
    /// landmark arrays without materializing them, and stops after the image
    /// information block, before any image bytes. Answers metadata queries
    /// without allocating for the payload.
    pub fn skim_from<R: Read + Seek>(
        reader: &mut R,
        modality: Modality,
    ) -> Result<RepresentationSummary> {
        let _representation_length = primitive::read_u32(reader)?;
        let datetime = CaptureDateTime::from_reader(reader)?;
        let device = CaptureDevice::from_reader(reader)?;
        let quality_block_count = primitive::read_u8(reader)?;
        for _ in 0..quality_block_count {
            QualityBlock::skip_from(reader)?;
        }
        match modality {
            Modality::Face => {
                let landmark_count = FacialInformation::skip_from(reader)?;
                for _ in 0..landmark_count {
                    LandmarkPoint::skip_from(reader)?;
                }
                let image_info = ImageInformation::from_reader(reader)?;
                Ok(RepresentationSummary {
                    datetime,
                    device,
                    quality_block_count,
                    landmark_count,
                    width: image_info.width,
                    height: image_info.height,
                })
            }
            Modality::Iris => {
                let _representation_no = primitive::read_u16(reader)?;
                let image_info = IrisImageInformation::from_reader(reader)?;
                Ok(RepresentationSummary {
                    datetime,
                    device,
                    quality_block_count,
                    landmark_count: 0,
                    width: image_info.width,
                    height: image_info.height,
                })
            }
            Modality::Finger => Err(PolicyError::UnsupportedModality(modality).into()),
        }
    }
}

/// Capture metadata surfaced by a header-only skim
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RepresentationSummary {
    pub datetime: CaptureDateTime,
    pub device: CaptureDevice,
    pub quality_block_count: u8,
    pub landmark_count: u16,
    pub width: u16,
    pub height: u16,
}

/// One captured sample: representation header plus representation data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Representation {
    pub header: RepresentationHeader,
    pub data: RepresentationData,
}
impl Representation {
    pub fn from_reader<R: Read>(reader: &mut R, modality: Modality) -> Result<Self> {
        let (header, declared) = RepresentationHeader::from_reader(reader, modality)?;
        let header_len = header.wire_len();
        if declared < header_len {
            return Err(ReadError::LengthMismatch {
                field: "representation length",
                declared,
                actual: header_len,
            }
            .into());
        }
        let data = RepresentationData::from_reader(
            reader,
            declared - header_len,
            header.info.allows_extended_data(),
        )?;
        Ok(Self { header, data })
    }

    pub fn write_bytes<W: Write>(&self, writer: &mut W) -> Result<()> {
        self.header.write_bytes(writer, self.data.wire_len())?;
        self.data.write_bytes(writer)?;
        Ok(())
    }

    #[must_use]
    pub fn wire_len(&self) -> usize {
        self.header.wire_len() + self.data.wire_len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::fields::{
        ColourSpace, CrossReference, FaceImageType, ImageDataType, IrisCompression,
        IrisImageFormat, IrisImageType, IrisProperties, Orientation,
        PostAcquisitionProcessing,
    };
    use anyhow::Result;
    use std::io::Cursor;

    fn sample_datetime() -> CaptureDateTime {
        CaptureDateTime {
            year: 2024,
            month: 6,
            day: 15,
            hour: 10,
            minute: 30,
            second: 0,
            millisecond: 250,
        }
    }

    fn face_header(image_type: FaceImageType) -> RepresentationHeader {
        RepresentationHeader {
            datetime: sample_datetime(),
            device: CaptureDevice {
                technology: CaptureDeviceTechnology::StaticPhotographDigitalCamera,
                vendor: CaptureDeviceVendor(0x0042),
                device_type: CaptureDeviceType(0x0007),
            },
            quality_blocks: vec![QualityBlock::new(40, 0x0101, 0x0001)],
            info: ModalityInfo::Face(FaceInfo {
                facial: FacialInformation::unspecified(),
                landmarks: Vec::new(),
                image_info: ImageInformation {
                    image_type,
                    data_type: ImageDataType::Jpeg2000Lossless,
                    width: 640,
                    height: 480,
                    spatial_sampling_level: 0,
                    post_processing: PostAcquisitionProcessing::default(),
                    cross_reference: CrossReference::Basic,
                    colour_space: ColourSpace::Greyscale8,
                },
            }),
        }
    }

    fn iris_header() -> RepresentationHeader {
        RepresentationHeader {
            datetime: sample_datetime(),
            device: CaptureDevice::default(),
            quality_blocks: Vec::new(),
            info: ModalityInfo::Iris(IrisInfo {
                representation_no: 1,
                image_info: IrisImageInformation {
                    image_type: IrisImageType::Cropped,
                    image_format: IrisImageFormat::MonoPng,
                    properties: IrisProperties {
                        horizontal_orientation: Orientation::Base,
                        vertical_orientation: Orientation::Base,
                        compression: IrisCompression::Lossless,
                    },
                    width: 320,
                    height: 240,
                    bit_depth: 8,
                    range: 0,
                    roll_angle: 0xFFFF,
                    roll_angle_uncertainty: 0xFFFF,
                    centre_x_smallest: 0,
                    centre_x_largest: 0,
                    centre_y_smallest: 0,
                    centre_y_largest: 0,
                    diameter_smallest: 0,
                    diameter_largest: 0,
                },
            }),
        }
    }

    #[test]
    fn test_face_representation_roundtrip() -> Result<()> {
        let representation = Representation {
            header: face_header(FaceImageType::FullFrontal),
            data: RepresentationData::new(vec![0xAB; 32]),
        };
        let mut buffer = Vec::new();
        representation.write_bytes(&mut buffer)?;
        assert_eq!(buffer.len(), representation.wire_len());
        // the leading length field covers header and data together
        assert_eq!(
            &buffer[..4],
            &(representation.wire_len() as u32).to_be_bytes()
        );

        let decoded = Representation::from_reader(&mut Cursor::new(buffer), Modality::Face)?;
        assert_eq!(decoded, representation);
        Ok(())
    }

    #[test]
    fn test_iris_representation_roundtrip() -> Result<()> {
        let representation = Representation {
            header: iris_header(),
            data: RepresentationData::new(vec![0x11; 64]),
        };
        let mut buffer = Vec::new();
        representation.write_bytes(&mut buffer)?;
        let decoded = Representation::from_reader(&mut Cursor::new(buffer), Modality::Iris)?;
        assert_eq!(decoded, representation);
        Ok(())
    }

    #[test]
    fn test_three_dimensional_face_carries_trailer() -> Result<()> {
        let representation = Representation {
            header: face_header(FaceImageType::FullFrontal3d),
            data: RepresentationData {
                image_data: crate::record::image::ImageData::new(vec![0xCD; 16]),
                extended_data: vec![0x3D; 24],
            },
        };
        let mut buffer = Vec::new();
        representation.write_bytes(&mut buffer)?;
        let decoded = Representation::from_reader(&mut Cursor::new(buffer), Modality::Face)?;
        assert_eq!(decoded.data.extended_data.len(), 24);
        assert_eq!(decoded, representation);
        Ok(())
    }

    #[test]
    fn test_trailer_on_plain_face_rejected() {
        let representation = Representation {
            header: face_header(FaceImageType::FullFrontal),
            data: RepresentationData {
                image_data: crate::record::image::ImageData::new(vec![0xCD; 16]),
                extended_data: vec![0x3D; 8],
            },
        };
        let mut buffer = Vec::new();
        representation.write_bytes(&mut buffer).unwrap();
        let err = Representation::from_reader(&mut Cursor::new(buffer), Modality::Face).unwrap_err();
        assert!(matches!(
            err,
            Error::ReadError(ReadError::LengthMismatch { .. })
        ));
    }

    #[test]
    fn test_quality_block_count_matches_array() -> Result<()> {
        let header = face_header(FaceImageType::FullFrontal);
        let mut buffer = Vec::new();
        header.write_bytes(&mut buffer, 0)?;
        // count byte sits after length (4) + datetime (9) + device (5)
        assert_eq!(buffer[18], 1);
        Ok(())
    }

    #[test]
    fn test_skim_matches_full_decode() -> Result<()> {
        let representation = Representation {
            header: face_header(FaceImageType::FullFrontal),
            data: RepresentationData::new(vec![0xAB; 512]),
        };
        let mut buffer = Vec::new();
        representation.write_bytes(&mut buffer)?;

        let summary =
            RepresentationHeader::skim_from(&mut Cursor::new(buffer), Modality::Face)?;
        assert_eq!(summary.datetime, representation.header.datetime);
        assert_eq!(summary.device, representation.header.device);
        assert_eq!(summary.quality_block_count, 1);
        assert_eq!(summary.landmark_count, 0);
        assert_eq!(summary.width, 640);
        assert_eq!(summary.height, 480);
        Ok(())
    }

    #[test]
    fn test_truncated_header_fails() {
        let header = iris_header();
        let mut buffer = Vec::new();
        header.write_bytes(&mut buffer, 0).unwrap();
        buffer.truncate(20);
        let err =
            RepresentationHeader::from_reader(&mut Cursor::new(buffer), Modality::Iris).unwrap_err();
        assert!(matches!(
            err,
            Error::ReadError(ReadError::UnexpectedEndOfData(_))
        ));
    }
}

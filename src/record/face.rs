//! Face-specific blocks of the representation header (ISO/IEC 19794-5)

use std::io::{Read, Seek, Write};

use crate::error::{Result, WriteError};
use crate::fields::{
    ColourSpace, CrossReference, Expression, EyeColour, FaceImageType, FeatureMask, Gender,
    HairColour, ImageDataType, PostAcquisitionProcessing,
};
use crate::primitive;

/// Size of the facial information block in bytes (landmark count included)
pub const SIZE_FACIAL_INFORMATION: usize = 17;

/// Size of one landmark point in bytes
pub const SIZE_LANDMARK_POINT: usize = 8;

/// Size of the image information block in bytes
pub const SIZE_IMAGE_INFORMATION: usize = 11;

/// A coded facial feature location
///
/// Eight bytes on the wire: point type (1), point code (1), and x/y/z
/// coordinates (2 each, z zero for 2D points). Type and code are
/// vendor-extensible and pass through raw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LandmarkPoint {
    pub point_type: u8,
    pub point_code: u8,
    pub x: u16,
    pub y: u16,
    pub z: u16,
}
impl LandmarkPoint {
    pub fn from_reader<R: Read>(reader: &mut R) -> Result<Self> {
        Ok(Self {
            point_type: primitive::read_u8(reader)?,
            point_code: primitive::read_u8(reader)?,
            x: primitive::read_u16(reader)?,
            y: primitive::read_u16(reader)?,
            z: primitive::read_u16(reader)?,
        })
    }

    pub fn write_bytes<W: Write>(&self, writer: &mut W) -> Result<()> {
        primitive::write_u8(writer, self.point_type)?;
        primitive::write_u8(writer, self.point_code)?;
        primitive::write_u16(writer, self.x)?;
        primitive::write_u16(writer, self.y)?;
        primitive::write_u16(writer, self.z)?;
        Ok(())
    }

    /// Steps over one landmark point without materializing it
    pub fn skip_from<R: Read + Seek>(reader: &mut R) -> Result<()> {
        primitive::skip(reader, SIZE_LANDMARK_POINT as u64)
    }

    #[must_use]
    pub fn wire_len(&self) -> usize {
        SIZE_LANDMARK_POINT
    }
}

/// Subject-level facial information
///
/// Seventeen bytes on the wire: landmark point count (2), gender (1), eye
/// colour (1), hair colour (1), subject height (1), feature mask (3),
/// expression (2), pose angles yaw/pitch/roll (1 each, signed), pose angle
/// uncertainties (1 each). The landmark count is not stored here; it is
/// derived from the landmark array at write time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FacialInformation {
    pub gender: Gender,
    pub eye_colour: EyeColour,
    pub hair_colour: HairColour,
    /// Subject height in centimetres, 0 when unspecified
    pub subject_height: u8,
    pub feature_mask: FeatureMask,
    pub expression: Expression,
    /// Yaw, pitch, roll in degrees; genuinely signed bytes
    pub pose_angles: [i8; 3],
    pub pose_angle_uncertainties: [u8; 3],
}
impl FacialInformation {
    /// Facial information with every field unspecified
    #[must_use]
    pub fn unspecified() -> Self {
        Self {
            gender: Gender::Unspecified,
            eye_colour: EyeColour::Unspecified,
            hair_colour: HairColour::Unspecified,
            subject_height: 0,
            feature_mask: FeatureMask::default(),
            expression: Expression::UNSPECIFIED,
            pose_angles: [0; 3],
            pose_angle_uncertainties: [0; 3],
        }
    }

    /// Reads the block, returning it together with the landmark point count
    /// that prefixes it on the wire
    pub fn from_reader<R: Read>(reader: &mut R) -> Result<(Self, u16)> {
        let landmark_count = primitive::read_u16(reader)?;
        let gender = Gender::from_value(primitive::read_u8(reader)?);
        let eye_colour = EyeColour::from_value(primitive::read_u8(reader)?);
        let hair_colour = HairColour::from_value(primitive::read_u8(reader)?);
        let subject_height = primitive::read_u8(reader)?;
        let feature_mask = FeatureMask::from_value(primitive::read_u24(reader)?)?;
        let expression = Expression::from_value(primitive::read_u16(reader)?);
        let mut pose_angles = [0i8; 3];
        for angle in &mut pose_angles {
            // the one place a wire byte is reinterpreted as signed
            *angle = primitive::read_u8(reader)? as i8;
        }
        let mut pose_angle_uncertainties = [0u8; 3];
        for uncertainty in &mut pose_angle_uncertainties {
            *uncertainty = primitive::read_u8(reader)?;
        }
        Ok((
            Self {
                gender,
                eye_colour,
                hair_colour,
                subject_height,
                feature_mask,
                expression,
                pose_angles,
                pose_angle_uncertainties,
            },
            landmark_count,
        ))
    }

    /// Writes the block, prefixed by the landmark point count supplied by the
    /// caller (derived from the live landmark array)
    pub fn write_bytes<W: Write>(&self, writer: &mut W, landmark_count: u16) -> Result<()> {
        primitive::write_u16(writer, landmark_count)?;
        primitive::write_u8(writer, self.gender.value())?;
        primitive::write_u8(writer, self.eye_colour.value())?;
        primitive::write_u8(writer, self.hair_colour.value())?;
        primitive::write_u8(writer, self.subject_height)?;
        primitive::write_u24(writer, self.feature_mask.value())?;
        primitive::write_u16(writer, self.expression.value())?;
        for angle in self.pose_angles {
            primitive::write_u8(writer, angle as u8)?;
        }
        for uncertainty in self.pose_angle_uncertainties {
            primitive::write_u8(writer, uncertainty)?;
        }
        Ok(())
    }

    /// Steps over the fixed-size tail of the block, returning only the
    /// landmark point count needed to walk the array that follows
    pub fn skip_from<R: Read + Seek>(reader: &mut R) -> Result<u16> {
        let landmark_count = primitive::read_u16(reader)?;
        primitive::skip(reader, (SIZE_FACIAL_INFORMATION - 2) as u64)?;
        Ok(landmark_count)
    }

    #[must_use]
    pub fn wire_len(&self) -> usize {
        SIZE_FACIAL_INFORMATION
    }
}

/// Properties of the embedded face image
///
/// Eleven bytes on the wire: face image type (1), image data type (1), width
/// (2), height (2), spatial sampling level (1), post-acquisition processing
/// mask (2), cross reference (1), colour space (1).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageInformation {
    pub image_type: FaceImageType,
    pub data_type: ImageDataType,
    pub width: u16,
    pub height: u16,
    pub spatial_sampling_level: u8,
    pub post_processing: PostAcquisitionProcessing,
    pub cross_reference: CrossReference,
    pub colour_space: ColourSpace,
}
impl ImageInformation {
    pub fn from_reader<R: Read>(reader: &mut R) -> Result<Self> {
        Ok(Self {
            image_type: FaceImageType::from_value(primitive::read_u8(reader)?)?,
            data_type: ImageDataType::from_value(primitive::read_u8(reader)?)?,
            width: primitive::read_u16(reader)?,
            height: primitive::read_u16(reader)?,
            spatial_sampling_level: primitive::read_u8(reader)?,
            post_processing: PostAcquisitionProcessing::from_value(primitive::read_u16(reader)?),
            cross_reference: CrossReference::from_value(primitive::read_u8(reader)?)?,
            colour_space: ColourSpace::from_value(primitive::read_u8(reader)?)?,
        })
    }

    pub fn write_bytes<W: Write>(&self, writer: &mut W) -> Result<()> {
        primitive::write_u8(writer, self.image_type.value())?;
        primitive::write_u8(writer, self.data_type.value())?;
        primitive::write_u16(writer, self.width)?;
        primitive::write_u16(writer, self.height)?;
        primitive::write_u8(writer, self.spatial_sampling_level)?;
        primitive::write_u16(writer, self.post_processing.value())?;
        primitive::write_u8(writer, self.cross_reference.value())?;
        primitive::write_u8(writer, self.colour_space.value())?;
        Ok(())
    }

    #[must_use]
    pub fn wire_len(&self) -> usize {
        SIZE_IMAGE_INFORMATION
    }
}

/// The complete face-specific portion of a representation header
///
/// Wire order is fixed: facial information (with its landmark count), then
/// exactly that many landmark points, then the image information block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaceInfo {
    pub facial: FacialInformation,
    pub landmarks: Vec<LandmarkPoint>,
    pub image_info: ImageInformation,
}
impl FaceInfo {
    pub fn from_reader<R: Read>(reader: &mut R) -> Result<Self> {
        let (facial, landmark_count) = FacialInformation::from_reader(reader)?;
        let mut landmarks = Vec::with_capacity(usize::from(landmark_count));
        for _ in 0..landmark_count {
            landmarks.push(LandmarkPoint::from_reader(reader)?);
        }
        let image_info = ImageInformation::from_reader(reader)?;
        Ok(Self {
            facial,
            landmarks,
            image_info,
        })
    }

    pub fn write_bytes<W: Write>(&self, writer: &mut W) -> Result<()> {
        let landmark_count = u16::try_from(self.landmarks.len())
            .map_err(|_| WriteError::TooManyLandmarkPoints(self.landmarks.len()))?;
        self.facial.write_bytes(writer, landmark_count)?;
        for landmark in &self.landmarks {
            landmark.write_bytes(writer)?;
        }
        self.image_info.write_bytes(writer)?;
        Ok(())
    }

    #[must_use]
    pub fn wire_len(&self) -> usize {
        SIZE_FACIAL_INFORMATION
            + self.landmarks.len() * SIZE_LANDMARK_POINT
            + SIZE_IMAGE_INFORMATION
    }
}

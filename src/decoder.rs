//! Decoding facade: standard bytes in, image payload or metadata out

use std::io::Cursor;

use crate::error::{PolicyError, ReadError, Result};
use crate::modality::Modality;
use crate::record::{Bdir, GeneralHeader, RepresentationHeader, RepresentationSummary};

/// Capture metadata surfaced without materializing the image payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordSummary {
    pub modality: Modality,
    pub representation_count: u16,
    pub representation: RepresentationSummary,
}

/// Decoding entry point for one modality
#[derive(Debug, Clone, Copy)]
pub struct BdirDecoder {
    modality: Modality,
}
impl BdirDecoder {
    pub fn new(modality: Modality) -> Result<Self> {
        if modality == Modality::Finger {
            return Err(PolicyError::UnsupportedModality(modality).into());
        }
        Ok(Self { modality })
    }

    /// Builds a decoder from a caller-supplied token, failing with a typed
    /// error on an unknown token
    pub fn from_token(modality: &str) -> Result<Self> {
        Self::new(modality.parse::<Modality>()?)
    }

    #[must_use]
    pub fn modality(&self) -> Modality {
        self.modality
    }

    /// Parses a complete record, checking it against the selected modality
    pub fn decode(&self, bytes: &[u8]) -> Result<Bdir> {
        let record = Bdir::from_buffer(bytes)?;
        if record.modality() != self.modality {
            return Err(ReadError::ModalityMismatch {
                expected: self.modality,
                found: record.modality(),
            }
            .into());
        }
        log::debug!(
            "decoded {} record, {} byte image payload",
            record.modality(),
            record.representation.data.image_data.image.len()
        );
        Ok(record)
    }

    /// Parses a complete record and returns only the embedded image payload
    pub fn decode_image(&self, bytes: &[u8]) -> Result<Vec<u8>> {
        let record = self.decode(bytes)?;
        Ok(record.representation.data.image_data.image)
    }

    /// Header-only introspection: capture metadata and image dimensions
    /// without reading the image payload into memory
    pub fn inspect(&self, bytes: &[u8]) -> Result<RecordSummary> {
        let mut cursor = Cursor::new(bytes);
        let (general, _declared) = GeneralHeader::from_reader(&mut cursor)?;
        if general.modality() != self.modality {
            return Err(ReadError::ModalityMismatch {
                expected: self.modality,
                found: general.modality(),
            }
            .into());
        }
        if general.representation_count != 1 {
            return Err(
                ReadError::UnsupportedRepresentationCount(general.representation_count).into(),
            );
        }
        let representation = RepresentationHeader::skim_from(&mut cursor, self.modality)?;
        Ok(RecordSummary {
            modality: self.modality,
            representation_count: general.representation_count,
            representation,
        })
    }
}

/// One-shot facade: extract the image payload from a record
pub fn decode_to_image(modality: &str, bytes: &[u8]) -> Result<Vec<u8>> {
    BdirDecoder::from_token(modality)?.decode_image(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::{BdirEncoder, CaptureMetadata, ImageProbe, ImageTraits};
    use crate::error::Error;
    use crate::policy::Purpose;
    use crate::record::{CaptureDateTime, QualityBlock};
    use anyhow::Result;

    struct StubProbe {
        lossless: bool,
    }
    impl ImageProbe for StubProbe {
        fn probe(&self, _image: &[u8]) -> crate::Result<ImageTraits> {
            Ok(ImageTraits {
                width: 640,
                height: 480,
                lossless: self.lossless,
            })
        }
    }

    fn sample_metadata() -> CaptureMetadata {
        CaptureMetadata::builder()
            .datetime(CaptureDateTime {
                year: 2025,
                month: 7,
                day: 21,
                hour: 16,
                minute: 45,
                second: 12,
                millisecond: 500,
            })
            .quality_block(QualityBlock::new(77, 0x0101, 0x0003))
            .build()
            .unwrap()
    }

    fn encoded_face_record(image: &[u8]) -> Vec<u8> {
        BdirEncoder::new(Modality::Face, Purpose::Registration)
            .unwrap()
            .encode(&sample_metadata(), image, &StubProbe { lossless: true })
            .unwrap()
    }

    #[test]
    fn test_decode_returns_image_payload() -> Result<()> {
        let image = vec![0xC5; 321];
        let bytes = encoded_face_record(&image);
        let decoded = decode_to_image("FACE", &bytes)?;
        assert_eq!(decoded, image);
        Ok(())
    }

    #[test]
    fn test_modality_mismatch_rejected() {
        let bytes = encoded_face_record(&[0u8; 8]);
        let err = decode_to_image("IRIS", &bytes).unwrap_err();
        assert!(matches!(
            err,
            Error::ReadError(ReadError::ModalityMismatch {
                expected: Modality::Iris,
                found: Modality::Face,
            })
        ));
    }

    #[test]
    fn test_finger_decoder_rejected() {
        let err = BdirDecoder::from_token("FINGER").unwrap_err();
        assert!(matches!(
            err,
            Error::PolicyError(PolicyError::UnsupportedModality(Modality::Finger))
        ));
    }

    #[test]
    fn test_inspect_matches_full_decode() -> Result<()> {
        let bytes = encoded_face_record(&[0xEE; 2048]);
        let decoder = BdirDecoder::new(Modality::Face)?;

        let summary = decoder.inspect(&bytes)?;
        let record = decoder.decode(&bytes)?;

        assert_eq!(summary.modality, record.modality());
        assert_eq!(summary.representation_count, 1);
        assert_eq!(
            summary.representation.datetime,
            record.representation.header.datetime
        );
        assert_eq!(summary.representation.quality_block_count, 1);
        assert_eq!(summary.representation.width, 640);
        assert_eq!(summary.representation.height, 480);
        Ok(())
    }

    #[test]
    fn test_inspect_survives_missing_image_bytes() -> Result<()> {
        // the summary stops before the payload, so a buffer cut inside the
        // image region still inspects cleanly
        let bytes = encoded_face_record(&[0xEE; 2048]);
        let cut = bytes.len() - 1024;
        let summary = BdirDecoder::new(Modality::Face)?.inspect(&bytes[..cut])?;
        assert_eq!(summary.representation.width, 640);
        Ok(())
    }
}

mod decoder;
mod encoder;
mod error;
mod modality;
mod policy;
mod primitive;

pub mod fields;
pub mod record;
pub mod validate;

pub use decoder::{decode_to_image, BdirDecoder, RecordSummary};
pub use encoder::{
    encode_from_image, BdirEncoder, CaptureMetadata, CaptureMetadataBuilder, ImageProbe,
    ImageTraits,
};
pub use error::{Error, PolicyError, ReadError, Result, WriteError};
pub use modality::Modality;
pub use policy::Purpose;
pub use record::Bdir;
pub use validate::{FaceValidator, IrisValidator};

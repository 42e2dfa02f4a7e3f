use civetta_common::error::ErrorKind;
use civetta_common::math::MathError;
use civetta_common::read::ReadError;

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid magic bytes")]
    InvalidMagicBytes,
    #[error("No eXIf chunk found")]
    NoExifFound,
    #[error("More than {0} chunks")]
    TooManyChunks(usize),
    #[error("Read: {0}")]
    Read(#[from] ReadError),
    #[error("Math: {0}")]
    Math(#[from] MathError),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidMagicBytes => ErrorKind::NotRecognized,
            Self::NoExifFound => ErrorKind::NoExifFound,
            Self::TooManyChunks(_) => ErrorKind::StructuralInconsistency,
            Self::Read(_) | Self::Math(_) => ErrorKind::Truncated,
        }
    }
}

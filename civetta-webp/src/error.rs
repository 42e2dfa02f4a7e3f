use civetta_common::error::ErrorKind;
use civetta_common::math::MathError;
use civetta_common::read::ReadError;

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("RIFF or WEBP magic bytes missing")]
    NotWebp,
    #[error("Expected exactly one RIFF chunk, found {0}")]
    RiffChunkCount(usize),
    #[error("RIFF chunk too short for form type: {0} bytes")]
    FormTypeMissing(usize),
    #[error("Form type is {0:?} instead of WEBP")]
    WrongFormType([u8; 4]),
    #[error("No EXIF chunk found")]
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
            Self::NotWebp | Self::WrongFormType(_) => ErrorKind::NotRecognized,
            Self::RiffChunkCount(_) | Self::FormTypeMissing(_) | Self::TooManyChunks(_) => {
                ErrorKind::StructuralInconsistency
            }
            Self::NoExifFound => ErrorKind::NoExifFound,
            Self::Read(_) | Self::Math(_) => ErrorKind::Truncated,
        }
    }
}

use civetta_common::error::ErrorKind;
use civetta_common::math::MathError;
use civetta_common::read::ReadError;

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Data do not start with JPEG magic bytes")]
    NotJpeg,
    #[error("Expected marker at {0}")]
    MarkerExpected(usize),
    #[error("Segment at {position} has invalid length {length}")]
    InvalidSegmentLength { position: usize, length: u16 },
    #[error("No Exif segment found")]
    NoExifFound,
    #[error("More than {0} segments")]
    TooManySegments(usize),
    #[error("Read: {0}")]
    Read(#[from] ReadError),
    #[error("Math: {0}")]
    Math(#[from] MathError),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotJpeg => ErrorKind::NotRecognized,
            Self::MarkerExpected(_)
            | Self::InvalidSegmentLength { .. }
            | Self::TooManySegments(_) => ErrorKind::StructuralInconsistency,
            Self::NoExifFound => ErrorKind::NoExifFound,
            Self::Read(_) | Self::Math(_) => ErrorKind::Truncated,
        }
    }
}

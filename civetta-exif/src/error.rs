use civetta_common::error::ErrorKind;
use civetta_common::exif::Tag;
use civetta_common::math::MathError;
use civetta_common::read::ReadError;

use crate::internal::{Type, URational};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Data of {0} bytes is too short for a TIFF header")]
    HeaderTooShort(usize),
    #[error("Unknown byte order marker {0:?}")]
    UnknownByteOrder([u8; 2]),
    #[error("Magic bytes are {0} instead of 42")]
    MagicBytesWrong(u16),
    #[error("Read: {0}")]
    Read(#[from] ReadError),
    #[error("Math: {0}")]
    Math(#[from] MathError),
    #[error("Data size of {count} elements of type {data_type:?} is too large")]
    DataSizeTooLarge { count: u32, data_type: Type },
    #[error("Tag {0} not found")]
    TagNotFound(Tag),
    #[error("Directory {0} not found")]
    DirectoryNotFound(usize),
    #[error("Expected type {expected:?} but found {actual:?}")]
    WrongType { expected: Type, actual: Type },
    #[error("Expected {expected} values but found {actual}")]
    WrongCount { expected: u32, actual: u32 },
    #[error("Value of unknown type {0}")]
    UnknownType(u16),
    #[error("Type {0:?} is not an integer like value")]
    NotAnInteger(Type),
    #[error("Type {0:?} is not a float like value")]
    NotAFloat(Type),
    #[error("Unknown orientation value {0}")]
    UnknownOrientation(u16),
    #[error("Exposure time {0} is not a valid duration")]
    InvalidExposureTime(URational),
    #[error("Invalid date or time: {0:?}")]
    InvalidDateTime(String),
    #[error("Directory at offset {0} is part of a cycle")]
    DirectoryCycle(u32),
    #[error("More than {0} directories in chain")]
    TooManyDirectories(usize),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::UnknownByteOrder(_) | Self::MagicBytesWrong(_) => ErrorKind::NotRecognized,
            Self::HeaderTooShort(_)
            | Self::Read(_)
            | Self::Math(_)
            | Self::DataSizeTooLarge { .. } => ErrorKind::Truncated,
            Self::TagNotFound(_) | Self::DirectoryNotFound(_) => ErrorKind::NotFound,
            Self::WrongType { .. }
            | Self::WrongCount { .. }
            | Self::UnknownType(_)
            | Self::NotAnInteger(_)
            | Self::NotAFloat(_)
            | Self::UnknownOrientation(_)
            | Self::InvalidExposureTime(_)
            | Self::InvalidDateTime(_) => ErrorKind::TypeMismatch,
            Self::DirectoryCycle(_) | Self::TooManyDirectories(_) => {
                ErrorKind::StructuralInconsistency
            }
        }
    }
}

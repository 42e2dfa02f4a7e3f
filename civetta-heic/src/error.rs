use civetta_common::error::ErrorKind;
use civetta_common::math::MathError;
use civetta_common::read::ReadError;

use crate::BoxType;

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Data do not start with an 'ftypheic' box")]
    NotHeic,
    #[error("Box {box_type:?} at {position} has invalid size {size}")]
    InvalidBoxSize {
        box_type: BoxType,
        position: usize,
        size: u64,
    },
    #[error("Item count of iinf and iloc differ: {0} and {1}")]
    ItemCountMismatch(usize, usize),
    #[error("Unsupported field size {0} in iloc box")]
    InvalidFieldSize(u8),
    #[error("No Exif item found")]
    NoExifFound,
    #[error("More than {0} boxes")]
    TooManyBoxes(usize),
    #[error("More than {0} extents in iloc box")]
    TooManyExtents(usize),
    #[error("Read: {0}")]
    Read(#[from] ReadError),
    #[error("Math: {0}")]
    Math(#[from] MathError),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotHeic => ErrorKind::NotRecognized,
            Self::InvalidBoxSize { .. }
            | Self::ItemCountMismatch(..)
            | Self::InvalidFieldSize(_)
            | Self::TooManyBoxes(_)
            | Self::TooManyExtents(_) => ErrorKind::StructuralInconsistency,
            Self::NoExifFound => ErrorKind::NoExifFound,
            Self::Read(_) | Self::Math(_) => ErrorKind::Truncated,
        }
    }
}

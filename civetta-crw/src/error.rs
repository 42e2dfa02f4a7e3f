use civetta_common::error::ErrorKind;
use civetta_common::math::MathError;
use civetta_common::read::ReadError;

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Not a CRW file")]
    NotCrw,
    #[error("Record {0:#06x} does not contain a heap")]
    NotAHeap(u16),
    #[error("Nested heap at {0} is not smaller than its parent")]
    HeapNotSmaller(usize),
    #[error("Heaps nested deeper than {0} levels")]
    HeapTooDeep(usize),
    #[error("Unknown storage format {0:#06x}")]
    UnknownStorage(u16),
    #[error("Record {0:#06x} not found")]
    RecordNotFound(u16),
    #[error("No Exif data found")]
    NoExifFound,
    #[error("More than {0} records")]
    TooManyRecords(usize),
    #[error("Read: {0}")]
    Read(#[from] ReadError),
    #[error("Math: {0}")]
    Math(#[from] MathError),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotCrw => ErrorKind::NotRecognized,
            Self::NotAHeap(_)
            | Self::HeapNotSmaller(_)
            | Self::HeapTooDeep(_)
            | Self::UnknownStorage(_)
            | Self::TooManyRecords(_) => ErrorKind::StructuralInconsistency,
            Self::RecordNotFound(_) => ErrorKind::NotFound,
            Self::NoExifFound => ErrorKind::NoExifFound,
            Self::Read(_) | Self::Math(_) => ErrorKind::Truncated,
        }
    }
}

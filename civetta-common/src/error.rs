/// Coarse classification shared by the error types of all civetta crates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The signature of the format does not match
    NotRecognized,
    /// A declared length or offset exceeds the available bytes
    Truncated,
    /// Value accessed with the wrong type or count
    TypeMismatch,
    /// Tag, directory, record or item not present
    NotFound,
    /// The container was parsed but does not carry Exif data
    NoExifFound,
    /// Invalid lengths, mismatched tables, cycles or exceeded limits
    StructuralInconsistency,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::NotRecognized => "not recognized",
            Self::Truncated => "truncated",
            Self::TypeMismatch => "type mismatch",
            Self::NotFound => "not found",
            Self::NoExifFound => "no Exif found",
            Self::StructuralInconsistency => "structural inconsistency",
        };
        f.write_str(s)
    }
}

impl From<crate::math::MathError> for ErrorKind {
    fn from(_: crate::math::MathError) -> Self {
        Self::Truncated
    }
}

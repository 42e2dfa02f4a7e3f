/// Upper bounds applied while walking untrusted structures
///
/// ```
/// # use civetta_common::limits::Limits;
/// let limits = Limits {
///     max_directories: 4,
///     ..Limits::default()
/// };
/// assert_eq!(limits.max_heap_depth, 16);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Maximum number of directories in a TIFF chain
    pub max_directories: usize,
    /// Maximum nesting of CRW heaps, the root heap has depth 0
    pub max_heap_depth: usize,
    /// Maximum number of boxes, chunks, segments or records per walk
    pub max_structures: usize,
}

impl Limits {
    pub const DEFAULT: Self = Self {
        max_directories: 64,
        max_heap_depth: 16,
        max_structures: 65_536,
    };
}

impl Default for Limits {
    fn default() -> Self {
        Self::DEFAULT
    }
}

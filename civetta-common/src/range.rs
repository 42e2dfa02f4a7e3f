use crate::math::{MathError, SafeAdd, SafeSub, ToU32, ToUsize};
use crate::read::ReadError;

/// Region of the outer file
///
/// Every range handed out by a container locator must begin a TIFF header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ByteRange {
    pub offset: u32,
    pub length: u32,
}

impl ByteRange {
    pub fn new(offset: u32, length: u32) -> Self {
        Self { offset, length }
    }

    /// Range from `start` to (exclusive) `end` given as positions in a buffer
    ///
    /// ```
    /// # use civetta_common::range::ByteRange;
    /// assert_eq!(ByteRange::from_bounds(4, 10).unwrap(), ByteRange::new(4, 6));
    /// assert!(ByteRange::from_bounds(10, 4).is_err());
    /// ```
    pub fn from_bounds(start: usize, end: usize) -> Result<Self, MathError> {
        let length = end.safe_sub(start)?;
        Ok(Self::new(start.u32()?, length.u32()?))
    }

    pub fn end(&self) -> Result<u32, MathError> {
        self.offset.safe_add(self.length)
    }

    pub fn range(&self) -> Result<std::ops::Range<usize>, MathError> {
        let start = self.offset.usize()?;
        let end = self.end()?.usize()?;
        Ok(start..end)
    }

    /// Returns the bytes covered by the range
    ///
    /// ```
    /// # use civetta_common::range::ByteRange;
    /// let data = b"..Exif..";
    /// assert_eq!(ByteRange::new(2, 4).slice(data).unwrap(), b"Exif");
    /// assert!(ByteRange::new(6, 4).slice(data).is_err());
    /// ```
    pub fn slice<'a>(&self, data: &'a [u8]) -> Result<&'a [u8], ReadError> {
        let range = self.range()?;
        let out_of_bounds = ReadError::OutOfBounds {
            offset: range.start,
            len: range.len(),
            available: data.len(),
        };
        data.get(range).ok_or(out_of_bounds)
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }
}

impl std::fmt::Display for ByteRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.end() {
            Ok(end) => write!(f, "{}..{} ({} bytes)", self.offset, end, self.length),
            Err(_) => write!(f, "{}+{}", self.offset, self.length),
        }
    }
}

//! Bounds-checked reads from byte buffers

use crate::math::{MathError, SafeAdd};

/// Byte order of multi-byte integers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ByteOrder {
    /// Intel byte order, marker `II`
    Little,
    /// Motorola byte order, marker `MM`
    Big,
}

impl ByteOrder {
    /// Byte order from the two byte TIFF marker
    ///
    /// ```
    /// # use civetta_common::read::ByteOrder;
    /// assert_eq!(ByteOrder::from_marker(*b"II"), Some(ByteOrder::Little));
    /// assert_eq!(ByteOrder::from_marker(*b"MM"), Some(ByteOrder::Big));
    /// assert_eq!(ByteOrder::from_marker(*b"IM"), None);
    /// ```
    pub fn from_marker(marker: [u8; 2]) -> Option<Self> {
        match &marker {
            b"II" => Some(Self::Little),
            b"MM" => Some(Self::Big),
            _ => None,
        }
    }

    pub fn marker(self) -> [u8; 2] {
        match self {
            Self::Little => *b"II",
            Self::Big => *b"MM",
        }
    }

    pub fn u16(self, bytes: [u8; 2]) -> u16 {
        match self {
            Self::Little => u16::from_le_bytes(bytes),
            Self::Big => u16::from_be_bytes(bytes),
        }
    }

    pub fn u32(self, bytes: [u8; 4]) -> u32 {
        match self {
            Self::Little => u32::from_le_bytes(bytes),
            Self::Big => u32::from_be_bytes(bytes),
        }
    }

    pub fn u64(self, bytes: [u8; 8]) -> u64 {
        match self {
            Self::Little => u64::from_le_bytes(bytes),
            Self::Big => u64::from_be_bytes(bytes),
        }
    }

    pub fn i32(self, bytes: [u8; 4]) -> i32 {
        match self {
            Self::Little => i32::from_le_bytes(bytes),
            Self::Big => i32::from_be_bytes(bytes),
        }
    }
}

impl std::fmt::Display for ByteOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Little => f.write_str("little endian"),
            Self::Big => f.write_str("big endian"),
        }
    }
}

/// A borrowed buffer together with the byte order used to read from it
///
/// All reads are bounds-checked and return [`ReadError::OutOfBounds`] instead
/// of panicking.
///
/// ```
/// # use civetta_common::read::{ByteOrder, ByteView};
/// let data = [0x00, 0x03, 0xFF];
///
/// let be = ByteView::new(&data, ByteOrder::Big);
/// assert_eq!(be.u16(0).unwrap(), 3);
///
/// let le = ByteView::new(&data, ByteOrder::Little);
/// assert_eq!(le.u16(0).unwrap(), 768);
///
/// assert!(le.u16(2).is_err());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ByteView<'a> {
    data: &'a [u8],
    byte_order: ByteOrder,
}

impl<'a> ByteView<'a> {
    pub fn new(data: &'a [u8], byte_order: ByteOrder) -> Self {
        Self { data, byte_order }
    }

    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    pub fn byte_order(&self) -> ByteOrder {
        self.byte_order
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns `len` bytes starting at `offset`
    pub fn slice(&self, offset: usize, len: usize) -> Result<&'a [u8], ReadError> {
        let out_of_bounds = ReadError::OutOfBounds {
            offset,
            len,
            available: self.data.len(),
        };
        let end = offset.safe_add(len).map_err(|_| out_of_bounds)?;
        self.data.get(offset..end).ok_or(out_of_bounds)
    }

    /// Returns all bytes from `offset` to the end of the buffer
    pub fn slice_from(&self, offset: usize) -> Result<&'a [u8], ReadError> {
        self.data.get(offset..).ok_or(ReadError::OutOfBounds {
            offset,
            len: 0,
            available: self.data.len(),
        })
    }

    /// New view on a sub-range, keeping the byte order
    pub fn sub(&self, offset: usize, len: usize) -> Result<ByteView<'a>, ReadError> {
        Ok(Self::new(self.slice(offset, len)?, self.byte_order))
    }

    /// Checks if `len` bytes starting at `offset` are available
    pub fn has(&self, offset: usize, len: usize) -> bool {
        self.slice(offset, len).is_ok()
    }

    pub fn array<const N: usize>(&self, offset: usize) -> Result<[u8; N], ReadError> {
        let mut buf = [0; N];
        buf.copy_from_slice(self.slice(offset, N)?);
        Ok(buf)
    }

    pub fn u8(&self, offset: usize) -> Result<u8, ReadError> {
        self.data.get(offset).copied().ok_or(ReadError::OutOfBounds {
            offset,
            len: 1,
            available: self.data.len(),
        })
    }

    pub fn u16(&self, offset: usize) -> Result<u16, ReadError> {
        Ok(self.byte_order.u16(self.array(offset)?))
    }

    pub fn u32(&self, offset: usize) -> Result<u32, ReadError> {
        Ok(self.byte_order.u32(self.array(offset)?))
    }

    pub fn u64(&self, offset: usize) -> Result<u64, ReadError> {
        Ok(self.byte_order.u64(self.array(offset)?))
    }

    pub fn i32(&self, offset: usize) -> Result<i32, ReadError> {
        Ok(self.byte_order.i32(self.array(offset)?))
    }
}

#[derive(Debug, thiserror::Error, Clone, Copy, PartialEq, Eq)]
pub enum ReadError {
    #[error("Reading {len} bytes at offset {offset} exceeds data length {available}")]
    OutOfBounds {
        offset: usize,
        len: usize,
        available: usize,
    },
    #[error("Math: {0}")]
    Math(#[from] MathError),
}

impl ReadError {
    pub fn kind(&self) -> crate::error::ErrorKind {
        crate::error::ErrorKind::Truncated
    }
}

#![doc = include_str!("../README.md")]

use civetta_common::error::ErrorKind;
use civetta_common::image::{ExifLocator, ImageFormat};
use civetta_common::limits::Limits;
use civetta_common::math::MathError;
use civetta_common::range::ByteRange;
use civetta_common::read::{ByteOrder, ByteView};

/// CR2 files are little endian TIFF with the first directory at offset 16
pub const CR2_MAGIC_BYTES: &[u8] = b"II*\0\x10\0";
/// Smallest accepted CR2 file
pub const CR2_MIN_SIZE: usize = 10 * 1024;

const TIFF_MAGIC: u16 = 42;

/// Representation of a TIFF image
#[derive(Debug, Clone, Copy)]
pub struct Tiff<'a> {
    data: &'a [u8],
    limits: Limits,
}

impl ImageFormat for Tiff<'_> {
    const NAME: &'static str = "TIFF";
    const MEDIA_TYPE: &'static str = "image/tiff";

    fn is_filetype(data: &[u8]) -> bool {
        if data.len() < 8 {
            return false;
        }

        let Some(byte_order) = data
            .get(0..2)
            .and_then(|x| <[u8; 2]>::try_from(x).ok())
            .and_then(ByteOrder::from_marker)
        else {
            return false;
        };

        ByteView::new(data, byte_order).u16(2) == Ok(TIFF_MAGIC)
    }
}

impl<'a> Tiff<'a> {
    pub fn new(data: &'a [u8]) -> Result<Self, Error> {
        Self::with_limits(data, Limits::default())
    }

    pub fn with_limits(data: &'a [u8], limits: Limits) -> Result<Self, Error> {
        if !Self::is_filetype(data) {
            return Err(Error::NotTiff);
        }

        Ok(Self { data, limits })
    }

    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    /// Limits for decoding the Exif data
    pub fn limits(&self) -> Limits {
        self.limits
    }

    pub fn exif_data(&self) -> Result<&'a [u8], Error> {
        Ok(self.data)
    }
}

impl ExifLocator for Tiff<'_> {
    type Error = Error;

    fn exif_range(&self) -> Result<ByteRange, Error> {
        Ok(ByteRange::from_bounds(0, self.data.len())?)
    }
}

/// Representation of a Canon CR2 raw image
#[derive(Debug, Clone, Copy)]
pub struct Cr2<'a> {
    data: &'a [u8],
    limits: Limits,
}

impl ImageFormat for Cr2<'_> {
    const NAME: &'static str = "CR2";
    const MEDIA_TYPE: &'static str = "image/x-canon-cr2";

    fn is_filetype(data: &[u8]) -> bool {
        data.len() >= CR2_MIN_SIZE && data.starts_with(CR2_MAGIC_BYTES)
    }
}

impl<'a> Cr2<'a> {
    pub fn new(data: &'a [u8]) -> Result<Self, Error> {
        Self::with_limits(data, Limits::default())
    }

    pub fn with_limits(data: &'a [u8], limits: Limits) -> Result<Self, Error> {
        if !Self::is_filetype(data) {
            return Err(Error::NotCr2);
        }

        Ok(Self { data, limits })
    }

    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    /// Limits for decoding the Exif data
    pub fn limits(&self) -> Limits {
        self.limits
    }

    pub fn exif_data(&self) -> Result<&'a [u8], Error> {
        Ok(self.data)
    }
}

impl ExifLocator for Cr2<'_> {
    type Error = Error;

    fn exif_range(&self) -> Result<ByteRange, Error> {
        Ok(ByteRange::from_bounds(0, self.data.len())?)
    }
}

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Not a TIFF file")]
    NotTiff,
    #[error("Not a CR2 file")]
    NotCr2,
    #[error("Math: {0}")]
    Math(#[from] MathError),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotTiff | Self::NotCr2 => ErrorKind::NotRecognized,
            Self::Math(_) => ErrorKind::Truncated,
        }
    }
}

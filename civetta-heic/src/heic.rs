use civetta_common::image::{ExifLocator, ImageFormat};
use civetta_common::limits::Limits;
use civetta_common::math::*;
use civetta_common::range::ByteRange;

use crate::{Bmff, Error};

/// Signature that follows the size of the first box
pub const MAGIC_BYTES: &[u8] = b"ftypheic";
/// Item type of the Exif item
pub const EXIF_ITEM_TYPE: [u8; 4] = *b"Exif";
/// Bytes in front of the TIFF header inside of the Exif item
///
/// Four bytes for the offset to the TIFF header followed by `Exif\0\0`.
pub const EXIF_ITEM_HEADER_SIZE: u32 = 10;

/// HEIC image
#[derive(Debug, Clone)]
pub struct Heic<'a> {
    data: &'a [u8],
    limits: Limits,
}

impl ImageFormat for Heic<'_> {
    const NAME: &'static str = "HEIC";
    const MEDIA_TYPE: &'static str = "image/heic";

    fn is_filetype(data: &[u8]) -> bool {
        data.get(4..12) == Some(MAGIC_BYTES)
    }
}

impl<'a> Heic<'a> {
    pub fn new(data: &'a [u8]) -> Result<Self, Error> {
        Self::with_limits(data, Limits::default())
    }

    pub fn with_limits(data: &'a [u8], limits: Limits) -> Result<Self, Error> {
        if !Self::is_filetype(data) {
            return Err(Error::NotHeic);
        }

        Ok(Self { data, limits })
    }

    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    pub fn limits(&self) -> Limits {
        self.limits
    }

    /// Parses the box structure and item table
    pub fn bmff(&self) -> Result<Bmff<'a>, Error> {
        Bmff::parse_with_limits(self.data, self.limits)
    }

    pub fn exif_data(&self) -> Result<&'a [u8], Error> {
        Ok(self.exif_range()?.slice(self.data)?)
    }
}

impl ExifLocator for Heic<'_> {
    type Error = Error;

    /// Location of the TIFF header inside the first `Exif` item
    ///
    /// The range is cut at the end of the data.
    fn exif_range(&self) -> Result<ByteRange, Error> {
        let bmff = self.bmff()?;
        let location = bmff
            .item(EXIF_ITEM_TYPE)
            .and_then(|x| x.location)
            .ok_or(Error::NoExifFound)?;

        // Item has to be inside the file
        location.slice(self.data)?;

        let start = location.offset.safe_add(EXIF_ITEM_HEADER_SIZE)?;
        let end = start.safe_add(location.length)?;
        let len = self.data.len();

        Ok(ByteRange::from_bounds(
            start.usize()?,
            end.usize()?.min(len),
        )?)
    }
}

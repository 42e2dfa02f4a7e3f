#![doc = include_str!("../README.md")]

mod error;
mod segments;

pub use error::Error;
pub use segments::{Segment, Segments};

use civetta_common::image::{ExifLocator, ImageFormat};
use civetta_common::limits::Limits;
use civetta_common::math::*;
use civetta_common::range::ByteRange;

pub const EXIF_IDENTIFIER_STRING: &[u8] = b"Exif\0\0";
pub const MARKER_START: u8 = 0xFF;

/// JPEG image
///
/// Only the signature is checked on creation. Segments are read when they
/// are requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Jpeg<'a> {
    data: &'a [u8],
    limits: Limits,
}

impl ImageFormat for Jpeg<'_> {
    const NAME: &'static str = "JPEG";
    const MEDIA_TYPE: &'static str = "image/jpeg";

    fn is_filetype(data: &[u8]) -> bool {
        data.len() >= 16 && data.starts_with(&[MARKER_START, 0xD8, MARKER_START])
    }
}

impl<'a> Jpeg<'a> {
    pub fn new(data: &'a [u8]) -> Result<Self, Error> {
        Self::with_limits(data, Limits::default())
    }

    pub fn with_limits(data: &'a [u8], limits: Limits) -> Result<Self, Error> {
        if !Self::is_filetype(data) {
            return Err(Error::NotJpeg);
        }

        Ok(Self { data, limits })
    }

    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    pub fn limits(&self) -> Limits {
        self.limits
    }

    /// Iterator over all segments up to and including the start of scan
    pub fn segments_iter(&self) -> Segments<'a> {
        Segments::new(self.data, self.limits)
    }

    /// List all segments in their order of appearance
    pub fn segments(&self) -> Result<Vec<Segment<'a>>, Error> {
        self.segments_iter().collect()
    }

    /// List all segments with the given marker
    pub fn segments_marker(&self, marker: Marker) -> Result<Vec<Segment<'a>>, Error> {
        self.segments_iter()
            .filter(|x| x.as_ref().map_or(true, |x| x.marker() == marker))
            .collect()
    }

    /// First APP1 segment with Exif data
    ///
    /// Segments behind the Exif segment are not read.
    pub fn exif_segment(&self) -> Result<Segment<'a>, Error> {
        for segment in self.segments_iter() {
            let segment = segment?;
            if segment.marker() == Marker::APP1
                && segment.data().starts_with(EXIF_IDENTIFIER_STRING)
            {
                return Ok(segment);
            }
        }

        Err(Error::NoExifFound)
    }

    /// TIFF data of the Exif segment
    pub fn exif_data(&self) -> Result<&'a [u8], Error> {
        Ok(self.exif_range()?.slice(self.data)?)
    }
}

impl ExifLocator for Jpeg<'_> {
    type Error = Error;

    fn exif_range(&self) -> Result<ByteRange, Error> {
        let segment = self.exif_segment()?;
        let start = segment
            .data_pos()
            .safe_add(EXIF_IDENTIFIER_STRING.len())?;
        let end = segment.data_pos().safe_add(segment.data().len())?;

        Ok(ByteRange::from_bounds(start, end)?)
    }
}

civetta_common::utils::convertible_enum!(
    #[repr(u8)]
    #[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
    pub enum Marker {
        SOF0 = 0xC0,
        SOF1 = 0xC1,
        SOF2 = 0xC2,
        /// Define Huffman table
        DHT = 0xC4,
        /// Start of image
        SOI = 0xD8,
        /// End of image
        EOI = 0xD9,
        /// Start of scan
        SOS = 0xDA,
        DQT = 0xDB,
        DRI = 0xDD,
        APP0 = 0xE0,
        /// Exif, XMP
        APP1 = 0xE1,
        /// ICC color profile
        APP2 = 0xE2,
        APP3 = 0xE3,
        APP4 = 0xE4,
        APP5 = 0xE5,
        APP6 = 0xE6,
        APP7 = 0xE7,
        APP8 = 0xE8,
        APP13 = 0xED,
        APP14 = 0xEE,
        /// Comment
        COM = 0xFE,
    }
);

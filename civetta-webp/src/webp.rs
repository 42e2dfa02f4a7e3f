use civetta_common::image::{ExifLocator, ImageFormat};
use civetta_common::limits::Limits;
use civetta_common::math::*;
use civetta_common::range::ByteRange;

use crate::{Chunk, Error, FourCC, Riff};

pub const RIFF_MAGIC_BYTES: &[u8] = b"RIFF";
pub const WEBP_MAGIC_BYTES: &[u8] = b"WEBP";
pub const EXIF_IDENTIFIER_STRING: &[u8] = b"Exif\0\0";

/// Representation of a WebP image
#[derive(Debug, Clone)]
pub struct WebP<'a> {
    data: &'a [u8],
    limits: Limits,
}

impl ImageFormat for WebP<'_> {
    const NAME: &'static str = "WebP";
    const MEDIA_TYPE: &'static str = "image/webp";

    fn is_filetype(data: &[u8]) -> bool {
        data.starts_with(RIFF_MAGIC_BYTES) && data.get(8..12) == Some(WEBP_MAGIC_BYTES)
    }
}

impl<'a> WebP<'a> {
    /// Returns WebP image representation
    ///
    /// * `data`: WebP image data starting with RIFF magic byte
    pub fn new(data: &'a [u8]) -> Result<Self, Error> {
        Self::with_limits(data, Limits::default())
    }

    pub fn with_limits(data: &'a [u8], limits: Limits) -> Result<Self, Error> {
        if !Self::is_filetype(data) {
            return Err(Error::NotWebp);
        }

        Ok(Self { data, limits })
    }

    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    pub fn limits(&self) -> Limits {
        self.limits
    }

    /// Parses the RIFF structure
    pub fn riff(&self) -> Result<Riff<'a>, Error> {
        let riff = Riff::with_limits(self.data, self.limits)?;

        let form_type = riff.form_type()?;
        if form_type != WEBP_MAGIC_BYTES {
            return Err(Error::WrongFormType(form_type));
        }

        Ok(riff)
    }

    /// Returns all chunks inside of the RIFF chunk
    pub fn chunks(&self) -> Result<Vec<Chunk<'a>>, Error> {
        self.riff()?.sub_chunks()
    }

    /// First `EXIF` chunk
    pub fn exif_chunk(&self) -> Result<Chunk<'a>, Error> {
        for chunk in self.riff()?.sub_chunks_iter()? {
            let chunk = chunk?;
            if chunk.four_cc() == FourCC::EXIF {
                return Ok(chunk);
            }
        }

        Err(Error::NoExifFound)
    }

    pub fn exif_data(&self) -> Result<&'a [u8], Error> {
        Ok(self.exif_range()?.slice(self.data)?)
    }
}

impl ExifLocator for WebP<'_> {
    type Error = Error;

    /// Payload of the `EXIF` chunk without a leading `Exif\0\0`
    fn exif_range(&self) -> Result<ByteRange, Error> {
        let chunk = self.exif_chunk()?;
        let end = chunk.payload_pos().safe_add(chunk.len())?;

        let start = if chunk.payload().starts_with(EXIF_IDENTIFIER_STRING) {
            tracing::debug!("Skipping Exif identifier in EXIF chunk");
            chunk
                .payload_pos()
                .safe_add(EXIF_IDENTIFIER_STRING.len())?
        } else {
            chunk.payload_pos()
        };

        Ok(ByteRange::from_bounds(start, end)?)
    }
}

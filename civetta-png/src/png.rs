use civetta_common::image::{ExifLocator, ImageFormat};
use civetta_common::limits::Limits;
use civetta_common::range::ByteRange;

use crate::{Chunk, ChunkType, Chunks, Error};

pub const MAGIC_BYTES: &[u8] = &[137, 80, 78, 71, 13, 10, 26, 10];

/// Representation of a PNG image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Png<'a> {
    data: &'a [u8],
    limits: Limits,
}

impl ImageFormat for Png<'_> {
    const NAME: &'static str = "PNG";
    const MEDIA_TYPE: &'static str = "image/png";

    /// Checks if passed data have PNG magic bytes
    ///
    /// The data must be at least twice as long as the magic bytes.
    fn is_filetype(data: &[u8]) -> bool {
        data.len() >= MAGIC_BYTES.len().saturating_mul(2) && data.starts_with(MAGIC_BYTES)
    }
}

impl<'a> Png<'a> {
    /// Returns PNG image representation
    ///
    /// * `data`: PNG image data starting with magic byte
    pub fn new(data: &'a [u8]) -> Result<Self, Error> {
        Self::with_limits(data, Limits::default())
    }

    pub fn with_limits(data: &'a [u8], limits: Limits) -> Result<Self, Error> {
        if !Self::is_filetype(data) {
            return Err(Error::InvalidMagicBytes);
        }

        Ok(Self { data, limits })
    }

    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    pub fn limits(&self) -> Limits {
        self.limits
    }

    pub fn chunks_iter(&self) -> Chunks<'a> {
        Chunks::new(self.data, MAGIC_BYTES.len(), self.limits)
    }

    /// Returns all chunks
    pub fn chunks(&self) -> Result<Vec<Chunk<'a>>, Error> {
        self.chunks_iter().collect()
    }

    /// First [`eXIf`](ChunkType::eXIf) chunk
    pub fn exif_chunk(&self) -> Result<Chunk<'a>, Error> {
        for chunk in self.chunks_iter() {
            let chunk = chunk?;
            if chunk.chunk_type() == ChunkType::eXIf {
                return Ok(chunk);
            }
        }

        Err(Error::NoExifFound)
    }

    /// Returns raw Exif data
    pub fn exif_data(&self) -> Result<&'a [u8], Error> {
        Ok(self.exif_chunk()?.chunk_data())
    }
}

impl ExifLocator for Png<'_> {
    type Error = Error;

    fn exif_range(&self) -> Result<ByteRange, Error> {
        let chunk = self.exif_chunk()?;
        let start = chunk.data_pos();
        let end = start.saturating_add(chunk.chunk_data().len());

        Ok(ByteRange::from_bounds(start, end)?)
    }
}

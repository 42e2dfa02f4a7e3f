#![doc = include_str!("../README.md")]

mod image;

pub use civetta_common as common;
pub use civetta_common::error::ErrorKind;
pub use civetta_common::limits::Limits;
pub use civetta_common::range::ByteRange;
pub use civetta_exif::Exif;
pub use image::{Format, Image};

use civetta_common::read::ReadError;

/// Detects the image format
///
/// The formats are checked in the order JPEG, PNG, HEIC, WebP, CR2, CRW, and
/// TIFF.
pub fn identify(data: &[u8]) -> Result<Image<'_>, Error> {
    Image::new(data)
}

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Image format not recognized")]
    NotRecognized,
    #[error("JPEG: {0}")]
    Jpeg(#[from] civetta_jpeg::Error),
    #[error("PNG: {0}")]
    Png(#[from] civetta_png::Error),
    #[error("WebP: {0}")]
    Webp(#[from] civetta_webp::Error),
    #[error("HEIC: {0}")]
    Heic(#[from] civetta_heic::Error),
    #[error("CRW: {0}")]
    Crw(#[from] civetta_crw::Error),
    #[error("TIFF: {0}")]
    Tiff(#[from] civetta_tiff::Error),
    #[error("Exif: {0}")]
    Exif(#[from] civetta_exif::error::Error),
    #[error("Read: {0}")]
    Read(#[from] ReadError),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotRecognized => ErrorKind::NotRecognized,
            Self::Jpeg(err) => err.kind(),
            Self::Png(err) => err.kind(),
            Self::Webp(err) => err.kind(),
            Self::Heic(err) => err.kind(),
            Self::Crw(err) => err.kind(),
            Self::Tiff(err) => err.kind(),
            Self::Exif(err) => err.kind(),
            Self::Read(err) => err.kind(),
        }
    }
}

static_assertions::assert_impl_all!(Image<'static>: Send, Sync);
static_assertions::assert_impl_all!(Exif<'static>: Send, Sync);
static_assertions::assert_impl_all!(Error: Send, Sync);
static_assertions::assert_impl_all!(civetta_heic::Bmff<'static>: Send, Sync);
static_assertions::assert_impl_all!(civetta_crw::Heap<'static>: Send, Sync);
static_assertions::assert_impl_all!(civetta_webp::Riff<'static>: Send, Sync);
static_assertions::assert_impl_all!(civetta_exif::internal::TiffRaw<'static>: Send, Sync);

use civetta_common::image::{ExifLocator, ImageFormat};
use civetta_common::limits::Limits;
use civetta_common::range::ByteRange;
use civetta_crw::Crw;
use civetta_exif::Exif;
use civetta_heic::Heic;
use civetta_jpeg::Jpeg;
use civetta_png::Png;
use civetta_tiff::{Cr2, Tiff};
use civetta_webp::WebP;

use crate::Error;

/// Recognized image
#[derive(Debug, Clone)]
pub enum Image<'a> {
    Jpeg(Jpeg<'a>),
    Png(Png<'a>),
    Webp(WebP<'a>),
    Heic(Heic<'a>),
    Cr2(Cr2<'a>),
    Crw(Crw<'a>),
    Tif(Tiff<'a>),
}

/// Image format without the data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    Jpeg,
    Png,
    Webp,
    Heic,
    Cr2,
    Crw,
    Tif,
}

impl Format {
    pub fn name(self) -> &'static str {
        match self {
            Self::Jpeg => Jpeg::NAME,
            Self::Png => Png::NAME,
            Self::Webp => WebP::NAME,
            Self::Heic => Heic::NAME,
            Self::Cr2 => Cr2::NAME,
            Self::Crw => Crw::NAME,
            Self::Tif => Tiff::NAME,
        }
    }

    pub fn media_type(self) -> &'static str {
        match self {
            Self::Jpeg => Jpeg::MEDIA_TYPE,
            Self::Png => Png::MEDIA_TYPE,
            Self::Webp => WebP::MEDIA_TYPE,
            Self::Heic => Heic::MEDIA_TYPE,
            Self::Cr2 => Cr2::MEDIA_TYPE,
            Self::Crw => Crw::MEDIA_TYPE,
            Self::Tif => Tiff::MEDIA_TYPE,
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl<'a> Image<'a> {
    pub fn new(data: &'a [u8]) -> Result<Self, Error> {
        Self::with_limits(data, Limits::default())
    }

    /// Checks the signatures in a fixed order and returns the first match
    pub fn with_limits(data: &'a [u8], limits: Limits) -> Result<Self, Error> {
        if Jpeg::is_filetype(data) {
            return Ok(Self::Jpeg(Jpeg::with_limits(data, limits)?));
        }

        if Png::is_filetype(data) {
            return Ok(Self::Png(Png::with_limits(data, limits)?));
        }

        if Heic::is_filetype(data) {
            return Ok(Self::Heic(Heic::with_limits(data, limits)?));
        }

        if WebP::is_filetype(data) {
            return Ok(Self::Webp(WebP::with_limits(data, limits)?));
        }

        if Cr2::is_filetype(data) {
            return Ok(Self::Cr2(Cr2::with_limits(data, limits)?));
        }

        if Crw::is_filetype(data) {
            return Ok(Self::Crw(Crw::with_limits(data, limits)?));
        }

        if Tiff::is_filetype(data) {
            return Ok(Self::Tif(Tiff::with_limits(data, limits)?));
        }

        Err(Error::NotRecognized)
    }

    pub fn format(&self) -> Format {
        match self {
            Self::Jpeg(_) => Format::Jpeg,
            Self::Png(_) => Format::Png,
            Self::Webp(_) => Format::Webp,
            Self::Heic(_) => Format::Heic,
            Self::Cr2(_) => Format::Cr2,
            Self::Crw(_) => Format::Crw,
            Self::Tif(_) => Format::Tif,
        }
    }

    pub fn name(&self) -> &'static str {
        self.format().name()
    }

    pub fn media_type(&self) -> &'static str {
        self.format().media_type()
    }

    /// Complete image data
    pub fn data(&self) -> &'a [u8] {
        match self {
            Self::Jpeg(jpeg) => jpeg.data(),
            Self::Png(png) => png.data(),
            Self::Webp(webp) => webp.data(),
            Self::Heic(heic) => heic.data(),
            Self::Cr2(cr2) => cr2.data(),
            Self::Crw(crw) => crw.data(),
            Self::Tif(tiff) => tiff.data(),
        }
    }

    /// Location of the TIFF blob with the Exif data
    pub fn exif_range(&self) -> Result<ByteRange, Error> {
        let range = match self {
            Self::Jpeg(jpeg) => jpeg.exif_range()?,
            Self::Png(png) => png.exif_range()?,
            Self::Webp(webp) => webp.exif_range()?,
            Self::Heic(heic) => heic.exif_range()?,
            Self::Cr2(cr2) => cr2.exif_range()?,
            Self::Crw(crw) => crw.exif_range()?,
            Self::Tif(tiff) => tiff.exif_range()?,
        };

        Ok(range)
    }

    pub fn exif_data(&self) -> Result<&'a [u8], Error> {
        Ok(self.exif_range()?.slice(self.data())?)
    }

    /// Decodes the Exif data
    pub fn exif(&self) -> Result<Exif<'a>, Error> {
        Ok(Exif::with_limits(self.exif_data()?, self.limits())?)
    }

    pub fn limits(&self) -> Limits {
        match self {
            Self::Jpeg(jpeg) => jpeg.limits(),
            Self::Png(png) => png.limits(),
            Self::Webp(webp) => webp.limits(),
            Self::Heic(heic) => heic.limits(),
            Self::Cr2(cr2) => cr2.limits(),
            Self::Crw(crw) => crw.limits(),
            Self::Tif(tiff) => tiff.limits(),
        }
    }
}

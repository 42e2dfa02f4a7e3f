use crate::range::ByteRange;

/// Container format that can carry Exif data
pub trait ImageFormat {
    /// Short display name
    const NAME: &'static str;
    /// IANA media type
    const MEDIA_TYPE: &'static str;

    /// Usually checks if data start with correct magic bytes
    fn is_filetype(data: &[u8]) -> bool;
}

/// Locates the TIFF blob inside a parsed container
pub trait ExifLocator {
    type Error;

    /// Range of the TIFF blob in the outer file
    fn exif_range(&self) -> Result<ByteRange, Self::Error>;
}

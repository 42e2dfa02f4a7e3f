use std::fmt::Debug;

use civetta_common::utils::{fourcc, FourCc};

civetta_common::utils::convertible_enum!(
    #[repr(u32)]
    #[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
    #[allow(non_camel_case_types)]
    /// Type of a chunk
    ///
    /// The value is stored as big endian [`u32`] of the original byte string.
    pub enum ChunkType {
        /// Header
        IHDR = fourcc(b"IHDR"),
        /// Image Data
        IDAT = fourcc(b"IDAT"),
        /// End of file
        IEND = fourcc(b"IEND"),

        /// Background Color
        bKGD = fourcc(b"bKGD"),
        /// Primary chromaticities
        cHRM = fourcc(b"cHRM"),
        /// Exif
        eXIf = fourcc(b"eXIf"),
        /// Embedded ICC profile
        iCCP = fourcc(b"iCCP"),
        /// Apple proprietary, information for faster image loading
        iDOT = fourcc(b"iDOT"),
        /// International textual data
        iTXt = fourcc(b"iTXt"),
        /// Physical pixel dimensions
        pHYs = fourcc(b"pHYs"),
        /// Image uses sRGB color space with the given rendering intent
        sRGB = fourcc(b"sRGB"),
        /// Textual information
        tEXt = fourcc(b"tEXt"),
        /// Image last-modification time
        tIME = fourcc(b"tIME"),
        /// Compressed textual data
        zTXt = fourcc(b"zTXt"),
    }
);

impl Debug for ChunkType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = FourCc(self.bytes());

        match self {
            Self::Unknown(_) => write!(f, "Unknown({name})"),
            _ => write!(f, "{name}"),
        }
    }
}

impl ChunkType {
    /// Returns the byte string of the chunk
    pub fn bytes(self) -> [u8; 4] {
        u32::to_be_bytes(self.into())
    }
}

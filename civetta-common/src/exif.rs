/// Tag and directory of an Exif field
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct TagIfd {
    pub tag: Tag,
    pub ifd: Ifd,
}

impl TagIfd {
    pub fn new(tag: Tag, ifd: Ifd) -> Self {
        Self { tag, ifd }
    }
}

impl<T: Field> From<T> for TagIfd {
    fn from(_value: T) -> Self {
        TagIfd {
            tag: T::TAG,
            ifd: T::IFD,
        }
    }
}

pub trait Field {
    const NAME: &'static str;
    const TAG: Tag;
    const IFD: Ifd;
}

/// Name of a known tag
///
/// Tags of the primary directory are also found when looking them up in the
/// thumbnail directory.
///
/// ```
/// # use civetta_common::exif::*;
/// assert_eq!(lookup_tag_name(TagIfd::new(Tag(0x10F), Ifd::Primary)), Some("Make"));
/// assert_eq!(lookup_tag_name(TagIfd::new(Tag(0x10F), Ifd::Thumbnail)), Some("Make"));
/// assert_eq!(lookup_tag_name(TagIfd::new(Tag(0x1D), Ifd::Gps)), Some("GPSDateStamp"));
/// assert_eq!(lookup_tag_name(TagIfd::new(Tag(0x1D), Ifd::Exif)), None);
/// ```
pub fn lookup_tag_name(tagifd: TagIfd) -> Option<&'static str> {
    let names = &crate::field::TAG_NAMES;
    names.get(&(tagifd.tag.0, tagifd.ifd)).copied().or_else(|| {
        (tagifd.ifd == Ifd::Thumbnail)
            .then(|| names.get(&(tagifd.tag.0, Ifd::Primary)).copied())
            .flatten()
    })
}

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, PartialOrd, Ord)]
pub struct Tag(pub u16);

impl Tag {
    pub const MAKE: Self = Self(0x010F);
    pub const MODEL: Self = Self(0x0110);
    pub const ORIENTATION: Self = Self(0x0112);
    pub const DATE_TIME: Self = Self(0x0132);

    pub const EXPOSURE_TIME: Self = Self(0x829A);
    pub const F_NUMBER: Self = Self(0x829D);
    pub const PHOTOGRAPHIC_SENSITIVITY: Self = Self(0x8827);
    pub const ISO_SPEED: Self = Self(0x8833);
    pub const DATE_TIME_ORIGINAL: Self = Self(0x9003);
    pub const OFFSET_TIME_ORIGINAL: Self = Self(0x9011);
    pub const APERTURE_VALUE: Self = Self(0x9202);
    pub const SUB_SEC_TIME_ORIGINAL: Self = Self(0x9291);
    pub const MAKER_NOTE: Self = Self(0x927C);

    pub const GPS_DATE_STAMP: Self = Self(0x001D);

    pub const EXIF_IFD_POINTER: Self = Self(0x8769);
    pub const GPS_INFO_IFD_POINTER: Self = Self(0x8825);
    pub const INTEROPERABILITY_IFD_POINTER: Self = Self(0xA005);

    /// Directory a pointer tag refers to
    ///
    /// See 4.6.3 in v3.0 standard
    pub fn exif_specific_ifd(&self) -> Option<Ifd> {
        match *self {
            Self::EXIF_IFD_POINTER => Some(Ifd::Exif),
            Self::GPS_INFO_IFD_POINTER => Some(Ifd::Gps),
            Self::INTEROPERABILITY_IFD_POINTER => Some(Ifd::Interoperability),
            _ => None,
        }
    }

    pub fn is_exif_specific_ifd(&self) -> bool {
        self.exif_specific_ifd().is_some()
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "0x{:04X}", self.0)
    }
}

/// Image file directory
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Ifd {
    Primary,
    Thumbnail,
    Exif,
    Gps,
    Interoperability,
}

impl Ifd {
    /// Role of the n-th directory in the main chain
    pub fn from_chain_index(index: usize) -> Self {
        match index {
            0 => Self::Primary,
            _ => Self::Thumbnail,
        }
    }
}

impl std::fmt::Display for Ifd {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Primary => "Primary",
            Self::Thumbnail => "Thumbnail",
            Self::Exif => "Exif",
            Self::Gps => "GPS",
            Self::Interoperability => "Interoperability",
        };
        f.write_str(s)
    }
}

use std::time::Duration;

use civetta_common::exif::Tag;
use civetta_common::limits::Limits;
use civetta_common::math::apex_to_f_number;
use civetta_common::orientation::Orientation;
use civetta_common::read::ByteView;
use once_cell::sync::OnceCell;

use crate::error::{Error, Result};
use crate::internal::*;

/// Vendor names as written by cameras and their common name
const MAKE_NAMES: &[(&str, &str)] = &[
    ("CASIO", "Casio"),
    ("SAMSUNG", "Samsung"),
    ("samsung", "Samsung"),
    ("NIKON CORPORATION", "Nikon"),
    ("NIKON", "Nikon"),
    ("Eastman Kodak Company", "Kodak"),
    ("LG Electronics", "LG"),
    ("HMD Global", "Nokia"),
];

/// Exif data with accessors for common fields
///
/// Lookups with [`DirectorySelector::Any`] search the Exif directory first
/// and the main chain afterwards. The Exif directory is loaded on first use.
#[derive(Debug)]
pub struct Exif<'a> {
    raw: TiffRaw<'a>,
    exif_directory: OnceCell<Option<Directory>>,
}

impl<'a> Exif<'a> {
    pub fn new(data: &'a [u8]) -> Result<Self> {
        Self::with_limits(data, Limits::default())
    }

    pub fn with_limits(data: &'a [u8], limits: Limits) -> Result<Self> {
        Ok(Self::from_raw(TiffRaw::parse_with_limits(data, limits)?))
    }

    pub fn from_raw(raw: TiffRaw<'a>) -> Self {
        Self {
            raw,
            exif_directory: OnceCell::new(),
        }
    }

    pub fn raw(&self) -> &TiffRaw<'a> {
        &self.raw
    }

    pub fn view(&self) -> ByteView<'a> {
        self.raw.view()
    }

    /// Directory referenced by the Exif pointer tag
    ///
    /// Returns `None` if the pointer does not exist or the directory can't be
    /// read.
    pub fn exif_directory(&self) -> Option<&Directory> {
        self.exif_directory
            .get_or_init(|| {
                let pointer = self
                    .raw
                    .entry(DirectorySelector::Any, Tag::EXIF_IFD_POINTER)
                    .ok()?;
                match self.raw.sub_directory(pointer) {
                    Ok(directory) => Some(directory),
                    Err(err) => {
                        tracing::info!("Failed to load Exif directory: {err}");
                        None
                    }
                }
            })
            .as_ref()
    }

    pub fn entry(&self, selector: DirectorySelector, tag: Tag) -> Result<&Entry> {
        if selector == DirectorySelector::Any {
            if let Some(entry) = self.exif_directory().and_then(|x| x.entry(tag)) {
                return Ok(entry);
            }
        }

        self.raw.entry(selector, tag)
    }

    pub fn ascii(&self, selector: DirectorySelector, tag: Tag) -> Result<String> {
        self.entry(selector, tag)?.ascii(&self.view())
    }

    /// Camera manufacturer
    ///
    /// Common vendor names are normalized, for example "NIKON CORPORATION"
    /// becomes "Nikon".
    pub fn make(&self) -> Result<String> {
        let make = self
            .raw
            .entry(DirectorySelector::Any, Tag::MAKE)?
            .ascii(&self.view())?;

        Ok(normalize_make(make))
    }

    /// Camera model
    ///
    /// If the model repeats the make, the make and the following separator
    /// are removed.
    pub fn model(&self) -> Result<String> {
        let (_, model) = self.make_model()?;
        Ok(model)
    }

    pub fn make_model(&self) -> Result<(String, String)> {
        let make = self.make()?;
        let model = self
            .raw
            .entry(DirectorySelector::Any, Tag::MODEL)?
            .ascii(&self.view())?;

        let model = strip_make(&make, &model).unwrap_or(model);

        Ok((make, model))
    }

    /// ISO sensitivity
    ///
    /// Falls back to `ISOSpeed` if `PhotographicSensitivity` is missing.
    pub fn iso(&self) -> Result<u16> {
        let entry = self
            .entry(DirectorySelector::Any, Tag::PHOTOGRAPHIC_SENSITIVITY)
            .or_else(|_| self.entry(DirectorySelector::Any, Tag::ISO_SPEED))?;

        entry.short(&self.view())
    }

    /// Aperture as f-number, computed from the APEX value
    pub fn aperture(&self) -> Result<f64> {
        let apex = self
            .entry(DirectorySelector::Any, Tag::APERTURE_VALUE)?
            .rational(&self.view())?;

        Ok(apex_to_f_number(apex.to_f64()))
    }

    /// Aperture as f-number
    pub fn f_number(&self) -> Result<f64> {
        Ok(self
            .entry(DirectorySelector::Any, Tag::F_NUMBER)?
            .rational(&self.view())?
            .to_f64())
    }

    pub fn exposure_time(&self) -> Result<Duration> {
        let r = self
            .entry(DirectorySelector::Any, Tag::EXPOSURE_TIME)?
            .rational(&self.view())?;

        // Common for phone cameras
        if r.denominator == 1000 {
            return Ok(Duration::from_millis(r.numerator.into()));
        }

        Duration::try_from_secs_f64(r.to_f64()).map_err(|_| Error::InvalidExposureTime(r))
    }

    /// Orientation from the first directory
    pub fn orientation(&self) -> Result<Orientation> {
        let value = self
            .raw
            .entry(DirectorySelector::Index(0), Tag::ORIENTATION)?
            .short(&self.view())?;

        Orientation::try_from(value).map_err(|_| Error::UnknownOrientation(value))
    }

    pub fn gps_info(&self) -> Result<GpsInfo<'a>> {
        let pointer = self
            .raw
            .entry(DirectorySelector::Any, Tag::GPS_INFO_IFD_POINTER)?;

        Ok(GpsInfo {
            directory: self.raw.sub_directory(pointer)?,
            view: self.view(),
        })
    }

    /// Interoperability directory, usually referenced from the Exif directory
    pub fn interoperability(&self) -> Result<Directory> {
        let pointer = self.entry(DirectorySelector::Any, Tag::INTEROPERABILITY_IFD_POINTER)?;
        self.raw.sub_directory(pointer)
    }

    /// Parses dates in the format `YYYY:MM:DD HH:MM:SS`
    #[cfg(feature = "chrono")]
    pub fn time(&self, selector: DirectorySelector, tag: Tag) -> Result<chrono::NaiveDateTime> {
        let s = self.ascii(selector, tag)?;
        civetta_common::datetime::parse_exif_datetime(&s).ok_or(Error::InvalidDateTime(s))
    }

    /// Time the picture was taken
    ///
    /// Sub-seconds are added from `SubSecTimeOriginal` as microseconds. If
    /// `OffsetTimeOriginal` is set, the time has a fixed offset.
    #[cfg(feature = "chrono")]
    pub fn time_original(&self) -> Result<civetta_common::datetime::DateTime> {
        use civetta_common::datetime::{parse_exif_offset, DateTime};

        let mut time = self.time(DirectorySelector::Any, Tag::DATE_TIME_ORIGINAL)?;

        if let Ok(subsec) = self.ascii(DirectorySelector::Any, Tag::SUB_SEC_TIME_ORIGINAL) {
            // Some devices write leading NULL bytes
            let subsec = subsec.trim_matches(|c: char| c == '\0' || c.is_whitespace());
            let digits = subsec.get(..9).unwrap_or(subsec);
            if let Ok(n) = digits.parse::<u32>() {
                if let Some(t) =
                    time.checked_add_signed(chrono::TimeDelta::microseconds(n.into()))
                {
                    time = t;
                }
            }
        }

        let offset = self
            .ascii(DirectorySelector::Any, Tag::OFFSET_TIME_ORIGINAL)
            .ok()
            .and_then(|x| parse_exif_offset(&x));

        Ok(
            match offset.and_then(|x| time.and_local_timezone(x).single()) {
                Some(t) => DateTime::FixedOffset(t),
                None => DateTime::Naive(time),
            },
        )
    }

    pub fn debug_dump(&self) -> String {
        self.raw.debug_dump()
    }
}

/// GPS directory
#[derive(Debug, Clone)]
pub struct GpsInfo<'a> {
    directory: Directory,
    view: ByteView<'a>,
}

impl GpsInfo<'_> {
    pub fn directory(&self) -> &Directory {
        &self.directory
    }

    pub fn entry(&self, tag: Tag) -> Result<&Entry> {
        self.directory.entry(tag).ok_or(Error::TagNotFound(tag))
    }

    /// Date as stored in `GPSDateStamp`, usually `YYYY:MM:DD`
    pub fn date(&self) -> Result<String> {
        self.entry(Tag::GPS_DATE_STAMP)?.ascii(&self.view)
    }
}

fn normalize_make(make: String) -> String {
    MAKE_NAMES
        .iter()
        .find(|(raw, _)| *raw == make)
        .map(|(_, name)| name.to_string())
        .unwrap_or(make)
}

/// Removes the make prefix from a model like "Canon EOS 400D"
fn strip_make(make: &str, model: &str) -> Option<String> {
    let prefix = model.get(..make.len())?;
    if make.is_empty() || !prefix.eq_ignore_ascii_case(make) {
        return None;
    }

    let rest = model.get(make.len()..)?;
    let mut chars = rest.chars();
    chars.next()?;
    let stripped = chars.as_str().trim();

    (!stripped.is_empty()).then(|| stripped.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn make_names() {
        assert_eq!(normalize_make("NIKON CORPORATION".into()), "Nikon");
        assert_eq!(normalize_make("samsung".into()), "Samsung");
        assert_eq!(normalize_make("Canon".into()), "Canon");
    }

    #[test]
    fn model_prefix() {
        assert_eq!(strip_make("Canon", "Canon EOS 400D").as_deref(), Some("EOS 400D"));
        assert_eq!(strip_make("Nikon", "NIKON D750").as_deref(), Some("D750"));
        assert_eq!(strip_make("Apple", "iPhone 6"), None);
        assert_eq!(strip_make("Canon", "Canon"), None);
        assert_eq!(strip_make("Canon", "Canon "), None);
    }
}

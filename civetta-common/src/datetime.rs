//! Exif date and time values

/// Date and time, with offset if the offset is known
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateTime {
    FixedOffset(chrono::DateTime<chrono::FixedOffset>),
    Naive(chrono::NaiveDateTime),
}

impl DateTime {
    /// Local date and time, ignoring the offset
    pub fn naive(&self) -> chrono::NaiveDateTime {
        match self {
            Self::FixedOffset(d) => d.naive_local(),
            Self::Naive(d) => *d,
        }
    }

    pub fn offset(&self) -> Option<chrono::FixedOffset> {
        match self {
            Self::FixedOffset(d) => Some(*d.offset()),
            Self::Naive(_) => None,
        }
    }
}

impl std::fmt::Display for DateTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FixedOffset(d) => write!(f, "{}", d),
            Self::Naive(d) => write!(f, "{}", d),
        }
    }
}

/// Parses the Exif format `YYYY:MM:DD HH:MM:SS`
///
/// ```
/// # use civetta_common::datetime::parse_exif_datetime;
/// let dt = parse_exif_datetime("2023:07:14 09:41:00").unwrap();
/// assert_eq!(dt.to_string(), "2023-07-14 09:41:00");
/// assert!(parse_exif_datetime("2023-07-14").is_none());
/// ```
pub fn parse_exif_datetime(s: &str) -> Option<chrono::NaiveDateTime> {
    chrono::NaiveDateTime::parse_from_str(s.trim(), "%Y:%m:%d %H:%M:%S").ok()
}

/// Parses offsets like `+02:00` as stored in `OffsetTime*` fields
///
/// ```
/// # use civetta_common::datetime::parse_exif_offset;
/// assert_eq!(parse_exif_offset("+02:00").unwrap().local_minus_utc(), 7200);
/// assert_eq!(parse_exif_offset("-05:30").unwrap().local_minus_utc(), -19800);
/// assert!(parse_exif_offset("   :  ").is_none());
/// ```
pub fn parse_exif_offset(s: &str) -> Option<chrono::FixedOffset> {
    let s = s.trim();
    let (sign, rest) = match s.as_bytes().first()? {
        b'+' => (1, s.get(1..)?),
        b'-' => (-1, s.get(1..)?),
        _ => return None,
    };
    let (hours, minutes) = rest.split_once(':')?;
    let hours: i32 = hours.parse().ok()?;
    let minutes: i32 = minutes.parse().ok()?;
    let seconds = hours.checked_mul(3600)?.checked_add(minutes.checked_mul(60)?)?;
    chrono::FixedOffset::east_opt(seconds.checked_mul(sign)?)
}

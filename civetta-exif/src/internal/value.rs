use civetta_common::math::*;
use civetta_common::read::{ByteView, ReadError};

use super::{Entry, Type};
use crate::error::{Error, Result};

/// Unsigned rational number as stored in [`Type::Rational`] entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct URational {
    pub numerator: u32,
    pub denominator: u32,
}

impl URational {
    /// Quotient with IEEE semantics
    ///
    /// A zero denominator gives infinity or NaN.
    pub fn to_f64(self) -> f64 {
        f64::from(self.numerator) / f64::from(self.denominator)
    }
}

impl std::fmt::Display for URational {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

/// Signed rational number as stored in [`Type::SRational`] entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SRational {
    pub numerator: i32,
    pub denominator: i32,
}

impl SRational {
    /// Quotient with IEEE semantics
    pub fn to_f64(self) -> f64 {
        f64::from(self.numerator) / f64::from(self.denominator)
    }
}

impl std::fmt::Display for SRational {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

/// Decoded value of an entry
#[derive(Debug, Clone, PartialEq)]
pub enum Value<'a> {
    Byte(u8),
    Bytes(&'a [u8]),
    Ascii(String),
    Short(u16),
    Shorts(Vec<u16>),
    Long(u32),
    Longs(Vec<u32>),
    Rational(URational),
    Rationals(Vec<URational>),
    Undefined(&'a [u8]),
    SLong(i32),
    SLongs(Vec<i32>),
    SRational(SRational),
    SRationals(Vec<SRational>),
}

impl std::fmt::Display for Value<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        fn list<T: std::fmt::Display>(
            f: &mut std::fmt::Formatter<'_>,
            values: &[T],
        ) -> std::fmt::Result {
            f.write_str("[")?;
            for (i, v) in values.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{v}")?;
            }
            f.write_str("]")
        }

        fn bytes(f: &mut std::fmt::Formatter<'_>, values: &[u8]) -> std::fmt::Result {
            const SHOWN: usize = 16;
            for v in values.iter().take(SHOWN) {
                write!(f, "{v:02X}")?;
            }
            if values.len() > SHOWN {
                write!(f, "… ({} bytes)", values.len())?;
            }
            Ok(())
        }

        match self {
            Self::Byte(v) => write!(f, "{v}"),
            Self::Bytes(v) | Self::Undefined(v) => bytes(f, v),
            Self::Ascii(v) => write!(f, "{v:?}"),
            Self::Short(v) => write!(f, "{v}"),
            Self::Shorts(v) => list(f, v),
            Self::Long(v) => write!(f, "{v}"),
            Self::Longs(v) => list(f, v),
            Self::Rational(v) => write!(f, "{v}"),
            Self::Rationals(v) => list(f, v),
            Self::SLong(v) => write!(f, "{v}"),
            Self::SLongs(v) => list(f, v),
            Self::SRational(v) => write!(f, "{v}"),
            Self::SRationals(v) => list(f, v),
        }
    }
}

/// Typed accessors
///
/// Every accessor checks the type of the entry. Accessors for a single value
/// additionally require a count of one.
impl Entry {
    /// Decodes all `count` values with `read` applied to each element offset
    fn elements<T>(
        &self,
        view: &ByteView,
        data_type: Type,
        read: impl Fn(&ByteView, usize) -> std::result::Result<T, ReadError>,
    ) -> Result<Vec<T>> {
        self.check_type(data_type)?;
        let data = self.data(view)?;
        let elements = ByteView::new(data, view.byte_order());
        let width = data_type.size().usize()?;

        (0..self.count)
            .map(|i| -> Result<T> {
                let position = i.usize()?.safe_mul(width)?;
                Ok(read(&elements, position)?)
            })
            .collect()
    }

    fn single<T>(
        &self,
        view: &ByteView,
        data_type: Type,
        read: impl Fn(&ByteView, usize) -> std::result::Result<T, ReadError>,
    ) -> Result<T> {
        self.check_type(data_type)?;
        self.check_single()?;
        let data = self.data(view)?;
        Ok(read(&ByteView::new(data, view.byte_order()), 0)?)
    }

    pub fn byte(&self, view: &ByteView) -> Result<u8> {
        self.single(view, Type::Byte, |v, i| v.u8(i))
    }

    pub fn bytes<'a>(&'a self, view: &ByteView<'a>) -> Result<&'a [u8]> {
        self.check_type(Type::Byte)?;
        self.data(view)
    }

    /// Text of an [`Type::Ascii`] entry
    ///
    /// One trailing NULL is removed, then surrounding whitespace. Invalid
    /// UTF-8 is replaced.
    pub fn ascii(&self, view: &ByteView) -> Result<String> {
        self.check_type(Type::Ascii)?;
        let data = self.data(view)?;
        let data = data.strip_suffix(b"\0").unwrap_or(data);

        Ok(String::from_utf8_lossy(data).trim().to_string())
    }

    pub fn short(&self, view: &ByteView) -> Result<u16> {
        self.single(view, Type::Short, |v, i| v.u16(i))
    }

    pub fn shorts(&self, view: &ByteView) -> Result<Vec<u16>> {
        self.elements(view, Type::Short, |v, i| v.u16(i))
    }

    pub fn long(&self, view: &ByteView) -> Result<u32> {
        self.single(view, Type::Long, |v, i| v.u32(i))
    }

    pub fn longs(&self, view: &ByteView) -> Result<Vec<u32>> {
        self.elements(view, Type::Long, |v, i| v.u32(i))
    }

    pub fn rational(&self, view: &ByteView) -> Result<URational> {
        self.single(view, Type::Rational, read_rational)
    }

    pub fn rationals(&self, view: &ByteView) -> Result<Vec<URational>> {
        self.elements(view, Type::Rational, read_rational)
    }

    pub fn slong(&self, view: &ByteView) -> Result<i32> {
        self.single(view, Type::SLong, |v, i| v.i32(i))
    }

    pub fn slongs(&self, view: &ByteView) -> Result<Vec<i32>> {
        self.elements(view, Type::SLong, |v, i| v.i32(i))
    }

    pub fn srational(&self, view: &ByteView) -> Result<SRational> {
        self.single(view, Type::SRational, read_srational)
    }

    pub fn srationals(&self, view: &ByteView) -> Result<Vec<SRational>> {
        self.elements(view, Type::SRational, read_srational)
    }

    pub fn undefined<'a>(&'a self, view: &ByteView<'a>) -> Result<&'a [u8]> {
        self.check_type(Type::Undefined)?;
        self.data(view)
    }

    /// Value decoded according to the type of the entry
    pub fn value<'a>(&'a self, view: &ByteView<'a>) -> Result<Value<'a>> {
        let single = self.count == 1;
        Ok(match self.data_type {
            Type::Byte if single => Value::Byte(self.byte(view)?),
            Type::Byte => Value::Bytes(self.bytes(view)?),
            Type::Ascii => Value::Ascii(self.ascii(view)?),
            Type::Short if single => Value::Short(self.short(view)?),
            Type::Short => Value::Shorts(self.shorts(view)?),
            Type::Long if single => Value::Long(self.long(view)?),
            Type::Long => Value::Longs(self.longs(view)?),
            Type::Rational if single => Value::Rational(self.rational(view)?),
            Type::Rational => Value::Rationals(self.rationals(view)?),
            Type::Undefined => Value::Undefined(self.undefined(view)?),
            Type::SLong if single => Value::SLong(self.slong(view)?),
            Type::SLong => Value::SLongs(self.slongs(view)?),
            Type::SRational if single => Value::SRational(self.srational(view)?),
            Type::SRational => Value::SRationals(self.srationals(view)?),
            Type::Unknown(t) => return Err(Error::UnknownType(t)),
        })
    }

    /// Single integer like value
    ///
    /// Works for single [`Type::Byte`], [`Type::Ascii`], [`Type::Short`],
    /// [`Type::Long`], and [`Type::SLong`] values.
    pub fn int(&self, view: &ByteView) -> Result<i64> {
        match self.data_type {
            Type::Byte | Type::Ascii => {
                self.check_single()?;
                Ok(i64::from(self.raw[0]))
            }
            Type::Short => Ok(i64::from(self.short(view)?)),
            Type::Long => Ok(i64::from(self.long(view)?)),
            Type::SLong => Ok(i64::from(self.slong(view)?)),
            other => Err(Error::NotAnInteger(other)),
        }
    }

    /// Single float like value, including rationals
    pub fn float(&self, view: &ByteView) -> Result<f64> {
        match self.data_type {
            Type::Rational => Ok(self.rational(view)?.to_f64()),
            Type::SRational => Ok(self.srational(view)?.to_f64()),
            Type::Byte | Type::Ascii | Type::Short | Type::Long | Type::SLong => {
                Ok(int_to_f64(self.int(view)?))
            }
            other => Err(Error::NotAFloat(other)),
        }
    }
}

/// Integers stem from 32 bit values and are exact in `f64`
fn int_to_f64(v: i64) -> f64 {
    match u32::try_from(v) {
        Ok(u) => f64::from(u),
        Err(_) => i32::try_from(v).map(f64::from).unwrap_or(f64::NAN),
    }
}

fn read_rational(view: &ByteView, position: usize) -> std::result::Result<URational, ReadError> {
    Ok(URational {
        numerator: view.u32(position)?,
        denominator: view.u32(position.safe_add(4)?)?,
    })
}

fn read_srational(
    view: &ByteView,
    position: usize,
) -> std::result::Result<SRational, ReadError> {
    Ok(SRational {
        numerator: view.i32(position)?,
        denominator: view.i32(position.safe_add(4)?)?,
    })
}

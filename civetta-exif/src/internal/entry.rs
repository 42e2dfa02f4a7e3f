use civetta_common::math::*;
use civetta_common::read::{ByteOrder, ByteView};

use super::{Tag, Type};
use crate::error::{Error, Result};

/// A single 12 byte entry of a directory
///
/// The entry does not keep a reference to the data it was read from. All
/// accessors take the [`ByteView`] of the TIFF data as argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry {
    /// Offset of the entry within the TIFF data
    pub position: u32,
    pub tag: Tag,
    pub data_type: Type,
    /// Number of values, not bytes
    pub count: u32,
    /// Value or offset field as stored in the file
    pub raw: [u8; 4],
}

/// This can either be a value or an offset where to find the value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueOffset {
    /// Data fits into the four bytes of the entry
    Value([u8; 4]),
    /// Offset within the TIFF data where the values begin
    Offset(u32),
}

impl Entry {
    /// Reads the entry at `position`
    pub fn read(view: &ByteView, position: u32) -> Result<Self> {
        checked![position];
        let tag = Tag(view.u16(position.usize().check()?)?);
        let data_type = Type::from(view.u16((position + 2_u32).usize().check()?)?);
        let count = view.u32((position + 4_u32).usize().check()?)?;
        let raw = view.array((position + 8_u32).usize().check()?)?;

        Ok(Self {
            position: position.check()?,
            tag,
            data_type,
            count,
            raw,
        })
    }

    /// Total length of the values in bytes
    pub fn data_len(&self) -> Result<u32> {
        self.count
            .safe_mul(self.data_type.size())
            .map_err(|_| Error::DataSizeTooLarge {
                count: self.count,
                data_type: self.data_type,
            })
    }

    /// The value field interpreted as offset
    ///
    /// Sub-directory pointers are resolved this way.
    pub fn offset(&self, byte_order: ByteOrder) -> u32 {
        byte_order.u32(self.raw)
    }

    pub fn value_offset(&self, byte_order: ByteOrder) -> Result<ValueOffset> {
        Ok(if self.data_len()? <= 4 {
            ValueOffset::Value(self.raw)
        } else {
            ValueOffset::Offset(self.offset(byte_order))
        })
    }

    /// Bytes of all values
    ///
    /// Returns the beginning of the value field if the data fits into it,
    /// otherwise the referenced bytes of the TIFF data.
    pub fn data<'a>(&'a self, view: &ByteView<'a>) -> Result<&'a [u8]> {
        let len = self.data_len()?.usize()?;
        match self.value_offset(view.byte_order())? {
            ValueOffset::Value(_) => self.raw.get(..len).ok_or(Error::DataSizeTooLarge {
                count: self.count,
                data_type: self.data_type,
            }),
            ValueOffset::Offset(offset) => Ok(view.slice(offset.usize()?, len)?),
        }
    }

    pub(crate) fn check_type(&self, data_type: Type) -> Result<()> {
        if self.data_type == data_type {
            Ok(())
        } else {
            Err(Error::WrongType {
                expected: data_type,
                actual: self.data_type,
            })
        }
    }

    pub(crate) fn check_single(&self) -> Result<()> {
        if self.count == 1 {
            Ok(())
        } else {
            Err(Error::WrongCount {
                expected: 1,
                actual: self.count,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(data_type: Type, count: u32, raw: [u8; 4]) -> Entry {
        Entry {
            position: 0,
            tag: Tag(0x0100),
            data_type,
            count,
            raw,
        }
    }

    #[test]
    fn inline_rule() {
        let e = entry(Type::Short, 2, [0, 1, 0, 2]);
        assert_eq!(e.value_offset(ByteOrder::Big), Ok(ValueOffset::Value([0, 1, 0, 2])));

        let e = entry(Type::Short, 3, [0, 0, 0, 8]);
        assert_eq!(e.value_offset(ByteOrder::Big), Ok(ValueOffset::Offset(8)));

        let e = entry(Type::Rational, 1, [8, 0, 0, 0]);
        assert_eq!(e.value_offset(ByteOrder::Little), Ok(ValueOffset::Offset(8)));

        let e = entry(Type::Ascii, 4, *b"abc\0");
        assert_eq!(e.value_offset(ByteOrder::Little), Ok(ValueOffset::Value(*b"abc\0")));
    }

    #[test]
    fn size_overflow() {
        let e = entry(Type::Rational, u32::MAX, [0; 4]);
        assert_eq!(
            e.data_len(),
            Err(Error::DataSizeTooLarge {
                count: u32::MAX,
                data_type: Type::Rational
            })
        );
    }

    #[test]
    fn offset_outside_data() {
        let data = [0; 16];
        let view = ByteView::new(&data, ByteOrder::Little);

        let e = entry(Type::Long, 2, 12_u32.to_le_bytes());
        assert!(matches!(e.data(&view), Err(Error::Read(_))));

        let e = entry(Type::Long, 2, 8_u32.to_le_bytes());
        assert_eq!(e.data(&view).unwrap().len(), 8);
    }
}

use civetta_common::math::*;
use civetta_common::read::{ByteOrder, ByteView};

use crate::Error;

/// Sequential big endian reader over the payload of a box
#[derive(Debug, Clone)]
pub(crate) struct Cursor<'a> {
    view: ByteView<'a>,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            view: ByteView::new(data, ByteOrder::Big),
            pos: 0,
        }
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.view.len().saturating_sub(self.pos)
    }

    pub fn slice(&mut self, len: usize) -> Result<&'a [u8], Error> {
        let data = self.view.slice(self.pos, len)?;
        self.pos = self.pos.safe_add(len)?;
        Ok(data)
    }

    pub fn u8(&mut self) -> Result<u8, Error> {
        let v = self.view.u8(self.pos)?;
        self.pos = self.pos.safe_add(1)?;
        Ok(v)
    }

    pub fn u16(&mut self) -> Result<u16, Error> {
        let v = self.view.u16(self.pos)?;
        self.pos = self.pos.safe_add(2)?;
        Ok(v)
    }

    pub fn u32(&mut self) -> Result<u32, Error> {
        let v = self.view.u32(self.pos)?;
        self.pos = self.pos.safe_add(4)?;
        Ok(v)
    }

    pub fn u64(&mut self) -> Result<u64, Error> {
        let v = self.view.u64(self.pos)?;
        self.pos = self.pos.safe_add(8)?;
        Ok(v)
    }

    pub fn array4(&mut self) -> Result<[u8; 4], Error> {
        let v = self.view.array(self.pos)?;
        self.pos = self.pos.safe_add(4)?;
        Ok(v)
    }

    /// Unsigned integer with a size of 0, 4, or 8 bytes
    pub fn size048(&mut self, size: u8) -> Result<u64, Error> {
        match size {
            0 => Ok(0),
            4 => self.u32().map(u64::from),
            8 => self.u64(),
            other => Err(Error::InvalidFieldSize(other)),
        }
    }

    /// Version and flags of a full box
    pub fn fullbox_header(&mut self) -> Result<(u8, u32), Error> {
        let v = self.u32()?;
        let [version, ..] = v.to_be_bytes();
        Ok((version, v & 0x00FF_FFFF))
    }
}

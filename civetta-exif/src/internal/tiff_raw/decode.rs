use std::collections::HashSet;

use civetta_common::limits::Limits;
use civetta_common::math::*;
use civetta_common::read::{ByteOrder, ByteView};

use super::{Directory, TiffRaw};
use crate::error::{Error, Result};
use crate::internal::Entry;

/// Size of a directory entry
const ENTRY_SIZE: u32 = 12;

impl<'a> TiffRaw<'a> {
    /// Decode TIFF data with default [`Limits`]
    ///
    /// See 4.5.2 in v3.0 standard
    pub fn parse(data: &'a [u8]) -> Result<Self> {
        Self::parse_with_limits(data, Limits::default())
    }

    pub fn parse_with_limits(data: &'a [u8], limits: Limits) -> Result<Self> {
        if data.len() < 8 {
            return Err(Error::HeaderTooShort(data.len()));
        }

        let view = ByteView::new(data, ByteOrder::Little);
        let marker = view.array(0)?;
        let byte_order = ByteOrder::from_marker(marker).ok_or(Error::UnknownByteOrder(marker))?;
        let view = ByteView::new(data, byte_order);

        let magic = view.u16(2)?;
        if magic != 42 {
            return Err(Error::MagicBytesWrong(magic));
        }

        let mut tiff = Self {
            view,
            directories: Vec::new(),
            limits,
        };

        let offset = view.u32(4)?;
        tracing::debug!("TIFF data with {byte_order}, first directory at {offset}");
        tiff.decode_chain(offset)?;

        Ok(tiff)
    }

    fn decode_chain(&mut self, mut offset: u32) -> Result<()> {
        let mut visited = HashSet::new();

        while offset != 0 {
            if !visited.insert(offset) {
                return Err(Error::DirectoryCycle(offset));
            }

            if self.directories.len() >= self.limits.max_directories {
                return Err(Error::TooManyDirectories(self.limits.max_directories));
            }

            let directory = self.read_directory(offset)?;
            offset = directory.next;
            self.directories.push(directory);
        }

        tracing::debug!("Read {} directories", self.directories.len());

        Ok(())
    }

    /// Reads the directory at `offset`
    ///
    /// The entry table and the offset of the next directory must be inside of
    /// the data.
    pub fn read_directory(&self, offset: u32) -> Result<Directory> {
        let n_entries = self.view.u16(offset.usize()?)?;

        checked![offset];
        let table_start = offset + 2_u32;
        let next_position = table_start + Checked::new(u32::from(n_entries)) * ENTRY_SIZE;
        let end = next_position + 4_u32;

        // Entry table and next offset
        self.view
            .slice(offset.usize().check()?, (end - offset).usize().check()?)?;

        let offset = offset.check()?;
        tracing::debug!("Reading directory at {offset} with {n_entries} entries");

        let entries = (0..u32::from(n_entries))
            .map(|i| -> Result<Entry> {
                let position = (table_start + Checked::new(i) * ENTRY_SIZE).check()?;
                Entry::read(&self.view, position)
            })
            .collect::<Result<Vec<_>>>()?;

        let next = self.view.u32(next_position.usize().check()?)?;

        Ok(Directory {
            offset,
            entries,
            next,
        })
    }
}

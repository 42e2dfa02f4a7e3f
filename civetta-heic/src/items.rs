use civetta_common::math::*;
use civetta_common::range::ByteRange;
use civetta_common::utils::FourCc;

use crate::cursor::Cursor;
use crate::Error;

/// Entry of the item table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    /// Item number, starting with 1
    pub number: u16,
    /// Type from the `infe` box like `Exif` or `hvc1`
    pub item_type: Option<FourCc>,
    /// First extent from the `iloc` box
    pub location: Option<ByteRange>,
}

impl Item {
    fn new(number: u16) -> Self {
        Self {
            number,
            item_type: None,
            location: None,
        }
    }
}

/// Items described by `iinf` and `iloc`
///
/// The table is created by whichever of the two boxes comes first. The other
/// one must announce the same number of items.
#[derive(Debug, Clone, Default)]
pub(crate) struct ItemTable {
    items: Option<Vec<Item>>,
}

impl ItemTable {
    pub fn items(&self) -> &[Item] {
        self.items.as_deref().unwrap_or_default()
    }

    pub fn set_count(&mut self, count: usize) -> Result<(), Error> {
        match &self.items {
            None => {
                let count = count.u16()?;
                self.items = Some((1..=count).map(Item::new).collect());
                Ok(())
            }
            Some(items) if items.len() == count => Ok(()),
            Some(items) => Err(Error::ItemCountMismatch(items.len(), count)),
        }
    }

    fn item_mut(&mut self, number: u32) -> Option<&mut Item> {
        let index = number.checked_sub(1)?.usize().ok()?;
        self.items.as_mut()?.get_mut(index)
    }

    /// Reads an `infe` box of version 2 or 3
    pub fn parse_infe(&mut self, data: &[u8]) -> Result<(), Error> {
        let mut cursor = Cursor::new(data);
        let (version, _flags) = cursor.fullbox_header()?;

        let number = match version {
            2 => u32::from(cursor.u16()?),
            3 => cursor.u32()?,
            version => {
                tracing::info!("Skipping infe box with version {version}");
                return Ok(());
            }
        };
        let _protection_index = cursor.u16()?;
        let item_type = FourCc(cursor.array4()?);

        match self.item_mut(number) {
            Some(item) => {
                tracing::debug!("Item {number} has type {item_type}");
                item.item_type = Some(item_type);
            }
            None => tracing::info!("Ignoring infe for invalid item number {number}"),
        }

        Ok(())
    }

    /// Reads an `iloc` box of version 1
    ///
    /// The extents of all items together count against `max_extents`.
    pub fn parse_iloc(&mut self, data: &[u8], max_extents: usize) -> Result<(), Error> {
        let mut cursor = Cursor::new(data);
        let (version, _flags) = cursor.fullbox_header()?;
        if version != 1 {
            tracing::info!("Skipping iloc box with version {version}");
            return Ok(());
        }

        let [a, b] = cursor.u16()?.to_be_bytes();
        let offset_size = a >> 4;
        let length_size = a & 0x0F;
        let base_offset_size = b >> 4;
        let index_size = b & 0x0F;

        let item_count = cursor.u16()?;
        tracing::debug!("iloc with {item_count} items");
        self.set_count(usize::from(item_count))?;

        let mut extents = 0_usize;
        for _ in 0..item_count {
            let number = cursor.u16()?;
            let [_, method] = cursor.u16()?.to_be_bytes();
            let construction_method = method & 0x0F;
            let _data_reference_index = cursor.u16()?;
            let base_offset = cursor.size048(base_offset_size)?;
            let extent_count = cursor.u16()?;

            extents = extents.saturating_add(usize::from(extent_count));
            if extents > max_extents {
                return Err(Error::TooManyExtents(max_extents));
            }

            let mut first_extent = None;
            for _ in 0..extent_count {
                let _index = cursor.size048(index_size)?;
                let offset = cursor.size048(offset_size)?;
                let length = cursor.size048(length_size)?;
                if first_extent.is_none() {
                    first_extent = Some((offset, length));
                }
            }

            if construction_method != 0 {
                tracing::info!(
                    "Ignoring item {number} with construction method {construction_method}"
                );
                continue;
            }

            let Some((offset, length)) = first_extent else {
                tracing::info!("Ignoring item {number} without extents");
                continue;
            };

            let offset = base_offset.safe_add(offset)?;
            let location = ByteRange::new(offset.u32()?, length.u32()?);

            match self.item_mut(u32::from(number)) {
                Some(item) => {
                    tracing::debug!("Item {number} located at {location}");
                    item.location = Some(location);
                }
                None => tracing::info!("Ignoring iloc for invalid item number {number}"),
            }
        }

        Ok(())
    }
}

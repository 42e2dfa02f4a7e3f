use std::fmt::Debug;

use civetta_common::limits::Limits;
use civetta_common::math::*;
use civetta_common::read::{ByteOrder, ByteView};
use civetta_common::utils::{fourcc, FourCc};

use crate::cursor::Cursor;
use crate::items::ItemTable;
use crate::{Error, Item};

/// Size of length and type
const HEADER_SIZE: usize = 8;
/// Size of the 64 bit length following the header if the length is 1
const LARGE_SIZE: usize = 8;
/// Version and flags of a full box
const FULL_BOX_HEADER_SIZE: usize = 4;

civetta_common::utils::convertible_enum!(
    #[repr(u32)]
    #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    /// Type of a box
    ///
    /// The value is stored as big endian [`u32`] of the four character code.
    pub enum BoxType {
        File = fourcc(b"ftyp"),
        Meta = fourcc(b"meta"),
        Handler = fourcc(b"hdlr"),
        PrimaryItem = fourcc(b"pitm"),
        ItemInfo = fourcc(b"iinf"),
        ItemInfoEntry = fourcc(b"infe"),
        ItemLocation = fourcc(b"iloc"),
        ItemProperties = fourcc(b"iprp"),
        ItemReference = fourcc(b"iref"),
        ItemData = fourcc(b"idat"),
        MediaData = fourcc(b"mdat"),
        Movie = fourcc(b"moov"),
        Free = fourcc(b"free"),
    }
);

impl BoxType {
    pub fn bytes(self) -> [u8; 4] {
        u32::to_be_bytes(self.into())
    }
}

impl Debug for BoxType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", FourCc(self.bytes()))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ObjectBox<'a> {
    box_type: BoxType,
    pos: usize,
    header_len: usize,
    depth: usize,
    data: &'a [u8],
}

impl<'a> ObjectBox<'a> {
    pub fn box_type(&self) -> BoxType {
        self.box_type
    }

    /// Position of the box header in the file
    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn data_pos(&self) -> usize {
        self.pos.saturating_add(self.header_len)
    }

    /// Position behind the box
    pub fn end(&self) -> usize {
        self.data_pos().saturating_add(self.data.len())
    }

    /// Nesting level, zero for top-level boxes
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Payload of the box
    pub fn data(&self) -> &'a [u8] {
        self.data
    }
}

/// Iterator over a flat sequence of boxes in `data[start..end]`
#[derive(Debug, Clone)]
pub(crate) struct Boxes<'a> {
    view: ByteView<'a>,
    position: usize,
    depth: usize,
    done: bool,
}

impl<'a> Boxes<'a> {
    pub fn new(data: &'a [u8], start: usize, end: usize, depth: usize) -> Self {
        let data = data.get(..end).unwrap_or(data);
        Self {
            view: ByteView::new(data, ByteOrder::Big),
            position: start,
            depth,
            done: false,
        }
    }

    fn read_next(&mut self) -> Result<Option<ObjectBox<'a>>, Error> {
        let pos = self.position;
        if !self.view.has(pos, HEADER_SIZE) {
            if pos < self.view.len() {
                tracing::debug!("Ignoring trailing bytes at {pos}");
            }
            return Ok(None);
        }

        let size = self.view.u32(pos)?;
        let box_type = BoxType::from(self.view.u32(pos.safe_add(4)?)?);

        let (header_len, size) = match size {
            // Box extends to the end of the enclosing data
            0 => (HEADER_SIZE, self.view.len().safe_sub(pos)?.u64()?),
            1 => (
                HEADER_SIZE.safe_add(LARGE_SIZE)?,
                self.view.u64(pos.safe_add(HEADER_SIZE)?)?,
            ),
            size => (HEADER_SIZE, u64::from(size)),
        };

        let data_len = size
            .checked_sub(header_len.u64()?)
            .ok_or(Error::InvalidBoxSize {
                box_type,
                position: pos,
                size,
            })?;

        let data = self
            .view
            .slice(pos.safe_add(header_len)?, data_len.usize()?)?;
        tracing::debug!("Box {box_type:?} at {pos} with size {size}");

        self.position = pos.safe_add(header_len)?.safe_add(data.len())?;

        Ok(Some(ObjectBox {
            box_type,
            pos,
            header_len,
            depth: self.depth,
            data,
        }))
    }
}

impl<'a> Iterator for Boxes<'a> {
    type Item = Result<ObjectBox<'a>, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        match self.read_next() {
            Ok(Some(object_box)) => Some(Ok(object_box)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(err) => {
                self.done = true;
                Some(Err(err))
            }
        }
    }
}

/// Box structure of an ISO base media file
///
/// Only the `meta` box is entered. Inside of it, the item table is built from
/// the `iinf` and `iloc` boxes.
#[derive(Debug, Clone)]
pub struct Bmff<'a> {
    data: &'a [u8],
    boxes: Vec<ObjectBox<'a>>,
    items: ItemTable,
    limits: Limits,
}

impl<'a> Bmff<'a> {
    pub fn parse(data: &'a [u8]) -> Result<Self, Error> {
        Self::parse_with_limits(data, Limits::default())
    }

    pub fn parse_with_limits(data: &'a [u8], limits: Limits) -> Result<Self, Error> {
        let mut bmff = Self {
            data,
            boxes: Vec::new(),
            items: ItemTable::default(),
            limits,
        };

        for object_box in Boxes::new(data, 0, data.len(), 0) {
            let object_box = bmff.push(object_box?)?;
            if object_box.box_type() == BoxType::Meta {
                bmff.walk_meta(&object_box)?;
            }
        }

        Ok(bmff)
    }

    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    /// All visited boxes in the order of appearance
    pub fn boxes(&self) -> &[ObjectBox<'a>] {
        &self.boxes
    }

    /// List all boxes with the given type
    pub fn boxes_type(&self, box_type: BoxType) -> impl Iterator<Item = &ObjectBox<'a>> {
        self.boxes.iter().filter(move |x| x.box_type == box_type)
    }

    /// Item table, empty if neither `iinf` nor `iloc` were found
    pub fn items(&self) -> &[Item] {
        self.items.items()
    }

    /// First item with the type `item_type` that has a location
    pub fn item(&self, item_type: [u8; 4]) -> Option<&Item> {
        self.items()
            .iter()
            .find(|x| x.item_type == Some(FourCc(item_type)) && x.location.is_some())
    }

    fn push(&mut self, object_box: ObjectBox<'a>) -> Result<ObjectBox<'a>, Error> {
        if self.boxes.len() >= self.limits.max_structures {
            return Err(Error::TooManyBoxes(self.limits.max_structures));
        }

        self.boxes.push(object_box.clone());
        Ok(object_box)
    }

    fn walk_meta(&mut self, meta: &ObjectBox<'a>) -> Result<(), Error> {
        let mut cursor = Cursor::new(meta.data());
        let (version, _flags) = cursor.fullbox_header()?;
        tracing::debug!("Meta box version {version}");

        let start = meta.data_pos().safe_add(FULL_BOX_HEADER_SIZE)?;
        let depth = meta.depth().safe_add(1)?;

        for child in Boxes::new(self.data, start, meta.end(), depth) {
            let child = self.push(child?)?;
            match child.box_type() {
                BoxType::ItemInfo => self.walk_iinf(&child)?,
                BoxType::ItemLocation => {
                    let max_extents = self.limits.max_structures;
                    self.items.parse_iloc(child.data(), max_extents)?;
                }
                _ => {}
            }
        }

        Ok(())
    }

    fn walk_iinf(&mut self, iinf: &ObjectBox<'a>) -> Result<(), Error> {
        let mut cursor = Cursor::new(iinf.data());
        let (version, _flags) = cursor.fullbox_header()?;
        if version != 0 {
            tracing::info!("Skipping iinf box with version {version}");
            return Ok(());
        }

        let entry_count = cursor.u16()?;
        tracing::debug!("iinf with {entry_count} entries");
        self.items.set_count(usize::from(entry_count))?;

        let start = iinf.data_pos().safe_add(cursor.pos())?;
        let depth = iinf.depth().safe_add(1)?;

        let entries = Boxes::new(self.data, start, iinf.end(), depth);
        for entry in entries.take(usize::from(entry_count)) {
            let entry = self.push(entry?)?;
            if entry.box_type() == BoxType::ItemInfoEntry {
                self.items.parse_infe(entry.data())?;
            }
        }

        Ok(())
    }
}

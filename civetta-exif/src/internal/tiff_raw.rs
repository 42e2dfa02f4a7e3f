mod debug;
mod decode;
mod lookup;

use civetta_common::exif::Tag;
use civetta_common::limits::Limits;
use civetta_common::read::{ByteOrder, ByteView};

use super::Entry;

/// Image file directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directory {
    /// Offset of the directory within the TIFF data
    pub offset: u32,
    pub entries: Vec<Entry>,
    /// Offset of the next directory, zero at the end of the chain
    pub next: u32,
}

impl Directory {
    /// First entry with `tag`
    pub fn entry(&self, tag: Tag) -> Option<&Entry> {
        self.entries.iter().find(|x| x.tag == tag)
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Directories that are searched by lookups
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectorySelector {
    /// All directories of the chain in order, the first match wins
    Any,
    /// Only the n-th directory of the chain
    Index(usize),
}

/// Parsed TIFF structure
///
/// Holds the chain of directories starting at the offset given in the header.
/// Sub-directories like the Exif directory are not part of the chain and have
/// to be loaded via [`TiffRaw::read_directory`].
#[derive(Debug, Clone)]
pub struct TiffRaw<'a> {
    view: ByteView<'a>,
    directories: Vec<Directory>,
    limits: Limits,
}

impl<'a> TiffRaw<'a> {
    pub fn view(&self) -> ByteView<'a> {
        self.view
    }

    pub fn data(&self) -> &'a [u8] {
        self.view.data()
    }

    pub fn byte_order(&self) -> ByteOrder {
        self.view.byte_order()
    }

    pub fn directories(&self) -> &[Directory] {
        &self.directories
    }

    pub fn limits(&self) -> Limits {
        self.limits
    }
}

use civetta_common::exif::Tag;

use super::{Directory, DirectorySelector, TiffRaw};
use crate::error::{Error, Result};
use crate::internal::Entry;

impl TiffRaw<'_> {
    /// Directory at position `index` of the chain
    pub fn directory(&self, index: usize) -> Result<&Directory> {
        self.directories
            .get(index)
            .ok_or(Error::DirectoryNotFound(index))
    }

    /// First entry with `tag` in the selected directories
    pub fn entry(&self, selector: DirectorySelector, tag: Tag) -> Result<&Entry> {
        match selector {
            DirectorySelector::Any => self
                .directories
                .iter()
                .find_map(|x| x.entry(tag))
                .ok_or(Error::TagNotFound(tag)),
            DirectorySelector::Index(index) => self
                .directory(index)?
                .entry(tag)
                .ok_or(Error::TagNotFound(tag)),
        }
    }

    /// Loads the directory referenced by a pointer entry
    ///
    /// The value of the entry is used as offset, independent of its type.
    pub fn sub_directory(&self, pointer: &Entry) -> Result<Directory> {
        let offset = pointer.offset(self.byte_order());
        tracing::debug!("Following pointer {} to offset {offset}", pointer.tag);
        self.read_directory(offset)
    }
}

use std::collections::HashSet;
use std::fmt::Write;

use civetta_common::exif::{lookup_tag_name, Ifd, TagIfd};

use super::{Directory, TiffRaw};
use crate::internal::Entry;

impl TiffRaw<'_> {
    /// Human readable listing of all directories and entries
    ///
    /// Sub-directories referenced by pointer tags are listed after the chain.
    pub fn debug_dump(&self) -> String {
        let mut out = String::new();
        let mut visited = HashSet::new();
        let mut sub_directories = Vec::new();

        for (i, directory) in self.directories.iter().enumerate() {
            let ifd = Ifd::from_chain_index(i);
            visited.insert(directory.offset);
            let _ = writeln!(
                out,
                "\nDirectory {i} ({ifd}) at {}, next {}",
                directory.offset, directory.next
            );
            self.dump_entries(&mut out, directory, ifd, &mut sub_directories);
        }

        while let Some((ifd, pointer)) = sub_directories.pop() {
            let offset = pointer.offset(self.byte_order());
            if !visited.insert(offset) {
                tracing::info!("Ignoring duplicate directory at {offset}");
                continue;
            }

            match self.sub_directory(&pointer) {
                Ok(directory) => {
                    let _ = writeln!(out, "\n{ifd} at {offset}");
                    self.dump_entries(&mut out, &directory, ifd, &mut sub_directories);
                }
                Err(err) => {
                    let _ = writeln!(out, "\n{ifd} at {offset}: {err}");
                }
            }
        }

        out
    }

    fn dump_entries(
        &self,
        out: &mut String,
        directory: &Directory,
        ifd: Ifd,
        sub_directories: &mut Vec<(Ifd, Entry)>,
    ) {
        out.push_str("------------------------------\n");
        for entry in directory.entries() {
            let name = lookup_tag_name(TagIfd::new(entry.tag, ifd)).unwrap_or("Unknown");
            let value = match entry.value(&self.view) {
                Ok(value) => value.to_string(),
                Err(err) => format!("<{err}>"),
            };
            let _ = writeln!(
                out,
                "{name} ({}) {:?}({}): {value}",
                entry.tag, entry.data_type, entry.count
            );

            if let Some(sub_ifd) = entry.tag.exif_specific_ifd() {
                sub_directories.push((sub_ifd, *entry));
            }
        }
    }
}

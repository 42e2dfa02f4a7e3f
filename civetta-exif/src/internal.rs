//! Low level access to TIFF directories and entries

mod entry;
mod tiff_raw;
mod type_;
mod value;

pub use civetta_common::exif::{Ifd, Tag, TagIfd};
pub use civetta_common::read::{ByteOrder, ByteView};
pub use entry::{Entry, ValueOffset};
pub use tiff_raw::{Directory, DirectorySelector, TiffRaw};
pub use type_::Type;
pub use value::{SRational, URational, Value};

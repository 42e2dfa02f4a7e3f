#![doc = include_str!("../README.md")]

mod bmff;
mod cursor;
mod error;
mod heic;
mod items;

pub use bmff::*;
pub use error::*;
pub use heic::*;
pub use items::*;

#![doc = include_str!("../README.md")]

mod crw;
mod error;
mod heap;
mod record;

pub use crw::*;
pub use error::*;
pub use heap::*;
pub use record::*;

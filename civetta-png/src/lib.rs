#![doc = include_str!("../README.md")]

mod chunk;
mod chunk_type;
mod error;
mod png;

pub use chunk::*;
pub use chunk_type::*;
pub use error::*;
pub use png::*;

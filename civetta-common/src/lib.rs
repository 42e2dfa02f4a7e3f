#![doc = include_str!("../README.md")]

#[cfg(feature = "chrono")]
pub mod datetime;
pub mod error;
pub mod exif;
pub mod field;
pub mod image;
pub mod limits;
pub mod math;
pub mod orientation;
pub mod range;
pub mod read;
pub mod utils;

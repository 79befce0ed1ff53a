//! I/O layer: decoding source rasters and writing rendered or processed
//! images to disk.
pub mod png;
pub use png::{read_rgb, read_rgba};

pub mod writers;

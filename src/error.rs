//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Converts underlying I/O, image, and model-loading errors, and provides semantic
//! variants for argument validation, processing, and render failures.
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Model loader error: {0}")]
    Model(#[from] crate::model::ModelError),

    #[error("Image codec error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Source image is fully transparent")]
    EmptyAlphaRegion,

    #[error("Invalid target dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Destination already exists: {path} (use --force to overwrite)")]
    DestinationExists { path: PathBuf },

    #[error("Render error: {0}")]
    Render(String),

    #[error("Invalid argument: {arg}={value}")]
    InvalidArgument { arg: &'static str, value: String },

    #[error("Processing error: {0}")]
    Processing(String),

    #[error("External error: {0}")]
    External(String),
}

impl Error {
    pub fn external<E: std::fmt::Display>(e: E) -> Self {
        Error::External(e.to_string())
    }
}

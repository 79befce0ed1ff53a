//! Core processing building blocks: alpha crop, resize, background compositing,
//! banner trim, and parameter structs. These are internal primitives consumed
//! by the high-level `api` module.
pub mod params;
pub mod processing;

pub mod alpha;
pub mod compose;
pub mod pipeline;
pub mod resize;
pub mod trim;

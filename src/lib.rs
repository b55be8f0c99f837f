pub mod config;
pub mod background;
pub mod segmentation;
pub mod objects;
pub mod lanes;
pub mod congestion;
pub mod record;
pub mod pipeline;
pub mod visualization;

// Re-export main types
pub use crate::config::Config;
pub use crate::lanes::LaneBoundaries;
pub use crate::pipeline::{FrameAnalysis, Pipeline};
pub use crate::record::{FrameRecord, RecordAssembler, RecordLog};

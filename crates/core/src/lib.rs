// crates/core/src/lib.rs
//! Domain core for the FOKUS focus tracker: record types, the statistics
//! pipeline, the coach prompt, and the inference provider seam.

pub mod coach;
pub mod llm;
pub mod paths;
pub mod stats;
pub mod types;

pub use coach::*;
pub use stats::*;
pub use types::*;

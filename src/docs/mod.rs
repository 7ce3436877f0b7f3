//! Documentation generation orchestration.
//!
//! Drives a full run: load descriptors, build the comment index, construct
//! per-type models, and write the markdown reference plus the schema
//! document to their output directories.

mod generator;

pub use generator::{DocsGenerator, GenerationSummary};

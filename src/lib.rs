//! Scriptdoc - Command reference and schema generation for script modules.
//!
//! Scriptdoc inspects a compiled script module's type metadata together with
//! its XML documentation comments and produces both human-readable markdown
//! reference documentation and a machine-readable parameter schema for the
//! module's command vocabulary. The main pieces are:
//!
//! - Type descriptor model fed by a JSON metadata dump
//! - Documentation-comment index with cross-reference resolution
//! - Parameter value-shape classification for the script validator
//! - Markdown and JSON schema rendering per type
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use scriptdoc::docs::DocsGenerator;
//!
//! # fn main() -> scriptdoc::Result<()> {
//! let generator = DocsGenerator::new()
//!     .with_output_dir("docs/api")
//!     .with_schema_dir("docs/api");
//!
//! // Generate from a metadata dump; documentation XML is picked up from
//! // the sibling .xml file.
//! generator.generate_from_paths("module.json".as_ref(), None, Some("^Script"))?;
//! # Ok(())
//! # }
//! ```

/// Documentation-comment parsing and the per-type comment index.
pub mod comments;

/// Core error types and result aliases.
pub mod core;

/// Documentation generation orchestration and output writing.
pub mod docs;

/// Type metadata model, marker vocabulary, and the dump loader.
pub mod metadata;

/// Per-type documentation models and markdown rendering.
pub mod model;

/// Canonical display names for type descriptors.
pub mod naming;

/// Parameter extraction, shape classification, and schema output.
pub mod schema;

/// Tracing subscriber setup for the CLI binary.
pub mod tracing_config;

/// Re-exported core types for convenience.
pub use self::core::{Result, ScriptdocError};

//! Parameter extraction, value-shape classification, and schema output.
//!
//! Command parameters are discovered through marker attributes, classified
//! into the closed [`ValueShape`] taxonomy, and projected into the serde
//! structures that make up the machine-readable schema document.

mod classify;
mod output;
mod params;
mod shape;

pub use classify::classify;
pub use output::{CommandSchema, DataTypeSchema, ParameterSchema};
pub use params::{ParameterDescriptor, extract_parameters};
pub use shape::{ContentType, ValueShape};

#[cfg(test)]
mod tests;

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Error types for the scriptdoc application.
///
/// This enum represents all possible errors that can occur while loading
/// module metadata, parsing documentation comments, and writing generated
/// output. Failures inside the extraction engine itself are unit-scoped
/// (a malformed entry is skipped, not raised), so these variants cover the
/// collaborator surface: file access, input deserialization, and filters.
#[derive(Error, Debug)]
pub enum ScriptdocError {
    /// I/O operation error
    #[error("I/O error on '{path}': {details}")]
    Io {
        /// Path where the I/O error occurred
        path: PathBuf,
        /// I/O error details
        details: String,
    },

    /// Metadata dump could not be read as a descriptor list
    #[error("failed to parse metadata dump '{path}': {details}")]
    MetadataParse {
        /// Path of the metadata dump being parsed
        path: PathBuf,
        /// Parse error details
        details: String,
    },

    /// Documentation tree could not be parsed as XML
    #[error("failed to parse documentation tree: {details}")]
    DocTreeParse {
        /// Parse error details
        details: String,
    },

    /// Namespace filter is not a valid regular expression
    #[error("invalid namespace filter '{pattern}': {details}")]
    InvalidNamespaceFilter {
        /// The filter pattern supplied by the caller
        pattern: String,
        /// Regex compilation error details
        details: String,
    },
}

/// A specialized `Result` type for scriptdoc operations.
///
/// This type alias simplifies error handling by defaulting the error type
/// to `ScriptdocError` for all scriptdoc operations.
pub type Result<T> = std::result::Result<T, ScriptdocError>;

impl ScriptdocError {
    /// Creates an I/O error carrying the affected path.
    pub fn io(path: impl AsRef<Path>, error: impl std::fmt::Display) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            details: error.to_string(),
        }
    }

    /// Creates a metadata parse error carrying the dump path.
    pub fn metadata_parse(path: impl AsRef<Path>, error: impl std::fmt::Display) -> Self {
        Self::MetadataParse {
            path: path.as_ref().to_path_buf(),
            details: error.to_string(),
        }
    }
}

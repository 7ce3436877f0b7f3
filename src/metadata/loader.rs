use std::{
    fs,
    path::{Path, PathBuf},
};

use regex::Regex;
use tracing::{debug, warn};

use crate::core::{Result, ScriptdocError};

use super::{TypeDescriptor, markers};

/// Loads the type descriptor list from a JSON metadata dump.
///
/// Entries are decoded one by one so that a single malformed descriptor is
/// skipped (with a warning) instead of failing the whole run. Deprecated
/// types are dropped, and when `namespace_filter` is given only types whose
/// namespace matches the regular expression are kept.
///
/// # Errors
///
/// Returns `ScriptdocError::Io` if the dump cannot be read,
/// `ScriptdocError::MetadataParse` if it is not a JSON array, and
/// `ScriptdocError::InvalidNamespaceFilter` if the filter does not compile.
pub fn load_types(path: &Path, namespace_filter: Option<&str>) -> Result<Vec<TypeDescriptor>> {
    let raw = fs::read_to_string(path).map_err(|err| ScriptdocError::io(path, err))?;
    let entries: Vec<serde_json::Value> =
        serde_json::from_str(&raw).map_err(|err| ScriptdocError::metadata_parse(path, err))?;

    let filter = namespace_filter
        .map(|pattern| {
            Regex::new(pattern).map_err(|err| ScriptdocError::InvalidNamespaceFilter {
                pattern: pattern.to_string(),
                details: err.to_string(),
            })
        })
        .transpose()?;

    let mut types = Vec::new();
    for entry in entries {
        match serde_json::from_value::<TypeDescriptor>(entry) {
            Ok(descriptor) => {
                if markers::is_deprecated(&descriptor.attributes) {
                    debug!(name = %descriptor.name, "skipping deprecated type");
                    continue;
                }
                if let Some(filter) = &filter {
                    if !filter.is_match(&descriptor.namespace) {
                        continue;
                    }
                }
                types.push(descriptor);
            }
            Err(err) => warn!("skipping undecodable type entry: {err}"),
        }
    }

    debug!(count = types.len(), "loaded type descriptors");
    Ok(types)
}

/// Reads the XML documentation file next to a generation run's inputs.
///
/// A missing file is not an error: modules built without documentation
/// simply yield an empty comment index.
///
/// # Errors
///
/// Returns `ScriptdocError::Io` if the file exists but cannot be read.
pub fn load_doc_tree(path: &Path) -> Result<Option<String>> {
    if !path.exists() {
        debug!(path = %path.display(), "no documentation file found");
        return Ok(None);
    }
    fs::read_to_string(path)
        .map(Some)
        .map_err(|err| ScriptdocError::io(path, err))
}

/// Default documentation path for a metadata dump: the same file name with
/// an `.xml` extension.
pub fn sibling_doc_path(metadata_path: &Path) -> PathBuf {
    metadata_path.with_extension("xml")
}

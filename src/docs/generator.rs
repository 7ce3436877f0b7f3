use std::{fs, path::{Path, PathBuf}};

use tracing::{debug, info};

use crate::comments::DocIndex;
use crate::core::{Result, ScriptdocError};
use crate::metadata::{self, TypeDescriptor};
use crate::model::{DocumentableType, TypeCategory};

/// Pipe characters inside documentation text are written as this token by
/// convention so they survive markdown tables; the writer swaps in the
/// HTML entity.
const VERTICAL_BAR_TOKEN: &str = "*vertical-bar*";

/// Generates the command reference and parameter schema for a module.
///
/// Builds the comment index once, constructs a model per discovered type,
/// and writes the command index, the general type reference, and the
/// machine-readable schema document.
pub struct DocsGenerator {
    output_dir: PathBuf,
    schema_dir: PathBuf,
    intro: String,
}

/// Counts reported after a generation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerationSummary {
    /// Command blocks written to the reference index.
    pub commands: usize,
    /// Enum and general type blocks written to the type reference.
    pub types: usize,
}

impl Default for DocsGenerator {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("docs/api"),
            schema_dir: PathBuf::from("docs/api"),
            intro: String::new(),
        }
    }
}

impl DocsGenerator {
    /// Creates a generator writing to the default output directories.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the output directory for the markdown reference.
    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    /// Sets the output directory for the schema document.
    pub fn with_schema_dir(mut self, schema_dir: impl Into<PathBuf>) -> Self {
        self.schema_dir = schema_dir.into();
        self
    }

    /// Sets the intro text prepended to the command index.
    pub fn with_intro(mut self, intro: impl Into<String>) -> Self {
        self.intro = intro.into();
        self
    }

    /// Runs generation from file paths: a JSON metadata dump and an optional
    /// XML documentation file (defaulting to the dump path with an `.xml`
    /// extension).
    ///
    /// # Errors
    ///
    /// Returns an error when inputs cannot be read or outputs cannot be
    /// written; see [`DocsGenerator::generate`].
    pub fn generate_from_paths(
        &self,
        metadata_path: &Path,
        docs_path: Option<&Path>,
        namespace_filter: Option<&str>,
    ) -> Result<GenerationSummary> {
        let types = metadata::load_types(metadata_path, namespace_filter)?;
        let sibling = metadata::sibling_doc_path(metadata_path);
        let doc_tree = metadata::load_doc_tree(docs_path.unwrap_or(&sibling))?;
        self.generate(types, doc_tree.as_deref(), namespace_filter)
    }

    /// Runs generation over already-loaded inputs and writes all outputs.
    ///
    /// Types sort by script alias (falling back to type name); abstract
    /// command types are excluded from output. The command reference goes to
    /// `index.md`, enum and general types to `reference.md` (omitted when
    /// empty), and the schema document to `metadata.json`.
    ///
    /// # Errors
    ///
    /// Returns `ScriptdocError::DocTreeParse` for ill-formed documentation
    /// XML and `ScriptdocError::Io` for output failures.
    pub fn generate(
        &self,
        types: Vec<TypeDescriptor>,
        doc_tree: Option<&str>,
        namespace_filter: Option<&str>,
    ) -> Result<GenerationSummary> {
        let index = match doc_tree {
            Some(xml) => DocIndex::from_tree(xml, namespace_filter)?,
            None => DocIndex::default(),
        };

        let mut models = types
            .into_iter()
            .map(|descriptor| DocumentableType::new(descriptor, &index))
            .collect::<Vec<_>>();
        models.sort_by(|a, b| a.sort_key().cmp(b.sort_key()));

        let mut command_doc = self.intro.clone();
        let mut type_doc = String::new();
        let mut schemas = Vec::new();
        let mut summary = GenerationSummary::default();

        for model in &models {
            match model.category() {
                TypeCategory::Command => {
                    if model.is_abstract() {
                        debug!(name = %model.descriptor().name, "skipping abstract command");
                        continue;
                    }
                    command_doc.push_str(&model.render_markdown());
                    if let Some(schema) = model.to_schema() {
                        schemas.push(schema);
                    }
                    summary.commands += 1;
                }
                TypeCategory::Enum | TypeCategory::General => {
                    type_doc.push_str(&model.render_markdown());
                    summary.types += 1;
                }
            }
        }

        self.write_output(&self.output_dir, "index.md", &unescape_bars(&command_doc))?;
        if !type_doc.is_empty() {
            self.write_output(&self.output_dir, "reference.md", &unescape_bars(&type_doc))?;
        }

        let schema_doc = serde_json::json!({ "commands": schemas });
        let schema_text =
            serde_json::to_string_pretty(&schema_doc).map_err(|err| ScriptdocError::Io {
                path: self.schema_dir.join("metadata.json"),
                details: err.to_string(),
            })?;
        self.write_output(&self.schema_dir, "metadata.json", &schema_text)?;

        info!(
            commands = summary.commands,
            types = summary.types,
            "generated reference documentation"
        );
        Ok(summary)
    }

    fn write_output(&self, dir: &Path, file_name: &str, content: &str) -> Result<()> {
        fs::create_dir_all(dir).map_err(|err| ScriptdocError::io(dir, err))?;
        let path = dir.join(file_name);
        fs::write(&path, content).map_err(|err| ScriptdocError::io(&path, err))?;
        debug!(path = %path.display(), "wrote output file");
        Ok(())
    }
}

fn unescape_bars(text: &str) -> String {
    text.replace(VERTICAL_BAR_TOKEN, "&#124;")
}

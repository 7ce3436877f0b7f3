//! Per-type documentation models.
//!
//! A [`DocumentableType`] composes a type descriptor with the shared comment
//! index: category resolution, alias and localization flags, pre-extracted
//! command parameters, and the markdown/schema renderings built from them.
//! Models are constructed once per discovered type and not mutated after.

mod markdown;
mod tables;

pub use markdown::MarkdownBuilder;
pub use tables::{MemberRow, enum_rows, event_rows, field_rows, method_rows, property_rows};

use crate::comments::{CommentRecord, DocIndex};
use crate::metadata::{TypeDescriptor, TypeKind, markers};
use crate::naming;
use crate::schema::{CommandSchema, ParameterDescriptor, ParameterSchema, extract_parameters};

/// How a type is presented in the generated reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeCategory {
    /// An enumeration: ordered value/name/summary rows.
    Enum,
    /// A member of the command vocabulary: alias heading, parameter table,
    /// and a schema object.
    Command,
    /// Any other type: declaration block and member-category tables.
    General,
}

/// The per-type aggregate consumed by the rendering and serialization steps.
#[derive(Debug)]
pub struct DocumentableType<'d> {
    descriptor: TypeDescriptor,
    docs: &'d DocIndex,
    display_name: String,
    category: TypeCategory,
    alias: Option<String>,
    localizable: bool,
    parameters: Vec<ParameterDescriptor>,
}

impl<'d> DocumentableType<'d> {
    /// Builds the model for one discovered type against the shared index.
    pub fn new(descriptor: TypeDescriptor, docs: &'d DocIndex) -> Self {
        let category = if descriptor.is_enum() {
            TypeCategory::Enum
        } else if markers::is_command(&descriptor) {
            TypeCategory::Command
        } else {
            TypeCategory::General
        };
        let (alias, parameters) = if category == TypeCategory::Command {
            (
                markers::command_alias(&descriptor),
                extract_parameters(&descriptor, docs),
            )
        } else {
            (None, Vec::new())
        };

        Self {
            display_name: naming::display_name(Some(&descriptor), false),
            localizable: markers::is_localizable(&descriptor),
            descriptor,
            docs,
            category,
            alias,
            parameters,
        }
    }

    /// The underlying type descriptor.
    pub fn descriptor(&self) -> &TypeDescriptor {
        &self.descriptor
    }

    /// Canonical display name of the type.
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Presentation category.
    pub fn category(&self) -> TypeCategory {
        self.category
    }

    /// Whether the type belongs to the command vocabulary.
    pub fn is_command(&self) -> bool {
        self.category == TypeCategory::Command
    }

    /// Whether the type is abstract; abstract commands are excluded from
    /// final output by the orchestrator.
    pub fn is_abstract(&self) -> bool {
        self.descriptor.is_abstract
    }

    /// Resolved command parameters; empty for non-command types.
    pub fn parameters(&self) -> &[ParameterDescriptor] {
        &self.parameters
    }

    /// Ordering key for the generated reference: the script alias when one
    /// is declared, the type name otherwise.
    pub fn sort_key(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.descriptor.name)
    }

    /// Renders the type's reference block.
    pub fn render_markdown(&self) -> String {
        match self.category {
            TypeCategory::Command => self.render_command(),
            TypeCategory::Enum | TypeCategory::General => self.render_general(),
        }
    }

    /// Builds the schema object for a command type; `None` for other
    /// categories.
    pub fn to_schema(&self) -> Option<CommandSchema> {
        if !self.is_command() {
            return None;
        }
        let type_record = self.type_record();
        Some(CommandSchema {
            id: self.descriptor.name.clone(),
            alias: self.alias.clone(),
            localizable: self.localizable,
            summary: type_record.and_then(|record| non_blank(&record.summary)),
            remarks: type_record.and_then(|record| non_blank(&record.remarks)),
            examples: type_record.and_then(|record| non_blank(&record.example)),
            params: self
                .parameters
                .iter()
                .map(ParameterSchema::from_descriptor)
                .collect(),
        })
    }

    fn type_record(&self) -> Option<&CommentRecord> {
        self.docs.type_record(&self.descriptor.qualified_name())
    }

    fn render_command(&self) -> String {
        let mut mb = MarkdownBuilder::new();

        match &self.alias {
            Some(alias) => mb.header(2, alias),
            None => mb.header(2, &lower_first(&self.display_name)),
        }
        mb.blank();

        let type_record = self.type_record();
        if let Some(summary) = type_record.and_then(|record| non_blank(&record.summary)) {
            mb.header(4, "Summary");
            mb.line(&summary);
            mb.blank();
        }
        if let Some(remarks) = type_record.and_then(|record| non_blank(&record.remarks)) {
            mb.header(4, "Remarks");
            mb.line(&remarks);
            mb.blank();
        }

        let parameters = self
            .parameters
            .iter()
            .filter(|param| !markers::RESERVED_PARAMETERS.contains(&param.id.as_str()))
            .collect::<Vec<_>>();
        if !parameters.is_empty() {
            mb.header(4, "Parameters");
            mb.push("\n<div class=\"config-table\">\n\n");
            mb.push("ID | Type | Description\n");
            mb.push("--- | --- | ---\n");
            for param in parameters {
                let id = render_parameter_id(param.alias.as_deref(), &param.id, param.required);
                let type_name = naming::display_name(Some(&param.value_type), false);
                mb.push(&format!("{id} | {type_name} | {}\n", param.summary));
            }
            mb.push("\n</div>\n\n");
        }

        if let Some(example) = type_record.and_then(|record| non_blank(&record.example)) {
            mb.header(4, "Example");
            mb.code_block("", &example);
            mb.blank();
        }

        mb.into_string()
    }

    fn render_general(&self) -> String {
        let mut mb = MarkdownBuilder::new();

        mb.header(2, &self.display_name);
        mb.blank();

        let type_record = self.type_record();
        if let Some(summary) = type_record.and_then(|record| non_blank(&record.summary)) {
            mb.header(4, "Summary");
            mb.line(&summary);
        }
        if let Some(remarks) = type_record.and_then(|record| non_blank(&record.remarks)) {
            mb.header(4, "Remarks");
            mb.line(&remarks);
        }

        mb.code_block("csharp", &self.declaration());
        mb.blank();

        let descriptor = &self.descriptor;
        let docs = self.docs;
        if descriptor.is_enum() {
            let head = &["Value", "Name", "Summary"];
            self.build_table(&mut mb, "Enum", head, enum_rows(descriptor, docs));
        } else {
            let head = &["Type", "Name", "Summary"];
            self.build_table(&mut mb, "Fields", head, field_rows(descriptor, docs, false));
            self.build_table(&mut mb, "Properties", head, property_rows(descriptor, docs, false));
            self.build_table(&mut mb, "Events", head, event_rows(descriptor, docs, false));
            self.build_table(&mut mb, "Methods", head, method_rows(descriptor, docs, false));
            self.build_table(&mut mb, "Static Fields", head, field_rows(descriptor, docs, true));
            self.build_table(&mut mb, "Static Properties", head, property_rows(descriptor, docs, true));
            self.build_table(&mut mb, "Static Methods", head, method_rows(descriptor, docs, true));
            self.build_table(&mut mb, "Static Events", head, event_rows(descriptor, docs, true));
        }

        mb.into_string()
    }

    /// Synthesized declaration line: modifiers, kind keyword, qualified
    /// name, and the base type plus interfaces when any survive filtering.
    fn declaration(&self) -> String {
        let descriptor = &self.descriptor;
        let statik = if descriptor.is_abstract && descriptor.is_sealed {
            "static "
        } else {
            ""
        };
        let abstr = if descriptor.is_abstract
            && descriptor.kind != TypeKind::Interface
            && !descriptor.is_sealed
        {
            "abstract "
        } else {
            ""
        };
        let keyword = match descriptor.kind {
            TypeKind::Interface => "interface",
            TypeKind::Enum => "enum",
            TypeKind::Struct => "struct",
            TypeKind::Class => "class",
        };

        let mut declaration = format!(
            "public {statik}{abstr}{keyword} {}\n",
            naming::display_name(Some(descriptor), true)
        );
        let bases = descriptor
            .base_chain
            .first()
            .into_iter()
            .chain(descriptor.interfaces.iter())
            .filter(|base| base.name != "Object" && base.name != "ValueType")
            .map(|base| naming::display_name(Some(base), false))
            .collect::<Vec<_>>()
            .join(", ");
        if !bases.is_empty() {
            declaration.push_str("    : ");
            declaration.push_str(&bases);
            declaration.push('\n');
        }
        declaration
    }

    fn build_table(
        &self,
        mb: &mut MarkdownBuilder,
        label: &str,
        head: &[&str; 3],
        rows: Vec<MemberRow>,
    ) {
        if rows.is_empty() {
            return;
        }
        mb.header(4, label);
        mb.blank();
        let cells = rows
            .into_iter()
            .map(|row| [row.type_name, row.display_name, row.summary])
            .collect::<Vec<_>>();
        mb.table(head, &cells);
        mb.blank();
    }
}

/// Display id of a parameter in the rendered table: the lowered alias (or
/// member name), wrapped in a styling span when the parameter is nameless
/// or required.
fn render_parameter_id(alias: Option<&str>, member_name: &str, required: bool) -> String {
    let nameless = alias == Some("");
    let id = if nameless {
        member_name.to_string()
    } else {
        lower_first(alias.unwrap_or(member_name))
    };
    if !nameless && !required {
        return id;
    }

    let mut style = String::new();
    if nameless {
        style.push_str("command-param-nameless ");
    }
    if required {
        style.push_str("command-param-required");
    }
    let style = style.trim();

    let mut title = String::new();
    if nameless {
        title.push_str(
            "Nameless parameter: value should be provided after the command identifier without specifying parameter ID ",
        );
    }
    if required {
        title.push_str(" Required parameter: parameter should always be specified");
    }
    let title = title.trim();

    format!("<span class=\"{style}\" title=\"{title}\">{id}</span>")
}

fn lower_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn non_blank(text: &str) -> Option<String> {
    if text.trim().is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

use std::collections::HashMap;

use regex::Regex;
use sxd_document::dom::Element;
use tracing::debug;

use crate::core::{Result, ScriptdocError};
use crate::metadata::markers::SITE_DOMAIN_MARKER;

use super::record::{CommentRecord, MemberKind};

/// Entry names look like `M:Some.Namespace.Type.Member(Sig)`; the namespace
/// segment is optional so single-segment type entries (`T:Foo`) still parse.
const ENTRY_NAME_PATTERN: &str = r"^(.):(?:(.+)\.)?([^.()]+)?(\(.+\)|$)";

/// Parses an XML documentation tree into an ordered list of comment records.
///
/// Entries with an unrecognized kind letter or an unparseable name are
/// dropped silently (logged at debug level); they never abort the run.
/// `namespace_filter` controls how type cross-references render: references
/// into the filtered namespace become intra-document links, everything else
/// becomes inline code.
///
/// # Errors
///
/// Returns `ScriptdocError::DocTreeParse` only when the input is not
/// well-formed XML at all.
pub fn parse_doc_tree(xml: &str, namespace_filter: Option<&str>) -> Result<Vec<CommentRecord>> {
    let package = sxd_document::parser::parse(xml).map_err(|err| ScriptdocError::DocTreeParse {
        details: err.to_string(),
    })?;
    let document = package.as_document();

    let entry_name = Regex::new(ENTRY_NAME_PATTERN).map_err(|err| ScriptdocError::DocTreeParse {
        details: err.to_string(),
    })?;

    let mut records = Vec::new();
    for child in document.root().children() {
        if let Some(element) = child.element() {
            collect_members(element, &entry_name, namespace_filter, &mut records);
        }
    }
    Ok(records)
}

fn collect_members(
    element: Element<'_>,
    entry_name: &Regex,
    namespace_filter: Option<&str>,
    records: &mut Vec<CommentRecord>,
) {
    if element.name().local_part() == "member" {
        if let Some(record) = parse_member(element, entry_name, namespace_filter) {
            records.push(record);
        }
        return;
    }
    for child in element.children() {
        if let Some(child) = child.element() {
            collect_members(child, entry_name, namespace_filter, records);
        }
    }
}

fn parse_member(
    element: Element<'_>,
    entry_name: &Regex,
    namespace_filter: Option<&str>,
) -> Option<CommentRecord> {
    let name = element.attribute_value("name")?;
    let Some(captures) = entry_name.captures(name) else {
        debug!(name, "dropping documentation entry with unparseable name");
        return None;
    };

    let letter = captures.get(1)?.as_str().chars().next()?;
    let Some(kind) = MemberKind::from_letter(letter) else {
        debug!(name, "dropping documentation entry with unrecognized kind");
        return None;
    };

    let owner_path = captures.get(2).map(|m| m.as_str()).unwrap_or_default();
    let member_name = captures
        .get(3)
        .map(|m| m.as_str())
        .unwrap_or_default()
        .to_string();

    // For type entries the final name segment is the type itself, so the
    // lookup key re-joins it onto the namespace path.
    let owner = if kind == MemberKind::Type {
        if owner_path.is_empty() {
            member_name.clone()
        } else {
            format!("{owner_path}.{member_name}")
        }
    } else {
        owner_path.to_string()
    };

    let summary = collapse_lines(&rich_text(
        child_element(element, "summary"),
        namespace_filter,
    ));
    let remarks = collapse_lines(&rich_text(
        child_element(element, "remarks"),
        namespace_filter,
    ));
    let returns = child_element(element, "returns")
        .map(|el| text_content(el).trim().to_string())
        .unwrap_or_default();
    let example = example_text(child_element(element, "example"));

    let mut parameters = HashMap::new();
    for child in element.children() {
        let Some(child) = child.element() else {
            continue;
        };
        if child.name().local_part() != "param" {
            continue;
        }
        if let Some(param_name) = child.attribute_value("name") {
            parameters
                .entry(param_name.to_string())
                .or_insert_with(|| text_content(child));
        }
    }

    Some(CommentRecord {
        kind,
        owner,
        member_name,
        summary,
        remarks,
        example,
        returns,
        parameters,
    })
}

/// Renders the inner markup of a documentation element to display text.
///
/// Self-closing paragraph breaks become line breaks, `see`/`paramref`
/// references resolve to links or inline code, and any other nested markup
/// contributes its inner content.
fn rich_text(element: Option<Element<'_>>, namespace_filter: Option<&str>) -> String {
    let Some(element) = element else {
        return String::new();
    };
    let mut out = String::new();
    append_rich_text(element, namespace_filter, &mut out);
    out
}

fn append_rich_text(element: Element<'_>, namespace_filter: Option<&str>, out: &mut String) {
    for child in element.children() {
        if let Some(text) = child.text() {
            out.push_str(text.text());
            continue;
        }
        let Some(child) = child.element() else {
            continue;
        };
        match child.name().local_part() {
            "para" if child.children().is_empty() => out.push('\n'),
            "see" => {
                if let Some(cref) = child.attribute_value("cref") {
                    out.push_str(&resolve_type_reference(cref, namespace_filter));
                } else if let Some(href) = child.attribute_value("href") {
                    out.push_str(&resolve_link_reference(href));
                }
            }
            "paramref" | "typeparamref" => {
                if let Some(name) = child.attribute_value("name") {
                    out.push('`');
                    out.push_str(name);
                    out.push('`');
                }
            }
            _ => append_rich_text(child, namespace_filter, out),
        }
    }
}

/// Resolves a `cref` type reference.
///
/// When the referenced type falls under the active namespace filter it
/// renders as a link whose anchor is the trailing name segment, lower-cased
/// with the joining dot replaced by `#`; otherwise it renders as inline code.
fn resolve_type_reference(cref: &str, namespace_filter: Option<&str>) -> String {
    let type_name = cref.split_once(':').map_or(cref, |(_, rest)| rest);
    if let Some(filter) = namespace_filter.filter(|f| !f.trim().is_empty()) {
        if type_name.starts_with(filter) {
            let target = match type_name.rfind('.') {
                Some(idx) => format!(
                    "{}#{}",
                    &type_name[..idx],
                    type_name[idx + 1..].to_lowercase()
                ),
                None => type_name.to_string(),
            };
            return format!("[{type_name}]({target})");
        }
    }
    format!("`{type_name}`")
}

/// Resolves an `href` reference; links into the engine's documentation site
/// shorten their label to the path after the site-domain marker.
fn resolve_link_reference(href: &str) -> String {
    let label = href
        .split_once(SITE_DOMAIN_MARKER)
        .map_or(href, |(_, rest)| rest);
    format!("[{label}]({href})")
}

/// Collapses raw line structure into display text: each line is trimmed,
/// empty fragments are dropped, and the remainder joins with a double space
/// to force a hard break in the rendered output.
fn collapse_lines(text: &str) -> String {
    text.split(['\r', '\n', '\t'])
        .filter(|part| !part.is_empty())
        .map(str::trim)
        .collect::<Vec<_>>()
        .join("  ")
        .trim()
        .to_string()
}

/// Example blocks keep their line structure but drop per-line indentation.
fn example_text(element: Option<Element<'_>>) -> String {
    let Some(element) = element else {
        return String::new();
    };
    text_content(element)
        .split(['\r', '\n', '\t'])
        .map(str::trim)
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

fn child_element<'d>(parent: Element<'d>, name: &str) -> Option<Element<'d>> {
    parent
        .children()
        .into_iter()
        .filter_map(|child| child.element())
        .find(|child| child.name().local_part() == name)
}

fn text_content(element: Element<'_>) -> String {
    let mut out = String::new();
    append_text_content(element, &mut out);
    out
}

fn append_text_content(element: Element<'_>, out: &mut String) {
    for child in element.children() {
        if let Some(text) = child.text() {
            out.push_str(text.text());
        } else if let Some(child) = child.element() {
            append_text_content(child, out);
        }
    }
}

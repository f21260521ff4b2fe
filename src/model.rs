//! Data model for extracted documentation — format-agnostic.

use regex::Regex;
use std::sync::LazyLock;

/// Declaration name used when no `module` follows a comment block.
pub const UNKNOWN_MODULE: &str = "Unknown";

// Identifier, then a description that starts with an uppercase letter.
static RE_FIELD_SPLIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\S.*?)\s+(\p{Lu}.*)$").unwrap());

/// One documentation comment region and the module it describes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocBlock {
    /// @brief (last occurrence wins)
    pub summary: String,
    /// Untagged lines joined with single spaces
    pub description: String,
    /// @input entries (raw text after the marker)
    pub inputs: Vec<String>,
    /// @output entries
    pub outputs: Vec<String>,
    /// @inout entries
    pub inouts: Vec<String>,
    /// @parameter entries
    pub parameters: Vec<String>,
    /// @localparam entries
    pub local_parameters: Vec<String>,
    /// Name of the nearest following `module`, or [`UNKNOWN_MODULE`]
    pub module: String,
}

impl Default for DocBlock {
    fn default() -> Self {
        Self {
            summary: String::new(),
            description: String::new(),
            inputs: Vec::new(),
            outputs: Vec::new(),
            inouts: Vec::new(),
            parameters: Vec::new(),
            local_parameters: Vec::new(),
            module: UNKNOWN_MODULE.to_string(),
        }
    }
}

/// A raw field value split for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEntry {
    /// `name` followed by a capitalized description, e.g. `a First operand`.
    Split { name: String, description: String },
    /// No separable identifier; kept verbatim.
    Opaque(String),
}

impl FieldEntry {
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        match RE_FIELD_SPLIT.captures(raw) {
            Some(caps) => FieldEntry::Split {
                name: caps[1].to_string(),
                description: caps[2].to_string(),
            },
            None => FieldEntry::Opaque(raw.to_string()),
        }
    }
}

/// All blocks extracted from a single source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDoc {
    /// Path relative to the input root, `/`-separated
    pub path: String,
    pub blocks: Vec<DocBlock>,
}

/// Everything handed to the renderers.
#[derive(Debug, Default)]
pub struct Project {
    pub title: String,
    /// Sorted by path; files without blocks are never present
    pub files: Vec<SourceDoc>,
}

impl Project {
    pub fn new(title: impl Into<String>, mut files: Vec<SourceDoc>) -> Self {
        files.retain(|f| !f.blocks.is_empty());
        files.sort_by(|a, b| a.path.cmp(&b.path));
        Self {
            title: title.into(),
            files,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_split_on_capitalized_description() {
        assert_eq!(
            FieldEntry::parse("a First operand"),
            FieldEntry::Split {
                name: "a".into(),
                description: "First operand".into()
            }
        );
    }

    #[test]
    fn field_split_keeps_width_with_name() {
        assert_eq!(
            FieldEntry::parse("[7:0] data Data bus"),
            FieldEntry::Split {
                name: "[7:0] data".into(),
                description: "Data bus".into()
            }
        );
    }

    #[test]
    fn field_without_capital_is_opaque() {
        assert_eq!(
            FieldEntry::parse("clk clock input"),
            FieldEntry::Opaque("clk clock input".into())
        );
        assert_eq!(FieldEntry::parse("rst_n"), FieldEntry::Opaque("rst_n".into()));
    }

    #[test]
    fn project_sorts_and_drops_empty_files() {
        let block = DocBlock::default();
        let project = Project::new(
            "T",
            vec![
                SourceDoc { path: "b.v".into(), blocks: vec![block.clone()] },
                SourceDoc { path: "empty.v".into(), blocks: vec![] },
                SourceDoc { path: "a.v".into(), blocks: vec![block] },
            ],
        );
        let paths: Vec<_> = project.files.iter().map(|f| f.path.as_str()).collect();
        assert_eq!(paths, ["a.v", "b.v"]);
    }

    #[test]
    fn default_block_is_unknown() {
        assert_eq!(DocBlock::default().module, "Unknown");
    }
}

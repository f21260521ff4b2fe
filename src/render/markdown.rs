//! Markdown renderer.
//!
//! Output is a title, a table of contents grouped by file, then one section
//! per file with one subsection per documentation block.

use crate::anchor;
use crate::locale::Labels;
use crate::model::*;
use crate::render::Renderer;
use std::collections::HashMap;

pub struct MarkdownRenderer;

impl Renderer for MarkdownRenderer {
    fn render(&self, project: &Project, labels: &Labels) -> String {
        let anchors = assign_anchors(project);
        format!(
            "{}\n\n{}",
            render_toc(project, labels, &anchors),
            render_body(project, labels, &anchors)
        )
    }

    fn file_name(&self) -> &str {
        "documentation.md"
    }
}

/// Anchors per file, per block. Repeats get a `-2`, `-3`, ... suffix so
/// every link in the document has a unique target.
pub fn assign_anchors(project: &Project) -> Vec<Vec<String>> {
    let mut seen: HashMap<String, usize> = HashMap::new();
    project
        .files
        .iter()
        .map(|file| {
            file.blocks
                .iter()
                .map(|block| {
                    let base = anchor::module_anchor(&file.path, &block.module);
                    let count = seen.entry(base.clone()).or_insert(0);
                    *count += 1;
                    if *count == 1 {
                        base
                    } else {
                        format!("{}-{}", base, count)
                    }
                })
                .collect()
        })
        .collect()
}

/// Title and table of contents.
pub fn render_toc(project: &Project, labels: &Labels, anchors: &[Vec<String>]) -> String {
    let mut out = format!("# {}\n\n## {}\n\n", project.title, labels.toc);
    for (file, file_anchors) in project.files.iter().zip(anchors) {
        out.push_str(&format!("- **{}:** {}\n", labels.file, file.path));
        for (block, anchor) in file.blocks.iter().zip(file_anchors) {
            let text = format!("{}: {}", labels.module, block.module);
            out.push_str(&format!("  - {}\n", anchor::toc_link(&text, anchor)));
        }
    }
    out
}

/// Per-file sections with every documentation block.
pub fn render_body(project: &Project, labels: &Labels, anchors: &[Vec<String>]) -> String {
    let mut out = String::new();
    for (file, file_anchors) in project.files.iter().zip(anchors) {
        out.push_str(&format!("## {}: {}\n\n", labels.file, file.path));
        for (block, anchor) in file.blocks.iter().zip(file_anchors) {
            out.push_str(&render_block(block, labels, anchor));
        }
    }
    out
}

fn render_block(block: &DocBlock, labels: &Labels, anchor: &str) -> String {
    let mut out = format!(
        "### <a name=\"{}\"></a>{}: {}\n\n",
        anchor, labels.module, block.module
    );
    out.push_str(&format!("**{}:** {}\n\n", labels.brief, block.summary));

    if !block.description.is_empty() {
        out.push_str(&block.description);
        out.push_str("\n\n");
    }

    let lists = [
        (labels.parameters, &block.parameters),
        (labels.local_parameters, &block.local_parameters),
        (labels.inputs, &block.inputs),
        (labels.outputs, &block.outputs),
        (labels.inouts, &block.inouts),
    ];
    for (label, fields) in lists {
        if fields.is_empty() {
            continue;
        }
        out.push_str(&format!("**{}:**\n\n", label));
        for raw in fields {
            out.push_str(&render_field(raw));
            out.push('\n');
        }
        out.push('\n');
    }

    out
}

/// `a First operand` → ``- `a` First operand``; opaque fields are code only.
fn render_field(raw: &str) -> String {
    match FieldEntry::parse(raw) {
        FieldEntry::Split { name, description } => format!("- {} {}", code_span(&name), description),
        FieldEntry::Opaque(text) => format!("- {}", code_span(&text)),
    }
}

/// Inline code whose fence is one backtick longer than the longest run
/// inside `text`. Padded with spaces when `text` starts or ends with one.
fn code_span(text: &str) -> String {
    let longest = text
        .split(|c: char| c != '`')
        .map(str::len)
        .max()
        .unwrap_or(0);
    let fence = "`".repeat(longest + 1);
    if text.starts_with('`') || text.ends_with('`') {
        format!("{fence} {text} {fence}")
    } else {
        format!("{fence}{text}{fence}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale;

    fn adder_project() -> Project {
        let block = DocBlock {
            summary: "Adder".into(),
            description: "Adds two numbers.".into(),
            inputs: vec!["a First operand".into(), "b Second operand".into()],
            outputs: vec!["sum".into()],
            parameters: vec!["WIDTH Bit width".into()],
            module: "adder".into(),
            ..Default::default()
        };
        Project::new(
            "Docs",
            vec![SourceDoc { path: "rtl/adder.v".into(), blocks: vec![block] }],
        )
    }

    #[test]
    fn field_split() {
        assert_eq!(render_field("a First operand"), "- `a` First operand");
        assert_eq!(render_field("clk"), "- `clk`");
        assert_eq!(render_field("clk the clock"), "- `clk the clock`");
    }

    #[test]
    fn backticks_in_fields_widen_the_fence() {
        assert_eq!(render_field("`WIDTH Bus width"), "- `` `WIDTH `` Bus width");
        assert_eq!(render_field("a``b"), "- ```a``b```");
        assert_eq!(code_span("plain"), "`plain`");
    }

    #[test]
    fn renders_full_document() {
        let out = MarkdownRenderer.render(&adder_project(), &locale::EN);
        let expected = "\
# Docs

## Table of Contents

- **File:** rtl/adder.v
  - [Module: adder](#rtl-adder-v-adder)


## File: rtl/adder.v

### <a name=\"rtl-adder-v-adder\"></a>Module: adder

**Brief:** Adder

Adds two numbers.

**Parameters:**

- `WIDTH` Bit width

**Inputs:**

- `a` First operand
- `b` Second operand

**Outputs:**

- `sum`

";
        assert_eq!(out, expected);
    }

    #[test]
    fn german_labels_used() {
        let out = MarkdownRenderer.render(&adder_project(), &locale::DE);
        assert!(out.contains("## Inhaltsverzeichnis"));
        assert!(out.contains("**Kurzbeschreibung:** Adder"));
        assert!(out.contains("**Eingänge:**"));
    }

    #[test]
    fn inouts_and_localparams_rendered() {
        let block = DocBlock {
            inouts: vec!["sda Serial data".into()],
            local_parameters: vec!["IDLE Idle state".into()],
            module: "i2c".into(),
            ..Default::default()
        };
        let project = Project::new("T", vec![SourceDoc { path: "i2c.v".into(), blocks: vec![block] }]);
        let out = MarkdownRenderer.render(&project, &locale::EN);
        assert!(out.contains("**Inouts:**\n\n- `sda` Serial data\n"));
        assert!(out.contains("**Local Parameters:**\n\n- `IDLE` Idle state\n"));
    }

    #[test]
    fn repeated_modules_get_unique_anchors() {
        let block = DocBlock { module: "top".into(), ..Default::default() };
        let project = Project::new(
            "T",
            vec![SourceDoc { path: "top.v".into(), blocks: vec![block.clone(), block] }],
        );
        let anchors = assign_anchors(&project);
        assert_eq!(anchors, vec![vec!["top-v-top".to_string(), "top-v-top-2".to_string()]]);
    }
}

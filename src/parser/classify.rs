//! Tag classifier — turns the raw lines of one comment group into a [`DocBlock`].
//!
//! Markers are matched as plain substrings anywhere on the line, in table
//! order; the first hit decides the field.

use crate::model::DocBlock;
use regex::Regex;
use std::sync::LazyLock;

static RE_COMMENT_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\s*///*\s*|\s*\*+\s*)").unwrap());

/// Field a marker routes its text into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Summary,
    Input,
    Output,
    Inout,
    Parameter,
    LocalParameter,
}

/// Marker table in priority order.
const MARKERS: &[(&str, Field)] = &[
    ("@brief", Field::Summary),
    ("@input", Field::Input),
    ("@output", Field::Output),
    ("@inout", Field::Inout),
    ("@parameter", Field::Parameter),
    ("@localparam", Field::LocalParameter),
];

impl Field {
    fn store(self, block: &mut DocBlock, text: String) {
        match self {
            Field::Summary => block.summary = text,
            Field::Input => block.inputs.push(text),
            Field::Output => block.outputs.push(text),
            Field::Inout => block.inouts.push(text),
            Field::Parameter => block.parameters.push(text),
            Field::LocalParameter => block.local_parameters.push(text),
        }
    }
}

/// Classify the lines of one comment group. The module name is left as
/// `Unknown`; the caller binds it.
pub fn classify<S: AsRef<str>>(lines: &[S]) -> DocBlock {
    let mut block = DocBlock::default();

    for line in lines {
        let content = strip_comment(line.as_ref());
        let hit = MARKERS
            .iter()
            .find_map(|&(marker, field)| content.find(marker).map(|pos| (pos + marker.len(), field)));

        match hit {
            Some((value_start, field)) => {
                field.store(&mut block, content[value_start..].trim().to_string());
            }
            None => {
                block.description.push_str(&content);
                block.description.push(' ');
            }
        }
    }

    block.description = block.description.trim().to_string();
    block
}

/// Remove `/**` and `*/` anywhere, then the leading `///` or `*` prefix.
fn strip_comment(line: &str) -> String {
    let line = line.replace("/**", "").replace("*/", "");
    RE_COMMENT_PREFIX.replace(&line, "").into_owned()
}

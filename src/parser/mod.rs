//! Parser module — scan comment groups, classify them, bind module names.

pub mod classify;
pub mod scanner;

use crate::model::{DocBlock, UNKNOWN_MODULE};

/// Parse source text. Line endings are normalized by [`str::lines`].
pub fn parse(input: &str) -> Vec<DocBlock> {
    let lines: Vec<&str> = input.lines().collect();
    parse_source(&lines)
}

/// Extract every documentation block from a file's lines, in source order.
pub fn parse_source(lines: &[&str]) -> Vec<DocBlock> {
    scanner::scan_groups(lines)
        .into_iter()
        .map(|group| {
            let mut block = classify::classify(&group.lines);
            block.module = scanner::find_declaration(lines, group.resume)
                .unwrap_or_else(|| UNKNOWN_MODULE.to_string());
            block
        })
        .collect()
}

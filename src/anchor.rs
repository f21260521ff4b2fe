//! Anchor and table-of-contents link generation.

/// Stable anchor for a block: `<path>-<module>`, lowercased, with path
/// separators and dots turned into `-`.
///
/// `rtl/alu.v` + `ALU` → `rtl-alu-v-alu`
pub fn module_anchor(path: &str, module: &str) -> String {
    format!("{}-{}", path, module)
        .to_lowercase()
        .chars()
        .map(|c| match c {
            '/' | '\\' | '.' => '-',
            c if c.is_whitespace() => '-',
            c => c,
        })
        .collect()
}

/// Markdown link to an anchor in the same document.
pub fn toc_link(text: &str, anchor: &str) -> String {
    format!("[{}](#{})", text, anchor)
}

//! Comment-block scanner — locates `/** ... */` and `///` regions.
//!
//! Two independent passes over the same lines: [`scan_groups`] collects
//! comment groups, [`find_declaration`] looks up the module that follows a
//! group. The declaration search never consumes lines, so back-to-back
//! groups all bind to the same following module.

use regex::Regex;
use std::sync::LazyLock;

static RE_BLOCK_OPEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*/\*\*").unwrap());

static RE_LINE_DOC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*///").unwrap());

static RE_MODULE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bmodule\s+(\w+)").unwrap());

const BLOCK_CLOSE: &str = "*/";

/// A contiguous documentation comment region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentGroup {
    /// Raw lines of the region, trimmed
    pub lines: Vec<String>,
    /// Index where the search for the declaration name starts
    pub resume: usize,
}

/// Collect every documentation comment group in source order.
///
/// An unterminated block comment runs to end of input.
pub fn scan_groups(lines: &[&str]) -> Vec<CommentGroup> {
    let mut groups = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        if RE_BLOCK_OPEN.is_match(lines[i]) {
            let mut group = Vec::new();
            while i < lines.len() {
                let line = lines[i];
                group.push(line.trim().to_string());
                i += 1;
                if line.contains(BLOCK_CLOSE) {
                    break;
                }
            }
            groups.push(CommentGroup {
                lines: group,
                resume: i,
            });
        } else if RE_LINE_DOC.is_match(lines[i]) {
            let mut group = Vec::new();
            while i < lines.len() && RE_LINE_DOC.is_match(lines[i]) {
                group.push(lines[i].trim().to_string());
                i += 1;
            }
            groups.push(CommentGroup {
                lines: group,
                resume: i,
            });
        } else {
            i += 1;
        }
    }

    groups
}

/// Name of the first `module` declared at or after line `from`.
pub fn find_declaration(lines: &[&str], from: usize) -> Option<String> {
    lines
        .iter()
        .skip(from)
        .filter(|line| line.contains("module"))
        .find_map(|line| RE_MODULE.captures(line).map(|caps| caps[1].to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_group_includes_closing_line() {
        let lines = ["/**", " * @brief X", " */", "module x;"];
        let groups = scan_groups(&lines);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].lines, ["/**", "* @brief X", "*/"]);
        assert_eq!(groups[0].resume, 3);
    }

    #[test]
    fn single_line_block_advances() {
        let lines = ["/** @brief One */", "/** @brief Two */", "module m;"];
        let groups = scan_groups(&lines);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[1].resume, 2);
    }

    #[test]
    fn unterminated_block_runs_to_eof() {
        let lines = ["/**", "* @brief Open", "module m;"];
        let groups = scan_groups(&lines);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].lines.len(), 3);
        assert_eq!(groups[0].resume, 3);
        assert_eq!(find_declaration(&lines, groups[0].resume), None);
    }

    #[test]
    fn line_group_stops_at_first_other_line() {
        let lines = ["  /// a", "/// b", "wire w;", "/// c"];
        let groups = scan_groups(&lines);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].lines, ["/// a", "/// b"]);
        assert_eq!(groups[0].resume, 2);
        assert_eq!(groups[1].lines, ["/// c"]);
    }

    #[test]
    fn plain_comments_are_ignored() {
        let lines = ["// not docs", "/* not docs */", "module m;"];
        assert!(scan_groups(&lines).is_empty());
    }

    #[test]
    fn declaration_skips_endmodule() {
        let lines = ["endmodule", "  module  counter #(", ""];
        assert_eq!(find_declaration(&lines, 0).as_deref(), Some("counter"));
    }

    #[test]
    fn declaration_requires_identifier() {
        let lines = ["// this module is great", "module"];
        assert_eq!(find_declaration(&lines, 0).as_deref(), Some("is"));
        assert_eq!(find_declaration(&lines, 1), None);
    }
}

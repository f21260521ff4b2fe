//! Source discovery — resolve the input into Verilog files and parse them.
//!
//! The input may be a directory (walked recursively), a single file, or a
//! glob pattern. Unreadable files are reported and skipped.

use crate::model::SourceDoc;
use crate::parser;
use anyhow::{bail, Context, Result};
use std::fs;
use std::path::{Component, Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// File extensions recognized as Verilog / SystemVerilog sources.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["v", "sv"];

/// A source file and the path it is shown under in the output.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct SourceFile {
    /// Relative to the input root, `/`-separated
    pub display: String,
    pub path: PathBuf,
}

fn is_supported(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| SUPPORTED_EXTENSIONS.contains(&ext))
}

/// Resolve the input argument into a sorted, deduplicated list of sources.
pub fn discover(input: &str) -> Result<Vec<SourceFile>> {
    let root = Path::new(input);
    let mut files = Vec::new();

    if root.is_dir() {
        for entry in WalkDir::new(root).follow_links(true) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!(error = %e, "skipping unreadable directory entry");
                    continue;
                }
            };
            let path = entry.path();
            if entry.file_type().is_file() && is_supported(path) {
                files.push(SourceFile {
                    display: display_path(path.strip_prefix(root).unwrap_or(path)),
                    path: path.to_path_buf(),
                });
            }
        }
    } else if root.is_file() {
        files.push(SourceFile {
            display: display_path(root.file_name().map(Path::new).unwrap_or(root)),
            path: root.to_path_buf(),
        });
    } else {
        let matches: Vec<PathBuf> = glob::glob(input)
            .with_context(|| format!("invalid glob pattern: {}", input))?
            .filter_map(|r| r.ok())
            .filter(|p| p.is_file() && is_supported(p))
            .collect();
        if matches.is_empty() {
            bail!("input not found: {}", input);
        }
        let base = glob_base(input);
        for path in matches {
            files.push(SourceFile {
                display: display_path(path.strip_prefix(&base).unwrap_or(&path)),
                path,
            });
        }
    }

    // Sort for deterministic output
    files.sort();
    files.dedup();
    debug!(count = files.len(), input, "discovered sources");
    Ok(files)
}

/// Parse every file. Read failures become diagnostics and contribute nothing.
pub fn load(files: &[SourceFile]) -> Vec<SourceDoc> {
    let mut docs = Vec::new();
    for file in files {
        let content = match fs::read_to_string(&file.path) {
            Ok(content) => content,
            Err(e) => {
                warn!(path = %file.path.display(), error = %e, "failed to read source, skipping");
                continue;
            }
        };
        let blocks = parser::parse(&content);
        debug!(path = %file.display, blocks = blocks.len(), "parsed");
        if blocks.is_empty() {
            continue;
        }
        docs.push(SourceDoc {
            path: file.display.clone(),
            blocks,
        });
    }
    docs
}

/// Leading directories of a glob pattern that contain no wildcard.
///
/// `/src/rtl/**/*.v` → `/src/rtl`
fn glob_base(pattern: &str) -> PathBuf {
    Path::new(pattern)
        .components()
        .take_while(|c| !c.as_os_str().to_string_lossy().contains(['*', '?', '[']))
        .collect()
}

/// `/`-joined normal components; root, prefix and `.` are dropped.
fn display_path(path: &Path) -> String {
    path.components()
        .filter(|c| matches!(c, Component::Normal(_) | Component::ParentDir))
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

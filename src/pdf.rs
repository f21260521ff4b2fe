//! PDF conversion through an external converter (pandoc by default).
//!
//! A missing converter is not an error; the PDF is simply not produced.

use std::path::Path;
use std::process::Command;
use tracing::{info, warn};

pub const DEFAULT_CONVERTER: &str = "pandoc";

#[derive(Debug, PartialEq, Eq)]
pub enum PdfOutcome {
    Written,
    /// Converter binary not found on PATH
    Skipped,
    Failed,
}

/// Convert the Markdown file at `markdown` into `pdf`.
pub fn convert(markdown: &Path, pdf: &Path, converter: &str) -> PdfOutcome {
    let binary = match which::which(converter) {
        Ok(path) => path,
        Err(_) => {
            info!(converter, "converter not found in PATH, skipping PDF generation");
            return PdfOutcome::Skipped;
        }
    };

    let status = Command::new(&binary)
        .arg(markdown)
        .arg("--wrap=preserve")
        .arg("-o")
        .arg(pdf)
        .status();

    match status {
        Ok(status) if status.success() => {
            info!(path = %pdf.display(), "PDF generated");
            PdfOutcome::Written
        }
        Ok(status) => {
            warn!(converter = %binary.display(), %status, "PDF generation failed");
            PdfOutcome::Failed
        }
        Err(e) => {
            warn!(converter = %binary.display(), error = %e, "failed to run converter");
            PdfOutcome::Failed
        }
    }
}

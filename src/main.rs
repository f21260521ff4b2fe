//! hdldoc — generate documentation from Doxygen-style comments in Verilog.
//!
//! Supports two modes:
//!
//! - **stdin mode**: `hdldoc < adder.v` prints Markdown (or `-f html`) to stdout
//! - **file mode**: `hdldoc -i rtl/ -o docs/` writes `documentation.{md,html,pdf}`

mod anchor;
mod discover;
mod locale;
mod model;
mod parser;
mod pdf;
mod render;

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "hdldoc",
    about = "Doxygen-lite documentation generator for Verilog files"
)]
struct Cli {
    /// Input directory, file, or glob pattern. If omitted, reads from stdin.
    #[arg(short = 'i', long)]
    input: Option<String>,

    /// Output directory (required when --input is given)
    #[arg(short = 'o', long, requires = "input")]
    output: Option<PathBuf>,

    /// Language for section labels: en or de
    #[arg(long, default_value = "en")]
    language: String,

    /// Title for the documentation
    #[arg(long, default_value = "Project Documentation")]
    title: String,

    /// Output formats: markdown, html, pdf. Repeatable or comma-separated.
    #[arg(short = 'f', long, value_delimiter = ',', default_values = ["markdown", "html", "pdf"])]
    format: Vec<String>,

    /// Converter used for PDF output
    #[arg(long, default_value = pdf::DEFAULT_CONVERTER)]
    pandoc: String,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.input {
        None => stdin_mode(&cli),
        Some(ref input) => file_mode(&cli, input),
    }
}

/// Log filter comes from `HDLDOC_LOG`, default `info`.
fn init_tracing() {
    let filter = EnvFilter::try_from_env("HDLDOC_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// stdin mode: parse one source from stdin, write the first requested
/// text format (Markdown by default) to stdout.
fn stdin_mode(cli: &Cli) -> Result<()> {
    let name = cli
        .format
        .iter()
        .find(|f| f.as_str() != "pdf")
        .context("pdf output requires --input and --output")?;
    let renderer = render::create_renderer(name)?;

    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("failed to read stdin")?;

    let doc = model::SourceDoc {
        path: "stdin".to_string(),
        blocks: parser::parse(&input),
    };
    let project = model::Project::new(cli.title.clone(), vec![doc]);
    let labels = locale::Labels::for_language(&cli.language);
    print!("{}", renderer.render(&project, &labels));
    Ok(())
}

/// file mode: discover sources, parse them, write every requested format.
fn file_mode(cli: &Cli, input: &str) -> Result<()> {
    let output_dir = cli
        .output
        .as_deref()
        .context("--output is required when --input is given")?;

    let want_pdf = cli.format.iter().any(|f| f == "pdf");
    // The PDF is converted from the Markdown file, so it is always written then.
    let mut renderers = Vec::new();
    for name in cli.format.iter().filter(|f| f.as_str() != "pdf") {
        renderers.push(render::create_renderer(name)?);
    }
    if want_pdf && !renderers.iter().any(|r| r.file_name().ends_with(".md")) {
        renderers.push(render::create_renderer("markdown")?);
    }

    let sources = discover::discover(input)?;
    let project = model::Project::new(cli.title.clone(), discover::load(&sources));
    info!(
        sources = sources.len(),
        documented = project.files.len(),
        "parsed input"
    );
    let labels = locale::Labels::for_language(&cli.language);

    fs::create_dir_all(output_dir)
        .with_context(|| format!("failed to create output directory: {}", output_dir.display()))?;

    let mut markdown_path = None;
    for renderer in &renderers {
        let path = output_dir.join(renderer.file_name());
        fs::write(&path, renderer.render(&project, &labels))
            .with_context(|| format!("failed to write {}", path.display()))?;
        info!(path = %path.display(), "documentation generated");
        if renderer.file_name().ends_with(".md") {
            markdown_path = Some(path);
        }
    }

    if want_pdf {
        if let Some(md) = markdown_path {
            pdf::convert(&md, &output_dir.join("documentation.pdf"), &cli.pandoc);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn formats_default_to_all() {
        let cli = Cli::parse_from(["hdldoc", "-i", "rtl", "-o", "docs"]);
        assert_eq!(cli.format, ["markdown", "html", "pdf"]);
        assert_eq!(cli.language, "en");
    }

    #[test]
    fn formats_comma_separated() {
        let cli = Cli::parse_from(["hdldoc", "-i", "rtl", "-o", "docs", "-f", "html,pdf"]);
        assert_eq!(cli.format, ["html", "pdf"]);
    }

    #[test]
    fn output_requires_input() {
        assert!(Cli::try_parse_from(["hdldoc", "-o", "docs"]).is_err());
    }
}

//! Renderer module — trait-based format dispatch.

pub mod html;
pub mod markdown;

use crate::locale::Labels;
use crate::model::Project;
use anyhow::{anyhow, Result};

/// Trait for rendering a Project into a specific output format.
pub trait Renderer {
    fn render(&self, project: &Project, labels: &Labels) -> String;
    fn file_name(&self) -> &str;
}

/// Create a renderer for the given format name.
pub fn create_renderer(format: &str) -> Result<Box<dyn Renderer>> {
    match format {
        "markdown" | "md" => Ok(Box::new(markdown::MarkdownRenderer)),
        "html" => Ok(Box::new(html::HtmlRenderer)),
        _ => Err(anyhow!("unknown format: {}. Use markdown or html", format)),
    }
}

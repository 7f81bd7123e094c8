//! Renderer module — trait-based format dispatch.

pub mod json;
pub mod markdown;

use crate::model::Document;
use anyhow::{anyhow, Result};

pub use markdown::ParamMatch;

/// Trait for rendering a Document into a specific output format.
pub trait Renderer {
    fn render(&self, doc: &Document) -> Result<String>;
    fn file_extension(&self) -> &str;
}

/// Settings shared by the renderers that link back to the source.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Relative path to the stylesheet, used as `<source_link>#L<line>`
    pub source_link: String,
    pub param_match: ParamMatch,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            source_link: "../index.css".to_string(),
            param_match: ParamMatch::default(),
        }
    }
}

/// Create a renderer for the given format name.
pub fn create_renderer(format: &str, options: RenderOptions) -> Result<Box<dyn Renderer>> {
    match format {
        "markdown" | "md" => Ok(Box::new(markdown::MarkdownRenderer::new(options))),
        "json" => Ok(Box::new(json::JsonRenderer)),
        _ => Err(anyhow!("unknown format: {}. Use markdown or json", format)),
    }
}

//! JSON renderer — structured output for tooling integration.
//!
//! Serializes the record list with camelCase keys plus a `total` count.

use crate::model::*;
use crate::render::Renderer;
use anyhow::{Context, Result};
use serde::Serialize;

pub struct JsonRenderer;

#[derive(Serialize)]
struct JsonDocument<'a> {
    total: usize,
    functions: &'a [FunctionDoc],
}

impl Renderer for JsonRenderer {
    fn render(&self, doc: &Document) -> Result<String> {
        let payload = JsonDocument {
            total: doc.functions.len(),
            functions: &doc.functions,
        };
        let mut out =
            serde_json::to_string_pretty(&payload).context("failed to serialize functions")?;
        out.push('\n');
        Ok(out)
    }

    fn file_extension(&self) -> &str {
        "json"
    }
}

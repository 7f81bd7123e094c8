//! Markdown function reference.
//!
//! Layout: title, intro, total count, then one block per function with the
//! heading linking back to its `@function` line. Empty fields render nothing.

use crate::model::*;
use crate::render::{RenderOptions, Renderer};
use anyhow::Result;
use std::collections::HashMap;

const TITLE: &str = "# CSS Extras Function Reference";
const INTRO: &str = "Complete reference for all CSS custom functions in css-extras.";
// U+2197 followed by the text-presentation selector
const SOURCE_ARROW: &str = "\u{2197}\u{FE0E}";

/// How a documented `@param` name is matched to a declared parameter when
/// looking up its default value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParamMatch {
    /// Names must be identical
    #[default]
    Exact,
    /// Identical, or identical once a leading `--` is removed from both
    IgnoreSigil,
}

pub struct MarkdownRenderer {
    options: RenderOptions,
}

impl MarkdownRenderer {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }
}

impl Renderer for MarkdownRenderer {
    fn render(&self, doc: &Document) -> Result<String> {
        let mut out = String::new();

        out.push_str(TITLE);
        out.push_str("\n\n");
        out.push_str(INTRO);
        out.push_str("\n\n");
        out.push_str(&format!("**Total functions:** {}\n\n", doc.functions.len()));
        out.push_str("---\n\n");

        for func in &doc.functions {
            out.push_str(&self.render_function(func));
        }

        Ok(out)
    }

    fn file_extension(&self) -> &str {
        "md"
    }
}

impl MarkdownRenderer {
    fn render_function(&self, func: &FunctionDoc) -> String {
        let mut out = String::new();

        out.push_str(&format!(
            "## `{}()` [{}]({}#L{})\n\n",
            func.name, SOURCE_ARROW, self.options.source_link, func.line_number
        ));

        if !func.description.is_empty() {
            out.push_str(&func.description);
            out.push_str("\n\n");
        }

        if !func.params.is_empty() {
            let defaults = Defaults::new(&func.parameters, self.options.param_match);
            out.push_str("### Parameters\n\n");
            for param in &func.params {
                out.push_str(&format!(
                    "- **`{}`** (`{}`): {}",
                    param.name, param.type_name, param.description
                ));
                if let Some(default) = defaults.lookup(&param.name) {
                    out.push_str(&format!(" Default: `{}`", default));
                }
                out.push('\n');
            }
            out.push('\n');
        }

        if let Some(ref returns) = func.returns {
            out.push_str("### Returns\n\n");
            out.push_str(&format!("`{}`: {}\n\n", returns.type_name, returns.description));
        }

        if let Some(example) = func.example.as_deref().filter(|e| !e.is_empty()) {
            out.push_str("### Example\n\n");
            out.push_str("```css\n");
            out.push_str(example);
            out.push('\n');
            if let Some(output) = func.example_output.as_deref().filter(|o| !o.is_empty()) {
                out.push_str(&format!("/* Output: {} */\n", output));
            }
            out.push_str("```\n\n");
        }

        out.push_str("---\n\n");
        out
    }
}

/// Declared parameter defaults of one function, keyed by name.
///
/// When a name is declared twice, the first declaration wins.
struct Defaults<'a> {
    exact: HashMap<&'a str, Option<&'a str>>,
    unprefixed: HashMap<&'a str, Option<&'a str>>,
    mode: ParamMatch,
}

impl<'a> Defaults<'a> {
    fn new(parameters: &'a [Parameter], mode: ParamMatch) -> Self {
        let mut exact = HashMap::new();
        let mut unprefixed = HashMap::new();
        for param in parameters {
            let default = param.default_value.as_deref();
            exact.entry(param.name.as_str()).or_insert(default);
            unprefixed.entry(strip_sigil(&param.name)).or_insert(default);
        }
        Self {
            exact,
            unprefixed,
            mode,
        }
    }

    /// Default value for a documented name; empty defaults count as none.
    fn lookup(&self, name: &str) -> Option<&'a str> {
        let found = match self.exact.get(name) {
            Some(default) => *default,
            None if self.mode == ParamMatch::IgnoreSigil => {
                self.unprefixed.get(strip_sigil(name)).copied().flatten()
            }
            None => None,
        };
        found.filter(|d| !d.is_empty())
    }
}

fn strip_sigil(name: &str) -> &str {
    name.strip_prefix("--").unwrap_or(name)
}

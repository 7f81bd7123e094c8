//! Data model for parsed documentation — format-agnostic.

use serde::Serialize;

/// All documented functions from a single source file, in source order.
#[derive(Debug, Default, Serialize)]
pub struct Document {
    pub functions: Vec<FunctionDoc>,
}

/// A single documented `@function`.
#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionDoc {
    /// Name including the `--` sigil, e.g. `--double`
    pub name: String,
    /// Declared parameters, from the parenthesized list
    pub parameters: Vec<Parameter>,
    /// One-based line of the `@function` token
    pub line_number: usize,
    /// Untagged lines before the first tag (possibly empty)
    pub description: String,
    /// Well-formed @param entries
    pub params: Vec<ParamDoc>,
    /// Last well-formed @returns
    pub returns: Option<ReturnsDoc>,
    /// @example text plus continuation lines
    pub example: Option<String>,
    /// @output text plus continuation lines
    pub example_output: Option<String>,
}

/// A declared parameter: `name` or `name: default`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Parameter {
    pub name: String,
    /// Raw default text, unvalidated
    pub default_value: Option<String>,
}

/// Parsed `@param {type} --name description`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParamDoc {
    #[serde(rename = "type")]
    pub type_name: String,
    pub name: String,
    pub description: String,
}

/// Parsed `@returns {type} description`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReturnsDoc {
    #[serde(rename = "type")]
    pub type_name: String,
    pub description: String,
}

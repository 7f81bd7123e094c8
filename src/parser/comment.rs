//! Doc comment field extraction — line-by-line state machine.
//!
//! Each trimmed line either opens a tagged section or, when the cursor sits
//! on a free-text section (description, example, output), continues it.

use crate::model::{ParamDoc, ReturnsDoc};
use regex::Regex;
use std::sync::LazyLock;

static RE_PARAM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^@param\s+\{([^}]+)\}\s+(--[A-Za-z0-9_-]+)\s+-?\s*(.*)$").unwrap()
});

static RE_RETURNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^@returns\s+\{([^}]+)\}\s+(.*)$").unwrap());

/// Fields extracted from one doc comment.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct CommentDoc {
    pub description: String,
    pub params: Vec<ParamDoc>,
    pub returns: Option<ReturnsDoc>,
    pub example: Option<String>,
    pub example_output: Option<String>,
}

/// Where untagged lines currently go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Description,
    Params,
    Returns,
    Example,
    Output,
}

/// A classified comment line.
#[derive(Debug, PartialEq, Eq)]
enum Line<'a> {
    Blank,
    Param(&'a str),
    Returns(&'a str),
    Example(&'a str),
    Output(&'a str),
    /// Any other `@...` line
    UnknownTag,
    Text(&'a str),
}

impl<'a> Line<'a> {
    fn classify(line: &'a str) -> Self {
        if line.is_empty() {
            Line::Blank
        } else if line.starts_with("@param") {
            Line::Param(line)
        } else if line.starts_with("@returns") {
            Line::Returns(line)
        } else if let Some(rest) = line.strip_prefix("@example") {
            Line::Example(rest.trim())
        } else if let Some(rest) = line.strip_prefix("@output") {
            Line::Output(rest.trim())
        } else if line.starts_with('@') {
            Line::UnknownTag
        } else {
            Line::Text(line)
        }
    }
}

/// Parse the inner text of a `/** ... */` block.
pub fn parse(content: &str) -> CommentDoc {
    let mut doc = CommentDoc::default();
    let mut section = Section::Description;

    for raw in content.split('\n') {
        section = step(&mut doc, section, Line::classify(raw.trim()));
    }

    doc
}

/// Apply one line and return the next cursor position.
fn step(doc: &mut CommentDoc, section: Section, line: Line<'_>) -> Section {
    match line {
        Line::Blank | Line::UnknownTag => section,
        Line::Param(text) => {
            // Malformed @param still moves the cursor
            if let Some(caps) = RE_PARAM.captures(text) {
                doc.params.push(ParamDoc {
                    type_name: caps[1].to_string(),
                    name: caps[2].to_string(),
                    description: caps[3].to_string(),
                });
            }
            Section::Params
        }
        Line::Returns(text) => {
            if let Some(caps) = RE_RETURNS.captures(text) {
                doc.returns = Some(ReturnsDoc {
                    type_name: caps[1].to_string(),
                    description: caps[2].to_string(),
                });
            }
            Section::Returns
        }
        Line::Example(text) => {
            doc.example = Some(text.to_string());
            Section::Example
        }
        Line::Output(text) => {
            doc.example_output = Some(text.to_string());
            Section::Output
        }
        Line::Text(text) => {
            match section {
                Section::Description => concat_str(&mut doc.description, text),
                Section::Example => concat_str(doc.example.get_or_insert_with(String::new), text),
                Section::Output => {
                    concat_str(doc.example_output.get_or_insert_with(String::new), text)
                }
                Section::Params | Section::Returns => {}
            }
            section
        }
    }
}

/// Concatenate strings with newline separator.
fn concat_str(dest: &mut String, text: &str) {
    if !dest.is_empty() {
        dest.push('\n');
    }
    dest.push_str(text);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_comment() {
        let doc = parse(
            "\nDoubles a number.\n@param {number} --n The input.\n@returns {number} The doubled value.\n@example --double(2)\n@output 4\n",
        );
        assert_eq!(doc.description, "Doubles a number.");
        assert_eq!(
            doc.params,
            vec![ParamDoc {
                type_name: "number".to_string(),
                name: "--n".to_string(),
                description: "The input.".to_string(),
            }]
        );
        assert_eq!(
            doc.returns,
            Some(ReturnsDoc {
                type_name: "number".to_string(),
                description: "The doubled value.".to_string(),
            })
        );
        assert_eq!(doc.example.as_deref(), Some("--double(2)"));
        assert_eq!(doc.example_output.as_deref(), Some("4"));
    }

    #[test]
    fn description_spans_lines_and_skips_blanks() {
        let doc = parse("\n * First line.\n\n   Second line.\n");
        // leading `*` is not stripped; only whitespace is trimmed
        assert_eq!(doc.description, "* First line.\nSecond line.");
    }

    #[test]
    fn param_hyphen_separator_is_optional() {
        let doc = parse("@param {length} --size - The size.\n@param {color} --tint tint color");
        assert_eq!(doc.params[0].description, "The size.");
        assert_eq!(doc.params[1].description, "tint color");
    }

    #[test]
    fn malformed_param_is_dropped_but_ends_description() {
        let doc = parse("Intro.\n@param number --n missing braces\nNot description.");
        assert!(doc.params.is_empty());
        assert_eq!(doc.description, "Intro.");
    }

    #[test]
    fn param_without_description_is_malformed() {
        let doc = parse("@param {number} --n");
        assert!(doc.params.is_empty());
    }

    #[test]
    fn param_name_needs_sigil() {
        let doc = parse("@param {number} n The input.");
        assert!(doc.params.is_empty());
    }

    #[test]
    fn last_returns_wins() {
        let doc = parse("@returns {number} First.\n@returns {length} Second.");
        let returns = doc.returns.unwrap();
        assert_eq!(returns.type_name, "length");
        assert_eq!(returns.description, "Second.");
    }

    #[test]
    fn malformed_returns_keeps_previous() {
        let doc = parse("@returns {number} Kept.\n@returns nothing");
        assert_eq!(doc.returns.unwrap().description, "Kept.");
    }

    #[test]
    fn params_and_returns_do_not_accumulate_text() {
        let doc = parse("@param {number} --n The input.\ncontinued\n@returns {number} Out.\nmore");
        assert_eq!(doc.params[0].description, "The input.");
        assert_eq!(doc.returns.unwrap().description, "Out.");
        assert_eq!(doc.description, "");
    }

    #[test]
    fn multiline_example_and_output() {
        let doc = parse("@example\n.a {\n  width: --double(2px);\n}\n@output\nwidth: 4px;\n\nheight: auto;");
        assert_eq!(doc.example.as_deref(), Some(".a {\nwidth: --double(2px);\n}"));
        assert_eq!(doc.example_output.as_deref(), Some("width: 4px;\nheight: auto;"));
    }

    #[test]
    fn example_inline_text_then_continuation() {
        let doc = parse("@example --f(1)\n--f(2)");
        assert_eq!(doc.example.as_deref(), Some("--f(1)\n--f(2)"));
    }

    #[test]
    fn empty_example_tag_is_empty_string() {
        let doc = parse("@example");
        assert_eq!(doc.example.as_deref(), Some(""));
        assert!(doc.example_output.is_none());
    }

    #[test]
    fn repeated_example_restarts_field() {
        let doc = parse("@example one\n@example two");
        assert_eq!(doc.example.as_deref(), Some("two"));
    }

    #[test]
    fn unknown_tag_keeps_cursor() {
        let doc = parse("Intro.\n@deprecated\nStill intro.");
        assert_eq!(doc.description, "Intro.\nStill intro.");
    }

    #[test]
    fn prefix_tag_matching() {
        let doc = parse("@parameter {x} --y z\nafter\n@examples foo");
        assert!(doc.params.is_empty());
        assert_eq!(doc.description, "");
        assert_eq!(doc.example.as_deref(), Some("s foo"));
    }

    #[test]
    fn classify_lines() {
        assert_eq!(Line::classify(""), Line::Blank);
        assert_eq!(Line::classify("@output  4 "), Line::Output("4"));
        assert_eq!(Line::classify("@see --other"), Line::UnknownTag);
        assert_eq!(Line::classify("text"), Line::Text("text"));
    }
}

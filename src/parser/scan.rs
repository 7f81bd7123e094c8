//! Independent linear scans for doc comments and `@function` openings.
//!
//! Both scans run over the whole source before any association happens, so
//! a comment-like sequence inside a function body (or a function-like
//! sequence inside a comment) is still found by its own scan.

use regex::Regex;
use std::sync::LazyLock;

// `/** ... */`, shortest match
static RE_DOC_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/\*\*((?s:.*?))\*/").unwrap());

// `@function --name( ... ) {`, parameter list up to the first `)` that is followed by `{`
static RE_FUNCTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"@function\s+(--[A-Za-z0-9_-]+)\s*\(((?s:.*?))\)\s*\{").unwrap()
});

/// A located `/** ... */` block.
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(dead_code)]
pub struct CommentSpan<'a> {
    /// Text between `/**` and `*/`
    pub content: &'a str,
    pub start: usize,
    /// Exclusive
    pub end: usize,
}

/// A located `@function` declaration opening.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionSite<'a> {
    pub name: &'a str,
    /// Raw text between the parentheses
    pub params: &'a str,
    pub start: usize,
    pub line_number: usize,
}

/// Collect every doc comment in document order.
pub fn comments(source: &str) -> Vec<CommentSpan<'_>> {
    RE_DOC_COMMENT
        .captures_iter(source)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let content = caps.get(1)?;
            Some(CommentSpan {
                content: content.as_str(),
                start: whole.start(),
                end: whole.end(),
            })
        })
        .collect()
}

/// Collect every function site in document order.
///
/// Line numbers are counted incrementally so the whole scan stays linear in
/// the length of the source.
pub fn functions(source: &str) -> Vec<FunctionSite<'_>> {
    let mut sites = Vec::new();
    let mut line = 1;
    let mut counted_to = 0;

    for caps in RE_FUNCTION.captures_iter(source) {
        let (Some(whole), Some(name), Some(params)) = (caps.get(0), caps.get(1), caps.get(2))
        else {
            continue;
        };
        line += count_newlines(&source[counted_to..whole.start()]);
        counted_to = whole.start();

        sites.push(FunctionSite {
            name: name.as_str(),
            params: params.as_str(),
            start: whole.start(),
            line_number: line,
        });
    }

    sites
}

fn count_newlines(text: &str) -> usize {
    text.bytes().filter(|&b| b == b'\n').count()
}

//! Parser module — pairs `@function` declarations with their doc comments.
//!
//! A function is documented only by the nearest `/** ... */` block that ends
//! before it, and only when nothing but whitespace separates the two.
//! Undocumented functions are skipped.

pub mod comment;
pub mod params;
pub mod scan;

use crate::model::{Document, FunctionDoc};
use scan::{CommentSpan, FunctionSite};

/// Parse a stylesheet into its documented functions.
pub fn parse(source: &str) -> Document {
    let comments = scan::comments(source);
    let functions = scan::functions(source)
        .into_iter()
        .filter_map(|site| {
            let span = preceding_comment(source, &comments, &site)?;
            Some(build_function(&site, span))
        })
        .collect();

    Document { functions }
}

/// Find the doc comment attached to a function site, if any.
///
/// Spans are disjoint and sorted, so their end offsets are sorted too and the
/// nearest span ending before the site is found by binary search.
fn preceding_comment<'a>(
    source: &str,
    comments: &'a [CommentSpan<'a>],
    site: &FunctionSite<'_>,
) -> Option<&'a CommentSpan<'a>> {
    let before = comments.partition_point(|c| c.end < site.start);
    let nearest = comments.get(before.checked_sub(1)?)?;

    // Never fall back to an earlier span
    source[nearest.end..site.start]
        .trim()
        .is_empty()
        .then_some(nearest)
}

fn build_function(site: &FunctionSite<'_>, span: &CommentSpan<'_>) -> FunctionDoc {
    let doc = comment::parse(span.content);

    FunctionDoc {
        name: site.name.to_string(),
        parameters: params::parse(site.params),
        line_number: site.line_number,
        description: doc.description,
        params: doc.params,
        returns: doc.returns,
        example: doc.example,
        example_output: doc.example_output,
    }
}

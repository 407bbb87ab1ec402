//! Docblock location and parsing.
//!
//! Two jobs live here: finding the `/** ... */` comment that documents a
//! given AST node (via the program's trivia list), and parsing that
//! comment's text into a [`DocumentationBlock`] — a short description
//! plus an ordered list of `@param` tags.
//!
//! The parser is line-oriented: it strips the `/**` and `*/` delimiters
//! and the leading `*` gutter from every line, takes the first paragraph
//! of non-tag text as the summary, and collects each `@param` tag with
//! its continuation lines. Hash-style array documentation, e.g.
//! ```text
//! @param array $args {
//!     Optional. An array of arguments.
//!
//!     @type string $orderby Sort field.
//! }
//! ```
//! is kept as a single description: once a `{` is opened, lines (even
//! ones starting with `@`) keep accumulating until the braces balance.

use mago_span::HasSpan;
use mago_syntax::ast::*;

use crate::types::{DocumentationBlock, ParamTag};

/// Find the docblock comment (if any) that documents the given AST node
/// and return its raw text.
///
/// Scans the program's trivia list backwards from the node's start
/// offset. Whitespace and ordinary comments between the docblock and the
/// node are allowed; any other content in a gap means the nearest
/// docblock belongs to something else and `None` is returned.
pub fn docblock_before<'a>(
    trivia: &'a [Trivia<'a>],
    content: &str,
    node: &impl HasSpan,
) -> Option<&'a str> {
    let node_start = node.span().start.offset;
    let preceding = trivia.partition_point(|t| t.span.start.offset < node_start);

    let content_bytes = content.as_bytes();
    let mut gap_end = node_start;

    for t in trivia[..preceding].iter().rev() {
        let gap = content_bytes
            .get(t.span.end.offset as usize..gap_end as usize)
            .unwrap_or(&[]);
        if !gap.iter().all(u8::is_ascii_whitespace) {
            return None;
        }

        match t.kind {
            TriviaKind::DocBlockComment => return Some(t.value),
            TriviaKind::WhiteSpace
            | TriviaKind::SingleLineComment
            | TriviaKind::MultiLineComment
            | TriviaKind::HashComment => {
                gap_end = t.span.start.offset;
            }
        }
    }

    None
}

/// Parse a raw `/** ... */` comment into a [`DocumentationBlock`].
///
/// This is a best-effort parse: unknown tags are skipped, and a `@param`
/// tag with a missing name token still produces a [`ParamTag`] (with a
/// one-token `raw`) so that the validator can report the data fault.
pub fn parse(docblock: &str) -> DocumentationBlock {
    let trimmed = docblock.trim();
    let inner = trimmed
        .strip_prefix("/**")
        .unwrap_or(trimmed)
        .strip_suffix("*/")
        .unwrap_or(trimmed);

    // Strip leading whitespace and the `*` gutter common in docblocks.
    let lines: Vec<&str> = inner
        .lines()
        .map(|line| line.trim().trim_start_matches('*').trim())
        .collect();

    let mut i = 0;
    while i < lines.len() && lines[i].is_empty() {
        i += 1;
    }

    // The summary is the first paragraph of non-tag text: everything up
    // to the first blank line or the first tag line.
    let mut summary_lines = Vec::new();
    while i < lines.len() && !lines[i].is_empty() && !lines[i].starts_with('@') {
        summary_lines.push(lines[i]);
        i += 1;
    }
    let summary = summary_lines.join(" ");

    let mut param_tags = Vec::new();
    while i < lines.len() {
        if let Some(rest) = lines[i].strip_prefix("@param")
            && (rest.is_empty() || rest.starts_with(char::is_whitespace))
        {
            let (tag, consumed) = parse_param_tag(rest.trim_start(), &lines[i + 1..]);
            param_tags.push(tag);
            i += 1 + consumed;
        } else {
            i += 1;
        }
    }

    DocumentationBlock {
        summary,
        param_tags,
    }
}

/// Parse one `@param` tag from its first-line content plus the docblock
/// lines that follow it. Returns the tag and the number of continuation
/// lines consumed.
fn parse_param_tag<'a>(content: &'a str, following: &[&'a str]) -> (ParamTag, usize) {
    let (type_token, after_type) = split_token(content);
    let (name_token, first_line) = split_token(after_type);

    let raw = if name_token.is_empty() {
        type_token.to_string()
    } else {
        format!("{type_token} {name_token}")
    };

    // The description continues until the next tag line, except inside a
    // hash block: an unbalanced `{` keeps consuming lines (including
    // `@type` entries) until it closes.
    let mut depth = brace_delta(first_line);
    let mut description_lines = vec![first_line];
    let mut consumed = 0;
    for line in following {
        if depth <= 0 && line.starts_with('@') {
            break;
        }
        description_lines.push(line);
        depth += brace_delta(line);
        consumed += 1;
    }

    while description_lines.first().is_some_and(|line| line.is_empty()) {
        description_lines.remove(0);
    }
    while description_lines.last().is_some_and(|line| line.is_empty()) {
        description_lines.pop();
    }

    (
        ParamTag {
            raw,
            description: description_lines.join("\n"),
        },
        consumed,
    )
}

/// Split off the first whitespace-delimited token, returning it and the
/// rest of the string with leading whitespace removed.
fn split_token(s: &str) -> (&str, &str) {
    match s.find(char::is_whitespace) {
        Some(split_at) => (&s[..split_at], s[split_at..].trim_start()),
        None => (s, ""),
    }
}

fn brace_delta(line: &str) -> i32 {
    let opens = line.chars().filter(|&c| c == '{').count() as i32;
    let closes = line.chars().filter(|&c| c == '}').count() as i32;
    opens - closes
}

//! scanner.rs - Brace-depth scanning for inline regions.
//!
//! License: MIT OR APACHE 2.0

use crate::markup::compiler::CompiledMarkup;
use crate::roles::RoleSet;

/// A fully delimited inline region, as byte offsets into the scanned text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineTag {
    /// Offset of the leading backslash.
    pub start: usize,
    /// Offset of the first byte of the body.
    pub body_start: usize,
    /// Offset of the closing brace.
    pub body_end: usize,
    pub roles: RoleSet,
}

impl InlineTag {
    /// Offset one past the closing brace.
    pub fn end(&self) -> usize {
        self.body_end + 1
    }

    pub fn body<'a>(&self, text: &'a str) -> &'a str {
        &text[self.body_start..self.body_end]
    }
}

/// Outcome of looking for the next inline region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineScan {
    Found(InlineTag),
    /// An opening marker at this offset has no matching closing brace.
    Unclosed(usize),
    NotFound,
}

/// Returns the offset of the brace closing a body that starts at `body_start`.
///
/// Depth starts at zero; `{` increments it, and a `}` seen at depth zero is
/// the match. Braces are ASCII, so scanning bytes never splits a character.
pub fn find_closing_brace(text: &str, body_start: usize) -> Option<usize> {
    let mut depth = 0usize;
    for (offset, byte) in text.as_bytes().get(body_start..)?.iter().enumerate() {
        match byte {
            b'{' => depth += 1,
            b'}' if depth == 0 => return Some(body_start + offset),
            b'}' => depth -= 1,
            _ => {}
        }
    }
    None
}

/// Finds the first inline region at or after `from`.
pub fn next_inline_tag(markup: &CompiledMarkup, text: &str, from: usize) -> InlineScan {
    let Some(caps) = markup.inline_start.captures_at(text, from) else {
        return InlineScan::NotFound;
    };
    let (Some(whole), Some(roles)) = (caps.get(0), caps.get(1)) else {
        return InlineScan::NotFound;
    };

    match find_closing_brace(text, whole.end()) {
        Some(body_end) => InlineScan::Found(InlineTag {
            start: whole.start(),
            body_start: whole.end(),
            body_end,
            roles: RoleSet::parse(roles.as_str()),
        }),
        None => InlineScan::Unclosed(whole.start()),
    }
}

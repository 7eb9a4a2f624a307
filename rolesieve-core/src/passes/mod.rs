//! The composable passes making up the filtering pipeline.
//!
//! Each pass is a free function over text and an explicit
//! [`FilterContext`](crate::engine::FilterContext); none keeps state between
//! calls. [`PassSet`] selects which optional passes an engine runs. The block
//! pass and the per-line inline pass always run.
//!
//! License: MIT OR APACHE 2.0

use serde::{Deserialize, Serialize};
use std::ops::Range;

pub mod blocks;
pub mod cleanup;
pub mod inline;

/// Which optional passes run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct PassSet {
    /// Line and block exclude markers.
    pub exclude: bool,
    /// Whole-document inline pass for bodies spanning lines.
    pub multiline_inline: bool,
    /// Leftover marker stripping and empty wrapper removal.
    pub cleanup: bool,
}

impl PassSet {
    pub fn full() -> Self {
        Self { exclude: true, multiline_inline: true, cleanup: true }
    }

    /// Block regions and single-line inline regions only.
    pub fn simple() -> Self {
        Self { exclude: false, multiline_inline: false, cleanup: false }
    }
}

impl Default for PassSet {
    fn default() -> Self {
        Self::full()
    }
}

/// Byte span of the line(s) holding `start..end`, line breaks excluded.
fn line_span(text: &str, start: usize, end: usize) -> Range<usize> {
    let line_start = text[..start].rfind('\n').map_or(0, |i| i + 1);
    let line_end = text[end..].find('\n').map_or(text.len(), |i| end + i);
    line_start..line_end
}

/// True when nothing but whitespace shares the line(s) of `start..end`.
pub(crate) fn fills_lines(text: &str, start: usize, end: usize) -> bool {
    let lines = line_span(text, start, end);
    text[lines.start..start].trim().is_empty() && text[end..lines.end].trim().is_empty()
}

/// Widens `start..end` to the whole line(s) it sits on when everything else
/// on those lines is whitespace, taking one line break with it.
///
/// Returns the range unchanged when other text shares the line.
pub(crate) fn removal_range(text: &str, start: usize, end: usize) -> Range<usize> {
    if !fills_lines(text, start, end) {
        return start..end;
    }
    let Range { start: line_start, end: line_end } = line_span(text, start, end);

    if line_end < text.len() {
        line_start..line_end + 1
    } else if line_start > 0 {
        line_start - 1..line_end
    } else {
        0..line_end
    }
}

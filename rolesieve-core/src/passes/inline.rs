//! inline.rs - Inline region processing.
//!
//! Two entry points share the brace-depth scanner: a whole-document pass that
//! runs before line splitting and catches bodies spanning several lines, and a
//! per-line pass used while walking the document line by line.
//!
//! A line is suppressed only when it held at least one processed tag and is
//! blank afterwards. Lines that were blank to begin with are never touched.
//!
//! License: MIT OR APACHE 2.0

use log::debug;

use crate::engine::FilterContext;
use crate::markup::compiler::CompiledMarkup;
use crate::markup::scanner::{next_inline_tag, InlineScan, InlineTag};
use crate::passes::{fills_lines, removal_range, PassSet};
use crate::roles::include;
use crate::summary::FilterSummary;

fn decide(tag: &InlineTag, ctx: &FilterContext, summary: &mut FilterSummary) -> bool {
    let keep = include(&tag.roles, &ctx.role);
    if keep {
        summary.inline_kept += 1;
    } else {
        summary.inline_dropped += 1;
    }
    debug!(
        target: "rolesieve_core::passes",
        "Inline region {} {} for role '{}'.",
        tag.roles,
        if keep { "kept" } else { "dropped" },
        ctx.role
    );
    keep
}

/// Resolves every inline region in the whole document.
///
/// Kept regions are replaced by their body in place, so any indentation in
/// front of the tag survives. When a replacement leaves its line(s) blank the
/// line is removed together with its line break. Scanning stops at the first
/// marker without a closing brace.
pub fn process_multiline(
    markup: &CompiledMarkup,
    content: &str,
    ctx: &FilterContext,
    summary: &mut FilterSummary,
) -> String {
    let mut result = content.to_string();
    let mut from = 0;

    loop {
        let tag = match next_inline_tag(markup, &result, from) {
            InlineScan::Found(tag) => tag,
            // Counted by the line pass, which sees every unclosed marker.
            InlineScan::Unclosed(at) => {
                debug!(
                    target: "rolesieve_core::passes",
                    "Inline region at byte {} has no closing brace; leaving the rest as text.",
                    at
                );
                break;
            }
            InlineScan::NotFound => break,
        };

        let replacement = if decide(&tag, ctx, summary) {
            tag.body(&result).to_string()
        } else {
            String::new()
        };

        // Rescan from the tag start so regions nested in a kept body are resolved too.
        if replacement.trim().is_empty() {
            if fills_lines(&result, tag.start, tag.end()) {
                summary.lines_suppressed += 1;
            }
            let range = removal_range(&result, tag.start, tag.end());
            from = range.start;
            result.replace_range(range, "");
        } else {
            from = tag.start;
            result.replace_range(tag.start..tag.end(), &replacement);
        }
    }

    result
}

/// Resolves the inline regions of one line.
///
/// Returns `None` when the line contained at least one region and nothing
/// but whitespace is left after resolving them.
pub fn process_simple(
    markup: &CompiledMarkup,
    line: &str,
    ctx: &FilterContext,
    summary: &mut FilterSummary,
) -> Option<String> {
    let mut result = line.to_string();
    let mut processed = false;

    loop {
        let tag = match next_inline_tag(markup, &result, 0) {
            InlineScan::Found(tag) => tag,
            InlineScan::Unclosed(_) => {
                summary.unclosed_inline += 1;
                break;
            }
            InlineScan::NotFound => break,
        };
        processed = true;

        if decide(&tag, ctx, summary) {
            let body = tag.body(&result).to_string();
            result.replace_range(tag.start..tag.end(), &body);
        } else {
            result.replace_range(tag.start..tag.end(), "");
        }
    }

    if processed && result.trim().is_empty() {
        summary.lines_suppressed += 1;
        None
    } else {
        Some(result)
    }
}

/// Runs one line through the line-level filters.
///
/// With the exclude pass active, a line carrying a line-exclude marker is
/// dropped whole. Inline regions are resolved only on lines without block
/// markers.
pub fn process_line(
    markup: &CompiledMarkup,
    line: &str,
    ctx: &FilterContext,
    passes: PassSet,
    summary: &mut FilterSummary,
) -> Option<String> {
    if passes.exclude && markup.exclude_line.is_match(line) {
        summary.exclude_lines += 1;
        return None;
    }

    if markup.inline_start.is_match(line)
        && !markup.block_start.is_match(line)
        && !markup.block_end.is_match(line)
    {
        return process_simple(markup, line, ctx, summary);
    }

    Some(line.to_string())
}

//! cleanup.rs - Final pass over the reassembled document.
//!
//! Strips any inline region or line exclude marker the earlier passes did not
//! consume, then deletes wrapper environments left holding nothing but
//! whitespace and `%` comments. On well-formed input the first two steps are
//! no-ops.
//!
//! License: MIT OR APACHE 2.0

use log::debug;
use std::ops::Range;

use crate::markup::compiler::CompiledMarkup;
use crate::markup::scanner::{next_inline_tag, InlineScan};
use crate::passes::removal_range;
use crate::summary::FilterSummary;

/// Runs every cleanup step.
pub fn run(markup: &CompiledMarkup, content: &str, summary: &mut FilterSummary) -> String {
    let stripped = strip_leftovers(markup, content, summary);
    remove_empty_wrappers(markup, &stripped, summary)
}

/// Strips leftover markers. Inline markers the scanner reports as unclosed are
/// kept whole.
fn strip_leftovers(markup: &CompiledMarkup, content: &str, summary: &mut FilterSummary) -> String {
    let mut without_inline = String::with_capacity(content.len());
    let mut copied_to = 0;
    let mut leftovers = 0;

    for found in markup.inline_leftover.find_iter(content) {
        let unclosed = matches!(
            next_inline_tag(markup, content, found.start()),
            InlineScan::Unclosed(at) if at == found.start()
        );
        if unclosed {
            continue;
        }
        without_inline.push_str(&content[copied_to..found.start()]);
        copied_to = found.end();
        leftovers += 1;
    }
    without_inline.push_str(&content[copied_to..]);

    leftovers += markup.exclude_line.find_iter(&without_inline).count();
    if leftovers == 0 {
        return without_inline;
    }

    debug!(
        target: "rolesieve_core::passes",
        "Stripping {} leftover marker(s).",
        leftovers
    );
    summary.leftovers_stripped += leftovers;
    markup.exclude_line.replace_all(&without_inline, "").into_owned()
}

/// Deletes empty wrappers, repeating until none are left so a wrapper that
/// only contained empty wrappers goes too.
fn remove_empty_wrappers(markup: &CompiledMarkup, content: &str, summary: &mut FilterSummary) -> String {
    let mut result = content.to_string();

    loop {
        let mut ranges: Vec<Range<usize>> = Vec::new();
        for (name, pattern) in &markup.empty_wrappers {
            for found in pattern.find_iter(&result) {
                debug!(
                    target: "rolesieve_core::passes",
                    "Removing empty '{}' wrapper at byte {}.",
                    name,
                    found.start()
                );
                ranges.push(removal_range(&result, found.start(), found.end()));
            }
        }
        if ranges.is_empty() {
            return result;
        }

        // Apply back to front so earlier offsets stay valid; skip overlaps.
        ranges.sort_by_key(|r| r.start);
        let mut cut_from = result.len();
        for range in ranges.into_iter().rev() {
            if range.end > cut_from {
                continue;
            }
            cut_from = range.start;
            result.replace_range(range, "");
            summary.wrappers_removed += 1;
        }
    }
}

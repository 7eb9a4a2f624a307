//! summary.rs - Counters describing what a filtering pass changed.
//!
//! License: MIT OR Apache-2.0

use serde::Serialize;
use std::ops::AddAssign;

/// Per-document (or, once merged, per-role) record of filtering decisions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FilterSummary {
    pub blocks_kept: usize,
    pub blocks_dropped: usize,
    pub inline_kept: usize,
    pub inline_dropped: usize,
    pub exclude_lines: usize,
    pub exclude_blocks: usize,
    /// Inline markers without a matching closing brace, left as literal text.
    pub unclosed_inline: usize,
    /// Leftover markers removed by the cleanup safety net.
    pub leftovers_stripped: usize,
    pub wrappers_removed: usize,
    /// Lines dropped because tag removal left them blank.
    pub lines_suppressed: usize,
}

impl FilterSummary {
    /// True when the pass found nothing to act on.
    pub fn is_noop(&self) -> bool {
        *self == Self::default()
    }

    pub fn regions_dropped(&self) -> usize {
        self.blocks_dropped + self.inline_dropped
    }

    pub fn regions_kept(&self) -> usize {
        self.blocks_kept + self.inline_kept
    }
}

impl AddAssign for FilterSummary {
    fn add_assign(&mut self, other: Self) {
        self.blocks_kept += other.blocks_kept;
        self.blocks_dropped += other.blocks_dropped;
        self.inline_kept += other.inline_kept;
        self.inline_dropped += other.inline_dropped;
        self.exclude_lines += other.exclude_lines;
        self.exclude_blocks += other.exclude_blocks;
        self.unclosed_inline += other.unclosed_inline;
        self.leftovers_stripped += other.leftovers_stripped;
        self.wrappers_removed += other.wrappers_removed;
        self.lines_suppressed += other.lines_suppressed;
    }
}

// File: rolesieve-core/src/headless.rs

//! `headless.rs`
//! Convenience wrapper for one-shot filtering without building an engine by hand.

use anyhow::Result;

use crate::config::MarkupGrammar;
use crate::engine::{FilterContext, FilterEngine};
use crate::engines::markup_engine::MarkupEngine;
use crate::passes::PassSet;

/// Filters `content` for `role` and returns the reassembled document.
///
/// # Arguments
///
/// * `grammar` - The directive names to recognize.
/// * `passes` - Which optional passes to run.
/// * `content` - The document text.
/// * `role` - The role to keep content for.
pub fn headless_filter_string(
    grammar: MarkupGrammar,
    passes: PassSet,
    content: &str,
    role: &str,
) -> Result<String> {
    let engine = MarkupEngine::with_passes(grammar, passes)?;
    let (filtered, _) = engine.filter(content, &FilterContext::new(role));
    Ok(filtered)
}

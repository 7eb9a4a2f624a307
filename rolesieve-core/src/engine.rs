// rolesieve-core/src/engine.rs
//! Defines the core FilterEngine trait and the per-pass context.
//!
//! The `FilterEngine` trait provides a pluggable interface for role filtering.
//! Engines are immutable once built: the role being filtered for travels in a
//! [`FilterContext`] passed to every call, so one engine can serve several
//! roles, sequentially or from several threads at once.
//!
//! License: MIT OR APACHE 2.0

use crate::config::MarkupGrammar;
use crate::passes::PassSet;
use crate::summary::FilterSummary;

/// Everything a filtering call needs to know about the current pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterContext {
    /// The role content is being filtered for.
    pub role: String,
}

impl FilterContext {
    pub fn new(role: impl Into<String>) -> Self {
        Self { role: role.into() }
    }
}

/// A trait that defines the core functionality of a role filtering engine.
pub trait FilterEngine: Send + Sync {
    /// Filters one document for the role in `ctx`.
    ///
    /// Returns the reassembled document and a summary of the decisions taken.
    /// Malformed markup never fails the call; unmatched constructs are left
    /// in place as text.
    ///
    /// # Arguments
    /// * `content` - The full text of the document.
    /// * `ctx` - The current pass, carrying the role.
    fn filter(&self, content: &str, ctx: &FilterContext) -> (String, FilterSummary);

    /// Returns the grammar the engine recognizes.
    fn grammar(&self) -> &MarkupGrammar;

    /// Returns the passes the engine runs.
    fn passes(&self) -> PassSet;
}

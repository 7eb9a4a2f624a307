// rolesieve-core/src/engines/markup_engine.rs
//! A `FilterEngine` implementation driven by a compiled markup grammar.
//! License: MIT OR APACHE 2.0

use anyhow::{Context, Result};
use log::debug;
use std::sync::Arc;

use crate::config::MarkupGrammar;
use crate::engine::{FilterContext, FilterEngine};
use crate::markup::compiler::{get_or_compile_markup, CompiledMarkup};
use crate::passes::{blocks, cleanup, inline, PassSet};
use crate::summary::FilterSummary;

/// Runs the pipeline: whole-document inline pass, line pass (exclude blocks,
/// block regions, line excludes, per-line inline regions), then cleanup.
/// Optional steps are skipped according to the engine's [`PassSet`].
#[derive(Debug, Clone)]
pub struct MarkupEngine {
    markup: Arc<CompiledMarkup>,
    grammar: MarkupGrammar,
    passes: PassSet,
}

impl MarkupEngine {
    pub fn new(grammar: MarkupGrammar) -> Result<Self> {
        Self::with_passes(grammar, PassSet::full())
    }

    pub fn with_passes(grammar: MarkupGrammar, passes: PassSet) -> Result<Self> {
        let markup = get_or_compile_markup(&grammar)
            .context("Failed to compile markup grammar for MarkupEngine")?;

        Ok(Self { markup, grammar, passes })
    }
}

impl FilterEngine for MarkupEngine {
    fn filter(&self, content: &str, ctx: &FilterContext) -> (String, FilterSummary) {
        let mut summary = FilterSummary::default();

        let text = if self.passes.multiline_inline {
            inline::process_multiline(&self.markup, content, ctx, &mut summary)
        } else {
            content.to_string()
        };

        let text = blocks::process_lines(&self.markup, &text, ctx, self.passes, &mut summary);

        let text = if self.passes.cleanup {
            cleanup::run(&self.markup, &text, &mut summary)
        } else {
            text
        };

        debug!(
            "Filtered for role '{}': {} region(s) kept, {} dropped, {} line(s) excluded.",
            ctx.role,
            summary.regions_kept(),
            summary.regions_dropped(),
            summary.exclude_lines
        );
        (text, summary)
    }

    fn grammar(&self) -> &MarkupGrammar {
        &self.grammar
    }

    fn passes(&self) -> PassSet {
        self.passes
    }
}

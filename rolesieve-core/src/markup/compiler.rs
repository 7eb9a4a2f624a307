//! compiler.rs - Builds and caches the patterns for a markup grammar.
//!
//! Directive names are escaped before being spliced into patterns, so any
//! grammar that passes validation compiles. Compiled sets are cached in a
//! process-wide map keyed by the grammar's hash.
//!
//! License: MIT OR APACHE 2.0

use lazy_static::lazy_static;
use log::debug;
use regex::{Regex, RegexBuilder};
use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, RwLock};

use crate::config::MarkupGrammar;
use crate::errors::RoleSieveError;

/// The patterns recognizing every marker of one grammar.
#[derive(Debug)]
pub struct CompiledMarkup {
    /// `\begin{region}{roles}`, roles in group 1.
    pub block_start: Regex,
    /// `\end{region}`.
    pub block_end: Regex,
    /// `\region{roles}{`, up to and including the body's opening brace.
    pub inline_start: Regex,
    /// `\region{roles}{content}` with a brace-free body; cleanup only.
    pub inline_leftover: Regex,
    /// `\exclude{...}`.
    pub exclude_line: Regex,
    /// `\begin{exclude}`.
    pub exclude_start: Regex,
    /// `\end{exclude}`.
    pub exclude_end: Regex,
    /// One pattern per wrapper environment, matching it when it holds only
    /// whitespace and `%` comments.
    pub empty_wrappers: Vec<(String, Regex)>,
}

lazy_static! {
    static ref COMPILED_MARKUP_CACHE: RwLock<HashMap<u64, Arc<CompiledMarkup>>> =
        RwLock::new(HashMap::new());
}

fn hash_grammar(grammar: &MarkupGrammar) -> u64 {
    let mut hasher = DefaultHasher::new();
    grammar.hash(&mut hasher);
    hasher.finish()
}

fn build(name: &str, pattern: String) -> Result<Regex, RoleSieveError> {
    RegexBuilder::new(&pattern)
        .size_limit(1 << 20)
        .build()
        .map_err(|e| RoleSieveError::PatternCompilation(name.to_string(), e))
}

/// Compiles every pattern of `grammar`.
pub fn compile_markup(grammar: &MarkupGrammar) -> Result<CompiledMarkup, RoleSieveError> {
    grammar.validate()?;
    let region = regex::escape(&grammar.region);
    let exclude = regex::escape(&grammar.exclude);

    let mut empty_wrappers = Vec::with_capacity(grammar.wrappers.len());
    for wrapper in &grammar.wrappers {
        let name = regex::escape(wrapper);
        let pattern = format!(r"\\begin\{{{name}\}}(?:\s|%[^\n]*)*\\end\{{{name}\}}");
        empty_wrappers.push((wrapper.clone(), build(wrapper, pattern)?));
    }

    let compiled = CompiledMarkup {
        block_start: build("block_start", format!(r"\\begin\{{{region}\}}\{{([^}}]*)\}}"))?,
        block_end: build("block_end", format!(r"\\end\{{{region}\}}"))?,
        inline_start: build("inline_start", format!(r"\\{region}\{{([^}}]*)\}}\{{"))?,
        inline_leftover: build(
            "inline_leftover",
            format!(r"\\{region}\{{[^}}]*\}}\{{[^}}]*\}}"),
        )?,
        exclude_line: build("exclude_line", format!(r"\\{exclude}\{{[^}}]*\}}"))?,
        exclude_start: build("exclude_start", format!(r"\\begin\{{{exclude}\}}"))?,
        exclude_end: build("exclude_end", format!(r"\\end\{{{exclude}\}}"))?,
        empty_wrappers,
    };

    debug!(
        target: "rolesieve_core::markup",
        "Compiled markup for region '{}', exclude '{}' and {} wrapper(s).",
        grammar.region,
        grammar.exclude,
        grammar.wrappers.len()
    );
    Ok(compiled)
}

/// Returns the compiled patterns for `grammar`, compiling them on first use.
pub fn get_or_compile_markup(grammar: &MarkupGrammar) -> Result<Arc<CompiledMarkup>, RoleSieveError> {
    let cache_key = hash_grammar(grammar);

    {
        let cache = COMPILED_MARKUP_CACHE.read().unwrap_or_else(|e| e.into_inner());
        if let Some(markup) = cache.get(&cache_key) {
            debug!("Serving compiled markup from cache for key: {}", cache_key);
            return Ok(Arc::clone(markup));
        }
    }

    let compiled = Arc::new(compile_markup(grammar)?);
    COMPILED_MARKUP_CACHE
        .write()
        .unwrap_or_else(|e| e.into_inner())
        .insert(cache_key, Arc::clone(&compiled));
    Ok(compiled)
}

// rolesieve-core/src/lib.rs
//! # rolesieve Core Library
//!
//! `rolesieve-core` provides the platform-independent logic for filtering
//! role-scoped document sources. Given a document annotated with conditional
//! markup and a role, it removes everything that does not apply to that role
//! and reassembles valid text.
//!
//! The library is pure and stateless: it transforms strings and never touches
//! the filesystem, apart from loading an optional YAML configuration.
//!
//! ## Markup
//!
//! With the default grammar:
//!
//! * `\begin{rolecontent}{qr, tech}` ... `\end{rolecontent}`: block region.
//! * `\rolecontent{qr}{text}`: inline region; the body may contain balanced braces.
//! * `\exclude{...}`: the whole line is dropped for every role.
//! * `\begin{exclude}` ... `\end{exclude}`: the block is dropped for every role.
//! * `\begin{highlights}` ... `\end{highlights}`: removed when filtering leaves it empty.
//!
//! An empty role list (`{}`) applies to every role.
//!
//! ## Modules
//!
//! * `roles`: `RoleSet` parsing and the `include` policy.
//! * `config`: `MarkupGrammar` and `BuildConfig`, with embedded YAML defaults.
//! * `markup`: pattern compilation and the brace-depth scanner.
//! * `passes`: the inline, block and cleanup passes, and `PassSet`.
//! * `engine`: the `FilterEngine` trait and `FilterContext`.
//! * `engines`: concrete engines, currently `MarkupEngine`.
//! * `summary`: `FilterSummary` counters.
//! * `headless`: one-shot filtering helper.
//! * `errors`: `RoleSieveError`.
//!
//! ## Usage Example
//!
//! ```rust
//! use rolesieve_core::{FilterContext, FilterEngine, MarkupEngine, MarkupGrammar};
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     let engine = MarkupEngine::new(MarkupGrammar::default())?;
//!     let source = "\\rolecontent{qr,qd}{Led a team of 5}\nAlways here";
//!
//!     let (for_qr, _) = engine.filter(source, &FilterContext::new("qr"));
//!     assert_eq!(for_qr, "Led a team of 5\nAlways here");
//!
//!     let (for_tech, summary) = engine.filter(source, &FilterContext::new("tech"));
//!     assert_eq!(for_tech, "Always here");
//!     assert_eq!(summary.inline_dropped, 1);
//!     Ok(())
//! }
//! ```
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod config;
pub mod engine;
pub mod engines;
pub mod errors;
pub mod headless;
pub mod markup;
pub mod passes;
pub mod roles;
pub mod summary;

/// Re-exports the configuration types.
pub use config::{merge_cli_overrides, BuildConfig, MarkupGrammar, MAX_DIRECTIVE_LENGTH};

/// Re-exports the custom error type for clear error reporting.
pub use errors::RoleSieveError;

/// Re-exports the engine trait, its context and the concrete engine.
pub use engine::{FilterContext, FilterEngine};
pub use engines::markup_engine::MarkupEngine;

pub use passes::PassSet;
pub use roles::{include, RoleSet};
pub use summary::FilterSummary;

/// Re-exports the one-shot helper.
pub use headless::headless_filter_string;

pub use markup::compiler::{compile_markup, get_or_compile_markup, CompiledMarkup};

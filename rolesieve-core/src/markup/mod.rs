//! Markup recognition for the rolesieve engine.
//!
//! `compiler` turns a [`MarkupGrammar`](crate::config::MarkupGrammar) into the
//! set of patterns used to spot markers, and `scanner` locates inline region
//! bodies with an explicit brace-depth count, since balanced braces inside a
//! body cannot be matched by a regular expression.

pub mod compiler;
pub mod scanner;

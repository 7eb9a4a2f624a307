// rolesieve-core/src/engines/mod.rs
//! Concrete implementations of the `FilterEngine` trait.
//!
//! `markup_engine` chains the passes of [`crate::passes`] over a compiled
//! grammar. A new engine (for instance one targeting a different document
//! format) goes in its own file and is declared here.

pub mod markup_engine;

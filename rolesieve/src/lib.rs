// rolesieve/src/lib.rs
//! # rolesieve CLI Application
//!
//! This crate provides the command-line front end for `rolesieve-core`: the
//! argument surface, logger setup, the per-role build driver and console
//! output.

pub mod cli;
pub mod commands;
pub mod logger;
pub mod ui;

pub use commands::build::{run_build, BuildOptions, RoleReport};

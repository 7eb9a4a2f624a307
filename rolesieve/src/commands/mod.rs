//! Command implementations for the rolesieve CLI.

pub mod build;

// rolesieve/src/logger.rs
//! Logger setup for the rolesieve binary.
//!
//! Messages go to stderr as `[LEVEL target] message`. `RUST_LOG` is honored
//! unless an explicit level is passed.

use env_logger::{Builder, Env};
use log::LevelFilter;
use std::io::Write;

/// Initializes the global logger. Safe to call more than once; later calls are ignored.
pub fn init_logger(level: Option<LevelFilter>) {
    let mut builder = Builder::from_env(Env::default().default_filter_or("info"));
    if let Some(level) = level {
        builder.filter_level(level);
    }
    builder.format(|buf, record| {
        writeln!(buf, "[{} {}] {}", record.level(), record.target(), record.args())
    });
    let _ = builder.try_init();
}

/// Maps the `--quiet` / `--debug` flags to an explicit level.
pub fn level_for(quiet: bool, debug: bool) -> Option<LevelFilter> {
    if quiet {
        Some(LevelFilter::Off)
    } else if debug {
        Some(LevelFilter::Debug)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_wins_over_debug() {
        assert_eq!(level_for(true, true), Some(LevelFilter::Off));
        assert_eq!(level_for(false, true), Some(LevelFilter::Debug));
        assert_eq!(level_for(false, false), None);
    }
}

//! Logging setup for the command line tool.
//!
//! Library code only emits `tracing` events; installing a subscriber is left
//! to the binary. `RUST_LOG` overrides the level picked from the verbosity.

use std::io;
use tracing_subscriber::EnvFilter;

fn level(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install a global fmt subscriber writing to stderr, keeping stdout free for
/// shape output.
pub fn init_logging(verbosity: u8) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level(verbosity)));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_levels() {
        assert_eq!(level(0), "warn");
        assert_eq!(level(2), "debug");
        assert_eq!(level(9), "trace");
    }
}

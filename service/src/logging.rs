//! Logging setup for the command-line tool

use tracing::Level;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

/// Level used when neither flag nor `RUST_LOG` says otherwise
#[must_use]
pub fn default_level(verbose: bool, quiet: bool) -> Level {
    if quiet {
        Level::ERROR
    } else if verbose {
        Level::DEBUG
    } else {
        Level::WARN
    }
}

/// Install the global subscriber, writing to stderr.
///
/// `RUST_LOG` takes precedence over the flags. Calling this more than once
/// keeps the first subscriber.
pub fn init_logging(verbose: bool, quiet: bool) {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(default_level(verbose, quiet)).into())
        .from_env_lossy();

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_levels() {
        assert_eq!(default_level(false, false), Level::WARN);
        assert_eq!(default_level(true, false), Level::DEBUG);
        assert_eq!(default_level(false, true), Level::ERROR);
        assert_eq!(default_level(true, true), Level::ERROR);
    }
}

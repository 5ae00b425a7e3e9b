use std::str::FromStr;
use tracing::Level;

// parses a configured level name, anything unrecognized falls back to WARN
pub fn parse_level(level: &str) -> Level {
    Level::from_str(level.trim()).unwrap_or(Level::WARN)
}

pub fn setup_tracing(level: &str) {
    tracing_subscriber::fmt()
        .with_max_level(parse_level(level))
        // disable printing the name of the module in every log line.
        .with_target(false)
        // the menu owns stdout, so logs go to stderr.
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .without_time()
        .json()
        .init();
}

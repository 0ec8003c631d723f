//! Logging to the terminal

use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

/// Used when `RUST_LOG` is unset or unparsable
const DEFAULT_FILTER: &str = "warden=info";

pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    // Only print colors when printing to a terminal
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(std::io::stdout().is_terminal())
        .with_target(false)
        .init();
}

/// Something happened on the chat platform
#[macro_export]
macro_rules! log_event {
    // Case: Only format string, no arguments
    ($fmtstr:literal) => {{
        ::tracing::info!(kind = "event", $fmtstr)
    }};

    // Case: Format string with arguments, with optional trailing comma
    ($fmtstr:literal, $($args:expr),* $(,)?) => {{
        ::tracing::info!(kind = "event", $fmtstr, $($args),*)
    }};
}

/// Something happened inside the bot itself
#[macro_export]
macro_rules! log_internal {
    // Case: Only format string, no arguments
    ($fmtstr:literal) => {{
        ::tracing::info!(kind = "internal", $fmtstr)
    }};

    // Case: Format string with arguments, with optional trailing comma
    ($fmtstr:literal, $($args:expr),* $(,)?) => {{
        ::tracing::info!(kind = "internal", $fmtstr, $($args),*)
    }};
}

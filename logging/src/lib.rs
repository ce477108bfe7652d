pub mod style;

use style::{LogStyle, TextColoring, log_style_from_env};
use tracing_subscriber::EnvFilter;

const LOG_STYLE_ENV_VAR: &str = "LOG_STYLE";
const DEFAULT_LOG_LEVEL: &str = "info";

/// Initializes the global tracing subscriber. Log level comes from `RUST_LOG`
/// and output style from `LOG_STYLE` (text, text-colored, text-uncolored or
/// json). Unrecognized styles fall back to plain text.
pub fn init_logging() {
    let style = log_style_from_env(LOG_STYLE_ENV_VAR).unwrap_or_else(|e| {
        eprintln!("Falling back to default log style: {e}");
        None
    });

    let make_filter = || {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL))
    };

    let init_result = match style.unwrap_or(LogStyle::Text(TextColoring::Auto)) {
        LogStyle::Json => tracing_subscriber::fmt()
            .with_env_filter(make_filter())
            .json()
            .try_init(),
        LogStyle::Text(TextColoring::Auto) => tracing_subscriber::fmt()
            .with_env_filter(make_filter())
            .try_init(),
        LogStyle::Text(TextColoring::On) => tracing_subscriber::fmt()
            .with_env_filter(make_filter())
            .with_ansi(true)
            .try_init(),
        LogStyle::Text(TextColoring::Off) => tracing_subscriber::fmt()
            .with_env_filter(make_filter())
            .with_ansi(false)
            .try_init(),
    };

    // Tests may initialize logging more than once; only the first one wins.
    if let Err(e) = init_result {
        tracing::debug!("Logging initialization skipped: {e}");
    }
}

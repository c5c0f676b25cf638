pub(crate) const DEFAULT_LOG_LEVEL: tracing::Level = tracing::Level::INFO;

/// Picks the logging level from `-v` and the raw `LOG_LEVEL` environment
/// value. `-v` wins over `LOG_LEVEL`.
///
/// An unrecognized `LOG_LEVEL` falls back to [`DEFAULT_LOG_LEVEL`] and comes
/// back with a warning to log once a subscriber is installed.
pub(crate) fn select_log_level(
    verbose: bool,
    env_val: Option<&str>,
) -> (tracing::Level, Option<String>) {
    if verbose {
        return (tracing::Level::DEBUG, None);
    }

    let Some(env_val) = env_val.map(str::trim) else {
        return (DEFAULT_LOG_LEVEL, None);
    };

    match env_val.to_ascii_lowercase().as_str() {
        "trace" => (tracing::Level::TRACE, None),
        "debug" | "verbose" => (tracing::Level::DEBUG, None),
        "info" => (tracing::Level::INFO, None),
        "warn" => (tracing::Level::WARN, None),
        "error" => (tracing::Level::ERROR, None),
        _ => (
            DEFAULT_LOG_LEVEL,
            Some(format!(
                "Invalid `LOG_LEVEL` environment variable value: `{env_val}`",
            )),
        ),
    }
}

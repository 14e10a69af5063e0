/// Initialize tracing/logging for the application.
///
/// The effective level is taken from the `LOG_LEVEL` environment variable
/// when set (a `.env` file is honored, loaded in `main`), falling back to
/// `default_level`.
pub fn init(default_level: &str) {
    let configured = std::env::var("LOG_LEVEL").unwrap_or_else(|_| default_level.to_string());

    let lvl = match configured.to_lowercase().as_str() {
        "error" => tracing::Level::ERROR,
        "warn" | "warning" => tracing::Level::WARN,
        "debug" => tracing::Level::DEBUG,
        "trace" => tracing::Level::TRACE,
        _ => tracing::Level::INFO,
    };

    // Use try_init so tests and libraries can call this multiple times without panicking
    let _ = tracing_subscriber::fmt()
        .with_max_level(lvl)
        .with_target(false)
        .try_init();
}

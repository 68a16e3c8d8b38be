use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Logs go to stderr; stdout is reserved for `--stdout` page output.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false).compact())
        .init();
}

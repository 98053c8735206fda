use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Logs to stdout. `RUST_LOG` overrides the default `quiz_csv=info` filter.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("quiz_csv=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stdout),
        )
        .init();
}

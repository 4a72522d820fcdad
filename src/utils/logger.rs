use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter directive for the given settings. `log_level` comes from the
/// TOML config and only applies when `--verbose` is off.
pub fn default_directive(verbose: bool, log_level: Option<&str>) -> String {
    if verbose {
        "movie_count=debug,info".to_string()
    } else {
        match log_level {
            Some(level) => format!("movie_count={}", level),
            None => "movie_count=warn".to_string(),
        }
    }
}

// stdout carries only the count line, so every log event goes to stderr.
pub fn init_cli_logger(verbose: bool, log_level: Option<&str>) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose, log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}

use tracing_subscriber::EnvFilter;

/// Install the global subscriber. Logs go to stderr; stdout is the row.
///
/// `RUST_LOG` wins when set, otherwise verbosity picks the level.
pub fn setup_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

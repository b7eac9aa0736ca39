use tracing_subscriber::EnvFilter;

/// Install the stderr logger. Stdout is reserved for exercise output.
///
/// `RUST_LOG` decides the filter unless `verbose` is set, which forces debug
/// output for this crate.
pub fn init(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("warn,visual_nuts=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into())
    };

    // A second call (e.g. from tests) keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

//! Subscriber setup for the CLI.

use tracing_subscriber::EnvFilter;

/// Install the global subscriber. `RUST_LOG` wins over the flag-derived level.
/// Logs go to stderr so stdout stays the match transcript.
pub fn init_tracing(verbose: bool, show_output: bool, json: bool) {
    let default = if verbose {
        "debug"
    } else if show_output {
        "info"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

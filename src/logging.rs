//! Tracing subscriber setup. Logs go to stderr so stdout stays clean for
//! results (`calc --json` output is meant to be piped).

use tracing_subscriber::EnvFilter;

/// `RUST_LOG` wins; otherwise `warn`, or `debug` for this crate with `--verbose`.
pub fn init(verbose: bool) {
    let fallback = if verbose { "warn,rworkhours=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    // A second init (tests calling run() twice) is harmless.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

//! Diagnostic tracing for the CLI.
//!
//! Command output goes to stdout through `println!`; tracing events go to
//! stderr so `adr list --json` stays machine-readable.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the tracing subscriber.
///
/// `RUST_LOG` wins when set. Otherwise the level is `warn`, or `debug`
/// for this crate when `verbose` is true.
///
/// ```bash
/// RUST_LOG=docula=debug docula adr list
/// ```
pub fn init(verbose: bool) {
    let default = if verbose { "warn,docula=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    // A second init (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .try_init();
}

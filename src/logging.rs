//! Console logging setup.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Default filter directive: fetch URLs and recovered failures, plus
/// per-manager detail when `verbose`.
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "fpl_mini_league=debug"
    } else {
        "fpl_mini_league=info"
    }
}

/// Install a stderr fmt subscriber. `RUST_LOG` takes precedence over the default.
///
/// Calling this twice is harmless; the second install is ignored.
pub fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let _ = tracing_subscriber::registry()
        .with(
            fmt::Layer::new()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_filter(filter),
        )
        .try_init();
}

//! Log output setup.

use tracing_subscriber::EnvFilter;

/// Environment variable that overrides the verbosity flags.
pub const LOG_ENV: &str = "HTML2VECTY_LOG";

/// Installs a stderr subscriber.
///
/// `HTML2VECTY_LOG` takes `RUST_LOG` style directives. Without it the level
/// follows the number of `-v` flags, starting at `warn`.
pub fn init(verbose: u8) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    // A subscriber may already be installed when embedded in tests.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}

fn default_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

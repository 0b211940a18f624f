pub mod cli;
pub mod command;
pub mod dispatch;

pub use cli::Cli;
pub use command::{Command, ParseError};
pub use dispatch::execute;

use tracing_subscriber::EnvFilter;

/// Builds the default log filter for the given `-v` count, honoring
/// `RUST_LOG` when set.
pub fn default_filter(verbose: u8) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        };
        EnvFilter::new(level)
    })
}

/// Initializes the global tracing subscriber, writing exclusively to
/// stderr so stdout stays reserved for protocol output lines.
pub fn init_tracing(verbose: u8) {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(default_filter(verbose))
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

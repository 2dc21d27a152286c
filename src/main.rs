use jutrack::commands::Cli;
use jutrack::libs::messages::macros::is_debug_mode;
use jutrack::msg_error;
use std::process::ExitCode;
use tracing_subscriber::{fmt, EnvFilter};

/// Sends `tracing` output to stderr. Filtered by `RUST_LOG`, defaulting to
/// `debug` when `JUTRACK_DEBUG` is set and `warn` otherwise.
fn init_tracing() {
    let default_level = if is_debug_mode() { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    fmt().with_env_filter(filter).with_writer(std::io::stderr).with_target(false).init();
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    match Cli::menu().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            msg_error!(format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}

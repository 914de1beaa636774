pub mod auth;
pub mod commands;
pub mod config;
pub mod console;
pub mod core_state; // Session context: login flag + record store
pub mod models;
pub mod store;

use tracing_subscriber::EnvFilter;

use crate::console::Console;
use crate::core_state::CoreState;

pub fn run() {
    // Initialize tracing. Stderr keeps the console screens readable.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let state = CoreState::new();
    let stdin = std::io::stdin();
    let mut console = Console::new(&state, stdin.lock(), std::io::stdout());
    if let Err(e) = console.run() {
        tracing::error!(error = %e, "Console terminated");
    }

    // No persistence: every record goes with the process.
    state.reset();
    tracing::info!("{} stopped", config::APP_NAME);
}

use todo_cli::commands::Cli;
use todo_cli::libs::messages::macros::is_debug_mode;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Diagnostics are only wanted with TODO_DEBUG or RUST_LOG set
    if is_debug_mode() {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "todo_cli=debug".into()))
            .with_target(false)
            .init();
    }

    Cli::menu()
}

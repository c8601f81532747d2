use std::io::IsTerminal;

/// `env_filter` uses the `tracing_subscriber::EnvFilter` directive syntax,
/// e.g. `info,codex_title_contracts=debug`.
pub fn initialize(env_filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_ansi(std::io::stdout().is_terminal())
        .init();
}

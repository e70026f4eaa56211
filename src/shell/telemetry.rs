use tracing_subscriber::{EnvFilter, fmt};

/// `RUST_LOG` wins; otherwise debug in dev and info everywhere else.
pub fn env_filter(env: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = if env == "dev" { "debug" } else { "info" };
        EnvFilter::new(level)
    })
}

pub fn init_tracing(env: &str) {
    if let Err(err) = fmt().with_env_filter(env_filter(env)).try_init() {
        eprintln!("tracing already initialised: {err}");
    }
}

/// Installs a global `tracing` subscriber for host binaries.
///
/// Filter comes from `RUST_LOG` (default: crate at debug); set
/// `LOG_FORMAT=json` for JSON output. Call at most once per process;
/// the library itself only emits events and never installs a subscriber.
pub fn init() {
    let env_filter =
        std::env::var("RUST_LOG").unwrap_or_else(|_| "userauth=debug".to_string());
    let json_logs = std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false);

    if json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }
}

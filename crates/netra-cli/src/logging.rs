use tracing_subscriber::EnvFilter;

/// Initialize stderr logging gated by `RUST_LOG`.
///
/// Stdout is reserved for report output so `--json` stays machine-parseable.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

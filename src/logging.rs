use std::panic;
use tracing_subscriber::EnvFilter;

/// Install the stderr subscriber. Stdout is reserved for the status line.
pub fn init() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Replace the default panic hook so panics are reported as a single log
/// event instead of a message and backtrace on stderr.
pub fn install_panic_hook() {
    panic::set_hook(Box::new(|info| {
        tracing::warn!(panic = %info, "panic contained");
    }));
}

//! Panic isolation for per-frame rendering.

use tracing::error;

/// Run a closure, catching any panic. Returns the closure result on success,
/// or `fallback` on panic. `scope` names the caller in the log line.
pub fn catch_or<T>(scope: &str, fallback: T, f: impl FnOnce() -> T) -> T {
    match std::panic::catch_unwind(std::panic::AssertUnwindSafe(f)) {
        Ok(val) => val,
        Err(payload) => {
            let message = payload
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unknown panic".to_string());
            error!(scope, %message, "caught panic in frame, recovered");
            fallback
        }
    }
}

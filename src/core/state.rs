//! Process-wide shutdown state.
//!
//! The first Ctrl+C cancels the global [`CancelToken`] so a running scan can
//! stop at the next directory boundary. A second Ctrl+C exits immediately.

use std::sync::LazyLock;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::CancelToken;

/// Token cancelled by the Ctrl+C handler
static SHUTDOWN: LazyLock<CancelToken> = LazyLock::new(CancelToken::new);

/// Number of Ctrl+C presses received
static INTERRUPTS: AtomicUsize = AtomicUsize::new(0);

/// Exit code used when the user interrupts twice (128 + SIGINT)
const EXIT_INTERRUPTED: i32 = 130;

/// Setup the global Ctrl+C handler. Call once at program start.
pub fn setup_shutdown_handler() -> anyhow::Result<()> {
    ctrlc::set_handler(|| {
        if INTERRUPTS.fetch_add(1, Ordering::SeqCst) > 0 {
            std::process::exit(EXIT_INTERRUPTED);
        }
        crate::log!("scan"; "interrupted, stopping...");
        SHUTDOWN.cancel();
    })
    .map_err(|e| anyhow::anyhow!("failed to set Ctrl+C handler: {}", e))
}

/// Token that is cancelled once shutdown has been requested.
pub fn shutdown_token() -> CancelToken {
    SHUTDOWN.clone()
}

/// Check if shutdown has been requested
pub fn is_shutdown() -> bool {
    SHUTDOWN.is_cancelled()
}

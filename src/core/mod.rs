//! Core types - pure abstractions shared across the codebase.

mod cancel;
mod state;

pub use cancel::CancelToken;
pub use state::{is_shutdown, setup_shutdown_handler, shutdown_token};

//! User-facing messages.
//!
//! All text shown to the user is defined once in [`Message`] and printed
//! through the `msg_*` macros, which route to `tracing` in debug mode.

pub mod display;
pub mod macros;
pub mod types;

pub use types::Message;

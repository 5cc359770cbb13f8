//! [`Command`] definition.

pub mod log_event;

/// [`Command`] of the [`Service`].
///
/// [`Service`]: crate::Service
pub use common::Handler as Command;

pub use self::log_event::LogEvent;

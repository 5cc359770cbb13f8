//! [`Analytics`] of user interactions.

use common::RowsPerPage;
use tracing as log;

#[cfg(doc)]
use crate::domain::Case;
use crate::read::case::list::StatusFilter;

/// Sink of user interaction [`Event`]s.
///
/// Logging an [`Event`] is fire-and-forget: it never fails and never blocks
/// the caller on delivery.
pub trait Analytics {
    /// Logs the provided [`Event`].
    fn log_event(&self, event: &Event);
}

/// User interaction worth tracking.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Event {
    /// [`StatusFilter`] of a [`Case`] list was changed.
    SetStatusFilter(StatusFilter),

    /// [`RowsPerPage`] of a [`Case`] list was changed.
    SetRowsPerPage(RowsPerPage),
}

impl Event {
    /// Returns the category of this [`Event`].
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self {
            Self::SetStatusFilter(_) | Self::SetRowsPerPage(_) => "cases list",
        }
    }

    /// Returns the action this [`Event`] describes.
    #[must_use]
    pub const fn action(&self) -> &'static str {
        match self {
            Self::SetStatusFilter(_) => "set filter",
            Self::SetRowsPerPage(_) => "set cases per page",
        }
    }

    /// Returns the textual label of this [`Event`], if any.
    #[must_use]
    pub const fn label(&self) -> Option<&'static str> {
        match self {
            Self::SetStatusFilter(filter) => Some(filter.as_str()),
            Self::SetRowsPerPage(_) => None,
        }
    }

    /// Returns the numeric value of this [`Event`], if any.
    #[must_use]
    pub const fn value(&self) -> Option<usize> {
        match self {
            Self::SetStatusFilter(_) => None,
            Self::SetRowsPerPage(rows) => Some(rows.get()),
        }
    }
}

/// [`Analytics`] emitting [`Event`]s as [`tracing`] events with the
/// `analytics` target.
#[derive(Clone, Copy, Debug, Default)]
pub struct Tracing;

impl Analytics for Tracing {
    fn log_event(&self, event: &Event) {
        log::info!(
            target: "analytics",
            category = event.category(),
            action = event.action(),
            label = event.label(),
            value = event.value(),
            "event",
        );
    }
}

/// [`Analytics`] discarding all the [`Event`]s.
#[derive(Clone, Copy, Debug, Default)]
pub struct Noop;

impl Analytics for Noop {
    fn log_event(&self, _: &Event) {}
}

//! [`Command`] for logging an analytics [`Event`].

use std::convert::Infallible;

use crate::{
    infra::{analytics::Event, Analytics},
    Service,
};

use super::Command;

/// [`Command`] for logging an analytics [`Event`].
///
/// Never fails: delivery problems are the [`Analytics`] sink's concern.
#[derive(Clone, Copy, Debug)]
pub struct LogEvent(pub Event);

impl<Bk, A> Command<LogEvent> for Service<Bk, A>
where
    A: Analytics,
{
    type Ok = ();
    type Err = Infallible;

    async fn execute(
        &self,
        LogEvent(event): LogEvent,
    ) -> Result<Self::Ok, Self::Err> {
        self.analytics().log_event(&event);
        Ok(())
    }
}

//! [`Handler`] abstractions.

use std::future::Future;

/// Executable handler.
///
/// Backends, queries and the service itself are all expressed as
/// [`Handler`]s of operation types (see [`crate::operations`]).
pub trait Handler<Args = ()> {
    /// Type of successful [`Handler`] result.
    type Ok;

    /// Type of this [`Handler`] error.
    type Err;

    /// Executes this [`Handler`] with the provided `args`.
    fn execute(
        &self,
        args: Args,
    ) -> impl Future<Output = Result<Self::Ok, Self::Err>>;
}

//! GraphQL API definitions.

pub mod case;
pub mod home;
mod query;

use juniper::{EmptyMutation, EmptySubscription};

use crate::Context;

pub use self::{case::Case, home::Home, query::Query};

/// GraphQL schema.
///
/// The API is read-only: there are no mutations and no subscriptions.
pub type Schema = juniper::RootNode<
    'static,
    Query,
    EmptyMutation<Context>,
    EmptySubscription<Context>,
>;

/// Creates a new [`Schema`].
#[must_use]
pub fn schema() -> Schema {
    Schema::new(Query, EmptyMutation::new(), EmptySubscription::new())
}

//! GraphQL [`Query`]s definitions.

use juniper::graphql_object;
use service::{
    command::LogEvent,
    query,
    read::case::list::{Mode, Paginator},
    Command as _, Query as _,
};

use crate::{api, AsError, Context, Error};

/// Root of all GraphQL queries.
#[derive(Clone, Copy, Debug)]
pub struct Query;

impl Query {
    /// Name of the [`tracing::Span`] for the queries.
    pub(crate) const SPAN_NAME: &'static str = "GraphQL query";
}

#[graphql_object(context = Context)]
impl Query {
    /// Returns the data shown on the home page.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `BACKEND_UNAVAILABLE` - the backend failed to provide any of the
    ///                           home page data.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "home",
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn home(ctx: &Context) -> Result<api::Home, Error> {
        ctx.service()
            .execute(query::HomePage)
            .await
            .map(Into::into)
            .map_err(AsError::into_error)
            .map_err(ctx.error())
    }

    /// Returns a page of the `Case` list filtered and paginated according
    /// to the provided selection, after applying the provided `action` to
    /// it.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `INVALID_ROWS_PER_PAGE` - the `rowsPerPage` is not allowed;
    /// - `INVALID_PAGE` - the `page` is not a positive integer;
    /// - `BACKEND_UNAVAILABLE` - the backend failed to provide `Case`s.
    #[tracing::instrument(
        skip_all,
        fields(
            action = ?action,
            gql.name = "cases",
            otel.name = Self::SPAN_NAME,
            page = ?page,
            rows_per_page = ?rows_per_page,
            status = ?status,
        ),
    )]
    pub async fn cases(
        status: Option<api::case::list::StatusFilter>,
        rows_per_page: Option<i32>,
        page: Option<i32>,
        action: Option<api::case::list::Action>,
        ctx: &Context,
    ) -> Result<api::case::list::Page, Error> {
        let params =
            api::case::list::params(status, rows_per_page, page, action)
                .map_err(ctx.error())?;
        let cases = ctx
            .service()
            .execute(query::cases::All)
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())?;

        let (state, action) = params.resolve();
        let mut list = Paginator::new(&cases, Mode::Filtered(state));
        if let Some(action) = action {
            let (applied, event) = list.apply(action);
            list = applied;
            if let Some(event) = event {
                ctx.service()
                    .execute(LogEvent(event))
                    .await
                    .unwrap_or_else(|e| match e {});
            }
        }

        Ok((&list).into())
    }
}

//! Query string parameters of the interactive [`Case`] list.
//!
//! The list [`State`] travels between requests in the query string, while
//! the submitted [`Trigger`] tells which control the user has interacted
//! with.
//!
//! [`Case`]: service::domain::Case

use common::{PageNumber, RowsPerPage};
use serde::Deserialize;
use service::read::case::list::{Action, State, StatusFilter};

/// Query string of the `/cases` page.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(default)]
pub struct ListParams {
    /// Selected [`StatusFilter`].
    pub status: StatusFilter,

    /// Selected [`RowsPerPage`].
    pub rows: RowsPerPage,

    /// Selected [`PageNumber`].
    pub page: PageNumber,

    /// Control the user has interacted with, if any.
    pub action: Option<Trigger>,
}

impl ListParams {
    /// Splits these [`ListParams`] into the [`State`] to start from and the
    /// [`Action`] to apply to it.
    #[must_use]
    pub fn resolve(self) -> (State, Option<Action>) {
        let Self {
            status,
            rows,
            page,
            action,
        } = self;

        let state = State {
            filter: status,
            rows_per_page: rows,
            page,
        };
        let action = action.map(|trigger| match trigger {
            Trigger::Filter => Action::SetStatusFilter(status),
            Trigger::Rows => Action::SetRowsPerPage(rows),
            Trigger::Page => Action::SetPage(page),
            Trigger::Next => Action::NextPage,
            Trigger::Prev => Action::PrevPage,
        });

        (state, action)
    }
}

impl From<State> for ListParams {
    fn from(state: State) -> Self {
        Self {
            status: state.filter,
            rows: state.rows_per_page,
            page: state.page,
            action: None,
        }
    }
}

/// Control of the [`Case`] list submitting the form.
///
/// [`Case`]: service::domain::Case
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Trigger {
    /// [`StatusFilter`] select.
    Filter,

    /// [`RowsPerPage`] select.
    Rows,

    /// Page selector.
    Page,

    /// "Next page" button.
    Next,

    /// "Previous page" button.
    Prev,
}

impl Trigger {
    /// Returns the value of this [`Trigger`] in a query string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Filter => "filter",
            Self::Rows => "rows",
            Self::Page => "page",
            Self::Next => "next",
            Self::Prev => "prev",
        }
    }
}

#[cfg(test)]
mod spec {
    use axum::extract::Query;
    use common::{PageNumber, RowsPerPage};
    use service::{
        domain::case::Status,
        read::case::list::{Action, State, StatusFilter},
    };

    use super::{ListParams, Trigger};

    fn parse(query: &str) -> ListParams {
        let uri = format!("/cases?{query}").parse::<http::Uri>().unwrap();
        Query::<ListParams>::try_from_uri(&uri).unwrap().0
    }

    #[test]
    fn defaults_to_first_page_of_all_cases() {
        let (state, action) = parse("").resolve();

        assert_eq!(state, State::default());
        assert_eq!(state.rows_per_page, RowsPerPage::Five);
        assert_eq!(state.page, PageNumber::FIRST);
        assert_eq!(action, None);
    }

    #[test]
    fn parses_full_query() {
        let params = parse("status=dead&rows=25&page=3&action=next");

        assert_eq!(params.status, StatusFilter::Only(Status::Dead));
        assert_eq!(params.rows, RowsPerPage::TwentyFive);
        assert_eq!(params.page.get(), 3);
        assert_eq!(params.action, Some(Trigger::Next));
    }

    #[test]
    fn resolves_trigger_into_action() {
        let params = parse("status=active&rows=10&page=2");

        for (trigger, expected) in [
            (
                Trigger::Filter,
                Action::SetStatusFilter(StatusFilter::Only(Status::Active)),
            ),
            (Trigger::Rows, Action::SetRowsPerPage(RowsPerPage::Ten)),
            (Trigger::Page, Action::SetPage(params.page)),
            (Trigger::Next, Action::NextPage),
            (Trigger::Prev, Action::PrevPage),
        ] {
            let (_, action) = ListParams {
                action: Some(trigger),
                ..params
            }
            .resolve();

            assert_eq!(action, Some(expected), "trigger: {}", trigger.as_str());
        }
    }

    #[test]
    fn rejects_invalid_values() {
        for query in [
            "rows=7",
            "page=0",
            "page=-1",
            "status=unknown",
            "action=jump",
        ] {
            let uri = format!("/cases?{query}").parse::<http::Uri>().unwrap();

            assert!(
                Query::<ListParams>::try_from_uri(&uri).is_err(),
                "`{query}` is accepted",
            );
        }
    }

    #[test]
    fn round_trips_state() {
        let state = State {
            filter: StatusFilter::Only(Status::Recovered),
            rows_per_page: RowsPerPage::Fifty,
            page: PageNumber::new(2).unwrap(),
        };

        let (resolved, action) = ListParams::from(state).resolve();

        assert_eq!(resolved, state);
        assert_eq!(action, None);
    }
}

//! [`Case`]-related definitions.

use common::DateTime;
use derive_more::{Display, From, Into};
use juniper::{graphql_object, GraphQLEnum, GraphQLScalar};
use service::domain;

use crate::Context;

/// An epidemiological case.
#[derive(Clone, Debug, From, Into)]
pub struct Case(domain::Case);

/// An epidemiological case.
#[graphql_object(context = Context)]
impl Case {
    /// Unique identifier of this `Case`.
    #[must_use]
    pub fn id(&self) -> Id {
        self.0.id.clone().into()
    }

    /// Status of this `Case`.
    #[must_use]
    pub fn status(&self) -> Status {
        self.0.status.into()
    }

    /// `DateTime` when this `Case` was detected.
    #[must_use]
    pub fn detected_at(&self) -> DateTime {
        self.0.detected_at.coerce()
    }

    /// Age of the person, if known.
    #[must_use]
    pub fn age(&self) -> Option<i32> {
        self.0.age.map(|age| i32::from(u16::from(age)))
    }

    /// Gender of the person.
    #[must_use]
    pub fn gender(&self) -> Gender {
        self.0.gender.into()
    }
}

/// Unique identifier of a `Case`.
#[derive(Clone, Debug, Display, From, GraphQLScalar, Into)]
#[from(domain::case::Id)]
#[into(domain::case::Id)]
#[graphql(name = "CaseId", transparent)]
pub struct Id(String);

/// Status of a `Case`.
#[derive(Clone, Copy, Debug, Eq, GraphQLEnum, PartialEq)]
#[graphql(name = "CaseStatus")]
pub enum Status {
    /// The person is still ill.
    Active,

    /// The person has recovered.
    Recovered,

    /// The person has died.
    Dead,
}

impl From<domain::case::Status> for Status {
    fn from(status: domain::case::Status) -> Self {
        use domain::case::Status as S;
        match status {
            S::Active => Self::Active,
            S::Recovered => Self::Recovered,
            S::Dead => Self::Dead,
        }
    }
}

impl From<Status> for domain::case::Status {
    fn from(status: Status) -> Self {
        match status {
            Status::Active => Self::Active,
            Status::Recovered => Self::Recovered,
            Status::Dead => Self::Dead,
        }
    }
}

/// Gender of a person a `Case` is about.
#[derive(Clone, Copy, Debug, Eq, GraphQLEnum, PartialEq)]
#[graphql(name = "CaseGender")]
pub enum Gender {
    /// Male.
    Male,

    /// Female.
    Female,
}

impl From<domain::case::Gender> for Gender {
    fn from(gender: domain::case::Gender) -> Self {
        use domain::case::Gender as G;
        match gender {
            G::Male => Self::Male,
            G::Female => Self::Female,
        }
    }
}

pub mod list {
    //! Definitions related to the interactive [`Case`] list.

    use common::{PageNumber, RowsPerPage};
    use derive_more::From;
    use juniper::{graphql_object, GraphQLEnum, GraphQLInputObject};
    use service::read::case::list as read;

    use super::{Case, Status};
    use crate::{
        define_error,
        params::{ListParams, Trigger},
        Context, Error,
    };

    /// Subset of `Case`s to display.
    #[derive(Clone, Copy, Debug, Default, Eq, GraphQLInputObject, PartialEq)]
    #[graphql(name = "CaseStatusFilter")]
    pub struct StatusFilter {
        /// `CaseStatus` to display the `Case`s of.
        ///
        /// All the `Case`s are displayed if omitted.
        pub status: Option<Status>,
    }

    impl From<StatusFilter> for read::StatusFilter {
        fn from(filter: StatusFilter) -> Self {
            filter
                .status
                .map_or(Self::All, |s| Self::Only(s.into()))
        }
    }

    /// Control of the `Case` list the user has interacted with.
    #[derive(Clone, Copy, Debug, Eq, GraphQLEnum, PartialEq)]
    #[graphql(name = "CaseListAction")]
    pub enum Action {
        /// Apply the provided `status` filter.
        Filter,

        /// Apply the provided `rowsPerPage`.
        Rows,

        /// Jump to the provided `page`.
        Page,

        /// Move to the next page.
        Next,

        /// Move to the previous page.
        Prev,
    }

    impl From<Action> for Trigger {
        fn from(action: Action) -> Self {
            match action {
                Action::Filter => Self::Filter,
                Action::Rows => Self::Rows,
                Action::Page => Self::Page,
                Action::Next => Self::Next,
                Action::Prev => Self::Prev,
            }
        }
    }

    /// Builds [`ListParams`] out of the raw GraphQL arguments.
    ///
    /// # Errors
    ///
    /// Errors if `rows_per_page` or `page` is not allowed.
    pub(crate) fn params(
        status: Option<StatusFilter>,
        rows_per_page: Option<i32>,
        page: Option<i32>,
        action: Option<Action>,
    ) -> Result<ListParams, Error> {
        let rows = rows_per_page
            .map(|n| {
                usize::try_from(n)
                    .ok()
                    .and_then(|n| RowsPerPage::try_from(n).ok())
                    .ok_or(ListError::InvalidRowsPerPage)
            })
            .transpose()?
            .unwrap_or_default();
        let page = page
            .map(|n| {
                usize::try_from(n)
                    .ok()
                    .and_then(PageNumber::new)
                    .ok_or(ListError::InvalidPage)
            })
            .transpose()?
            .unwrap_or_default();

        Ok(ListParams {
            status: status.map(Into::into).unwrap_or_default(),
            rows,
            page,
            action: action.map(Into::into),
        })
    }

    /// Selection made by a user viewing a `Case` list.
    #[derive(Clone, Copy, Debug, From)]
    pub struct State(read::State);

    /// Selection made by a user viewing a `Case` list.
    #[graphql_object(name = "CaseListState", context = Context)]
    impl State {
        /// Selected `CaseStatus`, or `null` if all the `Case`s are shown.
        #[must_use]
        pub fn status(&self) -> Option<Status> {
            match self.0.filter {
                read::StatusFilter::All => None,
                read::StatusFilter::Only(s) => Some(s.into()),
            }
        }

        /// Number of `Case`s shown on a single page.
        #[must_use]
        pub fn rows_per_page(&self) -> i32 {
            to_int(self.0.rows_per_page.get())
        }

        /// Number of the currently shown page, starting from 1.
        #[must_use]
        pub fn page(&self) -> i32 {
            to_int(self.0.page.get())
        }
    }

    /// Page of the filtered `Case` list.
    #[derive(Clone, Debug)]
    pub struct Page {
        /// [`State`] the page is shown in.
        pub(crate) state: read::State,

        /// `Case`s shown on the page.
        pub(crate) rows: Vec<Case>,

        /// Total number of pages.
        pub(crate) total_pages: usize,

        /// Indicator whether there is a page before the current one.
        pub(crate) has_previous_page: bool,

        /// Indicator whether there is a page after the current one.
        pub(crate) has_next_page: bool,
    }

    impl From<&read::Paginator<'_>> for Page {
        fn from(list: &read::Paginator<'_>) -> Self {
            Self {
                state: list.state().unwrap_or_default(),
                rows: list.rows().into_iter().cloned().map(Case).collect(),
                total_pages: list.total_pages(),
                has_previous_page: list.has_previous_page(),
                has_next_page: list.has_next_page(),
            }
        }
    }

    /// Page of the filtered `Case` list.
    #[graphql_object(name = "CaseListPage", context = Context)]
    impl Page {
        /// Selection the page is shown in.
        #[must_use]
        pub fn state(&self) -> State {
            State(self.state)
        }

        /// `Case`s shown on the page.
        #[must_use]
        pub fn rows(&self) -> Vec<Case> {
            self.rows.clone()
        }

        /// Total number of pages, `0` if no `Case` passes the filter.
        #[must_use]
        pub fn total_pages(&self) -> i32 {
            to_int(self.total_pages)
        }

        /// Numbers of all the pages to choose from.
        #[must_use]
        pub fn pages(&self) -> Vec<i32> {
            (1..=self.total_pages).map(to_int).collect()
        }

        /// Indicator whether there is a page before the current one.
        #[must_use]
        pub fn has_previous_page(&self) -> bool {
            self.has_previous_page
        }

        /// Indicator whether there is a page after the current one.
        #[must_use]
        pub fn has_next_page(&self) -> bool {
            self.has_next_page
        }
    }

    /// Converts the provided count into a GraphQL `Int`, saturating on
    /// overflow.
    fn to_int(n: usize) -> i32 {
        i32::try_from(n).unwrap_or(i32::MAX)
    }

    define_error! {
        enum ListError {
            #[code = "INVALID_ROWS_PER_PAGE"]
            #[status = BAD_REQUEST]
            #[message = "`rowsPerPage` must be one of 5, 10, 25, 50 or 100"]
            InvalidRowsPerPage,

            #[code = "INVALID_PAGE"]
            #[status = BAD_REQUEST]
            #[message = "`page` must be a positive integer"]
            InvalidPage,
        }
    }

    #[cfg(test)]
    mod spec {
        use common::{PageNumber, RowsPerPage};
        use service::{domain::case, read::case::list as read};

        use super::{params, Action, StatusFilter};
        use crate::{api::case::Status, params::Trigger};

        #[test]
        fn defaults_missing_arguments() {
            let params = params(None, None, None, None).unwrap();

            assert_eq!(params.status, read::StatusFilter::All);
            assert_eq!(params.rows, RowsPerPage::Five);
            assert_eq!(params.page, PageNumber::FIRST);
            assert_eq!(params.action, None);
        }

        #[test]
        fn converts_arguments() {
            let params = params(
                Some(StatusFilter {
                    status: Some(Status::Dead),
                }),
                Some(50),
                Some(3),
                Some(Action::Next),
            )
            .unwrap();

            assert_eq!(params.status, read::StatusFilter::Only(case::Status::Dead));
            assert_eq!(params.rows, RowsPerPage::Fifty);
            assert_eq!(params.page.get(), 3);
            assert_eq!(params.action, Some(Trigger::Next));
        }

        #[test]
        fn rejects_invalid_arguments() {
            for (rows, page) in [
                (Some(7), None),
                (Some(-5), None),
                (None, Some(0)),
                (None, Some(-1)),
            ] {
                let err = params(None, rows, page, None).unwrap_err();

                assert_eq!(err.status_code, http::StatusCode::BAD_REQUEST);
            }
        }
    }
}

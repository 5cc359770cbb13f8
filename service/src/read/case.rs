//! [`Case`]-related read definitions.

use crate::domain::{case, Case};

use self::list::StatusFilter;

/// Aggregate numbers of [`Case`]s.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Stats {
    /// Total number of [`Case`]s.
    pub total: usize,

    /// Number of [`case::Status::Active`] [`Case`]s.
    pub active: usize,

    /// Number of [`case::Status::Recovered`] [`Case`]s.
    pub recovered: usize,

    /// Number of [`case::Status::Dead`] [`Case`]s.
    pub dead: usize,
}

impl Stats {
    /// Counts the provided [`Case`]s by their [`case::Status`].
    #[must_use]
    pub fn of(cases: &[Case]) -> Self {
        let count = |status| {
            list::filter(cases, StatusFilter::Only(status)).count()
        };
        Self {
            total: cases.len(),
            active: count(case::Status::Active),
            recovered: count(case::Status::Recovered),
            dead: count(case::Status::Dead),
        }
    }
}

pub mod list {
    //! [`Case`] list definitions.
    //!
    //! The list is fetched from the backend once, and then filtered and
    //! paginated in memory according to the [`State`] chosen by the user.

    use std::{fmt, str::FromStr};

    use common::{
        define_kind,
        pagination::{self, PageNumber, RowsPerPage},
    };
    use derive_more::{Display, Error};
    use serde::{Deserialize, Serialize};

    #[cfg(doc)]
    use crate::infra::Analytics;
    use crate::{
        domain::{case, Case},
        infra::analytics::Event,
    };

    /// Selector of [`Case`]s to fetch from the backend.
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
    pub struct Selector {
        /// Maximum number of [`Case`]s to fetch, if limited.
        pub first: Option<usize>,

        /// [`OrderBy`] of the fetched [`Case`]s, if any.
        ///
        /// Backend's default order is used when [`None`].
        pub order_by: Option<OrderBy>,
    }

    define_kind! {
        #[doc = "Order of a fetched [`Case`] list."]
        #[derive(Deserialize, Serialize)]
        enum OrderBy {
            #[doc = "Oldest detected [`Case`]s first."]
            #[serde(rename = "detected_ASC")]
            DetectedAsc = "detected_ASC",

            #[doc = "Most recently detected [`Case`]s first."]
            #[serde(rename = "detected_DESC")]
            DetectedDesc = "detected_DESC",
        }
    }

    /// Subset of [`Case`]s to display.
    #[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
    pub enum StatusFilter {
        /// All the [`Case`]s regardless of their [`case::Status`].
        #[default]
        All,

        /// Only the [`Case`]s having the specified [`case::Status`].
        Only(case::Status),
    }

    impl StatusFilter {
        /// All the possible [`StatusFilter`]s, starting with
        /// [`StatusFilter::All`].
        pub const ALL: [Self; 4] = [
            Self::All,
            Self::Only(case::Status::Active),
            Self::Only(case::Status::Recovered),
            Self::Only(case::Status::Dead),
        ];

        /// Checks whether the provided [`Case`] passes this [`StatusFilter`].
        #[must_use]
        pub fn matches(self, case: &Case) -> bool {
            match self {
                Self::All => true,
                Self::Only(status) => case.status == status,
            }
        }

        /// Returns the name of this [`StatusFilter`].
        #[must_use]
        pub const fn as_str(self) -> &'static str {
            match self {
                Self::All => "all",
                Self::Only(status) => status.as_str(),
            }
        }
    }

    impl fmt::Display for StatusFilter {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(self.as_str())
        }
    }

    impl FromStr for StatusFilter {
        type Err = UnknownStatusFilter;

        fn from_str(s: &str) -> Result<Self, Self::Err> {
            if s == Self::All.as_str() {
                return Ok(Self::All);
            }
            s.parse()
                .map(Self::Only)
                .map_err(|_| UnknownStatusFilter(s.to_owned()))
        }
    }

    impl<'de> Deserialize<'de> for StatusFilter {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            String::deserialize(deserializer)?
                .parse()
                .map_err(serde::de::Error::custom)
        }
    }

    impl Serialize for StatusFilter {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            serializer.serialize_str(self.as_str())
        }
    }

    /// Error of parsing an unknown [`StatusFilter`].
    #[derive(Clone, Debug, Display, Error, Eq, PartialEq)]
    #[display("unknown status filter: `{_0}`")]
    pub struct UnknownStatusFilter(#[error(not(source))] pub String);

    /// Returns the [`Case`]s passing the provided [`StatusFilter`], in their
    /// original order.
    pub fn filter(
        cases: &[Case],
        filter: StatusFilter,
    ) -> impl Iterator<Item = &Case> {
        cases.iter().filter(move |c| filter.matches(c))
    }

    /// Selection made by a user viewing a [`Case`] list.
    #[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
    pub struct State {
        /// Selected [`StatusFilter`].
        pub filter: StatusFilter,

        /// Selected [`RowsPerPage`].
        pub rows_per_page: RowsPerPage,

        /// Currently shown [`PageNumber`].
        pub page: PageNumber,
    }

    impl State {
        /// Selects the provided [`StatusFilter`].
        ///
        /// The current page is left untouched.
        #[must_use]
        pub fn set_status_filter(self, filter: StatusFilter) -> (Self, Event) {
            (Self { filter, ..self }, Event::SetStatusFilter(filter))
        }

        /// Selects the provided [`RowsPerPage`] and returns to the first
        /// page.
        #[must_use]
        pub fn set_rows_per_page(self, rows_per_page: RowsPerPage) -> (Self, Event) {
            (
                Self {
                    rows_per_page,
                    page: PageNumber::FIRST,
                    ..self
                },
                Event::SetRowsPerPage(rows_per_page),
            )
        }

        /// Jumps to the provided `page` as is, without checking it against
        /// the total number of pages.
        #[must_use]
        pub fn set_page(self, page: PageNumber) -> Self {
            Self { page, ..self }
        }

        /// Moves to the next page, unless the current one is the last of
        /// `total_pages`.
        #[must_use]
        pub fn next_page(self, total_pages: usize) -> Self {
            Self {
                page: self.page.next(total_pages),
                ..self
            }
        }

        /// Moves to the previous page, unless the current one is the first.
        #[must_use]
        pub fn prev_page(self) -> Self {
            Self {
                page: self.page.prev(),
                ..self
            }
        }

        /// Applies the provided [`Action`] to this [`State`].
        ///
        /// Returns the [`Event`] to be reported to [`Analytics`], if the
        /// [`Action`] is a tracked one.
        #[must_use]
        pub fn reduce(
            self,
            action: Action,
            total_pages: usize,
        ) -> (Self, Option<Event>) {
            match action {
                Action::SetStatusFilter(filter) => {
                    let (state, ev) = self.set_status_filter(filter);
                    (state, Some(ev))
                }
                Action::SetRowsPerPage(rows) => {
                    let (state, ev) = self.set_rows_per_page(rows);
                    (state, Some(ev))
                }
                Action::SetPage(page) => (self.set_page(page), None),
                Action::NextPage => (self.next_page(total_pages), None),
                Action::PrevPage => (self.prev_page(), None),
            }
        }
    }

    /// User action changing a [`State`].
    #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
    pub enum Action {
        /// Select a [`StatusFilter`].
        SetStatusFilter(StatusFilter),

        /// Select [`RowsPerPage`].
        SetRowsPerPage(RowsPerPage),

        /// Jump to a page.
        SetPage(PageNumber),

        /// Move to the next page.
        NextPage,

        /// Move to the previous page.
        PrevPage,
    }

    /// Mode a [`Case`] list is shown in.
    #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
    pub enum Mode {
        /// User controls filtering and pagination with a [`State`].
        Filtered(State),

        /// All the [`Case`]s are shown at once, without any controls.
        DisplayOnly,
    }

    /// [`Case`] list derived from a [`Mode`].
    #[derive(Clone, Copy, Debug)]
    pub struct Paginator<'c> {
        /// All the [`Case`]s of the list.
        cases: &'c [Case],

        /// [`Mode`] the list is shown in.
        mode: Mode,
    }

    impl<'c> Paginator<'c> {
        /// Creates a new [`Paginator`] over the provided [`Case`]s.
        #[must_use]
        pub fn new(cases: &'c [Case], mode: Mode) -> Self {
            Self { cases, mode }
        }

        /// Returns the [`Mode`] of this [`Paginator`].
        #[must_use]
        pub fn mode(&self) -> Mode {
            self.mode
        }

        /// Returns the [`State`] of this [`Paginator`], if it's
        /// [`Mode::Filtered`].
        #[must_use]
        pub fn state(&self) -> Option<State> {
            match self.mode {
                Mode::Filtered(state) => Some(state),
                Mode::DisplayOnly => None,
            }
        }

        /// Applies the provided [`Action`].
        ///
        /// [`Mode::DisplayOnly`] ignores all the [`Action`]s.
        #[must_use]
        pub fn apply(self, action: Action) -> (Self, Option<Event>) {
            let Mode::Filtered(state) = self.mode else {
                return (self, None);
            };
            let (state, event) = state.reduce(action, self.total_pages());
            (Self::new(self.cases, Mode::Filtered(state)), event)
        }

        /// Returns the [`Case`]s passing the selected [`StatusFilter`].
        #[must_use]
        pub fn filtered(&self) -> Vec<&'c Case> {
            let status = self.state().map(|s| s.filter).unwrap_or_default();
            filter(self.cases, status).collect()
        }

        /// Returns the total number of pages of the filtered [`Case`]s.
        ///
        /// [`Mode::DisplayOnly`] always fits into a single page.
        #[must_use]
        pub fn total_pages(&self) -> usize {
            match self.mode {
                Mode::Filtered(state) => pagination::total_pages(
                    filter(self.cases, state.filter).count(),
                    state.rows_per_page,
                ),
                Mode::DisplayOnly => usize::from(!self.cases.is_empty()),
            }
        }

        /// Returns all the [`PageNumber`]s to choose from.
        pub fn pages(&self) -> impl Iterator<Item = PageNumber> {
            pagination::pages(self.total_pages())
        }

        /// Returns the [`Case`]s to be shown.
        #[must_use]
        pub fn rows(&self) -> Vec<&'c Case> {
            match self.mode {
                Mode::Filtered(state) => pagination::page_slice(
                    &self.filtered(),
                    state.page,
                    state.rows_per_page,
                )
                .to_vec(),
                Mode::DisplayOnly => self.cases.iter().collect(),
            }
        }

        /// Indicates whether there is a page before the current one.
        #[must_use]
        pub fn has_previous_page(&self) -> bool {
            self.state().is_some_and(|s| s.page != PageNumber::FIRST)
        }

        /// Indicates whether there is a page after the current one.
        #[must_use]
        pub fn has_next_page(&self) -> bool {
            self.state()
                .is_some_and(|s| s.page.get() != self.total_pages())
        }
    }

}

#[cfg(test)]
mod spec {
    use common::DateTime;

    use crate::domain::{case, Case};

    use super::Stats;

    #[test]
    fn counts_by_status() {
        use case::Status::{Active, Dead, Recovered};

        let cases = [Active, Dead, Active, Recovered, Active, Dead]
            .into_iter()
            .enumerate()
            .map(|(n, status)| Case {
                id: n.to_string().into(),
                status,
                detected_at: DateTime::UNIX_EPOCH.coerce(),
                age: Some(40.into()),
                gender: case::Gender::Male,
            })
            .collect::<Vec<_>>();

        assert_eq!(
            Stats::of(&cases),
            Stats {
                total: 6,
                active: 3,
                recovered: 1,
                dead: 2,
            },
        );
        assert_eq!(Stats::of(&[]), Stats::default());
    }
}

//! Abstractions for page-number pagination over in-memory lists.
//!
//! A list is split into pages of [`RowsPerPage`] items each, and a page is
//! addressed by its 1-based [`PageNumber`].

use std::{fmt, num::NonZeroUsize, str::FromStr};

use derive_more::{Display, Error};

/// Number of items shown on a single page.
///
/// Only a fixed set of sizes is allowed.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize, serde::Serialize),
    serde(try_from = "usize", into = "usize")
)]
#[repr(u8)]
pub enum RowsPerPage {
    /// 5 items per page.
    #[default]
    Five = 5,

    /// 10 items per page.
    Ten = 10,

    /// 25 items per page.
    TwentyFive = 25,

    /// 50 items per page.
    Fifty = 50,

    /// 100 items per page.
    OneHundred = 100,
}

impl RowsPerPage {
    /// All the allowed [`RowsPerPage`], in ascending order.
    pub const ALL: [Self; 5] = [
        Self::Five,
        Self::Ten,
        Self::TwentyFive,
        Self::Fifty,
        Self::OneHundred,
    ];

    /// Returns the number of items this [`RowsPerPage`] stands for.
    #[must_use]
    pub const fn get(self) -> usize {
        self as usize
    }
}

impl TryFrom<usize> for RowsPerPage {
    type Error = InvalidRowsPerPage;

    fn try_from(n: usize) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|rows| rows.get() == n)
            .ok_or(InvalidRowsPerPage(n))
    }
}

impl From<RowsPerPage> for usize {
    fn from(rows: RowsPerPage) -> Self {
        rows.get()
    }
}

impl fmt::Display for RowsPerPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

impl FromStr for RowsPerPage {
    type Err = InvalidRowsPerPage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<usize>()
            .map_err(|_| InvalidRowsPerPage(0))?
            .try_into()
    }
}

/// Error of converting a number into [`RowsPerPage`].
#[derive(Clone, Copy, Debug, Display, Error, Eq, PartialEq)]
#[display("`{_0}` is not an allowed number of rows per page")]
pub struct InvalidRowsPerPage(#[error(not(source))] pub usize);

/// 1-based number of a page.
#[derive(Clone, Copy, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize, serde::Serialize),
    serde(try_from = "usize", into = "usize")
)]
pub struct PageNumber(NonZeroUsize);

impl PageNumber {
    /// The first page.
    pub const FIRST: Self = Self(NonZeroUsize::MIN);

    /// Creates a new [`PageNumber`] out of the provided 1-based `n`.
    ///
    /// [`None`] is returned if `n` is `0`.
    #[must_use]
    pub const fn new(n: usize) -> Option<Self> {
        match NonZeroUsize::new(n) {
            Some(n) => Some(Self(n)),
            None => None,
        }
    }

    /// Returns the 1-based number of this page.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0.get()
    }

    /// Returns the [`PageNumber`] following this one, unless it exceeds the
    /// provided `last` page.
    ///
    /// [`PageNumber::FIRST`] is the lower bound even if `last` is `0`.
    #[must_use]
    pub fn next(self, last: usize) -> Self {
        Self::new(self.get().saturating_add(1).min(last)).unwrap_or(Self::FIRST)
    }

    /// Returns the [`PageNumber`] preceding this one, stopping at
    /// [`PageNumber::FIRST`].
    #[must_use]
    pub fn prev(self) -> Self {
        Self::new(self.get() - 1).unwrap_or(Self::FIRST)
    }

    /// Returns the index of the first item on this page.
    #[must_use]
    pub fn offset(self, rows: RowsPerPage) -> usize {
        (self.get() - 1).saturating_mul(rows.get())
    }
}

impl Default for PageNumber {
    fn default() -> Self {
        Self::FIRST
    }
}

impl TryFrom<usize> for PageNumber {
    type Error = InvalidPageNumber;

    fn try_from(n: usize) -> Result<Self, Self::Error> {
        Self::new(n).ok_or(InvalidPageNumber)
    }
}

impl From<PageNumber> for usize {
    fn from(page: PageNumber) -> Self {
        page.get()
    }
}

impl FromStr for PageNumber {
    type Err = InvalidPageNumber;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<usize>().map_err(|_| InvalidPageNumber)?.try_into()
    }
}

/// Error of converting a number into [`PageNumber`].
#[derive(Clone, Copy, Debug, Display, Error, Eq, PartialEq)]
#[display("page number must be a positive integer")]
pub struct InvalidPageNumber;

/// Returns the number of pages required to show `len` items.
///
/// An empty list has no pages at all.
#[must_use]
pub fn total_pages(len: usize, rows: RowsPerPage) -> usize {
    len.div_ceil(rows.get())
}

/// Returns the items shown on the provided `page`.
///
/// Out-of-range pages are not an error, but result in a shorter or an empty
/// slice.
#[must_use]
pub fn page_slice<T>(items: &[T], page: PageNumber, rows: RowsPerPage) -> &[T] {
    let start = page.offset(rows).min(items.len());
    let end = start.saturating_add(rows.get()).min(items.len());
    &items[start..end]
}

/// Returns all the [`PageNumber`]s of a list having `total` pages.
pub fn pages(total: usize) -> impl Iterator<Item = PageNumber> {
    (1..=total).filter_map(PageNumber::new)
}

#[cfg(test)]
mod spec {
    use super::{page_slice, pages, total_pages, PageNumber, RowsPerPage};

    fn page(n: usize) -> PageNumber {
        PageNumber::new(n).unwrap()
    }

    #[test]
    fn rows_per_page_accepts_only_allowed_sizes() {
        for n in [5, 10, 25, 50, 100] {
            assert_eq!(RowsPerPage::try_from(n).unwrap().get(), n);
        }
        for n in [0, 1, 6, 20, 99, 1000] {
            assert!(RowsPerPage::try_from(n).is_err(), "{n} is accepted");
        }
        assert_eq!("25".parse::<RowsPerPage>(), Ok(RowsPerPage::TwentyFive));
        assert!("abc".parse::<RowsPerPage>().is_err());
        assert_eq!(RowsPerPage::default(), RowsPerPage::Five);
    }

    #[test]
    fn page_number_is_positive() {
        assert!(PageNumber::new(0).is_none());
        assert_eq!(PageNumber::FIRST.get(), 1);
        assert_eq!("3".parse::<PageNumber>().unwrap().get(), 3);
        assert!("0".parse::<PageNumber>().is_err());
        assert!("-1".parse::<PageNumber>().is_err());
    }

    #[test]
    fn next_stops_at_last_page() {
        assert_eq!(page(1).next(3), page(2));
        assert_eq!(page(3).next(3), page(3));
        assert_eq!(page(1).next(1), page(1));
        assert_eq!(page(1).next(0), page(1));
    }

    #[test]
    fn prev_stops_at_first_page() {
        assert_eq!(page(3).prev(), page(2));
        assert_eq!(page(1).prev(), page(1));
    }

    #[test]
    fn counts_pages() {
        assert_eq!(total_pages(0, RowsPerPage::Five), 0);
        assert_eq!(total_pages(1, RowsPerPage::Five), 1);
        assert_eq!(total_pages(5, RowsPerPage::Five), 1);
        assert_eq!(total_pages(12, RowsPerPage::Five), 3);
        assert_eq!(total_pages(100, RowsPerPage::OneHundred), 1);
        assert_eq!(total_pages(101, RowsPerPage::Fifty), 3);
    }

    #[test]
    fn slices_last_partial_page() {
        let items = (0..12).collect::<Vec<_>>();

        assert_eq!(page_slice(&items, page(1), RowsPerPage::Five), &[0, 1, 2, 3, 4]);
        assert_eq!(page_slice(&items, page(3), RowsPerPage::Five), &[10, 11]);
    }

    #[test]
    fn slices_out_of_range_page_as_empty() {
        let items = (0..12).collect::<Vec<_>>();

        assert!(page_slice(&items, page(4), RowsPerPage::Five).is_empty());
        assert!(page_slice(&items, page(usize::MAX), RowsPerPage::Ten).is_empty());
        assert!(page_slice::<u8>(&[], PageNumber::FIRST, RowsPerPage::Five).is_empty());
    }

    #[test]
    fn pages_reconstruct_the_list() {
        for len in [0, 1, 4, 5, 6, 12, 49, 50, 51, 100, 237] {
            let items = (0..len).collect::<Vec<_>>();
            for rows in RowsPerPage::ALL {
                let total = total_pages(items.len(), rows);
                let joined = pages(total)
                    .flat_map(|p| page_slice(&items, p, rows).iter().copied())
                    .collect::<Vec<_>>();

                assert_eq!(pages(total).count(), total);
                assert_eq!(joined, items, "len = {len}, rows = {rows}");
            }
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserializes_from_numbers() {
        let rows: RowsPerPage = serde_json::from_str("50").unwrap();
        let page: PageNumber = serde_json::from_str("2").unwrap();

        assert_eq!(rows, RowsPerPage::Fifty);
        assert_eq!(page.get(), 2);
        assert!(serde_json::from_str::<RowsPerPage>("7").is_err());
        assert!(serde_json::from_str::<PageNumber>("0").is_err());
    }
}

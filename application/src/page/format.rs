//! Human-readable formatting of [`Case`] fields.
//!
//! [`Case`]: service::domain::Case

use common::{DateTimeOf, RowsPerPage};
use service::{domain::case, read::case::list::StatusFilter};

/// Label of the [`StatusFilter::All`] option.
pub const ALL_CASES: &str = "Todos";

/// Placeholder of a missing value.
pub const NOT_AVAILABLE: &str = "N/D";

/// Returns the label of the provided [`case::Status`].
#[must_use]
pub const fn status(status: case::Status) -> &'static str {
    match status {
        case::Status::Active => "Activo",
        case::Status::Recovered => "Recuperado",
        case::Status::Dead => "Fallecido",
    }
}

/// Returns the label of the provided [`StatusFilter`].
#[must_use]
pub const fn status_filter(filter: StatusFilter) -> &'static str {
    match filter {
        StatusFilter::All => ALL_CASES,
        StatusFilter::Only(s) => status(s),
    }
}

/// Returns the icon of the provided [`case::Gender`].
#[must_use]
pub const fn gender_icon(gender: case::Gender) -> &'static str {
    match gender {
        case::Gender::Male => "\u{2642}",
        case::Gender::Female => "\u{2640}",
    }
}

/// Formats the provided date as `dd/mm/yyyy`.
#[must_use]
pub fn date<Of: ?Sized>(dt: &DateTimeOf<Of>) -> String {
    dt.to_date_string()
}

/// Formats the provided [`case::Age`], if any.
///
/// Only a missing [`case::Age`] is shown as [`NOT_AVAILABLE`]. An age of `0`
/// is a known one (a newborn) and is shown as `0`.
///
/// Returned HTML is already escaped.
#[must_use]
pub fn age(age: Option<case::Age>) -> String {
    age.map_or_else(
        || format!("<small class=\"secondary\">{NOT_AVAILABLE}</small>"),
        |age| age.to_string(),
    )
}

/// Returns the label of the provided [`RowsPerPage`] option.
#[must_use]
pub fn rows_per_page(rows: RowsPerPage) -> String {
    format!("{rows} casos por página")
}

//! [`Home`] page read definitions.

use crate::domain::{Case, MetaTag};

use super::case::Stats;

/// Data of the home page.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Home {
    /// [`MetaTag`]s of the home page.
    pub meta: Vec<MetaTag>,

    /// All the [`Case`]s, in backend's default order.
    pub all_cases: Vec<Case>,

    /// Most recently detected [`Case`]s.
    pub recent_cases: Vec<Case>,
}

impl Home {
    /// Returns [`Stats`] of all the [`Case`]s.
    #[must_use]
    pub fn stats(&self) -> Stats {
        Stats::of(&self.all_cases)
    }
}

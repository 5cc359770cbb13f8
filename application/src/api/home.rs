//! [`Home`] page definitions.

use juniper::{graphql_object, GraphQLObject};
use service::{domain, read};

use crate::{api::Case, Context};

/// Data shown on the home page.
#[derive(Clone, Debug)]
pub struct Home(read::Home);

impl From<read::Home> for Home {
    fn from(home: read::Home) -> Self {
        Self(home)
    }
}

/// Data shown on the home page.
#[graphql_object(context = Context)]
impl Home {
    /// `MetaTag`s describing the home page.
    #[must_use]
    pub fn meta(&self) -> Vec<MetaTag> {
        self.0.meta.iter().cloned().map(Into::into).collect()
    }

    /// Aggregate numbers of all the `Case`s.
    #[must_use]
    pub fn stats(&self) -> Stats {
        self.0.stats().into()
    }

    /// Most recently detected `Case`s.
    #[must_use]
    pub fn recent_cases(&self) -> Vec<Case> {
        self.0.recent_cases.iter().cloned().map(Into::into).collect()
    }
}

/// HTML `<meta>` tag describing a page.
#[derive(Clone, Debug, GraphQLObject)]
#[graphql(name = "PageMetaTag")]
pub struct MetaTag {
    /// Name (or property) of this `PageMetaTag`.
    pub name: String,

    /// Content of this `PageMetaTag`.
    pub content: String,
}

impl From<domain::MetaTag> for MetaTag {
    fn from(tag: domain::MetaTag) -> Self {
        let domain::MetaTag { name, content } = tag;
        Self { name, content }
    }
}

/// Aggregate numbers of `Case`s.
#[derive(Clone, Copy, Debug, GraphQLObject)]
#[graphql(name = "CaseStats")]
pub struct Stats {
    /// Total number of `Case`s.
    pub total: i32,

    /// Number of active `Case`s.
    pub active: i32,

    /// Number of recovered `Case`s.
    pub recovered: i32,

    /// Number of dead `Case`s.
    pub dead: i32,
}

impl From<read::case::Stats> for Stats {
    fn from(stats: read::case::Stats) -> Self {
        let read::case::Stats {
            total,
            active,
            recovered,
            dead,
        } = stats;
        let int = |n: usize| i32::try_from(n).unwrap_or(i32::MAX);

        Self {
            total: int(total),
            active: int(active),
            recovered: int(recovered),
            dead: int(dead),
        }
    }
}

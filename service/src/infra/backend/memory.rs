//! In-memory [`Backend`] implementation.

use std::{collections::HashMap, path::Path, sync::Arc};

use common::operations::{By, Select};
use derive_more::{Display, Error as StdError, From};
use serde::Deserialize;
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::{page, Case, MetaTag},
    infra::{backend, Backend},
    read::case::list::{OrderBy, Selector},
};

/// [`Backend`] serving a fixed set of [`Case`]s and [`MetaTag`]s kept in
/// memory.
#[derive(Clone, Debug, Default)]
pub struct Memory {
    /// All the [`Case`]s, in the default order.
    cases: Arc<[Case]>,

    /// [`MetaTag`]s of each page.
    pages: Arc<HashMap<page::Name, Vec<MetaTag>>>,
}

impl Memory {
    /// Creates a new [`Memory`] backend out of the provided [`Case`]s and
    /// page [`MetaTag`]s.
    #[must_use]
    pub fn new(
        cases: impl IntoIterator<Item = Case>,
        pages: impl IntoIterator<Item = (page::Name, Vec<MetaTag>)>,
    ) -> Self {
        Self {
            cases: cases.into_iter().collect(),
            pages: Arc::new(pages.into_iter().collect()),
        }
    }

    /// Loads a [`Memory`] backend from the provided JSON fixtures file.
    ///
    /// # Errors
    ///
    /// Errors if the file cannot be read or has invalid contents.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let raw = tokio::fs::read(path).await?;
        let Fixtures { cases, pages } = serde_json::from_slice(&raw)?;

        log::debug!(
            "loaded {} cases and {} pages from `{}`",
            cases.len(),
            pages.len(),
            path.display(),
        );

        Ok(Self::new(
            cases,
            pages.into_iter().map(|p| (p.name, p.meta_tags)),
        ))
    }
}

/// Contents of a fixtures file.
#[derive(Debug, Deserialize)]
struct Fixtures {
    /// All the [`Case`]s.
    #[serde(default)]
    cases: Vec<Case>,

    /// All the pages.
    #[serde(default)]
    pages: Vec<PageFixture>,
}

/// Page in a fixtures file.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PageFixture {
    /// Name of the page.
    name: page::Name,

    /// [`MetaTag`]s of the page.
    #[serde(default)]
    meta_tags: Vec<MetaTag>,
}

/// Error of loading a [`Memory`] backend.
#[derive(Debug, Display, From, StdError)]
pub enum LoadError {
    /// Failed to read the fixtures file.
    #[display("failed to read fixtures: {_0}")]
    Io(std::io::Error),

    /// Fixtures file is not a valid JSON.
    #[display("invalid fixtures: {_0}")]
    Json(serde_json::Error),
}

impl Backend<Select<By<Vec<Case>, Selector>>> for Memory {
    type Ok = Vec<Case>;
    type Err = Traced<backend::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Vec<Case>, Selector>>,
    ) -> Result<Self::Ok, Self::Err> {
        let Selector { first, order_by } = by.into_inner();

        let mut cases = self.cases.to_vec();
        match order_by {
            Some(OrderBy::DetectedAsc) => {
                cases.sort_by_key(|c| c.detected_at);
            }
            Some(OrderBy::DetectedDesc) => {
                cases.sort_by(|a, b| b.detected_at.cmp(&a.detected_at));
            }
            None => {}
        }
        if let Some(first) = first {
            cases.truncate(first);
        }

        Ok(cases)
    }
}

impl Backend<Select<By<Vec<MetaTag>, page::Name>>> for Memory {
    type Ok = Vec<MetaTag>;
    type Err = Traced<backend::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Vec<MetaTag>, page::Name>>,
    ) -> Result<Self::Ok, Self::Err> {
        Ok(self.pages.get(by.inner()).cloned().unwrap_or_default())
    }
}

#[cfg(test)]
mod spec {
    use common::{
        operations::{By, Select},
        DateTime,
    };

    use crate::{
        domain::{case, page, Case, MetaTag},
        infra::Backend as _,
        read::case::list::{OrderBy, Selector},
    };

    use super::Memory;

    fn case(id: &str, detected: &str) -> Case {
        Case {
            id: id.into(),
            status: case::Status::Active,
            detected_at: DateTime::from_rfc3339(detected).unwrap().coerce(),
            age: None,
            gender: case::Gender::Male,
        }
    }

    fn backend() -> Memory {
        Memory::new(
            [
                case("b", "2020-03-15T00:00:00Z"),
                case("a", "2020-03-10T00:00:00Z"),
                case("d", "2020-03-25T00:00:00Z"),
                case("c", "2020-03-20T00:00:00Z"),
            ],
            [(
                page::Name::from("home"),
                vec![MetaTag {
                    name: "description".into(),
                    content: "Casos".into(),
                }],
            )],
        )
    }

    async fn ids(backend: &Memory, selector: Selector) -> Vec<String> {
        backend
            .execute(Select(By::<Vec<Case>, _>::new(selector)))
            .await
            .unwrap()
            .into_iter()
            .map(|c: Case| c.id.into())
            .collect()
    }

    #[tokio::test]
    async fn keeps_default_order() {
        assert_eq!(
            ids(&backend(), Selector::default()).await,
            ["b", "a", "d", "c"],
        );
    }

    #[tokio::test]
    async fn limits_and_orders() {
        let recent = Selector {
            first: Some(2),
            order_by: Some(OrderBy::DetectedDesc),
        };
        let oldest = Selector {
            first: Some(3),
            order_by: Some(OrderBy::DetectedAsc),
        };

        assert_eq!(ids(&backend(), recent).await, ["d", "c"]);
        assert_eq!(ids(&backend(), oldest).await, ["a", "b", "c"]);
    }

    #[tokio::test]
    async fn limit_above_length_returns_everything() {
        let all = Selector {
            first: Some(100),
            order_by: None,
        };

        assert_eq!(ids(&backend(), all).await.len(), 4);
    }

    #[tokio::test]
    async fn selects_meta_tags_by_page_name() {
        let tags = backend()
            .execute(Select(By::<Vec<MetaTag>, _>::new(page::Name::from("home"))))
            .await
            .unwrap();
        let none = backend()
            .execute(Select(By::<Vec<MetaTag>, _>::new(page::Name::from("about"))))
            .await
            .unwrap();

        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0].content, "Casos");
        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn loads_fixtures_file() {
        let backend =
            Memory::load(concat!(env!("CARGO_MANIFEST_DIR"), "/../fixtures.json"))
                .await
                .unwrap();

        assert_eq!(ids(&backend, Selector::default()).await.len(), 12);
        assert_eq!(
            ids(
                &backend,
                Selector {
                    first: Some(1),
                    order_by: Some(OrderBy::DetectedDesc),
                },
            )
            .await,
            ["case-012"],
        );
    }

    #[tokio::test]
    async fn fails_on_missing_fixtures_file() {
        assert!(Memory::load("definitely/missing/fixtures.json").await.is_err());
    }
}

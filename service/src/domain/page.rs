//! Page metadata definitions.

use derive_more::{AsRef, Display, From, Into};
use serde::{Deserialize, Serialize};

/// Name of a page the metadata is attached to.
#[derive(
    AsRef,
    Clone,
    Debug,
    Deserialize,
    Display,
    Eq,
    From,
    Hash,
    Into,
    PartialEq,
    Serialize,
)]
#[as_ref(forward)]
#[serde(transparent)]
pub struct Name(String);

impl From<&str> for Name {
    fn from(name: &str) -> Self {
        Self(name.to_owned())
    }
}

/// HTML `<meta>` tag describing a page for search engines and social
/// networks.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct MetaTag {
    /// Name (or property) of this [`MetaTag`], like `description` or
    /// `og:title`.
    pub name: String,

    /// Content of this [`MetaTag`].
    pub content: String,
}

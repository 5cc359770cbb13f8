//! [`Query`] collection related to page metadata.

use common::operations::By;

use crate::domain::{page, MetaTag};
#[cfg(doc)]
use crate::Query;

use super::BackendQuery;

/// Queries [`MetaTag`]s of a page by its [`page::Name`].
pub type MetaTags = BackendQuery<By<Vec<MetaTag>, page::Name>>;

//! [`Backend`]-related implementations.

pub mod graphql;
pub mod memory;

use common::operations::{By, Select};
use derive_more::{Display, Error as StdError, From};
use tracerr::Traced;

use crate::{
    domain::{page, Case, MetaTag},
    read,
};

pub use self::{graphql::Graphql, memory::Memory};

/// Backend operation.
///
/// Backend owns all the [`Case`]s and page metadata, and is never written
/// to by this application.
pub use common::Handler as Backend;

/// [`Backend`] error.
#[derive(Debug, Display, From, StdError)]
pub enum Error {
    /// [`Graphql`] backend error.
    Graphql(graphql::Error),
}

/// [`Backend`] chosen at runtime.
#[derive(Clone, Debug, From)]
pub enum Any {
    /// [`Memory`] backend.
    Memory(Memory),

    /// [`Graphql`] backend.
    Graphql(Graphql),
}

impl Backend<Select<By<Vec<Case>, read::case::list::Selector>>> for Any {
    type Ok = Vec<Case>;
    type Err = Traced<Error>;

    async fn execute(
        &self,
        op: Select<By<Vec<Case>, read::case::list::Selector>>,
    ) -> Result<Self::Ok, Self::Err> {
        match self {
            Self::Memory(b) => b.execute(op).await,
            Self::Graphql(b) => b.execute(op).await,
        }
        .map_err(tracerr::wrap!())
    }
}

impl Backend<Select<By<Vec<MetaTag>, page::Name>>> for Any {
    type Ok = Vec<MetaTag>;
    type Err = Traced<Error>;

    async fn execute(
        &self,
        op: Select<By<Vec<MetaTag>, page::Name>>,
    ) -> Result<Self::Ok, Self::Err> {
        match self {
            Self::Memory(b) => b.execute(op).await,
            Self::Graphql(b) => b.execute(op).await,
        }
        .map_err(tracerr::wrap!())
    }
}

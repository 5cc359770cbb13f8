//! [`Query`] collection related to multiple [`Case`]s.

use common::operations::By;
use tracerr::Traced;

use crate::{
    domain::Case,
    infra::backend,
    read::{self, case::list::Selector},
    Service,
};

use super::{BackendQuery, Query};

/// Queries a list of [`Case`]s.
pub type List = BackendQuery<By<Vec<Case>, read::case::list::Selector>>;

/// Queries all the [`Case`]s shown on the dashboard, in backend's default
/// order.
///
/// Their number is limited by [`HomeConfig::all_cases_limit`].
///
/// [`HomeConfig::all_cases_limit`]: crate::HomeConfig::all_cases_limit
#[derive(Clone, Copy, Debug)]
pub struct All;

impl<Bk, A> Query<All> for Service<Bk, A>
where
    Self: Query<List, Ok = Vec<Case>, Err = Traced<backend::Error>>,
{
    type Ok = Vec<Case>;
    type Err = Traced<backend::Error>;

    async fn execute(&self, _: All) -> Result<Self::Ok, Self::Err> {
        self.execute(List::by(Selector {
            first: Some(self.config().home.all_cases_limit),
            order_by: None,
        }))
        .await
        .map_err(tracerr::wrap!())
    }
}

/// Queries the most recently detected [`Case`]s.
///
/// Their number is limited by [`HomeConfig::recent_cases_limit`].
///
/// [`HomeConfig::recent_cases_limit`]: crate::HomeConfig::recent_cases_limit
#[derive(Clone, Copy, Debug)]
pub struct Recent;

impl<Bk, A> Query<Recent> for Service<Bk, A>
where
    Self: Query<List, Ok = Vec<Case>, Err = Traced<backend::Error>>,
{
    type Ok = Vec<Case>;
    type Err = Traced<backend::Error>;

    async fn execute(&self, _: Recent) -> Result<Self::Ok, Self::Err> {
        self.execute(List::by(Selector {
            first: Some(self.config().home.recent_cases_limit),
            order_by: Some(read::case::list::OrderBy::DetectedDesc),
        }))
        .await
        .map_err(tracerr::wrap!())
    }
}

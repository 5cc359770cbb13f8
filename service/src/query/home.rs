//! [`Query`] assembling the [`HomePage`].

use futures::future;
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::{Case, MetaTag},
    infra::backend,
    read, Service,
};

use super::{cases, page, Query};

/// Queries all the data shown on the home page.
///
/// Page [`MetaTag`]s, all the [`Case`]s and the recent [`Case`]s are fetched
/// concurrently, and the whole [`Query`] fails if any of them fails.
#[derive(Clone, Copy, Debug)]
pub struct HomePage;

impl<Bk, A> Query<HomePage> for Service<Bk, A>
where
    Self: Query<page::MetaTags, Ok = Vec<MetaTag>, Err = Traced<backend::Error>>
        + Query<cases::All, Ok = Vec<Case>, Err = Traced<backend::Error>>
        + Query<cases::Recent, Ok = Vec<Case>, Err = Traced<backend::Error>>,
{
    type Ok = read::Home;
    type Err = Traced<backend::Error>;

    async fn execute(&self, _: HomePage) -> Result<Self::Ok, Self::Err> {
        let (meta, all_cases, recent_cases) = future::try_join3(
            self.execute(page::MetaTags::by(self.config().home.page.clone())),
            self.execute(cases::All),
            self.execute(cases::Recent),
        )
        .await
        .map_err(tracerr::wrap!())?;

        log::debug!(
            meta_tags = meta.len(),
            all_cases = all_cases.len(),
            recent_cases = recent_cases.len(),
            "assembled home page",
        );

        Ok(read::Home {
            meta,
            all_cases,
            recent_cases,
        })
    }
}

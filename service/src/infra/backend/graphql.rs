//! GraphQL-over-HTTP [`Backend`] implementation.

use std::{sync::Arc, time::Duration};

use common::operations::{By, Select};
use derive_more::{Display, Error as StdError};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::{page, Case, MetaTag},
    infra::{backend, Backend},
    read::case::list::{OrderBy, Selector},
};

/// Query fetching a list of [`Case`]s.
const CASES_QUERY: &str = "\
    query Cases($first: Int, $orderBy: CaseOrderByInput) { \
        cases(first: $first, orderBy: $orderBy) { \
            id casestatus detected age gender \
        } \
    }";

/// Query fetching [`MetaTag`]s of a page.
const PAGE_META_TAGS_QUERY: &str = "\
    query PageMetaTags($name: String!) { \
        pageMetaTags(where: { page: { name: $name } }) { \
            name content \
        } \
    }";

/// [`Graphql`] backend configuration.
#[derive(Clone, Debug)]
pub struct Config {
    /// URL of the GraphQL endpoint.
    pub endpoint: String,

    /// Bearer token to authorize requests with, if required.
    pub token: Option<String>,

    /// Timeout of a single request.
    pub timeout: Duration,
}

/// [`Backend`] fetching data from a remote GraphQL API.
#[derive(Clone, Debug)]
pub struct Graphql {
    /// HTTP client performing requests.
    client: reqwest::Client,

    /// URL of the GraphQL endpoint.
    endpoint: Arc<str>,
}

impl Graphql {
    /// Creates a new [`Graphql`] backend with the provided [`Config`].
    ///
    /// # Errors
    ///
    /// Errors if the HTTP client cannot be built with the provided
    /// [`Config`].
    pub fn new(config: Config) -> Result<Self, Error> {
        let Config {
            endpoint,
            token,
            timeout,
        } = config;

        let mut headers = reqwest::header::HeaderMap::new();
        if let Some(token) = token {
            let mut value = format!("Bearer {token}")
                .parse::<reqwest::header::HeaderValue>()
                .map_err(|_| Error::InvalidToken)?;
            value.set_sensitive(true);
            drop(headers.insert(reqwest::header::AUTHORIZATION, value));
        }

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .default_headers(headers)
            .build()
            .map_err(Error::Client)?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    /// Performs the provided GraphQL `query` with the provided `variables`.
    async fn request<V, T>(&self, query: &str, variables: V) -> Result<T, Error>
    where
        V: Serialize,
        T: DeserializeOwned,
    {
        let response = self
            .client
            .post(&*self.endpoint)
            .json(&Request { query, variables })
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(Error::Request)?
            .json::<Response<T>>()
            .await
            .map_err(Error::Request)?;

        if !response.errors.is_empty() {
            let messages = response
                .errors
                .into_iter()
                .map(|e| e.message)
                .collect::<Vec<_>>()
                .join("; ");
            log::warn!("GraphQL backend responded with errors: {messages}");
            return Err(Error::Response(messages));
        }

        response.data.ok_or(Error::MissingData)
    }
}

/// GraphQL request body.
#[derive(Debug, Serialize)]
struct Request<'q, V> {
    /// GraphQL query.
    query: &'q str,

    /// Variables of the `query`.
    variables: V,
}

/// GraphQL response body.
#[derive(Debug, Deserialize)]
struct Response<T> {
    /// Data returned by the query, if any.
    data: Option<T>,

    /// Errors occurred during the query execution.
    #[serde(default)]
    errors: Vec<ResponseError>,
}

/// Error in a GraphQL [`Response`].
#[derive(Debug, Deserialize)]
struct ResponseError {
    /// Human-readable description of the error.
    message: String,
}

/// [`Graphql`] backend error.
#[derive(Debug, Display, StdError)]
pub enum Error {
    /// Failed to build an HTTP client.
    #[display("failed to build HTTP client: {_0}")]
    Client(reqwest::Error),

    /// Provided token cannot be used in an HTTP header.
    #[display("authorization token contains invalid characters")]
    InvalidToken,

    /// HTTP request failed.
    #[display("GraphQL request failed: {_0}")]
    Request(reqwest::Error),

    /// GraphQL API responded with errors.
    #[display("GraphQL API responded with errors: {_0}")]
    Response(#[error(not(source))] String),

    /// GraphQL API responded without any data.
    #[display("GraphQL API responded without data")]
    MissingData,
}

impl Backend<Select<By<Vec<Case>, Selector>>> for Graphql {
    type Ok = Vec<Case>;
    type Err = Traced<backend::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Vec<Case>, Selector>>,
    ) -> Result<Self::Ok, Self::Err> {
        #[derive(Debug, Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Variables {
            first: Option<usize>,
            order_by: Option<OrderBy>,
        }

        #[derive(Debug, Deserialize)]
        struct Data {
            cases: Vec<Case>,
        }

        let Selector { first, order_by } = by.into_inner();
        self.request::<_, Data>(CASES_QUERY, Variables { first, order_by })
            .await
            .map(|d| d.cases)
            .map_err(backend::Error::from)
            .map_err(tracerr::wrap!())
    }
}

impl Backend<Select<By<Vec<MetaTag>, page::Name>>> for Graphql {
    type Ok = Vec<MetaTag>;
    type Err = Traced<backend::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Vec<MetaTag>, page::Name>>,
    ) -> Result<Self::Ok, Self::Err> {
        #[derive(Debug, Serialize)]
        struct Variables {
            name: page::Name,
        }

        #[derive(Debug, Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct Data {
            page_meta_tags: Vec<MetaTag>,
        }

        let name = by.into_inner();
        self.request::<_, Data>(PAGE_META_TAGS_QUERY, Variables { name })
            .await
            .map(|d| d.page_meta_tags)
            .map_err(backend::Error::from)
            .map_err(tracerr::wrap!())
    }
}

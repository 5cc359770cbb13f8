//! Application serves the cases dashboard backed by the [`Service`]: HTML
//! pages and a read-only GraphQL API.

#![deny(
    nonstandard_style,
    rust_2018_idioms,
    rustdoc::all,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code
)]
#![forbid(non_ascii_idents)]
#![warn(
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason,
    clippy::pedantic,
    clippy::wildcard_enum_match_arm,
    deprecated_in_future,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unreachable_pub,
    unused_crate_dependencies,
    unused_import_braces,
    unused_labels,
    unused_lifetimes,
    unused_qualifications,
    unused_results
)]

pub mod api;
pub mod args;
pub mod config;
mod context;
pub mod error;
pub mod page;
pub mod params;

use std::sync::Arc;

use axum::{
    response::{IntoResponse, Response},
    routing::{get, on, MethodFilter},
    Extension, Json, Router,
};
use derive_more::Debug;
use juniper::{http::GraphQLBatchResponse, DefaultScalarValue, ScalarValue};
use juniper_axum::extract::JuniperRequest;
// Used in binary.
use axum_client_ip as _;
use tokio as _;
use tower_http as _;
use tracing_subscriber as _;

pub use self::{
    args::Args,
    config::Config,
    context::Context,
    error::{AsError, Error},
};

/// [`Service`] with filled infrastructure dependencies.
///
/// [`Service`]: service::Service
pub type Service = service::Service<service::infra::backend::Any>;

/// [`juniper`] GraphQL response.
#[derive(Debug)]
pub struct JuniperResponse<S = DefaultScalarValue>
where
    S: ScalarValue,
{
    /// Status code of the response.
    pub status_code: http::StatusCode,

    /// Underlying GraphQL response.
    #[debug(skip)]
    pub response: GraphQLBatchResponse<S>,
}

impl<S> IntoResponse for JuniperResponse<S>
where
    S: ScalarValue,
{
    fn into_response(self) -> Response {
        let Self {
            status_code,
            response,
        } = self;

        if response.is_ok() {
            Json(response).into_response()
        } else {
            (status_code, Json(response)).into_response()
        }
    }
}

/// GraphQL API handler.
pub async fn graphql(
    Extension(schema): Extension<Arc<api::Schema>>,
    context: Context,
    JuniperRequest(gql_request): JuniperRequest,
) -> JuniperResponse {
    JuniperResponse {
        status_code: context.error_status_code(),
        response: gql_request.execute(&*schema, &context).await,
    }
}

/// Creates a [`Router`] serving all the pages and the GraphQL API of the
/// provided [`Service`].
pub fn router(service: Service) -> Router {
    Router::new()
        .route("/", get(page::home))
        .route("/cases", get(page::cases))
        .route(
            "/graphql",
            on(MethodFilter::GET.or(MethodFilter::POST), graphql),
        )
        .layer(Extension(Arc::new(api::schema())))
        .layer(Extension(service))
}

#[cfg(test)]
mod spec {
    use axum::body::{self, Body};
    use http::{Request, StatusCode};
    use service::infra::{analytics, backend};
    use tower::ServiceExt as _;

    use crate::Service;

    async fn service() -> Service {
        let fixtures = concat!(env!("CARGO_MANIFEST_DIR"), "/../fixtures.json");
        let memory = backend::Memory::load(fixtures).await.unwrap();

        Service::new(
            service::Config::default(),
            backend::Any::from(memory),
            analytics::Tracing,
        )
    }

    async fn get(uri: &str) -> (StatusCode, String) {
        let res = super::router(service().await)
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = res.status();
        let body = body::to_bytes(res.into_body(), usize::MAX).await.unwrap();

        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn serves_home_page() {
        let (status, html) = get("/").await;

        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("<meta property=\"og:title\" content=\"Casos\">"));
        assert!(html.contains("<div class=\"cases-list\">"));
        assert!(!html.contains("<form"));
    }

    #[tokio::test]
    async fn applies_submitted_cases_form() {
        let (status, html) =
            get("/cases?status=active&rows=5&page=1&action=next").await;

        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("<option value=\"active\" selected>"));
        assert!(html.contains("<option value=\"2\" selected>2</option>"));
        assert_eq!(html.matches("<tr data-key=").count(), 1);
        assert!(html.contains("value=\"next\" disabled>"));
    }

    #[tokio::test]
    async fn serves_cases_without_query() {
        let (status, html) = get("/cases").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(html.matches("<tr data-key=").count(), 5);
        assert!(html.contains("<option value=\"all\" selected>"));
    }

    #[tokio::test]
    async fn rejects_malformed_cases_query() {
        let (status, _) = get("/cases?page=0").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}

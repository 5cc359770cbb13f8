//! [`Config`]-related definitions.

use std::time;

use config::{builder::DefaultState, ConfigBuilder, ConfigError};
use serde::Deserialize;
use smart_default::SmartDefault;

/// Application configuration.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Server configuration.
    pub server: Server,

    /// Backend configuration.
    pub backend: Backend,

    /// Home page configuration.
    pub home: Home,

    /// Log configuration.
    pub log: Log,
}

impl Config {
    /// Creates a new [`Config`] by:
    /// - loading it from the provided `path` (if any);
    /// - merging it with the environment variables (if any);
    /// - using default values for missing fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(path: impl AsRef<str>) -> Result<Self, ConfigError> {
        ConfigBuilder::<DefaultState>::default()
            .add_source(config::File::with_name(path.as_ref()).required(false))
            .add_source(config::Environment::with_prefix("CONF").separator("."))
            .build()?
            .try_deserialize()
    }
}

/// Server configuration.
#[derive(Clone, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Server {
    /// Host to bind the server to.
    #[default("0.0.0.0".to_owned())]
    pub host: String,

    /// Port to bind the server to.
    #[default(8080)]
    pub port: u16,

    /// [CORS] configuration of the GraphQL API.
    ///
    /// [CORS]: https://developer.mozilla.org/en-US/docs/Web/HTTP/CORS
    pub cors: Cors,
}

/// [CORS] configuration.
///
/// [CORS]: https://developer.mozilla.org/en-US/docs/Web/HTTP/CORS
#[derive(Clone, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Cors {
    /// List of allowed origins.
    #[default(vec!["*".to_owned()])]
    pub origins: Vec<String>,
}

/// Backend configuration.
#[derive(Clone, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Backend {
    /// Kind of the backend to fetch data from.
    pub kind: BackendKind,

    /// Path to the JSON fixtures file of the [`BackendKind::Memory`]
    /// backend.
    #[default("fixtures.json".to_owned())]
    pub fixtures: String,

    /// [`BackendKind::Graphql`] backend configuration.
    pub graphql: Graphql,
}

/// Kind of a backend.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    /// Data is loaded from a local fixtures file once on startup.
    #[default]
    Memory,

    /// Data is fetched from a remote GraphQL API on each request.
    Graphql,
}

/// GraphQL backend configuration.
#[derive(Clone, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Graphql {
    /// URL of the GraphQL endpoint.
    #[default("http://127.0.0.1:4000/graphql".to_owned())]
    pub endpoint: String,

    /// Bearer token to authorize requests with.
    pub token: Option<String>,

    /// Timeout of a single request.
    #[default(time::Duration::from_secs(10))]
    #[serde(with = "humantime_serde")]
    pub timeout: time::Duration,
}

impl From<Graphql> for service::infra::backend::graphql::Config {
    fn from(value: Graphql) -> Self {
        let Graphql {
            endpoint,
            token,
            timeout,
        } = value;

        Self {
            endpoint,
            token,
            timeout,
        }
    }
}

/// Home page configuration.
#[derive(Clone, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Home {
    /// Name of the page to fetch metadata of.
    #[default("home".to_owned())]
    pub page: String,

    /// Maximum number of cases shown on the dashboard.
    #[default(100)]
    pub all_cases_limit: usize,

    /// Number of the most recent cases shown on the home page.
    #[default(5)]
    pub recent_cases_limit: usize,
}

impl From<Home> for service::Config {
    fn from(value: Home) -> Self {
        let Home {
            page,
            all_cases_limit,
            recent_cases_limit,
        } = value;

        Self {
            home: service::HomeConfig {
                page: page.into(),
                all_cases_limit,
                recent_cases_limit,
            },
        }
    }
}

/// Log configuration.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Log {
    /// Log level.
    pub level: LogLevel,
}

/// Log level.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LogLevel {
    /// Designates very low priority, often extremely verbose, information.
    Trace,

    /// Designates lower priority information.
    Debug,

    /// Designates useful information.
    #[default]
    Info,

    /// Designates hazardous situations.
    Warn,

    /// Designates very serious errors.
    Error,
}

impl From<LogLevel> for tracing::Level {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Trace => Self::TRACE,
            LogLevel::Debug => Self::DEBUG,
            LogLevel::Info => Self::INFO,
            LogLevel::Warn => Self::WARN,
            LogLevel::Error => Self::ERROR,
        }
    }
}

#[cfg(test)]
mod spec {
    use std::time::Duration;

    use super::{BackendKind, Config};

    #[test]
    fn defaults_without_file() {
        let conf = Config::new("definitely/missing/config.toml").unwrap();

        assert_eq!(conf.server.port, 8080);
        assert_eq!(conf.backend.kind, BackendKind::Memory);
        assert_eq!(conf.backend.graphql.timeout, Duration::from_secs(10));
        assert_eq!(conf.home.page, "home");
        assert_eq!(conf.home.all_cases_limit, 100);
        assert_eq!(conf.home.recent_cases_limit, 5);
    }

    #[test]
    fn converts_home_into_service_config() {
        let conf = service::Config::from(super::Home {
            page: "landing".to_owned(),
            all_cases_limit: 50,
            recent_cases_limit: 3,
        });

        assert_eq!(conf.home.page.to_string(), "landing");
        assert_eq!(conf.home.all_cases_limit, 50);
        assert_eq!(conf.home.recent_cases_limit, 3);
    }
}

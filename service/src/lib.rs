//! Service contains the business logic of the cases dashboard: fetching
//! [`Case`]s from a backend, and filtering, paginating and counting them.
//!
//! [`Case`]: domain::Case
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

pub mod command;
pub mod domain;
pub mod infra;
pub mod query;
pub mod read;

use derive_more::Debug;
use smart_default::SmartDefault;

#[cfg(doc)]
use crate::infra::Backend;
use crate::{domain::page, infra::analytics};

pub use self::{command::Command, query::Query};

/// [`Service`] configuration.
#[derive(Clone, Debug, Default)]
pub struct Config {
    /// Home page configuration.
    pub home: HomeConfig,
}

/// Home page configuration.
#[derive(Clone, Debug, SmartDefault)]
pub struct HomeConfig {
    /// [`page::Name`] to fetch the home page metadata of.
    #[default(page::Name::from("home"))]
    pub page: page::Name,

    /// Maximum number of [`Case`]s shown on the dashboard.
    ///
    /// [`Case`]: domain::Case
    #[default(100)]
    pub all_cases_limit: usize,

    /// Number of the most recent [`Case`]s shown on the home page.
    ///
    /// [`Case`]: domain::Case
    #[default(5)]
    pub recent_cases_limit: usize,
}

/// Domain service.
#[derive(Clone, Debug)]
pub struct Service<Bk, A = analytics::Tracing> {
    /// Configuration of this [`Service`].
    config: Config,

    /// [`Backend`] of this [`Service`].
    backend: Bk,

    /// [`Analytics`] of this [`Service`].
    ///
    /// [`Analytics`]: infra::Analytics
    #[debug(skip)]
    analytics: A,
}

impl<Bk, A> Service<Bk, A> {
    /// Creates a new [`Service`] with the provided parameters.
    #[must_use]
    pub fn new(config: Config, backend: Bk, analytics: A) -> Self {
        Self {
            config,
            backend,
            analytics,
        }
    }

    /// Returns [`Config`] of this [`Service`].
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns [`Backend`] of this [`Service`].
    #[must_use]
    pub fn backend(&self) -> &Bk {
        &self.backend
    }

    /// Returns [`Analytics`] of this [`Service`].
    ///
    /// [`Analytics`]: infra::Analytics
    #[must_use]
    pub fn analytics(&self) -> &A {
        &self.analytics
    }
}

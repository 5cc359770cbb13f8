//! Infrastructure layer.

pub mod analytics;
pub mod backend;

pub use self::{
    analytics::Analytics,
    backend::{Backend, Graphql, Memory},
};

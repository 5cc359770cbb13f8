//! Domain definitions.

pub mod case;
pub mod page;

pub use self::{case::Case, page::MetaTag};

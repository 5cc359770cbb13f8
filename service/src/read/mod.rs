//! Read entities definitions.

pub mod case;
pub mod home;

pub use self::home::Home;

//! Core type definitions for depcopy

mod error;
mod scope;

pub use error::{DepcopyError, Result};
pub use scope::Scope;

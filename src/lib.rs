pub mod core;
pub mod error;
pub mod types;

pub use crate::core::{AssociativeMap, MapOpts};
pub use error::{Error, Result};
pub use types::Value;

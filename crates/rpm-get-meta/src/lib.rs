//! JSON metadata extraction.
//!
//! Release descriptors are parsed once into a [`JsonTree`] and then queried
//! with [`QueryPath`]s. A lookup that runs into a missing field, an index past
//! the end of an array or a step of the wrong kind yields `None`; absent data
//! is an ordinary result here, never an error.

mod error;
mod path;
mod rate_limit;
mod rewrite;
mod tree;

pub use error::{MetaError, Result};
pub use path::{QueryPath, Step};
pub use rate_limit::{RATE_LIMIT_MARKER, is_rate_limited, rate_limit_message};
pub use rewrite::rewrite_match;
pub use tree::{JsonTree, parse, query};

pub use serde_json::Value;

use std::path::Path;

use serde_json::Value;

use crate::{MetaError, QueryPath, Result, Step};

/// A parsed JSON document.
#[derive(Debug, Clone, PartialEq)]
pub struct JsonTree {
    root: Value,
}

/// Parse raw bytes into a [`JsonTree`].
pub fn parse(bytes: &[u8]) -> Result<JsonTree> {
    Ok(JsonTree {
        root: serde_json::from_slice(bytes)?,
    })
}

/// Walk `path` from the root of `tree`.
///
/// Stops at the first step that does not apply to the current node and
/// returns `None`; never fails.
pub fn query<'a>(tree: &'a JsonTree, path: &QueryPath) -> Option<&'a Value> {
    path.steps()
        .iter()
        .try_fold(&tree.root, |node, step| match (node, step) {
            (Value::Object(map), Step::Field(name)) => map.get(name),
            (Value::Array(items), Step::Index(index)) => items.get(*index),
            _ => None,
        })
}

impl JsonTree {
    /// Read and parse a cached document.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| MetaError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        parse(&bytes)
    }

    pub fn root(&self) -> &Value {
        &self.root
    }

    pub fn query(&self, path: &QueryPath) -> Option<&Value> {
        query(self, path)
    }

    /// Like [`query`](Self::query), but only for string leaves.
    pub fn query_str(&self, path: &QueryPath) -> Option<&str> {
        self.query(path).and_then(Value::as_str)
    }
}

impl From<Value> for JsonTree {
    fn from(root: Value) -> Self {
        Self { root }
    }
}

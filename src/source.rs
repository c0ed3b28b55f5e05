//! Named, read-only structured data sources.
//!
//! Every loader in the crate takes a source id and asks a [`DataSource`] for
//! the parsed JSON behind it. Sources are immutable distribution assets.

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::{MapError, Result};

pub trait DataSource {
    /// Resolve a source id to its parsed contents
    fn load(&self, id: &str) -> Result<Value>;
}

impl<S: DataSource + ?Sized> DataSource for &S {
    fn load(&self, id: &str) -> Result<Value> {
        (**self).load(id)
    }
}

impl<S: DataSource + ?Sized> DataSource for Box<S> {
    fn load(&self, id: &str) -> Result<Value> {
        (**self).load(id)
    }
}

/// Reads `<root>/<id>.json` on every call
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, id: &str) -> PathBuf {
        self.root.join(format!("{}.json", id))
    }
}

impl DataSource for DirectorySource {
    fn load(&self, id: &str) -> Result<Value> {
        let path = self.path_for(id);

        let contents = match std::fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(MapError::DataSourceNotFound { id: id.to_string() });
            }
            Err(source) => return Err(MapError::Io { path, source }),
        };

        serde_json::from_str(&contents).map_err(|source| MapError::Json {
            id: id.to_string(),
            source,
        })
    }
}

/// Sources held in memory, keyed by id
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    entries: HashMap<String, Value>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: impl Into<String>, value: Value) {
        self.entries.insert(id.into(), value);
    }

    pub fn with(mut self, id: impl Into<String>, value: Value) -> Self {
        self.insert(id, value);
        self
    }
}

impl DataSource for MemorySource {
    fn load(&self, id: &str) -> Result<Value> {
        self.entries
            .get(id)
            .cloned()
            .ok_or_else(|| MapError::DataSourceNotFound { id: id.to_string() })
    }
}

/// Memoizes successful loads from an inner source, never invalidated
///
/// Failures are not cached so a source that appears later is still found.
#[derive(Debug)]
pub struct CachedSource<S> {
    inner: S,
    cache: RefCell<HashMap<String, Value>>,
}

impl<S: DataSource> CachedSource<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            cache: RefCell::new(HashMap::new()),
        }
    }

    pub fn cached_len(&self) -> usize {
        self.cache.borrow().len()
    }
}

impl<S: DataSource> DataSource for CachedSource<S> {
    fn load(&self, id: &str) -> Result<Value> {
        if let Some(value) = self.cache.borrow().get(id) {
            return Ok(value.clone());
        }

        let value = self.inner.load(id)?;
        self.cache
            .borrow_mut()
            .insert(id.to_string(), value.clone());
        Ok(value)
    }
}

/// Load a source that must be a JSON array of strings
pub(crate) fn load_string_list(source: &dyn DataSource, id: &str) -> Result<Vec<String>> {
    let malformed = || MapError::MalformedSource {
        id: id.to_string(),
        expected: "an array of strings",
    };

    match source.load(id)? {
        Value::Array(items) => items
            .into_iter()
            .map(|item| match item {
                Value::String(s) => Ok(s),
                _ => Err(malformed()),
            })
            .collect(),
        _ => Err(malformed()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::cell::Cell;

    struct CountingSource {
        calls: Cell<usize>,
    }

    impl DataSource for CountingSource {
        fn load(&self, id: &str) -> Result<Value> {
            self.calls.set(self.calls.get() + 1);
            if id == "missing" {
                return Err(MapError::DataSourceNotFound { id: id.to_string() });
            }
            Ok(json!([id]))
        }
    }

    #[test]
    fn test_memory_source_lookup() {
        let source = MemorySource::new().with("Route", json!(["{1, 2}"]));
        assert_eq!(source.load("Route").unwrap(), json!(["{1, 2}"]));
        assert!(matches!(
            source.load("Nope"),
            Err(MapError::DataSourceNotFound { id }) if id == "Nope"
        ));
    }

    #[test]
    fn test_cached_source_memoizes_hits_only() {
        let cached = CachedSource::new(CountingSource {
            calls: Cell::new(0),
        });

        cached.load("a").unwrap();
        cached.load("a").unwrap();
        assert_eq!(cached.inner.calls.get(), 1);

        assert!(cached.load("missing").is_err());
        assert!(cached.load("missing").is_err());
        assert_eq!(cached.inner.calls.get(), 3);
        assert_eq!(cached.cached_len(), 1);
    }

    #[test]
    fn test_load_string_list_shape() {
        let source = MemorySource::new()
            .with("ok", json!(["{1, 2}", "{3, 4}"]))
            .with("mixed", json!(["{1, 2}", 3]))
            .with("object", json!({"a": 1}));

        assert_eq!(load_string_list(&source, "ok").unwrap().len(), 2);
        assert!(matches!(
            load_string_list(&source, "mixed"),
            Err(MapError::MalformedSource { .. })
        ));
        assert!(matches!(
            load_string_list(&source, "object"),
            Err(MapError::MalformedSource { .. })
        ));
    }
}

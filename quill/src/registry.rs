//! Tag and filter registry
//!
//! Tags are looked up by name each time a template is rendered, so a tag can
//! be registered before or after the templates that use it are compiled. The
//! registry is shared between an [`Engine`](crate::Engine) and every template
//! it compiled.
//!
//! Filters can be registered but templates have no syntax to apply them yet.

use std::{
    collections::HashMap,
    fmt::Debug,
    sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use serde_json::Value;

use crate::error::BoxError;

/// Result returned by tag and filter handlers
pub type TagResult = std::result::Result<String, BoxError>;

/// A tag handler
///
/// Receives the render data, the tag's literal arguments and, for a tag
/// closed by `{% endname %}`, its rendered body. Standalone tags get `None`.
pub trait Tag: Send + Sync {
    fn call(&self, data: &Value, args: &[String], body: Option<&str>) -> TagResult;
}

impl<F> Tag for F
where
    F: Fn(&Value, &[String], Option<&str>) -> TagResult + Send + Sync,
{
    fn call(&self, data: &Value, args: &[String], body: Option<&str>) -> TagResult {
        self(data, args, body)
    }
}

/// A filter handler
pub trait Filter: Send + Sync {
    fn apply(&self, data: &Value, args: &[String]) -> TagResult;
}

impl<F> Filter for F
where
    F: Fn(&Value, &[String]) -> TagResult + Send + Sync,
{
    fn apply(&self, data: &Value, args: &[String]) -> TagResult {
        self(data, args)
    }
}

/// Name to handler maps
#[derive(Default)]
pub struct Registry {
    tags: HashMap<String, Arc<dyn Tag>>,
    filters: HashMap<String, Arc<dyn Filter>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a tag
    pub fn insert_tag(&mut self, name: impl Into<String>, tag: Arc<dyn Tag>) {
        self.tags.insert(name.into(), tag);
    }

    /// Removes a tag, returning whether it was registered
    pub fn remove_tag(&mut self, name: &str) -> bool {
        self.tags.remove(name).is_some()
    }

    pub fn tag(&self, name: &str) -> Option<Arc<dyn Tag>> {
        self.tags.get(name).cloned()
    }

    /// Adds or replaces a filter
    pub fn insert_filter(&mut self, name: impl Into<String>, filter: Arc<dyn Filter>) {
        self.filters.insert(name.into(), filter);
    }

    pub fn filter(&self, name: &str) -> Option<Arc<dyn Filter>> {
        self.filters.get(name).cloned()
    }

    /// Registered tag names, sorted
    pub fn tag_names(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.tags.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Registered filter names, sorted
    pub fn filter_names(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.filters.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("tags", &self.tag_names())
            .field("filters", &self.filter_names())
            .finish()
    }
}

/// A registry shared by an engine and its templates
///
/// Writers hold the lock for a single insert or removal, so a render never
/// sees a half-updated entry. Handlers are cloned out before they are called,
/// which lets a handler register further tags.
#[derive(Debug, Clone, Default)]
pub(crate) struct SharedRegistry(Arc<RwLock<Registry>>);

impl SharedRegistry {
    pub fn read(&self) -> RwLockReadGuard<'_, Registry> {
        self.0.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn write(&self) -> RwLockWriteGuard<'_, Registry> {
        self.0.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn tag(&self, name: &str) -> Option<Arc<dyn Tag>> {
        self.read().tag(name)
    }
}

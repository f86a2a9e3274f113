//! The engine facade
//!
//! An [`Engine`] owns a tag/filter registry and compiles templates. Templates
//! keep a handle on the registry rather than a copy of it, so tags registered
//! after a template was compiled are visible when it is rendered.

use std::sync::Arc;

use quill_parser::{Compiler, Node, tokenize};
use serde_json::Value;

use crate::{
    error::Result,
    options::Options,
    registry::{Filter, SharedRegistry, Tag, TagResult},
    template::Template,
};

/// Template engine
#[derive(Debug, Default)]
pub struct Engine {
    registry: SharedRegistry,
    compiler: Compiler,
    options: Options,
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: Options) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Registers a tag handler, replacing any tag of the same name
    ///
    /// ```rust
    /// let engine = quill::Engine::new();
    /// engine.register_tag("shout", |_, args, _| Ok(args.join(" ").to_uppercase()));
    /// assert_eq!(engine.render("{% shout hi there %}", &serde_json::json!({})).unwrap(), "HI THERE");
    /// ```
    pub fn register_tag<F>(&self, name: impl Into<String>, tag: F)
    where
        F: Fn(&Value, &[String], Option<&str>) -> TagResult + Send + Sync + 'static,
    {
        self.insert_tag(name, Arc::new(tag));
    }

    /// Registers a tag implemented as a [`Tag`]
    pub fn insert_tag(&self, name: impl Into<String>, tag: Arc<dyn Tag>) {
        let name = name.into();
        tracing::debug!("registering tag {}", name);
        self.registry.write().insert_tag(name, tag);
    }

    /// Removes a tag, returning whether it was registered
    pub fn unregister_tag(&self, name: &str) -> bool {
        self.registry.write().remove_tag(name)
    }

    pub fn has_tag(&self, name: &str) -> bool {
        self.registry.tag(name).is_some()
    }

    /// Registered tag names, sorted
    pub fn tag_names(&self) -> Vec<String> {
        self.registry
            .read()
            .tag_names()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// Registers a filter. Templates cannot apply filters yet.
    pub fn register_filter<F>(&self, name: impl Into<String>, filter: F)
    where
        F: Fn(&Value, &[String]) -> TagResult + Send + Sync + 'static,
    {
        self.insert_filter(name, Arc::new(filter));
    }

    /// Registers a filter implemented as a [`Filter`]
    pub fn insert_filter(&self, name: impl Into<String>, filter: Arc<dyn Filter>) {
        let name = name.into();
        tracing::debug!("registering filter {}", name);
        self.registry.write().insert_filter(name, filter);
    }

    pub fn filter(&self, name: &str) -> Option<Arc<dyn Filter>> {
        self.registry.read().filter(name)
    }

    pub fn has_filter(&self, name: &str) -> bool {
        self.filter(name).is_some()
    }

    /// Compiles a template
    pub fn compile(&self, src: &str) -> quill_parser::Result<Template> {
        let tokens = tokenize(src);
        let root = self.compiler.compile(&tokens)?;
        tracing::debug!(
            "compiled template of {} bytes: {} tokens, {} nodes",
            src.len(),
            tokens.len(),
            root.size()
        );
        Ok(self.template(root))
    }

    /// Binds a precompiled tree to this engine's registry
    pub fn template(&self, root: Node) -> Template {
        Template::new(root, self.registry.clone())
    }

    /// Compiles and renders in one step
    pub fn render(&self, src: &str, data: &Value) -> Result<String> {
        Ok(self.compile(src)?.render(data)?)
    }

    /// Compiles and renders against an empty object
    pub fn render_empty(&self, src: &str) -> Result<String> {
        Ok(self.compile(src)?.render_empty()?)
    }
}

//! Compiled templates and rendering
//!
//! A [`Template`] is a compiled [`Node`] tree plus a handle on the registry of
//! the engine that compiled it. Rendering walks the tree:
//!
//! - literals are written as is
//! - lookups write the value of a top-level data key, or nothing
//! - calls look the tag up by name; an unknown tag writes nothing, otherwise
//!   the tag is called with its literal arguments and, separately, its
//!   rendered body if it has one

use quill_parser::Node;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::{
    error::RenderError,
    registry::SharedRegistry,
    value::{lookup, write_value},
};

/// A compiled template, reusable across renders
#[derive(Debug, Clone)]
pub struct Template {
    root: Node,
    registry: SharedRegistry,
}

impl Template {
    pub(crate) fn new(root: Node, registry: SharedRegistry) -> Self {
        Self { root, registry }
    }

    /// The compiled tree
    pub fn node(&self) -> &Node {
        &self.root
    }

    /// Renders against `data`. Data that is not an object behaves as `{}`.
    pub fn render(&self, data: &Value) -> Result<String, RenderError> {
        let mut out = String::new();
        self.write(&self.root, data, &mut out)?;
        Ok(out)
    }

    /// Renders against an empty object
    pub fn render_empty(&self) -> Result<String, RenderError> {
        self.render(&Value::Object(Map::new()))
    }

    /// Renders against any serializable value
    pub fn render_serialize<T: Serialize + ?Sized>(&self, data: &T) -> Result<String, RenderError> {
        let data = serde_json::to_value(data)?;
        self.render(&data)
    }

    fn write(&self, node: &Node, data: &Value, out: &mut String) -> Result<(), RenderError> {
        match node {
            Node::Literal(text) => out.push_str(text),
            Node::Lookup(key) => {
                if let Some(value) = lookup(data, key) {
                    write_value(value, out);
                }
            }
            Node::Call { name, args, body } => {
                let Some(tag) = self.registry.tag(name) else {
                    tracing::trace!("no tag named {}, rendering nothing", name);
                    return Ok(());
                };
                let body = match body {
                    Some(body) => {
                        let mut rendered = String::new();
                        self.write(body, data, &mut rendered)?;
                        Some(rendered)
                    }
                    None => None,
                };
                let result = tag.call(data, args, body.as_deref()).map_err(|source| RenderError::Tag {
                    name: name.clone(),
                    source,
                })?;
                out.push_str(&result);
            }
            Node::Concat(nodes) => {
                for node in nodes {
                    self.write(node, data, out)?;
                }
            }
        }
        Ok(())
    }
}

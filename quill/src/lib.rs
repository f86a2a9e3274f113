//! A small template engine with late-bound tags
//!
//! ```rust
//! use serde_json::json;
//!
//! let engine = quill::Engine::new();
//! engine.register_tag("upper", |_, _, body| Ok(body.unwrap_or_default().to_uppercase()));
//!
//! let template = engine.compile("{{ greeting }}, {% upper %}{{ name }}{% endupper %}!").unwrap();
//! assert_eq!(template.render(&json!({"greeting": "Hello", "name": "Ada"})).unwrap(), "Hello, ADA!");
//! ```
//!
//! Templates can also be compiled at build time with [`str!`], which reports
//! syntax errors as compile errors.

extern crate self as quill;

mod engine;
mod error;
mod options;
mod registry;
mod template;
mod value;

use std::sync::LazyLock;

use serde_json::Value;

pub use engine::Engine;
pub use error::{BoxError, Error, RenderError, Result};
pub use options::Options;
pub use registry::{Filter, Registry, Tag, TagResult};
pub use template::Template;
pub use value::{stringify, write_value};

pub use quill_macros::quill_str as str;
/// Tokenizer, compiler and compiled tree
pub use quill_parser as parser;

static DEFAULT_ENGINE: LazyLock<Engine> = LazyLock::new(Engine::new);

/// A process-wide engine for callers that do not need their own
pub fn default_engine() -> &'static Engine {
    &DEFAULT_ENGINE
}

/// Compiles with the default engine
pub fn compile(src: &str) -> parser::Result<Template> {
    default_engine().compile(src)
}

/// Renders with the default engine
pub fn render(src: &str, data: &Value) -> Result<String> {
    default_engine().render(src, data)
}

/// Renders with the default engine against an empty object
pub fn render_empty(src: &str) -> Result<String> {
    default_engine().render_empty(src)
}

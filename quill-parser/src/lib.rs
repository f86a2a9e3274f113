// MIT License
//
// Copyright (c) 2024 Paul Tuckey
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

//! Template tokenizer and compiler
//!
//! This crate provides the parsing half of `quill`: it turns template text into
//! a [`Node`] tree that the `quill` crate renders against data. It is also used
//! by `quill-macros` to compile templates at build time.
//!
//! # Syntax
//!
//! - `{{ name }}` - value of the top-level key `name`, or nothing
//! - `{% tag arg1 arg2 %}` - call a registered tag with literal arguments
//! - `{% tag %}body{% endtag %}` - call a tag, passing the rendered body last
//! - `{# comment #}` - discarded
//!
//! Everything else is literal text, with carriage returns, tabs and newlines
//! removed.
//!
//! # Example
//!
//! ```rust
//! use quill_parser::{Compiler, Node};
//!
//! let node = Compiler::new().compile_str("{% upper %}hi{% endupper %}").unwrap();
//! assert_eq!(node, Node::Call {
//!     name: "upper".to_string(),
//!     args: vec![],
//!     body: Some(Box::new(Node::Literal("hi".to_string()))),
//! });
//! ```
//!
//! # Module Structure
//!
//! - `token.rs`: Token model
//! - `tokenizer.rs`: Character level state machine
//! - `compiler.rs`: Token to tree compilation
//! - `block.rs`: Block tag pairing
//! - `node.rs`: Compiled tree
//! - `error.rs`: Error types and handling

mod block;
pub mod compiler;
pub mod error;
pub mod node;
pub mod token;
pub mod tokenizer;

pub use block::MAX_DEPTH;
pub use compiler::Compiler;
pub use error::{ParseError, Result};
pub use node::Node;
pub use token::{Token, TokenKind};
pub use tokenizer::tokenize;

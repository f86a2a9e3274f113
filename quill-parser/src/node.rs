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

//! Compiled template tree
//!
//! Compiling a template produces a [`Node`] tree instead of generated source.
//! The tree is evaluated directly at render time against the data object and
//! the tag registry.

/// A node of a compiled template
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Literal text, written as is
    Literal(String),
    /// Existence-checked lookup of a top-level data key
    Lookup(String),
    /// Invocation of a tag by name
    Call {
        name: String,
        /// Literal arguments, never evaluated
        args: Vec<String>,
        /// Body captured between the open and close tags. When present, it is
        /// rendered and passed as an extra trailing argument.
        body: Option<Box<Node>>,
    },
    /// Ordered concatenation
    Concat(Vec<Node>),
}

impl Node {
    /// Joins fragments, avoiding a wrapper for a single fragment
    pub fn concat(mut nodes: Vec<Node>) -> Self {
        if nodes.len() == 1 {
            nodes.remove(0)
        } else {
            Node::Concat(nodes)
        }
    }

    /// The empty template
    pub fn empty() -> Self {
        Node::Concat(Vec::new())
    }

    /// Number of nodes in the tree, including this one
    pub fn size(&self) -> usize {
        match self {
            Node::Literal(_) | Node::Lookup(_) => 1,
            Node::Call { body, .. } => 1 + body.as_ref().map_or(0, |body| body.size()),
            Node::Concat(nodes) => 1 + nodes.iter().map(Node::size).sum::<usize>(),
        }
    }
}

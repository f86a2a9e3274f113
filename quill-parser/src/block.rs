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

//! Block tag pairing
//!
//! Block tags are paired with an explicit stack. `{% name args %}` pushes an
//! open block; every fragment compiled after it is collected into that
//! block's body. `{% endname %}` must match the innermost open block, which is
//! then popped and turned into a [`Node::Call`] carrying its body.
//!
//! Blocks still open at the end of the template are standalone tags: each
//! becomes a call without a body, followed in place by the fragments that were
//! collected after it.
//!
//! ```text
//! {% upper %}hi {{name}}{% endupper %}   -> Call(upper, body: "hi " + name)
//! a{% now %}b                            -> "a" + Call(now) + "b"
//! {% a %}{% endb %}                      -> error: mismatched close tag
//! ```

use crate::{
    error::{ParseError, Result},
    node::Node,
};

/// Deepest allowed nesting of closed block tags
///
/// Rendering and dropping a compiled tree recurse once per level. Blocks left
/// open become standalone calls and do not add a level.
pub const MAX_DEPTH: usize = 256;

/// An open block waiting for its close tag
struct OpenBlock {
    name: String,
    args: Vec<String>,
    body: Vec<Node>,
    /// Nesting depth of the deepest closed block in `body`
    depth: usize,
}

/// Fragments of the template being compiled, with the stack of open blocks
pub(crate) struct BlockStack {
    root: Vec<Node>,
    open_stack: Vec<OpenBlock>,
}

impl BlockStack {
    pub fn new() -> Self {
        Self {
            root: Vec::new(),
            open_stack: Vec::new(),
        }
    }

    /// Fragments of the innermost open block, or of the template itself
    fn fragments(&mut self) -> &mut Vec<Node> {
        match self.open_stack.last_mut() {
            Some(block) => &mut block.body,
            None => &mut self.root,
        }
    }

    /// Appends a fragment at the current depth
    pub fn push(&mut self, node: Node) {
        self.fragments().push(node);
    }

    /// Opens a block
    pub fn open(&mut self, name: &str, args: Vec<String>) {
        self.open_stack.push(OpenBlock {
            name: name.to_string(),
            args,
            body: Vec::new(),
            depth: 0,
        });
    }

    /// Closes the innermost block, which must be named `name`
    pub fn close(&mut self, name: &str) -> Result<()> {
        let OpenBlock {
            name: opened,
            args,
            body,
            depth,
        } = self
            .open_stack
            .pop()
            .ok_or_else(|| ParseError::unexpected_close(name))?;
        if opened != name {
            return Err(ParseError::mismatched(&opened, name));
        }
        let depth = depth + 1;
        if depth > MAX_DEPTH {
            return Err(ParseError::too_deep(MAX_DEPTH));
        }
        if let Some(parent) = self.open_stack.last_mut() {
            parent.depth = parent.depth.max(depth);
        }
        self.push(Node::Call {
            name: opened,
            args,
            body: Some(Box::new(Node::concat(body))),
        });
        Ok(())
    }

    /// Folds blocks left open into standalone calls and returns the template
    pub fn finish(mut self) -> Node {
        while let Some(OpenBlock {
            name, args, body, ..
        }) = self.open_stack.pop()
        {
            let fragments = self.fragments();
            fragments.push(Node::Call {
                name,
                args,
                body: None,
            });
            fragments.extend(body);
        }
        Node::concat(self.root)
    }
}

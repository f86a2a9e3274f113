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

//! Template compilation
//!
//! Turns the token sequence into a [`Node`] tree:
//!
//! - literal text has every `\r`, `\t` and `\n` removed
//! - `{{ name }}` becomes a [`Node::Lookup`] of the trimmed name
//! - `{% name a b %}` opens a block; `{% endname %}` closes the innermost
//!   open block, which must have the same name
//! - comments produce nothing
//!
//! Block tag arguments are split on single spaces and are always passed as
//! literal strings.
//!
//! # Examples
//!
//! ```rust
//! use quill_parser::{Compiler, Node};
//!
//! let compiler = Compiler::new();
//! let node = compiler.compile_str("Hello {{ name }}").unwrap();
//! assert_eq!(node, Node::Concat(vec![
//!     Node::Literal("Hello ".to_string()),
//!     Node::Lookup("name".to_string()),
//! ]));
//! ```

use regex::Regex;

use crate::{
    block::BlockStack,
    error::{ParseError, Result},
    node::Node,
    token::{Token, TokenKind},
    tokenizer::tokenize,
};

/// Main compiler implementation
#[derive(Debug, Clone)]
pub struct Compiler {
    /// Regex for stripping whitespace from literal text
    clean: Regex,
}

impl Default for Compiler {
    fn default() -> Self {
        Self::new()
    }
}

impl Compiler {
    /// Creates a new compiler
    pub fn new() -> Self {
        Self {
            clean: Regex::new(r"[\r\t\n]").unwrap(),
        }
    }

    /// Compiles a block tag
    fn block(&self, text: &str, stack: &mut BlockStack) -> Result<()> {
        let mut parts = text.trim().split(' ');
        let name = parts
            .next()
            .filter(|name| !name.is_empty())
            .ok_or_else(ParseError::missing_tag_name)?;
        match name.strip_prefix("end") {
            Some(opened) => stack.close(opened),
            None => {
                stack.open(name, parts.map(str::to_string).collect());
                Ok(())
            }
        }
    }

    /// Compiles a token sequence
    pub fn compile(&self, tokens: &[Token]) -> Result<Node> {
        let mut stack = BlockStack::new();
        for token in tokens {
            match token.kind {
                TokenKind::Literal => {
                    let text = self.clean.replace_all(&token.text, "");
                    if !text.is_empty() {
                        stack.push(Node::Literal(text.into_owned()));
                    }
                }
                TokenKind::Variable => stack.push(Node::Lookup(token.text.trim().to_string())),
                TokenKind::Block => self.block(&token.text, &mut stack)?,
                TokenKind::Comment => (),
            }
        }
        Ok(stack.finish())
    }

    /// Tokenizes and compiles a template
    pub fn compile_str(&self, src: &str) -> Result<Node> {
        self.compile(&tokenize(src))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compile(src: &str) -> Node {
        Compiler::new().compile_str(src).unwrap()
    }

    fn literal(text: &str) -> Node {
        Node::Literal(text.to_string())
    }

    #[test]
    fn it_works() {
        assert_eq!(
            compile("Hello {{name}}!"),
            Node::Concat(vec![
                literal("Hello "),
                Node::Lookup("name".to_string()),
                literal("!")
            ])
        );
    }

    #[test]
    fn strips_whitespace_from_literals() {
        assert_eq!(compile("a\nb\tc\rd"), literal("abcd"));
        assert_eq!(compile("\n\t"), Node::empty());
    }

    #[test]
    fn trims_variables() {
        assert_eq!(compile("{{  user.name \t}}"), Node::Lookup("user.name".into()));
    }

    #[test]
    fn comments_produce_nothing() {
        assert_eq!(compile("a{# note #}b"), Node::Concat(vec![literal("a"), literal("b")]));
    }

    #[test]
    fn standalone_tag_with_args() {
        assert_eq!(
            compile("{% greet Ada  Lovelace %}"),
            Node::Call {
                name: "greet".to_string(),
                args: vec!["Ada".to_string(), String::new(), "Lovelace".to_string()],
                body: None
            }
        );
    }

    #[test]
    fn block_captures_body() {
        assert_eq!(
            compile("{% upper x %}hi {{name}}{% endupper %}!"),
            Node::Concat(vec![
                Node::Call {
                    name: "upper".to_string(),
                    args: vec!["x".to_string()],
                    body: Some(Box::new(Node::Concat(vec![
                        literal("hi "),
                        Node::Lookup("name".to_string())
                    ])))
                },
                literal("!")
            ])
        );
    }

    #[test]
    fn empty_block_body() {
        assert_eq!(
            compile("{% upper %}{% endupper %}"),
            Node::Call {
                name: "upper".to_string(),
                args: Vec::new(),
                body: Some(Box::new(Node::empty()))
            }
        );
    }

    #[test]
    fn tag_name_is_required() {
        let err = Compiler::new().compile_str("a{%   %}b").unwrap_err();
        assert_eq!(err.to_string(), "tag name is required");
    }

    #[test]
    fn unexpected_close() {
        let err = Compiler::new().compile_str("{% endupper %}").unwrap_err();
        assert_eq!(err.to_string(), "unexpected {% endupper %} with no open block");
    }

    #[test]
    fn mismatched_close() {
        let err = Compiler::new()
            .compile_str("{% upper %}{% lower %}x{% endupper %}")
            .unwrap_err();
        assert_eq!(err.to_string(), "mismatched {% endupper %}, expected {% endlower %}");
    }

    #[test]
    fn deep_nesting_is_an_error() {
        let depth = 20_000;
        let src = format!("{}x{}", "{% a %}".repeat(depth), "{% enda %}".repeat(depth));
        let err = Compiler::new().compile_str(&src).unwrap_err();
        assert_eq!(err.to_string(), "blocks nested deeper than 256");
    }

    #[test]
    fn nesting_up_to_the_limit_compiles() {
        let src = format!(
            "{}x{}",
            "{% a %}".repeat(crate::block::MAX_DEPTH),
            "{% enda %}".repeat(crate::block::MAX_DEPTH)
        );
        assert!(Compiler::new().compile_str(&src).is_ok());
    }

    #[test]
    fn many_standalone_tags_compile() {
        let node = compile(&"{% now %}".repeat(2_000));
        assert_eq!(node.size(), 2_001);
    }

    #[test]
    fn comments_are_not_compiled_as_tags() {
        assert_eq!(compile("{# {% endupper %} #}"), Node::empty());
    }
}

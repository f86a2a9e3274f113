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

//! Token model for the template tokenizer
//!
//! A template is split into a flat, ordered sequence of tokens. The order is
//! significant: it is both the order in which output is concatenated and the
//! order in which block tags nest.

/// Kinds of tokens produced by the tokenizer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Plain text outside any delimiter pair
    Literal,
    /// `{{ name }}`
    Variable,
    /// `{% name args %}` or `{% endname %}`
    Block,
    /// `{# ... #}`
    Comment,
}

/// A token read from a template
///
/// `text` is the raw content between the delimiters. Variable and block text
/// is not trimmed here; the compiler does that.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    pub fn literal(text: impl Into<String>) -> Self {
        Self::new(TokenKind::Literal, text)
    }

    pub fn variable(text: impl Into<String>) -> Self {
        Self::new(TokenKind::Variable, text)
    }

    pub fn block(text: impl Into<String>) -> Self {
        Self::new(TokenKind::Block, text)
    }

    pub fn comment(text: impl Into<String>) -> Self {
        Self::new(TokenKind::Comment, text)
    }
}

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

//! Template tokenization
//!
//! The tokenizer walks the template one character at a time, driven by a small
//! state machine. Only four characters are significant: `{`, `}`, `%` and `#`.
//!
//! - `{{ name }}` produces a [`TokenKind::Variable`]
//! - `{% name args %}` produces a [`TokenKind::Block`]
//! - `{# text #}` produces a [`TokenKind::Comment`]
//! - everything else is collected into [`TokenKind::Literal`] tokens
//!
//! A lone `{` or `}` that does not complete a delimiter is literal text, and
//! unterminated constructs at the end of the input are emitted as literal text
//! with their opening delimiter restored, so no characters are lost.
//!
//! # Examples
//!
//! ```rust
//! use quill_parser::tokenizer::tokenize;
//! use quill_parser::token::Token;
//!
//! let tokens = tokenize("Hello {{ name }}!");
//! assert_eq!(tokens, vec![
//!     Token::literal("Hello "),
//!     Token::variable(" name "),
//!     Token::literal("!"),
//! ]);
//! ```

use crate::token::{Token, TokenKind};

/// Tokenizer states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Outside any delimiter
    Default,
    /// Seen a `{` that may start a delimiter
    CurlyOpen,
    /// Inside `{% ... `
    BlockOpen,
    /// Inside `{% ... %`, waiting for `}`
    BlockClose,
    /// Inside `{{ ... `
    VarOpen,
    /// Inside `{{ ... }`, waiting for the second `}`
    VarClose,
    /// Inside `{# ... `
    CommentOpen,
    /// Inside `{# ... #`, waiting for `}`
    CommentClose,
}

struct Tokenizer {
    state: State,
    buffer: String,
    tokens: Vec<Token>,
}

impl Tokenizer {
    fn new() -> Self {
        Self {
            state: State::Default,
            buffer: String::new(),
            tokens: Vec::new(),
        }
    }

    /// Emits the buffer as a token of the given kind
    fn emit(&mut self, kind: TokenKind) {
        let text = std::mem::take(&mut self.buffer);
        self.tokens.push(Token::new(kind, text));
    }

    /// Emits pending literal text, if there is any
    fn flush_literal(&mut self) {
        if !self.buffer.is_empty() {
            self.emit(TokenKind::Literal);
        }
    }

    /// Restores characters that turned out not to be a delimiter
    fn restore(&mut self, skipped: char, c: char) {
        self.buffer.push(skipped);
        self.buffer.push(c);
    }

    fn step(&mut self, c: char) {
        use State::*;
        self.state = match (self.state, c) {
            (Default, '{') => CurlyOpen,
            (Default, c) => {
                self.buffer.push(c);
                Default
            }
            (CurlyOpen, '{') => {
                self.flush_literal();
                VarOpen
            }
            (CurlyOpen, '%') => {
                self.flush_literal();
                BlockOpen
            }
            (CurlyOpen, '#') => {
                self.flush_literal();
                CommentOpen
            }
            (CurlyOpen, c) => {
                self.restore('{', c);
                Default
            }
            (VarOpen, '}') => VarClose,
            (VarClose, '}') => {
                self.emit(TokenKind::Variable);
                Default
            }
            (VarClose, c) => {
                self.restore('}', c);
                VarOpen
            }
            (BlockOpen, '%') => BlockClose,
            (BlockClose, '}') => {
                self.emit(TokenKind::Block);
                Default
            }
            (BlockClose, '%') => {
                self.buffer.push('%');
                BlockClose
            }
            (BlockClose, c) => {
                self.restore('%', c);
                BlockOpen
            }
            (CommentOpen, '#') => CommentClose,
            (CommentClose, '}') => {
                self.emit(TokenKind::Comment);
                Default
            }
            (CommentClose, '#') => {
                self.buffer.push('#');
                CommentClose
            }
            (CommentClose, c) => {
                self.restore('#', c);
                CommentOpen
            }
            (open @ (VarOpen | BlockOpen | CommentOpen), c) => {
                self.buffer.push(c);
                open
            }
        };
    }

    /// Flushes whatever is left, putting back the delimiters of an
    /// unterminated construct
    fn finish(mut self) -> Vec<Token> {
        let (open, close) = match self.state {
            State::Default => ("", ""),
            State::CurlyOpen => ("{", ""),
            State::VarOpen => ("{{", ""),
            State::VarClose => ("{{", "}"),
            State::BlockOpen => ("{%", ""),
            State::BlockClose => ("{%", "%"),
            State::CommentOpen => ("{#", ""),
            State::CommentClose => ("{#", "#"),
        };
        self.buffer.insert_str(0, open);
        self.buffer.push_str(close);
        self.flush_literal();
        self.tokens
    }
}

/// Splits a template into tokens. Never fails.
pub fn tokenize(src: &str) -> Vec<Token> {
    let mut tokenizer = Tokenizer::new();
    for c in src.chars() {
        tokenizer.step(c);
    }
    tokenizer.finish()
}

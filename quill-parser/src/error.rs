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

//! Error handling for the template compiler
//!
//! Tokenizing never fails. Compiling fails only for malformed block tags: a
//! tag without a name, a close tag with nothing open, a close tag that does
//! not match the innermost open tag, or blocks nested past
//! [`MAX_DEPTH`](crate::MAX_DEPTH).

use std::{error::Error, fmt::Display};

/// Error type for template compilation failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub(crate) message: String,
}

impl ParseError {
    /// A block tag with no name, e.g. `{% %}`
    pub(crate) fn missing_tag_name() -> Self {
        Self {
            message: "tag name is required".to_string(),
        }
    }

    /// A close tag with no open block
    pub(crate) fn unexpected_close(name: &str) -> Self {
        Self {
            message: format!("unexpected {{% end{} %}} with no open block", name),
        }
    }

    /// A close tag that does not match the innermost open block
    pub(crate) fn mismatched(open: &str, close: &str) -> Self {
        Self {
            message: format!(
                "mismatched {{% end{} %}}, expected {{% end{} %}}",
                close, open
            ),
        }
    }

    /// More block tags open at once than the compiler allows
    pub(crate) fn too_deep(limit: usize) -> Self {
        Self {
            message: format!("blocks nested deeper than {}", limit),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl Error for ParseError {}

/// Result type for template compilation
pub type Result<T> = std::result::Result<T, ParseError>;

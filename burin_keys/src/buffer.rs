// Copyright 2025 the Burin Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Numeric edit buffer: accumulate typed characters into a parseable value.
//!
//! ## Usage
//!
//! 1) Start with an empty [`NumericBuffer`] when an edit session begins.
//! 2) Feed accepted characters with [`NumericBuffer::push`]; remove with
//!    [`NumericBuffer::backspace`].
//! 3) On commit, call [`NumericBuffer::commit`] to parse the entered value.
//!
//! ## Minimal example
//!
//! ```
//! use burin_keys::buffer::NumericBuffer;
//!
//! let mut buf = NumericBuffer::new();
//! assert!(buf.push('-'));
//! assert!(buf.push('2'));
//! assert!(buf.push('.'));
//! assert!(buf.push('5'));
//! assert!(!buf.push('.')); // second decimal point rejected
//! assert_eq!(buf.commit(), Some(-2.5));
//! ```

use alloc::string::String;

/// Accumulates a numeric value typed one character at a time.
///
/// Accepts ASCII digits, at most one decimal point, and a leading minus sign.
/// The buffer never holds characters that could not be part of a valid
/// number, but an incomplete entry (empty, `"-"`, `"."`) still commits to
/// `None`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NumericBuffer {
    text: String,
}

impl NumericBuffer {
    /// Creates an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attempts to append a character, returning whether it was accepted.
    pub fn push(&mut self, c: char) -> bool {
        let accept = match c {
            '0'..='9' => true,
            '.' => !self.text.contains('.'),
            '-' => self.text.is_empty(),
            _ => false,
        };
        if accept {
            self.text.push(c);
        }
        accept
    }

    /// Removes the most recently entered character, returning whether one was removed.
    pub fn backspace(&mut self) -> bool {
        self.text.pop().is_some()
    }

    /// Discards the entire entry.
    pub fn clear(&mut self) {
        self.text.clear();
    }

    /// Returns the raw entered text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns `true` if nothing has been entered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Parses the entered text, or `None` for an incomplete entry.
    #[must_use]
    pub fn commit(&self) -> Option<f64> {
        self.text.parse().ok()
    }
}

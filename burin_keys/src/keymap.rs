// Copyright 2025 the Burin Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Key classification: map raw keys to shortcut, focus, or edit routing.
//!
//! ## Usage
//!
//! 1) Build a [`KeyMap`] with the tool's shortcut characters (if any).
//! 2) On each key event, call [`KeyMap::route`] to obtain a [`KeyAction`].
//! 3) Let the controller act on the decision: invoke a shortcut hook, cycle
//!    focus, or forward the key to the focused parameter control.
//!
//! ## Minimal example
//!
//! ```
//! use burin_keys::keymap::{Key, KeyAction, KeyMap};
//!
//! let map = KeyMap::new(Some('m'), None);
//! assert_eq!(map.route(Key::Char('M')), KeyAction::FirstShortcut);
//! assert_eq!(map.route(Key::Tab), KeyAction::CycleFocus);
//! assert_eq!(map.route(Key::Char('5')), KeyAction::Edit(Key::Char('5')));
//! assert_eq!(map.route(Key::Char('q')), KeyAction::Ignored);
//! ```

/// A keyboard key as seen by the parameter-editing layer.
///
/// This is deliberately minimal: only the keys that participate in the
/// on-view editing protocol are represented. Toolkit-specific key events are
/// converted to this type at the integration boundary.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Key {
    /// A printable character.
    Char(char),
    /// Tab, used to cycle focus between on-view parameters.
    Tab,
    /// Backspace, removes the last entered character of an edit.
    Backspace,
    /// Enter/Return, commits the current edit.
    Enter,
    /// Escape, discards the current edit.
    Escape,
}

/// The routing decision for a key.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// Invoke the tool's first shortcut hook.
    FirstShortcut,
    /// Invoke the tool's second shortcut hook.
    SecondShortcut,
    /// Move keyboard focus to the next eligible on-view parameter.
    CycleFocus,
    /// Forward the key to the focused parameter control's edit session.
    Edit(Key),
    /// The key is not part of the editing protocol.
    Ignored,
}

/// Per-tool key routing table.
///
/// Shortcut characters are matched case-insensitively and take precedence
/// over edit characters, so a tool that binds a digit as a shortcut shadows
/// that digit for numeric entry.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct KeyMap {
    first_shortcut: Option<char>,
    second_shortcut: Option<char>,
}

impl KeyMap {
    /// Creates a routing table with the given shortcut characters.
    #[must_use]
    pub fn new(first_shortcut: Option<char>, second_shortcut: Option<char>) -> Self {
        Self {
            first_shortcut,
            second_shortcut,
        }
    }

    /// Classifies a key into a routing decision.
    #[must_use]
    pub fn route(&self, key: Key) -> KeyAction {
        match key {
            Key::Tab => KeyAction::CycleFocus,
            Key::Char(c) => {
                if self.matches(self.first_shortcut, c) {
                    KeyAction::FirstShortcut
                } else if self.matches(self.second_shortcut, c) {
                    KeyAction::SecondShortcut
                } else if c.is_ascii_digit() || c == '.' || c == '-' {
                    KeyAction::Edit(key)
                } else {
                    KeyAction::Ignored
                }
            }
            Key::Backspace | Key::Enter | Key::Escape => KeyAction::Edit(key),
        }
    }

    fn matches(&self, shortcut: Option<char>, c: char) -> bool {
        shortcut.is_some_and(|s| s.eq_ignore_ascii_case(&c))
    }
}

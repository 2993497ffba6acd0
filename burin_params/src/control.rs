// Copyright 2025 the Burin Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Parameter control lifecycle and a framework-free reference implementation.
//!
//! ## Usage
//!
//! A controller drives each control through a fixed lifecycle:
//!
//! 1) [`ParameterControl::activate`] when the control's construction state
//!    becomes reachable, [`ParameterControl::deactivate`] when it is not.
//! 2) [`ParameterControl::start_edit`] / [`ParameterControl::stop_edit`]
//!    bracket an in-place edit session.
//! 3) [`ParameterControl::input_key`] feeds keys into the active session; a
//!    `Some` return is a committed value the controller must process.
//! 4) [`ParameterControl::set_color`] and [`ParameterControl::set_anchor`]
//!    keep the on-canvas presentation in sync.
//!
//! ## Minimal example
//!
//! ```
//! use burin_keys::keymap::Key;
//! use burin_params::control::{OverlayParameter, ParameterControl};
//!
//! let mut p = OverlayParameter::new();
//! p.activate();
//! p.start_edit(0.0);
//! assert_eq!(p.input_key(Key::Char('4')), None);
//! assert_eq!(p.input_key(Key::Char('2')), None);
//! assert_eq!(p.input_key(Key::Enter), Some(42.0));
//! assert_eq!(p.value(), 42.0);
//! ```

use burin_keys::buffer::NumericBuffer;
use burin_keys::keymap::Key;
use kurbo::Point;
use peniko::Color;

use crate::color::ColorPolicy;

/// One editable numeric value anchored to a canvas position.
///
/// Implementations own their presentation (label, spinbox, 3D datum text);
/// the controller owns when each lifecycle step happens. Every method must be
/// safe to call in any order — a control that is asked to stop an edit it
/// never started simply does nothing.
pub trait ParameterControl: core::fmt::Debug {
    /// Makes the control visible and eligible for input.
    fn activate(&mut self);

    /// Hides the control and withdraws it from input.
    fn deactivate(&mut self);

    /// Returns whether the control is currently active.
    fn is_active(&self) -> bool;

    /// Begins an in-place edit session showing `initial`.
    fn start_edit(&mut self, initial: f64);

    /// Ends any in-place edit session without committing.
    fn stop_edit(&mut self);

    /// Returns whether an edit session is in progress.
    fn is_editing(&self) -> bool;

    /// Grabs keyboard focus for the control.
    fn grab_focus(&mut self);

    /// Paints the control with the given policy color.
    fn set_color(&mut self, color: Color);

    /// Anchors the control to a canvas segment (measured-from, measured-to).
    fn set_anchor(&mut self, from: Point, to: Point);

    /// Feeds a key into the active edit session.
    ///
    /// Returns `Some(value)` when the key completed the edit (for example
    /// Enter on a parseable entry); the controller routes that value through
    /// its value-changed path. Keys outside an edit session are ignored.
    fn input_key(&mut self, key: Key) -> Option<f64>;

    /// Returns the control's current value.
    fn value(&self) -> f64;
}

/// Reference [`ParameterControl`]: a plain state holder with no rendering.
///
/// Useful for tests, headless integrations, and as a template for toolkit
/// bindings. Editing is backed by a [`NumericBuffer`]; Escape clears the
/// entry, Enter commits it.
#[derive(Clone, Debug)]
pub struct OverlayParameter {
    active: bool,
    editing: bool,
    has_focus: bool,
    value: f64,
    color: Color,
    anchor: (Point, Point),
    buffer: NumericBuffer,
}

impl OverlayParameter {
    /// Creates an inactive parameter with the default inactive color.
    #[must_use]
    pub fn new() -> Self {
        Self::with_color(ColorPolicy::DEFAULT_INACTIVE)
    }

    /// Creates an inactive parameter painted with `color`.
    #[must_use]
    pub fn with_color(color: Color) -> Self {
        Self {
            active: false,
            editing: false,
            has_focus: false,
            value: 0.0,
            color,
            anchor: (Point::ZERO, Point::ZERO),
            buffer: NumericBuffer::new(),
        }
    }

    /// Returns whether the control holds keyboard focus.
    #[must_use]
    pub fn has_focus(&self) -> bool {
        self.has_focus
    }

    /// Releases keyboard focus.
    pub fn release_focus(&mut self) {
        self.has_focus = false;
    }

    /// Returns the current presentation color.
    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Returns the current anchor segment.
    #[must_use]
    pub fn anchor(&self) -> (Point, Point) {
        self.anchor
    }

    /// Returns the text entered so far in the active edit session.
    #[must_use]
    pub fn entry(&self) -> &str {
        self.buffer.as_str()
    }
}

impl Default for OverlayParameter {
    fn default() -> Self {
        Self::new()
    }
}

impl ParameterControl for OverlayParameter {
    fn activate(&mut self) {
        self.active = true;
    }

    fn deactivate(&mut self) {
        self.active = false;
        self.has_focus = false;
    }

    fn is_active(&self) -> bool {
        self.active
    }

    fn start_edit(&mut self, initial: f64) {
        self.editing = true;
        self.value = initial;
        self.buffer.clear();
    }

    fn stop_edit(&mut self) {
        self.editing = false;
        self.buffer.clear();
    }

    fn is_editing(&self) -> bool {
        self.editing
    }

    fn grab_focus(&mut self) {
        self.has_focus = true;
    }

    fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    fn set_anchor(&mut self, from: Point, to: Point) {
        self.anchor = (from, to);
    }

    fn input_key(&mut self, key: Key) -> Option<f64> {
        if !self.editing {
            return None;
        }
        match key {
            Key::Char(c) => {
                self.buffer.push(c);
                None
            }
            Key::Backspace => {
                self.buffer.backspace();
                None
            }
            Key::Escape => {
                self.buffer.clear();
                None
            }
            Key::Enter => {
                let committed = self.buffer.commit();
                if let Some(value) = committed {
                    self.value = value;
                }
                committed
            }
            Key::Tab => None,
        }
    }

    fn value(&self) -> f64 {
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lifecycle_flags_track_calls() {
        let mut p = OverlayParameter::new();
        assert!(!p.is_active());
        p.activate();
        assert!(p.is_active());
        p.start_edit(1.5);
        assert!(p.is_editing());
        assert_eq!(p.value(), 1.5);
        p.stop_edit();
        assert!(!p.is_editing());
        p.deactivate();
        assert!(!p.is_active());
    }

    #[test]
    fn deactivate_drops_focus() {
        let mut p = OverlayParameter::new();
        p.activate();
        p.grab_focus();
        assert!(p.has_focus());
        p.deactivate();
        assert!(!p.has_focus());
    }

    #[test]
    fn enter_commits_entered_value() {
        let mut p = OverlayParameter::new();
        p.start_edit(0.0);
        p.input_key(Key::Char('1'));
        p.input_key(Key::Char('.'));
        p.input_key(Key::Char('5'));
        assert_eq!(p.input_key(Key::Enter), Some(1.5));
        assert_eq!(p.value(), 1.5);
    }

    #[test]
    fn enter_on_empty_entry_commits_nothing() {
        let mut p = OverlayParameter::new();
        p.start_edit(3.0);
        assert_eq!(p.input_key(Key::Enter), None);
        assert_eq!(p.value(), 3.0);
    }

    #[test]
    fn escape_discards_entry() {
        let mut p = OverlayParameter::new();
        p.start_edit(0.0);
        p.input_key(Key::Char('9'));
        p.input_key(Key::Escape);
        assert_eq!(p.input_key(Key::Enter), None);
        assert_eq!(p.entry(), "");
    }

    #[test]
    fn keys_outside_edit_session_are_ignored() {
        let mut p = OverlayParameter::new();
        assert_eq!(p.input_key(Key::Char('7')), None);
        assert_eq!(p.input_key(Key::Enter), None);
        assert_eq!(p.entry(), "");
    }

    #[test]
    fn start_edit_clears_previous_entry() {
        let mut p = OverlayParameter::new();
        p.start_edit(0.0);
        p.input_key(Key::Char('8'));
        p.start_edit(0.0);
        assert_eq!(p.entry(), "");
    }
}

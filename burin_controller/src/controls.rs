// Copyright 2025 the Burin Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Slot, focus, and cursor bookkeeping for on-view parameters.
//!
//! [`Controls`] owns the ordered slot sequence, the single focus token, and
//! the two cursor positions (last raw, last enforced). It is pure
//! bookkeeping over a control type `C` and a construction-state type `S`:
//! the current state and terminal flag are passed in by the caller, so the
//! type never touches the handler.
//!
//! Every index-based operation is bounds-checked and degrades to a no-op;
//! none of these entry points can fail.

use alloc::boxed::Box;
use alloc::vec::Vec;

use burin_keys::keymap::Key;
use burin_params::color::ColorPolicy;
use burin_params::control::ParameterControl;
use kurbo::Point;
use peniko::Color;

/// Creates one control for a slot, given its index and the inactive policy
/// color the control starts out painted with.
pub type ControlFactory<C> = Box<dyn FnMut(usize, Color) -> C>;

/// One on-view parameter: a control bound to a construction state.
#[derive(Debug)]
pub struct ParameterSlot<C, S> {
    index: usize,
    control: C,
    state: S,
    is_set: bool,
    value: f64,
}

impl<C: ParameterControl, S: Copy> ParameterSlot<C, S> {
    /// Returns the slot's position in the sequence.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the construction state this slot belongs to.
    #[must_use]
    pub fn state(&self) -> S {
        self.state
    }

    /// Returns whether the user explicitly committed a value to this slot.
    #[must_use]
    pub fn is_set(&self) -> bool {
        self.is_set
    }

    /// Returns the last committed value (0.0 until one is committed).
    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Returns the bound control.
    #[must_use]
    pub fn control(&self) -> &C {
        &self.control
    }

    /// Returns the bound control mutably.
    pub fn control_mut(&mut self) -> &mut C {
        &mut self.control
    }
}

/// Slot sequence, focus token, and cursor positions.
pub struct Controls<C, S> {
    slots: Vec<ParameterSlot<C, S>>,
    focused: Option<usize>,
    prev_cursor: Point,
    last_enforced: Point,
    colors: ColorPolicy,
    target_count: usize,
    first_move_done: bool,
    factory: ControlFactory<C>,
}

impl<C, S> Controls<C, S>
where
    C: ParameterControl,
    S: Copy + PartialEq + PartialOrd,
{
    pub(crate) fn new(
        colors: ColorPolicy,
        target_count: usize,
        factory: ControlFactory<C>,
    ) -> Self {
        Self {
            slots: Vec::new(),
            focused: None,
            prev_cursor: Point::ZERO,
            last_enforced: Point::ZERO,
            colors,
            target_count,
            first_move_done: false,
            factory,
        }
    }

    /// Destroys all slots and recreates `target_count` fresh ones.
    ///
    /// `state_of` supplies the construction state each slot index belongs
    /// to. The focus token moves to slot 0 (or clears when the sequence is
    /// empty); controls start inactive, unset, painted with the inactive
    /// policy color.
    pub fn rebuild(&mut self, mut state_of: impl FnMut(usize) -> S) {
        self.slots.clear();
        let inactive = self.colors.inactive();
        for index in 0..self.target_count {
            self.slots.push(ParameterSlot {
                index,
                control: (self.factory)(index, inactive),
                state: state_of(index),
                is_set: false,
                value: 0.0,
            });
        }
        self.focused = if self.slots.is_empty() { None } else { Some(0) };
    }

    /// Returns the number of slots.
    #[must_use]
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Returns whether the slot sequence is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Returns the slots in index order.
    #[must_use]
    pub fn slots(&self) -> &[ParameterSlot<C, S>] {
        &self.slots
    }

    /// Returns one slot, if the index is in range.
    #[must_use]
    pub fn slot(&self, index: usize) -> Option<&ParameterSlot<C, S>> {
        self.slots.get(index)
    }

    /// Returns one slot mutably, if the index is in range.
    pub fn slot_mut(&mut self, index: usize) -> Option<&mut ParameterSlot<C, S>> {
        self.slots.get_mut(index)
    }

    /// Returns the slot count the next [`rebuild`](Self::rebuild) will
    /// produce.
    #[must_use]
    pub fn target_count(&self) -> usize {
        self.target_count
    }

    pub(crate) fn set_target_count(&mut self, count: usize) {
        self.target_count = count;
    }

    /// Returns the index holding the focus token, if any.
    #[must_use]
    pub fn focused(&self) -> Option<usize> {
        self.focused
    }

    /// Returns the resolved policy colors.
    #[must_use]
    pub fn colors(&self) -> &ColorPolicy {
        &self.colors
    }

    /// Returns the last raw pointer position recorded on the enforcement
    /// path.
    #[must_use]
    pub fn prev_cursor(&self) -> Point {
        self.prev_cursor
    }

    /// Returns the last control-enforced position.
    #[must_use]
    pub fn last_enforced(&self) -> Point {
        self.last_enforced
    }

    pub(crate) fn record_raw(&mut self, pos: Point) {
        self.prev_cursor = pos;
    }

    pub(crate) fn record_enforced(&mut self, pos: Point) {
        self.last_enforced = pos;
    }

    /// Returns whether a pointer movement has occurred since the last reset.
    #[must_use]
    pub fn first_move_done(&self) -> bool {
        self.first_move_done
    }

    pub(crate) fn set_first_move_done(&mut self, done: bool) {
        self.first_move_done = done;
    }

    /// Activates the slots belonging to `current` and winds down the rest.
    ///
    /// Slots outside the current state stop editing and deactivate unless
    /// they hold a committed value and the tool is not terminal. The first
    /// slot of the current state (in index order) receives the focus token;
    /// all of them activate, reset their anchor, and restart editing at
    /// zero.
    pub fn apply_mode_activation(&mut self, current: S, terminal: bool) {
        let mut first_of_state = true;
        self.focused = None;
        for slot in &mut self.slots {
            if slot.state != current {
                slot.control.stop_edit();
                if !slot.is_set || terminal {
                    slot.control.deactivate();
                }
            } else {
                if first_of_state {
                    self.focused = Some(slot.index);
                    first_of_state = false;
                }
                slot.control.activate();
                // Anchor and value are overridden by the movement replay the
                // mode change triggers.
                slot.control.set_anchor(Point::ZERO, Point::ZERO);
                slot.control.start_edit(0.0);
            }
        }
    }

    /// Gives keyboard focus to a slot and records the focus token.
    ///
    /// Out-of-range indices are ignored.
    pub fn focus_slot(&mut self, index: usize) {
        if let Some(slot) = self.slots.get_mut(index) {
            slot.control.grab_focus();
            self.focused = Some(index);
        }
    }

    /// Advances the focus token to the next slot belonging to `current`.
    ///
    /// The scan starts after the focused slot, wrapping to the front once
    /// when it begins past the end. With no eligible slot the token stays
    /// where it is.
    pub fn pass_focus_to_next(&mut self, current: S) {
        let mut index = self.focused.map_or(0, |i| i + 1);
        if index >= self.slots.len() {
            index = 0;
        }
        while index < self.slots.len() {
            if self.slots[index].state == current {
                self.focus_slot(index);
                break;
            }
            index += 1;
        }
    }

    /// Records a committed value on a slot and paints it with the active
    /// color.
    ///
    /// Returns `false` (and does nothing) for an out-of-range index.
    pub fn commit_value(&mut self, index: usize, value: f64) -> bool {
        let active = self.colors.active();
        let Some(slot) = self.slots.get_mut(index) else {
            return false;
        };
        slot.is_set = true;
        slot.value = value;
        slot.control.set_color(active);
        true
    }

    /// Releases a slot back to pointer-mandated values: clears the committed
    /// flag and repaints with the inactive color.
    pub fn unset_slot(&mut self, index: usize) {
        let inactive = self.colors.inactive();
        if let Some(slot) = self.slots.get_mut(index) {
            slot.is_set = false;
            slot.control.set_color(inactive);
        }
    }

    /// Returns the committed value of a slot, if one was explicitly set.
    #[must_use]
    pub fn committed(&self, index: usize) -> Option<f64> {
        let slot = self.slots.get(index)?;
        slot.is_set.then_some(slot.value)
    }

    /// Returns whether a slot exists and belongs to the current state.
    #[must_use]
    pub fn is_slot_of_current_state(&self, index: usize, current: S) -> bool {
        self.slots.get(index).is_some_and(|s| s.state == current)
    }

    /// Returns whether a slot exists and belongs to an earlier state.
    ///
    /// The protocol never regresses the state machine on its own; this query
    /// exists for specializations that decide to.
    #[must_use]
    pub fn is_slot_of_previous_state(&self, index: usize, current: S) -> bool {
        self.slots.get(index).is_some_and(|s| s.state < current)
    }

    pub(crate) fn input_to_focused(&mut self, key: Key) -> Option<f64> {
        let index = self.focused?;
        self.slots.get_mut(index)?.control.input_key(key)
    }
}

impl<C, S> core::fmt::Debug for Controls<C, S>
where
    C: ParameterControl,
    S: core::fmt::Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Controls")
            .field("slots", &self.slots)
            .field("focused", &self.focused)
            .field("prev_cursor", &self.prev_cursor)
            .field("last_enforced", &self.last_enforced)
            .field("colors", &self.colors)
            .field("target_count", &self.target_count)
            .field("first_move_done", &self.first_move_done)
            .finish_non_exhaustive()
    }
}

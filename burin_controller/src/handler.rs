// Copyright 2025 the Burin Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Handler capability traits: what the controller needs from a tool.
//!
//! The construction handler owns the actual tool state machine, preselection,
//! and cursor; the controller only calls the primitives below and reacts to
//! the handler's notifications. Implementations are free to keep any amount
//! of extra state — the controller never inspects beyond this surface.

use kurbo::Point;

/// Maps a construction method to its mode-table index.
///
/// Construction methods are typically small enums; their discriminant order
/// must match the per-tool [`ModeTable`](crate::ModeTable) entries.
pub trait ModeIndex: Copy {
    /// Returns the zero-based mode-table index for this method.
    fn mode_index(self) -> usize;
}

impl ModeIndex for usize {
    fn mode_index(self) -> usize {
        self
    }
}

/// The construction method for tools with a single interaction sequence.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct DefaultMethod;

impl ModeIndex for DefaultMethod {
    fn mode_index(self) -> usize {
        0
    }
}

/// Capability bundle the controller requires from a construction tool.
///
/// The state machine progresses monotonically forward as input completes and
/// may regress when an earlier parameter is edited; only the handler mutates
/// the state. The controller observes it through [`state`](Self::state) and
/// the terminal/first queries.
pub trait ConstructionHandler {
    /// Ordered step of the active construction sequence.
    type State: Copy + PartialEq + PartialOrd + core::fmt::Debug;
    /// Variant of the tool's interaction sequence.
    type Method: ModeIndex;

    /// Returns the current construction state.
    fn state(&self) -> Self::State;

    /// Returns the state the tool starts in.
    fn first_state(&self) -> Self::State;

    /// Returns whether the tool has reached its terminal state.
    fn is_last_state(&self) -> bool;

    /// Returns whether the tool is currently in `state`.
    fn is_state(&self, state: Self::State) -> bool {
        self.state() == state
    }

    /// Returns the active construction method.
    fn construction_method(&self) -> Self::Method;

    /// Returns whether the tool restarts automatically after completing.
    fn continuous_mode(&self) -> bool {
        false
    }

    /// Resets the construction state machine to restart the tool.
    fn reset(&mut self);

    /// Refreshes the cursor icon for the current method and state.
    fn update_cursor(&mut self);

    /// Runs the tool's movement logic against an (already enforced) position.
    fn mouse_move(&mut self, pos: Point);

    /// Runs object preselection at a position, so downstream auto-constraint
    /// logic can react to what is under the cursor.
    fn preselect_at_point(&mut self, pos: Point);
}

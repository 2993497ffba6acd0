// Copyright 2025 the Burin Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Named extension points the controller calls at fixed protocol positions.
//!
//! [`ControllerHooks`] replaces a deep specialization hierarchy with one
//! strategy interface: the controller guarantees *when* each hook fires and
//! in what order; implementations decide *what* happens there. Every hook
//! has a safe default, so a tool overrides only what it needs:
//!
//! - [`state_of`](ControllerHooks::state_of) maps each slot to its
//!   construction state (default: the handler's first state).
//! - [`enforce`](ControllerHooks::enforce) overwrites the pointer position
//!   from committed slot values (default: pointer wins).
//! - [`apply_value`](ControllerHooks::apply_value) pushes an edited value
//!   into the in-progress geometry (default: nothing — concrete tools must
//!   override this for edits to have any effect).
//! - [`change_handler_mode`](ControllerHooks::change_handler_mode) lets
//!   control values alone drive a state transition.
//!
//! [`DefaultHooks`] is the all-defaults implementation for tools that only
//! need the generic behavior, such as a single-click point tool.

use kurbo::Point;

use burin_params::control::ParameterControl;

use crate::controls::Controls;
use crate::handler::ConstructionHandler;

/// Extension points for one controller, called in a fixed order.
///
/// Hooks receive the bookkeeping core and the handler as explicit arguments,
/// so an implementation carries only its own state (for example a companion
/// task-panel widget).
pub trait ControllerHooks<H: ConstructionHandler, C: ParameterControl> {
    /// Returns the construction state the slot at `index` belongs to.
    ///
    /// Consulted when slots are rebuilt; the association is stored on the
    /// slot and stays stable until the next rebuild.
    fn state_of(&self, handler: &H, index: usize) -> H::State {
        let _ = index;
        handler.first_state()
    }

    /// Runs once at controller initialization, before the first reset.
    ///
    /// Widget-bound specializations populate their companion widget here.
    fn on_init(&mut self, _controls: &mut Controls<C, H::State>, _handler: &mut H) {}

    /// Runs on every reset.
    ///
    /// The default rebuilds the slot sequence (associating states via
    /// [`state_of`](Self::state_of)) and then calls
    /// [`configure_parameters`](Self::configure_parameters). Overrides that
    /// still want fresh slots must keep the rebuild.
    fn on_reset(&mut self, controls: &mut Controls<C, H::State>, handler: &mut H) {
        controls.rebuild(|index| self.state_of(handler, index));
        self.configure_parameters(controls, handler);
    }

    /// Adjusts freshly rebuilt parameter controls (labels, suffixes, …).
    fn configure_parameters(&mut self, _controls: &mut Controls<C, H::State>, _handler: &mut H) {}

    /// Runs on every pointer movement notification.
    ///
    /// The default re-applies mode activation on the first movement only:
    /// slot visibility before any movement may not yet reflect the freshly
    /// selected geometry.
    fn on_mouse_moved(
        &mut self,
        controls: &mut Controls<C, H::State>,
        handler: &mut H,
        _pos: Point,
    ) {
        if !controls.first_move_done() {
            controls.apply_mode_activation(handler.state(), handler.is_last_state());
        }
    }

    /// Overwrites the pointer position from committed control values.
    ///
    /// This is the single reconciliation point between what the mouse says
    /// and what the typed numbers say; a committed value always wins.
    fn enforce(
        &mut self,
        _controls: &mut Controls<C, H::State>,
        _handler: &mut H,
        _pos: &mut Point,
    ) {
    }

    /// Runs after every enforcement.
    ///
    /// The default restores keyboard focus to the slot holding the focus
    /// token, guarding against the pointer session stealing focus away from
    /// an active numeric edit.
    fn after_enforce(&mut self, controls: &mut Controls<C, H::State>, _handler: &mut H) {
        if let Some(index) = controls.focused() {
            controls.focus_slot(index);
        }
    }

    /// Runs when the construction method changes, before the handler resets.
    ///
    /// Specializations adjust companion widget visibility here.
    fn on_method_changed(&mut self, _controls: &mut Controls<C, H::State>, _handler: &mut H) {}

    /// Applies a committed control value to the handler's in-progress
    /// geometry.
    fn apply_value(
        &mut self,
        _controls: &mut Controls<C, H::State>,
        _handler: &mut H,
        _index: usize,
        _value: f64,
    ) {
    }

    /// Drives a state transition based purely on control values.
    ///
    /// Runs inside the shared finish routine after a value change; a
    /// transition made here is followed by a movement replay.
    fn change_handler_mode(&mut self, _controls: &mut Controls<C, H::State>, _handler: &mut H) {}

    /// Updates on-view parameter presentation for a new enforced position.
    fn adapt_parameters(
        &mut self,
        _controls: &mut Controls<C, H::State>,
        _handler: &mut H,
        _pos: Point,
    ) {
    }

    /// First tool-specific keyboard shortcut.
    fn first_key_shortcut(&mut self, _controls: &mut Controls<C, H::State>, _handler: &mut H) {}

    /// Second tool-specific keyboard shortcut.
    fn second_key_shortcut(&mut self, _controls: &mut Controls<C, H::State>, _handler: &mut H) {}

    /// Tab shortcut; the default advances focus to the next slot of the
    /// current state.
    fn tab_shortcut(&mut self, controls: &mut Controls<C, H::State>, handler: &mut H) {
        controls.pass_focus_to_next(handler.state());
    }
}

/// The all-defaults [`ControllerHooks`] implementation.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct DefaultHooks;

impl<H: ConstructionHandler, C: ParameterControl> ControllerHooks<H, C> for DefaultHooks {}

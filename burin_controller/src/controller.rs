// Copyright 2025 the Burin Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The controller: fixed-order orchestration of handler, slots, and focus.
//!
//! [`Controller`] owns the bookkeeping core ([`Controls`]) and the hook
//! bundle; the handler is borrowed per call. The protocol ordering lives
//! entirely in this module — hooks extend behavior at the defined points but
//! can never reorder them:
//!
//! - [`init_controls`](Controller::init_controls) →
//!   [`reset_controls`](Controller::reset_controls) → per-event updates.
//! - Method change: mode-table update → hook → cursor → handler reset →
//!   slot rebuild → movement replay. Replaying before the reset would
//!   reprocess against a stale state.
//! - Value change: commit → focus → apply hook → replay → preselect →
//!   mode hook → conditional second replay. At most two replays per edit.
//!
//! A *replay* re-runs enforcement and the handler's movement logic against
//! the last recorded pointer position; it does not count as a pointer
//! movement for the first-movement tracking.

use alloc::boxed::Box;

use burin_keys::keymap::{Key, KeyAction, KeyMap};
use burin_params::color::{ColorConfig, ColorPolicy};
use burin_params::control::ParameterControl;
use kurbo::Point;
use peniko::Color;

use crate::controls::Controls;
use crate::handler::ConstructionHandler;
use crate::hooks::ControllerHooks;
use crate::mode_table::ModeTable;

/// Coordinates a construction handler with its on-view parameter controls.
///
/// Created once per tool session and bound to one handler; slots live and
/// die with the controller. See the crate docs for a complete example.
pub struct Controller<H, C, X>
where
    H: ConstructionHandler,
    C: ParameterControl,
    X: ControllerHooks<H, C>,
{
    controls: Controls<C, H::State>,
    hooks: X,
    keymap: KeyMap,
    mode_table: ModeTable,
    initialized: bool,
}

impl<H, C, X> Controller<H, C, X>
where
    H: ConstructionHandler,
    C: ParameterControl,
    X: ControllerHooks<H, C>,
{
    /// Creates a controller.
    ///
    /// `factory` builds one control per slot; it receives the slot index and
    /// the inactive policy color the control starts out painted with. The
    /// initial slot count is the mode table's default.
    pub fn new(
        mode_table: ModeTable,
        colors: ColorConfig,
        keymap: KeyMap,
        hooks: X,
        factory: impl FnMut(usize, Color) -> C + 'static,
    ) -> Self {
        let target_count = mode_table.default_count();
        Self {
            controls: Controls::new(
                ColorPolicy::from_config(&colors),
                target_count,
                Box::new(factory),
            ),
            hooks,
            keymap,
            mode_table,
            initialized: false,
        }
    }

    /// Returns the bookkeeping core.
    #[must_use]
    pub fn controls(&self) -> &Controls<C, H::State> {
        &self.controls
    }

    /// Returns the bookkeeping core mutably.
    pub fn controls_mut(&mut self) -> &mut Controls<C, H::State> {
        &mut self.controls
    }

    /// Returns the hook bundle.
    #[must_use]
    pub fn hooks(&self) -> &X {
        &self.hooks
    }

    /// Returns the hook bundle mutably.
    pub fn hooks_mut(&mut self) -> &mut X {
        &mut self.hooks
    }

    /// Returns the per-tool mode table.
    #[must_use]
    pub fn mode_table(&self) -> ModeTable {
        self.mode_table
    }

    /// Returns whether [`init_controls`](Self::init_controls) has run.
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Initializes the controls once per tool session.
    ///
    /// Calls the init hook, performs a full reset, and marks the controller
    /// initialized. Further calls are ignored.
    pub fn init_controls(&mut self, handler: &mut H) {
        if self.initialized {
            return;
        }
        self.hooks.on_init(&mut self.controls, handler);
        self.reset_controls(handler);
        self.initialized = true;
    }

    /// Rebuilds the parameter controls from scratch for the current method.
    ///
    /// Idempotent; safe to call on every construction-method change and on
    /// explicit handler reset. Clears first-movement tracking.
    pub fn reset_controls(&mut self, handler: &mut H) {
        self.hooks.on_reset(&mut self.controls, handler);
        self.controls.set_first_move_done(false);
    }

    /// Notifies the controller of a pointer movement.
    ///
    /// The movement hook runs first (by default re-applying mode activation
    /// on the first movement only), then the movement is recorded as done.
    pub fn mouse_moved(&mut self, handler: &mut H, pos: Point) {
        self.hooks.on_mouse_moved(&mut self.controls, handler, pos);
        self.controls.set_first_move_done(true);
    }

    /// Reconciles a raw pointer position with committed control values.
    ///
    /// Records the raw position, lets the enforcement hook overwrite `pos`
    /// in place, records the result as the enforced position, and runs the
    /// post-enforcement hook (by default restoring keyboard focus to the
    /// slot holding the focus token).
    pub fn enforce_control_parameters(&mut self, handler: &mut H, pos: &mut Point) {
        self.controls.record_raw(*pos);
        self.hooks.enforce(&mut self.controls, handler, pos);
        self.controls.record_enforced(*pos);
        self.hooks.after_enforce(&mut self.controls, handler);
    }

    /// Full pointer-movement path, called by the handler's event glue.
    ///
    /// Enforces the position, runs the handler's movement logic with the
    /// result, adapts parameter presentation, and delivers the movement
    /// notification.
    pub fn pointer_moved(&mut self, handler: &mut H, pos: Point) {
        let mut enforced = pos;
        self.enforce_control_parameters(handler, &mut enforced);
        handler.mouse_move(enforced);
        self.hooks
            .adapt_parameters(&mut self.controls, handler, enforced);
        self.mouse_moved(handler, enforced);
    }

    /// Handles a construction-method switch.
    ///
    /// Ordering is mandatory: slot count from the mode table → hook →
    /// cursor refresh → handler reset → slot rebuild → replay of the last
    /// pointer position, so geometry reflects the new method immediately.
    pub fn on_construction_method_changed(&mut self, handler: &mut H) {
        let count = self.mode_table.count(handler.construction_method());
        self.controls.set_target_count(count);
        self.hooks.on_method_changed(&mut self.controls, handler);
        handler.update_cursor();
        handler.reset();
        self.reset_controls(handler);
        self.replay(handler);
    }

    /// Reacts to a handler state change by re-applying mode activation.
    pub fn on_handler_mode_changed(&mut self, handler: &mut H) {
        self.controls
            .apply_mode_activation(handler.state(), handler.is_last_state());
    }

    /// Runs after a handler state change has been effected.
    ///
    /// Replays the last pointer position unless the tool reached its
    /// terminal state without continuous mode.
    pub fn after_handler_mode_changed(&mut self, handler: &mut H) {
        if !handler.is_last_state() || handler.continuous_mode() {
            self.replay(handler);
        }
    }

    /// Processes a value committed in a parameter control.
    ///
    /// Out-of-range indices are ignored. The slot records the value and is
    /// painted with the active color; if it belongs to the current
    /// construction state it also receives focus. The value hook applies the
    /// number to the in-progress geometry, then the shared finish routine
    /// runs (replay, preselection, mode hook, conditional second replay).
    pub fn on_view_value_changed(&mut self, handler: &mut H, index: usize, value: f64) {
        if !self.controls.commit_value(index, value) {
            return;
        }
        if self
            .controls
            .is_slot_of_current_state(index, handler.state())
        {
            self.controls.focus_slot(index);
        }
        self.hooks
            .apply_value(&mut self.controls, handler, index, value);
        self.finish_controls_changed(handler);
    }

    /// Routes a key to shortcut hooks, focus cycling, or the focused edit.
    ///
    /// A value committed by the edit (Enter on a parseable entry) flows
    /// through [`on_view_value_changed`](Self::on_view_value_changed).
    pub fn dispatch_key(&mut self, handler: &mut H, key: Key) {
        match self.keymap.route(key) {
            KeyAction::FirstShortcut => self.hooks.first_key_shortcut(&mut self.controls, handler),
            KeyAction::SecondShortcut => {
                self.hooks.second_key_shortcut(&mut self.controls, handler);
            }
            KeyAction::CycleFocus => self.hooks.tab_shortcut(&mut self.controls, handler),
            KeyAction::Edit(edit) => {
                let Some(index) = self.controls.focused() else {
                    return;
                };
                if let Some(value) = self.controls.input_to_focused(edit) {
                    self.on_view_value_changed(handler, index, value);
                }
            }
            KeyAction::Ignored => {}
        }
    }

    /// Redraws before and after any eventual state change in reaction to a
    /// control change.
    fn finish_controls_changed(&mut self, handler: &mut H) {
        self.replay(handler);

        let state_before = handler.state();
        // Preselect the object at the enforced position, so that downstream
        // auto-constraint logic reacts to what is under the cursor.
        handler.preselect_at_point(self.controls.last_enforced());

        self.hooks.change_handler_mode(&mut self.controls, handler);

        // A transition mid-edit invalidates geometry computed under the
        // previous state, so reprocess the position against the new one.
        if !handler.is_last_state()
            && handler.state() != state_before
            && self.controls.first_move_done()
        {
            self.replay(handler);
        }
    }

    /// Re-runs enforcement and the handler's movement logic against the last
    /// recorded pointer position. Not a pointer movement: first-movement
    /// tracking is left untouched.
    fn replay(&mut self, handler: &mut H) {
        let mut pos = self.controls.prev_cursor();
        self.enforce_control_parameters(handler, &mut pos);
        handler.mouse_move(pos);
        self.hooks.adapt_parameters(&mut self.controls, handler, pos);
    }
}

impl<H, C, X> core::fmt::Debug for Controller<H, C, X>
where
    H: ConstructionHandler,
    C: ParameterControl,
    X: ControllerHooks<H, C>,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Controller")
            .field("controls", &self.controls)
            .field("keymap", &self.keymap)
            .field("mode_table", &self.mode_table)
            .field("initialized", &self.initialized)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handler::ModeIndex;
    use alloc::vec;
    use alloc::vec::Vec;
    use burin_params::color::ColorPolicy;
    use burin_params::control::OverlayParameter;

    #[derive(Copy, Clone, Debug, PartialEq, PartialOrd)]
    enum State {
        First,
        Second,
        End,
    }

    #[derive(Copy, Clone, Debug, PartialEq)]
    enum Method {
        TwoPoints,
        ThreePoints,
    }

    impl ModeIndex for Method {
        fn mode_index(self) -> usize {
            self as usize
        }
    }

    #[derive(Clone, Debug, PartialEq)]
    enum Event {
        Cursor,
        Reset,
        Move(Point),
        Preselect(Point),
    }

    #[derive(Debug)]
    struct TestHandler {
        state: State,
        method: Method,
        continuous: bool,
        events: Vec<Event>,
    }

    impl TestHandler {
        fn new() -> Self {
            Self {
                state: State::First,
                method: Method::TwoPoints,
                continuous: false,
                events: Vec::new(),
            }
        }

        fn moves(&self) -> usize {
            self.events
                .iter()
                .filter(|e| matches!(e, Event::Move(_)))
                .count()
        }
    }

    impl ConstructionHandler for TestHandler {
        type State = State;
        type Method = Method;

        fn state(&self) -> State {
            self.state
        }

        fn first_state(&self) -> State {
            State::First
        }

        fn is_last_state(&self) -> bool {
            self.state == State::End
        }

        fn construction_method(&self) -> Method {
            self.method
        }

        fn continuous_mode(&self) -> bool {
            self.continuous
        }

        fn reset(&mut self) {
            self.state = State::First;
            self.events.push(Event::Reset);
        }

        fn update_cursor(&mut self) {
            self.events.push(Event::Cursor);
        }

        fn mouse_move(&mut self, pos: Point) {
            self.events.push(Event::Move(pos));
        }

        fn preselect_at_point(&mut self, pos: Point) {
            self.events.push(Event::Preselect(pos));
        }
    }

    fn controller<X>(
        table: &'static [usize],
        hooks: X,
    ) -> Controller<TestHandler, OverlayParameter, X>
    where
        X: ControllerHooks<TestHandler, OverlayParameter>,
    {
        Controller::new(
            ModeTable::new(table),
            ColorConfig::default(),
            KeyMap::default(),
            hooks,
            |_, color| OverlayParameter::with_color(color),
        )
    }

    use crate::hooks::DefaultHooks;

    /// Slot 0 belongs to the first state, later slots to the second.
    #[derive(Copy, Clone, Debug, Default)]
    struct SplitHooks;

    impl ControllerHooks<TestHandler, OverlayParameter> for SplitHooks {
        fn state_of(&self, _handler: &TestHandler, index: usize) -> State {
            if index == 0 { State::First } else { State::Second }
        }
    }

    /// Locks the x coordinate to slot 0's committed value.
    #[derive(Copy, Clone, Debug, Default)]
    struct LockXHooks;

    impl ControllerHooks<TestHandler, OverlayParameter> for LockXHooks {
        fn enforce(
            &mut self,
            controls: &mut Controls<OverlayParameter, State>,
            _handler: &mut TestHandler,
            pos: &mut Point,
        ) {
            if let Some(x) = controls.committed(0) {
                pos.x = x;
            }
        }
    }

    /// Control values alone complete the first step.
    #[derive(Copy, Clone, Debug, Default)]
    struct AdvanceHooks;

    impl ControllerHooks<TestHandler, OverlayParameter> for AdvanceHooks {
        fn change_handler_mode(
            &mut self,
            _controls: &mut Controls<OverlayParameter, State>,
            handler: &mut TestHandler,
        ) {
            if handler.state == State::First {
                handler.state = State::Second;
            }
        }
    }

    #[derive(Copy, Clone, Debug, Default)]
    struct CountingHooks {
        inits: usize,
        first_keys: usize,
        second_keys: usize,
    }

    impl ControllerHooks<TestHandler, OverlayParameter> for CountingHooks {
        fn on_init(
            &mut self,
            _controls: &mut Controls<OverlayParameter, State>,
            _handler: &mut TestHandler,
        ) {
            self.inits += 1;
        }

        fn first_key_shortcut(
            &mut self,
            _controls: &mut Controls<OverlayParameter, State>,
            _handler: &mut TestHandler,
        ) {
            self.first_keys += 1;
        }

        fn second_key_shortcut(
            &mut self,
            _controls: &mut Controls<OverlayParameter, State>,
            _handler: &mut TestHandler,
        ) {
            self.second_keys += 1;
        }
    }

    /// Minimal control counting edit-session starts.
    #[derive(Debug, Default)]
    struct CountingControl {
        active: bool,
        editing: bool,
        edits_started: usize,
        value: f64,
    }

    impl ParameterControl for CountingControl {
        fn activate(&mut self) {
            self.active = true;
        }

        fn deactivate(&mut self) {
            self.active = false;
        }

        fn is_active(&self) -> bool {
            self.active
        }

        fn start_edit(&mut self, initial: f64) {
            self.editing = true;
            self.edits_started += 1;
            self.value = initial;
        }

        fn stop_edit(&mut self) {
            self.editing = false;
        }

        fn is_editing(&self) -> bool {
            self.editing
        }

        fn grab_focus(&mut self) {}

        fn set_color(&mut self, _color: Color) {}

        fn set_anchor(&mut self, _from: Point, _to: Point) {}

        fn input_key(&mut self, _key: Key) -> Option<f64> {
            None
        }

        fn value(&self) -> f64 {
            self.value
        }
    }

    #[test]
    fn init_builds_slots_for_default_method() {
        let mut handler = TestHandler::new();
        let mut ctl = controller(&[2, 3], DefaultHooks);
        ctl.init_controls(&mut handler);
        assert!(ctl.is_initialized());
        assert_eq!(ctl.controls().slot_count(), 2);
    }

    #[test]
    fn init_is_one_shot() {
        let mut handler = TestHandler::new();
        let mut ctl = controller(&[1], CountingHooks::default());
        ctl.init_controls(&mut handler);
        ctl.init_controls(&mut handler);
        assert_eq!(ctl.hooks().inits, 1);
    }

    #[test]
    fn method_change_rebuilds_slots_and_replays_in_order() {
        let mut handler = TestHandler::new();
        let mut ctl = controller(&[2, 3], SplitHooks);
        ctl.init_controls(&mut handler);
        ctl.pointer_moved(&mut handler, Point::new(1.0, 2.0));
        handler.events.clear();

        handler.method = Method::ThreePoints;
        ctl.on_construction_method_changed(&mut handler);

        assert_eq!(ctl.controls().slot_count(), 3);
        assert_eq!(ctl.controls().slot(0).unwrap().state(), State::First);
        assert_eq!(ctl.controls().slot(2).unwrap().state(), State::Second);
        assert_eq!(
            handler.events,
            vec![Event::Cursor, Event::Reset, Event::Move(Point::new(1.0, 2.0))]
        );
        // The replay is not a pointer movement.
        assert!(!ctl.controls().first_move_done());
    }

    #[test]
    fn first_movement_branch_runs_exactly_once() {
        let mut handler = TestHandler::new();
        let mut ctl = Controller::new(
            ModeTable::new(&[2]),
            ColorConfig::default(),
            KeyMap::default(),
            DefaultHooks,
            |_, _| CountingControl::default(),
        );
        ctl.init_controls(&mut handler);

        ctl.pointer_moved(&mut handler, Point::new(1.0, 1.0));
        ctl.pointer_moved(&mut handler, Point::new(2.0, 2.0));
        ctl.pointer_moved(&mut handler, Point::new(3.0, 3.0));

        for slot in ctl.controls().slots() {
            assert_eq!(slot.control().edits_started, 1);
            assert!(slot.control().is_active());
        }
    }

    #[test]
    fn committed_value_overrides_raw_pointer_position() {
        let mut handler = TestHandler::new();
        let mut ctl = controller(&[1], LockXHooks);
        ctl.init_controls(&mut handler);
        ctl.controls_mut().commit_value(0, 5.0);

        let mut pos = Point::new(10.0, 10.0);
        ctl.enforce_control_parameters(&mut handler, &mut pos);

        assert_eq!(pos, Point::new(5.0, 10.0));
        assert_eq!(ctl.controls().prev_cursor(), Point::new(10.0, 10.0));
        assert_eq!(ctl.controls().last_enforced(), Point::new(5.0, 10.0));
    }

    #[test]
    fn activation_assigns_focus_to_lowest_slot_of_current_state() {
        let mut handler = TestHandler::new();
        let mut ctl = controller(&[3], SplitHooks);
        ctl.init_controls(&mut handler);

        handler.state = State::Second;
        ctl.pointer_moved(&mut handler, Point::new(0.0, 0.0));

        assert_eq!(ctl.controls().focused(), Some(1));
        assert!(!ctl.controls().slot(0).unwrap().control().is_editing());
        assert!(ctl.controls().slot(1).unwrap().control().is_editing());
    }

    #[test]
    fn value_change_focuses_edited_slot_and_replays_once() {
        let mut handler = TestHandler::new();
        let mut ctl = controller(&[2], DefaultHooks);
        ctl.init_controls(&mut handler);
        ctl.pointer_moved(&mut handler, Point::new(3.0, 3.0));
        handler.events.clear();

        ctl.on_view_value_changed(&mut handler, 1, 7.5);

        assert_eq!(ctl.controls().focused(), Some(1));
        assert!(ctl.controls().slot(1).unwrap().control().has_focus());
        assert_eq!(ctl.controls().committed(1), Some(7.5));
        assert_eq!(
            ctl.controls().slot(1).unwrap().control().color(),
            ColorPolicy::DEFAULT_ACTIVE
        );
        assert_eq!(
            handler.events,
            vec![
                Event::Move(Point::new(3.0, 3.0)),
                Event::Preselect(Point::new(3.0, 3.0)),
            ]
        );
    }

    #[test]
    fn value_change_with_state_transition_replays_twice() {
        let mut handler = TestHandler::new();
        let mut ctl = controller(&[2], AdvanceHooks);
        ctl.init_controls(&mut handler);
        ctl.pointer_moved(&mut handler, Point::new(3.0, 3.0));
        handler.events.clear();

        ctl.on_view_value_changed(&mut handler, 0, 1.0);

        assert_eq!(handler.state, State::Second);
        assert_eq!(handler.moves(), 2);
    }

    #[test]
    fn value_change_before_any_movement_replays_once() {
        let mut handler = TestHandler::new();
        let mut ctl = controller(&[2], AdvanceHooks);
        ctl.init_controls(&mut handler);

        ctl.on_view_value_changed(&mut handler, 0, 1.0);

        assert_eq!(handler.state, State::Second);
        assert_eq!(handler.moves(), 1);
    }

    #[test]
    fn value_change_out_of_range_is_a_no_op() {
        let mut handler = TestHandler::new();
        let mut ctl = controller(&[1], DefaultHooks);
        ctl.init_controls(&mut handler);

        ctl.on_view_value_changed(&mut handler, 9, 1.0);

        assert!(handler.events.is_empty());
    }

    #[test]
    fn after_handler_mode_change_skips_replay_when_terminal() {
        let mut handler = TestHandler::new();
        let mut ctl = controller(&[1], DefaultHooks);
        ctl.init_controls(&mut handler);
        ctl.pointer_moved(&mut handler, Point::new(2.0, 2.0));

        handler.state = State::End;
        handler.events.clear();
        ctl.after_handler_mode_changed(&mut handler);
        assert_eq!(handler.moves(), 0);

        handler.continuous = true;
        ctl.after_handler_mode_changed(&mut handler);
        assert_eq!(handler.moves(), 1);

        handler.continuous = false;
        handler.state = State::Second;
        handler.events.clear();
        ctl.after_handler_mode_changed(&mut handler);
        assert_eq!(handler.moves(), 1);
    }

    #[test]
    fn tab_key_cycles_focus_with_wraparound() {
        let mut handler = TestHandler::new();
        let mut ctl = controller(&[2], DefaultHooks);
        ctl.init_controls(&mut handler);
        ctl.pointer_moved(&mut handler, Point::new(0.0, 0.0));
        assert_eq!(ctl.controls().focused(), Some(0));

        ctl.dispatch_key(&mut handler, Key::Tab);
        assert_eq!(ctl.controls().focused(), Some(1));

        ctl.dispatch_key(&mut handler, Key::Tab);
        assert_eq!(ctl.controls().focused(), Some(0));
    }

    #[test]
    fn typed_digits_commit_through_the_value_path() {
        let mut handler = TestHandler::new();
        let mut ctl = controller(&[1], DefaultHooks);
        ctl.init_controls(&mut handler);
        ctl.pointer_moved(&mut handler, Point::new(4.0, 4.0));

        ctl.dispatch_key(&mut handler, Key::Char('5'));
        ctl.dispatch_key(&mut handler, Key::Char('0'));
        ctl.dispatch_key(&mut handler, Key::Enter);

        assert_eq!(ctl.controls().committed(0), Some(50.0));
        assert!(ctl.controls().slot(0).unwrap().is_set());
    }

    #[test]
    fn shortcut_keys_reach_their_hooks() {
        let mut handler = TestHandler::new();
        let mut ctl = Controller::new(
            ModeTable::new(&[1]),
            ColorConfig::default(),
            KeyMap::new(Some('m'), Some('c')),
            CountingHooks::default(),
            |_, color| OverlayParameter::with_color(color),
        );
        ctl.init_controls(&mut handler);

        ctl.dispatch_key(&mut handler, Key::Char('m'));
        ctl.dispatch_key(&mut handler, Key::Char('C'));

        assert_eq!(ctl.hooks().first_keys, 1);
        assert_eq!(ctl.hooks().second_keys, 1);
    }

    #[test]
    fn enforcement_restores_focus_to_tracked_slot() {
        let mut handler = TestHandler::new();
        let mut ctl = controller(&[2], DefaultHooks);
        ctl.init_controls(&mut handler);
        ctl.pointer_moved(&mut handler, Point::new(1.0, 1.0));
        assert_eq!(ctl.controls().focused(), Some(0));

        // A later pointer event must hand focus back to the tracked slot.
        ctl.pointer_moved(&mut handler, Point::new(2.0, 2.0));
        assert!(ctl.controls().slot(0).unwrap().control().has_focus());
    }
}

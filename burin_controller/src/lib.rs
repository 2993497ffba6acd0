// Copyright 2025 the Burin Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=burin_controller --heading-base-level=0

//! Burin Controller: the coordination layer between an interactive
//! construction tool and its on-view numeric parameters.
//!
//! ## Overview
//!
//! An interactive drawing tool walks an ordered state machine (first point,
//! second point, …, end) while the user moves the pointer, and overlays one
//! editable numeric control per parameter of the current step. The controller
//! keeps three independently moving parts consistent:
//!
//! - the tool's construction state machine (the *handler*),
//! - the lifecycle and keyboard focus of the on-view parameter controls,
//! - the position being constructed, which committed numeric values override.
//!
//! The handler stays an external collaborator behind the
//! [`ConstructionHandler`] capability trait; the controller never owns it and
//! borrows it per call. Tool- and widget-specific behavior is injected
//! through [`ControllerHooks`], a strategy interface of named extension
//! points with safe defaults, called at fixed places in the protocol:
//!
//! - initialize → reset → per-event updates, in that order, always;
//! - committed control values win over the raw pointer position
//!   (*enforcement*);
//! - any state or mode change caused by a control edit is followed by
//!   re-running the handler's movement logic against the latest position
//!   (*replay*), or the displayed geometry silently desynchronizes from the
//!   typed numbers.
//!
//! ## Minimal example
//!
//! A one-step point tool using the default hooks and the reference control
//! from `burin_params`:
//!
//! ```
//! use burin_controller::{
//!     ConstructionHandler, Controller, DefaultHooks, ModeIndex, ModeTable,
//! };
//! use burin_keys::keymap::KeyMap;
//! use burin_params::color::ColorConfig;
//! use burin_params::control::OverlayParameter;
//! use kurbo::Point;
//!
//! #[derive(Copy, Clone, Debug, PartialEq, PartialOrd)]
//! enum State {
//!     First,
//!     End,
//! }
//!
//! #[derive(Copy, Clone, Debug)]
//! struct ByPoint;
//! impl ModeIndex for ByPoint {
//!     fn mode_index(self) -> usize {
//!         0
//!     }
//! }
//!
//! #[derive(Debug)]
//! struct PointTool {
//!     state: State,
//!     position: Point,
//! }
//!
//! impl ConstructionHandler for PointTool {
//!     type State = State;
//!     type Method = ByPoint;
//!     fn state(&self) -> State {
//!         self.state
//!     }
//!     fn first_state(&self) -> State {
//!         State::First
//!     }
//!     fn is_last_state(&self) -> bool {
//!         self.state == State::End
//!     }
//!     fn construction_method(&self) -> ByPoint {
//!         ByPoint
//!     }
//!     fn reset(&mut self) {
//!         self.state = State::First;
//!     }
//!     fn update_cursor(&mut self) {}
//!     fn mouse_move(&mut self, pos: Point) {
//!         self.position = pos;
//!     }
//!     fn preselect_at_point(&mut self, _pos: Point) {}
//! }
//!
//! let mut tool = PointTool {
//!     state: State::First,
//!     position: Point::ZERO,
//! };
//! let mut controller = Controller::new(
//!     ModeTable::new(&[2]),
//!     ColorConfig::default(),
//!     KeyMap::default(),
//!     DefaultHooks,
//!     |_, color| OverlayParameter::with_color(color),
//! );
//!
//! controller.init_controls(&mut tool);
//! assert_eq!(controller.controls().slot_count(), 2);
//!
//! controller.pointer_moved(&mut tool, Point::new(3.0, 4.0));
//! assert_eq!(tool.position, Point::new(3.0, 4.0));
//! ```
//!
//! Real tools override [`ControllerHooks::enforce`] to lock coordinates to
//! committed values, [`ControllerHooks::apply_value`] to push an edited value
//! into the in-progress geometry, and [`ControllerHooks::state_of`] to map
//! each parameter slot to the construction state it belongs to.
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

pub mod controller;
pub mod controls;
pub mod handler;
pub mod hooks;
pub mod mode_table;

pub use controller::Controller;
pub use controls::{Controls, ParameterSlot};
pub use handler::{ConstructionHandler, DefaultMethod, ModeIndex};
pub use hooks::{ControllerHooks, DefaultHooks};
pub use mode_table::ModeTable;

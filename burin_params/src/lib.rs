// Copyright 2025 the Burin Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Burin Params: on-view parameter controls for interactive construction tools.
//!
//! An on-view parameter is one editable numeric value anchored to a position
//! on the drawing canvas (a length, an angle, a coordinate). This crate
//! defines the control-side contract that a controller coordinates:
//!
//! - [`control::ParameterControl`]: the activation / edit / focus / color /
//!   anchor lifecycle of one control
//! - [`control::OverlayParameter`]: a framework-free reference implementation
//!   backed by a [`burin_keys::buffer::NumericBuffer`]
//! - [`color::ColorPolicy`]: the active/inactive colors applied to controls,
//!   resolved once from an explicit [`color::ColorConfig`]
//!
//! The crate does not render anything. A widget-toolkit binding implements
//! [`control::ParameterControl`] over a real label/spinbox; tests and
//! headless integrations use [`control::OverlayParameter`].
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

pub mod color;
pub mod control;

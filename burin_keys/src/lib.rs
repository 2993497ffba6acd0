// Copyright 2025 the Burin Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=burin_keys --heading-base-level=0

//! Burin Keys: keyboard routing for on-view parameter editing.
//!
//! Interactive construction tools share a small keyboard protocol: a couple of
//! tool-specific shortcut characters, Tab to cycle focus between on-view
//! parameters, and everything numeric forwarded to whichever parameter is
//! currently being edited. This crate provides the pieces of that protocol
//! that do not depend on any particular tool or widget toolkit:
//!
//! - [`keymap`]: classify a [`Key`](keymap::Key) into a routing decision
//!   ([`KeyAction`](keymap::KeyAction)) via a per-tool [`KeyMap`](keymap::KeyMap)
//! - [`buffer`]: accumulate an in-place numeric edit with
//!   [`NumericBuffer`](buffer::NumericBuffer)
//!
//! The crate does not dispatch anything itself; a controller consumes the
//! routing decision and invokes its shortcut hooks or forwards the key to the
//! focused control. See `burin_controller` for the consuming side.
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

pub mod buffer;
pub mod keymap;

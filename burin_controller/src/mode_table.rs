// Copyright 2025 the Burin Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-tool table mapping each construction method to its parameter count.
//!
//! ## Minimal example
//!
//! ```
//! use burin_controller::mode_table::ModeTable;
//!
//! // Two methods: "by two points" uses 2 parameters, "by three points" 3.
//! let table = ModeTable::new(&[2, 3]);
//! assert_eq!(table.count(0_usize), 2);
//! assert_eq!(table.count(1_usize), 3);
//! assert_eq!(table.default_count(), 2);
//! // Unknown methods resolve to no parameters rather than failing.
//! assert_eq!(table.count(7_usize), 0);
//! ```

use crate::handler::ModeIndex;

/// Static per-construction-method parameter counts.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ModeTable {
    counts: &'static [usize],
}

impl ModeTable {
    /// Creates a table from one count per construction method, in
    /// [`ModeIndex`] order.
    #[must_use]
    pub const fn new(counts: &'static [usize]) -> Self {
        Self { counts }
    }

    /// Returns the parameter count for a method; out-of-range methods
    /// resolve to zero.
    #[must_use]
    pub fn count(&self, method: impl ModeIndex) -> usize {
        self.counts.get(method.mode_index()).copied().unwrap_or(0)
    }

    /// Returns the count for the first method, used before any method
    /// change has been observed.
    #[must_use]
    pub fn default_count(&self) -> usize {
        self.counts.first().copied().unwrap_or(0)
    }
}

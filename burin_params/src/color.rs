// Copyright 2025 the Burin Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Color policy: the two colors a controller paints parameter controls with.
//!
//! A control showing a value the user explicitly committed is painted with
//! the active color; a control following the pointer is painted with the
//! inactive one. Both colors are resolved exactly once, at controller
//! construction, from an explicit [`ColorConfig`] — preference storage is the
//! embedding application's concern, not this crate's.
//!
//! ## Minimal example
//!
//! ```
//! use burin_params::color::{ColorConfig, ColorPolicy};
//!
//! let policy = ColorPolicy::from_config(&ColorConfig::default());
//! assert_eq!(policy.active(), ColorPolicy::DEFAULT_ACTIVE);
//! assert_eq!(policy.inactive(), ColorPolicy::DEFAULT_INACTIVE);
//! ```

use peniko::Color;

/// Optional color overrides, typically read from application preferences.
///
/// `None` entries fall back to the built-in defaults.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct ColorConfig {
    /// Color for controls holding an explicitly committed value.
    pub active: Option<Color>,
    /// Color for controls tracking the pointer.
    pub inactive: Option<Color>,
}

/// Resolved control colors, immutable for a controller's lifetime.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ColorPolicy {
    active: Color,
    inactive: Color,
}

impl ColorPolicy {
    /// Default color for committed values (a saturated red-orange).
    pub const DEFAULT_ACTIVE: Color = Color::from_rgba8(255, 38, 0, 255);
    /// Default color for pointer-driven values (a light gray).
    pub const DEFAULT_INACTIVE: Color = Color::from_rgba8(204, 204, 204, 255);

    /// Resolves the policy from a configuration, applying defaults for
    /// absent entries.
    #[must_use]
    pub fn from_config(config: &ColorConfig) -> Self {
        Self {
            active: config.active.unwrap_or(Self::DEFAULT_ACTIVE),
            inactive: config.inactive.unwrap_or(Self::DEFAULT_INACTIVE),
        }
    }

    /// Returns the color for controls holding a committed value.
    #[must_use]
    pub fn active(&self) -> Color {
        self.active
    }

    /// Returns the color for controls tracking the pointer.
    #[must_use]
    pub fn inactive(&self) -> Color {
        self.inactive
    }
}

impl Default for ColorPolicy {
    fn default() -> Self {
        Self::from_config(&ColorConfig::default())
    }
}

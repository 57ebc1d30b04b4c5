// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! The `Environment` trait: everything detection is allowed to ask the host

use serde::{Deserialize, Serialize};

use crate::error::StorageError;

/// Screen dimensions and pixel density of the client display.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenMetrics {
    /// Screen width in CSS pixels
    #[serde(default)]
    pub width: u32,
    /// Screen height in CSS pixels
    #[serde(default)]
    pub height: u32,
    /// Device pixel ratio (1.0 for standard density)
    #[serde(default = "default_pixel_ratio")]
    pub pixel_ratio: f64,
}

fn default_pixel_ratio() -> f64 {
    1.0
}

impl Default for ScreenMetrics {
    fn default() -> Self {
        ScreenMetrics {
            width: 0,
            height: 0,
            pixel_ratio: 1.0,
        }
    }
}

/// Ambient client state, injected explicitly.
///
/// Identity strings are returned with their original casing; detection
/// lowercases them once on capture. All probe methods are total except
/// [`storage_roundtrip`](Environment::storage_roundtrip), whose failure is
/// caught inside the local-storage probe.
pub trait Environment {
    /// The navigator user-agent string
    fn user_agent(&self) -> &str;

    /// The navigator vendor string (may be empty)
    fn vendor(&self) -> &str;

    /// The navigator platform string (e.g. "Win32", "MacIntel", "iPhone")
    fn platform(&self) -> &str;

    /// The navigator app-version string (everything after "Mozilla/")
    fn app_version(&self) -> &str;

    /// Screen dimensions and pixel density
    fn screen(&self) -> ScreenMetrics;

    /// Whether touch events are wired up on the host
    fn has_touch_events(&self) -> bool;

    /// Whether a canvas element yields a 2D drawing context
    fn has_canvas_2d(&self) -> bool;

    /// Whether created elements carry the SVG namespace API
    fn has_svg_namespace(&self) -> bool;

    /// Whether the host recognizes a style property name on a probe element
    fn style_property_supported(&self, property: &str) -> bool;

    /// Apply a transform value to a probe element and report the computed
    /// style. `None` when the property is unknown; `Some("none")` when the
    /// value did not stick.
    fn computed_transform(&self, property: &str, value: &str) -> Option<String>;

    /// Whether this window is the top-level window (not framed)
    fn is_top_window(&self) -> bool;

    /// Whether the host runs in full-screen standalone app mode
    fn standalone_mode(&self) -> bool;

    /// Write then remove a throwaway storage key.
    fn storage_roundtrip(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Serializable environment snapshots
//!
//! An `EnvSnapshot` is a client environment captured as plain data: the
//! identity strings plus pre-answered capability probes. The CLI reads one
//! from JSON; tests build them as literals.

use serde::{Deserialize, Serialize};

use super::environment::{Environment, ScreenMetrics};
use crate::error::{Result, SniffError, StorageError};

/// Storage availability as observed on the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageSupport {
    /// Writes and removals succeed
    #[default]
    Available,
    /// Access denied (private browsing, sandbox policy)
    Denied,
    /// Writes fail with a quota error
    QuotaExceeded,
}

/// A client environment captured as plain data.
///
/// Every field except `user_agent` defaults, so partial snapshots
/// deserialize cleanly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvSnapshot {
    /// Navigator user-agent string
    pub user_agent: String,

    /// Navigator vendor string (empty when the client exposes none)
    #[serde(default)]
    pub vendor: String,

    /// Navigator platform string
    #[serde(default)]
    pub platform: String,

    /// Navigator app-version string
    #[serde(default)]
    pub app_version: String,

    /// Screen metrics
    #[serde(default)]
    pub screen: ScreenMetrics,

    /// Touch events wired up
    #[serde(default)]
    pub touch_events: bool,

    /// Canvas 2D context available
    #[serde(default)]
    pub canvas_2d: bool,

    /// SVG namespace API present on created elements
    #[serde(default)]
    pub svg_namespace: bool,

    /// Style property names the client recognizes (e.g. "WebkitTransform")
    #[serde(default)]
    pub style_properties: Vec<String>,

    /// Whether a 3D transform value sticks in computed style
    #[serde(default)]
    pub transform_3d: bool,

    /// Storage availability
    #[serde(default)]
    pub storage: StorageSupport,

    /// Full-screen standalone app mode
    #[serde(default)]
    pub standalone: bool,

    /// Whether this window is the top-level window
    #[serde(default = "default_top_window")]
    pub top_window: bool,
}

fn default_top_window() -> bool {
    true
}

impl Default for EnvSnapshot {
    fn default() -> Self {
        EnvSnapshot {
            user_agent: String::new(),
            vendor: String::new(),
            platform: String::new(),
            app_version: String::new(),
            screen: ScreenMetrics::default(),
            touch_events: false,
            canvas_2d: false,
            svg_namespace: false,
            style_properties: Vec::new(),
            transform_3d: false,
            storage: StorageSupport::Available,
            standalone: false,
            top_window: true,
        }
    }
}

impl EnvSnapshot {
    /// Build a plausible snapshot from a bare user-agent string.
    ///
    /// Fills `platform`, `vendor`, and `app_version` with the values the
    /// matching client would report, so string classification works from a
    /// user-agent alone. Capability probes stay at their defaults.
    pub fn from_user_agent(user_agent: &str) -> Self {
        let lower = user_agent.to_lowercase();

        let platform = if lower.contains("iphone") || lower.contains("ipod") {
            "iPhone"
        } else if lower.contains("ipad") {
            "iPad"
        } else if lower.contains("android") {
            "Linux armv8l"
        } else if lower.contains("windows") {
            "Win32"
        } else if lower.contains("mac") {
            "MacIntel"
        } else if lower.contains("linux") || lower.contains("x11") {
            "Linux x86_64"
        } else {
            ""
        };

        // Chrome forks report the Google vendor; Safari reports Apple.
        let vendor = if lower.contains("chrome") {
            "Google Inc."
        } else if lower.contains("safari") || lower.contains("applewebkit") {
            "Apple Computer, Inc."
        } else {
            ""
        };

        // navigator.appVersion is the user-agent minus the "Mozilla/" prefix.
        let app_version = user_agent
            .strip_prefix("Mozilla/")
            .unwrap_or(user_agent)
            .to_string();

        EnvSnapshot {
            user_agent: user_agent.to_string(),
            vendor: vendor.to_string(),
            platform: platform.to_string(),
            app_version,
            ..EnvSnapshot::default()
        }
    }

    /// Parse a snapshot from JSON.
    ///
    /// A snapshot without a user-agent cannot be classified and is rejected.
    pub fn from_json(contents: &str) -> Result<Self> {
        let snapshot: EnvSnapshot = serde_json::from_str(contents)?;
        if snapshot.user_agent.is_empty() {
            return Err(SniffError::InvalidInput(
                "snapshot has an empty user_agent".to_string(),
            ));
        }
        Ok(snapshot)
    }

    /// A filled-in example snapshot, printed by `sniff snapshot` as a
    /// starting point for hand-written capture files.
    pub fn template() -> Self {
        EnvSnapshot {
            user_agent: "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 \
                         (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36"
                .to_string(),
            vendor: "Google Inc.".to_string(),
            platform: "MacIntel".to_string(),
            app_version: "5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 \
                          (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36"
                .to_string(),
            screen: ScreenMetrics {
                width: 1920,
                height: 1080,
                pixel_ratio: 2.0,
            },
            touch_events: false,
            canvas_2d: true,
            svg_namespace: true,
            style_properties: vec!["WebkitTransform".to_string(), "transform".to_string()],
            transform_3d: true,
            storage: StorageSupport::Available,
            standalone: false,
            top_window: true,
        }
    }
}

impl Environment for EnvSnapshot {
    fn user_agent(&self) -> &str {
        &self.user_agent
    }

    fn vendor(&self) -> &str {
        &self.vendor
    }

    fn platform(&self) -> &str {
        &self.platform
    }

    fn app_version(&self) -> &str {
        &self.app_version
    }

    fn screen(&self) -> ScreenMetrics {
        self.screen
    }

    fn has_touch_events(&self) -> bool {
        self.touch_events
    }

    fn has_canvas_2d(&self) -> bool {
        self.canvas_2d
    }

    fn has_svg_namespace(&self) -> bool {
        self.svg_namespace
    }

    fn style_property_supported(&self, property: &str) -> bool {
        self.style_properties.iter().any(|p| p == property)
    }

    fn computed_transform(&self, property: &str, value: &str) -> Option<String> {
        if !self.style_property_supported(property) {
            return None;
        }
        if self.transform_3d {
            Some(value.to_string())
        } else {
            Some("none".to_string())
        }
    }

    fn is_top_window(&self) -> bool {
        self.top_window
    }

    fn standalone_mode(&self) -> bool {
        self.standalone
    }

    fn storage_roundtrip(&self, _key: &str, _value: &str) -> std::result::Result<(), StorageError> {
        match self.storage {
            StorageSupport::Available => Ok(()),
            StorageSupport::Denied => Err(StorageError::Denied),
            StorageSupport::QuotaExceeded => Err(StorageError::QuotaExceeded),
        }
    }
}

// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Feature probes: API and capability presence rather than declared identity

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::env::Environment;

/// Style property names probed for CSS transform support, checked in order.
const TRANSFORM_PROPERTIES: [&str; 5] = [
    "WebkitTransform",
    "OTransform",
    "msTransform",
    "MozTransform",
    "transform",
];

/// Identity matrix used to probe whether 3D transform values stick.
const MATRIX3D_IDENTITY: &str = "matrix3d(1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1)";

const STORAGE_PROBE_KEY: &str = "__sniff_probe__";

/// Feature detection results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FeatureSet {
    /// Supports touch events
    pub touch: bool,
    /// Supports CSS transforms
    pub transforms: bool,
    /// Supports 3D CSS transforms
    pub transforms_3d: bool,
    /// Supports HTML5 canvas with a 2D context
    pub canvas: bool,
    /// Supports local storage
    pub local_storage: bool,
    /// Supports SVG
    pub svg: bool,
}

impl FeatureSet {
    /// Run all feature probes against the environment.
    pub fn detect(env: &dyn Environment) -> Self {
        FeatureSet {
            touch: env.has_touch_events(),
            local_storage: detect_local_storage(env),
            canvas: env.has_canvas_2d(),
            transforms: detect_transforms(env),
            transforms_3d: detect_transforms_3d(env),
            svg: env.has_svg_namespace(),
        }
    }
}

/// True when any transform property name, prefixed or not, is recognized.
fn detect_transforms(env: &dyn Environment) -> bool {
    TRANSFORM_PROPERTIES
        .iter()
        .any(|property| env.style_property_supported(property))
}

/// Set a 3D matrix on the first recognized transform property and check the
/// computed style. A computed value of "none" means the value was dropped.
fn detect_transforms_3d(env: &dyn Environment) -> bool {
    let Some(property) = TRANSFORM_PROPERTIES
        .iter()
        .find(|property| env.style_property_supported(property))
    else {
        return false;
    };

    match env.computed_transform(property, MATRIX3D_IDENTITY) {
        Some(computed) => computed != "none",
        None => false,
    }
}

/// Round-trip a throwaway key. Any failure means unsupported; the error is
/// never propagated.
fn detect_local_storage(env: &dyn Environment) -> bool {
    match env.storage_roundtrip(STORAGE_PROBE_KEY, STORAGE_PROBE_KEY) {
        Ok(()) => true,
        Err(err) => {
            debug!(error = %err, "storage probe failed, treating local storage as unsupported");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{EnvSnapshot, StorageSupport};

    #[test]
    fn test_transforms_detected_from_any_prefix() {
        let snapshot = EnvSnapshot {
            style_properties: vec!["MozTransform".to_string()],
            ..EnvSnapshot::default()
        };
        let features = FeatureSet::detect(&snapshot);
        assert!(features.transforms);
        assert!(!features.transforms_3d);
    }

    #[test]
    fn test_transforms_absent_without_known_property() {
        let snapshot = EnvSnapshot {
            style_properties: vec!["opacity".to_string()],
            ..EnvSnapshot::default()
        };
        let features = FeatureSet::detect(&snapshot);
        assert!(!features.transforms);
        assert!(!features.transforms_3d);
    }

    #[test]
    fn test_transforms_3d_requires_computed_value() {
        let supported = EnvSnapshot {
            style_properties: vec!["WebkitTransform".to_string()],
            transform_3d: true,
            ..EnvSnapshot::default()
        };
        assert!(FeatureSet::detect(&supported).transforms_3d);

        // Property known, but the matrix3d value computes to "none".
        let dropped = EnvSnapshot {
            style_properties: vec!["WebkitTransform".to_string()],
            transform_3d: false,
            ..EnvSnapshot::default()
        };
        assert!(FeatureSet::detect(&dropped).transforms);
        assert!(!FeatureSet::detect(&dropped).transforms_3d);
    }

    #[test]
    fn test_storage_failure_is_unsupported_not_an_error() {
        let snapshot = EnvSnapshot {
            storage: StorageSupport::Denied,
            ..EnvSnapshot::default()
        };
        let features = FeatureSet::detect(&snapshot);
        assert!(!features.local_storage);

        let full = EnvSnapshot {
            storage: StorageSupport::QuotaExceeded,
            ..EnvSnapshot::default()
        };
        assert!(!FeatureSet::detect(&full).local_storage);
    }

    #[test]
    fn test_direct_capability_probes() {
        let snapshot = EnvSnapshot {
            touch_events: true,
            canvas_2d: true,
            svg_namespace: true,
            ..EnvSnapshot::default()
        };
        let features = FeatureSet::detect(&snapshot);
        assert!(features.touch);
        assert!(features.canvas);
        assert!(features.svg);
        assert!(features.local_storage);
    }
}

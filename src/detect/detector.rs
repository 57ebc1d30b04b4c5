// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Detection capture: one immutable result record per environment

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::browser::BrowserInfo;
use super::device::DeviceClass;
use super::features::FeatureSet;
use super::os::PlatformInfo;
use crate::env::Environment;

/// Screen height at or below which a mobile device counts as a phone.
pub const PHONE_MAX_HEIGHT_PX: u32 = 600;

/// Tunable detection thresholds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectionTuning {
    /// Phone/tablet split within mobile, in CSS pixels of screen height
    #[serde(default = "default_phone_max_height")]
    pub phone_max_height: u32,

    /// Extra user-agent fragments treated as mobile markers
    #[serde(default)]
    pub extra_mobile_tokens: Vec<String>,
}

fn default_phone_max_height() -> u32 {
    PHONE_MAX_HEIGHT_PX
}

impl Default for DetectionTuning {
    fn default() -> Self {
        DetectionTuning {
            phone_max_height: PHONE_MAX_HEIGHT_PX,
            extra_mobile_tokens: Vec::new(),
        }
    }
}

/// Complete detection result for one client environment.
///
/// Captured once, immutable afterward: the records expose no mutating
/// methods, and re-running capture on the same environment yields the same
/// value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    /// Lowercased user-agent string the classification ran against
    pub user_agent: String,
    /// Lowercased vendor string (empty when the client exposes none)
    pub vendor: String,
    /// Lowercased platform string
    pub platform: String,
    /// Lowercased app-version string
    pub app_version: String,

    /// Feature detection results
    pub features: FeatureSet,
    /// OS detection results
    pub os: PlatformInfo,
    /// Browser detection results
    pub browser: BrowserInfo,
}

impl Detection {
    /// Capture a detection with default tuning.
    pub fn capture(env: &dyn Environment) -> Self {
        Self::capture_with(env, &DetectionTuning::default())
    }

    /// Capture a detection with explicit tuning.
    ///
    /// Probes run features first, then OS, then browser, since browser
    /// classification reads the OS flags.
    pub fn capture_with(env: &dyn Environment, tuning: &DetectionTuning) -> Self {
        let user_agent = env.user_agent().to_lowercase();
        let vendor = env.vendor().to_lowercase();
        let platform = env.platform().to_lowercase();
        let app_version = env.app_version().to_lowercase();

        let features = FeatureSet::detect(env);
        let os = PlatformInfo::detect(&user_agent, &platform, &app_version, env.screen(), tuning);
        let browser = BrowserInfo::detect(
            &user_agent,
            &vendor,
            &app_version,
            &os,
            env.standalone_mode(),
            env.is_top_window(),
        );

        let detection = Detection {
            user_agent,
            vendor,
            platform,
            app_version,
            features,
            os,
            browser,
        };

        debug!(
            device = detection.device_class().label(),
            touch = detection.features.touch,
            mobile = detection.os.mobile,
            "captured detection"
        );

        detection
    }

    /// Device classification derived from the mobile/phone/tablet flags.
    pub fn device_class(&self) -> DeviceClass {
        DeviceClass::from_platform(&self.os)
    }
}

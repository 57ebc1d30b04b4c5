// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Operating system and device classification from identity strings

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::detector::DetectionTuning;
use crate::env::ScreenMetrics;

/// User-agent fragments that mark a mobile device.
const MOBILE_TOKENS: [&str; 30] = [
    "iemobile",
    "midp",
    "240x320",
    "blackberry",
    "netfront",
    "nokia",
    "panasonic",
    "portalmmm",
    "sharp",
    "sie-",
    "sonyericsson",
    "symbian",
    "windows ce",
    "benq",
    "mda",
    "mot-",
    "opera mini",
    "philips",
    "pocket pc",
    "sagem",
    "samsung",
    "sda",
    "sgh-",
    "vodafone",
    "xda",
    "palm",
    "iphone",
    "ipod",
    "ipad",
    "android",
];

fn ios_version_regex() -> &'static Regex {
    static IOS_VERSION: OnceLock<Regex> = OnceLock::new();
    IOS_VERSION.get_or_init(|| Regex::new(r"os (\d+_\d+)").unwrap())
}

/// OS detection results
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PlatformInfo {
    /// Mac desktop
    pub mac: bool,
    /// Windows desktop
    pub windows: bool,
    /// Linux desktop
    pub linux: bool,
    /// Any mobile device (phone or tablet)
    pub mobile: bool,
    /// Mobile phone device
    pub phone: bool,
    /// Mobile tablet device
    pub tablet: bool,
    /// Retina-density display
    pub retina: bool,
    /// Any iOS device (iPhone or iPad)
    pub ios: bool,
    /// iOS version number, 0.0 when not iOS or undetectable
    pub ios_version: f64,
    /// iPhone device
    pub iphone: bool,
    /// iPad device
    pub ipad: bool,
    /// Android device
    pub android: bool,
}

impl PlatformInfo {
    /// Classify the OS from lowercased identity strings and screen metrics.
    ///
    /// `phone` and `tablet` are mutually exclusive: within `mobile`, the
    /// screen height threshold gates phone, and tablet is the remainder.
    pub fn detect(
        user_agent: &str,
        platform: &str,
        app_version: &str,
        screen: ScreenMetrics,
        tuning: &DetectionTuning,
    ) -> Self {
        let mobile = is_mobile(user_agent, &tuning.extra_mobile_tokens);
        let phone = mobile && screen.height <= tuning.phone_max_height;
        let tablet = mobile && !phone;

        let iphone = user_agent.contains("iphone");
        let ipad = user_agent.contains("ipad");
        let ios = iphone || ipad;

        PlatformInfo {
            mac: platform.contains("mac"),
            windows: platform.contains("win"),
            linux: platform.contains("linux"),
            mobile,
            phone,
            tablet,
            retina: screen.pixel_ratio > 1.0,
            ios,
            ios_version: if ios { ios_version(app_version) } else { 0.0 },
            iphone,
            ipad,
            android: user_agent.contains("android"),
        }
    }
}

/// Linear scan for any known mobile token, then any configured extra.
fn is_mobile(user_agent: &str, extra_tokens: &[String]) -> bool {
    MOBILE_TOKENS
        .iter()
        .any(|token| user_agent.contains(token))
        || extra_tokens.iter().any(|token| user_agent.contains(token.as_str()))
}

/// Parse the iOS version from the app-version string.
///
/// iOS reports an underscore-separated pair ("os 7_1"); the pair becomes a
/// dotted float. 0.0 when absent or malformed.
fn ios_version(app_version: &str) -> f64 {
    ios_version_regex()
        .captures(app_version)
        .and_then(|captures| captures.get(1))
        .map(|pair| pair.as_str().replace('_', "."))
        .and_then(|version| version.parse::<f64>().ok())
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detect(user_agent: &str, platform: &str, app_version: &str, height: u32) -> PlatformInfo {
        PlatformInfo::detect(
            user_agent,
            platform,
            app_version,
            ScreenMetrics {
                width: 0,
                height,
                pixel_ratio: 1.0,
            },
            &DetectionTuning::default(),
        )
    }

    #[test]
    fn test_android_is_mobile() {
        let os = detect("mozilla/5.0 (linux; android 4.4.2)", "linux armv8l", "", 640);
        assert!(os.mobile);
        assert!(os.android);
    }

    #[test]
    fn test_tokenless_agent_is_not_mobile() {
        let os = detect(
            "mozilla/5.0 (x11; linux x86_64; rv:109.0) gecko/20100101 firefox/115.0",
            "linux x86_64",
            "",
            1080,
        );
        assert!(!os.mobile);
        assert!(!os.phone);
        assert!(!os.tablet);
    }

    #[test]
    fn test_phone_tablet_split_at_threshold() {
        let phone = detect("mozilla/5.0 (linux; android 9)", "linux armv8l", "", 600);
        assert!(phone.phone);
        assert!(!phone.tablet);

        let tablet = detect("mozilla/5.0 (linux; android 9)", "linux armv8l", "", 601);
        assert!(tablet.tablet);
        assert!(!tablet.phone);
    }

    #[test]
    fn test_desktop_platform_strings() {
        assert!(detect("mozilla/5.0", "macintel", "", 1080).mac);
        assert!(detect("mozilla/5.0", "win32", "", 1080).windows);
        assert!(detect("mozilla/5.0", "linux x86_64", "", 1080).linux);
    }

    #[test]
    fn test_ios_devices_and_version() {
        let os = detect(
            "mozilla/5.0 (iphone; cpu iphone os 7_1 like mac os x)",
            "iphone",
            "5.0 (iphone; cpu iphone os 7_1 like mac os x)",
            568,
        );
        assert!(os.iphone);
        assert!(!os.ipad);
        assert!(os.ios);
        assert!((os.ios_version - 7.1).abs() < f64::EPSILON);

        let os = detect(
            "mozilla/5.0 (ipad; cpu os 10_3 like mac os x)",
            "ipad",
            "5.0 (ipad; cpu os 10_3 like mac os x)",
            1024,
        );
        assert!(os.ipad);
        assert!((os.ios_version - 10.3).abs() < f64::EPSILON);
    }

    #[test]
    fn test_ios_version_zero_when_malformed() {
        let os = detect(
            "mozilla/5.0 (iphone like mac os x)",
            "iphone",
            "5.0 (iphone like mac os x)",
            568,
        );
        assert!(os.ios);
        assert_eq!(os.ios_version, 0.0);
    }

    #[test]
    fn test_ios_version_not_parsed_for_non_ios() {
        // An app-version that happens to contain an "os N_N" pair must not
        // leak a version onto a non-iOS platform.
        let os = detect(
            "mozilla/5.0 (macintosh; intel mac os x 10_15_7)",
            "macintel",
            "5.0 (macintosh; intel mac os x 10_15_7)",
            1080,
        );
        assert!(!os.ios);
        assert_eq!(os.ios_version, 0.0);
    }

    #[test]
    fn test_retina_from_pixel_ratio() {
        let retina = PlatformInfo::detect(
            "mozilla/5.0",
            "macintel",
            "",
            ScreenMetrics {
                width: 1440,
                height: 900,
                pixel_ratio: 2.0,
            },
            &DetectionTuning::default(),
        );
        assert!(retina.retina);

        let standard = PlatformInfo::detect(
            "mozilla/5.0",
            "macintel",
            "",
            ScreenMetrics {
                width: 1440,
                height: 900,
                pixel_ratio: 1.0,
            },
            &DetectionTuning::default(),
        );
        assert!(!standard.retina);
    }

    #[test]
    fn test_extra_mobile_tokens() {
        let tuning = DetectionTuning {
            extra_mobile_tokens: vec!["kiosk-tab".to_string()],
            ..DetectionTuning::default()
        };
        let os = PlatformInfo::detect(
            "mozilla/5.0 (kiosk-tab build 12)",
            "linux armv8l",
            "",
            ScreenMetrics {
                width: 800,
                height: 1280,
                pixel_ratio: 1.0,
            },
            &tuning,
        );
        assert!(os.mobile);
        assert!(os.tablet);
    }

    #[test]
    fn test_legacy_handset_tokens() {
        for agent in [
            "portalmmm/2.0 n410i",
            "sonyericssonk750i/r1ca",
            "mozilla/4.0 (compatible; msie 6.0; windows ce; iemobile 8.12)",
            "opera mini/9.80",
        ] {
            assert!(is_mobile(agent, &[]), "expected mobile: {agent}");
        }
    }
}

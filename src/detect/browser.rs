// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Browser identification from identity strings and frame/app-mode signals

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::os::PlatformInfo;

/// IE 11 dropped the "msie" token from its app-version string, so a version
/// that cannot be read from a detected IE is IE 11.
const IE_FALLBACK_VERSION: f64 = 11.0;

fn ie_version_regex() -> &'static Regex {
    static IE_VERSION: OnceLock<Regex> = OnceLock::new();
    IE_VERSION.get_or_init(|| Regex::new(r"msie (\d+\.\d+)").unwrap())
}

/// Browser detection results
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BrowserInfo {
    /// Internet Explorer
    pub ie: bool,
    /// Internet Explorer version number, 0.0 when not IE
    pub ie_version: f64,
    /// Firefox
    pub firefox: bool,
    /// Safari
    pub safari: bool,
    /// Chrome (desktop and Android)
    pub chrome: bool,
    /// Stock Android browser
    pub android_browser: bool,
    /// Window is hosted within an iframe
    pub iframed: bool,
    /// Window is in iOS full-screen app mode
    pub app_mode: bool,
}

impl BrowserInfo {
    /// Classify the browser from lowercased identity strings and the already
    /// computed OS flags.
    pub fn detect(
        user_agent: &str,
        vendor: &str,
        app_version: &str,
        os: &PlatformInfo,
        standalone: bool,
        top_window: bool,
    ) -> Self {
        let ie = user_agent.contains("msie") || user_agent.contains("trident");
        let chrome = user_agent.contains("chrome");

        BrowserInfo {
            ie,
            ie_version: if ie { ie_version(app_version) } else { 0.0 },
            firefox: user_agent.contains("firefox"),
            safari: vendor.contains("apple") && user_agent.contains("safari"),
            chrome,
            // Anything identifying as Android without Chrome is the stock browser.
            android_browser: os.android && !chrome,
            app_mode: standalone,
            iframed: !top_window,
        }
    }
}

/// Parse the IE version from the app-version string.
///
/// Falls back to 11.0 when the match is absent or yields zero.
fn ie_version(app_version: &str) -> f64 {
    let parsed = ie_version_regex()
        .captures(app_version)
        .and_then(|captures| captures.get(1))
        .and_then(|version| version.as_str().parse::<f64>().ok())
        .unwrap_or(0.0);

    if parsed == 0.0 {
        IE_FALLBACK_VERSION
    } else {
        parsed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn desktop() -> PlatformInfo {
        PlatformInfo::default()
    }

    fn android_os() -> PlatformInfo {
        PlatformInfo {
            android: true,
            mobile: true,
            ..PlatformInfo::default()
        }
    }

    #[test]
    fn test_ie9_version_parsed_from_app_version() {
        let browser = BrowserInfo::detect(
            "mozilla/5.0 (compatible; msie 9.0; windows nt 6.1; trident/5.0)",
            "",
            "5.0 (compatible; msie 9.0; windows nt 6.1; trident/5.0)",
            &desktop(),
            false,
            true,
        );
        assert!(browser.ie);
        assert!((browser.ie_version - 9.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_trident_without_msie_is_ie11() {
        let browser = BrowserInfo::detect(
            "mozilla/5.0 (windows nt 6.3; trident/7.0; rv:11.0) like gecko",
            "",
            "5.0 (windows nt 6.3; trident/7.0; rv:11.0) like gecko",
            &desktop(),
            false,
            true,
        );
        assert!(browser.ie);
        assert!((browser.ie_version - 11.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_zero_version_match_falls_back_to_11() {
        let browser = BrowserInfo::detect(
            "mozilla/5.0 (compatible; msie 0.0)",
            "",
            "5.0 (compatible; msie 0.0)",
            &desktop(),
            false,
            true,
        );
        assert!((browser.ie_version - 11.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_non_ie_has_zero_version() {
        let browser = BrowserInfo::detect(
            "mozilla/5.0 firefox/115.0",
            "",
            "5.0 firefox/115.0",
            &desktop(),
            false,
            true,
        );
        assert!(!browser.ie);
        assert_eq!(browser.ie_version, 0.0);
        assert!(browser.firefox);
    }

    #[test]
    fn test_safari_requires_apple_vendor() {
        let safari = BrowserInfo::detect(
            "mozilla/5.0 version/7.0 safari/9537.53",
            "apple computer, inc.",
            "",
            &desktop(),
            false,
            true,
        );
        assert!(safari.safari);
        assert!(!safari.chrome);

        // Chrome carries "safari" in its user-agent but a Google vendor.
        let chrome = BrowserInfo::detect(
            "mozilla/5.0 chrome/120.0.0.0 safari/537.36",
            "google inc.",
            "",
            &desktop(),
            false,
            true,
        );
        assert!(chrome.chrome);
        assert!(!chrome.safari);
    }

    #[test]
    fn test_stock_android_browser() {
        let stock = BrowserInfo::detect(
            "mozilla/5.0 (linux; u; android 2.3.5) version/4.0 mobile safari/533.1",
            "",
            "",
            &android_os(),
            false,
            true,
        );
        assert!(stock.android_browser);

        let chrome = BrowserInfo::detect(
            "mozilla/5.0 (linux; android 4.4.2) chrome/33.0.1750.136 mobile safari/537.36",
            "google inc.",
            "",
            &android_os(),
            false,
            true,
        );
        assert!(chrome.chrome);
        assert!(!chrome.android_browser);
    }

    #[test]
    fn test_frame_and_app_mode_signals() {
        let browser = BrowserInfo::detect("mozilla/5.0", "", "", &desktop(), true, false);
        assert!(browser.app_mode);
        assert!(browser.iframed);

        let browser = BrowserInfo::detect("mozilla/5.0", "", "", &desktop(), false, true);
        assert!(!browser.app_mode);
        assert!(!browser.iframed);
    }
}

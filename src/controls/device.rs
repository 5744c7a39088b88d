// SPDX-License-Identifier: MPL-2.0
//! Device class detection.
//!
//! Touch devices get enlarged controls and keep the default stacking order
//! in fullscreen. The class is derived once when the controls are built.

/// Substrings that mark a mobile user agent. Matched case-insensitively.
const MOBILE_MARKERS: [&str; 8] = [
    "android",
    "webos",
    "iphone",
    "ipad",
    "ipod",
    "blackberry",
    "windows phone",
    "mobile",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeviceClass {
    #[default]
    Desktop,
    Mobile,
}

impl DeviceClass {
    /// Classifies a user agent string. Chrome OS reports Android markers but
    /// is treated as a desktop.
    #[must_use]
    pub fn from_user_agent(user_agent: &str) -> Self {
        if user_agent.contains("CrOS") {
            return DeviceClass::Desktop;
        }
        let lowered = user_agent.to_lowercase();
        if MOBILE_MARKERS.iter().any(|marker| lowered.contains(marker)) {
            DeviceClass::Mobile
        } else {
            DeviceClass::Desktop
        }
    }

    /// Classifies the platform this binary runs on.
    #[must_use]
    pub fn detect() -> Self {
        if cfg!(any(target_os = "android", target_os = "ios")) {
            DeviceClass::Mobile
        } else {
            DeviceClass::Desktop
        }
    }

    #[must_use]
    pub fn is_mobile(self) -> bool {
        self == DeviceClass::Mobile
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phones_and_tablets_are_mobile() {
        for ua in [
            "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) Mobile/15E148",
            "Mozilla/5.0 (iPad; CPU OS 16_0 like Mac OS X)",
            "Mozilla/5.0 (Linux; Android 14; Pixel 8)",
            "Mozilla/5.0 (BlackBerry; U; BlackBerry 9900)",
            "Mozilla/5.0 (Windows Phone 10.0; Android 6.0.1)",
        ] {
            assert_eq!(DeviceClass::from_user_agent(ua), DeviceClass::Mobile, "{ua}");
        }
    }

    #[test]
    fn chrome_os_is_desktop_despite_android_marker() {
        let ua = "Mozilla/5.0 (X11; CrOS x86_64 14541.0.0) Android";
        assert_eq!(DeviceClass::from_user_agent(ua), DeviceClass::Desktop);
    }

    #[test]
    fn desktop_browsers_are_desktop() {
        let ua = "Mozilla/5.0 (X11; Linux x86_64; rv:120.0) Gecko/20100101 Firefox/120.0";
        assert_eq!(DeviceClass::from_user_agent(ua), DeviceClass::Desktop);
        assert!(!DeviceClass::Desktop.is_mobile());
    }
}

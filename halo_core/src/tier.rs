// Copyright 2026 the Halo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Device capability tiers.
//!
//! Every cost decision the engine makes (target frame rate, time scaling,
//! overlay throttling, ray count, pointer tracking) reads a single
//! [`CapabilityTier`]. The tier is derived from a [`Viewport`] sample, which
//! the host injects explicitly rather than the engine looking it up.

use alloc::string::String;

/// Coarse device capability classification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CapabilityTier {
    /// Narrow viewport or handheld device: lower frame rate, slower motion,
    /// throttled overlays, no pointer tracking.
    Constrained,
    /// Everything else.
    Full,
}

impl CapabilityTier {
    /// Returns `true` for [`CapabilityTier::Full`].
    #[inline]
    #[must_use]
    pub const fn is_full(self) -> bool {
        matches!(self, Self::Full)
    }

    /// Short label for diagnostics.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Constrained => "constrained",
            Self::Full => "full",
        }
    }
}

/// A sample of the host's viewport signal.
#[derive(Clone, Debug, PartialEq)]
pub struct Viewport {
    /// Viewport width in logical (CSS) pixels.
    pub width: f64,
    /// Device identification string (the browser user agent).
    pub device_signature: String,
}

impl Viewport {
    /// Creates a viewport sample.
    #[must_use]
    pub fn new(width: f64, device_signature: impl Into<String>) -> Self {
        Self {
            width,
            device_signature: device_signature.into(),
        }
    }
}

/// Device families treated as handheld, matched case-insensitively anywhere in
/// the device signature.
pub const MOBILE_DEVICE_FAMILIES: [&str; 8] = [
    "Android",
    "webOS",
    "iPhone",
    "iPad",
    "iPod",
    "BlackBerry",
    "IEMobile",
    "Opera Mini",
];

/// Classifies viewports into [`CapabilityTier`]s.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TierClassifier {
    /// Viewports strictly narrower than this (logical pixels) are constrained.
    pub mobile_width: f64,
}

impl TierClassifier {
    /// The default classifier: 768 logical pixels.
    pub const DEFAULT: Self = Self {
        mobile_width: 768.0,
    };

    /// Creates a classifier with a custom width threshold.
    #[must_use]
    pub const fn with_mobile_width(mobile_width: f64) -> Self {
        Self { mobile_width }
    }

    /// Classifies a width and device signature.
    ///
    /// Constrained when `viewport_width < mobile_width` or the signature names a
    /// [mobile device family](MOBILE_DEVICE_FAMILIES); Full otherwise. A `NaN`
    /// width compares false and therefore does not make the tier constrained.
    #[must_use]
    pub fn classify(&self, viewport_width: f64, device_signature: &str) -> CapabilityTier {
        if viewport_width < self.mobile_width || is_mobile_signature(device_signature) {
            CapabilityTier::Constrained
        } else {
            CapabilityTier::Full
        }
    }

    /// Classifies a [`Viewport`] sample.
    #[must_use]
    pub fn classify_viewport(&self, viewport: &Viewport) -> CapabilityTier {
        self.classify(viewport.width, &viewport.device_signature)
    }
}

impl Default for TierClassifier {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Classifies with the [default threshold](TierClassifier::DEFAULT).
#[must_use]
pub fn classify(viewport_width: f64, device_signature: &str) -> CapabilityTier {
    TierClassifier::DEFAULT.classify(viewport_width, device_signature)
}

/// Returns `true` if `signature` contains any of the
/// [`MOBILE_DEVICE_FAMILIES`], ignoring ASCII case.
#[must_use]
pub fn is_mobile_signature(signature: &str) -> bool {
    let haystack = signature.as_bytes();
    MOBILE_DEVICE_FAMILIES.iter().any(|family| {
        let needle = family.as_bytes();
        haystack.len() >= needle.len()
            && haystack
                .windows(needle.len())
                .any(|window| window.eq_ignore_ascii_case(needle))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const DESKTOP_UA: &str =
        "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/126.0";

    #[test]
    fn width_threshold_is_exclusive() {
        for w in [0.0, 1.0, 320.0, 400.0, 767.0, 767.99] {
            assert_eq!(classify(w, ""), CapabilityTier::Constrained, "width {w}");
        }
        for w in [768.0, 768.5, 1024.0, 1920.0, 10_000.0] {
            assert_eq!(classify(w, ""), CapabilityTier::Full, "width {w}");
        }
    }

    #[test]
    fn mobile_signature_wins_over_width() {
        let signatures = [
            "Mozilla/5.0 (Linux; Android 14; Pixel 8) AppleWebKit/537.36",
            "Mozilla/5.0 (iPhone; CPU iPhone OS 17_5 like Mac OS X)",
            "Mozilla/5.0 (iPad; CPU OS 17_5 like Mac OS X)",
            "Mozilla/5.0 (iPod touch; CPU iPhone OS 12_0 like Mac OS X)",
            "Mozilla/5.0 (webOS/1.4.0; U; en-US) AppleWebKit/532.2",
            "Mozilla/5.0 (BlackBerry; U; BlackBerry 9900; en)",
            "Mozilla/5.0 (compatible; MSIE 9.0; Windows Phone OS 7.5; IEMobile/9.0)",
            "Opera/9.80 (J2ME/MIDP; Opera Mini/9.80 (S60; SymbOS; Opera Mobi/23.348; U; en)",
        ];
        for sig in signatures {
            for w in [320.0, 1024.0, 2560.0] {
                assert_eq!(classify(w, sig), CapabilityTier::Constrained, "{sig} @ {w}");
            }
        }
    }

    #[test]
    fn signature_match_ignores_case() {
        assert!(is_mobile_signature("some ANDROID build"));
        assert!(is_mobile_signature("opera mini"));
        assert!(!is_mobile_signature(DESKTOP_UA));
        assert!(!is_mobile_signature(""));
        assert!(!is_mobile_signature("iP"));
    }

    #[test]
    fn desktop_signature_uses_width() {
        assert_eq!(classify(1280.0, DESKTOP_UA), CapabilityTier::Full);
        assert_eq!(classify(500.0, DESKTOP_UA), CapabilityTier::Constrained);
    }

    #[test]
    fn custom_threshold() {
        let classifier = TierClassifier::with_mobile_width(1024.0);
        assert_eq!(classifier.classify(900.0, ""), CapabilityTier::Constrained);
        assert_eq!(classifier.classify(1024.0, ""), CapabilityTier::Full);

        let viewport = Viewport::new(1100.0, "iPad");
        assert_eq!(
            classifier.classify_viewport(&viewport),
            CapabilityTier::Constrained
        );
    }

    #[test]
    fn nan_width_is_not_constrained() {
        assert_eq!(classify(f64::NAN, ""), CapabilityTier::Full);
    }
}

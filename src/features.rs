//! Capability detection
//!
//! Full multilingual plugins manage `lang` themselves. When one is present
//! the switcher stays out of the way entirely.

use langswitch_core::RuntimeProbe;
use std::fmt;

/// Constant defined by WPML
pub const WPML_CONSTANT: &str = "ICL_SITEPRESS_VERSION";
/// Class loaded by WPML
pub const WPML_CLASS: &str = "SitePress";
/// Class loaded by Polylang
pub const POLYLANG_CLASS: &str = "Polylang";
/// Constant defined by Polylang
pub const POLYLANG_CONSTANT: &str = "POLYLANG_VERSION";

/// A multilingual plugin that takes precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Competitor {
    /// WPML
    Wpml,
    /// Polylang
    Polylang,
}

impl Competitor {
    /// First competitor whose marker the probe reports.
    pub fn detect(probe: &dyn RuntimeProbe) -> Option<Self> {
        if probe.constant_defined(WPML_CONSTANT) || probe.class_exists(WPML_CLASS) {
            return Some(Self::Wpml);
        }
        if probe.class_exists(POLYLANG_CLASS) || probe.constant_defined(POLYLANG_CONSTANT) {
            return Some(Self::Polylang);
        }
        None
    }

    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Wpml => "WPML",
            Self::Polylang => "Polylang",
        }
    }
}

impl fmt::Display for Competitor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What the plugin may wire up, fixed at boot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Features {
    /// Detected multilingual plugin
    pub competitor: Option<Competitor>,
    /// Request is served by the back office
    pub admin: bool,
}

impl Features {
    /// Probe the host once.
    pub fn detect(probe: &dyn RuntimeProbe, admin: bool) -> Self {
        Self {
            competitor: Competitor::detect(probe),
            admin,
        }
    }

    /// Output filter and editor may be registered
    pub fn integration_enabled(&self) -> bool {
        self.competitor.is_none()
    }

    /// Editor surfaces may be registered
    pub fn admin_enabled(&self) -> bool {
        self.integration_enabled() && self.admin
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use langswitch_core::testing::StaticProbe;

    #[test]
    fn test_no_competitor() {
        let features = Features::detect(&StaticProbe::empty(), true);
        assert_eq!(features.competitor, None);
        assert!(features.integration_enabled());
        assert!(features.admin_enabled());
        assert!(!Features::detect(&StaticProbe::empty(), false).admin_enabled());
    }

    #[test]
    fn test_each_marker() {
        let cases = [
            (StaticProbe::empty().with_constant("ICL_SITEPRESS_VERSION"), Competitor::Wpml),
            (StaticProbe::empty().with_class("SitePress"), Competitor::Wpml),
            (StaticProbe::empty().with_class("Polylang"), Competitor::Polylang),
            (StaticProbe::empty().with_constant("POLYLANG_VERSION"), Competitor::Polylang),
        ];
        for (probe, expected) in cases {
            let features = Features::detect(&probe, true);
            assert_eq!(features.competitor, Some(expected));
            assert!(!features.integration_enabled());
            assert!(!features.admin_enabled());
        }
    }

    #[test]
    fn test_markers_are_exact() {
        let probe = StaticProbe::empty()
            .with_class("Polylang_Pro_Addon")
            .with_constant("SITEPRESS");
        assert_eq!(Competitor::detect(&probe), None);
    }
}

//! Adaptive Connectivity Preference
//!
//! Summary and decoration for the adaptive-connectivity row on the network
//! settings screen.

use serde::{Deserialize, Serialize};

use rise_settings_core::{SettingsStore, StringsConfig};

/// Secure setting holding the on/off state
pub const ADAPTIVE_CONNECTIVITY_ENABLED: &str = "adaptive_connectivity_enabled";

/// Drawable used for the row icon
pub const ICON: &str = "ic_adaptive_connectivity";

/// Whether a preference controller applies on this device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AvailabilityStatus {
    Available,
    UnsupportedOnDevice,
}

/// Title and icon applied to the row when the feature is shown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreferenceDecoration {
    pub title: String,
    pub icon: &'static str,
}

#[derive(Debug, Clone)]
pub struct AdaptiveConnectivity {
    enabled: bool,
}

impl AdaptiveConnectivity {
    /// `enabled` comes from the device overlay (`config_show_adaptive_connectivity`)
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn availability(&self) -> AvailabilityStatus {
        if self.enabled {
            AvailabilityStatus::Available
        } else {
            AvailabilityStatus::UnsupportedOnDevice
        }
    }

    /// "On" unless the setting is explicitly something other than 1
    pub fn summary(&self, settings: &impl SettingsStore, strings: &StringsConfig) -> String {
        if settings.get_int(ADAPTIVE_CONNECTIVITY_ENABLED, 1) == 1 {
            strings.adaptive_connectivity_switch_on.clone()
        } else {
            strings.adaptive_connectivity_switch_off.clone()
        }
    }

    /// Decoration for a row that exists and is visible; `None` leaves it untouched
    pub fn decorate(
        &self,
        preference_visible: Option<bool>,
        strings: &StringsConfig,
    ) -> Option<PreferenceDecoration> {
        if !self.enabled || preference_visible != Some(true) {
            return None;
        }

        Some(PreferenceDecoration {
            title: strings.adaptive_connectivity_title.clone(),
            icon: ICON,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rise_settings_core::MapSettingsStore;

    #[test]
    fn test_availability() {
        assert_eq!(AdaptiveConnectivity::new(true).availability(), AvailabilityStatus::Available);
        assert_eq!(
            AdaptiveConnectivity::new(false).availability(),
            AvailabilityStatus::UnsupportedOnDevice
        );
    }

    #[test]
    fn test_summary_defaults_to_on() {
        let strings = StringsConfig::default();
        let controller = AdaptiveConnectivity::new(true);

        assert_eq!(controller.summary(&MapSettingsStore::new(), &strings), "On");

        let off = MapSettingsStore::new().with(ADAPTIVE_CONNECTIVITY_ENABLED, "0");
        assert_eq!(controller.summary(&off, &strings), "Off");
    }

    #[test]
    fn test_decorate() {
        let strings = StringsConfig::default();
        let enabled = AdaptiveConnectivity::new(true);

        let decoration = enabled.decorate(Some(true), &strings).unwrap();
        assert_eq!(decoration.title, "Adaptive connectivity");
        assert_eq!(decoration.icon, ICON);

        assert!(enabled.decorate(Some(false), &strings).is_none());
        assert!(enabled.decorate(None, &strings).is_none());
        assert!(AdaptiveConnectivity::new(false).decorate(Some(true), &strings).is_none());
    }
}

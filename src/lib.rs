//! RisingOS Settings - about-screen logic outside the Settings app
//!
//! Resolves the firmware-version and hardware rows the RisingOS Settings app
//! shows, from a `build.prop` file or a live device.
//!
//! ## Architecture
//!
//! - `rise-settings-core`: configuration, errors, property and settings stores
//! - `rise-settings-deviceinfo`: build info resolver and hardware summary
//! - `rise-settings-prefs`: ringtone, card and connectivity preference rules
//! - `rise-settings-bridge`: ADB access for property snapshots and probes

#![warn(clippy::all)]

pub mod commands;

pub use rise_settings_bridge as bridge;
pub use rise_settings_core as core;
pub use rise_settings_deviceinfo as deviceinfo;
pub use rise_settings_prefs as prefs;

/// Prelude module for convenient imports
pub mod prelude {
    pub use rise_settings_bridge::AdbClient;
    pub use rise_settings_core::{AppConfig, MapPropertyStore, PlatformIdentity, PropertyStore};
    pub use rise_settings_deviceinfo::{resolve, BuildInfo, BuildInfoResolver, BuildInfoStrings};
    pub use rise_settings_prefs::{AdaptiveConnectivity, CardPosition, DefaultRingtonePolicy};
}

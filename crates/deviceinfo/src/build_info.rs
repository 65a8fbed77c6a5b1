//! Firmware Build Info
//!
//! Turns the ROM's `ro.rising.*` properties into the strings shown on the
//! firmware-version screen. Every field has a defined fallback, so resolving
//! never fails: missing values show the localized placeholder.

use serde::{Deserialize, Serialize};
use tracing::debug;

use rise_settings_core::{format_template, PlatformIdentity, PropertyStore, StringsConfig};

/// Preference keys on the firmware-version screen
pub mod keys {
    pub const RISING_DEVICE: &str = "rising_device";
    pub const RISING_VERSION: &str = "rising_version";
    pub const BUILD_STATUS: &str = "rom_build_status";
    pub const BUILD_VERSION: &str = "rising_build_version";
}

/// ROM build properties read by the resolver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PropertyKey {
    Version,
    VersionCode,
    ReleaseType,
    Maintainer,
    Device,
    BuildType,
    BuildVersion,
}

impl PropertyKey {
    pub const ALL: [PropertyKey; 7] = [
        PropertyKey::Version,
        PropertyKey::VersionCode,
        PropertyKey::ReleaseType,
        PropertyKey::Maintainer,
        PropertyKey::Device,
        PropertyKey::BuildType,
        PropertyKey::BuildVersion,
    ];

    /// System property backing this key
    pub fn property_name(&self) -> &'static str {
        match self {
            PropertyKey::Version => "ro.rising.version",
            PropertyKey::VersionCode => "ro.rising.code",
            PropertyKey::ReleaseType => "ro.rising.releasetype",
            PropertyKey::Maintainer => "ro.rising.maintainer",
            PropertyKey::Device => "ro.rising.device",
            PropertyKey::BuildType => "ro.rising.packagetype",
            PropertyKey::BuildVersion => "ro.rising.build.version",
        }
    }
}

/// Icon shown next to the build status row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconSelector {
    Verified,
    Unverified,
}

impl IconSelector {
    pub fn for_official(is_official: bool) -> Self {
        if is_official {
            IconSelector::Verified
        } else {
            IconSelector::Unverified
        }
    }

    /// Drawable resource name
    pub fn drawable(&self) -> &'static str {
        match self {
            IconSelector::Verified => "verified",
            IconSelector::Unverified => "unverified",
        }
    }
}

/// Localized strings consumed by the resolver
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildInfoStrings {
    /// Substituted for any missing or empty property
    pub placeholder: String,
    pub official_title: String,
    pub community_title: String,
    /// `%1$s` receives the maintainer name
    pub official_summary: String,
    pub official_summary_missing: String,
    /// `%1$s` receives the maintainer name
    pub community_summary: String,
    pub community_summary_missing: String,
}

impl BuildInfoStrings {
    pub fn from_config(strings: &StringsConfig) -> Self {
        Self {
            placeholder: strings.device_info_default.clone(),
            official_title: strings.build_is_official_title.clone(),
            community_title: strings.build_is_community_title.clone(),
            official_summary: strings.build_is_official_summary.clone(),
            official_summary_missing: strings.build_is_official_summary_oopsie.clone(),
            community_summary: strings.build_is_community_summary.clone(),
            community_summary_missing: strings.build_is_community_summary_oopsie.clone(),
        }
    }
}

impl Default for BuildInfoStrings {
    fn default() -> Self {
        Self::from_config(&StringsConfig::default())
    }
}

/// Display-ready build information
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildInfo {
    pub device_name: String,
    pub version_summary: String,
    pub release_type_label: String,
    pub build_version: String,
    pub is_official: bool,
    pub build_status_label: String,
    pub maintainer_summary: String,
    pub icon: IconSelector,
}

/// One row update on the firmware-version screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreferenceUpdate<'a> {
    pub key: &'static str,
    pub title: Option<&'a str>,
    pub summary: Option<&'a str>,
    pub icon: Option<IconSelector>,
}

impl BuildInfo {
    /// Row updates in the order the screen applies them
    pub fn preference_updates(&self) -> Vec<PreferenceUpdate<'_>> {
        vec![
            PreferenceUpdate {
                key: keys::BUILD_STATUS,
                title: Some(self.build_status_label.as_str()),
                summary: Some(self.maintainer_summary.as_str()),
                icon: Some(self.icon),
            },
            PreferenceUpdate {
                key: keys::BUILD_VERSION,
                title: None,
                summary: Some(self.build_version.as_str()),
                icon: None,
            },
            PreferenceUpdate {
                key: keys::RISING_VERSION,
                title: None,
                summary: Some(self.version_summary.as_str()),
                icon: None,
            },
            PreferenceUpdate {
                key: keys::RISING_DEVICE,
                title: None,
                summary: Some(self.device_name.as_str()),
                icon: None,
            },
        ]
    }
}

/// Derives [`BuildInfo`] fields from an injected property store
pub struct BuildInfoResolver<'a, S: PropertyStore + ?Sized> {
    store: &'a S,
    identity: &'a PlatformIdentity,
    strings: &'a BuildInfoStrings,
}

impl<'a, S: PropertyStore + ?Sized> BuildInfoResolver<'a, S> {
    pub fn new(store: &'a S, identity: &'a PlatformIdentity, strings: &'a BuildInfoStrings) -> Self {
        Self {
            store,
            identity,
            strings,
        }
    }

    /// Property value, or the placeholder when unset or empty
    pub fn property_or_default(&self, key: PropertyKey) -> String {
        let value = self.store.get(key.property_name(), "");
        if value.is_empty() {
            debug!("{} not set, using placeholder", key.property_name());
            self.strings.placeholder.clone()
        } else {
            value
        }
    }

    /// ROM-provided device name, falling back to `"<manufacturer> <model>"`
    pub fn device_name(&self) -> String {
        let device = self.store.get(PropertyKey::Device.property_name(), "");
        if !device.trim().is_empty() {
            return device;
        }

        if self.identity.manufacturer.is_empty() && self.identity.model.is_empty() {
            return self.strings.placeholder.clone();
        }
        self.identity.display_name()
    }

    /// `"<version> | <versionCode> | <buildType>"`
    pub fn version_summary(&self) -> String {
        [PropertyKey::Version, PropertyKey::VersionCode, PropertyKey::BuildType]
            .iter()
            .map(|key| self.property_or_default(*key))
            .collect::<Vec<_>>()
            .join(" | ")
    }

    pub fn release_type_label(&self) -> String {
        capitalize(&self.property_or_default(PropertyKey::ReleaseType))
    }

    pub fn build_version(&self) -> String {
        self.property_or_default(PropertyKey::BuildVersion)
    }

    /// Compares the raw release type, not the capitalized label
    pub fn is_official(&self) -> bool {
        self.property_or_default(PropertyKey::ReleaseType).to_lowercase() == "official"
    }

    pub fn build_status_label(&self) -> String {
        status_label(self.is_official(), self.strings)
    }

    pub fn icon(&self) -> IconSelector {
        IconSelector::for_official(self.is_official())
    }

    pub fn maintainer_summary(&self) -> String {
        maintainer_summary(
            self.is_official(),
            &self.property_or_default(PropertyKey::Maintainer),
            self.strings,
        )
    }

    /// Resolve every field at once
    pub fn resolve(&self) -> BuildInfo {
        let is_official = self.is_official();
        let maintainer = self.property_or_default(PropertyKey::Maintainer);

        BuildInfo {
            device_name: self.device_name(),
            version_summary: self.version_summary(),
            release_type_label: self.release_type_label(),
            build_version: self.build_version(),
            is_official,
            build_status_label: status_label(is_official, self.strings),
            maintainer_summary: maintainer_summary(is_official, &maintainer, self.strings),
            icon: IconSelector::for_official(is_official),
        }
    }
}

/// Resolve build info in one call
pub fn resolve<S: PropertyStore + ?Sized>(
    store: &S,
    identity: &PlatformIdentity,
    strings: &BuildInfoStrings,
) -> BuildInfo {
    BuildInfoResolver::new(store, identity, strings).resolve()
}

fn status_label(is_official: bool, strings: &BuildInfoStrings) -> String {
    if is_official {
        strings.official_title.clone()
    } else {
        strings.community_title.clone()
    }
}

fn maintainer_summary(is_official: bool, maintainer: &str, strings: &BuildInfoStrings) -> String {
    let maintainer = maintainer.trim();
    let unknown = maintainer.is_empty()
        || maintainer.eq_ignore_ascii_case("unknown")
        || maintainer == strings.placeholder;

    match (is_official, unknown) {
        (true, false) => format_template(&strings.official_summary, maintainer),
        (true, true) => strings.official_summary_missing.clone(),
        (false, true) => strings.community_summary_missing.clone(),
        (false, false) => format_template(&strings.community_summary, maintainer),
    }
}

/// Upper-case the first character, lower-case the rest
fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.as_str().to_lowercase().chars()).collect(),
        None => String::new(),
    }
}

//! CLI commands for rise-info
//!
//! Each command gathers its input (property file or device snapshot),
//! runs the matching resolver and returns the rendered output.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, Context, Result};
use tracing::info;

use rise_settings_bridge::AdbClient;
use rise_settings_core::{AppConfig, MapPropertyStore, PlatformIdentity, PropertyStore};
use rise_settings_deviceinfo::{
    resolve, BuildInfo, BuildInfoStrings, HardwareSpecs, HardwareSummary, PropertyKey,
};
use rise_settings_prefs::{DefaultRingtonePolicy, IgnoreReason, SaveDecision};

/// Where properties come from
#[derive(Debug, Clone)]
pub enum PropertySource {
    /// A `build.prop` style file
    File(PathBuf),
    /// A device over ADB (`None` = the only connected device)
    Device(Option<String>),
}

impl PropertySource {
    /// File wins over device; otherwise fall back to the configured default serial
    pub fn select(props: Option<PathBuf>, device: Option<String>, config: &AppConfig) -> Self {
        match props {
            Some(path) => PropertySource::File(path),
            None => PropertySource::Device(device.or_else(|| config.device.default_serial.clone())),
        }
    }

    async fn load(&self, adb: &AdbClient) -> Result<MapPropertyStore> {
        match self {
            PropertySource::File(path) => MapPropertyStore::load_build_prop(path)
                .await
                .with_context(|| format!("reading properties from {}", path.display())),
            PropertySource::Device(serial) => {
                if let Some(serial) = serial {
                    adb.usable_device(serial).await?;
                }
                adb.snapshot_props(serial.as_deref())
                    .await
                    .context("reading properties over adb")
            }
        }
    }
}

/// Load configuration from an explicit path or the default location.
///
/// An explicit path must exist; only the default location is created on demand.
pub async fn load_config(path: Option<&Path>) -> Result<AppConfig> {
    let loaded = match path {
        Some(path) => {
            if !path.exists() {
                bail!("Config file {} does not exist", path.display());
            }
            info!("Loading configuration from {:?}", path);
            AppConfig::load_from(path).await
        }
        None => AppConfig::load().await,
    };
    loaded.map_err(|e| anyhow!(e.user_message()))
}

fn adb_client(config: &AppConfig) -> AdbClient {
    AdbClient::new(config.device.sdk_path.as_deref())
}

/// Firmware build info
pub struct InfoCommand {
    pub source: PropertySource,
    pub json: bool,
    /// Also print the raw `ro.rising.*` values
    pub raw: bool,
}

impl InfoCommand {
    pub async fn execute(&self, config: &AppConfig) -> Result<String> {
        info!("Resolving build info from {:?}", self.source);

        let store = self.source.load(&adb_client(config)).await?;
        let identity = PlatformIdentity::from_store(&store);
        let strings = BuildInfoStrings::from_config(&config.strings);
        let build_info = resolve(&store, &identity, &strings);

        let mut out = if self.json {
            serde_json::to_string_pretty(&build_info)?
        } else {
            render_build_info(&build_info)?
        };

        if self.raw {
            out.push('\n');
            for key in PropertyKey::ALL {
                let name = key.property_name();
                writeln!(out, "[{}]: [{}]", name, store.get(name, ""))?;
            }
        }

        Ok(out)
    }
}

/// Text layout of the firmware-version rows
pub fn render_build_info(build_info: &BuildInfo) -> Result<String> {
    let mut out = String::new();
    writeln!(
        out,
        "{} [{}]",
        build_info.build_status_label,
        build_info.icon.drawable()
    )?;
    let rows = [
        ("Maintainer", &build_info.maintainer_summary),
        ("Release type", &build_info.release_type_label),
        ("Build version", &build_info.build_version),
        ("Version", &build_info.version_summary),
        ("Device", &build_info.device_name),
    ];
    for (label, value) in rows {
        writeln!(out, "{:<14} {}", format!("{}:", label), value)?;
    }
    Ok(out)
}

/// Hardware summary card
pub struct SpecsCommand {
    pub source: PropertySource,
    pub json: bool,
}

impl SpecsCommand {
    pub async fn execute(&self, config: &AppConfig) -> Result<String> {
        let adb = adb_client(config);
        let store = self.source.load(&adb).await?;

        let specs = match &self.source {
            PropertySource::Device(serial) => adb.probe_hardware(serial.as_deref(), &store).await,
            PropertySource::File(_) => HardwareSpecs {
                chipset: HardwareSpecs::chipset_from_store(&store),
                ..Default::default()
            },
        };

        let summary = HardwareSummary::from_specs(&specs, &config.strings.device_info_default);

        if self.json {
            return Ok(serde_json::to_string_pretty(&summary)?);
        }

        Ok(format!(
            "Chipset: {}\nStorage: {}\nBattery: {}\nDisplay: {}\n",
            summary.chipset, summary.storage, summary.battery, summary.display
        ))
    }
}

/// Connected devices
pub struct DevicesCommand;

impl DevicesCommand {
    pub async fn execute(&self, config: &AppConfig) -> Result<String> {
        let devices = adb_client(config).list_devices().await?;
        if devices.is_empty() {
            return Ok("No devices attached\n".to_string());
        }

        let mut out = String::new();
        for device in devices {
            writeln!(out, "{}\t{}", device.display_name(), device.state.as_str())?;
        }
        Ok(out)
    }
}

/// Default-ringtone save check
pub struct RingtoneCheckCommand {
    pub uri: Option<String>,
    pub mime: Option<String>,
}

impl RingtoneCheckCommand {
    pub fn execute(&self) -> String {
        let decision = DefaultRingtonePolicy.on_save(self.uri.as_deref(), self.mime.as_deref());
        match decision {
            SaveDecision::Apply(Some(uri)) => format!("apply: {}", uri),
            SaveDecision::Apply(None) => "apply: silent (default cleared)".to_string(),
            SaveDecision::Ignore(IgnoreReason::MimeUnavailable) => {
                "ignore: MIME type unavailable".to_string()
            }
            SaveDecision::Ignore(IgnoreReason::NotAudio(mime)) => {
                format!("ignore: {} is not an audio type", mime)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rise_settings_deviceinfo::IconSelector;

    #[test]
    fn test_render_build_info() {
        let build_info = BuildInfo {
            device_name: "Pixel 7".to_string(),
            version_summary: "3.1 | 42 | user".to_string(),
            release_type_label: "Official".to_string(),
            build_version: "RisingOS-3.1".to_string(),
            is_official: true,
            build_status_label: "Official build".to_string(),
            maintainer_summary: "Maintained by Alice".to_string(),
            icon: IconSelector::Verified,
        };
        let text = render_build_info(&build_info).unwrap();

        assert!(text.starts_with("Official build [verified]\n"));
        assert!(text.contains("Maintainer:    Maintained by Alice\n"));
        assert!(text.contains("Device:        Pixel 7\n"));
    }

    #[tokio::test]
    async fn test_load_config_requires_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("typo.toml");
        let err = load_config(Some(missing.as_path())).await.unwrap_err();
        assert!(err.to_string().contains("does not exist"));

        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[strings]\ndevice_info_default = \"N/A\"\n").unwrap();
        let config = load_config(Some(path.as_path())).await.unwrap();
        assert_eq!(config.strings.device_info_default, "N/A");
    }

    #[test]
    fn test_source_selection() {
        let mut config = AppConfig::default();
        config.device.default_serial = Some("emulator-5554".to_string());

        match PropertySource::select(None, None, &config) {
            PropertySource::Device(serial) => assert_eq!(serial.as_deref(), Some("emulator-5554")),
            other => panic!("unexpected source {other:?}"),
        }
        assert!(matches!(
            PropertySource::select(Some("build.prop".into()), Some("x".into()), &config),
            PropertySource::File(_)
        ));
    }

    #[test]
    fn test_ringtone_check() {
        let cmd = RingtoneCheckCommand {
            uri: Some("content://media/1".to_string()),
            mime: Some("video/mp4".to_string()),
        };
        assert_eq!(cmd.execute(), "ignore: video/mp4 is not an audio type");
    }

    #[tokio::test]
    async fn test_info_from_props_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("build.prop");
        std::fs::write(
            &path,
            "ro.product.manufacturer=Acme\n\
             ro.product.model=X1\n\
             ro.rising.version=3.1\n\
             ro.rising.code=42\n\
             ro.rising.packagetype=user\n\
             ro.rising.releasetype=OFFICIAL\n\
             ro.rising.maintainer=Alice\n",
        )
        .unwrap();

        let cmd = InfoCommand {
            source: PropertySource::File(path),
            json: true,
            raw: false,
        };
        let out = cmd.execute(&AppConfig::default()).await.unwrap();
        let build_info: BuildInfo = serde_json::from_str(&out).unwrap();

        assert!(build_info.is_official);
        assert_eq!(build_info.device_name, "Acme X1");
        assert_eq!(build_info.version_summary, "3.1 | 42 | user");
        assert_eq!(build_info.maintainer_summary, "Maintained by Alice");
        assert_eq!(build_info.build_version, "Unknown");
    }
}

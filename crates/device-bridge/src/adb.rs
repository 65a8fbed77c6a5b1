//! ADB (Android Debug Bridge) Client
//!
//! Pulls property snapshots and hardware facts off a connected device.
//! All lookups happen up front so the resolvers can run on plain in-memory
//! data afterwards.

use std::path::{Path, PathBuf};

use tokio::process::Command;
use tracing::{debug, warn};

use rise_settings_core::MapPropertyStore;
use rise_settings_deviceinfo::HardwareSpecs;

use crate::device::{parse_device_list, Device};
use crate::probe;

/// ADB errors
#[derive(Debug, thiserror::Error)]
pub enum AdbError {
    #[error("ADB not found")]
    NotFound,
    #[error("Device not found: {0}")]
    DeviceNotFound(String),
    #[error("ADB command failed: {0}")]
    CommandFailed(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// ADB Client
pub struct AdbClient {
    adb: PathBuf,
    from_sdk: bool,
}

impl AdbClient {
    /// Use `adb` from an SDK's `platform-tools`, or from PATH when no SDK is given
    pub fn new(sdk_path: Option<&Path>) -> Self {
        match sdk_path {
            Some(sdk) => {
                let platform_tools = sdk.join("platform-tools");
                let adb = if cfg!(windows) {
                    platform_tools.join("adb.exe")
                } else {
                    platform_tools.join("adb")
                };
                Self { adb, from_sdk: true }
            }
            None => Self {
                adb: PathBuf::from("adb"),
                from_sdk: false,
            },
        }
    }

    /// Run an ADB command, optionally pinned to one device
    async fn run(&self, serial: Option<&str>, args: &[&str]) -> Result<String, AdbError> {
        if self.from_sdk && !self.adb.exists() {
            return Err(AdbError::NotFound);
        }

        let mut full_args = Vec::with_capacity(args.len() + 2);
        if let Some(serial) = serial {
            full_args.extend(["-s", serial]);
        }
        full_args.extend_from_slice(args);

        debug!("adb {:?}", full_args);

        let output = match Command::new(&self.adb).args(&full_args).output().await {
            Ok(output) => output,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Err(AdbError::NotFound),
            Err(e) => return Err(e.into()),
        };

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            if let Some(serial) = serial.filter(|_| stderr.contains("not found")) {
                return Err(AdbError::DeviceNotFound(serial.to_string()));
            }
            return Err(AdbError::CommandFailed(stderr.trim().to_string()));
        }

        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }

    /// List connected devices
    pub async fn list_devices(&self) -> Result<Vec<Device>, AdbError> {
        let output = self.run(None, &["devices", "-l"]).await?;
        Ok(parse_device_list(&output))
    }

    /// Get a specific device
    pub async fn get_device(&self, serial: &str) -> Result<Device, AdbError> {
        self.list_devices()
            .await?
            .into_iter()
            .find(|d| d.serial == serial)
            .ok_or_else(|| AdbError::DeviceNotFound(serial.to_string()))
    }

    /// Get a device that is online and can answer shell commands
    pub async fn usable_device(&self, serial: &str) -> Result<Device, AdbError> {
        ensure_usable(self.get_device(serial).await?)
    }

    /// Run a shell command on device
    pub async fn shell(&self, serial: Option<&str>, command: &str) -> Result<String, AdbError> {
        self.run(serial, &["shell", command]).await
    }

    /// Get a single device property
    pub async fn get_prop(&self, serial: Option<&str>, prop: &str) -> Result<String, AdbError> {
        let output = self.shell(serial, &format!("getprop {}", prop)).await?;
        Ok(output.trim().to_string())
    }

    /// Snapshot every property in one `getprop` call
    pub async fn snapshot_props(&self, serial: Option<&str>) -> Result<MapPropertyStore, AdbError> {
        let output = self.shell(serial, "getprop").await?;
        let store = MapPropertyStore::from_getprop_output(&output);
        debug!("Snapshot holds {} properties", store.len());
        Ok(store)
    }

    /// Gather hardware facts. Each probe is best-effort; failures leave the
    /// field unset.
    pub async fn probe_hardware(
        &self,
        serial: Option<&str>,
        props: &MapPropertyStore,
    ) -> HardwareSpecs {
        let mut specs = HardwareSpecs {
            chipset: HardwareSpecs::chipset_from_store(props),
            ..Default::default()
        };

        specs.ram_kib = self
            .probe(serial, "cat /proc/meminfo", probe::parse_meminfo_total)
            .await;
        specs.storage_kib = self.probe(serial, "df -k /data", probe::parse_df_total).await;
        specs.battery_mah = self
            .probe(
                serial,
                "cat /sys/class/power_supply/battery/charge_full_design",
                probe::parse_charge_full_design,
            )
            .await;
        specs.resolution = self.probe(serial, "wm size", probe::parse_wm_size).await;

        specs
    }

    async fn probe<T>(
        &self,
        serial: Option<&str>,
        command: &str,
        parse: impl FnOnce(&str) -> Option<T>,
    ) -> Option<T> {
        match self.shell(serial, command).await {
            Ok(output) => {
                let value = parse(&output);
                if value.is_none() {
                    debug!("Unrecognized output from `{}`", command);
                }
                value
            }
            Err(e) => {
                warn!("Probe `{}` failed: {}", command, e);
                None
            }
        }
    }
}

/// Reject devices that are attached but not online
pub fn ensure_usable(device: Device) -> Result<Device, AdbError> {
    if device.is_usable() {
        Ok(device)
    } else {
        Err(AdbError::DeviceNotFound(format!(
            "{} ({})",
            device.serial,
            device.state.as_str()
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::DeviceState;

    fn device(state: DeviceState) -> Device {
        Device {
            serial: "1A2B3C4D".to_string(),
            state,
            model: None,
            product: None,
        }
    }

    #[test]
    fn test_ensure_usable() {
        assert!(ensure_usable(device(DeviceState::Online)).is_ok());

        match ensure_usable(device(DeviceState::Unauthorized)) {
            Err(AdbError::DeviceNotFound(msg)) => assert_eq!(msg, "1A2B3C4D (unauthorized)"),
            other => panic!("unexpected result {other:?}"),
        }
        assert!(ensure_usable(device(DeviceState::Offline)).is_err());
    }

    #[test]
    fn test_adb_path_from_sdk() {
        let client = AdbClient::new(Some(Path::new("/opt/android-sdk")));
        assert!(client.from_sdk);
        assert!(client.adb.starts_with("/opt/android-sdk/platform-tools"));

        let client = AdbClient::new(None);
        assert!(!client.from_sdk);
        assert_eq!(client.adb, PathBuf::from("adb"));
    }

    #[tokio::test]
    async fn test_missing_sdk_adb_is_not_found() {
        let client = AdbClient::new(Some(Path::new("/nonexistent/android-sdk")));
        let err = client.list_devices().await.unwrap_err();
        assert!(matches!(err, AdbError::NotFound));
    }
}

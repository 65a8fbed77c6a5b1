//! Device Types and State
//!
//! Devices as listed by `adb devices -l`.

use serde::{Deserialize, Serialize};

/// Device state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeviceState {
    /// Device is online and ready
    Online,
    /// Device is offline
    Offline,
    /// Device is not authorized (need to accept on device)
    Unauthorized,
    /// Device is in bootloader mode
    Bootloader,
    /// Device is in recovery mode
    Recovery,
    /// Unknown state
    Unknown,
}

impl DeviceState {
    /// Parse the state column of `adb devices`
    pub fn from_adb(state: &str) -> Self {
        match state {
            "device" => DeviceState::Online,
            "offline" => DeviceState::Offline,
            "unauthorized" => DeviceState::Unauthorized,
            "bootloader" => DeviceState::Bootloader,
            "recovery" => DeviceState::Recovery,
            _ => DeviceState::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DeviceState::Online => "device",
            DeviceState::Offline => "offline",
            DeviceState::Unauthorized => "unauthorized",
            DeviceState::Bootloader => "bootloader",
            DeviceState::Recovery => "recovery",
            DeviceState::Unknown => "unknown",
        }
    }

    /// Only an online device answers `getprop`
    pub fn is_usable(&self) -> bool {
        matches!(self, DeviceState::Online)
    }
}

/// Connected device
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Device {
    /// Device serial number
    pub serial: String,
    /// Device state
    pub state: DeviceState,
    /// Device model (e.g., "Pixel_7")
    pub model: Option<String>,
    /// Device product name
    pub product: Option<String>,
}

impl Device {
    pub fn is_usable(&self) -> bool {
        self.state.is_usable()
    }

    pub fn is_emulator(&self) -> bool {
        self.serial.starts_with("emulator-")
    }

    /// Get display name
    pub fn display_name(&self) -> String {
        if let Some(ref model) = self.model {
            format!("{} ({})", model.replace('_', " "), self.serial)
        } else {
            self.serial.clone()
        }
    }
}

/// Parse `adb devices -l` output
pub fn parse_device_list(output: &str) -> Vec<Device> {
    let mut devices = Vec::new();

    for line in output.lines().skip(1) {
        let line = line.trim();
        if line.is_empty() || line.starts_with('*') {
            continue;
        }

        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.len() < 2 {
            continue;
        }

        let mut model = None;
        let mut product = None;
        for part in parts.iter().skip(2) {
            if let Some(value) = part.strip_prefix("model:") {
                model = Some(value.to_string());
            } else if let Some(value) = part.strip_prefix("product:") {
                product = Some(value.to_string());
            }
        }

        devices.push(Device {
            serial: parts[0].to_string(),
            state: DeviceState::from_adb(parts[1]),
            model,
            product,
        });
    }

    devices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_device_list() {
        let output = "List of devices attached\n\
                      * daemon started successfully\n\
                      emulator-5554  device product:sdk_gphone64 model:sdk_gphone64_x86_64 transport_id:1\n\
                      1A2B3C4D       unauthorized usb:1-1 transport_id:2\n\
                      \n";
        let devices = parse_device_list(output);

        assert_eq!(devices.len(), 2);
        assert!(devices[0].is_usable());
        assert!(devices[0].is_emulator());
        assert_eq!(devices[0].display_name(), "sdk gphone64 x86 64 (emulator-5554)");
        assert_eq!(devices[1].state, DeviceState::Unauthorized);
        assert!(!devices[1].is_usable());
        assert_eq!(devices[1].display_name(), "1A2B3C4D");
    }
}

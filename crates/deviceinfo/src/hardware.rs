//! Hardware Summary Card
//!
//! Formats chipset, storage/RAM, battery and display specs for the
//! "rising_info" card at the top of the about screen.

use serde::{Deserialize, Serialize};

use rise_settings_core::properties::names;
use rise_settings_core::PropertyStore;

const KIB_PER_GIB: u64 = 1024 * 1024;

/// Raw hardware facts; any of them may be unknown
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HardwareSpecs {
    /// SoC / chipset name
    pub chipset: Option<String>,
    /// Total RAM in KiB (as reported by /proc/meminfo)
    pub ram_kib: Option<u64>,
    /// Total internal storage in KiB
    pub storage_kib: Option<u64>,
    /// Battery design capacity in mAh
    pub battery_mah: Option<u32>,
    /// Screen resolution, e.g. "1080x2400"
    pub resolution: Option<String>,
}

impl HardwareSpecs {
    /// Chipset name from properties: SoC model, board platform, then hardware
    pub fn chipset_from_store(store: &impl PropertyStore) -> Option<String> {
        [names::SOC_MODEL, names::BOARD_PLATFORM, names::HARDWARE]
            .iter()
            .map(|name| store.get(name, ""))
            .find(|value| !value.trim().is_empty())
    }

    /// Storage rounded up to the next power-of-two GB, the size printed on the box
    pub fn storage_gb(&self) -> Option<u64> {
        self.storage_kib
            .filter(|kib| *kib > 0)
            .map(|kib| kib.div_ceil(KIB_PER_GIB).next_power_of_two())
    }

    /// RAM rounded up to whole GB
    pub fn ram_gb(&self) -> Option<u64> {
        self.ram_kib
            .filter(|kib| *kib > 0)
            .map(|kib| kib.div_ceil(KIB_PER_GIB))
    }
}

/// Display strings for the hardware card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HardwareSummary {
    pub chipset: String,
    pub storage: String,
    pub battery: String,
    pub display: String,
}

impl HardwareSummary {
    pub fn from_specs(specs: &HardwareSpecs, placeholder: &str) -> Self {
        let gb = |value: Option<u64>| {
            value
                .map(|v| format!("{}GB", v))
                .unwrap_or_else(|| placeholder.to_string())
        };

        Self {
            chipset: specs
                .chipset
                .clone()
                .unwrap_or_else(|| placeholder.to_string()),
            storage: format!("{} ROM + {} RAM", gb(specs.storage_gb()), gb(specs.ram_gb())),
            battery: specs
                .battery_mah
                .map(|mah| format!("{} mAh", mah))
                .unwrap_or_else(|| placeholder.to_string()),
            display: specs
                .resolution
                .clone()
                .unwrap_or_else(|| placeholder.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rise_settings_core::MapPropertyStore;

    #[test]
    fn test_rounding() {
        let specs = HardwareSpecs {
            // 7.4 GiB usable of an 8 GB part
            ram_kib: Some(7_759_000),
            // ~110 GiB formatted on a 128 GB part
            storage_kib: Some(115_343_360),
            ..Default::default()
        };

        assert_eq!(specs.ram_gb(), Some(8));
        assert_eq!(specs.storage_gb(), Some(128));
    }

    #[test]
    fn test_zero_sizes_are_unknown() {
        let specs = HardwareSpecs {
            ram_kib: Some(0),
            storage_kib: Some(0),
            ..Default::default()
        };
        assert_eq!(specs.ram_gb(), None);
        assert_eq!(specs.storage_gb(), None);
    }

    #[test]
    fn test_summary() {
        let specs = HardwareSpecs {
            chipset: Some("SM8550".to_string()),
            ram_kib: Some(11_500_000),
            storage_kib: Some(240_000_000),
            battery_mah: Some(5000),
            resolution: Some("1440x3120".to_string()),
        };
        let summary = HardwareSummary::from_specs(&specs, "Unknown");

        assert_eq!(summary.chipset, "SM8550");
        assert_eq!(summary.storage, "256GB ROM + 11GB RAM");
        assert_eq!(summary.battery, "5000 mAh");
        assert_eq!(summary.display, "1440x3120");
    }

    #[test]
    fn test_summary_placeholders() {
        let summary = HardwareSummary::from_specs(&HardwareSpecs::default(), "N/A");

        assert_eq!(summary.chipset, "N/A");
        assert_eq!(summary.storage, "N/A ROM + N/A RAM");
        assert_eq!(summary.battery, "N/A");
        assert_eq!(summary.display, "N/A");
    }

    #[test]
    fn test_chipset_fallback_chain() {
        let store = MapPropertyStore::new()
            .with(names::SOC_MODEL, "")
            .with(names::BOARD_PLATFORM, "kalama")
            .with(names::HARDWARE, "qcom");
        assert_eq!(HardwareSpecs::chipset_from_store(&store).as_deref(), Some("kalama"));

        assert_eq!(HardwareSpecs::chipset_from_store(&MapPropertyStore::new()), None);
    }
}

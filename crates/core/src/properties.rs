//! System Property Access
//!
//! Read-only key/value property stores. Resolvers receive a store as an
//! explicit dependency; nothing here touches process-wide state.
//!
//! Sources:
//! - in-memory maps (tests, snapshots)
//! - `build.prop` style `key=value` files
//! - `getprop` listings (`[key]: [value]`)

use std::collections::BTreeMap;
use std::path::Path;

use tracing::debug;

use crate::error::{Result, SettingsError};

/// Well-known platform property names
pub mod names {
    /// Device manufacturer (Build.MANUFACTURER)
    pub const PRODUCT_MANUFACTURER: &str = "ro.product.manufacturer";
    /// Device model (Build.MODEL)
    pub const PRODUCT_MODEL: &str = "ro.product.model";
    /// SoC model name
    pub const SOC_MODEL: &str = "ro.soc.model";
    /// Board platform
    pub const BOARD_PLATFORM: &str = "ro.board.platform";
    /// Hardware name
    pub const HARDWARE: &str = "ro.hardware";
}

/// Read-only property lookup.
///
/// `get` must never fail: an unset key yields `default`.
pub trait PropertyStore {
    /// Look up `name`, returning `default` when it is not set
    fn get(&self, name: &str, default: &str) -> String;
}

impl<T: PropertyStore + ?Sized> PropertyStore for &T {
    fn get(&self, name: &str, default: &str) -> String {
        (**self).get(name, default)
    }
}

impl<T: PropertyStore + ?Sized> PropertyStore for Box<T> {
    fn get(&self, name: &str, default: &str) -> String {
        (**self).get(name, default)
    }
}

/// In-memory property snapshot
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MapPropertyStore {
    props: BTreeMap<String, String>,
}

impl MapPropertyStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a property, replacing any previous value
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.props.insert(name.into(), value.into());
    }

    /// Builder-style `insert`
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    /// Whether `name` is set (possibly to an empty value)
    pub fn contains(&self, name: &str) -> bool {
        self.props.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.props.len()
    }

    pub fn is_empty(&self) -> bool {
        self.props.is_empty()
    }

    /// Iterate properties in name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.props.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Parse a `build.prop` style file.
    ///
    /// `#` comments, blank lines and `import` directives are skipped. A
    /// read-only (`ro.`) property keeps its first value, as init does; other
    /// keys take the last assignment.
    pub fn from_build_prop(content: &str) -> Result<Self> {
        let mut store = Self::new();

        for (idx, raw) in content.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            if line.starts_with("import ") {
                debug!("Skipping import directive: {}", line);
                continue;
            }

            let (key, value) = line.split_once('=').ok_or_else(|| SettingsError::PropertyParse {
                line: idx + 1,
                reason: "expected key=value".to_string(),
            })?;

            let key = key.trim();
            if key.is_empty() {
                return Err(SettingsError::PropertyParse {
                    line: idx + 1,
                    reason: "empty property name".to_string(),
                });
            }

            if key.starts_with("ro.") && store.contains(key) {
                debug!("Ignoring reassignment of read-only property {}", key);
                continue;
            }

            store.insert(key, value.trim());
        }

        Ok(store)
    }

    /// Parse `getprop` output (`[name]: [value]` per line).
    ///
    /// Lines that do not match the listing format are skipped.
    pub fn from_getprop_output(output: &str) -> Self {
        let mut store = Self::new();

        for line in output.lines() {
            match parse_getprop_line(line.trim()) {
                Some((key, value)) => store.insert(key, value),
                None if line.trim().is_empty() => {}
                None => debug!("Skipping unrecognized getprop line: {:?}", line),
            }
        }

        store
    }

    /// Load a `build.prop` style file from disk
    pub async fn load_build_prop(path: &Path) -> Result<Self> {
        debug!("Loading properties from {:?}", path);
        let content = tokio::fs::read_to_string(path).await?;
        Self::from_build_prop(&content)
    }
}

impl PropertyStore for MapPropertyStore {
    fn get(&self, name: &str, default: &str) -> String {
        self.props
            .get(name)
            .cloned()
            .unwrap_or_else(|| default.to_string())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MapPropertyStore {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut store = Self::new();
        for (k, v) in iter {
            store.insert(k, v);
        }
        store
    }
}

fn parse_getprop_line(line: &str) -> Option<(&str, &str)> {
    let rest = line.strip_prefix('[')?;
    let (key, value) = rest.split_once("]: [")?;
    let value = value.strip_suffix(']')?;
    if key.is_empty() {
        return None;
    }
    Some((key, value))
}

/// Platform identity used when a ROM does not name the device itself
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlatformIdentity {
    pub manufacturer: String,
    pub model: String,
}

impl PlatformIdentity {
    pub fn new(manufacturer: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            manufacturer: manufacturer.into(),
            model: model.into(),
        }
    }

    /// Read manufacturer and model from the standard product properties
    pub fn from_store(store: &impl PropertyStore) -> Self {
        Self {
            manufacturer: store.get(names::PRODUCT_MANUFACTURER, ""),
            model: store.get(names::PRODUCT_MODEL, ""),
        }
    }

    /// `"<manufacturer> <model>"`
    pub fn display_name(&self) -> String {
        format!("{} {}", self.manufacturer, self.model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BUILD_PROP: &str = r#"
# begin build properties
ro.product.manufacturer=Acme
ro.product.model=X1
ro.rising.version = 3.1
import /vendor/build.prop

ro.rising.version=9.9
persist.sys.theme=dark
persist.sys.theme=light
ro.rising.maintainer=
"#;

    #[test]
    fn test_parse_build_prop() {
        let store = MapPropertyStore::from_build_prop(BUILD_PROP).unwrap();

        assert_eq!(store.get("ro.product.manufacturer", "?"), "Acme");
        assert_eq!(store.get("ro.rising.version", "?"), "3.1");
        assert_eq!(store.get("persist.sys.theme", "?"), "light");
        assert!(store.contains("ro.rising.maintainer"));
        assert_eq!(store.get("ro.rising.maintainer", "?"), "");
        assert_eq!(store.get("ro.missing", "?"), "?");
    }

    #[test]
    fn test_parse_build_prop_rejects_garbage() {
        let err = MapPropertyStore::from_build_prop("ro.a=1\nnot a property\n").unwrap_err();
        match err {
            SettingsError::PropertyParse { line, .. } => assert_eq!(line, 2),
            other => panic!("unexpected error: {other}"),
        }

        assert!(MapPropertyStore::from_build_prop("=value").is_err());
    }

    #[test]
    fn test_parse_getprop_output() {
        let output = "[ro.build.id]: [TP1A.220624.014]\n\
                      [ro.rising.device]: []\n\
                      garbage line\n\
                      [ro.product.model]: [Pixel 7]\n";
        let store = MapPropertyStore::from_getprop_output(output);

        assert_eq!(store.len(), 3);
        assert_eq!(store.get("ro.build.id", ""), "TP1A.220624.014");
        assert_eq!(store.get("ro.product.model", ""), "Pixel 7");
        assert_eq!(store.get("ro.rising.device", "x"), "");
    }

    #[test]
    fn test_platform_identity() {
        let store = MapPropertyStore::new()
            .with(names::PRODUCT_MANUFACTURER, "Acme")
            .with(names::PRODUCT_MODEL, "X1");
        let identity = PlatformIdentity::from_store(&store);

        assert_eq!(identity, PlatformIdentity::new("Acme", "X1"));
        assert_eq!(identity.display_name(), "Acme X1");
    }

    #[tokio::test]
    async fn test_load_build_prop_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("build.prop");
        std::fs::write(&path, "ro.rising.code=42\n").unwrap();

        let store = MapPropertyStore::load_build_prop(&path).await.unwrap();
        assert_eq!(store.get("ro.rising.code", ""), "42");
    }
}

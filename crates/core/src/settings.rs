//! Secure/global settings access
//!
//! Integer-valued settings table lookups, injected the same way as
//! property stores.

use std::collections::HashMap;

/// Read-only settings table
pub trait SettingsStore {
    /// Integer value of `name`, or `default` when unset or not an integer
    fn get_int(&self, name: &str, default: i32) -> i32;
}

impl<T: SettingsStore + ?Sized> SettingsStore for &T {
    fn get_int(&self, name: &str, default: i32) -> i32 {
        (**self).get_int(name, default)
    }
}

/// In-memory settings table
#[derive(Debug, Clone, Default)]
pub struct MapSettingsStore {
    values: HashMap<String, String>,
}

impl MapSettingsStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }
}

impl SettingsStore for MapSettingsStore {
    fn get_int(&self, name: &str, default: i32) -> i32 {
        self.values
            .get(name)
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(default)
    }
}

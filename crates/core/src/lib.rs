//! RisingOS Settings Core - shared types
//!
//! Configuration, error types and the read-only stores (system properties,
//! settings tables) that the preference logic is written against.

pub mod config;
pub mod error;
pub mod properties;
pub mod settings;

pub use config::{format_template, AppConfig, DeviceConfig, StringsConfig};
pub use error::{Result, SettingsError};
pub use properties::{MapPropertyStore, PlatformIdentity, PropertyStore};
pub use settings::{MapSettingsStore, SettingsStore};

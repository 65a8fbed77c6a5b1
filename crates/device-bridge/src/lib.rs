//! Device Bridge
//!
//! Reads properties and hardware facts from a device over ADB so the
//! about-screen resolvers can run against a real phone or emulator.

pub mod adb;
pub mod device;
pub mod probe;

pub use adb::{AdbClient, AdbError};
pub use device::{Device, DeviceState};

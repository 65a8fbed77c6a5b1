//! Device Info
//!
//! Firmware build info and hardware summaries for the RisingOS about screen.

pub mod build_info;
pub mod hardware;

pub use build_info::{
    resolve, BuildInfo, BuildInfoResolver, BuildInfoStrings, IconSelector, PropertyKey,
};
pub use hardware::{HardwareSpecs, HardwareSummary};

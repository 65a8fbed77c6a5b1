//! Preference Logic
//!
//! Display and save rules for individual Settings preferences, kept free of
//! any UI framework so they can be driven from tests or the CLI.

pub mod card;
pub mod connectivity;
pub mod ringtone;

pub use card::CardPosition;
pub use connectivity::{AdaptiveConnectivity, AvailabilityStatus, PreferenceDecoration};
pub use ringtone::{is_ringtone_mime_type, DefaultRingtonePolicy, IgnoreReason, SaveDecision};

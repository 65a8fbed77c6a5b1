//! Default Ringtone Preference
//!
//! Save policy for the preference that picks the device-wide default
//! ringtone. The picker itself is an OS chooser; this decides what to do
//! with the URI it hands back.

use tracing::warn;

const OGG_MIME_TYPE: &str = "application/ogg";

/// Whether `mime` may be stored as a ringtone
pub fn is_ringtone_mime_type(mime: &str) -> bool {
    mime.starts_with("audio/") || mime == OGG_MIME_TYPE
}

/// Why a picked ringtone was not stored
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IgnoreReason {
    /// The content resolver had no MIME type (no access from this context?)
    MimeUnavailable,
    /// The URI points at something that is not audio
    NotAudio(String),
}

/// Outcome of saving a picked ringtone
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveDecision {
    /// Store this URI as the default; `None` clears it (silent)
    Apply(Option<String>),
    Ignore(IgnoreReason),
}

/// Policy for the default-ringtone preference
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultRingtonePolicy;

impl DefaultRingtonePolicy {
    /// The picker must not offer a "Default" entry when choosing the default itself
    pub fn show_default_item(&self) -> bool {
        false
    }

    /// Decide what to store for a picked `uri` whose resolved type is `mime`
    pub fn on_save(&self, uri: Option<&str>, mime: Option<&str>) -> SaveDecision {
        let Some(uri) = uri else {
            return SaveDecision::Apply(None);
        };

        let Some(mime) = mime else {
            warn!(
                "onSaveRingtone for URI:{} ignored: failure to find mimeType (no access from this context?)",
                uri
            );
            return SaveDecision::Ignore(IgnoreReason::MimeUnavailable);
        };

        if !is_ringtone_mime_type(mime) {
            warn!(
                "onSaveRingtone for URI:{} ignored: associated mimeType:{} is not an audio type",
                uri, mime
            );
            return SaveDecision::Ignore(IgnoreReason::NotAudio(mime.to_string()));
        }

        SaveDecision::Apply(Some(uri.to_string()))
    }
}

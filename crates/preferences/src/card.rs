//! About-screen card positions
//!
//! Preferences on the about screen are grouped into cards; the position
//! attribute picks the layout with the right rounded corners.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardPosition {
    Top,
    Middle,
    Bottom,
}

impl CardPosition {
    /// Parse the `position` layout attribute, ignoring case.
    ///
    /// Missing or unrecognized values mean the preference keeps its default layout.
    pub fn from_attribute(attribute: Option<&str>) -> Option<Self> {
        match attribute?.to_lowercase().as_str() {
            "top" => Some(CardPosition::Top),
            "middle" => Some(CardPosition::Middle),
            "bottom" => Some(CardPosition::Bottom),
            _ => None,
        }
    }

    /// Layout resource for this position
    pub fn layout_resource(&self) -> &'static str {
        match self {
            CardPosition::Top => "arc_card_about_top",
            CardPosition::Middle => "arc_card_about_middle",
            CardPosition::Bottom => "arc_card_about_bottom",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_attribute() {
        assert_eq!(CardPosition::from_attribute(Some("TOP")), Some(CardPosition::Top));
        assert_eq!(CardPosition::from_attribute(Some("Middle")), Some(CardPosition::Middle));
        assert_eq!(CardPosition::from_attribute(Some("bottom")), Some(CardPosition::Bottom));
        assert_eq!(CardPosition::from_attribute(Some("left")), None);
        assert_eq!(CardPosition::from_attribute(None), None);
    }

    #[test]
    fn test_layout_resource() {
        assert_eq!(CardPosition::Bottom.layout_resource(), "arc_card_about_bottom");
    }
}

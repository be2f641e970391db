//! Display Settings
//!
//! Plugin-wide settings saved together with the partner list.

use serde::{Deserialize, Deserializer, Serialize};

use super::partner::Partner;
use super::wire;

/// Front-end layout of the banner block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum DisplayStyle {
    #[default]
    GridSingle,
    GridMulti,
    Masonry,
}

impl DisplayStyle {
    pub const ALL: [DisplayStyle; 3] = [DisplayStyle::GridSingle, DisplayStyle::GridMulti, DisplayStyle::Masonry];

    pub fn as_str(&self) -> &'static str {
        match self {
            DisplayStyle::GridSingle => "grid-single",
            DisplayStyle::GridMulti => "grid-multi",
            DisplayStyle::Masonry => "masonry",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DisplayStyle::GridSingle => "Single Column Grid",
            DisplayStyle::GridMulti => "Multi Column Grid",
            DisplayStyle::Masonry => "Masonry Layout",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            DisplayStyle::GridSingle => "Display alliance banners in a single column layout",
            DisplayStyle::GridMulti => "Display alliance banners in a responsive multi-column grid",
            DisplayStyle::Masonry => "Display alliance banners in a masonry (Pinterest-style) layout",
        }
    }

    /// Unknown values fall back to `GridSingle`.
    pub fn from_wire(value: &str) -> Self {
        match value {
            "grid-multi" => DisplayStyle::GridMulti,
            "masonry" => DisplayStyle::Masonry,
            _ => DisplayStyle::GridSingle,
        }
    }
}

impl<'de> Deserialize<'de> for DisplayStyle {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.as_deref().map(DisplayStyle::from_wire).unwrap_or_default())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub display_style: DisplayStyle,
    /// Owned by the poster-generation settings page; round-tripped untouched
    #[serde(default, deserialize_with = "wire::lenient_string")]
    pub ffmpeg_path: String,
}

/// Payload of `GET settings`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SettingsEnvelope {
    #[serde(flatten)]
    pub settings: Settings,
    #[serde(default)]
    pub content_models: Vec<Partner>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_from_option_payload() {
        let envelope: SettingsEnvelope = serde_json::from_str(
            r#"{"display_style":"masonry","ffmpeg_path":"/usr/bin/ffmpeg","content_models":[{"rank":"gold","frontpage":"YES"}]}"#,
        )
        .unwrap();
        assert_eq!(envelope.settings.display_style, DisplayStyle::Masonry);
        assert_eq!(envelope.settings.ffmpeg_path, "/usr/bin/ffmpeg");
        assert_eq!(envelope.content_models.len(), 1);
        assert!(envelope.content_models[0].frontpage);
    }

    #[test]
    fn test_unknown_style_falls_back() {
        let settings: Settings = serde_json::from_str(r#"{"display_style":"carousel"}"#).unwrap();
        assert_eq!(settings.display_style, DisplayStyle::GridSingle);
        assert_eq!(settings.ffmpeg_path, "");
    }

    #[test]
    fn test_empty_option_defaults() {
        let envelope: SettingsEnvelope = serde_json::from_str("{}").unwrap();
        assert_eq!(envelope, SettingsEnvelope::default());
    }
}

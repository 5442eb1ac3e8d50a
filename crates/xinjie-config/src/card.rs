use serde::{Deserialize, Serialize};

/// Geometry and palette of the rendered card
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct CardConfig {
    pub width: f32,
    pub height: f32,
    pub margin: f32,
    pub title: String,
    pub title_font_size: f32,
    pub word_font_size: f32,
    pub detail_font_size: f32,
    pub body_font_size: f32,
    /// Preferred distance between body baselines
    pub line_height: f32,
    /// Floor for compressed body spacing
    pub min_line_spacing: f32,
    /// Floor for the shrunken body font
    pub min_font_size: f32,
    pub background: String,
    pub ink: String,
    pub muted: String,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            width: 400.0,
            height: 600.0,
            margin: 40.0,
            title: "汉语新解".to_string(),
            title_font_size: 28.0,
            word_font_size: 32.0,
            detail_font_size: 16.0,
            body_font_size: 18.0,
            line_height: 35.0,
            min_line_spacing: 12.0,
            min_font_size: 10.0,
            background: "#F5F1EA".to_string(),
            ink: "#2C2C2C".to_string(),
            muted: "#666666".to_string(),
        }
    }
}

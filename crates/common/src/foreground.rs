//! Foreground overlay elements, document colors, and canvas settings.

use serde::{Deserialize, Serialize};

/// Kind of a foreground element.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ForegroundElementKind {
    Title,
    Description,
}

impl ForegroundElementKind {
    /// Identifier prefix used when generating element ids.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Description => "description",
        }
    }
}

/// One foreground (title/description) element overlaid on the canvas.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForegroundElementConfig {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ForegroundElementKind,
    pub content: String,
    /// Size in rem units, matching the exported page styles.
    pub font_size: f32,
}

impl ForegroundElementConfig {
    /// New element with the kind's display defaults.
    pub fn with_defaults(id: impl Into<String>, kind: ForegroundElementKind) -> Self {
        let (content, font_size) = match kind {
            ForegroundElementKind::Title => ("New Title", 3.0),
            ForegroundElementKind::Description => ("New description text", 1.0),
        };
        Self {
            id: id.into(),
            kind,
            content: content.to_string(),
            font_size,
        }
    }
}

/// Partial update for a foreground element; `None` fields are left untouched.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForegroundElementPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f32>,
}

impl ForegroundElementPatch {
    /// Shallow-merge this patch onto an element.
    pub fn apply_to(&self, element: &mut ForegroundElementConfig) {
        if let Some(content) = &self.content {
            element.content = content.clone();
        }
        if let Some(font_size) = self.font_size {
            element.font_size = font_size;
        }
    }
}

/// The flat foreground element list of a document.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForegroundConfig {
    pub elements: Vec<ForegroundElementConfig>,
}

/// Semantic document colors (CSS hex strings).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorsConfig {
    pub background: String,
    pub primary: String,
    pub secondary: String,
    pub accent: String,
}

impl Default for ColorsConfig {
    fn default() -> Self {
        Self {
            background: "#0b0b0f".to_string(),
            primary: "#ffffff".to_string(),
            secondary: "#9ca3af".to_string(),
            accent: "#6366f1".to_string(),
        }
    }
}

/// Canvas dimensions and pixel density of a document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanvasSettings {
    pub width: u32,
    pub height: u32,
    pub pixel_ratio: f32,
}

impl Default for CanvasSettings {
    fn default() -> Self {
        Self {
            width: 1920,
            height: 1080,
            pixel_ratio: 1.0,
        }
    }
}

//! Canonical surface-pattern and mask-shape configs.
//!
//! These are the tagged discriminated unions that the rest of the core works
//! with. Older documents carry untagged-by-convention shapes; the document
//! crate normalizes those into these types at the load boundary.

use serde::{Deserialize, Serialize};

/// Surface pattern applied to a `base`, `surface`, or `image` layer.
///
/// Canonical form: tagged by `type`. Colors are CSS hex strings, matching the
/// web editor's document format.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum SurfaceConfig {
    /// Solid fill.
    Color { color: String },
    /// Linear gradient, angle in degrees.
    Gradient { stops: Vec<GradientStop>, angle: f32 },
    /// Image fill referencing an asset owned by the external asset repository.
    Image { asset_id: String, fit: ImageFit },
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self::Color {
            color: "#000000".to_string(),
        }
    }
}

/// One stop in a gradient surface. `position` is 0..1 along the gradient axis.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    pub color: String,
    pub position: f32,
}

/// How an image surface fills its layer bounds.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ImageFit {
    #[default]
    Cover,
    Contain,
    Fill,
}

/// Mask geometry carried by a mask modifier.
///
/// Coordinates are normalized to the layer bounds (0..1), so masks are
/// resolution-independent.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum MaskShapeConfig {
    Circle {
        cx: f32,
        cy: f32,
        radius: f32,
    },
    Ellipse {
        cx: f32,
        cy: f32,
        rx: f32,
        ry: f32,
    },
    Rectangle {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        corner_radius: f32,
    },
}

impl Default for MaskShapeConfig {
    fn default() -> Self {
        Self::Circle {
            cx: 0.5,
            cy: 0.5,
            radius: 0.5,
        }
    }
}

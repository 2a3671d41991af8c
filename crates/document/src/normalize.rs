//! Surface and mask config normalization.
//!
//! Older documents carry untagged-by-convention shapes: a surface was
//! `{"color": ...}`, `{"gradient": {...}}`, or `{"image": {...}}`, and a mask
//! shape was `{"circle": {...}}`, `{"ellipse": {...}}`, or `{"rect": {...}}`.
//! The canonical form is tagged by `type`. Normalization accepts either and
//! always returns canonical; denormalization emits the legacy shape for
//! callers that still require it.

use serde_json::{json, Map, Value};

use hs_common::{MaskShapeConfig, SurfaceConfig};

use crate::error::{DocumentError, DocumentResult};

/// Whether a surface JSON value is already in canonical tagged form.
pub fn surface_is_canonical(value: &Value) -> bool {
    matches!(
        value.get("type").and_then(Value::as_str),
        Some("color" | "gradient" | "image")
    )
}

/// Whether a mask-shape JSON value is already in canonical tagged form.
pub fn mask_is_canonical(value: &Value) -> bool {
    matches!(
        value.get("type").and_then(Value::as_str),
        Some("circle" | "ellipse" | "rectangle")
    )
}

fn invalid(reason: impl Into<String>) -> DocumentError {
    DocumentError::InvalidDocument {
        reason: reason.into(),
    }
}

/// Merge `inner`'s fields into a new object carrying the given `type` tag.
fn tagged(tag: &str, inner: &Map<String, Value>) -> Value {
    let mut obj = Map::new();
    obj.insert("type".to_string(), Value::String(tag.to_string()));
    for (key, val) in inner {
        obj.insert(key.clone(), val.clone());
    }
    Value::Object(obj)
}

/// Convert a surface config — legacy or canonical — into canonical form.
pub fn normalize_surface_config(value: &Value) -> DocumentResult<SurfaceConfig> {
    if surface_is_canonical(value) {
        return Ok(serde_json::from_value(value.clone())?);
    }
    let obj = value
        .as_object()
        .ok_or_else(|| invalid("surface config must be a JSON object"))?;

    let canonical = if let Some(color) = obj.get("color") {
        json!({ "type": "color", "color": color })
    } else if let Some(gradient) = obj.get("gradient") {
        let inner = gradient
            .as_object()
            .ok_or_else(|| invalid("legacy gradient surface must be an object"))?;
        tagged("gradient", inner)
    } else if let Some(image) = obj.get("image") {
        let inner = image
            .as_object()
            .ok_or_else(|| invalid("legacy image surface must be an object"))?;
        let mut value = tagged("image", inner);
        if value.get("fit").is_none() {
            value["fit"] = json!("cover");
        }
        value
    } else {
        return Err(invalid("unrecognized surface config shape"));
    };

    Ok(serde_json::from_value(canonical)?)
}

/// Emit the legacy untagged surface shape.
pub fn denormalize_surface_config(config: &SurfaceConfig) -> Value {
    match config {
        SurfaceConfig::Color { color } => json!({ "color": color }),
        SurfaceConfig::Gradient { stops, angle } => {
            json!({ "gradient": { "stops": stops, "angle": angle } })
        }
        SurfaceConfig::Image { asset_id, fit } => {
            json!({ "image": { "assetId": asset_id, "fit": fit } })
        }
    }
}

/// Convert a mask shape — legacy or canonical — into canonical form.
pub fn normalize_mask_config(value: &Value) -> DocumentResult<MaskShapeConfig> {
    if mask_is_canonical(value) {
        return Ok(serde_json::from_value(value.clone())?);
    }
    let obj = value
        .as_object()
        .ok_or_else(|| invalid("mask config must be a JSON object"))?;

    let canonical = if let Some(circle) = obj.get("circle") {
        let inner = circle
            .as_object()
            .ok_or_else(|| invalid("legacy circle mask must be an object"))?;
        tagged("circle", inner)
    } else if let Some(ellipse) = obj.get("ellipse") {
        let inner = ellipse
            .as_object()
            .ok_or_else(|| invalid("legacy ellipse mask must be an object"))?;
        tagged("ellipse", inner)
    } else if let Some(rect) = obj.get("rect") {
        let inner = rect
            .as_object()
            .ok_or_else(|| invalid("legacy rect mask must be an object"))?;
        let mut value = tagged("rectangle", inner);
        // Legacy rect masks predate rounded corners.
        if value.get("cornerRadius").is_none() {
            value["cornerRadius"] = json!(0.0);
        }
        value
    } else {
        return Err(invalid("unrecognized mask config shape"));
    };

    Ok(serde_json::from_value(canonical)?)
}

/// Emit the legacy untagged mask shape.
pub fn denormalize_mask_config(shape: &MaskShapeConfig) -> Value {
    match shape {
        MaskShapeConfig::Circle { cx, cy, radius } => {
            json!({ "circle": { "cx": cx, "cy": cy, "radius": radius } })
        }
        MaskShapeConfig::Ellipse { cx, cy, rx, ry } => {
            json!({ "ellipse": { "cx": cx, "cy": cy, "rx": rx, "ry": ry } })
        }
        MaskShapeConfig::Rectangle {
            x,
            y,
            width,
            height,
            corner_radius,
        } => {
            json!({ "rect": {
                "x": x,
                "y": y,
                "width": width,
                "height": height,
                "cornerRadius": corner_radius,
            }})
        }
    }
}

//! Whole-document migration — upgrades legacy serialized shapes in place.
//!
//! Detection is structural (probing for legacy field shapes) rather than
//! purely version-based, because pre-migration documents carry no version
//! field at all. Migrated documents are stamped with an explicit `version`;
//! the structural probe still runs on version-current documents, so a
//! hand-edited file with a stale shape is repaired rather than trusted.
//!
//! Migration is idempotent: already-canonical subtrees are left untouched,
//! so migrating a canonical document is a deep-equal no-op.

use serde_json::{json, Map, Value};
use tracing::{debug, info, warn};

use hs_common::{
    CanvasSettings, ColorsConfig, EffectTypeId, MaskShapeConfig, Modifier, SurfaceConfig,
};

use crate::effects_compat::{migrate_legacy_effect_config, LegacyEffectConfig};
use crate::error::{DocumentError, DocumentResult};
use crate::normalize::{
    mask_is_canonical, normalize_mask_config, normalize_surface_config, surface_is_canonical,
};

/// Current document format version.
pub const CURRENT_VERSION: u32 = 1;

fn invalid(reason: impl Into<String>) -> DocumentError {
    DocumentError::InvalidDocument {
        reason: reason.into(),
    }
}

/// Cheap caller-side probe: does this document need [`migrate_document`]?
///
/// True when the version field is missing or older than current, or when any
/// layer anywhere in the tree is in a legacy shape. Non-object roots return
/// false — they fail properly at deserialization instead.
pub fn document_needs_migration(value: &Value) -> bool {
    let Some(obj) = value.as_object() else {
        return false;
    };
    let version_current = matches!(
        obj.get("version").and_then(Value::as_u64),
        Some(v) if v >= u64::from(CURRENT_VERSION)
    );
    if !version_current {
        return true;
    }
    obj.get("layers")
        .and_then(Value::as_array)
        .map(|layers| layers.iter().any(layer_needs_migration))
        .unwrap_or(false)
}

fn layer_needs_migration(layer: &Value) -> bool {
    let Some(obj) = layer.as_object() else {
        return false;
    };
    match obj.get("type").and_then(Value::as_str) {
        Some("group") => obj
            .get("children")
            .and_then(Value::as_array)
            .map(|children| children.iter().any(layer_needs_migration))
            .unwrap_or(true),
        Some("processor") => {
            if obj.contains_key("effects") || obj.contains_key("mask") {
                return true;
            }
            obj.get("modifiers")
                .and_then(Value::as_array)
                .map(|modifiers| modifiers.iter().any(modifier_needs_migration))
                .unwrap_or(true)
        }
        Some("base" | "surface" | "image") => obj
            .get("surface")
            .map(|surface| !surface_is_canonical(surface))
            .unwrap_or(true),
        _ => false,
    }
}

fn modifier_needs_migration(modifier: &Value) -> bool {
    let Some(obj) = modifier.as_object() else {
        return false;
    };
    match obj.get("type").and_then(Value::as_str) {
        Some("mask") => obj
            .get("shape")
            .map(|shape| !mask_is_canonical(shape))
            .unwrap_or(true),
        Some("effect") => !obj.contains_key("params"),
        _ => false,
    }
}

/// Migrate a document JSON value to the current canonical form in place.
///
/// Returns the version after migration. Documents from a newer format are
/// rejected rather than guessed at.
pub fn migrate_document(value: &mut Value) -> DocumentResult<u32> {
    let obj = value
        .as_object_mut()
        .ok_or_else(|| invalid("document root must be a JSON object"))?;

    let version = extract_version(obj)?;
    if version > CURRENT_VERSION {
        return Err(DocumentError::UnsupportedVersion {
            version: version.to_string(),
        });
    }
    if version == CURRENT_VERSION {
        debug!(version, "Document version is current; probing structure");
    }

    match obj.get_mut("layers") {
        Some(layers) => {
            let layers = layers
                .as_array_mut()
                .ok_or_else(|| invalid("layers must be an array"))?;
            for layer in layers.iter_mut() {
                migrate_layer(layer)?;
            }
        }
        None => {
            obj.insert("layers".to_string(), Value::Array(Vec::new()));
        }
    }

    ensure_string_field(obj, "name", "Untitled");
    ensure_value_field(obj, "canvas", || {
        serde_json::to_value(CanvasSettings::default())
    })?;
    ensure_value_field(obj, "colors", || {
        serde_json::to_value(ColorsConfig::default())
    })?;
    ensure_value_field(obj, "foreground", || Ok(json!({ "elements": [] })))?;

    obj.insert(
        "version".to_string(),
        Value::Number(CURRENT_VERSION.into()),
    );

    info!(
        from = version,
        to = CURRENT_VERSION,
        "Document migration complete"
    );
    Ok(CURRENT_VERSION)
}

/// Extract the version number; documents without one are treated as
/// pre-version (0) legacy files.
fn extract_version(obj: &Map<String, Value>) -> DocumentResult<u32> {
    match obj.get("version") {
        Some(Value::Number(n)) => n
            .as_u64()
            .map(|v| v as u32)
            .ok_or_else(|| invalid("version must be a non-negative integer")),
        Some(Value::String(s)) => s
            .parse::<u32>()
            .map_err(|_| invalid(format!("cannot parse version string: {s}"))),
        Some(_) => Err(invalid("version field has unexpected type")),
        None => {
            warn!("Document has no version field, assuming pre-version legacy format");
            Ok(0)
        }
    }
}

fn migrate_layer(layer: &mut Value) -> DocumentResult<()> {
    let obj = layer
        .as_object_mut()
        .ok_or_else(|| invalid("layer must be a JSON object"))?;

    let layer_type = obj
        .get("type")
        .and_then(Value::as_str)
        .ok_or_else(|| invalid("layer has no type discriminator"))?
        .to_string();

    match layer_type.as_str() {
        "group" => match obj.get_mut("children") {
            Some(children) => {
                let children = children
                    .as_array_mut()
                    .ok_or_else(|| invalid("group children must be an array"))?;
                for child in children.iter_mut() {
                    migrate_layer(child)?;
                }
            }
            None => {
                obj.insert("children".to_string(), Value::Array(Vec::new()));
            }
        },
        "processor" => migrate_processor(obj)?,
        "base" | "surface" | "image" => match obj.get("surface") {
            Some(surface) => {
                if !surface_is_canonical(surface) {
                    let normalized = normalize_surface_config(surface)?;
                    obj.insert("surface".to_string(), serde_json::to_value(normalized)?);
                }
            }
            None => {
                obj.insert(
                    "surface".to_string(),
                    serde_json::to_value(SurfaceConfig::default())?,
                );
            }
        },
        "text" | "model3d" => {}
        other => {
            return Err(invalid(format!("unknown layer type: {other}")));
        }
    }
    Ok(())
}

fn migrate_processor(obj: &mut Map<String, Value>) -> DocumentResult<()> {
    let legacy_effects = obj.remove("effects");
    let legacy_mask = obj.remove("mask");

    if obj.contains_key("modifiers") {
        if legacy_effects.is_some() || legacy_mask.is_some() {
            warn!("Processor carries both modifiers and legacy effect fields; keeping modifiers");
        }
        let modifiers = obj
            .get_mut("modifiers")
            .and_then(Value::as_array_mut)
            .ok_or_else(|| invalid("processor modifiers must be an array"))?;
        for modifier in modifiers.iter_mut() {
            normalize_modifier(modifier)?;
        }
        return Ok(());
    }

    let mut modifiers: Vec<Value> = Vec::new();
    if let Some(effects) = legacy_effects {
        let legacy: LegacyEffectConfig = serde_json::from_value(effects)?;
        for entry in migrate_legacy_effect_config(&legacy) {
            modifiers.push(serde_json::to_value(entry)?);
        }
    }
    if let Some(mask) = legacy_mask {
        let entry = migrate_legacy_mask(&mask)?;
        modifiers.push(serde_json::to_value(entry)?);
    }
    obj.insert("modifiers".to_string(), Value::Array(modifiers));
    Ok(())
}

fn normalize_modifier(modifier: &mut Value) -> DocumentResult<()> {
    let obj = modifier
        .as_object_mut()
        .ok_or_else(|| invalid("modifier must be a JSON object"))?;
    match obj.get("type").and_then(Value::as_str) {
        Some("mask") => {
            match obj.get("shape") {
                Some(shape) => {
                    if !mask_is_canonical(shape) {
                        let normalized = normalize_mask_config(shape)?;
                        obj.insert("shape".to_string(), serde_json::to_value(normalized)?);
                    }
                }
                None => {
                    obj.insert(
                        "shape".to_string(),
                        serde_json::to_value(MaskShapeConfig::default())?,
                    );
                }
            }
            Ok(())
        }
        Some("effect") => {
            let id = obj
                .get("id")
                .and_then(Value::as_str)
                .ok_or_else(|| invalid("effect modifier has no id"))?;
            // Untrusted identifier: validate before it reaches any registry
            // consumer.
            if EffectTypeId::parse(id).is_none() {
                return Err(invalid(format!("unknown effect type: {id}")));
            }
            if !obj.contains_key("params") {
                obj.insert("params".to_string(), Value::Object(Map::new()));
            }
            Ok(())
        }
        _ => Err(invalid("modifier has no type discriminator")),
    }
}

fn migrate_legacy_mask(mask: &Value) -> DocumentResult<Modifier> {
    let obj = mask
        .as_object()
        .ok_or_else(|| invalid("legacy mask must be a JSON object"))?;
    let enabled = obj.get("enabled").and_then(Value::as_bool).unwrap_or(true);
    let invert = obj.get("invert").and_then(Value::as_bool).unwrap_or(false);
    let feather = obj.get("feather").and_then(Value::as_f64).unwrap_or(0.0) as f32;
    let shape = match obj.get("shape") {
        Some(shape) => normalize_mask_config(shape)?,
        None => MaskShapeConfig::default(),
    };
    Ok(Modifier::Mask {
        enabled,
        shape,
        invert,
        feather,
    })
}

fn ensure_string_field(obj: &mut Map<String, Value>, key: &str, default: &str) {
    if !obj.contains_key(key) {
        obj.insert(key.to_string(), Value::String(default.to_string()));
    }
}

fn ensure_value_field(
    obj: &mut Map<String, Value>,
    key: &str,
    default: impl FnOnce() -> Result<Value, serde_json::Error>,
) -> DocumentResult<()> {
    if !obj.contains_key(key) {
        obj.insert(key.to_string(), default()?);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn legacy_document() -> Value {
        json!({
            "name": "Legacy Hero",
            "layers": [
                {
                    "id": "bg",
                    "name": "Backdrop",
                    "type": "base",
                    "surface": { "color": "#101020" }
                },
                {
                    "id": "main",
                    "name": "Main",
                    "type": "group",
                    "visible": true,
                    "children": [
                        {
                            "id": "s2",
                            "name": "Fill",
                            "type": "surface",
                            "surface": { "gradient": {
                                "stops": [
                                    { "color": "#000000", "position": 0.0 },
                                    { "color": "#ff00ff", "position": 1.0 }
                                ],
                                "angle": 45.0
                            }}
                        },
                        {
                            "id": "pr",
                            "name": "Effects",
                            "type": "processor",
                            "effects": {
                                "blur": { "enabled": true, "radius": 8 },
                                "vignette": { "enabled": true, "intensity": 0.5 },
                                "dotHalftone": { "enabled": false, "dotSize": 4.0 }
                            },
                            "mask": {
                                "shape": { "circle": { "cx": 0.5, "cy": 0.5, "radius": 0.4 } },
                                "invert": true,
                                "feather": 6.0
                            }
                        }
                    ]
                }
            ]
        })
    }

    #[test]
    fn legacy_document_needs_migration() {
        assert!(document_needs_migration(&legacy_document()));
    }

    #[test]
    fn migrated_document_is_canonical() {
        let mut doc = legacy_document();
        let version = migrate_document(&mut doc).unwrap();
        assert_eq!(version, CURRENT_VERSION);
        assert_eq!(doc["version"], json!(CURRENT_VERSION));
        assert!(!document_needs_migration(&doc));

        // Legacy exclusive effects became a pipeline in registry order,
        // followed by the migrated mask.
        let modifiers = doc["layers"][1]["children"][1]["modifiers"]
            .as_array()
            .unwrap();
        assert_eq!(modifiers.len(), 3);
        assert_eq!(modifiers[0]["type"], "effect");
        assert_eq!(modifiers[0]["id"], "vignette");
        assert_eq!(modifiers[1]["id"], "blur");
        assert_eq!(modifiers[1]["params"]["radius"], json!(8));
        assert_eq!(modifiers[2]["type"], "mask");
        assert_eq!(modifiers[2]["shape"]["type"], "circle");
        assert_eq!(modifiers[2]["invert"], json!(true));
        assert_eq!(modifiers[2]["enabled"], json!(true));

        // Legacy fields are gone
        let processor = &doc["layers"][1]["children"][1];
        assert!(processor.get("effects").is_none());
        assert!(processor.get("mask").is_none());

        // Surfaces are tagged now
        assert_eq!(doc["layers"][0]["surface"]["type"], "color");
        assert_eq!(doc["layers"][1]["children"][0]["surface"]["type"], "gradient");
    }

    #[test]
    fn migration_is_idempotent() {
        let mut once = legacy_document();
        migrate_document(&mut once).unwrap();
        let mut twice = once.clone();
        migrate_document(&mut twice).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn canonical_document_is_untouched() {
        let mut doc = legacy_document();
        migrate_document(&mut doc).unwrap();
        let before = doc.clone();
        assert!(!document_needs_migration(&doc));
        migrate_document(&mut doc).unwrap();
        assert_eq!(doc, before);
    }

    #[test]
    fn missing_version_is_treated_as_legacy() {
        let doc = json!({ "name": "No Version", "layers": [] });
        assert!(document_needs_migration(&doc));
        let mut doc = doc;
        let version = migrate_document(&mut doc).unwrap();
        assert_eq!(version, CURRENT_VERSION);
    }

    #[test]
    fn future_version_is_rejected() {
        let mut doc = json!({ "version": 999, "name": "Future", "layers": [] });
        let err = migrate_document(&mut doc).unwrap_err();
        assert!(matches!(err, DocumentError::UnsupportedVersion { .. }));
    }

    #[test]
    fn version_string_is_parsed() {
        let mut doc = json!({ "version": "1", "name": "Stringy", "layers": [] });
        assert_eq!(migrate_document(&mut doc).unwrap(), CURRENT_VERSION);
    }

    #[test]
    fn non_object_root_is_rejected() {
        let mut doc = json!([1, 2, 3]);
        assert!(migrate_document(&mut doc).is_err());
    }

    #[test]
    fn missing_sections_gain_defaults() {
        let mut doc = json!({ "layers": [] });
        migrate_document(&mut doc).unwrap();
        assert_eq!(doc["name"], "Untitled");
        assert!(doc.get("canvas").is_some());
        assert!(doc.get("colors").is_some());
        assert_eq!(doc["foreground"]["elements"], json!([]));
    }

    #[test]
    fn unknown_layer_type_is_rejected() {
        let mut doc = json!({
            "layers": [ { "id": "x", "name": "X", "type": "hologram" } ]
        });
        let err = migrate_document(&mut doc).unwrap_err();
        assert!(matches!(err, DocumentError::InvalidDocument { .. }));
    }

    #[test]
    fn unknown_effect_id_in_modifiers_is_rejected() {
        let mut doc = json!({
            "version": 0,
            "layers": [{
                "id": "p", "name": "P", "type": "processor",
                "modifiers": [ { "type": "effect", "id": "sepia", "params": {} } ]
            }]
        });
        let err = migrate_document(&mut doc).unwrap_err();
        assert!(matches!(err, DocumentError::InvalidDocument { .. }));
    }

    #[test]
    fn processor_without_any_effect_fields_gains_empty_pipeline() {
        let mut doc = json!({
            "layers": [ { "id": "p", "name": "P", "type": "processor" } ]
        });
        migrate_document(&mut doc).unwrap();
        assert_eq!(doc["layers"][0]["modifiers"], json!([]));
    }

    #[test]
    fn hybrid_modifier_mask_shape_is_normalized() {
        // Canonical modifiers array carrying a legacy untagged shape.
        let mut doc = json!({
            "version": 1,
            "name": "Hybrid",
            "layers": [{
                "id": "p", "name": "P", "type": "processor",
                "modifiers": [{
                    "type": "mask",
                    "enabled": true,
                    "invert": false,
                    "feather": 0.0,
                    "shape": { "rect": { "x": 0.0, "y": 0.0, "width": 1.0, "height": 1.0 } }
                }]
            }]
        });
        assert!(document_needs_migration(&doc));
        migrate_document(&mut doc).unwrap();
        let shape = &doc["layers"][0]["modifiers"][0]["shape"];
        assert_eq!(shape["type"], "rectangle");
        assert_eq!(shape["cornerRadius"], json!(0.0));
    }
}

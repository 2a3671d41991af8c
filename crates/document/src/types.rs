//! Serialized document shape — web-editor compatible JSON format.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use hs_common::{CanvasSettings, ColorsConfig, ForegroundConfig, LayerNode};

use crate::migrate::CURRENT_VERSION;

/// Top-level hero-view document.
///
/// Deserializing this type directly assumes canonical input; untrusted JSON
/// goes through [`from_json_str`](crate::from_json_str), which migrates
/// legacy shapes first.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroDocument {
    /// Document format version, stamped by migration on save/load.
    pub version: u32,
    /// Human-readable document name.
    pub name: String,
    /// Canvas dimensions and pixel density.
    #[serde(default)]
    pub canvas: CanvasSettings,
    /// The layer forest; order is render/paint order.
    pub layers: Vec<Arc<LayerNode>>,
    /// Semantic document colors.
    #[serde(default)]
    pub colors: ColorsConfig,
    /// Foreground (title/description) overlay elements.
    #[serde(default)]
    pub foreground: ForegroundConfig,
}

impl HeroDocument {
    /// Create a new empty document with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            version: CURRENT_VERSION,
            name: name.into(),
            canvas: CanvasSettings::default(),
            layers: Vec::new(),
            colors: ColorsConfig::default(),
            foreground: ForegroundConfig::default(),
        }
    }
}

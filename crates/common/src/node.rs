//! Layer node data model — the recursive tree the editor mutates.
//!
//! A document's visual content is a forest of [`LayerNode`]s. Group children
//! are reference-counted so tree operations can share unchanged subtrees
//! between versions (path-copying); see `hs-scene` for the operations.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::modifier::Modifier;
use crate::surface::SurfaceConfig;

/// One element of the visual tree.
///
/// `id` is unique across the whole document and caller-assigned; `name` is
/// the display string; `visible` toggles rendering without removing the node.
/// The variant payload lives in [`LayerContent`], discriminated by `type` in
/// the serialized form.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayerNode {
    pub id: String,
    pub name: String,
    #[serde(default = "default_visible")]
    pub visible: bool,
    #[serde(flatten)]
    pub content: LayerContent,
}

fn default_visible() -> bool {
    true
}

/// Typed payload of a layer node.
///
/// Closed set; every `match` over this enum is written without a `_` arm so
/// adding a variant is a compile error at each consumer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum LayerContent {
    /// The backdrop layer.
    Base { surface: SurfaceConfig },
    /// A surface-pattern layer.
    Surface { surface: SurfaceConfig },
    /// A text layer.
    Text {
        content: String,
        font_family: String,
        font_size: f32,
        color: String,
    },
    /// A 3D object layer. The model blob itself is owned by the external
    /// asset repository, keyed by `asset_id`.
    Model3d {
        asset_id: String,
        transform: ModelTransform,
    },
    /// An image layer.
    Image { surface: SurfaceConfig },
    /// A grouping layer. `children` order is paint order: later entries paint
    /// over earlier ones. Ownership is exclusive — a child belongs to exactly
    /// one parent at a time.
    Group { children: Vec<Arc<LayerNode>> },
    /// A post-processing layer: carries no visual content of its own, only an
    /// ordered modifier pipeline applied to preceding sibling content.
    Processor { modifiers: Vec<Modifier> },
}

/// Transform applied to a 3D model layer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ModelTransform {
    /// Position in normalized canvas units.
    pub position: [f32; 3],
    /// Euler rotation in degrees.
    pub rotation: [f32; 3],
    /// Scale factors (1.0 = original size).
    pub scale: [f32; 3],
}

impl Default for ModelTransform {
    fn default() -> Self {
        Self {
            position: [0.0, 0.0, 0.0],
            rotation: [0.0, 0.0, 0.0],
            scale: [1.0, 1.0, 1.0],
        }
    }
}

impl LayerNode {
    fn new(id: impl Into<String>, name: impl Into<String>, content: LayerContent) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            visible: true,
            content,
        }
    }

    /// New backdrop layer.
    pub fn base(id: impl Into<String>, name: impl Into<String>, surface: SurfaceConfig) -> Self {
        Self::new(id, name, LayerContent::Base { surface })
    }

    /// New surface layer.
    pub fn surface(id: impl Into<String>, name: impl Into<String>, surface: SurfaceConfig) -> Self {
        Self::new(id, name, LayerContent::Surface { surface })
    }

    /// New text layer with display defaults.
    pub fn text(id: impl Into<String>, name: impl Into<String>, content: impl Into<String>) -> Self {
        Self::new(
            id,
            name,
            LayerContent::Text {
                content: content.into(),
                font_family: "Inter".to_string(),
                font_size: 2.0,
                color: "#ffffff".to_string(),
            },
        )
    }

    /// New 3D model layer with an identity transform.
    pub fn model3d(id: impl Into<String>, name: impl Into<String>, asset_id: impl Into<String>) -> Self {
        Self::new(
            id,
            name,
            LayerContent::Model3d {
                asset_id: asset_id.into(),
                transform: ModelTransform::default(),
            },
        )
    }

    /// New image layer.
    pub fn image(id: impl Into<String>, name: impl Into<String>, surface: SurfaceConfig) -> Self {
        Self::new(id, name, LayerContent::Image { surface })
    }

    /// New group layer owning the given children.
    pub fn group(
        id: impl Into<String>,
        name: impl Into<String>,
        children: Vec<Arc<LayerNode>>,
    ) -> Self {
        Self::new(id, name, LayerContent::Group { children })
    }

    /// New processor layer carrying the given modifier pipeline.
    pub fn processor(
        id: impl Into<String>,
        name: impl Into<String>,
        modifiers: Vec<Modifier>,
    ) -> Self {
        Self::new(id, name, LayerContent::Processor { modifiers })
    }

    pub fn is_group(&self) -> bool {
        match &self.content {
            LayerContent::Group { .. } => true,
            LayerContent::Base { .. }
            | LayerContent::Surface { .. }
            | LayerContent::Text { .. }
            | LayerContent::Model3d { .. }
            | LayerContent::Image { .. }
            | LayerContent::Processor { .. } => false,
        }
    }

    pub fn is_processor(&self) -> bool {
        match &self.content {
            LayerContent::Processor { .. } => true,
            LayerContent::Base { .. }
            | LayerContent::Surface { .. }
            | LayerContent::Text { .. }
            | LayerContent::Model3d { .. }
            | LayerContent::Image { .. }
            | LayerContent::Group { .. } => false,
        }
    }

    /// Whether this layer owns a surface descriptor (`base`, `surface`, `image`).
    pub fn is_surface_layer(&self) -> bool {
        match &self.content {
            LayerContent::Base { .. } | LayerContent::Surface { .. } | LayerContent::Image { .. } => {
                true
            }
            LayerContent::Text { .. }
            | LayerContent::Model3d { .. }
            | LayerContent::Group { .. }
            | LayerContent::Processor { .. } => false,
        }
    }

    pub fn is_text(&self) -> bool {
        match &self.content {
            LayerContent::Text { .. } => true,
            LayerContent::Base { .. }
            | LayerContent::Surface { .. }
            | LayerContent::Model3d { .. }
            | LayerContent::Image { .. }
            | LayerContent::Group { .. }
            | LayerContent::Processor { .. } => false,
        }
    }

    pub fn is_model3d(&self) -> bool {
        match &self.content {
            LayerContent::Model3d { .. } => true,
            LayerContent::Base { .. }
            | LayerContent::Surface { .. }
            | LayerContent::Text { .. }
            | LayerContent::Image { .. }
            | LayerContent::Group { .. }
            | LayerContent::Processor { .. } => false,
        }
    }

    /// The children sequence, if this node is a group.
    pub fn children(&self) -> Option<&[Arc<LayerNode>]> {
        match &self.content {
            LayerContent::Group { children } => Some(children),
            LayerContent::Base { .. }
            | LayerContent::Surface { .. }
            | LayerContent::Text { .. }
            | LayerContent::Model3d { .. }
            | LayerContent::Image { .. }
            | LayerContent::Processor { .. } => None,
        }
    }

    /// The modifier pipeline, if this node is a processor.
    pub fn modifiers(&self) -> Option<&[Modifier]> {
        match &self.content {
            LayerContent::Processor { modifiers } => Some(modifiers),
            LayerContent::Base { .. }
            | LayerContent::Surface { .. }
            | LayerContent::Text { .. }
            | LayerContent::Model3d { .. }
            | LayerContent::Image { .. }
            | LayerContent::Group { .. } => None,
        }
    }

    /// The surface descriptor, if this node is a surface-owning layer.
    pub fn surface_config(&self) -> Option<&SurfaceConfig> {
        match &self.content {
            LayerContent::Base { surface }
            | LayerContent::Surface { surface }
            | LayerContent::Image { surface } => Some(surface),
            LayerContent::Text { .. }
            | LayerContent::Model3d { .. }
            | LayerContent::Group { .. }
            | LayerContent::Processor { .. } => None,
        }
    }
}

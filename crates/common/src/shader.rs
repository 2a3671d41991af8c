//! Shader identification and argument packing for the renderer boundary.
//!
//! The core never executes shaders; it only derives a [`ShaderSpec`] that the
//! external GPU renderer consumes verbatim.

use serde::{Deserialize, Serialize};

/// Identifies a render shader by name (maps to WGSL entry points).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ShaderId {
    Vignette,
    ChromaticAberration,
    DotHalftone,
    LineHalftone,
    Blur,
    /// Mask application (circle, ellipse, rectangle).
    Mask,
}

impl ShaderId {
    /// Returns the WGSL entry point name for this shader.
    pub fn entry_point(&self) -> &'static str {
        match self {
            Self::Vignette => "vignette",
            Self::ChromaticAberration => "chromatic_aberration",
            Self::DotHalftone => "dot_halftone",
            Self::LineHalftone => "line_halftone",
            Self::Blur => "blur",
            Self::Mask => "apply_mask",
        }
    }
}

/// A single shader uniform argument.
#[derive(Clone, Debug, PartialEq)]
pub enum ShaderArg {
    U32(u32),
    I32(i32),
    F32(f32),
    Vec2([f32; 2]),
    Vec4([f32; 4]),
}

/// Ordered uniform arguments for one shader dispatch.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ShaderArgs {
    entries: Vec<ShaderArg>,
}

impl ShaderArgs {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn push_u32(mut self, val: u32) -> Self {
        self.entries.push(ShaderArg::U32(val));
        self
    }

    pub fn push_i32(mut self, val: i32) -> Self {
        self.entries.push(ShaderArg::I32(val));
        self
    }

    pub fn push_f32(mut self, val: f32) -> Self {
        self.entries.push(ShaderArg::F32(val));
        self
    }

    pub fn push_vec2(mut self, val: [f32; 2]) -> Self {
        self.entries.push(ShaderArg::Vec2(val));
        self
    }

    pub fn push_vec4(mut self, val: [f32; 4]) -> Self {
        self.entries.push(ShaderArg::Vec4(val));
        self
    }

    pub fn entries(&self) -> &[ShaderArg] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Everything the renderer needs to dispatch one effect pass.
#[derive(Clone, Debug, PartialEq)]
pub struct ShaderSpec {
    pub shader: ShaderId,
    pub args: ShaderArgs,
}

/// Render target dimensions in physical pixels.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Width / height ratio. 0 height yields 0 rather than dividing by zero.
    pub fn aspect(&self) -> f32 {
        if self.height == 0 {
            0.0
        } else {
            self.width as f32 / self.height as f32
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1920,
            height: 1080,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shader_entry_points() {
        assert_eq!(ShaderId::Vignette.entry_point(), "vignette");
        assert_eq!(
            ShaderId::ChromaticAberration.entry_point(),
            "chromatic_aberration"
        );
        assert_eq!(ShaderId::Mask.entry_point(), "apply_mask");
    }

    #[test]
    fn shader_args_builder() {
        let args = ShaderArgs::new()
            .push_u32(1920)
            .push_u32(1080)
            .push_f32(0.5)
            .push_vec4([1.0, 1.0, 1.0, 1.0]);
        assert_eq!(args.len(), 4);
        assert!(!args.is_empty());
        assert_eq!(args.entries()[2], ShaderArg::F32(0.5));
    }

    #[test]
    fn viewport_aspect() {
        assert_eq!(Viewport::default().aspect(), 1920.0 / 1080.0);
        assert_eq!(Viewport::new(100, 0).aspect(), 0.0);
    }
}

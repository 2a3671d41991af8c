//! Effect registry — the single place an effect type is registered.

use std::collections::HashMap;
use std::sync::OnceLock;

use hs_common::EffectTypeId;
use tracing::info;

use crate::blur::BlurEffect;
use crate::chromatic::ChromaticAberrationEffect;
use crate::error::EffectError;
use crate::halftone::{DotHalftoneEffect, LineHalftoneEffect};
use crate::traits::EffectDefinition;
use crate::vignette::VignetteEffect;

/// Guard for untrusted effect identifiers (e.g. loaded from a file).
///
/// Callers must route external strings through this (or
/// [`EffectTypeId::parse`]) before any registry lookup.
pub fn is_valid_effect_type(name: &str) -> bool {
    EffectTypeId::parse(name).is_some()
}

/// Registry holding one [`EffectDefinition`] per effect type.
///
/// Read-only at runtime; built once via [`EffectRegistry::with_builtins`].
pub struct EffectRegistry {
    effects: HashMap<EffectTypeId, Box<dyn EffectDefinition>>,
}

impl EffectRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            effects: HashMap::new(),
        }
    }

    /// Create a registry with every built-in effect registered.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();

        registry.register(Box::new(VignetteEffect::new()));
        registry.register(Box::new(ChromaticAberrationEffect::new()));
        registry.register(Box::new(DotHalftoneEffect::new()));
        registry.register(Box::new(LineHalftoneEffect::new()));
        registry.register(Box::new(BlurEffect::new()));

        info!(
            count = registry.effects.len(),
            "Registered built-in effects"
        );

        registry
    }

    /// Register a definition. Overwrites any previous entry for the same type.
    pub fn register(&mut self, definition: Box<dyn EffectDefinition>) {
        self.effects.insert(definition.effect_type(), definition);
    }

    /// Look up a definition by type id.
    pub fn get(&self, id: EffectTypeId) -> Option<&dyn EffectDefinition> {
        self.effects.get(&id).map(|d| d.as_ref())
    }

    /// Look up a definition for a statically-known type id.
    ///
    /// # Panics
    ///
    /// Panics if the id has no entry. With [`with_builtins`] every member of
    /// the closed [`EffectTypeId`] set is registered, so reaching the panic
    /// means a registry was hand-built incompletely — a programmer error, not
    /// a recoverable condition.
    ///
    /// [`with_builtins`]: EffectRegistry::with_builtins
    pub fn definition(&self, id: EffectTypeId) -> &dyn EffectDefinition {
        match self.get(id) {
            Some(def) => def,
            None => panic!("effect type '{id}' has no registry entry"),
        }
    }

    /// Look up a definition by an untrusted identifier string.
    ///
    /// The recoverable entry point for externally-sourced ids; unknown names
    /// fail with [`EffectError::UnknownEffectType`].
    pub fn definition_for_name(&self, name: &str) -> Result<&dyn EffectDefinition, EffectError> {
        let id = EffectTypeId::parse(name).ok_or_else(|| EffectError::UnknownEffectType {
            name: name.to_string(),
        })?;
        self.get(id).ok_or_else(|| EffectError::UnknownEffectType {
            name: name.to_string(),
        })
    }

    /// List all registered definitions in registry declaration order.
    pub fn list(&self) -> Vec<&dyn EffectDefinition> {
        EffectTypeId::REGISTRY_ORDER
            .iter()
            .filter_map(|id| self.get(*id))
            .collect()
    }

    /// Number of registered definitions.
    pub fn len(&self) -> usize {
        self.effects.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }
}

impl Default for EffectRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// The shared built-in registry, constructed on first use.
///
/// Registries are read-only once built, so a process-wide instance is safe to
/// hand out; callers that register custom definitions build their own.
pub fn builtin_registry() -> &'static EffectRegistry {
    static REGISTRY: OnceLock<EffectRegistry> = OnceLock::new();
    REGISTRY.get_or_init(EffectRegistry::with_builtins)
}

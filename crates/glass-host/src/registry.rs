use std::collections::HashMap;

use glass_core::{GlassConfig, GlassError, GlassResult};
use glass_effects::Fragment;

use crate::instance::GlassInstance;
use crate::surface::SurfaceId;

/// Owns every live glass instance, keyed by host surface.
///
/// Instances live in a slot arena; the index maps a surface to its slot and
/// freed slots are reused. Applying to a surface that already has an
/// instance returns the existing one untouched.
#[derive(Debug, Default)]
pub struct SurfaceRegistry {
    slots: Vec<Option<GlassInstance>>,
    index: HashMap<SurfaceId, usize>,
    free: Vec<usize>,
}

impl SurfaceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a glass effect to `surface` using the default lens for `config`.
    pub fn apply(&mut self, surface: SurfaceId, config: GlassConfig) -> GlassResult<&GlassInstance> {
        self.apply_with(surface, config, |config| Ok(crate::instance::default_fragment_for(config)))
    }

    /// Bind a glass effect to `surface`, building the fragment with `make`
    /// only if the surface has no instance yet.
    pub fn apply_with<F>(
        &mut self,
        surface: SurfaceId,
        config: GlassConfig,
        make: F,
    ) -> GlassResult<&GlassInstance>
    where
        F: FnOnce(&GlassConfig) -> GlassResult<Box<dyn Fragment>>,
    {
        if let Some(&slot) = self.index.get(&surface) {
            log::debug!("surface {surface} already has a glass instance in slot {slot}");
            return self.slot(surface, slot);
        }

        let fragment = make(&config)?;
        let instance = GlassInstance::with_fragment(config, fragment)?;

        let slot = match self.free.pop() {
            Some(slot) => {
                self.slots[slot] = Some(instance);
                slot
            }
            None => {
                self.slots.push(Some(instance));
                self.slots.len() - 1
            }
        };
        self.index.insert(surface, slot);
        log::debug!("applied glass to surface {surface} in slot {slot}");

        self.slot(surface, slot)
    }

    /// Bind a glass effect using a fragment from the built-in registry.
    pub fn apply_fragment(
        &mut self,
        surface: SurfaceId,
        config: GlassConfig,
        fragment_id: &str,
    ) -> GlassResult<&GlassInstance> {
        self.apply_with(surface, config, |_| glass_effects::create_fragment(fragment_id))
    }

    /// Regenerate the surface's map and paths for its new rendered size.
    ///
    /// Returns whether anything was rebuilt.
    pub fn resize(&mut self, surface: SurfaceId, width: u32, height: u32) -> GlassResult<bool> {
        let instance = self
            .get_mut(surface)
            .ok_or(GlassError::UnknownSurface(surface.get()))?;
        let rebuilt = instance.resize(width, height)?;
        if rebuilt {
            log::debug!("resized glass on surface {surface} to {width}x{height}");
        }
        Ok(rebuilt)
    }

    /// Remove and return the surface's instance, releasing its slot.
    pub fn teardown(&mut self, surface: SurfaceId) -> Option<GlassInstance> {
        let slot = self.index.remove(&surface)?;
        let instance = self.slots.get_mut(slot).and_then(Option::take);
        self.free.push(slot);
        log::debug!("tore down glass on surface {surface}");
        instance
    }

    /// Tear down every instance.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.index.clear();
        self.free.clear();
    }

    pub fn get(&self, surface: SurfaceId) -> Option<&GlassInstance> {
        let slot = *self.index.get(&surface)?;
        self.slots.get(slot)?.as_ref()
    }

    pub fn get_mut(&mut self, surface: SurfaceId) -> Option<&mut GlassInstance> {
        let slot = *self.index.get(&surface)?;
        self.slots.get_mut(slot)?.as_mut()
    }

    pub fn contains(&self, surface: SurfaceId) -> bool {
        self.index.contains_key(&surface)
    }

    /// Number of live instances.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Number of allocated slots, live or free.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (SurfaceId, &GlassInstance)> {
        self.index
            .iter()
            .filter_map(|(&surface, &slot)| Some((surface, self.slots.get(slot)?.as_ref()?)))
    }

    fn slot(&self, surface: SurfaceId, slot: usize) -> GlassResult<&GlassInstance> {
        self.slots
            .get(slot)
            .and_then(Option::as_ref)
            .ok_or(GlassError::UnknownSurface(surface.get()))
    }
}

use glass_core::outline::outline_path_with;
use glass_core::{GlassConfig, GlassResult, Outline};
use glass_effects::{generate, DisplacementMap, Fragment, LiquidGlassFragment};

/// Distance the rim stroke sits inside the surface outline.
pub const RIM_INSET: f32 = 0.5;

/// The fragment used when the host does not pick one: the liquid glass lens
/// with the corner profile requested by the config.
pub fn default_fragment_for(config: &GlassConfig) -> Box<dyn Fragment> {
    Box::new(LiquidGlassFragment::new().with_profile(config.corner_profile()))
}

/// One glass effect bound to one surface: the displacement map plus the
/// outline and optional rim paths for the surface's current size.
pub struct GlassInstance {
    config: GlassConfig,
    fragment: Box<dyn Fragment>,
    map: DisplacementMap,
    outline: Outline,
    rim: Option<Outline>,
}

impl GlassInstance {
    pub fn new(config: GlassConfig) -> GlassResult<Self> {
        let fragment = default_fragment_for(&config);
        Self::with_fragment(config, fragment)
    }

    pub fn with_fragment(config: GlassConfig, fragment: Box<dyn Fragment>) -> GlassResult<Self> {
        config.validate()?;
        let map = generate(config.width, config.height, fragment.as_ref())?;
        let (outline, rim) = build_paths(&config);
        Ok(Self { config, fragment, map, outline, rim })
    }

    pub fn config(&self) -> &GlassConfig {
        &self.config
    }

    pub fn fragment(&self) -> &dyn Fragment {
        self.fragment.as_ref()
    }

    pub fn map(&self) -> &DisplacementMap {
        &self.map
    }

    pub fn scale(&self) -> f32 {
        self.map.scale()
    }

    pub fn outline(&self) -> &Outline {
        &self.outline
    }

    pub fn rim(&self) -> Option<&Outline> {
        self.rim.as_ref()
    }

    pub fn size(&self) -> (u32, u32) {
        (self.config.width, self.config.height)
    }

    /// Rebuild map and paths for a new rendered size.
    ///
    /// Returns `Ok(false)` without touching anything when the size is
    /// unchanged. On error the instance keeps its previous state.
    pub fn resize(&mut self, width: u32, height: u32) -> GlassResult<bool> {
        if (width, height) == self.size() {
            return Ok(false);
        }

        let config = GlassConfig { width, height, ..self.config.clone() };
        config.validate()?;
        let map = generate(width, height, self.fragment.as_ref())?;
        let (outline, rim) = build_paths(&config);

        self.config = config;
        self.map = map;
        self.outline = outline;
        self.rim = rim;
        Ok(true)
    }
}

fn build_paths(config: &GlassConfig) -> (Outline, Option<Outline>) {
    let w = config.width as f32;
    let h = config.height as f32;
    let profile = config.corner_profile();

    let outline = outline_path_with(w, h, config.corner_radius, 0.0, profile);
    let rim = config
        .show_rim
        .then(|| outline_path_with(w, h, config.corner_radius, RIM_INSET, profile));
    (outline, rim)
}

impl std::fmt::Debug for GlassInstance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GlassInstance")
            .field("config", &self.config)
            .field("fragment", &self.fragment.name())
            .field("scale", &self.map.scale())
            .finish()
    }
}

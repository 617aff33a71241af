use serde::{Deserialize, Serialize};

use crate::error::{check_dimensions, GlassError, GlassResult};
use crate::outline::clamp_radius;
use crate::sdf::CornerProfile;

/// Per-surface glass configuration supplied by the host layer.
///
/// Serialized as camelCase JSON; missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GlassConfig {
    /// Displacement raster width in pixels.
    pub width: u32,
    /// Displacement raster height in pixels.
    pub height: u32,
    /// Corner radius in surface units. Clamped to half the smaller side.
    pub corner_radius: f32,
    /// Stroke a highlight rim just inside the outline.
    pub show_rim: bool,
    /// Squircle corners when true, circular corners otherwise.
    pub use_squircle: bool,
}

impl Default for GlassConfig {
    fn default() -> Self {
        Self {
            width: 300,
            height: 200,
            corner_radius: 24.0,
            show_rim: true,
            use_squircle: true,
        }
    }
}

impl GlassConfig {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height, ..Self::default() }
    }

    pub fn with_corner_radius(mut self, corner_radius: f32) -> Self {
        self.corner_radius = corner_radius;
        self
    }

    pub fn with_rim(mut self, show_rim: bool) -> Self {
        self.show_rim = show_rim;
        self
    }

    pub fn with_squircle(mut self, use_squircle: bool) -> Self {
        self.use_squircle = use_squircle;
        self
    }

    pub fn corner_profile(&self) -> CornerProfile {
        CornerProfile::from_squircle_flag(self.use_squircle)
    }

    /// Corner radius after clamping to the configured size.
    pub fn effective_radius(&self) -> f32 {
        clamp_radius(self.corner_radius, self.width as f32, self.height as f32)
    }

    pub fn validate(&self) -> GlassResult<()> {
        check_dimensions(self.width, self.height)
    }

    /// Parse and validate a JSON config.
    pub fn from_json(json: &str) -> GlassResult<Self> {
        let config: GlassConfig =
            serde_json::from_str(json).map_err(|e| GlassError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> GlassResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| GlassError::Config(e.to_string()))
    }
}

use glam::Vec2;
use glass_core::error::check_dimensions;
use glass_core::{GlassError, GlassResult};
use image::{Rgba, RgbaImage};

use crate::fragment::Fragment;

/// Channel value that decodes to a zero offset.
pub const NEUTRAL_CHANNEL: u8 = 128;

/// A generated displacement texture.
///
/// R carries the horizontal offset and G the vertical offset of each pixel,
/// B is always 0 and A always 255. A channel value `c` decodes to the
/// physical offset `(c / 255 - 0.5) * 2 * scale`.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplacementMap {
    raster: RgbaImage,
    scale: f32,
    max_offset: f32,
}

/// Encode a pixel offset into an 8-bit channel for the given scale.
///
/// A zero scale always encodes to the neutral midpoint.
pub fn encode_channel(offset: f32, scale: f32) -> u8 {
    if scale <= 0.0 {
        return NEUTRAL_CHANNEL;
    }
    let normalized = (offset / (2.0 * scale) + 0.5).clamp(0.0, 1.0);
    (normalized * 255.0).round() as u8
}

/// Decode an 8-bit channel back into a pixel offset.
pub fn decode_channel(value: u8, scale: f32) -> f32 {
    (value as f32 / 255.0 - 0.5) * 2.0 * scale
}

/// Evaluate `fragment` over a `width`×`height` grid and pack the resulting
/// offsets into a displacement map.
///
/// Cell `(x, y)` is sampled at `uv = (x / width, y / height)`; its offset is
/// the mapped coordinate converted back to pixels minus the original pixel
/// position. A field with no displacement anywhere yields scale 0 and an
/// all-neutral raster.
pub fn generate(width: u32, height: u32, fragment: &dyn Fragment) -> GlassResult<DisplacementMap> {
    check_dimensions(width, height)?;

    if fragment.uses_pointer() {
        log::warn!(
            "fragment '{}' reads pointer input; the displacement field is computed once",
            fragment.name()
        );
    }

    let size = Vec2::new(width as f32, height as f32);
    let mut offsets = Vec::with_capacity(width as usize * height as usize);
    let mut max_offset = 0.0f32;

    for y in 0..height {
        for x in 0..width {
            let uv = Vec2::new(x as f32, y as f32) / size;
            // Differencing in uv space keeps an unmoved sample at exactly 0.
            let offset = (fragment.sample(uv) - uv) * size;

            if !offset.is_finite() {
                return Err(GlassError::NonFiniteDisplacement { x, y });
            }

            max_offset = max_offset.max(offset.x.abs()).max(offset.y.abs());
            offsets.push(offset);
        }
    }

    let scale = max_offset;
    let mut raster = RgbaImage::new(width, height);
    for (x, y, pixel) in raster.enumerate_pixels_mut() {
        let offset = offsets[y as usize * width as usize + x as usize];
        *pixel = Rgba([
            encode_channel(offset.x, scale),
            encode_channel(offset.y, scale),
            0,
            255,
        ]);
    }

    log::trace!(
        "generated {}x{} displacement map with '{}', scale {}",
        width,
        height,
        fragment.name(),
        scale
    );

    Ok(DisplacementMap { raster, scale, max_offset })
}

impl DisplacementMap {
    pub fn width(&self) -> u32 {
        self.raster.width()
    }

    pub fn height(&self) -> u32 {
        self.raster.height()
    }

    /// Read-only view of the RGBA raster.
    pub fn raster(&self) -> &RgbaImage {
        &self.raster
    }

    /// Raw RGBA bytes, row-major.
    pub fn as_bytes(&self) -> &[u8] {
        self.raster.as_raw()
    }

    /// Factor mapping decoded channels back to physical pixel offsets.
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Largest absolute per-axis offset in the field.
    pub fn max_offset(&self) -> f32 {
        self.max_offset
    }

    /// True when the field carries no displacement at all.
    pub fn is_neutral(&self) -> bool {
        self.scale == 0.0
    }

    /// Decoded physical offset of cell `(x, y)`, or `None` out of bounds.
    pub fn offset_at(&self, x: u32, y: u32) -> Option<Vec2> {
        let pixel = self.raster.get_pixel_checked(x, y)?;
        Some(Vec2::new(
            decode_channel(pixel.0[0], self.scale),
            decode_channel(pixel.0[1], self.scale),
        ))
    }
}

use std::io::Cursor;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use glass_core::{GlassError, GlassResult};
use image::{ImageFormat, RgbaImage};

use crate::displacement::DisplacementMap;

/// Encode an RGBA raster as PNG bytes.
pub fn encode_png(raster: &RgbaImage) -> GlassResult<Vec<u8>> {
    let mut bytes = Vec::new();
    raster
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .map_err(|e| GlassError::Encode(format!("failed to encode png: {e}")))?;
    Ok(bytes)
}

/// Encode an RGBA raster as a `data:image/png;base64,…` URL.
pub fn to_data_url(raster: &RgbaImage) -> GlassResult<String> {
    let png = encode_png(raster)?;
    Ok(format!("data:image/png;base64,{}", STANDARD.encode(png)))
}

impl DisplacementMap {
    pub fn encode_png(&self) -> GlassResult<Vec<u8>> {
        encode_png(self.raster())
    }

    /// Texture source a host can hand straight to an `<feImage>` or `<img>`.
    pub fn to_data_url(&self) -> GlassResult<String> {
        to_data_url(self.raster())
    }
}

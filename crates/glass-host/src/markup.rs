//! SVG fragments a host can inject to render an instance: a displacement
//! filter, a mask image for the outline, and the rim stroke.

use glass_core::shape::format_coord;
use glass_core::GlassResult;

use crate::instance::GlassInstance;
use crate::surface::SurfaceId;

/// Element id of the filter for `surface`.
pub fn filter_id(surface: SurfaceId) -> String {
    format!("liquid-glass-{surface}")
}

/// An SVG `<filter>` that warps the backdrop with the instance's map.
///
/// `feDisplacementMap` offsets by `scale * (channel - 0.5)`, so its scale
/// attribute is twice the map's decode scale.
pub fn filter_markup(surface: SurfaceId, instance: &GlassInstance) -> GlassResult<String> {
    let id = filter_id(surface);
    let map = instance.map();
    let href = map.to_data_url()?;

    Ok(format!(
        concat!(
            r#"<filter id="{id}" x="0" y="0" width="{w}" height="{h}" filterUnits="userSpaceOnUse" color-interpolation-filters="sRGB">"#,
            r#"<feImage href="{href}" x="0" y="0" width="{w}" height="{h}" preserveAspectRatio="none" result="{id}-map"/>"#,
            r#"<feDisplacementMap in="SourceGraphic" in2="{id}-map" scale="{scale}" xChannelSelector="R" yChannelSelector="G"/>"#,
            "</filter>"
        ),
        id = id,
        w = map.width(),
        h = map.height(),
        href = href,
        scale = format_coord(2.0 * map.scale()),
    ))
}

/// A standalone SVG image with the outline filled white, usable as a mask.
pub fn mask_markup(instance: &GlassInstance) -> String {
    let (w, h) = instance.size();
    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}"><path d="{d}" fill="white"/></svg>"#,
        d = instance.outline().to_path_data(),
    )
}

/// The rim highlight stroke, or `None` when the rim is disabled.
pub fn rim_markup(instance: &GlassInstance) -> Option<String> {
    let rim = instance.rim()?;
    Some(format!(
        r#"<path d="{d}" fill="none" stroke="white" stroke-opacity="0.5" stroke-width="1"/>"#,
        d = rim.to_path_data(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use glass_core::GlassConfig;

    #[test]
    fn test_filter_markup() {
        let instance = GlassInstance::new(GlassConfig::new(20, 10)).unwrap();
        let markup = filter_markup(SurfaceId::new(3), &instance).unwrap();
        assert!(markup.starts_with(r#"<filter id="liquid-glass-3""#));
        assert!(markup.contains("data:image/png;base64,"));
        assert!(markup.contains(r#"xChannelSelector="R" yChannelSelector="G""#));
        let expected_scale = format!(r#"scale="{}""#, format_coord(2.0 * instance.scale()));
        assert!(markup.contains(&expected_scale));
        assert!(markup.ends_with("</filter>"));
    }

    #[test]
    fn test_mask_markup() {
        let instance = GlassInstance::new(GlassConfig::new(100, 50).with_corner_radius(12.0)).unwrap();
        let markup = mask_markup(&instance);
        assert!(markup.contains(r#"viewBox="0 0 100 50""#));
        assert!(markup.contains(r#"<path d="M 0,12 "#));
    }

    #[test]
    fn test_rim_markup() {
        let instance = GlassInstance::new(GlassConfig::new(100, 50)).unwrap();
        let rim = rim_markup(&instance).unwrap();
        assert!(rim.starts_with(r#"<path d="M 0.5,"#));

        let bare = GlassInstance::new(GlassConfig::new(100, 50).with_rim(false)).unwrap();
        assert!(rim_markup(&bare).is_none());
    }
}

pub mod surface;
pub mod instance;
pub mod registry;
pub mod markup;

pub use surface::SurfaceId;
pub use instance::{default_fragment_for, GlassInstance, RIM_INSET};
pub use registry::SurfaceRegistry;
pub use markup::{filter_id, filter_markup, mask_markup, rim_markup};

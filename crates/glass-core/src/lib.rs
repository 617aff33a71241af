pub mod shape;
pub mod outline;
pub mod sdf;
pub mod easing;
pub mod config;
pub mod error;

pub use glam::Vec2;
pub use shape::{Shape, Line, CubicBezierCurve, Bounds};
pub use outline::{Outline, outline_path, outline_path_with, clamp_radius, CORNER_CONTROL_RATIO};
pub use sdf::{squircle_sdf, rounded_rect_sdf, CornerProfile};
pub use easing::smooth_step;
pub use config::GlassConfig;
pub use error::{GlassError, GlassResult};

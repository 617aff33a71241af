use thiserror::Error;

/// Errors produced while building glass geometry and displacement maps.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GlassError {
    #[error("invalid dimension {width}x{height}: width and height must be at least 1")]
    InvalidDimension { width: u32, height: u32 },

    #[error("fragment produced a non-finite displacement at cell ({x}, {y})")]
    NonFiniteDisplacement { x: u32, y: u32 },

    #[error("unknown fragment: {0}")]
    UnknownFragment(String),

    #[error("unknown surface: {0}")]
    UnknownSurface(u64),

    #[error("config error: {0}")]
    Config(String),

    #[error("encode error: {0}")]
    Encode(String),
}

/// Result type alias
pub type GlassResult<T> = Result<T, GlassError>;

/// Reject zero-sized canvases before any allocation happens.
pub fn check_dimensions(width: u32, height: u32) -> GlassResult<()> {
    if width == 0 || height == 0 {
        return Err(GlassError::InvalidDimension { width, height });
    }
    Ok(())
}

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identity of a host surface (an element, a layer, a window).
///
/// The host chooses the values; the registry only compares them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SurfaceId(pub u64);

impl SurfaceId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn get(&self) -> u64 {
        self.0
    }
}

impl From<u64> for SurfaceId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for SurfaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

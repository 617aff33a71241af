use glam::Vec2;

use crate::fragment::Fragment;

/// Identity fragment: samples every pixel from where it already is.
#[derive(Debug, Clone, Default)]
pub struct IdentityFragment;

impl IdentityFragment {
    pub fn new() -> Self {
        Self
    }
}

impl Fragment for IdentityFragment {
    fn sample(&self, uv: Vec2) -> Vec2 {
        uv
    }

    fn clone_fragment(&self) -> Box<dyn Fragment> {
        Box::new(self.clone())
    }

    fn name(&self) -> &str {
        "Identity"
    }
}

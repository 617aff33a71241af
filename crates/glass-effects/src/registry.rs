use glass_core::{GlassError, GlassResult};

use crate::fragment::Fragment;

/// An entry in the fragment registry.
pub struct FragmentEntry {
    pub id: &'static str,
    pub name: &'static str,
    pub constructor: fn() -> Box<dyn Fragment>,
}

/// Build the registry of built-in fragments.
///
/// Each fragment is identified by a unique string ID that hosts use in
/// configuration to pick the distortion for a surface.
pub fn build_registry() -> Vec<FragmentEntry> {
    vec![
        FragmentEntry {
            id: "identity",
            name: "Identity",
            constructor: || Box::new(crate::identity::IdentityFragment::new()),
        },
        FragmentEntry {
            id: "liquidGlass",
            name: "Liquid Glass",
            constructor: || Box::new(crate::liquid_glass::LiquidGlassFragment::new()),
        },
        FragmentEntry {
            id: "liquidGlassRounded",
            name: "Liquid Glass (Rounded)",
            constructor: || Box::new(crate::liquid_glass::LiquidGlassFragment::rounded()),
        },
    ]
}

/// Look up a fragment entry by its ID.
pub fn find_fragment(id: &str) -> Option<&'static FragmentEntry> {
    static REGISTRY: std::sync::OnceLock<Vec<FragmentEntry>> = std::sync::OnceLock::new();
    let entries = REGISTRY.get_or_init(build_registry);
    entries.iter().find(|e| e.id == id)
}

/// Instantiate a fragment by its ID.
pub fn create_fragment(id: &str) -> GlassResult<Box<dyn Fragment>> {
    find_fragment(id)
        .map(|entry| (entry.constructor)())
        .ok_or_else(|| GlassError::UnknownFragment(id.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_fragment() {
        assert!(find_fragment("liquidGlass").is_some());
        assert!(find_fragment("nope").is_none());
    }

    #[test]
    fn test_create_unknown_fragment() {
        match create_fragment("nope") {
            Err(GlassError::UnknownFragment(id)) => assert_eq!(id, "nope"),
            _ => panic!("expected UnknownFragment"),
        }
    }
}

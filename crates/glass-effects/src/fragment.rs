use glam::Vec2;

/// A per-pixel mapping from a unit-square coordinate to the coordinate the
/// backdrop should be sampled from.
///
/// Fragments are evaluated once per cell when a displacement map is built.
/// They must be pure: the same `uv` always yields the same result.
pub trait Fragment: Send + Sync {
    /// Map a normalized coordinate in [0, 1]² to a (possibly displaced) one.
    fn sample(&self, uv: Vec2) -> Vec2;

    /// Whether the fragment reads interactive pointer input.
    ///
    /// Maps are still built once; hosts may use this to decide whether to
    /// rebuild on pointer movement.
    fn uses_pointer(&self) -> bool {
        false
    }

    /// Clone this fragment into a boxed trait object.
    fn clone_fragment(&self) -> Box<dyn Fragment>;

    /// Fragment name for display.
    fn name(&self) -> &str;
}

/// Adapts a plain function or closure into a [`Fragment`].
#[derive(Clone)]
pub struct FnFragment<F> {
    name: &'static str,
    func: F,
}

impl<F> FnFragment<F>
where
    F: Fn(Vec2) -> Vec2 + Clone + Send + Sync + 'static,
{
    pub fn new(name: &'static str, func: F) -> Self {
        Self { name, func }
    }
}

impl<F> Fragment for FnFragment<F>
where
    F: Fn(Vec2) -> Vec2 + Clone + Send + Sync + 'static,
{
    fn sample(&self, uv: Vec2) -> Vec2 {
        (self.func)(uv)
    }

    fn clone_fragment(&self) -> Box<dyn Fragment> {
        Box::new(self.clone())
    }

    fn name(&self) -> &str {
        self.name
    }
}

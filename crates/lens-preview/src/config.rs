use crate::ScalePolicy;
use lens_base::Vec2;

/// Configuration for a camera preview.
#[derive(Clone, Debug)]
pub struct PreviewConfig {
    policy: ScalePolicy,
    fallback_size: Vec2<i32>,
    stop_on_surface_destroyed: bool,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            policy: ScalePolicy::Fill,
            fallback_size: Vec2::new(800, 480),
            stop_on_surface_destroyed: false,
        }
    }
}

impl PreviewConfig {
    /// Set the layout policy.
    pub fn with_policy(mut self, policy: ScalePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Set the native size assumed while the source reports none.
    pub fn with_fallback_size(mut self, width: i32, height: i32) -> Self {
        self.fallback_size = Vec2::new(width, height);
        self
    }

    /// Stop the capture source when the surface goes away, and resume it
    /// when a new surface arrives.
    pub fn with_stop_on_surface_destroyed(mut self, stop: bool) -> Self {
        self.stop_on_surface_destroyed = stop;
        self
    }

    // Getters
    pub fn policy(&self) -> ScalePolicy {
        self.policy
    }

    pub fn fallback_size(&self) -> Vec2<i32> {
        self.fallback_size
    }

    pub fn stop_on_surface_destroyed(&self) -> bool {
        self.stop_on_surface_destroyed
    }
}

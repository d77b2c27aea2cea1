//! Configuration types for the world's tick loop.

use crate::float::Float;
use crate::vec::Vec;

/// Tuning for [`World::step`](crate::world::World::step).
///
/// # Builder Pattern
/// ```
/// use tendon::config::WorldConfig;
/// use tendon::vec::Vec3;
///
/// let config: WorldConfig<Vec3<f32>> = WorldConfig::new()
///     .with_iterations(8)
///     .with_gravity(Vec3::new(0.0, -9.81, 0.0))
///     .with_drag(0.99)
///     .with_sub_steps(2);
/// ```
#[derive(Clone, Debug)]
pub struct WorldConfig<V: Vec> {
    /// Constraint passes per sub-step. More passes converge further toward a
    /// configuration that satisfies every constraint at once. Default: 4.
    pub iterations: usize,
    /// Gravity acceleration vector. Default: zero (no gravity).
    pub gravity: V,
    /// Fraction of velocity kept each integration, multiplied with each
    /// particle's own drag. 1.0 = no drag. Default: 1.0.
    pub drag: V::Scalar,
    /// Number of sub-steps per frame. Default: 1.
    pub sub_steps: usize,
}

impl<V: Vec> WorldConfig<V> {
    pub fn new() -> Self {
        WorldConfig {
            iterations: 4,
            gravity: V::zero(),
            drag: V::Scalar::one(),
            sub_steps: 1,
        }
    }

    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations.max(1);
        self
    }

    pub fn with_gravity(mut self, gravity: V) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_drag(mut self, drag: V::Scalar) -> Self {
        self.drag = drag;
        self
    }

    pub fn with_sub_steps(mut self, sub_steps: usize) -> Self {
        self.sub_steps = sub_steps.max(1);
        self
    }
}

impl<V: Vec> Default for WorldConfig<V> {
    fn default() -> Self {
        Self::new()
    }
}

//! Verlet particles with position-based dynamics.

use crate::error::PhysicsError;
use crate::float::Float;
use crate::vec::Vec;

/// Handle to a particle owned by a [`World`](crate::world::World).
///
/// Worlds never remove particles, so a handle issued by a world resolves for
/// that world's whole lifetime.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ParticleId(pub(crate) usize);

impl ParticleId {
    /// Position of the particle in its world's particle list.
    pub fn index(self) -> usize {
        self.0
    }
}

impl From<usize> for ParticleId {
    fn from(index: usize) -> Self {
        ParticleId(index)
    }
}

/// A Verlet particle: velocity is implicit in `pos - prev_pos`.
#[derive(Clone, Debug)]
pub struct Particle<V: Vec> {
    pos: V,
    prev_pos: V,
    force: V,
    mass: V::Scalar,
    inv_mass: V::Scalar,
    drag: V::Scalar,
    free: bool,
}

/// Mass as stored on a particle: negative or non-finite input becomes 0.
fn sanitize_mass<F: Float>(mass: F) -> F {
    if mass.is_finite() && mass > F::zero() { mass } else { F::zero() }
}

fn inverse<F: Float>(mass: F) -> F {
    if mass.is_near_zero(F::from_f32(1e-10)) {
        F::zero()
    } else {
        F::one() / mass
    }
}

impl<V: Vec> Particle<V> {
    /// A free particle at rest. A mass of (near) zero gives an inverse mass of
    /// zero, which constraints treat as immovable. Negative and non-finite
    /// masses are stored as zero; use [`set_mass`](Self::set_mass) to have
    /// them rejected instead.
    pub fn new(pos: V, mass: V::Scalar) -> Self {
        let mass = sanitize_mass(mass);
        Particle {
            pos,
            prev_pos: pos,
            force: V::zero(),
            mass,
            inv_mass: inverse(mass),
            drag: V::Scalar::one(),
            free: true,
        }
    }

    /// A particle that neither integrates nor yields to constraints.
    ///
    /// It keeps a mass of 1, so it still counts in a spring's inverse-mass
    /// sum and the free end only takes its share of each correction. Use
    /// `Particle::new(pos, 0.0)` for an anchor that hands the free end the
    /// full correction.
    pub fn fixed(pos: V) -> Self {
        let mut p = Particle::new(pos, V::Scalar::one());
        p.free = false;
        p
    }

    pub fn position(&self) -> V { self.pos }
    pub fn prev_position(&self) -> V { self.prev_pos }
    pub fn mass(&self) -> V::Scalar { self.mass }
    pub fn inv_mass(&self) -> V::Scalar { self.inv_mass }
    pub fn is_free(&self) -> bool { self.free }
    pub fn drag(&self) -> V::Scalar { self.drag }

    pub fn set_mass(&mut self, mass: V::Scalar) -> Result<(), PhysicsError> {
        if !mass.is_finite() || mass < V::Scalar::zero() {
            return Err(PhysicsError::InvalidMass);
        }
        self.mass = mass;
        self.inv_mass = inverse(mass);
        Ok(())
    }

    /// Per-particle velocity retention, multiplied with the world's drag.
    pub fn set_drag(&mut self, drag: V::Scalar) {
        self.drag = drag;
    }

    /// Stop integrating and stop yielding to constraints. Pending velocity is
    /// discarded so a later [`release`](Self::release) starts from rest.
    pub fn fix(&mut self) {
        self.free = false;
        self.prev_pos = self.pos;
        self.force = V::zero();
    }

    pub fn release(&mut self) {
        self.free = true;
    }

    /// Shift the particle by `delta`.
    ///
    /// With `apply_velocity == false` the history moves along with the
    /// position, so the implicit velocity is unchanged; this is how
    /// constraints correct positions. With `true` the shift shows up as
    /// velocity on the next integration.
    pub fn move_by(&mut self, delta: V, apply_velocity: bool) {
        self.pos = self.pos + delta;
        if !apply_velocity {
            self.prev_pos = self.prev_pos + delta;
        }
    }

    /// Teleport, keeping the current velocity.
    pub fn set_position(&mut self, pos: V) {
        let delta = pos - self.pos;
        self.move_by(delta, false);
    }

    /// Teleport and come to rest.
    pub fn move_to(&mut self, pos: V) {
        self.pos = pos;
        self.prev_pos = pos;
    }

    pub fn add_force(&mut self, force: V) {
        if self.free {
            self.force = self.force + force;
        }
    }

    /// Add a per-tick displacement to the implicit velocity.
    pub fn add_velocity(&mut self, velocity: V) {
        if self.free {
            self.prev_pos = self.prev_pos - velocity;
        }
    }

    /// Displacement over the last tick.
    pub fn velocity(&self) -> V {
        self.pos - self.prev_pos
    }

    /// Advance one Verlet step. `world_drag` is combined with the particle's
    /// own drag; 1.0 keeps all velocity.
    pub fn integrate(&mut self, dt: V::Scalar, world_drag: V::Scalar) {
        if !self.free {
            self.force = V::zero();
            return;
        }
        let velocity = self.velocity().scale(self.drag * world_drag);
        let accel = self.force.scale(self.inv_mass * dt * dt);
        let next = self.pos + velocity + accel;
        self.prev_pos = self.pos;
        self.pos = next;
        self.force = V::zero();
    }
}

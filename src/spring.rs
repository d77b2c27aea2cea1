//! Mass-aware spring constraint between two particles.
//!
//! A spring does not accumulate forces. Each solve measures how far the two
//! endpoints are from the rest length and shifts both positions directly,
//! split by inverse mass, without touching their implicit velocity.

use crate::constraint::pair_mut;
use crate::debug::DebugCanvas;
use crate::float::Float;
use crate::particle::{Particle, ParticleId};
use crate::vec::Vec;

/// Elastic link pulling particles `a` and `b` toward `rest_length` apart.
#[derive(Clone, Debug, PartialEq)]
pub struct Spring<V: Vec> {
    a: ParticleId,
    b: ParticleId,
    strength: V::Scalar,
    rest_length: V::Scalar,
    force_cap: V::Scalar,
    id: i32,
}

impl<V: Vec> Spring<V> {
    /// New spring with force capping disabled and `id` 0.
    ///
    /// `a` and `b` must be distinct; a spring on a single particle never
    /// moves anything. Strength is usually in `[0, 1]`: values above 1
    /// over-correct, values below 0 push the wrong way.
    pub fn new(a: ParticleId, b: ParticleId, strength: V::Scalar, rest_length: V::Scalar) -> Self {
        Spring {
            a,
            b,
            strength,
            rest_length,
            force_cap: V::Scalar::zero(),
            id: 0,
        }
    }

    pub fn with_force_cap(mut self, force_cap: V::Scalar) -> Self {
        self.force_cap = force_cap;
        self
    }

    pub fn with_id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    pub fn particle_a(&self) -> ParticleId { self.a }
    pub fn particle_b(&self) -> ParticleId { self.b }

    pub fn position_a(&self, particles: &[Particle<V>]) -> Option<V> {
        particles.get(self.a.index()).map(Particle::position)
    }

    pub fn position_b(&self, particles: &[Particle<V>]) -> Option<V> {
        particles.get(self.b.index()).map(Particle::position)
    }

    pub fn strength(&self) -> V::Scalar { self.strength }
    pub fn set_strength(&mut self, strength: V::Scalar) { self.strength = strength; }

    pub fn rest_length(&self) -> V::Scalar { self.rest_length }

    /// Stored as given. Negative values act as a rest length of zero.
    pub fn set_rest_length(&mut self, rest_length: V::Scalar) { self.rest_length = rest_length; }

    pub fn force_cap(&self) -> V::Scalar { self.force_cap }

    /// Upper bound on the length of a single correction. Zero or negative
    /// disables capping.
    pub fn set_force_cap(&mut self, force_cap: V::Scalar) { self.force_cap = force_cap; }

    /// Caller bookkeeping tag; the solver ignores it.
    pub fn id(&self) -> i32 { self.id }
    pub fn set_id(&mut self, id: i32) { self.id = id; }

    /// The correction this spring would apply to `a`, before inverse-mass
    /// scaling. `b` receives the negation.
    ///
    /// Returns `None` when there is nothing sensible to do: the endpoints
    /// coincide (no direction to push along), both endpoints have zero
    /// inverse mass, or the inputs produce a non-finite magnitude.
    pub fn correction(&self, pos_a: V, inv_mass_a: V::Scalar, pos_b: V, inv_mass_b: V::Scalar) -> Option<V> {
        let zero = V::Scalar::zero();
        let delta = pos_b - pos_a;
        let len = delta.length();
        if len == zero {
            return None;
        }
        let inv_mass_sum = inv_mass_a + inv_mass_b;
        if inv_mass_sum == zero {
            return None;
        }

        let rest = self.rest_length.max(zero);
        // Dividing by `len` folds normalization of `delta` into the scalar.
        let magnitude = self.strength * (len - rest) / (len * inv_mass_sum);
        if !magnitude.is_finite() {
            return None;
        }

        let correction = delta.scale(magnitude);
        if self.force_cap > zero {
            Some(correction.limit(self.force_cap))
        } else {
            Some(correction)
        }
    }

    /// Pull both endpoints toward the rest length.
    ///
    /// Positions are read as they are now, including corrections made earlier
    /// in the same pass by other constraints. Returns `false` if the solve was
    /// skipped: unresolvable or identical handles, or a degenerate
    /// [`correction`](Self::correction).
    pub fn solve(&self, particles: &mut [Particle<V>]) -> bool {
        let Some((a, b)) = pair_mut(particles, self.a.index(), self.b.index()) else {
            return false;
        };
        let inv_a = a.inv_mass();
        let inv_b = b.inv_mass();
        let Some(correction) = self.correction(a.position(), inv_a, b.position(), inv_b) else {
            return false;
        };

        if a.is_free() {
            a.move_by(correction.scale(inv_a), false);
        }
        if b.is_free() {
            b.move_by(correction.scale(-inv_b), false);
        }
        true
    }

    pub fn debug_draw<C: DebugCanvas<V>>(&self, particles: &[Particle<V>], canvas: &mut C) {
        if let (Some(a), Some(b)) = (self.position_a(particles), self.position_b(particles)) {
            canvas.line(a, b);
        }
    }
}

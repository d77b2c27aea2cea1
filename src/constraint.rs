//! Constraints solved once per solver iteration: springs and pins.

use crate::debug::DebugCanvas;
use crate::float::Float;
use crate::particle::{Particle, ParticleId};
use crate::spring::Spring;
use crate::vec::Vec;
use core::iter::{Chain, Once};

/// Type tag distinguishing the constraint variants.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ConstraintKind {
    Spring,
    Pin,
}

impl ConstraintKind {
    /// Label for logs and debug overlays.
    pub fn class_name(self) -> &'static str {
        match self {
            ConstraintKind::Spring => "Spring",
            ConstraintKind::Pin => "Pin",
        }
    }
}

/// Handle to a constraint registered with a [`World`](crate::world::World):
/// its position in registration order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ConstraintId(pub(crate) usize);

impl ConstraintId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl From<usize> for ConstraintId {
    fn from(index: usize) -> Self {
        ConstraintId(index)
    }
}

/// A constraint that can be applied to a set of particles.
#[derive(Clone, Debug, PartialEq)]
pub enum Constraint<V: Vec> {
    Spring(Spring<V>),
    Pin(PinConstraint<V>),
}

/// Pulls one particle toward a fixed anchor point.
#[derive(Clone, Debug, PartialEq)]
pub struct PinConstraint<V: Vec> {
    pub particle: ParticleId,
    pub anchor: V,
    pub stiffness: V::Scalar,
}

/// Handles referenced by a constraint.
pub type ParticleIds = Chain<Once<ParticleId>, core::option::IntoIter<ParticleId>>;

impl<V: Vec> Constraint<V> {
    pub fn kind(&self) -> ConstraintKind {
        match self {
            Constraint::Spring(_) => ConstraintKind::Spring,
            Constraint::Pin(_) => ConstraintKind::Pin,
        }
    }

    pub fn class_name(&self) -> &'static str {
        self.kind().class_name()
    }

    /// Apply the constraint. Returns `false` when the solve was skipped as
    /// degenerate.
    pub fn solve(&self, particles: &mut [Particle<V>]) -> bool {
        match self {
            Constraint::Spring(c) => c.solve(particles),
            Constraint::Pin(c) => c.solve(particles),
        }
    }

    pub fn debug_draw<C: DebugCanvas<V>>(&self, particles: &[Particle<V>], canvas: &mut C) {
        match self {
            Constraint::Spring(c) => c.debug_draw(particles, canvas),
            Constraint::Pin(c) => c.debug_draw(particles, canvas),
        }
    }

    /// Every particle this constraint reads or moves.
    pub fn particles(&self) -> ParticleIds {
        match self {
            Constraint::Spring(c) => core::iter::once(c.particle_a()).chain(Some(c.particle_b())),
            Constraint::Pin(c) => core::iter::once(c.particle).chain(None),
        }
    }

    pub fn as_spring(&self) -> Option<&Spring<V>> {
        match self {
            Constraint::Spring(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_spring_mut(&mut self) -> Option<&mut Spring<V>> {
        match self {
            Constraint::Spring(c) => Some(c),
            _ => None,
        }
    }
}

impl<V: Vec> From<Spring<V>> for Constraint<V> {
    fn from(spring: Spring<V>) -> Self {
        Constraint::Spring(spring)
    }
}

impl<V: Vec> From<PinConstraint<V>> for Constraint<V> {
    fn from(pin: PinConstraint<V>) -> Self {
        Constraint::Pin(pin)
    }
}

impl<V: Vec> PinConstraint<V> {
    pub fn new(particle: ParticleId, anchor: V, stiffness: V::Scalar) -> Self {
        PinConstraint { particle, anchor, stiffness }
    }

    /// Move the particle `stiffness` of the way to the anchor. Fixed and
    /// infinitely heavy particles are left alone.
    pub fn solve(&self, particles: &mut [Particle<V>]) -> bool {
        let Some(p) = particles.get_mut(self.particle.index()) else {
            return false;
        };
        if !p.is_free() || p.inv_mass() == V::Scalar::zero() {
            return true;
        }
        let correction = (self.anchor - p.position()).scale(self.stiffness);
        p.move_by(correction, false);
        true
    }

    pub fn debug_draw<C: DebugCanvas<V>>(&self, particles: &[Particle<V>], canvas: &mut C) {
        if let Some(p) = particles.get(self.particle.index()) {
            canvas.line(p.position(), self.anchor);
        }
        canvas.point(self.anchor);
    }
}

/// Borrow two distinct elements mutably, in argument order.
pub(crate) fn pair_mut<T>(items: &mut [T], a: usize, b: usize) -> Option<(&mut T, &mut T)> {
    if a == b || a >= items.len() || b >= items.len() {
        return None;
    }
    if a < b {
        let (lo, hi) = items.split_at_mut(b);
        Some((&mut lo[a], &mut hi[0]))
    } else {
        let (lo, hi) = items.split_at_mut(a);
        Some((&mut hi[0], &mut lo[b]))
    }
}

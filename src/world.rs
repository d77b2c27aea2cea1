//! The world: owns particles and constraints and drives the tick loop.

use crate::config::WorldConfig;
use crate::constraint::{Constraint, ConstraintId, PinConstraint};
use crate::debug::DebugCanvas;
use crate::error::PhysicsError;
use crate::float::Float;
use crate::observer::StepObserver;
use crate::particle::{Particle, ParticleId};
use crate::spring::Spring;
use crate::vec::Vec;
use alloc::vec::Vec as AllocVec;

/// Owns every particle and constraint of a simulation.
///
/// Particles live in an append-only arena, so a [`ParticleId`] handed out by
/// a world stays valid for as long as the world exists. Constraints only
/// store handles and are validated on registration.
///
/// # Solve order
///
/// Constraints are solved one after another in registration order, and each
/// solve sees the positions left by the ones before it in the same pass
/// (Gauss-Seidel relaxation). A single pass only approximates a state that
/// satisfies every constraint; more [`iterations`](WorldConfig::iterations)
/// get closer. Reordering constraints changes the result.
pub struct World<V: Vec> {
    particles: AllocVec<Particle<V>>,
    constraints: AllocVec<Constraint<V>>,
    config: WorldConfig<V>,
}

impl<V: Vec> World<V> {
    pub fn new(config: WorldConfig<V>) -> Self {
        World {
            particles: AllocVec::new(),
            constraints: AllocVec::new(),
            config,
        }
    }

    pub fn config(&self) -> &WorldConfig<V> { &self.config }
    pub fn config_mut(&mut self) -> &mut WorldConfig<V> { &mut self.config }

    pub fn add_particle(&mut self, particle: Particle<V>) -> ParticleId {
        let id = ParticleId(self.particles.len());
        self.particles.push(particle);
        id
    }

    pub fn particle(&self, id: ParticleId) -> Option<&Particle<V>> {
        self.particles.get(id.index())
    }

    pub fn particle_mut(&mut self, id: ParticleId) -> Option<&mut Particle<V>> {
        self.particles.get_mut(id.index())
    }

    pub fn particles(&self) -> &[Particle<V>] { &self.particles }
    pub fn particle_count(&self) -> usize { self.particles.len() }

    fn check_particle(&self, id: ParticleId) -> Result<(), PhysicsError> {
        if id.index() < self.particles.len() {
            Ok(())
        } else {
            Err(PhysicsError::ParticleOutOfBounds {
                index: id.index(),
                count: self.particles.len(),
            })
        }
    }

    /// Register a constraint after checking that every particle it names
    /// exists and, for springs, that the two endpoints differ.
    pub fn add_constraint(&mut self, constraint: impl Into<Constraint<V>>) -> Result<ConstraintId, PhysicsError> {
        let constraint = constraint.into();
        for id in constraint.particles() {
            self.check_particle(id)?;
        }
        if let Constraint::Spring(s) = &constraint {
            if s.particle_a() == s.particle_b() {
                return Err(PhysicsError::SelfConnected { index: s.particle_a().index() });
            }
        }
        let id = ConstraintId(self.constraints.len());
        self.constraints.push(constraint);
        Ok(id)
    }

    /// Connect `a` and `b` with a spring. Force capping starts disabled.
    pub fn make_spring(
        &mut self,
        a: ParticleId,
        b: ParticleId,
        strength: V::Scalar,
        rest_length: V::Scalar,
    ) -> Result<ConstraintId, PhysicsError> {
        self.add_constraint(Spring::new(a, b, strength, rest_length))
    }

    /// Connect `a` and `b` with a spring whose rest length is their current
    /// separation.
    pub fn make_spring_at_rest(
        &mut self,
        a: ParticleId,
        b: ParticleId,
        strength: V::Scalar,
    ) -> Result<ConstraintId, PhysicsError> {
        self.check_particle(a)?;
        self.check_particle(b)?;
        let rest_length = self.particles[a.index()]
            .position()
            .distance(self.particles[b.index()].position());
        self.make_spring(a, b, strength, rest_length)
    }

    pub fn make_pin(
        &mut self,
        particle: ParticleId,
        anchor: V,
        stiffness: V::Scalar,
    ) -> Result<ConstraintId, PhysicsError> {
        self.add_constraint(PinConstraint::new(particle, anchor, stiffness))
    }

    pub fn constraint(&self, id: ConstraintId) -> Option<&Constraint<V>> {
        self.constraints.get(id.index())
    }

    pub fn constraint_mut(&mut self, id: ConstraintId) -> Option<&mut Constraint<V>> {
        self.constraints.get_mut(id.index())
    }

    pub fn spring(&self, id: ConstraintId) -> Option<&Spring<V>> {
        self.constraint(id).and_then(Constraint::as_spring)
    }

    pub fn spring_mut(&mut self, id: ConstraintId) -> Option<&mut Spring<V>> {
        self.constraint_mut(id).and_then(Constraint::as_spring_mut)
    }

    pub fn constraints(&self) -> &[Constraint<V>] { &self.constraints }
    pub fn constraint_count(&self) -> usize { self.constraints.len() }

    /// Remove a constraint, keeping the solve order of the rest. Ids of
    /// constraints registered after it shift down by one.
    pub fn remove_constraint(&mut self, id: ConstraintId) -> Result<Constraint<V>, PhysicsError> {
        if id.index() >= self.constraints.len() {
            return Err(PhysicsError::ConstraintOutOfBounds {
                index: id.index(),
                count: self.constraints.len(),
            });
        }
        Ok(self.constraints.remove(id.index()))
    }

    pub fn clear_constraints(&mut self) {
        self.constraints.clear();
    }

    /// Advance the simulation by `dt`.
    ///
    /// Each sub-step applies gravity, integrates every particle, then runs
    /// `iterations` passes over the constraints.
    pub fn step<O: StepObserver>(&mut self, dt: V::Scalar, observer: &mut O) {
        let sub_steps = self.config.sub_steps.max(1);
        let sub_dt = dt / V::Scalar::from_usize(sub_steps);
        let gravity = self.config.gravity;
        let drag = self.config.drag;

        for _sub in 0..sub_steps {
            for p in self.particles.iter_mut() {
                // Scaled by mass so every particle falls at the same rate.
                p.add_force(gravity.scale(p.mass()));
                p.integrate(sub_dt, drag);
            }
            observer.on_integrate();

            for i in 0..self.config.iterations {
                self.solve_constraints(observer);
                observer.on_constraint_iteration(i);
            }
        }

        observer.on_step_complete();
    }

    /// One pass over every constraint in registration order.
    pub fn solve_constraints<O: StepObserver>(&mut self, observer: &mut O) {
        for (i, constraint) in self.constraints.iter().enumerate() {
            if !constraint.solve(&mut self.particles) {
                observer.on_degenerate_constraint(ConstraintId(i), constraint.kind());
            }
        }
    }

    /// Draw every particle as a point and every constraint.
    pub fn debug_draw<C: DebugCanvas<V>>(&self, canvas: &mut C) {
        for p in self.particles.iter() {
            canvas.point(p.position());
        }
        for c in self.constraints.iter() {
            c.debug_draw(&self.particles, canvas);
        }
    }
}

impl<V: Vec> Default for World<V> {
    fn default() -> Self {
        Self::new(WorldConfig::default())
    }
}

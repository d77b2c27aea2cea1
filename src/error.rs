//! Error types for world set-up.
//!
//! Solving never fails; only building a world (adding particles, registering
//! constraints) can be rejected.

use thiserror::Error;

/// Errors that can occur while configuring particles and constraints.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PhysicsError {
    /// Mass must be non-negative and finite.
    #[error("mass must be non-negative and finite")]
    InvalidMass,
    /// Particle handle does not belong to this world.
    #[error("particle index {index} out of bounds (count: {count})")]
    ParticleOutOfBounds { index: usize, count: usize },
    /// A two-particle constraint was asked to connect a particle to itself.
    #[error("constraint connects particle {index} to itself")]
    SelfConnected { index: usize },
    /// Constraint handle does not belong to this world.
    #[error("constraint index {index} out of bounds (count: {count})")]
    ConstraintOutOfBounds { index: usize, count: usize },
}

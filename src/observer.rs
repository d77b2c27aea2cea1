//! Step observer trait for monitoring the world's tick loop.

use crate::constraint::{ConstraintId, ConstraintKind};

/// Hooks called by [`World`](crate::world::World) while it steps.
///
/// This is the crate's diagnostics channel: implement it to log, count, or
/// profile. All methods default to no-ops.
pub trait StepObserver {
    /// Called after all particles have been integrated (Verlet step).
    fn on_integrate(&mut self) {}

    /// Called after each full pass over the constraints.
    fn on_constraint_iteration(&mut self, _iteration: usize) {}

    /// A constraint solve was skipped: coincident spring endpoints, both
    /// endpoints immovable, a non-finite correction, or a handle that does
    /// not resolve.
    fn on_degenerate_constraint(&mut self, _id: ConstraintId, _kind: ConstraintKind) {}

    /// Called when a simulation step is fully complete.
    fn on_step_complete(&mut self) {}
}

/// A no-op observer that does nothing. Use as default when no observation needed.
pub struct NoOpStepObserver;

impl StepObserver for NoOpStepObserver {}

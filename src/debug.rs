//! Read-only visualization hooks.

use crate::vec::Vec;

/// Sink for debug geometry. Drawing code only ever borrows the simulation
/// immutably, so a canvas cannot disturb the state it renders.
pub trait DebugCanvas<V: Vec> {
    /// Draw a segment between two points.
    fn line(&mut self, from: V, to: V);

    /// Mark a single point.
    fn point(&mut self, _at: V) {}
}

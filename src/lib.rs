//! Verlet particles held together by mass-aware spring constraints.
//!
//! `tendon` is a small position-based physics kernel: a [`World`] owns point
//! masses and the constraints between them, integrates the particles each
//! tick, and then relaxes the constraints by moving particle positions
//! directly. Designed for real-time use: ropes, soft links, cloth-like meshes.
//!
//! # Features
//!
//! - **Springs**: stiffness, rest length and an optional cap on how far a
//!   single solve may move the endpoints
//! - **Mass aware**: corrections split by inverse mass; fixed particles never move
//! - **Stable**: coincident endpoints and immovable pairs degrade to no-ops
//! - **Dimension generic**: the same code runs on `Vec2` and `Vec3`
//! - **Observable**: monitor steps and skipped solves via the `StepObserver` trait
//! - **`no_std` compatible**: Works in embedded and WASM environments
//!
//! # Example
//! ```
//! use tendon::{NoOpStepObserver, Particle, Vec3, World, WorldConfig};
//!
//! let mut world: World<Vec3<f32>> = World::new(WorldConfig::new());
//! let a = world.add_particle(Particle::new(Vec3::new(0.0, 0.0, 0.0), 1.0));
//! let b = world.add_particle(Particle::new(Vec3::new(2.0, 0.0, 0.0), 1.0));
//! world.make_spring(a, b, 1.0, 1.0).unwrap();
//!
//! world.solve_constraints(&mut NoOpStepObserver);
//! assert_eq!(world.particle(b).unwrap().position(), Vec3::new(1.5, 0.0, 0.0));
//! ```

#![no_std]

extern crate alloc;

pub mod float;
pub mod vec;
pub mod particle;
pub mod debug;
pub mod spring;
pub mod constraint;
pub mod world;
pub mod observer;
pub mod config;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::{Vec, Vec2, Vec3};
pub use particle::{Particle, ParticleId};
pub use debug::DebugCanvas;
pub use spring::Spring;
pub use constraint::{Constraint, ConstraintId, ConstraintKind, PinConstraint};
pub use world::World;
pub use config::WorldConfig;
pub use observer::{StepObserver, NoOpStepObserver};
pub use error::PhysicsError;

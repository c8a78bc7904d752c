//! ECS components for entities.
//!
//! This module groups all component types that can be attached to entities
//! in the game world.
//!
//! Submodules overview:
//! - [`animation`] – millisecond-gated frame clock for sprite animations
//! - [`heading`] – movement-key flags, facing direction and the row table
//! - [`inputcontrolled`] – keyboard-driven walk speed
//! - [`mapposition`] – world-space position (in pixels) for an entity
//! - [`rigidbody`] – kinematic body storing the per-tick velocity
//! - [`sprite`] – sheet key, animation row and mirroring for rendering

pub mod animation;
pub mod heading;
pub mod inputcontrolled;
pub mod mapposition;
pub mod rigidbody;
pub mod sprite;

//! Engine systems.
//!
//! This module groups the ECS systems that advance input, simulation and
//! rendering. They run once per frame in a fixed order: input polling,
//! heading edges (observer), animation, walk controller, movement, render.
//!
//! Submodules overview
//! - [`animation`] – resolve idle/row/flip and advance the frame clock
//! - [`heading`] – observer applying direction-key edges to headings
//! - [`input`] – read hardware input and emit press/release events
//! - [`movement`] – integrate per-tick velocities into positions
//! - [`render`] – draw the backdrop and sprite frames using Raylib
//! - [`time`] – update simulation time and delta
//! - [`walkcontroller`] – translate heading flags into a velocity

pub mod animation;
pub mod heading;
pub mod input;
pub mod movement;
pub mod render;
pub mod time;
pub mod walkcontroller;

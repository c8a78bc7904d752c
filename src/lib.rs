//! Tilestead library.
//!
//! This module exposes the game's ECS components, resources, systems and
//! the sheet-slicing core for the binary and for tests.

pub mod components;
pub mod events;
pub mod framesheet;
pub mod game;
pub mod mapgen;
pub mod resources;
pub mod systems;

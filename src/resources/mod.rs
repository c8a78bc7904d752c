//! ECS resources made available to systems.
//!
//! This module groups the long-lived data injected into the ECS world and
//! accessed by systems during execution.
//!
//! Overview
//! - `gameconfig` – settings loaded from the INI configuration file
//! - `input` – per-frame keyboard state of the four direction keys
//! - `sheetstore` – uploaded frame textures of sliced sprite sheets
//! - `texturestore` – loaded textures keyed by string IDs
//! - `tilemap` – the tile map grid consumed by the backdrop baker
//! - `worldtime` – simulation time and delta

pub mod gameconfig;
pub mod input;
pub mod sheetstore;
pub mod texturestore;
pub mod tilemap;
pub mod worldtime;

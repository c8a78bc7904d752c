//! Game configuration resource.
//!
//! Manages game settings loaded from an INI configuration file. Provides
//! defaults for safe startup and a method to load the file; missing files
//! or keys silently keep the defaults.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 800
//! height = 600
//! fps = 60
//!
//! [map]
//! tile_size = 32
//!
//! [player]
//! speed = 2.0
//!
//! [animation]
//! frame_delay = 125
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

/// Default safe values for startup
const DEFAULT_WINDOW_WIDTH: u32 = 800;
const DEFAULT_WINDOW_HEIGHT: u32 = 600;
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_TILE_SIZE: u32 = 32;
const DEFAULT_PLAYER_SPEED: f32 = 2.0;
const DEFAULT_FRAME_DELAY_MS: u64 = 125;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Game configuration resource.
///
/// Stores window, map and player settings. Loaded once in `main` before the
/// window opens; the values do not change at runtime.
#[derive(Resource, Debug, Clone)]
pub struct GameConfig {
    /// Window width in pixels.
    pub window_width: u32,
    /// Window height in pixels.
    pub window_height: u32,
    /// Target frames per second.
    pub target_fps: u32,
    /// Size of a backdrop tile in pixels.
    pub tile_size: u32,
    /// Player walk speed in pixels per tick.
    pub player_speed: f32,
    /// Milliseconds between animation frame advances.
    pub frame_delay_ms: u64,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            tile_size: DEFAULT_TILE_SIZE,
            player_speed: DEFAULT_PLAYER_SPEED,
            frame_delay_ms: DEFAULT_FRAME_DELAY_MS,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    #[allow(dead_code)]
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        // [window] section
        if let Some(width) = config.getuint("window", "width").ok().flatten() {
            self.window_width = width as u32;
        }
        if let Some(height) = config.getuint("window", "height").ok().flatten() {
            self.window_height = height as u32;
        }
        if let Some(fps) = config.getuint("window", "fps").ok().flatten() {
            self.target_fps = fps as u32;
        }

        // [map] section
        if let Some(tile_size) = config.getuint("map", "tile_size").ok().flatten() {
            self.tile_size = tile_size as u32;
        }

        // [player] section
        if let Some(speed) = config.getfloat("player", "speed").ok().flatten() {
            self.player_speed = speed as f32;
        }

        // [animation] section
        if let Some(delay) = config.getuint("animation", "frame_delay").ok().flatten() {
            self.frame_delay_ms = delay;
        }

        info!(
            "Loaded config: {}x{} window, fps={}, tile_size={}, speed={}, frame_delay={}ms",
            self.window_width,
            self.window_height,
            self.target_fps,
            self.tile_size,
            self.player_speed,
            self.frame_delay_ms
        );

        Ok(())
    }

    /// Get the window size.
    pub fn window_size(&self) -> (u32, u32) {
        (self.window_width, self.window_height)
    }

    /// Tiles needed to cover the window horizontally.
    pub fn map_columns(&self) -> u32 {
        self.window_width.div_ceil(self.tile_size)
    }

    /// Tiles needed to cover the window vertically.
    pub fn map_rows(&self) -> u32 {
        self.window_height.div_ceil(self.tile_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::new();
        assert_eq!(config.window_size(), (800, 600));
        assert_eq!(config.target_fps, 60);
        assert_eq!(config.tile_size, 32);
        assert_eq!(config.player_speed, 2.0);
        assert_eq!(config.frame_delay_ms, 125);
    }

    #[test]
    fn test_map_dimensions_cover_window() {
        let config = GameConfig::new();
        // 800/32 divides evenly, 600/32 does not and rounds up.
        assert_eq!(config.map_columns(), 25);
        assert_eq!(config.map_rows(), 19);
    }

    #[test]
    fn test_load_missing_file_is_an_error() {
        let mut config = GameConfig::with_path("./does_not_exist.ini");
        assert!(config.load_from_file().is_err());
        // Defaults survive a failed load.
        assert_eq!(config.window_size(), (800, 600));
    }
}

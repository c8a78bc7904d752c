//! Tilestead main entry point.
//!
//! A minimal tile-map walking prototype built with:
//! - **raylib** for windowing and graphics
//! - **bevy_ecs** for entity-component-system architecture
//!
//! # Main Loop
//!
//! 1. Load `config.ini`, open the window, build the ECS world
//! 2. Slice the sprite and tile sheets, bake the tile backdrop, spawn the
//!    player ([`game::setup`])
//! 3. Per frame: poll input, apply key edges to the heading, resolve the
//!    animation row and frame, integrate movement, render
//!
//! # Running
//!
//! ```sh
//! cargo run --release
//! ```
//!
//! `--generate-map` writes a fresh random tile map and exits.

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use clap::Parser;
use std::path::PathBuf;

use tilestead::game;
use tilestead::mapgen;
use tilestead::resources::gameconfig::GameConfig;
use tilestead::resources::input::InputState;
use tilestead::resources::worldtime::WorldTime;
use tilestead::systems::animation::animate;
use tilestead::systems::heading::heading_observer;
use tilestead::systems::input::update_input_state;
use tilestead::systems::movement::movement;
use tilestead::systems::render::render_system;
use tilestead::systems::time::update_world_time;
use tilestead::systems::walkcontroller::walk_controller;

const WINDOW_TITLE: &str = "Tilestead";

/// Tilestead, a minimal 2D tile-map prototype
#[derive(Parser)]
#[command(version, about = "Tilestead, a minimal 2D tile-map prototype")]
struct Cli {
    /// Generate a random tile map JSON and exit.
    /// Optionally provide a path (default: assets/data/tile_map.json).
    #[arg(long, value_name = "PATH")]
    generate_map: Option<Option<PathBuf>>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = GameConfig::new();
    config.load_from_file().ok(); // ignore errors, use defaults

    // Early-exit: generate a tile map and quit (no window needed)
    if let Some(maybe_path) = cli.generate_map {
        let path = maybe_path.unwrap_or_else(|| PathBuf::from(game::TILE_MAP_PATH));
        let columns = config.map_columns() as usize;
        let rows = config.map_rows() as usize;
        match mapgen::write_map(&path, columns, rows) {
            Ok(()) => println!(
                "Tile map ({}x{}) written to {}",
                columns,
                rows,
                path.display()
            ),
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        }
        return;
    }

    log::info!("Starting {}", WINDOW_TITLE);

    // --------------- Raylib window ---------------
    let (window_width, window_height) = config.window_size();
    let (mut rl, thread) = raylib::init()
        .size(window_width as i32, window_height as i32)
        .title(WINDOW_TITLE)
        .build();
    rl.set_target_fps(config.target_fps);

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    world.insert_resource(WorldTime::default());
    world.insert_resource(InputState::default());
    world.insert_resource(config);
    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);

    world.spawn(Observer::new(heading_observer));
    // Ensure the observer is registered before any system triggers events.
    world.flush();

    game::setup(&mut world);

    let mut update = Schedule::default();
    update.add_systems(update_input_state);
    update.add_systems(animate.after(update_input_state));
    update.add_systems(walk_controller.after(animate));
    update.add_systems(movement.after(walk_controller));
    update.add_systems(render_system.after(movement));

    update
        .initialize(&mut world)
        .expect("Failed to initialize schedule");

    // --------------- Main loop ---------------
    while !world
        .non_send_resource::<raylib::RaylibHandle>()
        .window_should_close()
    {
        let dt = world
            .non_send_resource::<raylib::RaylibHandle>()
            .get_frame_time();
        update_world_time(&mut world, dt);

        update.run(&mut world);

        world.clear_trackers(); // Clear changed components for next frame
    }
}

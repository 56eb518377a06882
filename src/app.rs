/*
 * Application Module
 *
 * This module defines the main application model and the per-frame update
 * for the boid simulation. Each frame it:
 * - refreshes the frame metrics and runs the control panel
 * - logs toggle changes made by the keyboard or the panel
 * - advances the flock by one tick unless the simulation is paused
 *
 * The renderer only reads the model after update has returned, so a tick is
 * never observed half-way through.
 */

use nannou::prelude::*;
use nannou_egui::Egui;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::OnceLock;
use tracing::{info, warn};

use crate::camera::Camera;
use crate::debug::{DebugInfo, DebugSelection};
use crate::flock::Flock;
use crate::input;
use crate::params::{RuleToggles, SimulationConfig};
use crate::renderer;
use crate::ui;

// Options handed from main to the nannou model function
struct Launch {
    config: SimulationConfig,
    seed: Option<u64>,
}

static LAUNCH: OnceLock<Launch> = OnceLock::new();

// Main model for the application
pub struct Model {
    pub flock: Flock,
    pub toggles: RuleToggles,
    pub selection: DebugSelection,
    pub egui: Egui,
    pub debug_info: DebugInfo,
    pub camera: Camera,
    pub rng: StdRng,
    last_toggles: RuleToggles,
}

/// Opens the window and runs the simulation until the window is closed.
pub fn run(config: SimulationConfig, seed: Option<u64>) {
    if LAUNCH.set(Launch { config, seed }).is_err() {
        warn!("simulation already launched, keeping the first configuration");
    }

    nannou::app(model).update(update).run();
}

// Initialize the model
pub fn model(app: &App) -> Model {
    let (config, seed) = match LAUNCH.get() {
        Some(launch) => (launch.config.clone(), launch.seed),
        None => (SimulationConfig::default(), None),
    };

    let window_id = app
        .new_window()
        .title("Boid Flocking Simulation")
        .size(config.width as u32, config.height as u32)
        .view(renderer::view)
        .key_pressed(input::key_pressed)
        .mouse_pressed(input::mouse_pressed)
        .raw_event(input::raw_window_event)
        .build()
        .expect("failed to build the simulation window");

    let window = app
        .window(window_id)
        .expect("simulation window disappeared right after creation");
    let egui = Egui::from_window(&window);

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let camera = Camera::new(config.width, config.height);
    let flock = Flock::random(config, &mut rng);

    info!(
        boids = flock.len(),
        seed = ?seed,
        parallel = flock.config().parallel,
        "flock created"
    );

    let toggles = RuleToggles::default();

    Model {
        flock,
        toggles,
        selection: DebugSelection::default(),
        egui,
        debug_info: DebugInfo::default(),
        camera,
        rng,
        last_toggles: toggles,
    }
}

// Update the model
pub fn update(app: &App, model: &mut Model, update: Update) {
    model.debug_info.fps = app.fps();
    model.debug_info.frame_time = update.since_last;

    let actions = ui::update_ui(
        &mut model.egui,
        &mut model.toggles,
        &mut model.selection,
        &model.debug_info,
        model.flock.len(),
    );

    if actions.randomize_velocities {
        randomize_velocities(model);
    }

    log_toggle_changes(model);

    // Paused: no state changes, the view keeps drawing the last tick
    if model.toggles.paused {
        return;
    }

    let report = model
        .flock
        .tick(&model.toggles, model.selection.active_index());
    if model.selection.active_index().is_some() {
        model.selection.report = report;
    }
    model.debug_info.ticks = model.flock.tick_count();
}

pub fn randomize_velocities(model: &mut Model) {
    model.flock.randomize_velocities(&mut model.rng);
    info!(tick = model.flock.tick_count(), "velocities randomized");
}

fn log_toggle_changes(model: &mut Model) {
    let now = model.toggles;
    let before = model.last_toggles;
    if now == before {
        return;
    }

    if now.paused != before.paused {
        info!(
            tick = model.flock.tick_count(),
            "simulation {}",
            if now.paused { "paused" } else { "resumed" }
        );
    }
    if now.cohesion != before.cohesion
        || now.alignment != before.alignment
        || now.separation != before.separation
        || now.fov != before.fov
    {
        info!(
            cohesion = now.cohesion,
            alignment = now.alignment,
            separation = now.separation,
            fov = now.fov,
            "rule toggles changed"
        );
    }

    model.last_toggles = now;
}

/*
 * Boid Flocking Simulation - Module Definitions
 *
 * This file defines the module structure for the boid simulation.
 * The simulation core (boid, params, physics, flock, debug) is independent of
 * the window; the remaining modules draw the flock and handle user input.
 */

// Re-export key components for easier access
pub use boid::Boid;
pub use camera::Camera;
pub use debug::{DebugInfo, DebugSelection, NeighborReport};
pub use error::ConfigError;
pub use flock::Flock;
pub use params::{RuleToggles, SimulationConfig};
pub use physics::Neighborhood;
pub use app::Model;

// Define modules
pub mod boid;
pub mod camera;
pub mod cli;
pub mod debug;
pub mod error;
pub mod flock;
pub mod params;
pub mod physics;
pub mod app;
pub mod ui;
pub mod renderer;
pub mod input;

// Boid triangle size in plane units
pub const BOID_LENGTH: f32 = 30.0;
pub const BOID_WIDTH: f32 = BOID_LENGTH / 2.0;

// Clicks this close to a boid select it
pub const PICK_RADIUS: f32 = BOID_LENGTH;

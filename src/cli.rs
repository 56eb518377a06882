/*
 * Command Line Module
 *
 * Every SimulationConfig option can be overridden from the command line.
 * Anything left out falls back to the compiled-in defaults.
 */

use clap::Parser;

use crate::error::ConfigError;
use crate::params::{self, SimulationConfig};

#[derive(Parser, Debug, Clone)]
#[command(name = "torus-boids")]
#[command(about = "Boid flocking on a wrap-around plane")]
pub struct Cli {
    /// Number of boids in the flock
    #[arg(long, default_value_t = params::NUM_BOIDS)]
    pub boids: usize,

    /// Distance within which other boids are considered neighbors
    #[arg(long, default_value_t = params::VIEW_RADIUS)]
    pub view_radius: f32,

    /// Distance within which neighbors push each other apart
    #[arg(long, default_value_t = params::AVOIDANCE_RADIUS)]
    pub avoidance_radius: f32,

    /// Field-of-view cone in degrees, used when the FOV rule is switched on
    #[arg(long, default_value_t = params::FIELD_OF_VIEW)]
    pub field_of_view: f32,

    #[arg(long, default_value_t = params::COHESION_FACTOR)]
    pub cohesion: f32,

    #[arg(long, default_value_t = params::ALIGNMENT_FACTOR)]
    pub alignment: f32,

    #[arg(long, default_value_t = params::SEPARATION_FACTOR)]
    pub separation: f32,

    /// Speed limit in plane units per tick
    #[arg(long, default_value_t = params::MAX_SPEED)]
    pub max_speed: f32,

    /// Plane (and window) width
    #[arg(long, default_value_t = params::PLANE_WIDTH)]
    pub width: f32,

    /// Plane (and window) height
    #[arg(long, default_value_t = params::PLANE_HEIGHT)]
    pub height: f32,

    /// Seed for the initial flock; random when omitted
    #[arg(long)]
    pub seed: Option<u64>,

    /// Step boids on the rayon thread pool
    #[arg(long)]
    pub parallel: bool,
}

impl Cli {
    // Build and validate the run configuration
    pub fn to_config(&self) -> Result<SimulationConfig, ConfigError> {
        let config = SimulationConfig {
            num_boids: self.boids,
            view_radius: self.view_radius,
            avoidance_radius: self.avoidance_radius,
            field_of_view: self.field_of_view,
            cohesion_factor: self.cohesion,
            alignment_factor: self.alignment,
            separation_factor: self.separation,
            max_speed: self.max_speed,
            width: self.width,
            height: self.height,
            parallel: self.parallel,
        };
        config.validate()?;
        Ok(config)
    }
}

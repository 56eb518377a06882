/*
 * Boid Flocking Simulation
 *
 * This application simulates the flocking behavior of boids on a plane whose
 * edges wrap around. Every boid follows three rules, each of which can be
 * switched on and off while the simulation runs:
 * 1. Cohesion: Steer towards the average position of neighbors
 * 2. Alignment: Steer towards the average heading of neighbors
 * 3. Separation: Steer away from neighbors that are too close
 *
 * Log output is controlled with RUST_LOG, e.g. RUST_LOG=torus_boids=debug.
 */

use anyhow::Result;
use clap::Parser;
use tracing::info;

use torus_boids::app;
use torus_boids::cli::Cli;

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config = cli.to_config()?;

    info!(
        boids = config.num_boids,
        width = config.width,
        height = config.height,
        view_radius = config.view_radius,
        avoidance_radius = config.avoidance_radius,
        field_of_view = config.field_of_view,
        max_speed = config.max_speed,
        "starting boid simulation"
    );

    app::run(config, cli.seed);
    Ok(())
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

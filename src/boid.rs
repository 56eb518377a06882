/*
 * Boid Module
 *
 * This module defines the Boid struct: a position, a velocity and a stable
 * index into the flock. Positions live in plane coordinates, with the origin
 * in the top-left corner and y growing downwards.
 *
 * The flocking rules themselves live in the physics module so that a boid
 * stays plain data that can be copied into the tick snapshot.
 */

use nannou::prelude::*;
use rand::Rng;

use crate::params::SimulationConfig;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Boid {
    pub position: Point2,
    pub velocity: Vec2,
    pub index: usize,
}

impl Boid {
    pub fn new(index: usize, position: Point2, velocity: Vec2) -> Self {
        Self {
            position,
            velocity,
            index,
        }
    }

    // Spawn at a random whole-unit spot on the plane with a random velocity
    pub fn random<R: Rng + ?Sized>(index: usize, config: &SimulationConfig, rng: &mut R) -> Self {
        let x = rng.gen_range(0..(config.width as u32).max(1));
        let y = rng.gen_range(0..(config.height as u32).max(1));

        Self {
            position: pt2(x as f32, y as f32),
            velocity: random_velocity(config.max_speed, rng),
            index,
        }
    }

    pub fn randomize_velocity<R: Rng + ?Sized>(&mut self, max_speed: f32, rng: &mut R) {
        self.velocity = random_velocity(max_speed, rng);
    }

    /// Heading in radians, measured in plane coordinates.
    pub fn heading(&self) -> f32 {
        self.velocity.y.atan2(self.velocity.x)
    }
}

// Each component is a whole number in 1..=max_speed with a random sign
fn random_velocity<R: Rng + ?Sized>(max_speed: f32, rng: &mut R) -> Vec2 {
    let limit = (max_speed as u32).max(1);
    let mut component = || {
        let magnitude = rng.gen_range(1..=limit) as f32;
        if rng.gen_bool(0.5) {
            -magnitude
        } else {
            magnitude
        }
    };
    let vx = component();
    let vy = component();
    vec2(vx, vy)
}

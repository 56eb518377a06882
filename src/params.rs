/*
 * Simulation Parameters Module
 *
 * This module defines the two parameter sets the simulation reads each tick:
 * - SimulationConfig: fixed for the lifetime of the process
 * - RuleToggles: flipped at runtime by the input handler and the control panel
 *
 * The core only ever reads these; nothing in the tick writes back into them.
 */

use crate::error::ConfigError;

// Defaults for the fixed configuration
pub const PLANE_WIDTH: f32 = 800.0;
pub const PLANE_HEIGHT: f32 = 600.0;
pub const NUM_BOIDS: usize = 10;
pub const VIEW_RADIUS: f32 = 200.0;
pub const AVOIDANCE_RADIUS: f32 = 40.0;
pub const ALIGNMENT_FACTOR: f32 = 0.01;
pub const SEPARATION_FACTOR: f32 = 0.05;
pub const COHESION_FACTOR: f32 = 0.02;
pub const MAX_SPEED: f32 = 5.0; // in plane units per tick
pub const FIELD_OF_VIEW: f32 = 360.0; // in degrees

// Options fixed for the whole run
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    pub num_boids: usize,
    pub view_radius: f32,
    pub avoidance_radius: f32,
    pub field_of_view: f32,
    pub cohesion_factor: f32,
    pub alignment_factor: f32,
    pub separation_factor: f32,
    pub max_speed: f32,
    pub width: f32,
    pub height: f32,
    // Fill the next buffer with rayon instead of sequentially
    pub parallel: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            num_boids: NUM_BOIDS,
            view_radius: VIEW_RADIUS,
            avoidance_radius: AVOIDANCE_RADIUS,
            field_of_view: FIELD_OF_VIEW,
            cohesion_factor: COHESION_FACTOR,
            alignment_factor: ALIGNMENT_FACTOR,
            separation_factor: SEPARATION_FACTOR,
            max_speed: MAX_SPEED,
            width: PLANE_WIDTH,
            height: PLANE_HEIGHT,
            parallel: false,
        }
    }
}

impl SimulationConfig {
    /// Checks the preconditions the tick relies on. Called once at startup;
    /// the core assumes a validated configuration afterwards.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.num_boids == 0 {
            return Err(ConfigError::EmptyPopulation);
        }
        if !(self.width > 0.0 && self.height > 0.0) {
            return Err(ConfigError::InvalidPlane {
                width: self.width,
                height: self.height,
            });
        }
        if !(self.view_radius >= 0.0) {
            return Err(ConfigError::NegativeRadius {
                what: "view radius",
                value: self.view_radius,
            });
        }
        if !(self.avoidance_radius >= 0.0) {
            return Err(ConfigError::NegativeRadius {
                what: "avoidance radius",
                value: self.avoidance_radius,
            });
        }
        if !(self.max_speed > 0.0) {
            return Err(ConfigError::InvalidMaxSpeed(self.max_speed));
        }
        if !(self.field_of_view > 0.0 && self.field_of_view <= 360.0) {
            return Err(ConfigError::InvalidFieldOfView(self.field_of_view));
        }
        Ok(())
    }

    // Half of the field-of-view cone, in degrees
    pub fn half_field_of_view(&self) -> f32 {
        self.field_of_view / 2.0
    }
}

// Runtime switches, owned by the application and passed into every tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleToggles {
    pub cohesion: bool,
    pub alignment: bool,
    pub separation: bool,
    pub fov: bool,
    pub paused: bool,
}

impl Default for RuleToggles {
    fn default() -> Self {
        Self {
            cohesion: true,
            alignment: true,
            separation: true,
            fov: false,
            paused: false,
        }
    }
}

impl RuleToggles {
    // Every rule and the field of view switched off
    pub fn all_disabled() -> Self {
        Self {
            cohesion: false,
            alignment: false,
            separation: false,
            fov: false,
            paused: false,
        }
    }

    pub fn any_rule_enabled(&self) -> bool {
        self.cohesion || self.alignment || self.separation
    }
}

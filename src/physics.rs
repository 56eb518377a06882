/*
 * Physics Module
 *
 * This module holds the per-boid update rule. It is split into two steps:
 * 1. aggregate_neighbors: scan every other boid in the snapshot and sum up
 *    what the flocking rules need (neighbor positions, separation push)
 * 2. integrate: turn those sums into a new velocity, clamp the speed, move
 *    the boid and wrap it around the plane
 *
 * Both steps are pure functions of the pre-tick snapshot, so any boid can be
 * stepped independently of the others within the same tick.
 */

use nannou::prelude::*;

use crate::boid::Boid;
use crate::debug::NeighborReport;
use crate::params::{RuleToggles, SimulationConfig};

// Sums gathered over the visible neighbors of one boid
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighborhood {
    pub count: usize,
    pub position_sum: Vec2,
    // Alignment is steered by neighbor positions as well, not their velocities
    pub alignment_sum: Vec2,
    pub separation: Vec2,
}

impl Default for Neighborhood {
    fn default() -> Self {
        Self {
            count: 0,
            position_sum: Vec2::ZERO,
            alignment_sum: Vec2::ZERO,
            separation: Vec2::ZERO,
        }
    }
}

/// Angle in degrees needed to rotate `from` onto `to`, in `(-180, 180]`.
pub fn signed_angle_deg(from: Vec2, to: Vec2) -> f32 {
    let cross = from.x * to.y - from.y * to.x;
    let dot = from.x * to.x + from.y * to.y;
    cross.atan2(dot).to_degrees()
}

// Is `other` inside the cone centered on the subject's heading?
pub fn in_field_of_view(
    subject: &Boid,
    other: &Boid,
    config: &SimulationConfig,
    toggles: &RuleToggles,
) -> bool {
    // A full circle has no blind spot
    if !toggles.fov || config.field_of_view >= 360.0 {
        return true;
    }

    let offset = other.position - subject.position;
    signed_angle_deg(subject.velocity, offset).abs() <= config.half_field_of_view()
}

/// Scans the whole snapshot for boids visible to `subject`.
///
/// When `report` is given, every visible neighbor is also recorded there. The
/// report is output only and has no influence on the returned sums.
pub fn aggregate_neighbors(
    subject: &Boid,
    snapshot: &[Boid],
    config: &SimulationConfig,
    toggles: &RuleToggles,
    mut report: Option<&mut NeighborReport>,
) -> Neighborhood {
    let mut hood = Neighborhood::default();

    for other in snapshot {
        if other.index == subject.index {
            continue;
        }

        let d = subject.position.distance(other.position);
        if d > config.view_radius || !in_field_of_view(subject, other, config, toggles) {
            continue;
        }

        hood.count += 1;
        hood.position_sum += other.position;
        hood.alignment_sum += other.position;

        if let Some(report) = report.as_deref_mut() {
            report.record(other.index, other.position);
        }

        if d <= config.avoidance_radius {
            hood.separation += -(other.position - subject.position);
        }
    }

    hood
}

/// Rescales `velocity` down to `max_speed` when it is faster than that.
pub fn clamp_speed(velocity: Vec2, max_speed: f32) -> Vec2 {
    let speed = velocity.length();
    if speed > max_speed {
        velocity * (max_speed / speed)
    } else {
        velocity
    }
}

/// Wraps a position that left the plane back onto the opposite edge.
///
/// Leaving through the low edge lands one unit inside the high edge, leaving
/// through the high edge lands exactly on zero.
pub fn wrap_position(mut position: Point2, width: f32, height: f32) -> Point2 {
    if position.y < 0.0 {
        position.y = height - 1.0;
    }
    if position.y >= height {
        position.y = 0.0;
    }

    if position.x < 0.0 {
        position.x = width - 1.0;
    }
    if position.x >= width {
        position.x = 0.0;
    }

    position
}

// Apply the enabled rules to the aggregated sums and move the boid
pub fn integrate(
    subject: &Boid,
    hood: &Neighborhood,
    config: &SimulationConfig,
    toggles: &RuleToggles,
) -> Boid {
    let mut velocity = subject.velocity;

    // Without neighbors there is nothing to steer towards
    if hood.count > 0 {
        let n = hood.count as f32;

        if toggles.cohesion {
            let center = hood.position_sum / n;
            velocity += (center - subject.position) * config.cohesion_factor;
        }

        if toggles.alignment {
            let target = hood.alignment_sum / n;
            velocity += (target - subject.velocity) * config.alignment_factor;
        }
    }

    if toggles.separation {
        velocity += hood.separation * config.separation_factor;
    }

    let velocity = clamp_speed(velocity, config.max_speed);
    let position = wrap_position(subject.position + velocity, config.width, config.height);

    Boid {
        position,
        velocity,
        index: subject.index,
    }
}

// One boid's full update against the pre-tick snapshot
pub fn step_agent(
    subject: &Boid,
    snapshot: &[Boid],
    config: &SimulationConfig,
    toggles: &RuleToggles,
    report: Option<&mut NeighborReport>,
) -> Boid {
    let hood = aggregate_neighbors(subject, snapshot, config, toggles, report);
    integrate(subject, &hood, config, toggles)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn boid(index: usize, x: f32, y: f32, vx: f32, vy: f32) -> Boid {
        Boid::new(index, pt2(x, y), vec2(vx, vy))
    }

    fn fov_config(field_of_view: f32) -> SimulationConfig {
        SimulationConfig {
            field_of_view,
            ..SimulationConfig::default()
        }
    }

    #[test]
    fn signed_angle_has_direction() {
        let x_axis = vec2(1.0, 0.0);
        assert!((signed_angle_deg(x_axis, vec2(0.0, 1.0)) - 90.0).abs() < 1e-4);
        assert!((signed_angle_deg(x_axis, vec2(0.0, -1.0)) + 90.0).abs() < 1e-4);
        assert!((signed_angle_deg(x_axis, vec2(-1.0, 0.0)).abs() - 180.0).abs() < 1e-4);
        assert_eq!(signed_angle_deg(x_axis, vec2(3.0, 0.0)), 0.0);
    }

    #[test]
    fn boid_directly_behind_is_outside_a_narrow_cone() {
        let subject = boid(0, 100.0, 100.0, 1.0, 0.0);
        let behind = boid(1, 90.0, 100.0, 0.0, 0.0);
        let config = fov_config(270.0);

        let mut toggles = RuleToggles::default();
        toggles.fov = true;
        assert!(!in_field_of_view(&subject, &behind, &config, &toggles));

        toggles.fov = false;
        assert!(in_field_of_view(&subject, &behind, &config, &toggles));
    }

    #[test]
    fn side_boid_is_inside_a_wide_cone() {
        let subject = boid(0, 0.0, 0.0, 1.0, 0.0);
        let side = boid(1, 0.0, 10.0, 0.0, 0.0);
        let config = fov_config(200.0);
        let toggles = RuleToggles {
            fov: true,
            ..RuleToggles::default()
        };
        assert!(in_field_of_view(&subject, &side, &config, &toggles));
    }

    #[test]
    fn full_circle_sees_everything_even_with_fov_enabled() {
        let subject = boid(0, 0.0, 0.0, 1.0, 0.0);
        let behind = boid(1, -10.0, 0.0, 0.0, 0.0);
        let config = fov_config(360.0);
        let toggles = RuleToggles {
            fov: true,
            ..RuleToggles::default()
        };
        assert!(in_field_of_view(&subject, &behind, &config, &toggles));
    }

    #[test]
    fn aggregate_skips_self_and_far_boids() {
        let config = SimulationConfig::default();
        let toggles = RuleToggles::default();
        let snapshot = vec![
            boid(0, 100.0, 100.0, 1.0, 0.0),
            boid(1, 130.0, 100.0, 0.0, 0.0),  // visible and too close
            boid(2, 200.0, 100.0, 0.0, 0.0),  // visible only
            boid(3, 500.0, 500.0, 0.0, 0.0),  // out of view
        ];

        let hood = aggregate_neighbors(&snapshot[0], &snapshot, &config, &toggles, None);

        assert_eq!(hood.count, 2);
        assert_eq!(hood.position_sum, vec2(330.0, 200.0));
        assert_eq!(hood.alignment_sum, hood.position_sum);
        assert_eq!(hood.separation, vec2(-30.0, 0.0));
    }

    #[test]
    fn radius_boundaries_are_inclusive() {
        let config = SimulationConfig::default();
        let toggles = RuleToggles::default();
        let snapshot = vec![
            boid(0, 0.0, 0.0, 1.0, 0.0),
            boid(1, config.avoidance_radius, 0.0, 0.0, 0.0),
            boid(2, 0.0, config.view_radius, 0.0, 0.0),
        ];

        let hood = aggregate_neighbors(&snapshot[0], &snapshot, &config, &toggles, None);
        assert_eq!(hood.count, 2);
        assert_eq!(hood.separation, vec2(-config.avoidance_radius, 0.0));
    }

    #[test]
    fn report_records_visible_neighbors_only() {
        let config = SimulationConfig::default();
        let toggles = RuleToggles::default();
        let snapshot = vec![
            boid(0, 100.0, 100.0, 1.0, 0.0),
            boid(1, 120.0, 100.0, 0.0, 0.0),
            boid(2, 700.0, 500.0, 0.0, 0.0),
            boid(3, 100.0, 140.0, 0.0, 0.0),
        ];
        let mut report = NeighborReport::new(0, snapshot.len());

        let with_report =
            aggregate_neighbors(&snapshot[0], &snapshot, &config, &toggles, Some(&mut report));
        let without_report = aggregate_neighbors(&snapshot[0], &snapshot, &config, &toggles, None);

        assert_eq!(with_report, without_report);
        assert_eq!(report.neighbor_flags, vec![false, true, false, true]);
        assert_eq!(report.neighbor_count, 2);
        assert_eq!(report.neighbor_center(), Some(pt2(110.0, 120.0)));
    }

    #[test]
    fn clamp_preserves_direction() {
        let clamped = clamp_speed(vec2(30.0, 40.0), 5.0);
        assert!((clamped.length() - 5.0).abs() < 1e-5);
        assert!((clamped.x - 3.0).abs() < 1e-5);
        assert!((clamped.y - 4.0).abs() < 1e-5);

        assert_eq!(clamp_speed(vec2(1.0, 1.0), 5.0), vec2(1.0, 1.0));
        assert_eq!(clamp_speed(Vec2::ZERO, 5.0), Vec2::ZERO);
    }

    #[test]
    fn wrap_uses_edge_convention() {
        let (w, h) = (800.0, 600.0);

        assert_eq!(wrap_position(pt2(10.0, -0.0001), w, h), pt2(10.0, h - 1.0));
        assert_eq!(wrap_position(pt2(10.0, h + 0.0001), w, h), pt2(10.0, 0.0));
        assert_eq!(wrap_position(pt2(-0.0001, 10.0), w, h), pt2(w - 1.0, 10.0));
        assert_eq!(wrap_position(pt2(w + 0.0001, 10.0), w, h), pt2(0.0, 10.0));
        assert_eq!(wrap_position(pt2(-3.0, -3.0), w, h), pt2(w - 1.0, h - 1.0));
        assert_eq!(wrap_position(pt2(w, h), w, h), pt2(0.0, 0.0));
        assert_eq!(wrap_position(pt2(0.0, 0.0), w, h), pt2(0.0, 0.0));
        assert_eq!(wrap_position(pt2(400.5, 300.5), w, h), pt2(400.5, 300.5));
    }

    #[test]
    fn lone_boid_keeps_its_velocity_with_every_rule_on() {
        let config = SimulationConfig::default();
        let toggles = RuleToggles::default();
        let subject = boid(0, 100.0, 100.0, 3.0, -2.0);

        let hood = aggregate_neighbors(&subject, &[subject], &config, &toggles, None);
        assert_eq!(hood, Neighborhood::default());

        let next = integrate(&subject, &hood, &config, &toggles);
        assert_eq!(next.velocity, vec2(3.0, -2.0));
        assert_eq!(next.position, pt2(103.0, 98.0));
        assert_eq!(next.index, 0);
    }

    #[test]
    fn cohesion_pulls_towards_center() {
        let config = SimulationConfig::default();
        let toggles = RuleToggles {
            cohesion: true,
            ..RuleToggles::all_disabled()
        };
        let subject = boid(0, 100.0, 100.0, 0.0, 0.0);
        let hood = Neighborhood {
            count: 2,
            position_sum: vec2(300.0, 200.0),
            alignment_sum: vec2(300.0, 200.0),
            separation: Vec2::ZERO,
        };

        let next = integrate(&subject, &hood, &config, &toggles);
        // center (150, 100) minus position, times 0.02
        assert!((next.velocity.x - 1.0).abs() < 1e-6);
        assert_eq!(next.velocity.y, 0.0);
    }

    #[test]
    fn alignment_steers_by_neighbor_positions() {
        let config = SimulationConfig::default();
        let toggles = RuleToggles {
            alignment: true,
            ..RuleToggles::all_disabled()
        };
        let subject = boid(0, 100.0, 100.0, 1.0, 0.0);
        let hood = Neighborhood {
            count: 1,
            position_sum: vec2(101.0, 200.0),
            alignment_sum: vec2(101.0, 200.0),
            separation: Vec2::ZERO,
        };

        let next = integrate(&subject, &hood, &config, &toggles);
        // (101 - 1, 200 - 0) * 0.01 added to (1, 0)
        assert!((next.velocity.x - 2.0).abs() < 1e-5);
        assert!((next.velocity.y - 2.0).abs() < 1e-5);
    }

    #[test]
    fn separation_scales_accumulated_push() {
        let config = SimulationConfig::default();
        let toggles = RuleToggles {
            separation: true,
            ..RuleToggles::all_disabled()
        };
        let subject = boid(0, 100.0, 100.0, 0.0, 0.0);
        let hood = Neighborhood {
            count: 1,
            separation: vec2(-20.0, 0.0),
            ..Neighborhood::default()
        };

        let next = integrate(&subject, &hood, &config, &toggles);
        assert!((next.velocity.x + 1.0).abs() < 1e-6);
        assert_eq!(next.velocity.y, 0.0);
        assert!((next.position.x - 99.0).abs() < 1e-5);
    }

    #[test]
    fn disabled_rules_leave_velocity_untouched() {
        let config = SimulationConfig::default();
        let toggles = RuleToggles::all_disabled();
        let subject = boid(0, 799.0, 10.0, 4.0, 0.0);
        let hood = Neighborhood {
            count: 3,
            position_sum: vec2(900.0, 900.0),
            alignment_sum: vec2(900.0, 900.0),
            separation: vec2(-50.0, 10.0),
        };

        let next = integrate(&subject, &hood, &config, &toggles);
        assert_eq!(next.velocity, vec2(4.0, 0.0));
        assert_eq!(next.position, pt2(0.0, 10.0));
    }

    #[test]
    fn integrated_speed_never_exceeds_max() {
        let config = SimulationConfig::default();
        let toggles = RuleToggles::default();
        let subject = boid(0, 100.0, 100.0, 4.0, 4.0);
        let hood = Neighborhood {
            count: 1,
            position_sum: vec2(300.0, 300.0),
            alignment_sum: vec2(300.0, 300.0),
            separation: Vec2::ZERO,
        };

        let next = integrate(&subject, &hood, &config, &toggles);
        assert!(next.velocity.length() <= config.max_speed + 1e-5);
    }
}

/*
 * Flock Module
 *
 * This module owns the population of boids and advances it one tick at a time.
 *
 * The population is double-buffered: every boid of the new generation is
 * computed from the `current` buffer into the `next` buffer and the two are
 * swapped at the end of the tick, so no boid ever sees another boid's
 * post-tick state. The next buffer can be filled with rayon when the
 * configuration asks for it; both paths give identical results.
 */

use nannou::prelude::Point2;
use rand::Rng;
use rayon::prelude::*;
use tracing::debug;

use crate::boid::Boid;
use crate::debug::NeighborReport;
use crate::params::{RuleToggles, SimulationConfig};
use crate::physics;

pub struct Flock {
    config: SimulationConfig,
    current: Vec<Boid>,
    next: Vec<Boid>,
    ticks: u64,
}

impl Flock {
    /// Builds a flock from explicit boids. Indices are reassigned to match
    /// each boid's slot so they always run `0..N`.
    pub fn from_boids(config: SimulationConfig, boids: Vec<Boid>) -> Self {
        let current: Vec<Boid> = boids
            .into_iter()
            .enumerate()
            .map(|(index, boid)| Boid { index, ..boid })
            .collect();
        let next = current.clone();

        Self {
            config,
            current,
            next,
            ticks: 0,
        }
    }

    // Spawn `config.num_boids` boids at random spots
    pub fn random<R: Rng + ?Sized>(config: SimulationConfig, rng: &mut R) -> Self {
        let boids = (0..config.num_boids)
            .map(|index| Boid::random(index, &config, rng))
            .collect();
        Self::from_boids(config, boids)
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn boids(&self) -> &[Boid] {
        &self.current
    }

    pub fn get(&self, index: usize) -> Option<&Boid> {
        self.current.get(index)
    }

    pub fn len(&self) -> usize {
        self.current.len()
    }

    pub fn is_empty(&self) -> bool {
        self.current.is_empty()
    }

    pub fn tick_count(&self) -> u64 {
        self.ticks
    }

    /// Advances every boid by one tick.
    ///
    /// When `selected` names a boid, the neighbors it saw during this tick are
    /// returned as a report. The caller decides whether to tick at all; this
    /// method does not look at `toggles.paused`.
    pub fn tick(&mut self, toggles: &RuleToggles, selected: Option<usize>) -> Option<NeighborReport> {
        let config = &self.config;
        let snapshot = &self.current;
        let population = snapshot.len();

        let step = |(i, slot): (usize, &mut Boid)| -> Option<NeighborReport> {
            if selected == Some(i) {
                let mut report = NeighborReport::new(i, population);
                *slot = physics::step_agent(&snapshot[i], snapshot, config, toggles, Some(&mut report));
                Some(report)
            } else {
                *slot = physics::step_agent(&snapshot[i], snapshot, config, toggles, None);
                None
            }
        };

        let report = if config.parallel {
            self.next
                .par_iter_mut()
                .enumerate()
                .filter_map(step)
                .collect::<Vec<_>>()
                .pop()
        } else {
            self.next.iter_mut().enumerate().filter_map(step).last()
        };

        std::mem::swap(&mut self.current, &mut self.next);
        self.ticks += 1;

        if let Some(report) = &report {
            debug!(
                tick = self.ticks,
                selected = report.selected,
                neighbors = report.neighbor_count,
                "neighbor report"
            );
        }

        report
    }

    // Give every boid a fresh random velocity, positions stay put
    pub fn randomize_velocities<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let max_speed = self.config.max_speed;
        for boid in &mut self.current {
            boid.randomize_velocity(max_speed, rng);
        }
    }

    /// Index of the boid closest to `point` within `radius`, if any.
    pub fn nearest_within(&self, point: Point2, radius: f32) -> Option<usize> {
        self.current
            .iter()
            .map(|boid| (boid.index, boid.position.distance(point)))
            .filter(|&(_, d)| d <= radius)
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(index, _)| index)
    }
}

/*
 * Debug Information Module
 *
 * This module defines the debug-side state of the simulation:
 * - NeighborReport: what the aggregator saw for the selected boid during a tick
 * - DebugSelection: whether the debug view is on, which boid is selected and
 *   the last report produced for it
 * - DebugInfo: frame metrics shown in the control panel
 *
 * None of this is ever read back by the simulation core.
 */

use nannou::prelude::*;
use std::time::Duration;

// Side-channel output of the aggregator for one selected boid
#[derive(Debug, Clone, PartialEq)]
pub struct NeighborReport {
    pub selected: usize,
    pub neighbor_flags: Vec<bool>,
    pub neighbor_count: usize,
    pub neighbor_center_sum: Vec2,
}

impl NeighborReport {
    pub fn new(selected: usize, population: usize) -> Self {
        Self {
            selected,
            neighbor_flags: vec![false; population],
            neighbor_count: 0,
            neighbor_center_sum: Vec2::ZERO,
        }
    }

    // Called by the aggregator for every visible neighbor of the selected boid
    pub fn record(&mut self, index: usize, position: Point2) {
        if let Some(flag) = self.neighbor_flags.get_mut(index) {
            *flag = true;
        }
        self.neighbor_count += 1;
        self.neighbor_center_sum += position;
    }

    pub fn is_neighbor(&self, index: usize) -> bool {
        self.neighbor_flags.get(index).copied().unwrap_or(false)
    }

    /// Mean position of the recorded neighbors, `None` when there were none.
    pub fn neighbor_center(&self) -> Option<Point2> {
        if self.neighbor_count == 0 {
            None
        } else {
            Some(self.neighbor_center_sum / self.neighbor_count as f32)
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct DebugSelection {
    pub enabled: bool,
    pub selected: Option<usize>,
    pub report: Option<NeighborReport>,
}

impl DebugSelection {
    // Selected index the tick should report on, if the debug view wants one
    pub fn active_index(&self) -> Option<usize> {
        if self.enabled {
            self.selected
        } else {
            None
        }
    }

    pub fn select(&mut self, index: Option<usize>) {
        if self.selected != index {
            self.selected = index;
            self.report = None;
        }
    }

    // Step the selection forward, wrapping at the end of the flock
    pub fn select_next(&mut self, population: usize) {
        if population == 0 {
            self.select(None);
            return;
        }
        let next = match self.selected {
            Some(i) => (i + 1) % population,
            None => 0,
        };
        self.select(Some(next));
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.enabled && self.selected == Some(index)
    }

    pub fn is_neighbor(&self, index: usize) -> bool {
        self.enabled
            && self
                .report
                .as_ref()
                .map_or(false, |report| report.is_neighbor(index))
    }
}

// Debug information to display
pub struct DebugInfo {
    pub fps: f32,
    pub frame_time: Duration,
    pub ticks: u64,
}

impl Default for DebugInfo {
    fn default() -> Self {
        Self {
            fps: 0.0,
            frame_time: Duration::ZERO,
            ticks: 0,
        }
    }
}

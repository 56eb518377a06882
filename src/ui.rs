/*
 * UI Module
 *
 * This module contains the control panel built with nannou_egui and the
 * status overlay drawn in the bottom-left corner of the window. The panel
 * writes straight into the rule toggles and the debug selection; one-off
 * requests such as randomizing velocities are handed back to the caller.
 */

use nannou_egui::{egui, Egui};

use crate::debug::{DebugInfo, DebugSelection};
use crate::params::RuleToggles;

// Requests from the panel that the app carries out after the frame
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct UiActions {
    pub randomize_velocities: bool,
}

pub fn update_ui(
    egui: &mut Egui,
    toggles: &mut RuleToggles,
    selection: &mut DebugSelection,
    debug_info: &DebugInfo,
    population: usize,
) -> UiActions {
    let mut actions = UiActions::default();

    let ctx = egui.begin_frame();

    egui::Window::new("Simulation Controls")
        .default_pos([10.0, 10.0])
        .show(&ctx, |ui| {
            ui.collapsing("Flocking Rules", |ui| {
                ui.checkbox(&mut toggles.cohesion, "Cohesion (C)");
                ui.checkbox(&mut toggles.alignment, "Alignment (A)");
                ui.checkbox(&mut toggles.separation, "Separation (S)");
                ui.checkbox(&mut toggles.fov, "Field of View (F)");
            });

            ui.collapsing("Debug View", |ui| {
                ui.checkbox(&mut selection.enabled, "Show Debug View (D)");

                if let Some(mut index) = selection.selected {
                    let max_index = population.saturating_sub(1);
                    if ui
                        .add(egui::Slider::new(&mut index, 0..=max_index).text("Selected Boid"))
                        .changed()
                    {
                        selection.select(Some(index));
                    }
                } else {
                    ui.label("No boid selected, click one or press Tab");
                }

                ui.horizontal(|ui| {
                    if ui.button("Next Boid").clicked() {
                        selection.select_next(population);
                    }
                    if ui.button("Clear Selection").clicked() {
                        selection.select(None);
                    }
                });

                if let Some(report) = &selection.report {
                    ui.label(format!("Neighbors: {}", report.neighbor_count));
                }
            });

            if ui.button("Randomize Velocities (R)").clicked() {
                actions.randomize_velocities = true;
            }

            ui.separator();

            ui.label(format!("FPS: {:.1}", debug_info.fps));
            ui.label(format!("Frame time: {:.2} ms", debug_info.frame_time.as_secs_f64() * 1000.0));
            ui.label(format!("Total Boids: {}", population));
            ui.label(format!("Ticks: {}", debug_info.ticks));

            ui.checkbox(&mut toggles.paused, "Pause Simulation (Space)");
        });

    actions
}

// One line per toggle plus the tick counter
pub fn status_lines(toggles: &RuleToggles, selection: &DebugSelection, debug_info: &DebugInfo) -> Vec<String> {
    let on_off = |flag: bool| if flag { "on" } else { "off" };

    let mut lines = vec![
        format!("cohesion: {}", on_off(toggles.cohesion)),
        format!("alignment: {}", on_off(toggles.alignment)),
        format!("separation: {}", on_off(toggles.separation)),
        format!("fov: {}", on_off(toggles.fov)),
        format!("tick: {}{}", debug_info.ticks, if toggles.paused { " (paused)" } else { "" }),
    ];

    if let Some(index) = selection.active_index() {
        let neighbors = selection.report.as_ref().map_or(0, |r| r.neighbor_count);
        lines.push(format!("boid {:03}: {} neighbors", index, neighbors));
    }

    lines
}

// Draw the status overlay on the screen
pub fn draw_status(
    draw: &nannou::Draw,
    window_rect: nannou::geom::Rect,
    toggles: &RuleToggles,
    selection: &DebugSelection,
    debug_info: &DebugInfo,
) {
    let margin = 20.0;
    let line_height = 14.0;
    let text_x = window_rect.left() + margin + 60.0;
    let bottom = window_rect.bottom() + margin;

    let lines = status_lines(toggles, selection, debug_info);
    for (i, text) in lines.iter().rev().enumerate() {
        let y = bottom + i as f32 * line_height;
        draw.text(text)
            .x_y(text_x, y)
            .color(nannou::color::WHITE)
            .font_size(10);
    }
}

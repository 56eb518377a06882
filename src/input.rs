/*
 * Input Module
 *
 * This module handles user input events for the boid simulation.
 *
 * Keyboard:
 * - C / A / S: toggle cohesion, alignment, separation
 * - F: toggle the field-of-view cone
 * - Space or P: pause and resume
 * - D: toggle the debug view
 * - Tab: select the next boid, X: clear the selection
 * - R: randomize every boid's velocity
 *
 * Mouse: a left click selects the boid under the cursor.
 */

use nannou::prelude::*;
use nannou::winit::event::WindowEvent;
use tracing::info;

use crate::app::{self, Model};
use crate::PICK_RADIUS;

pub fn key_pressed(_app: &App, model: &mut Model, key: Key) {
    // Keys typed into the control panel are not shortcuts
    if model.egui.ctx().wants_keyboard_input() {
        return;
    }

    let toggles = &mut model.toggles;
    match key {
        Key::C => toggles.cohesion = !toggles.cohesion,
        Key::A => toggles.alignment = !toggles.alignment,
        Key::S => toggles.separation = !toggles.separation,
        Key::F => toggles.fov = !toggles.fov,
        Key::Space | Key::P => toggles.paused = !toggles.paused,
        Key::D => {
            model.selection.enabled = !model.selection.enabled;
            info!(enabled = model.selection.enabled, "debug view toggled");
        }
        Key::Tab => {
            model.selection.select_next(model.flock.len());
            info!(selected = ?model.selection.selected, "selection changed");
        }
        Key::X => {
            model.selection.select(None);
            info!("selection cleared");
        }
        Key::R => app::randomize_velocities(model),
        _ => {}
    }
}

pub fn mouse_pressed(app: &App, model: &mut Model, button: MouseButton) {
    if button != MouseButton::Left || model.egui.ctx().is_pointer_over_area() {
        return;
    }

    let window_rect = app.window_rect();
    let click = model.camera.screen_to_plane(app.mouse.position(), window_rect);

    if let Some(index) = model.flock.nearest_within(click, PICK_RADIUS) {
        model.selection.select(Some(index));
        // Picking a boid implies wanting to see its neighborhood
        model.selection.enabled = true;
        info!(selected = index, "boid picked");
    }
}

// Pass events to egui
pub fn raw_window_event(_app: &App, model: &mut Model, event: &WindowEvent) {
    model.egui.handle_raw_event(event);
}

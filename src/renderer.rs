/*
 * Renderer Module
 *
 * This module draws the flock. Each boid is a triangle pointing along its
 * velocity. With the debug view on it also shows:
 * - the selected boid in red, with its view and avoidance radii
 * - that boid's neighbors from the last tick in yellow, and their center
 * - a center dot and a three-digit index label next to every boid
 */

use nannou::prelude::*;
use tracing::warn;

use crate::app::Model;
use crate::boid::Boid;
use crate::camera::Camera;
use crate::ui;
use crate::{BOID_LENGTH, BOID_WIDTH};

// Debug view palette
const COLOR_SELECTED: Rgb<u8> = RED;
const COLOR_NEIGHBOR: Rgb<u8> = YELLOW;
const COLOR_NORMAL: Rgb<u8> = WHITE;

// Render the model
pub fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    draw.background().color(BLACK);

    let window_rect = app.window_rect();
    let camera = &model.camera;
    let config = model.flock.config();
    let selection = &model.selection;

    // Plane outline, visible once the window is larger than the plane
    let plane = camera.plane_rect(window_rect);
    draw.rect()
        .xy(plane.xy())
        .wh(plane.wh())
        .no_fill()
        .stroke_weight(1.0)
        .stroke(rgba(0.3, 0.3, 0.3, 1.0));

    for boid in model.flock.boids() {
        let color = if selection.is_selected(boid.index) {
            COLOR_SELECTED
        } else if selection.is_neighbor(boid.index) {
            COLOR_NEIGHBOR
        } else {
            COLOR_NORMAL
        };
        draw_boid(&draw, camera, window_rect, boid, color);
    }

    if selection.enabled {
        if let Some(boid) = selection.selected.and_then(|i| model.flock.get(i)) {
            let center = camera.plane_to_screen(boid.position, window_rect);
            for radius in [config.view_radius, config.avoidance_radius] {
                draw.ellipse()
                    .xy(center)
                    .radius(radius)
                    .no_fill()
                    .stroke(WHITE)
                    .stroke_weight(1.0);
            }
        }

        if let Some(neighbor_center) = selection
            .report
            .as_ref()
            .and_then(|report| report.neighbor_center())
        {
            let p = camera.plane_to_screen(neighbor_center, window_rect);
            draw.ellipse().xy(p).radius(3.0).color(GREEN);
        }

        for boid in model.flock.boids() {
            draw_debug_marks(&draw, camera, window_rect, boid);
        }
    }

    ui::draw_status(&draw, window_rect, &model.toggles, selection, &model.debug_info);

    if let Err(err) = draw.to_frame(app, &frame) {
        warn!(error = ?err, "failed to draw frame");
    }
    if let Err(err) = model.egui.draw_to_frame(&frame) {
        warn!(error = ?err, "failed to draw control panel");
    }
}

// Draw the boid
fn draw_boid(draw: &Draw, camera: &Camera, window_rect: Rect, boid: &Boid, color: Rgb<u8>) {
    let screen_pos = camera.plane_to_screen(boid.position, window_rect);
    let heading = camera.vector_to_screen(boid.velocity);
    let angle = heading.y.atan2(heading.x);

    let points = [
        pt2(BOID_LENGTH / 2.0, 0.0),
        pt2(-BOID_LENGTH / 2.0, BOID_WIDTH / 2.0),
        pt2(-BOID_LENGTH / 2.0, -BOID_WIDTH / 2.0),
    ];

    draw.polygon()
        .color(color)
        .points(points)
        .xy(screen_pos)
        .rotate(angle);
}

// Center dot and index label
fn draw_debug_marks(draw: &Draw, camera: &Camera, window_rect: Rect, boid: &Boid) {
    let screen_pos = camera.plane_to_screen(boid.position, window_rect);
    draw.rect().xy(screen_pos).w_h(2.0, 2.0).color(BLACK);

    let label_pos = camera.plane_to_screen(
        boid.position + vec2(BOID_WIDTH, BOID_WIDTH),
        window_rect,
    );
    draw.text(&format!("{:03}", boid.index))
        .xy(label_pos)
        .color(RED)
        .font_size(10);
}

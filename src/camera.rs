/*
 * Camera Module
 *
 * This module maps between plane coordinates, where the simulation lives
 * (origin in the top-left corner, y pointing down), and nannou's screen
 * coordinates (origin in the middle of the window, y pointing up).
 * The plane is always centered in the window.
 */

use nannou::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub plane_width: f32,
    pub plane_height: f32,
}

impl Camera {
    pub fn new(plane_width: f32, plane_height: f32) -> Self {
        Self {
            plane_width,
            plane_height,
        }
    }

    // Convert a point from plane space to screen space
    pub fn plane_to_screen(&self, point: Point2, window_rect: Rect) -> Point2 {
        let centered = pt2(
            point.x - self.plane_width / 2.0,
            self.plane_height / 2.0 - point.y,
        );
        centered + window_rect.xy()
    }

    // Convert a point from screen space to plane space
    pub fn screen_to_plane(&self, point: Point2, window_rect: Rect) -> Point2 {
        let centered = point - window_rect.xy();
        pt2(
            centered.x + self.plane_width / 2.0,
            self.plane_height / 2.0 - centered.y,
        )
    }

    // Directions flip their y component, lengths are unchanged
    pub fn vector_to_screen(&self, v: Vec2) -> Vec2 {
        vec2(v.x, -v.y)
    }

    // Screen rectangle covered by the plane
    pub fn plane_rect(&self, window_rect: Rect) -> Rect {
        Rect::from_xy_wh(window_rect.xy(), vec2(self.plane_width, self.plane_height))
    }
}

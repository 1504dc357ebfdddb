pub mod pointer;
pub mod resize;
pub mod touch;

use crate::core::to_local;
use glam::Vec2;
use web_sys as web;

/// Screen coordinates to canvas-local CSS pixels.
#[inline]
pub fn canvas_local(canvas: &web::HtmlCanvasElement, client_x: i32, client_y: i32) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    to_local(
        Vec2::new(client_x as f32, client_y as f32),
        Vec2::new(rect.left() as f32, rect.top() as f32),
    )
}

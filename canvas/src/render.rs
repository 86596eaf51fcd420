//! Rendering: draws the map scene to a 2D context.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! It receives a read-only view of the engine and produces pixels; it does not
//! mutate any map state.
//!
//! Draw order, bottom first: background fill, grid, roads, parks, the user's
//! location dot at the layout center, then one marker per visible entity in
//! list order. The selected marker is drawn larger with a dashed ring.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use std::f64::consts::TAU;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::camera::Point;
use crate::consts::{
    GRID_LINES, GRID_SPACING, MAP_EXTENT, MARKER_RADIUS, SELECTED_MARKER_RADIUS, SELECTION_RING_GAP, USER_MARKER_RADIUS,
};
use crate::engine::EngineCore;
use crate::entity::Sport;

const BACKGROUND: &str = "#f9fafb";
const GRID_STROKE: &str = "#e5e7eb";
const ROAD_STROKE: &str = "#d1d5db";
const PARK_FILL: &str = "#86efac33";
const USER_FILL: &str = "#3b82f6";
const OUTLINE: &str = "#ffffff";
const SHADOW: &str = "rgba(0, 0, 0, 0.1)";

/// Road centerlines as `(x0, y0, x1, y1)` in world units.
const ROADS: [(f64, f64, f64, f64); 4] = [
    (200.0, 0.0, 200.0, MAP_EXTENT),
    (600.0, 0.0, 600.0, MAP_EXTENT),
    (0.0, 300.0, MAP_EXTENT, 300.0),
    (0.0, 600.0, MAP_EXTENT, 600.0),
];

/// Parks as `(x, y, w, h)` in world units.
const PARKS: [(f64, f64, f64, f64); 3] = [(50.0, 50.0, 120.0, 120.0), (680.0, 380.0, 140.0, 140.0), (250.0, 680.0, 160.0, 100.0)];

/// Dash pattern of the selection ring.
const RING_DASH: f64 = 4.0;

/// Resolved appearance of one marker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerStyle {
    pub radius: f64,
    pub fill: &'static str,
    pub glyph: &'static str,
    pub font: &'static str,
    /// Radius of the dashed selection ring, when selected.
    pub ring_radius: Option<f64>,
}

impl MarkerStyle {
    #[must_use]
    pub fn for_marker(sport: Sport, selected: bool) -> Self {
        let radius = if selected { SELECTED_MARKER_RADIUS } else { MARKER_RADIUS };
        Self {
            radius,
            fill: sport.color(),
            glyph: sport.emoji(),
            font: if selected { "20px sans-serif" } else { "16px sans-serif" },
            ring_radius: selected.then_some(radius + SELECTION_RING_GAP),
        }
    }
}

/// Draw the full scene.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. invalid context state).
pub fn draw(ctx: &CanvasRenderingContext2d, core: &EngineCore) -> Result<(), JsValue> {
    let viewport = core.viewport;
    let camera = core.camera;

    // Layer 1: clear in device pixels, then work in CSS pixels.
    ctx.set_transform(core.dpr, 0.0, 0.0, core.dpr, 0.0, 0.0)?;
    ctx.set_fill_style_str(BACKGROUND);
    ctx.fill_rect(0.0, 0.0, viewport.width, viewport.height);

    ctx.save();
    ctx.translate(camera.pan_x, camera.pan_y)?;
    ctx.scale(camera.zoom, camera.zoom)?;

    // Layer 2: static map.
    draw_grid(ctx);
    draw_roads(ctx);
    draw_parks(ctx);
    draw_user_location(ctx, core.layout.params().center)?;

    // Layer 3: markers in list order.
    for marker in core.markers() {
        let Some(entity) = core.entity(&marker.id) else {
            continue;
        };
        let style = MarkerStyle::for_marker(entity.sport, core.selection.is_selected(&marker.id));
        draw_marker(ctx, marker.point(), &style)?;
    }

    ctx.restore();
    Ok(())
}

fn draw_grid(ctx: &CanvasRenderingContext2d) {
    ctx.set_stroke_style_str(GRID_STROKE);
    ctx.set_line_width(1.0);
    for i in 0..GRID_LINES {
        let offset = f64::from(i) * GRID_SPACING;
        ctx.begin_path();
        ctx.move_to(offset, 0.0);
        ctx.line_to(offset, MAP_EXTENT);
        ctx.stroke();

        ctx.begin_path();
        ctx.move_to(0.0, offset);
        ctx.line_to(MAP_EXTENT, offset);
        ctx.stroke();
    }
}

fn draw_roads(ctx: &CanvasRenderingContext2d) {
    ctx.set_stroke_style_str(ROAD_STROKE);
    ctx.set_line_width(3.0);
    ctx.begin_path();
    for (x0, y0, x1, y1) in ROADS {
        ctx.move_to(x0, y0);
        ctx.line_to(x1, y1);
    }
    ctx.stroke();
}

fn draw_parks(ctx: &CanvasRenderingContext2d) {
    ctx.set_fill_style_str(PARK_FILL);
    for (x, y, w, h) in PARKS {
        ctx.fill_rect(x, y, w, h);
    }
}

fn draw_user_location(ctx: &CanvasRenderingContext2d, center: Point) -> Result<(), JsValue> {
    ctx.set_fill_style_str(USER_FILL);
    ctx.set_stroke_style_str(OUTLINE);
    ctx.set_line_width(3.0);
    ctx.begin_path();
    ctx.arc(center.x, center.y, USER_MARKER_RADIUS, 0.0, TAU)?;
    ctx.fill();
    ctx.stroke();
    Ok(())
}

fn draw_marker(ctx: &CanvasRenderingContext2d, at: Point, style: &MarkerStyle) -> Result<(), JsValue> {
    // Drop shadow.
    ctx.set_fill_style_str(SHADOW);
    ctx.begin_path();
    ctx.arc(at.x + 2.0, at.y + 2.0, style.radius, 0.0, TAU)?;
    ctx.fill();

    // Body.
    ctx.set_fill_style_str(style.fill);
    ctx.set_stroke_style_str(OUTLINE);
    ctx.set_line_width(3.0);
    ctx.begin_path();
    ctx.arc(at.x, at.y, style.radius, 0.0, TAU)?;
    ctx.fill();
    ctx.stroke();

    // Glyph.
    ctx.set_font(style.font);
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");
    ctx.fill_text(style.glyph, at.x, at.y)?;

    if let Some(ring) = style.ring_radius {
        ctx.set_stroke_style_str(style.fill);
        ctx.set_line_width(2.0);
        let dash = js_sys::Array::new();
        dash.push(&RING_DASH.into());
        dash.push(&RING_DASH.into());
        ctx.set_line_dash(&dash)?;
        ctx.begin_path();
        ctx.arc(at.x, at.y, ring, 0.0, TAU)?;
        ctx.stroke();
        ctx.set_line_dash(&js_sys::Array::new())?;
    }

    Ok(())
}

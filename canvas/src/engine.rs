use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::camera::{Camera, Point, Size};
use crate::consts::HIT_TOLERANCE_PX;
use crate::entity::{EntityId, EntityStore, MapEntity};
use crate::hit::{self, HitPolicy};
use crate::input::{Button, InputState};
use crate::layout::{LayoutParams, MarkerLayout, SeededJitter, WorldPosition};
use crate::render;
use crate::selection::Selection;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Cursor shown while the pointer rests over the map.
pub const CURSOR_GRAB: &str = "grab";
/// Cursor shown while a pan drag is in progress.
pub const CURSOR_GRABBING: &str = "grabbing";

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// The selected entity changed (`None` after a deselect).
    SelectionChanged(Option<EntityId>),
    SetCursor(String),
    RenderNeeded,
}

/// Tunables for an [`EngineCore`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConfig {
    pub layout: LayoutParams,
    pub hit_policy: HitPolicy,
    pub hit_tolerance_px: f64,
    /// Salt mixed into the per-entity jitter seed.
    pub jitter_salt: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            layout: LayoutParams::default(),
            hit_policy: HitPolicy::default(),
            hit_tolerance_px: HIT_TOLERANCE_PX,
            jitter_salt: 0,
        }
    }
}

/// Core engine state: all logic that does not touch the canvas element.
///
/// Separated from `Engine` so it can be tested without WASM/browser dependencies.
pub struct EngineCore {
    pub entities: EntityStore,
    pub layout: MarkerLayout,
    pub camera: Camera,
    pub selection: Selection,
    pub input: InputState,
    pub viewport: Size,
    pub dpr: f64,
    hit_policy: HitPolicy,
    hit_tolerance_px: f64,
    jitter: SeededJitter,
}

impl Default for EngineCore {
    fn default() -> Self {
        Self::with_config(EngineConfig::default())
    }
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            entities: EntityStore::new(),
            layout: MarkerLayout::new(config.layout),
            camera: Camera::default(),
            selection: Selection::default(),
            input: InputState::default(),
            viewport: Size::default(),
            dpr: 1.0,
            hit_policy: config.hit_policy,
            hit_tolerance_px: config.hit_tolerance_px,
            jitter: SeededJitter::new(config.jitter_salt),
        }
    }

    // --- Data inputs ---

    /// Replace the visible entity set (e.g. after a filter change).
    ///
    /// Markers of entities that stay visible do not move. The camera and the
    /// selection are left untouched, even if the selected entity is no
    /// longer visible.
    pub fn set_entities(&mut self, entities: Vec<MapEntity>) -> Action {
        self.entities.replace(entities);
        self.layout.sync(self.entities.as_slice(), &mut self.jitter);
        Action::RenderNeeded
    }

    /// Update viewport dimensions and device pixel ratio.
    pub fn set_viewport(&mut self, width_css: f64, height_css: f64, dpr: f64) -> Action {
        self.viewport = Size::new(width_css.max(0.0), height_css.max(0.0));
        self.dpr = if dpr > 0.0 { dpr } else { 1.0 };
        Action::RenderNeeded
    }

    // --- Camera commands ---

    pub fn zoom_in(&mut self) -> Action {
        self.camera.zoom_in();
        Action::RenderNeeded
    }

    pub fn zoom_out(&mut self) -> Action {
        self.camera.zoom_out();
        Action::RenderNeeded
    }

    pub fn recenter(&mut self) -> Action {
        self.camera.recenter();
        Action::RenderNeeded
    }

    // --- Selection ---

    /// Select an entity and pan so its marker sits at the viewport center.
    ///
    /// Zoom is unchanged. An id without a marker is still selected, but the
    /// camera does not move.
    pub fn select_entity(&mut self, id: &EntityId) -> Vec<Action> {
        let previous = self.selection.select(id.clone());

        match self.layout.position(id) {
            Some(pos) => self.camera.pan_to(pos.point(), self.viewport),
            None => log::debug!("selected {id} has no marker; camera unchanged"),
        }

        let mut actions = Vec::new();
        if previous.as_ref() != Some(id) {
            log::debug!("selection changed to {id}");
            actions.push(Action::SelectionChanged(Some(id.clone())));
        }
        actions.push(Action::RenderNeeded);
        actions
    }

    /// Deselect. The camera stays where it is.
    pub fn clear_selection(&mut self) -> Vec<Action> {
        match self.selection.clear() {
            Some(_) => vec![Action::SelectionChanged(None), Action::RenderNeeded],
            None => Vec::new(),
        }
    }

    // --- Input events ---

    /// Pointer pressed: a marker hit selects it, otherwise a pan drag starts.
    pub fn on_pointer_down(&mut self, screen_pt: Point, button: Button) -> Vec<Action> {
        if button != Button::Primary {
            return Vec::new();
        }

        if let Some(hit) = self.hit_test(screen_pt) {
            return self.select_entity(&hit);
        }

        self.input.begin_drag(screen_pt, &self.camera);
        vec![Action::SetCursor(CURSOR_GRABBING.into())]
    }

    pub fn on_pointer_move(&mut self, screen_pt: Point) -> Vec<Action> {
        if self.input.update_drag(screen_pt, &mut self.camera) {
            vec![Action::RenderNeeded]
        } else {
            Vec::new()
        }
    }

    pub fn on_pointer_up(&mut self, _screen_pt: Point, _button: Button) -> Vec<Action> {
        self.finish_drag()
    }

    /// Pointer left the map surface; treated like a release.
    pub fn on_pointer_leave(&mut self) -> Vec<Action> {
        self.finish_drag()
    }

    fn finish_drag(&mut self) -> Vec<Action> {
        if self.input.end_drag() {
            vec![Action::SetCursor(CURSOR_GRAB.into())]
        } else {
            Vec::new()
        }
    }

    // --- Queries ---

    /// The marker under `screen_pt`, if any.
    #[must_use]
    pub fn hit_test(&self, screen_pt: Point) -> Option<EntityId> {
        hit::hit_test(screen_pt, self.layout.markers(), &self.camera, self.hit_tolerance_px, self.hit_policy)
            .map(|hit| hit.id)
    }

    /// The currently selected entity, if any.
    #[must_use]
    pub fn selection(&self) -> Option<&EntityId> {
        self.selection.selected()
    }

    /// The current camera state.
    #[must_use]
    pub fn camera(&self) -> Camera {
        self.camera
    }

    /// Look up a visible entity by id.
    #[must_use]
    pub fn entity(&self, id: &EntityId) -> Option<&MapEntity> {
        self.entities.get(id)
    }

    /// Marker positions in list order.
    pub fn markers(&self) -> impl Iterator<Item = &WorldPosition> {
        self.layout.markers()
    }

    /// Where the marker for `id` is currently drawn, in screen space.
    #[must_use]
    pub fn marker_screen_position(&self, id: &EntityId) -> Option<Point> {
        self.layout.position(id).map(|pos| self.camera.world_to_screen(pos.point()))
    }
}

/// The full map engine. Wraps `EngineCore` and owns the browser canvas element.
pub struct Engine {
    canvas: HtmlCanvasElement,
    pub core: EngineCore,
}

impl Engine {
    /// Create a new engine bound to the given canvas element.
    #[must_use]
    pub fn new(canvas: HtmlCanvasElement, config: EngineConfig) -> Self {
        Self { canvas, core: EngineCore::with_config(config) }
    }

    // --- Delegated inputs ---

    pub fn set_entities(&mut self, entities: Vec<MapEntity>) -> Action {
        self.core.set_entities(entities)
    }

    /// Update viewport dimensions and resize the backing store to match.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn set_viewport(&mut self, width_css: f64, height_css: f64, dpr: f64) -> Action {
        let action = self.core.set_viewport(width_css, height_css, dpr);
        let size = self.core.viewport;
        self.canvas.set_width((size.width * self.core.dpr).round() as u32);
        self.canvas.set_height((size.height * self.core.dpr).round() as u32);
        action
    }

    pub fn zoom_in(&mut self) -> Action {
        self.core.zoom_in()
    }

    pub fn zoom_out(&mut self) -> Action {
        self.core.zoom_out()
    }

    pub fn recenter(&mut self) -> Action {
        self.core.recenter()
    }

    pub fn select_entity(&mut self, id: &EntityId) -> Vec<Action> {
        self.core.select_entity(id)
    }

    pub fn clear_selection(&mut self) -> Vec<Action> {
        self.core.clear_selection()
    }

    pub fn on_pointer_down(&mut self, screen_pt: Point, button: Button) -> Vec<Action> {
        self.core.on_pointer_down(screen_pt, button)
    }

    pub fn on_pointer_move(&mut self, screen_pt: Point) -> Vec<Action> {
        self.core.on_pointer_move(screen_pt)
    }

    pub fn on_pointer_up(&mut self, screen_pt: Point, button: Button) -> Vec<Action> {
        self.core.on_pointer_up(screen_pt, button)
    }

    pub fn on_pointer_leave(&mut self) -> Vec<Action> {
        self.core.on_pointer_leave()
    }

    /// Set the CSS cursor on the canvas element.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the style property cannot be set.
    pub fn set_cursor(&self, cursor: &str) -> Result<(), JsValue> {
        self.canvas.style().set_property("cursor", cursor)
    }

    // --- Render ---

    /// Draw the current state to the canvas.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the 2D context is unavailable or a `Canvas2D` call fails.
    pub fn render(&self) -> Result<(), JsValue> {
        let ctx = self
            .canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        render::draw(&ctx, &self.core)
    }

    // --- Delegated queries ---

    #[must_use]
    pub fn selection(&self) -> Option<&EntityId> {
        self.core.selection()
    }

    #[must_use]
    pub fn camera(&self) -> Camera {
        self.core.camera()
    }
}

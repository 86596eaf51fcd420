//! Browser bindings: the `MapView` object the page script drives.
//!
//! The page forwards DOM pointer events and button clicks here. Every call
//! runs the matching [`Engine`] handler and then applies the returned
//! [`Action`]s: cursor changes go to the canvas style, selection changes go to
//! the registered JS callback, and at most one repaint happens per call.

#[cfg(test)]
#[path = "web_test.rs"]
mod web_test;

use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

use crate::camera::Point;
use crate::engine::{Action, Engine, EngineConfig};
use crate::entity::{EntityId, MapEntity};
use crate::hit::HitPolicy;
use crate::input::Button;

/// Decode the game list the page passes in (`[{id, sport, distance_miles}]`).
///
/// # Errors
///
/// Returns the JSON error for malformed input or an unknown sport.
pub fn parse_entities(json: &str) -> Result<Vec<MapEntity>, serde_json::Error> {
    serde_json::from_str(json)
}

/// Hit policy by name; anything other than `"first"` means nearest.
#[must_use]
pub fn hit_policy_from_name(name: &str) -> HitPolicy {
    if name.eq_ignore_ascii_case("first") { HitPolicy::FirstMatch } else { HitPolicy::Nearest }
}

#[wasm_bindgen]
pub struct MapView {
    engine: Engine,
    on_selection_change: Option<js_sys::Function>,
}

#[wasm_bindgen]
impl MapView {
    #[wasm_bindgen(constructor)]
    #[must_use]
    pub fn new(canvas: HtmlCanvasElement, layout_salt: u32, hit_policy: &str) -> MapView {
        let config = EngineConfig {
            hit_policy: hit_policy_from_name(hit_policy),
            jitter_salt: u64::from(layout_salt),
            ..EngineConfig::default()
        };
        MapView { engine: Engine::new(canvas, config), on_selection_change: None }
    }

    /// Register `callback(id | null)`, called whenever the selection changes.
    pub fn on_selection_change(&mut self, callback: js_sys::Function) {
        self.on_selection_change = Some(callback);
    }

    /// Replace the visible games with a JSON array of map entities.
    ///
    /// # Errors
    ///
    /// Returns `Err` for malformed JSON or a failed repaint.
    pub fn set_games(&mut self, json: &str) -> Result<(), JsValue> {
        let entities = parse_entities(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        let action = self.engine.set_entities(entities);
        self.process(vec![action])
    }

    /// # Errors
    ///
    /// Returns `Err` if the repaint fails.
    pub fn set_viewport(&mut self, width_css: f64, height_css: f64, dpr: f64) -> Result<(), JsValue> {
        let action = self.engine.set_viewport(width_css, height_css, dpr);
        self.process(vec![action])
    }

    /// # Errors
    ///
    /// Returns `Err` if the repaint fails.
    pub fn zoom_in(&mut self) -> Result<(), JsValue> {
        let action = self.engine.zoom_in();
        self.process(vec![action])
    }

    /// # Errors
    ///
    /// Returns `Err` if the repaint fails.
    pub fn zoom_out(&mut self) -> Result<(), JsValue> {
        let action = self.engine.zoom_out();
        self.process(vec![action])
    }

    /// # Errors
    ///
    /// Returns `Err` if the repaint fails.
    pub fn recenter(&mut self) -> Result<(), JsValue> {
        let action = self.engine.recenter();
        self.process(vec![action])
    }

    /// Select a game by id (e.g. from the list sheet) and center its marker.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the callback throws or the repaint fails.
    pub fn select(&mut self, id: &str) -> Result<(), JsValue> {
        let actions = self.engine.select_entity(&EntityId::new(id));
        self.process(actions)
    }

    /// # Errors
    ///
    /// Returns `Err` if the callback throws or the repaint fails.
    pub fn clear_selection(&mut self) -> Result<(), JsValue> {
        let actions = self.engine.clear_selection();
        self.process(actions)
    }

    /// # Errors
    ///
    /// Returns `Err` if the callback throws or the repaint fails.
    pub fn pointer_down(&mut self, x: f64, y: f64, button: i16) -> Result<(), JsValue> {
        let Some(button) = Button::from_dom(button) else {
            return Ok(());
        };
        let actions = self.engine.on_pointer_down(Point::new(x, y), button);
        self.process(actions)
    }

    /// # Errors
    ///
    /// Returns `Err` if the repaint fails.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> Result<(), JsValue> {
        let actions = self.engine.on_pointer_move(Point::new(x, y));
        self.process(actions)
    }

    /// # Errors
    ///
    /// Returns `Err` if the cursor cannot be reset.
    pub fn pointer_up(&mut self, x: f64, y: f64, button: i16) -> Result<(), JsValue> {
        let button = Button::from_dom(button).unwrap_or(Button::Primary);
        let actions = self.engine.on_pointer_up(Point::new(x, y), button);
        self.process(actions)
    }

    /// # Errors
    ///
    /// Returns `Err` if the cursor cannot be reset.
    pub fn pointer_leave(&mut self) -> Result<(), JsValue> {
        let actions = self.engine.on_pointer_leave();
        self.process(actions)
    }

    /// Currently selected game id, if any.
    #[must_use]
    pub fn selected(&self) -> Option<String> {
        self.engine.selection().map(|id| id.as_str().to_owned())
    }

    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.engine.camera().zoom
    }

    /// # Errors
    ///
    /// Returns `Err` if a `Canvas2D` call fails.
    pub fn render(&self) -> Result<(), JsValue> {
        self.engine.render()
    }
}

impl MapView {
    fn process(&mut self, actions: Vec<Action>) -> Result<(), JsValue> {
        let mut repaint = false;
        for action in actions {
            match action {
                Action::RenderNeeded => repaint = true,
                Action::SetCursor(cursor) => self.engine.set_cursor(&cursor)?,
                Action::SelectionChanged(id) => self.notify_selection(id.as_ref())?,
            }
        }
        if repaint { self.engine.render() } else { Ok(()) }
    }

    fn notify_selection(&self, id: Option<&EntityId>) -> Result<(), JsValue> {
        let Some(callback) = &self.on_selection_change else {
            return Ok(());
        };
        let arg = id.map_or(JsValue::NULL, |id| JsValue::from_str(id.as_str()));
        callback.call1(&JsValue::NULL, &arg)?;
        Ok(())
    }
}

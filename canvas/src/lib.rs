//! Map view engine for the PickupPlay game finder.
//!
//! This crate is compiled to WebAssembly and runs in the browser, but all of
//! its logic also builds natively so it can be driven and tested headlessly.
//! It owns the interactive map: placing a marker per visible game, maintaining
//! camera state for pan/zoom, resolving clicks to markers, tracking the
//! selected game, and painting the scene. The host layer is responsible only
//! for wiring DOM events to the engine and reacting to the returned
//! [`engine::Action`]s; [`web::MapView`] is the `#[wasm_bindgen]` surface it
//! calls.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] |
//! | [`entity`] | Map entities (games) and the ordered entity store |
//! | [`camera`] | Pan/zoom camera and coordinate conversions |
//! | [`layout`] | Circular marker scatter and the per-id position cache |
//! | [`hit`] | Screen-space marker hit-testing |
//! | [`input`] | Pointer buttons and the drag-to-pan gesture state |
//! | [`selection`] | Single-entity selection state |
//! | [`render`] | Scene rendering to a `Canvas2D` context |
//! | [`web`] | `#[wasm_bindgen]` host bindings over [`engine::Engine`] |
//! | [`consts`] | Shared numeric constants (zoom limits, radii, etc.) |

pub mod camera;
pub mod consts;
pub mod engine;
pub mod entity;
pub mod hit;
pub mod input;
pub mod layout;
pub mod render;
pub mod selection;
pub mod web;

//! Marker layout: assigns each visible entity a world-space position.
//!
//! Markers are scattered on a ring around the user's location. Entity `i` of
//! `n` sits at angle `i / n · 2π`, at a radius of `base_radius` plus a jitter
//! term in `[0, radius_jitter)`:
//!
//! ```text
//! x = cx + cos(angle) · radius
//! y = cy + sin(angle) · radius
//! ```
//!
//! The jitter comes from a [`JitterSource`]. [`SeededJitter`] derives it from a
//! hash of the entity id, so the same entity always lands at the same radius.
//! [`MarkerLayout`] additionally caches positions by id: an entity that stays
//! visible across a filter change keeps its marker where it was, and only
//! newly appearing entities are placed.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use std::collections::HashMap;
use std::f64::consts::TAU;

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::camera::Point;
use crate::consts::{LAYOUT_BASE_RADIUS, LAYOUT_CENTER_X, LAYOUT_CENTER_Y, LAYOUT_RADIUS_JITTER};
use crate::entity::{EntityId, MapEntity};

/// World-space position assigned to one entity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorldPosition {
    pub id: EntityId,
    pub x: f64,
    pub y: f64,
}

impl WorldPosition {
    #[must_use]
    pub fn point(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Geometry of the scatter ring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutParams {
    pub center: Point,
    pub base_radius: f64,
    pub radius_jitter: f64,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            center: Point::new(LAYOUT_CENTER_X, LAYOUT_CENTER_Y),
            base_radius: LAYOUT_BASE_RADIUS,
            radius_jitter: LAYOUT_RADIUS_JITTER,
        }
    }
}

/// Supplies the radius jitter for an entity, as a fraction in `[0, 1)`.
pub trait JitterSource {
    fn sample(&mut self, id: &EntityId) -> f64;
}

/// Jitter seeded from `SHA-256(salt || id)`. Same id and salt, same jitter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeededJitter {
    salt: u64,
}

impl SeededJitter {
    #[must_use]
    pub fn new(salt: u64) -> Self {
        Self { salt }
    }

    fn rng_for(self, id: &EntityId) -> StdRng {
        let mut hasher = Sha256::new();
        hasher.update(self.salt.to_le_bytes());
        hasher.update(id.as_str().as_bytes());
        let digest = hasher.finalize();

        let mut seed = [0u8; 32];
        seed.copy_from_slice(&digest);
        StdRng::from_seed(seed)
    }
}

impl JitterSource for SeededJitter {
    fn sample(&mut self, id: &EntityId) -> f64 {
        self.rng_for(id).random::<f64>()
    }
}

/// Jitter drawn from an arbitrary generator, ignoring the entity id.
///
/// Reproducible only if the generator is.
#[derive(Debug, Clone)]
pub struct RngJitter<R>(pub R);

impl<R: RngCore> JitterSource for RngJitter<R> {
    fn sample(&mut self, _id: &EntityId) -> f64 {
        self.0.random::<f64>()
    }
}

/// Place entity `index` of `count` on the ring.
#[allow(clippy::cast_precision_loss)]
fn place(index: usize, count: usize, id: &EntityId, params: &LayoutParams, jitter: &mut impl JitterSource) -> WorldPosition {
    let angle = (index as f64 / count as f64) * TAU;
    let radius = params.base_radius + jitter.sample(id) * params.radius_jitter;
    WorldPosition {
        id: id.clone(),
        x: params.center.x + angle.cos() * radius,
        y: params.center.y + angle.sin() * radius,
    }
}

/// Lay out every entity from scratch, in list order.
///
/// An empty list yields an empty layout.
#[must_use]
pub fn scatter(entities: &[MapEntity], params: &LayoutParams, jitter: &mut impl JitterSource) -> Vec<WorldPosition> {
    let count = entities.len();
    entities
        .iter()
        .enumerate()
        .map(|(i, e)| place(i, count, &e.id, params, jitter))
        .collect()
}

/// Position cache for the visible entity set.
#[derive(Debug, Clone, Default)]
pub struct MarkerLayout {
    params: LayoutParams,
    positions: HashMap<EntityId, WorldPosition>,
    order: Vec<EntityId>,
}

impl MarkerLayout {
    #[must_use]
    pub fn new(params: LayoutParams) -> Self {
        Self { params, positions: HashMap::new(), order: Vec::new() }
    }

    #[must_use]
    pub fn params(&self) -> &LayoutParams {
        &self.params
    }

    /// Bring the layout in line with `entities`.
    ///
    /// Entities already placed keep their position; new ones are placed by
    /// their index in `entities`; vanished ones are dropped. Returns the
    /// number of newly placed entities.
    pub fn sync(&mut self, entities: &[MapEntity], jitter: &mut impl JitterSource) -> usize {
        let count = entities.len();
        let mut previous = std::mem::take(&mut self.positions);
        let mut placed = 0;

        self.order.clear();
        for (i, entity) in entities.iter().enumerate() {
            let position = match previous.remove(&entity.id) {
                Some(existing) => existing,
                None => {
                    placed += 1;
                    place(i, count, &entity.id, &self.params, jitter)
                }
            };
            self.order.push(entity.id.clone());
            self.positions.insert(entity.id.clone(), position);
        }

        log::debug!("marker layout synced: {count} visible, {placed} newly placed");
        placed
    }

    /// Discard all cached positions and lay out `entities` from scratch.
    pub fn relayout(&mut self, entities: &[MapEntity], jitter: &mut impl JitterSource) {
        self.positions.clear();
        self.order.clear();
        self.sync(entities, jitter);
    }

    /// World position of `id`, if it is laid out.
    #[must_use]
    pub fn position(&self, id: &EntityId) -> Option<&WorldPosition> {
        self.positions.get(id)
    }

    /// All positions keyed by id.
    #[must_use]
    pub fn positions(&self) -> &HashMap<EntityId, WorldPosition> {
        &self.positions
    }

    /// Positions in entity-list order (layout and hit-test priority order).
    pub fn markers(&self) -> impl Iterator<Item = &WorldPosition> {
        self.order.iter().filter_map(|id| self.positions.get(id))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

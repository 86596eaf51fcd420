//! Entity model: the things plotted on the map and the ordered store that owns them.
//!
//! The map core only cares about three attributes of a game: a stable id, the
//! sport (which picks marker color and glyph), and its distance from the user
//! (which upstream filters use). Everything else about a game lives in the
//! application layer.
//!
//! `EntityStore` preserves insertion order. That order is the layout order
//! (marker `i` of `n`) and the hit-test priority order.

#[cfg(test)]
#[path = "entity_test.rs"]
mod entity_test;

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Stable identifier of a map entity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(pub String);

impl EntityId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EntityId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for EntityId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Sport played at a game. Drives marker color and glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sport {
    Basketball,
    Soccer,
    Volleyball,
    Pickleball,
    Running,
}

impl Sport {
    /// Every sport, in legend order.
    pub const ALL: [Sport; 5] = [Sport::Basketball, Sport::Soccer, Sport::Volleyball, Sport::Pickleball, Sport::Running];

    /// Lowercase identifier, matching the serialized form.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Basketball => "basketball",
            Self::Soccer => "soccer",
            Self::Volleyball => "volleyball",
            Self::Pickleball => "pickleball",
            Self::Running => "running",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Basketball => "Basketball",
            Self::Soccer => "Soccer",
            Self::Volleyball => "Volleyball",
            Self::Pickleball => "Pickleball",
            Self::Running => "Running",
        }
    }

    /// Marker fill color as a CSS color string.
    #[must_use]
    pub fn color(self) -> &'static str {
        match self {
            Self::Basketball => "#f97316",
            Self::Soccer => "#22c55e",
            Self::Volleyball => "#3b82f6",
            Self::Pickleball => "#a855f7",
            Self::Running => "#ef4444",
        }
    }

    /// Glyph drawn in the middle of the marker.
    #[must_use]
    pub fn emoji(self) -> &'static str {
        match self {
            Self::Basketball => "🏀",
            Self::Soccer => "⚽",
            Self::Volleyball => "🏐",
            Self::Pickleball => "🎾",
            Self::Running => "🏃",
        }
    }
}

impl fmt::Display for Sport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sport: {0}")]
pub struct UnknownSport(pub String);

impl FromStr for Sport {
    type Err = UnknownSport;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|sport| sport.as_str() == lowered)
            .ok_or_else(|| UnknownSport(s.to_owned()))
    }
}

/// An item plotted on the map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapEntity {
    pub id: EntityId,
    pub sport: Sport,
    /// Distance from the user in miles. Not used by layout or hit-testing.
    pub distance_miles: f64,
}

impl MapEntity {
    #[must_use]
    pub fn new(id: impl Into<EntityId>, sport: Sport, distance_miles: f64) -> Self {
        Self { id: id.into(), sport, distance_miles }
    }
}

/// Ordered store of the entities currently visible on the map.
#[derive(Debug, Default)]
pub struct EntityStore {
    entities: Vec<MapEntity>,
    index: HashMap<EntityId, usize>,
}

impl EntityStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the visible set. Order is preserved; a repeated id keeps its
    /// first occurrence.
    pub fn replace(&mut self, entities: Vec<MapEntity>) {
        self.entities.clear();
        self.index.clear();
        for entity in entities {
            if self.index.contains_key(&entity.id) {
                log::warn!("duplicate map entity id {} ignored", entity.id);
                continue;
            }
            self.index.insert(entity.id.clone(), self.entities.len());
            self.entities.push(entity);
        }
    }

    /// Look up an entity by id.
    #[must_use]
    pub fn get(&self, id: &EntityId) -> Option<&MapEntity> {
        self.index.get(id).and_then(|&i| self.entities.get(i))
    }

    #[must_use]
    pub fn as_slice(&self) -> &[MapEntity] {
        &self.entities
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

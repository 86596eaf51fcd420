//! Selection state: at most one entity is selected at a time.

#[cfg(test)]
#[path = "selection_test.rs"]
mod selection_test;

use crate::entity::EntityId;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    Idle,
    Selected(EntityId),
}

impl Selection {
    /// Select `id`, replacing any previous selection.
    ///
    /// Returns the previously selected id, if any.
    pub fn select(&mut self, id: EntityId) -> Option<EntityId> {
        match std::mem::replace(self, Self::Selected(id)) {
            Self::Idle => None,
            Self::Selected(prev) => Some(prev),
        }
    }

    /// Return to `Idle`, yielding the id that was selected.
    pub fn clear(&mut self) -> Option<EntityId> {
        match std::mem::take(self) {
            Self::Idle => None,
            Self::Selected(prev) => Some(prev),
        }
    }

    #[must_use]
    pub fn selected(&self) -> Option<&EntityId> {
        match self {
            Self::Idle => None,
            Self::Selected(id) => Some(id),
        }
    }

    #[must_use]
    pub fn is_selected(&self, id: &EntityId) -> bool {
        self.selected() == Some(id)
    }
}

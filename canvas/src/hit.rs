#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::camera::{Camera, Point};
use crate::entity::EntityId;
use crate::layout::WorldPosition;

/// How to choose between several markers that are all within tolerance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HitPolicy {
    /// The closest marker wins; ties go to the earlier marker in list order.
    #[default]
    Nearest,
    /// The first marker in list order wins, even if a later one is closer.
    FirstMatch,
}

/// Result of a hit test.
#[derive(Debug, Clone, PartialEq)]
pub struct Hit {
    pub id: EntityId,
    /// Screen-space distance from the pointer to the marker center.
    pub distance_px: f64,
}

/// Find the marker under `screen_pt`.
///
/// A marker qualifies when its screen-space center is strictly closer than
/// `tolerance_px` to the pointer. `markers` is consumed in priority order.
#[must_use]
pub fn hit_test<'a, I>(screen_pt: Point, markers: I, camera: &Camera, tolerance_px: f64, policy: HitPolicy) -> Option<Hit>
where
    I: IntoIterator<Item = &'a WorldPosition>,
{
    let mut best: Option<Hit> = None;

    for marker in markers {
        let distance_px = camera.world_to_screen(marker.point()).distance(screen_pt);
        // NaN (non-finite pointer or camera) never qualifies.
        if distance_px.is_nan() || distance_px >= tolerance_px {
            continue;
        }
        let hit = Hit { id: marker.id.clone(), distance_px };
        match policy {
            HitPolicy::FirstMatch => return Some(hit),
            HitPolicy::Nearest => {
                if best.as_ref().is_none_or(|b| distance_px < b.distance_px) {
                    best = Some(hit);
                }
            }
        }
    }

    best
}

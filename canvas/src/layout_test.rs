#![allow(clippy::float_cmp)]

use rand::SeedableRng;
use rand::rngs::StdRng;

use super::*;
use crate::entity::Sport;

const EPSILON: f64 = 1e-9;

/// Returns the same fraction for every entity.
struct ConstJitter(f64);

impl JitterSource for ConstJitter {
    fn sample(&mut self, _id: &EntityId) -> f64 {
        self.0
    }
}

fn entities(ids: &[&str]) -> Vec<MapEntity> {
    ids.iter().map(|id| MapEntity::new(*id, Sport::Basketball, 1.0)).collect()
}

fn twelve() -> Vec<MapEntity> {
    let ids: Vec<String> = (1..=12).map(|i| i.to_string()).collect();
    ids.iter().map(|id| MapEntity::new(id.as_str(), Sport::Soccer, 1.0)).collect()
}

fn radius_of(p: &WorldPosition, params: &LayoutParams) -> f64 {
    p.point().distance(params.center)
}

// =============================================================
// scatter
// =============================================================

#[test]
fn scatter_empty_is_empty() {
    let out = scatter(&[], &LayoutParams::default(), &mut SeededJitter::default());
    assert!(out.is_empty());
}

#[test]
fn scatter_single_entity_sits_on_positive_x_axis() {
    let params = LayoutParams::default();
    let out = scatter(&entities(&["a"]), &params, &mut ConstJitter(0.0));
    assert_eq!(out.len(), 1);
    assert!((out[0].x - (params.center.x + params.base_radius)).abs() < EPSILON);
    assert!((out[0].y - params.center.y).abs() < EPSILON);
}

#[test]
fn scatter_angles_follow_list_order() {
    let params = LayoutParams::default();
    let out = scatter(&entities(&["a", "b", "c", "d"]), &params, &mut ConstJitter(0.0));
    // Quarter turns: +x, +y, -x, -y (screen y grows downward).
    let r = params.base_radius;
    let expected = [(r, 0.0), (0.0, r), (-r, 0.0), (0.0, -r)];
    for (p, (dx, dy)) in out.iter().zip(expected) {
        assert!((p.x - (params.center.x + dx)).abs() < EPSILON, "{p:?}");
        assert!((p.y - (params.center.y + dy)).abs() < EPSILON, "{p:?}");
    }
}

#[test]
fn scatter_radius_stays_within_jitter_band() {
    let params = LayoutParams::default();
    let out = scatter(&twelve(), &params, &mut SeededJitter::new(3));
    for p in &out {
        let r = radius_of(p, &params);
        assert!(r >= params.base_radius - EPSILON, "{p:?} too close: {r}");
        assert!(r < params.base_radius + params.radius_jitter, "{p:?} too far: {r}");
    }
}

#[test]
fn scatter_full_jitter_uses_max_radius() {
    let params = LayoutParams { center: Point::new(0.0, 0.0), base_radius: 10.0, radius_jitter: 5.0 };
    let out = scatter(&entities(&["a"]), &params, &mut ConstJitter(1.0));
    assert!((out[0].x - 15.0).abs() < EPSILON);
}

#[test]
fn scatter_is_deterministic_with_seeded_jitter() {
    let params = LayoutParams::default();
    let a = scatter(&twelve(), &params, &mut SeededJitter::new(42));
    let b = scatter(&twelve(), &params, &mut SeededJitter::new(42));
    assert_eq!(a, b);
}

#[test]
fn scatter_is_deterministic_with_same_rng_seed() {
    let params = LayoutParams::default();
    let a = scatter(&twelve(), &params, &mut RngJitter(StdRng::seed_from_u64(9)));
    let b = scatter(&twelve(), &params, &mut RngJitter(StdRng::seed_from_u64(9)));
    assert_eq!(a, b);
}

#[test]
fn seeded_jitter_depends_on_id_and_salt() {
    let mut jitter = SeededJitter::new(0);
    let a = jitter.sample(&"1".into());
    let b = jitter.sample(&"2".into());
    assert_ne!(a, b);
    let c = SeededJitter::new(1).sample(&"1".into());
    assert_ne!(a, c);
    assert!((0.0..1.0).contains(&a));
}

// =============================================================
// MarkerLayout
// =============================================================

#[test]
fn layout_default_is_empty() {
    let layout = MarkerLayout::default();
    assert!(layout.is_empty());
    assert_eq!(layout.markers().count(), 0);
}

#[test]
fn layout_sync_places_everything_first_time() {
    let mut layout = MarkerLayout::new(LayoutParams::default());
    let placed = layout.sync(&twelve(), &mut SeededJitter::default());
    assert_eq!(placed, 12);
    assert_eq!(layout.len(), 12);
    assert_eq!(layout.positions().len(), 12);
}

#[test]
fn layout_sync_matches_scatter_on_fresh_layout() {
    let params = LayoutParams::default();
    let mut layout = MarkerLayout::new(params);
    layout.sync(&twelve(), &mut SeededJitter::new(5));
    let expected = scatter(&twelve(), &params, &mut SeededJitter::new(5));
    let got: Vec<WorldPosition> = layout.markers().cloned().collect();
    assert_eq!(got, expected);
}

#[test]
fn layout_sync_keeps_positions_of_surviving_entities() {
    let mut layout = MarkerLayout::new(LayoutParams::default());
    layout.sync(&entities(&["a", "b", "c", "d"]), &mut SeededJitter::default());
    let before_c = layout.position(&"c".into()).cloned();

    let placed = layout.sync(&entities(&["c", "e"]), &mut SeededJitter::default());

    assert_eq!(placed, 1);
    assert_eq!(layout.position(&"c".into()).cloned(), before_c);
    assert!(layout.position(&"a".into()).is_none());
    assert!(layout.position(&"e".into()).is_some());
}

#[test]
fn layout_sync_same_set_twice_is_stable() {
    let mut layout = MarkerLayout::new(LayoutParams::default());
    layout.sync(&twelve(), &mut RngJitter(StdRng::seed_from_u64(1)));
    let first: Vec<WorldPosition> = layout.markers().cloned().collect();
    // A different generator must not move anything that is already placed.
    let placed = layout.sync(&twelve(), &mut RngJitter(StdRng::seed_from_u64(2)));
    let second: Vec<WorldPosition> = layout.markers().cloned().collect();
    assert_eq!(placed, 0);
    assert_eq!(first, second);
}

#[test]
fn layout_markers_follow_latest_list_order() {
    let mut layout = MarkerLayout::new(LayoutParams::default());
    layout.sync(&entities(&["a", "b", "c"]), &mut SeededJitter::default());
    layout.sync(&entities(&["c", "a"]), &mut SeededJitter::default());
    let ids: Vec<&str> = layout.markers().map(|m| m.id.as_str()).collect();
    assert_eq!(ids, ["c", "a"]);
}

#[test]
fn layout_sync_to_empty_clears() {
    let mut layout = MarkerLayout::new(LayoutParams::default());
    layout.sync(&twelve(), &mut SeededJitter::default());
    layout.sync(&[], &mut SeededJitter::default());
    assert!(layout.is_empty());
    assert!(layout.positions().is_empty());
}

#[test]
fn layout_relayout_recomputes_angles() {
    let params = LayoutParams::default();
    let mut layout = MarkerLayout::new(params);
    layout.sync(&entities(&["a", "b", "c", "d"]), &mut ConstJitter(0.0));
    layout.relayout(&entities(&["c", "d"]), &mut ConstJitter(0.0));
    // "c" is now index 0 of 2 and moves to the +x axis.
    let c = layout.position(&"c".into()).map(WorldPosition::point);
    assert_eq!(c, Some(Point::new(params.center.x + params.base_radius, params.center.y)));
}

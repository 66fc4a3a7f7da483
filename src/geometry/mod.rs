//! Intersection engine.
//!
//! Every function here takes the defining geometry of two shapes and returns
//! the points where their perimeters meet. Rules that hold for all of them:
//!
//! * The result is `None` or a non-empty list of points.
//! * Lists may contain duplicates and are not sorted.
//! * Coincident shapes yield a per-case sample of points, not a full
//!   description of the overlap.
//! * Only perimeters are tested. A shape fully inside another, with no
//!   boundary crossing, yields `None`.
//! * `point_*` functions return the point itself as a one-element list.

use std::sync::atomic::{AtomicBool, Ordering};

use egui::Vec2;

mod composite;
mod primitive;

pub use composite::*;
pub use primitive::*;

/// Intersection points of two shapes, `None` when they do not meet.
pub type Intersection = Option<Vec<Vec2>>;

/// A boundary edge of a composite shape, as its two endpoints.
pub type Edge = (Vec2, Vec2);

// World space is y-up, unlike egui's screen-space constants.
pub(crate) const UP: Vec2 = Vec2::new(0.0, 1.0);
pub(crate) const DOWN: Vec2 = Vec2::new(0.0, -1.0);
pub(crate) const LEFT: Vec2 = Vec2::new(-1.0, 0.0);
pub(crate) const RIGHT: Vec2 = Vec2::new(1.0, 0.0);

static NORMALIZE_AABB: AtomicBool = AtomicBool::new(true);

/// Enables or disables corner normalization for every AABB-consuming function.
///
/// When enabled (the default) AABB corners may be passed in any order; they are
/// reordered into componentwise min and max before use.
pub fn set_aabb_normalization(enabled: bool) {
    NORMALIZE_AABB.store(enabled, Ordering::Relaxed);
}

/// Returns whether AABB corners are currently normalized.
pub fn aabb_normalization() -> bool {
    NORMALIZE_AABB.load(Ordering::Relaxed)
}

/// Reorders two opposite corners into (min, max).
pub fn normalize_aabb(aa: Vec2, bb: Vec2) -> (Vec2, Vec2) {
    (aa.min(bb), aa.max(bb))
}

/// Applies the normalization policy.
pub(crate) fn aabb_corners(aa: Vec2, bb: Vec2) -> (Vec2, Vec2) {
    if aabb_normalization() {
        normalize_aabb(aa, bb)
    } else {
        (aa, bb)
    }
}

/// Boundary edges of an AABB, starting at `aa` and walking through `(bb.x, aa.y)`.
///
/// The corners are used as given. Callers apply the normalization policy first.
pub fn aabb_edges(aa: Vec2, bb: Vec2) -> [Edge; 4] {
    let ab = Vec2::new(bb.x, aa.y);
    let ba = Vec2::new(aa.x, bb.y);
    [(aa, ab), (ab, bb), (bb, ba), (ba, aa)]
}

/// Boundary edges of the parallelogram with vertices O, O+N, O+N+M, O+M.
pub fn parallelogram_edges(o: Vec2, n: Vec2, m: Vec2) -> [Edge; 4] {
    [(o, o + n), (o + n, o + n + m), (o + n + m, o + m), (o + m, o)]
}

pub fn triangle_edges(e: Vec2, f: Vec2, g: Vec2) -> [Edge; 3] {
    [(e, f), (f, g), (g, e)]
}

/// Tests every edge with `leaf` and concatenates the hits.
///
/// Returns `None` only if no edge produced a point. Duplicates are kept.
pub fn edges_intersect<F>(edges: &[Edge], mut leaf: F) -> Intersection
where
    F: FnMut(Vec2, Vec2) -> Intersection,
{
    let points: Vec<Vec2> = edges
        .iter()
        .filter_map(|&(a, b)| leaf(a, b))
        .flatten()
        .collect();

    if points.is_empty() { None } else { Some(points) }
}

/// Intersects two edge lists pairwise with `segment_segment`.
///
/// The outer loop runs over `outer`, so points come out grouped by the edges of
/// the first shape.
pub fn composite_pair(outer: &[Edge], inner: &[Edge]) -> Intersection {
    edges_intersect(outer, |a, b| {
        edges_intersect(inner, |c, d| segment_segment(a, b, c, d))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_aabb_orders_corners() {
        let (a, b) = normalize_aabb(Vec2::new(3.0, -1.0), Vec2::new(-2.0, 4.0));
        assert_eq!(a, Vec2::new(-2.0, -1.0));
        assert_eq!(b, Vec2::new(3.0, 4.0));
    }

    #[test]
    fn test_aabb_edges_walk_the_perimeter() {
        let edges = aabb_edges(Vec2::ZERO, Vec2::new(2.0, 1.0));
        assert_eq!(edges[0], (Vec2::ZERO, Vec2::new(2.0, 0.0)));
        assert_eq!(edges[1], (Vec2::new(2.0, 0.0), Vec2::new(2.0, 1.0)));
        assert_eq!(edges[2], (Vec2::new(2.0, 1.0), Vec2::new(0.0, 1.0)));
        assert_eq!(edges[3], (Vec2::new(0.0, 1.0), Vec2::ZERO));
    }

    #[test]
    fn test_parallelogram_edges_close() {
        let edges = parallelogram_edges(Vec2::new(1.0, 1.0), Vec2::new(0.0, 2.0), Vec2::new(3.0, 0.0));
        assert_eq!(edges[0].0, Vec2::new(1.0, 1.0));
        assert_eq!(edges[1].0, Vec2::new(1.0, 3.0));
        assert_eq!(edges[2].0, Vec2::new(4.0, 3.0));
        assert_eq!(edges[3].0, Vec2::new(4.0, 1.0));
        assert_eq!(edges[3].1, edges[0].0);
    }

    #[test]
    fn test_edges_intersect_empty_is_none() {
        let edges = triangle_edges(Vec2::ZERO, Vec2::new(1.0, 0.0), Vec2::new(0.0, 1.0));
        assert!(edges_intersect(&edges, |_, _| None).is_none());
    }

    #[test]
    fn test_edges_intersect_keeps_duplicates() {
        let edges = triangle_edges(Vec2::ZERO, Vec2::new(1.0, 0.0), Vec2::new(0.0, 1.0));
        let hits = edges_intersect(&edges, |a, _| Some(vec![Vec2::ZERO, a])).unwrap();
        assert_eq!(hits.len(), 6);
        assert_eq!(hits[0], Vec2::ZERO);
        assert_eq!(hits[2], Vec2::ZERO);
    }
}

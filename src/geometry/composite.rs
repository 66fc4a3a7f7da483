//! Pair functions for AABBs, parallelograms and triangles.
//!
//! Each composite is split into its boundary edges and reduced with
//! [`edges_intersect`] or [`composite_pair`].

use egui::Vec2;

use super::{
    Intersection, aabb_corners, aabb_edges, composite_pair, edges_intersect, parallelogram_edges,
    segment_circle, segment_segment, triangle_edges,
};

fn normalized_aabb_edges(aa: Vec2, bb: Vec2) -> [super::Edge; 4] {
    let (aa, bb) = aabb_corners(aa, bb);
    aabb_edges(aa, bb)
}

pub fn aabb_circle(aa: Vec2, bb: Vec2, center: Vec2, radius: f32) -> Intersection {
    edges_intersect(&normalized_aabb_edges(aa, bb), |a, b| {
        segment_circle(a, b, center, radius)
    })
}

pub fn aabb_segment(aa: Vec2, bb: Vec2, a: Vec2, b: Vec2) -> Intersection {
    edges_intersect(&normalized_aabb_edges(aa, bb), |c, d| segment_segment(c, d, a, b))
}

pub fn aabb_aabb(aa1: Vec2, bb1: Vec2, aa2: Vec2, bb2: Vec2) -> Intersection {
    composite_pair(&normalized_aabb_edges(aa1, bb1), &normalized_aabb_edges(aa2, bb2))
}

pub fn circle_parallelogram(center: Vec2, radius: f32, o: Vec2, n: Vec2, m: Vec2) -> Intersection {
    edges_intersect(&parallelogram_edges(o, n, m), |a, b| {
        segment_circle(a, b, center, radius)
    })
}

pub fn segment_parallelogram(a: Vec2, b: Vec2, o: Vec2, n: Vec2, m: Vec2) -> Intersection {
    edges_intersect(&parallelogram_edges(o, n, m), |c, d| segment_segment(c, d, a, b))
}

pub fn aabb_parallelogram(aa: Vec2, bb: Vec2, o: Vec2, n: Vec2, m: Vec2) -> Intersection {
    composite_pair(&normalized_aabb_edges(aa, bb), &parallelogram_edges(o, n, m))
}

pub fn parallelogram_parallelogram(
    o1: Vec2,
    n1: Vec2,
    m1: Vec2,
    o2: Vec2,
    n2: Vec2,
    m2: Vec2,
) -> Intersection {
    composite_pair(&parallelogram_edges(o1, n1, m1), &parallelogram_edges(o2, n2, m2))
}

pub fn circle_triangle(center: Vec2, radius: f32, e: Vec2, f: Vec2, g: Vec2) -> Intersection {
    edges_intersect(&triangle_edges(e, f, g), |a, b| segment_circle(a, b, center, radius))
}

pub fn segment_triangle(a: Vec2, b: Vec2, e: Vec2, f: Vec2, g: Vec2) -> Intersection {
    edges_intersect(&triangle_edges(e, f, g), |c, d| segment_segment(c, d, a, b))
}

pub fn aabb_triangle(aa: Vec2, bb: Vec2, e: Vec2, f: Vec2, g: Vec2) -> Intersection {
    composite_pair(&normalized_aabb_edges(aa, bb), &triangle_edges(e, f, g))
}

pub fn parallelogram_triangle(
    o: Vec2,
    n: Vec2,
    m: Vec2,
    e: Vec2,
    f: Vec2,
    g: Vec2,
) -> Intersection {
    composite_pair(&parallelogram_edges(o, n, m), &triangle_edges(e, f, g))
}

/// Outer loop over the first triangle's edges, inner over the second's.
pub fn triangle_triangle(e1: Vec2, f1: Vec2, g1: Vec2, e2: Vec2, f2: Vec2, g2: Vec2) -> Intersection {
    composite_pair(&triangle_edges(e1, f1, g1), &triangle_edges(e2, f2, g2))
}

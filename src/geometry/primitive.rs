use egui::Vec2;

use super::{DOWN, Intersection, LEFT, RIGHT, UP, aabb_corners};

/// Intersection of two circles.
///
/// Identical circles yield the four points at distance `r1` along the up, down,
/// left and right axes, in that order. Circles that are apart or nested yield
/// `None`. Otherwise both chord endpoints are returned.
pub fn circle_circle(c1: Vec2, r1: f32, c2: Vec2, r2: f32) -> Intersection {
    if c1 == c2 && r1 == r2 {
        return Some(vec![c1 + UP * r1, c1 + DOWN * r1, c1 + LEFT * r1, c1 + RIGHT * r1]);
    }

    let d2 = (c1 - c2).length_sq();
    if d2 > (r1 + r2) * (r1 + r2) {
        return None;
    }
    // One circle strictly inside the other.
    if d2 < (r1 - r2) * (r1 - r2) {
        return None;
    }

    let d = d2.sqrt();
    let a = (r1 * r1 - r2 * r2 + d2) / (2.0 * d);
    // Tangent circles can round a hair below zero.
    let h = (r1 * r1 - a * a).max(0.0).sqrt();
    let chord = c1 + (c2 - c1) * (a / d);
    let offset = Vec2::new(h * (c2.y - c1.y) / d, -h * (c2.x - c1.x) / d);

    Some(vec![chord + offset, chord - offset])
}

/// Intersection of the segment `a`-`b` with the circle's outline.
///
/// Points come out ordered by the `+sqrt` root first.
pub fn segment_circle(a: Vec2, b: Vec2, center: Vec2, radius: f32) -> Intersection {
    let v = b - a;
    let qa = v.dot(v);
    if qa == 0.0 {
        return None;
    }
    let qb = 2.0 * v.dot(a - center);
    let qc = a.dot(a) + center.dot(center) - 2.0 * a.dot(center) - radius * radius;

    let disc = qb * qb - 4.0 * qa * qc;
    if disc < 0.0 {
        return None;
    }

    let root = disc.sqrt();
    let t1 = (-qb + root) / (2.0 * qa);
    let t2 = (-qb - root) / (2.0 * qa);

    let points: Vec<Vec2> = [t1, t2]
        .into_iter()
        .filter(|t| (0.0..=1.0).contains(t))
        .map(|t| a + v * t)
        .collect();

    if points.is_empty() { None } else { Some(points) }
}

/// Intersection of two segments.
///
/// Crossing segments yield one point. Collinear overlapping segments yield the
/// two ends of the shared piece, lower end first along `a1`-`b1`. Parallel or
/// disjoint segments yield `None`.
pub fn segment_segment(a1: Vec2, b1: Vec2, a2: Vec2, b2: Vec2) -> Intersection {
    let s1 = b1 - a1;
    let s2 = b2 - a2;

    let det = -s2.x * s1.y + s1.x * s2.y;
    let s_num = -s1.y * (a1.x - a2.x) + s1.x * (a1.y - a2.y);
    let t_num = s2.x * (a1.y - a2.y) - s2.y * (a1.x - a2.x);

    if det == 0.0 {
        if t_num != 0.0 {
            return None;
        }
        return collinear_overlap(a1, s1, a2, b2);
    }

    let s = s_num / det;
    let t = t_num / det;
    if (0.0..=1.0).contains(&s) && (0.0..=1.0).contains(&t) {
        Some(vec![a1 + s1 * t])
    } else {
        None
    }
}

/// Shared piece of two collinear segments, in the parameter space of the first.
fn collinear_overlap(a1: Vec2, s1: Vec2, a2: Vec2, b2: Vec2) -> Intersection {
    let s2 = b2 - a2;
    // Zero when either segment has no length.
    let span = s1.dot(s2);
    if span == 0.0 {
        return None;
    }

    let p0 = (a2 - a1).dot(s2) / span;
    let p1 = (b2 - a1).dot(s2) / span;
    let (lo, hi) = (p0.min(p1), p0.max(p1));

    if hi >= 0.0 && lo <= 1.0 {
        let lo = lo.max(0.0);
        let hi = hi.min(1.0);
        Some(vec![a1 + s1 * lo, a1 + s1 * hi])
    } else {
        None
    }
}

/// `[p]` when `p` lies strictly inside the circle. The outline itself misses.
pub fn point_circle(p: Vec2, center: Vec2, radius: f32) -> Intersection {
    if (p - center).length_sq() < radius * radius {
        Some(vec![p])
    } else {
        None
    }
}

/// Two points meet when `p` lies within `radius` of `q`.
pub fn point_point(p: Vec2, q: Vec2, radius: f32) -> Intersection {
    point_circle(p, q, radius)
}

/// A point of size `radius` against a segment.
///
/// The point is treated as a small circle, so the result holds the places
/// where the segment crosses that circle rather than `p` itself.
pub fn point_segment(p: Vec2, radius: f32, a: Vec2, b: Vec2) -> Intersection {
    segment_circle(a, b, p, radius)
}

/// `[p]` when `p` lies inside the box or on its boundary.
pub fn point_aabb(p: Vec2, aa: Vec2, bb: Vec2) -> Intersection {
    let (aa, bb) = aabb_corners(aa, bb);
    if aa.x <= p.x && p.x <= bb.x && aa.y <= p.y && p.y <= bb.y {
        Some(vec![p])
    } else {
        None
    }
}

pub fn point_parallelogram(p: Vec2, o: Vec2, n: Vec2, m: Vec2) -> Intersection {
    if point_triangle(p, o, o + n, o + m).is_some() {
        return Some(vec![p]);
    }
    if point_triangle(p, o + n + m, o + n, o + m).is_some() {
        return Some(vec![p]);
    }
    None
}

/// `[p]` when `p` lies inside the triangle or on its boundary.
pub fn point_triangle(p: Vec2, e: Vec2, f: Vec2, g: Vec2) -> Intersection {
    let d1 = edge_sign(p, e, f);
    let d2 = edge_sign(p, f, g);
    let d3 = edge_sign(p, g, e);

    let has_neg = d1 < 0.0 || d2 < 0.0 || d3 < 0.0;
    let has_pos = d1 > 0.0 || d2 > 0.0 || d3 > 0.0;

    if has_neg && has_pos { None } else { Some(vec![p]) }
}

/// Signed area of `p` against the oriented edge `a` -> `b`.
fn edge_sign(p: Vec2, a: Vec2, b: Vec2) -> f32 {
    let s = p - b;
    let u = p - a;
    s.x * u.y - u.x * s.y
}

use egui::{Painter, Pos2, Shape as EguiShape, Stroke, Vec2};

use super::{Geometry, Shape};
use crate::geometry::normalize_aabb;
use crate::viewport::ScreenTransform;

const OUTLINE_WIDTH: f32 = 1.0;

impl Shape {
    /// Draws the shape through `painter`, mapping world space with `transform`.
    pub fn draw(&self, painter: &Painter, transform: &impl ScreenTransform) {
        let stroke = Stroke::new(OUTLINE_WIDTH, self.color);

        match self.geometry {
            Geometry::Point { pos } => {
                let radius = Shape::point_radius(transform.scale());
                self.draw_circle(painter, transform, pos, radius, stroke);
            }
            Geometry::Circle { center, radius } => {
                self.draw_circle(painter, transform, center, radius, stroke);
            }
            Geometry::Segment { a, b } => {
                painter.line_segment([transform.to_screen(a), transform.to_screen(b)], stroke);
            }
            Geometry::Triangle { e, f, g } => {
                self.draw_polygon(painter, transform, &[e, f, g], stroke);
            }
            Geometry::Aabb { aa, bb } => {
                let (aa, bb) = normalize_aabb(aa, bb);
                let corners = [aa, Vec2::new(bb.x, aa.y), bb, Vec2::new(aa.x, bb.y)];
                self.draw_polygon(painter, transform, &corners, stroke);
            }
            Geometry::Parallelogram { origin, n, m } => {
                let corners = [origin, origin + n, origin + n + m, origin + m];
                self.draw_polygon(painter, transform, &corners, stroke);
            }
        }
    }

    fn draw_circle(
        &self,
        painter: &Painter,
        transform: &impl ScreenTransform,
        center: Vec2,
        radius: f32,
        stroke: Stroke,
    ) {
        let center = transform.to_screen(center);
        let radius = transform.dist_to_screen(radius);
        if self.filled {
            painter.circle_filled(center, radius, self.color);
        } else {
            painter.circle_stroke(center, radius, stroke);
        }
    }

    fn draw_polygon(
        &self,
        painter: &Painter,
        transform: &impl ScreenTransform,
        corners: &[Vec2],
        stroke: Stroke,
    ) {
        let points: Vec<Pos2> = corners.iter().map(|&c| transform.to_screen(c)).collect();
        if self.filled {
            painter.add(EguiShape::convex_polygon(points, self.color, stroke));
        } else {
            painter.add(EguiShape::closed_line(points, stroke));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::factory;
    use crate::viewport::Viewport;
    use egui::{Color32, vec2};

    #[test]
    fn test_draw_every_variant() {
        let ctx = egui::Context::default();
        let viewport = Viewport::default();
        let painter = egui::Painter::new(ctx.clone(), egui::LayerId::background(), viewport.rect);

        let shapes = [
            factory::point(vec2(0.1, 0.1)),
            factory::circle(vec2(0.5, 0.5), 0.2).filled(true),
            factory::segment(vec2(0.2, -0.8), vec2(0.5, -0.1)),
            factory::triangle(vec2(0.0, 0.1), vec2(-0.1, -0.1), vec2(0.1, -0.1))
                .with_color(Color32::RED)
                .filled(true),
            factory::aabb(vec2(-0.5, -0.5), vec2(-0.9, -0.9)),
            factory::parallelogram(vec2(-0.8, 0.0), vec2(0.3, 0.1), vec2(0.1, 0.3)),
        ];
        for shape in &shapes {
            shape.draw(&painter, &viewport);
        }
    }
}

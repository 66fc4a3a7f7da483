use egui::{Pos2, Rect, Vec2, pos2};

/// Conversion between world space and device (pixel) space.
///
/// World space is y-up and spans `[-scale, scale]` vertically across the
/// viewport. Device space is egui's y-down pixel space.
pub trait ScreenTransform {
    fn to_screen(&self, world: Vec2) -> Pos2;

    fn to_world(&self, screen: Pos2) -> Vec2;

    /// Length of a world-space distance in pixels.
    fn dist_to_screen(&self, dist: f32) -> f32;

    /// World units per half viewport height.
    fn scale(&self) -> f32;
}

/// A canvas region plus a uniform world scale.
///
/// The world square `[-scale, scale]²` is fit to the shorter side of the rect
/// and centered horizontally, top-aligned.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub rect: Rect,
    pub scale: f32,
}

impl Viewport {
    pub fn new(rect: Rect, scale: f32) -> Self {
        Self { rect, scale }
    }

    fn side(&self) -> f32 {
        self.rect.height().min(self.rect.width())
    }

    fn x_margin(&self) -> f32 {
        (self.rect.width() - self.side()) / 2.0
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            rect: Rect::from_min_max(pos2(0.0, 0.0), pos2(800.0, 800.0)),
            scale: 1.0,
        }
    }
}

impl ScreenTransform for Viewport {
    fn to_screen(&self, world: Vec2) -> Pos2 {
        let side = self.side();
        let x = world.x / self.scale;
        let y = world.y / self.scale;
        pos2(
            self.rect.min.x + (x + 1.0) * side / 2.0 + self.x_margin(),
            self.rect.min.y + (1.0 - y) * side / 2.0,
        )
    }

    fn to_world(&self, screen: Pos2) -> Vec2 {
        let side = self.side();
        let x = (screen.x - self.rect.min.x - self.x_margin()) / side * 2.0 - 1.0;
        let y = -(screen.y - self.rect.min.y) / side * 2.0 + 1.0;
        Vec2::new(x * self.scale, y * self.scale)
    }

    fn dist_to_screen(&self, dist: f32) -> f32 {
        dist / self.scale * self.side() / 2.0
    }

    fn scale(&self) -> f32 {
        self.scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::vec2;

    fn close(a: Vec2, b: Vec2) -> bool {
        (a - b).length() < 1e-4
    }

    #[test]
    fn test_world_origin_maps_to_center() {
        let viewport = Viewport::default();
        assert_eq!(viewport.to_screen(Vec2::ZERO), pos2(400.0, 400.0));
        assert_eq!(viewport.to_screen(vec2(1.0, 1.0)), pos2(800.0, 0.0));
        assert_eq!(viewport.to_screen(vec2(-1.0, -1.0)), pos2(0.0, 800.0));
    }

    #[test]
    fn test_round_trip_in_wide_offset_rect() {
        let viewport = Viewport::new(
            Rect::from_min_max(pos2(10.0, 20.0), pos2(1010.0, 520.0)),
            2.0,
        );
        for world in [vec2(0.0, 0.0), vec2(1.5, -0.5), vec2(-2.0, 2.0)] {
            assert!(close(viewport.to_world(viewport.to_screen(world)), world));
        }
        // Horizontal margin of 250px on each side.
        assert_eq!(viewport.to_screen(vec2(-2.0, 2.0)), pos2(260.0, 20.0));
    }

    #[test]
    fn test_dist_to_screen() {
        let viewport = Viewport::new(Rect::from_min_max(pos2(0.0, 0.0), pos2(800.0, 400.0)), 2.0);
        assert_eq!(viewport.dist_to_screen(1.0), 100.0);
        assert_eq!(viewport.scale(), 2.0);
    }
}

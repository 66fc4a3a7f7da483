use egui::Vec2;
use log::{debug, error};

use crate::shape::Shape;

mod dispatcher;
pub use dispatcher::Dispatcher;

/// Callback receiving `(pos, old_pos)` in world space.
pub type PointerCallback = Box<dyn FnMut(Vec2, Vec2)>;

/// Callback receiving `(pos, old_pos, entered, exited)` in world space.
pub type HoverCallback = Box<dyn FnMut(Vec2, Vec2, bool, bool)>;

/// Interaction state of a wrapper, derived from its flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionState {
    Idle,
    Hovered,
    Clicked,
}

/// A shape that reacts to pointer events.
///
/// Unset callbacks are no-ops. A draggable wrapper moves its shape along with
/// the pointer while clicked.
pub struct Interactive {
    pub shape: Shape,
    pub draggable: bool,
    on_click: Option<PointerCallback>,
    on_release: Option<PointerCallback>,
    on_move: Option<PointerCallback>,
    on_hover: Option<HoverCallback>,
    is_clicked: bool,
    is_hovered: bool,
}

impl std::fmt::Debug for Interactive {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Interactive")
            .field("shape", &self.shape)
            .field("draggable", &self.draggable)
            .field("is_clicked", &self.is_clicked)
            .field("is_hovered", &self.is_hovered)
            .finish_non_exhaustive() // callbacks are opaque
    }
}

impl Interactive {
    pub fn new(shape: Shape) -> Self {
        Self {
            shape,
            draggable: false,
            on_click: None,
            on_release: None,
            on_move: None,
            on_hover: None,
            is_clicked: false,
            is_hovered: false,
        }
    }

    /// A wrapper whose shape follows the pointer while clicked.
    pub fn movable(shape: Shape) -> Self {
        Self {
            draggable: true,
            ..Self::new(shape)
        }
    }

    pub fn on_click(mut self, callback: impl FnMut(Vec2, Vec2) + 'static) -> Self {
        self.set_on_click(callback);
        self
    }

    pub fn on_release(mut self, callback: impl FnMut(Vec2, Vec2) + 'static) -> Self {
        self.set_on_release(callback);
        self
    }

    pub fn on_move(mut self, callback: impl FnMut(Vec2, Vec2) + 'static) -> Self {
        self.set_on_move(callback);
        self
    }

    pub fn on_hover(mut self, callback: impl FnMut(Vec2, Vec2, bool, bool) + 'static) -> Self {
        self.set_on_hover(callback);
        self
    }

    pub fn set_on_click(&mut self, callback: impl FnMut(Vec2, Vec2) + 'static) {
        self.on_click = Some(Box::new(callback));
    }

    pub fn set_on_release(&mut self, callback: impl FnMut(Vec2, Vec2) + 'static) {
        self.on_release = Some(Box::new(callback));
    }

    pub fn set_on_move(&mut self, callback: impl FnMut(Vec2, Vec2) + 'static) {
        self.on_move = Some(Box::new(callback));
    }

    pub fn set_on_hover(&mut self, callback: impl FnMut(Vec2, Vec2, bool, bool) + 'static) {
        self.on_hover = Some(Box::new(callback));
    }

    pub fn is_clicked(&self) -> bool {
        self.is_clicked
    }

    pub fn is_hovered(&self) -> bool {
        self.is_hovered
    }

    pub fn state(&self) -> InteractionState {
        if self.is_clicked {
            InteractionState::Clicked
        } else if self.is_hovered {
            InteractionState::Hovered
        } else {
            InteractionState::Idle
        }
    }

    /// Hit test that logs and swallows shape errors, so one broken element
    /// cannot stall the others.
    fn hits(&self, pos: Vec2, scale: f32) -> bool {
        match self.shape.hit_test(pos, scale) {
            Ok(hit) => hit,
            Err(err) => {
                error!("Hit test failed for {:?}: {}", self.shape.kind(), err);
                false
            }
        }
    }

    /// Handles a press. Returns true when the press hit this element and it
    /// took the click.
    pub(crate) fn handle_press(&mut self, pos: Vec2, old_pos: Vec2, scale: f32) -> bool {
        if !self.hits(pos, scale) {
            return false;
        }
        self.is_clicked = true;
        if let Some(callback) = self.on_click.as_mut() {
            callback(pos, old_pos);
        }
        true
    }

    pub(crate) fn handle_release(&mut self, pos: Vec2, old_pos: Vec2) {
        if self.is_clicked {
            if let Some(callback) = self.on_release.as_mut() {
                callback(pos, old_pos);
            }
        }
        self.is_clicked = false;
    }

    pub(crate) fn handle_move(&mut self, pos: Vec2, old_pos: Vec2, scale: f32) {
        let was_inside = self.hits(old_pos, scale);
        let is_inside = self.hits(pos, scale);

        match (was_inside, is_inside) {
            (true, false) => self.hover(pos, old_pos, false, true),
            (false, true) => self.hover(pos, old_pos, true, false),
            (true, true) => self.hover(pos, old_pos, false, false),
            (false, false) => {}
        }
        self.is_hovered = is_inside;

        if self.is_clicked {
            if let Some(callback) = self.on_move.as_mut() {
                callback(pos, old_pos);
            }
            if self.draggable {
                debug!("Dragging {} by {:?}", self.shape.kind(), pos - old_pos);
                self.shape.translate_origin(pos - old_pos);
            }
        }
    }

    fn hover(&mut self, pos: Vec2, old_pos: Vec2, entered: bool, exited: bool) {
        if let Some(callback) = self.on_hover.as_mut() {
            callback(pos, old_pos, entered, exited);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::factory;
    use egui::vec2;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_hover_enter_stay_exit() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = log.clone();
        let mut wrapper = Interactive::new(factory::circle(vec2(0.0, 0.0), 1.0))
            .on_hover(move |_, _, entered, exited| sink.borrow_mut().push((entered, exited)));

        wrapper.handle_move(vec2(0.5, 0.0), vec2(2.0, 0.0), 1.0);
        assert_eq!(wrapper.state(), InteractionState::Hovered);
        wrapper.handle_move(vec2(0.2, 0.0), vec2(0.5, 0.0), 1.0);
        assert!(wrapper.is_hovered());
        wrapper.handle_move(vec2(3.0, 0.0), vec2(0.2, 0.0), 1.0);
        assert_eq!(wrapper.state(), InteractionState::Idle);
        // Outside both times: no callback.
        wrapper.handle_move(vec2(4.0, 0.0), vec2(3.0, 0.0), 1.0);

        assert_eq!(*log.borrow(), vec![(true, false), (false, false), (false, true)]);
    }

    #[test]
    fn test_release_without_click_is_silent() {
        let released = Rc::new(RefCell::new(0));
        let counter = released.clone();
        let mut wrapper = Interactive::new(factory::circle(vec2(0.0, 0.0), 1.0))
            .on_release(move |_, _| *counter.borrow_mut() += 1);

        wrapper.handle_release(vec2(0.0, 0.0), vec2(0.0, 0.0));
        assert_eq!(*released.borrow(), 0);

        assert!(wrapper.handle_press(vec2(0.0, 0.0), vec2(0.0, 0.0), 1.0));
        wrapper.handle_release(vec2(5.0, 5.0), vec2(0.0, 0.0));
        assert_eq!(*released.borrow(), 1);
        assert!(!wrapper.is_clicked());
    }

    #[test]
    fn test_non_draggable_shape_stays_put() {
        let mut wrapper = Interactive::new(factory::circle(vec2(0.0, 0.0), 1.0));
        assert!(wrapper.handle_press(vec2(0.0, 0.0), vec2(0.0, 0.0), 1.0));
        wrapper.handle_move(vec2(0.5, 0.5), vec2(0.0, 0.0), 1.0);
        assert_eq!(wrapper.shape.get_origin(), vec2(0.0, 0.0));
        assert_eq!(wrapper.state(), InteractionState::Clicked);
    }
}

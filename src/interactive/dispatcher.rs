use egui::{Painter, Vec2};
use log::{debug, error, info};

use super::Interactive;
use crate::error::PlaygroundError;
use crate::id_generator::{ElementId, generate_id};
use crate::input::InputEvent;
use crate::viewport::{ScreenTransform, Viewport};

/// Routes pointer events to interactive elements.
///
/// Elements are kept in dispatch order, front first. Presses go to the first
/// element hit, which is then moved to the front. Moves and releases reach
/// every element. Drawing runs back to front, so the front element ends up on
/// top.
pub struct Dispatcher<T: ScreenTransform = Viewport> {
    elements: Vec<(ElementId, Interactive)>,
    transform: T,
    /// Last pointer position, world space.
    old_pos: Vec2,
}

impl<T: ScreenTransform> std::fmt::Debug for Dispatcher<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("elements", &self.elements)
            .field("old_pos", &self.old_pos)
            .finish_non_exhaustive()
    }
}

impl Default for Dispatcher<Viewport> {
    fn default() -> Self {
        Self::new(Viewport::default())
    }
}

impl<T: ScreenTransform> Dispatcher<T> {
    pub fn new(transform: T) -> Self {
        Self {
            elements: Vec::new(),
            transform,
            old_pos: Vec2::ZERO,
        }
    }

    /// Registers an element at the back of the dispatch order.
    pub fn add(&mut self, element: Interactive) -> ElementId {
        let id = generate_id();
        info!("Registered {} element {}", element.shape.kind(), id);
        self.elements.push((id, element));
        id
    }

    pub fn remove(&mut self, id: ElementId) -> Result<Interactive, PlaygroundError> {
        let index = self.index_of(id)?;
        Ok(self.elements.remove(index).1)
    }

    pub fn get(&self, id: ElementId) -> Result<&Interactive, PlaygroundError> {
        let index = self.index_of(id)?;
        Ok(&self.elements[index].1)
    }

    pub fn get_mut(&mut self, id: ElementId) -> Result<&mut Interactive, PlaygroundError> {
        let index = self.index_of(id)?;
        Ok(&mut self.elements[index].1)
    }

    fn index_of(&self, id: ElementId) -> Result<usize, PlaygroundError> {
        self.elements
            .iter()
            .position(|(element_id, _)| *element_id == id)
            .ok_or(PlaygroundError::UnknownElement(id))
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Element ids in dispatch order, front first.
    pub fn ids(&self) -> Vec<ElementId> {
        self.elements.iter().map(|(id, _)| *id).collect()
    }

    /// Elements in dispatch order, front first.
    pub fn iter(&self) -> impl Iterator<Item = &Interactive> {
        self.elements.iter().map(|(_, element)| element)
    }

    pub fn transform(&self) -> &T {
        &self.transform
    }

    pub fn transform_mut(&mut self) -> &mut T {
        &mut self.transform
    }

    /// Last pointer position seen, in world space.
    pub fn old_pos(&self) -> Vec2 {
        self.old_pos
    }

    /// Converts a device-space event to world space and dispatches it.
    pub fn handle_event(&mut self, event: &InputEvent) {
        let pos = self.transform.to_world(event.position());
        debug!("Dispatching {:?} at world {:?}", event, pos);
        match event {
            InputEvent::PointerDown { .. } => self.press(pos),
            InputEvent::PointerUp { .. } => self.release(pos),
            InputEvent::PointerMove { .. } => self.pointer_move(pos),
        }
    }

    /// Dispatches one frame's events in order.
    pub fn handle_events(&mut self, events: &[InputEvent]) {
        for event in events {
            self.handle_event(event);
        }
    }

    /// Press at a world-space position.
    ///
    /// The first element hit takes the click and moves to the front. Any other
    /// element still clicked from an earlier press, whose release never
    /// arrived, is released first and gets its `on_release` callback.
    pub fn press(&mut self, pos: Vec2) {
        let scale = self.transform.scale();
        let old_pos = self.old_pos;

        let clicked = self
            .elements
            .iter_mut()
            .position(|(_, element)| element.handle_press(pos, old_pos, scale));

        if let Some(index) = clicked {
            // At most one element is clicked at a time
            for (i, (id, element)) in self.elements.iter_mut().enumerate() {
                if i != index && element.is_clicked() {
                    debug!("Releasing stale click on element {}", id);
                    element.handle_release(pos, old_pos);
                }
            }

            let entry = self.elements.remove(index);
            info!("Element {} took focus", entry.0);
            self.elements.insert(0, entry);
        }
        self.old_pos = pos;
    }

    /// Release at a world-space position. Clears the click on every element.
    pub fn release(&mut self, pos: Vec2) {
        let old_pos = self.old_pos;
        for (_, element) in &mut self.elements {
            element.handle_release(pos, old_pos);
        }
        self.old_pos = pos;
    }

    /// Pointer move to a world-space position.
    pub fn pointer_move(&mut self, pos: Vec2) {
        let scale = self.transform.scale();
        let old_pos = self.old_pos;
        for (_, element) in &mut self.elements {
            element.handle_move(pos, old_pos, scale);
        }
        self.old_pos = pos;
    }

    /// Draws every element back to front.
    pub fn draw(&self, painter: &Painter) {
        for (_, element) in self.elements.iter().rev() {
            element.shape.draw(painter, &self.transform);
        }
    }

    /// Intersection points of every ordered pair of distinct elements.
    ///
    /// Each pair is visited twice, so every point shows up at least twice.
    pub fn pairwise_intersections(&self) -> Vec<Vec2> {
        let scale = self.transform.scale();
        let mut points = Vec::new();

        for (i, (_, lhs)) in self.elements.iter().enumerate() {
            for (j, (_, rhs)) in self.elements.iter().enumerate() {
                if i == j {
                    continue;
                }
                match lhs.shape.intersect_with_scale(&rhs.shape, scale) {
                    Ok(Some(hits)) => points.extend(hits),
                    Ok(None) => {}
                    Err(err) => error!("Skipping pair {} / {}: {}", i, j, err),
                }
            }
        }

        points
    }
}

use egui::{Context, PointerButton, Pos2};

/// Pointer events in device (pixel) space.
///
/// Only the primary button is tracked.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Primary button was pressed
    PointerDown { position: Pos2 },
    /// Primary button was released
    PointerUp { position: Pos2 },
    /// Pointer moved, with or without the button held
    PointerMove { position: Pos2 },
}

impl InputEvent {
    pub fn position(&self) -> Pos2 {
        match *self {
            InputEvent::PointerDown { position }
            | InputEvent::PointerUp { position }
            | InputEvent::PointerMove { position } => position,
        }
    }
}

/// Turns a frame's raw egui input into [`InputEvent`]s.
#[derive(Debug, Default)]
pub struct InputHandler {
    last_pointer_pos: Option<Pos2>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last pointer position seen, if the pointer has been over the window.
    pub fn last_pointer_pos(&self) -> Option<Pos2> {
        self.last_pointer_pos
    }

    /// Collects this frame's pointer events in the order egui received them.
    pub fn process_input(&mut self, ctx: &Context) -> Vec<InputEvent> {
        let mut events = Vec::new();

        ctx.input(|input| {
            for event in &input.events {
                match *event {
                    egui::Event::PointerMoved(position) => {
                        // Skip repeats of the same position
                        if Some(position) != self.last_pointer_pos {
                            events.push(InputEvent::PointerMove { position });
                            self.last_pointer_pos = Some(position);
                        }
                    }
                    egui::Event::PointerButton {
                        pos,
                        button: PointerButton::Primary,
                        pressed,
                        ..
                    } => {
                        events.push(if pressed {
                            InputEvent::PointerDown { position: pos }
                        } else {
                            InputEvent::PointerUp { position: pos }
                        });
                        self.last_pointer_pos = Some(pos);
                    }
                    egui::Event::PointerGone => {
                        self.last_pointer_pos = None;
                    }
                    _ => {}
                }
            }
        });

        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{Modifiers, RawInput, pos2};

    fn run_frame(handler: &mut InputHandler, ctx: &Context, raw: RawInput) -> Vec<InputEvent> {
        let mut events = Vec::new();
        let _ = ctx.run(raw, |ctx| {
            events = handler.process_input(ctx);
        });
        events
    }

    fn button(pos: Pos2, button: PointerButton, pressed: bool) -> egui::Event {
        egui::Event::PointerButton {
            pos,
            button,
            pressed,
            modifiers: Modifiers::default(),
        }
    }

    #[test]
    fn test_events_keep_their_order() {
        let ctx = Context::default();
        let mut handler = InputHandler::new();

        let raw = RawInput {
            events: vec![
                egui::Event::PointerMoved(pos2(10.0, 10.0)),
                button(pos2(10.0, 10.0), PointerButton::Primary, true),
                egui::Event::PointerMoved(pos2(20.0, 15.0)),
                button(pos2(20.0, 15.0), PointerButton::Primary, false),
            ],
            ..Default::default()
        };

        let events = run_frame(&mut handler, &ctx, raw);
        assert_eq!(
            events,
            vec![
                InputEvent::PointerMove { position: pos2(10.0, 10.0) },
                InputEvent::PointerDown { position: pos2(10.0, 10.0) },
                InputEvent::PointerMove { position: pos2(20.0, 15.0) },
                InputEvent::PointerUp { position: pos2(20.0, 15.0) },
            ]
        );
        assert_eq!(handler.last_pointer_pos(), Some(pos2(20.0, 15.0)));
    }

    #[test]
    fn test_secondary_button_is_ignored() {
        let ctx = Context::default();
        let mut handler = InputHandler::new();

        let raw = RawInput {
            events: vec![button(pos2(5.0, 5.0), PointerButton::Secondary, true)],
            ..Default::default()
        };

        assert!(run_frame(&mut handler, &ctx, raw).is_empty());
    }

    #[test]
    fn test_repeated_position_is_not_a_move() {
        let ctx = Context::default();
        let mut handler = InputHandler::new();

        let raw = RawInput {
            events: vec![
                egui::Event::PointerMoved(pos2(1.0, 1.0)),
                egui::Event::PointerMoved(pos2(1.0, 1.0)),
            ],
            ..Default::default()
        };

        assert_eq!(run_frame(&mut handler, &ctx, raw).len(), 1);
    }
}

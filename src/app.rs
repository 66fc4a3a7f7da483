use egui::{Color32, Painter, Stroke, Vec2};

use crate::config::PlaygroundConfig;
use crate::input::InputHandler;
use crate::interactive::{Dispatcher, Interactive};
use crate::id_generator::ElementId;
use crate::shape::factory;
use crate::viewport::{ScreenTransform, Viewport};

/// Hosts a dispatcher inside an egui canvas.
///
/// Each frame it collects pointer events, dispatches them, then draws the
/// axes, the registered shapes and a marker on every pairwise intersection.
#[derive(Debug)]
pub struct PlaygroundApp {
    dispatcher: Dispatcher<Viewport>,
    input: InputHandler,
    config: PlaygroundConfig,
}

impl Default for PlaygroundApp {
    fn default() -> Self {
        Self::new(PlaygroundConfig::default())
    }
}

impl PlaygroundApp {
    pub fn new(config: PlaygroundConfig) -> Self {
        config.apply();
        let viewport = Viewport {
            scale: config.scale,
            ..Viewport::default()
        };
        Self {
            dispatcher: Dispatcher::new(viewport),
            input: InputHandler::new(),
            config,
        }
    }

    pub fn add(&mut self, element: Interactive) -> ElementId {
        self.dispatcher.add(element)
    }

    pub fn dispatcher(&self) -> &Dispatcher<Viewport> {
        &self.dispatcher
    }

    pub fn dispatcher_mut(&mut self) -> &mut Dispatcher<Viewport> {
        &mut self.dispatcher
    }

    pub fn config(&self) -> &PlaygroundConfig {
        &self.config
    }

    /// Runs one frame: input, dispatch, drawing.
    pub fn show(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                let (response, painter) =
                    ui.allocate_painter(ui.available_size(), egui::Sense::hover());
                self.dispatcher.transform_mut().rect = response.rect;

                let events = self.input.process_input(ctx);
                self.dispatcher.handle_events(&events);

                painter.rect_filled(response.rect, 0.0, self.config.background);
                self.draw_axes(&painter);
                self.dispatcher.draw(&painter);
                self.draw_intersections(&painter);
            });
    }

    fn draw_axes(&self, painter: &Painter) {
        let transform = self.dispatcher.transform();
        let s = transform.scale();
        let origin = transform.to_screen(Vec2::ZERO);
        let axes = [
            (Vec2::new(s, 0.0), Color32::RED),
            (Vec2::new(0.0, s), Color32::BLUE),
            (Vec2::new(0.0, -s), Color32::GREEN),
            (Vec2::new(-s, 0.0), Color32::BLACK),
        ];
        for (end, color) in axes {
            painter.line_segment([origin, transform.to_screen(end)], Stroke::new(1.0, color));
        }
    }

    fn draw_intersections(&self, painter: &Painter) {
        for point in self.dispatcher.pairwise_intersections() {
            factory::point(point)
                .with_color(self.config.intersection_color)
                .filled(true)
                .draw(painter, self.dispatcher.transform());
        }
    }
}

impl eframe::App for PlaygroundApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.show(ctx);
    }
}

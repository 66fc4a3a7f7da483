#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod config;
pub mod error;
pub mod geometry;
pub mod id_generator;
pub mod input;
pub mod interactive;
pub mod shape;
pub mod viewport;

pub use app::PlaygroundApp;
pub use config::PlaygroundConfig;
pub use error::PlaygroundError;
pub use geometry::Intersection;
pub use id_generator::ElementId;
pub use input::{InputEvent, InputHandler};
pub use interactive::{Dispatcher, InteractionState, Interactive};
pub use shape::{Geometry, Shape, ShapeKind};
pub use viewport::{ScreenTransform, Viewport};

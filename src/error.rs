use thiserror::Error;

use crate::id_generator::ElementId;
use crate::shape::ShapeKind;

/// Errors raised by the playground core.
#[derive(Debug, Error)]
pub enum PlaygroundError {
    /// No intersection routine exists for this pair of shapes
    #[error("no known way to intersect {lhs} with {rhs}")]
    UnsupportedPair { lhs: ShapeKind, rhs: ShapeKind },

    /// The dispatcher holds no element with this id
    #[error("no interactive element with id {0}")]
    UnknownElement(ElementId),

    /// Configuration could not be parsed
    #[error("invalid playground config: {0}")]
    Config(#[from] serde_json::Error),
}

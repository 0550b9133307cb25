#[cfg(feature = "serialization")]
use serde::{Deserialize, Serialize};

use crate::shape::ShapeKind;

/// Which shape a [`Sketchpad`](crate::Sketchpad) draws next.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum DrawMode {
    /// Draws a rectangle covering the canvas.
    Rectangle,
    /// Draws an ellipse inscribed in the canvas.
    Ellipse,
}

/// Each mode and the mode that follows it.
const TRANSITIONS: [(DrawMode, DrawMode); 2] = [
    (DrawMode::Rectangle, DrawMode::Ellipse),
    (DrawMode::Ellipse, DrawMode::Rectangle),
];

impl Default for DrawMode {
    fn default() -> Self {
        Self::INITIAL
    }
}

impl DrawMode {
    /// The mode drawn when a sketchpad first loads.
    pub const INITIAL: Self = Self::Rectangle;

    /// Returns the mode that follows this one.
    #[must_use]
    pub fn next(self) -> Self {
        TRANSITIONS
            .iter()
            .find(|(from, _)| *from == self)
            .map_or(Self::INITIAL, |(_, to)| *to)
    }

    /// Returns the shape this mode draws.
    #[must_use]
    pub const fn shape(self) -> ShapeKind {
        match self {
            Self::Rectangle => ShapeKind::Rectangle,
            Self::Ellipse => ShapeKind::Ellipse,
        }
    }
}

//! Offscreen rendering of filled and stroked 2d shapes.
//!
//! ```rust
//! use scribble::prelude::*;
//!
//! let image = render(&Canvas::default(), ShapeKind::Ellipse, &DrawStyle::default())?;
//! assert_eq!(image.dimensions(), (512, 512));
//! # Ok::<(), scribble::Error>(())
//! ```

#![forbid(unsafe_code)]
#![warn(
    clippy::cargo,
    missing_docs,
    clippy::nursery,
    clippy::pedantic,
    future_incompatible,
    rust_2018_idioms,
)]
#![allow(
    clippy::missing_errors_doc,
    clippy::option_if_let_else,
    clippy::module_name_repetitions,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss,
    clippy::float_cmp,
)]

mod canvas;
mod color;
mod draw_mode;
mod error;
/// Math types for 2d geometry.
pub mod math;
/// Rendering shapes into images.
pub mod renderer;
/// Types for describing shapes and how they are painted.
pub mod shape;
mod sketchpad;

// Re-exports
pub use image;
pub use lyon_tessellation;

pub use self::{
    canvas::Canvas,
    color::Color,
    draw_mode::DrawMode,
    error::{Dimension, Error},
    renderer::render,
    sketchpad::{ImageView, Sketchpad},
};

/// A collection of commonly used exports provided by this crate.
pub mod prelude {
    pub use super::{
        math::{Point, Raw, Rect, Scaled, ScreenScale, Size},
        renderer::{bounds, render},
        shape::{DrawStyle, Fill, Shape, ShapeKind, Stroke},
        Canvas, Color, DrawMode, ImageView, Sketchpad,
    };
}

/// Alias for [`std::result::Result`] where the error type is [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

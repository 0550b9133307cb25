use lyon_tessellation::StrokeOptions;

use crate::color::Color;

/// A shape stroke (outline) options. The stroke is centered on the shape's
/// outline, so half of `line_width` lands on each side of it.
#[derive(Default, Clone, Debug)]
pub struct Stroke {
    /// The color to stroke the shape's with.
    pub color: Color,
    /// The options for drawing the stroke. `options.line_width` is measured in
    /// the same unit as the shape it outlines.
    pub options: StrokeOptions,
}

impl Stroke {
    /// Creates a new instance using `color` with default options.
    #[must_use]
    pub fn new(color: Color) -> Self {
        Self {
            color,
            options: StrokeOptions::default(),
        }
    }

    /// Builder-style function. Sets `options` and return self.
    #[must_use]
    pub const fn with_options(mut self, options: StrokeOptions) -> Self {
        self.options = options;
        self
    }

    /// Builder-style function. Sets `options.line_width` and return self.
    #[must_use]
    pub const fn line_width(mut self, width: f32) -> Self {
        self.options.line_width = width;
        self
    }

    /// Returns the stroke's width.
    #[must_use]
    pub const fn width(&self) -> f32 {
        self.options.line_width
    }

    /// Returns true if stroking produces no visible outline.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.options.line_width <= 0.
    }

    pub(crate) fn scaled(mut self, scale: f32) -> Self {
        self.options.line_width *= scale;
        self
    }
}

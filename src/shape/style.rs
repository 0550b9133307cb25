use crate::{
    color::Color,
    error::Dimension,
    shape::{Fill, Stroke},
};

/// How a shape is painted: its interior fill and its outline stroke.
#[derive(Clone, Debug)]
pub struct DrawStyle {
    /// Paints the shape's interior.
    pub fill: Fill,
    /// Paints the shape's outline after the fill.
    pub stroke: Stroke,
}

impl Default for DrawStyle {
    /// A red fill with a black outline 10 points wide.
    fn default() -> Self {
        Self::new(
            Fill::new(Color::RED),
            Stroke::new(Color::BLACK).line_width(10.),
        )
    }
}

impl DrawStyle {
    /// Returns a style painting with `fill` and `stroke`.
    #[must_use]
    pub const fn new(fill: Fill, stroke: Stroke) -> Self {
        Self { fill, stroke }
    }

    /// Checks that the stroke width is non-negative and finite.
    pub fn validate(&self) -> crate::Result<()> {
        Dimension::LineWidth.require_non_negative(self.stroke.width())?;
        Ok(())
    }
}

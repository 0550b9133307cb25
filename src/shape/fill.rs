use lyon_tessellation::FillOptions;

use crate::color::Color;

/// Paint applied to the area a shape encloses. The fill is painted before
/// the stroke, so the inner half of a stroke covers the fill's edge.
#[derive(Default, Clone, Debug)]
pub struct Fill {
    /// The color painted over the shape's interior.
    pub color: Color,
    /// The tessellation options used to triangulate the interior.
    pub options: FillOptions,
}

impl Fill {
    /// Returns a fill of `color` with default tessellation options.
    #[must_use]
    pub fn new(color: Color) -> Self {
        Self {
            color,
            options: FillOptions::default(),
        }
    }

    /// Builder-style function. Sets `options` and return self.
    #[must_use]
    pub const fn with_options(mut self, options: FillOptions) -> Self {
        self.options = options;
        self
    }

    /// Builder-style function. Sets the maximum distance, in pixels, between
    /// a curved outline and the triangles approximating it.
    #[must_use]
    pub const fn tolerance(mut self, tolerance: f32) -> Self {
        self.options.tolerance = tolerance;
        self
    }

    /// Returns true if filling leaves every pixel unchanged.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.color.alpha() <= 0.
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn builders() {
        let fill = Fill::new(Color::RED);
        assert_relative_eq!(fill.options.tolerance, FillOptions::DEFAULT_TOLERANCE);
        assert!(!fill.is_empty());

        let fill = fill.tolerance(0.01);
        assert_relative_eq!(fill.options.tolerance, 0.01);
        assert_eq!(fill.color, Color::RED);
    }

    #[test]
    fn transparent_fill_is_empty() {
        assert!(Fill::new(Color::CLEAR_WHITE).is_empty());
        assert!(Fill::new(Color::BLUE.with_coverage(0.)).is_empty());
        assert!(!Fill::new(Color::BLUE.with_coverage(0.1)).is_empty());
    }
}

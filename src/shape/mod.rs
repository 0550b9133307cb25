mod fill;
mod geometry;
mod stroke;
mod style;

#[cfg(feature = "serialization")]
use serde::{Deserialize, Serialize};

pub use self::{
    fill::*,
    geometry::{Mesh, Triangles},
    stroke::*,
    style::*,
};
use self::geometry::ShapeGeometry;
use crate::math::{self, Raw, Rect, Scale, Scaled, Vector};

/// The kinds of shapes that can be rendered.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum ShapeKind {
    /// A rectangle covering its bounds.
    Rectangle,
    /// An ellipse inscribed in its bounds.
    Ellipse,
}

/// A shape's geometry paired with how to paint it.
#[derive(Default, Clone, Debug)]
pub struct Shape<S> {
    geometry: ShapeGeometry<S>,
    stroke: Option<Stroke>,
    fill: Option<Fill>,
}

impl<S> Shape<S> {
    /// Returns a `kind` shape occupying `bounds`.
    #[must_use]
    pub fn new(kind: ShapeKind, bounds: Rect<f32, S>) -> Self {
        match kind {
            ShapeKind::Rectangle => Self::rect(bounds),
            ShapeKind::Ellipse => Self::ellipse(bounds),
        }
    }

    /// Returns a rectangle covering `rect`. Rects with no area produce an
    /// empty shape.
    #[must_use]
    pub fn rect(rect: Rect<f32, S>) -> Self {
        Self::from_geometry(if math::is_degenerate(&rect) {
            ShapeGeometry::Empty
        } else {
            ShapeGeometry::Rect(rect)
        })
    }

    /// Returns the ellipse inscribed in `rect`. Rects with no area produce an
    /// empty shape.
    #[must_use]
    pub fn ellipse(rect: Rect<f32, S>) -> Self {
        Self::from_geometry(if math::is_degenerate(&rect) {
            ShapeGeometry::Empty
        } else {
            ShapeGeometry::Ellipse {
                center: rect.center(),
                radii: Vector::new(rect.size.width / 2., rect.size.height / 2.),
            }
        })
    }

    fn from_geometry(geometry: ShapeGeometry<S>) -> Self {
        Self {
            geometry,
            stroke: None,
            fill: None,
        }
    }

    /// Builder-style function. Sets the fill and returns self.
    #[must_use]
    pub fn fill(mut self, fill: Fill) -> Self {
        self.fill = Some(fill);
        self
    }

    /// Builder-style function. Sets the stroke and returns self.
    #[must_use]
    pub fn stroke(mut self, stroke: Stroke) -> Self {
        self.stroke = Some(stroke);
        self
    }

    /// Returns true if the shape has no geometry to paint.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self.geometry, ShapeGeometry::Empty)
    }
}

impl Shape<Raw> {
    /// Tessellates the shape into one mesh per paint operation, in the order
    /// they are painted: the fill, then the stroke.
    pub fn build(&self) -> crate::Result<Vec<Mesh>> {
        let mut meshes = Vec::with_capacity(2);
        if let Some(fill) = self.fill.as_ref().filter(|fill| !fill.is_empty()) {
            meshes.push(Mesh {
                color: fill.color,
                triangles: self.geometry.fill(&fill.options)?,
            });
        }

        if let Some(stroke) = self.stroke.as_ref().filter(|stroke| !stroke.is_empty()) {
            meshes.push(Mesh {
                color: stroke.color,
                triangles: self.geometry.stroke(&stroke.options)?,
            });
        }

        Ok(meshes)
    }
}

impl std::ops::Mul<Scale<f32, Scaled, Raw>> for Shape<Scaled> {
    type Output = Shape<Raw>;

    fn mul(self, scale: Scale<f32, Scaled, Raw>) -> Self::Output {
        Self::Output {
            geometry: self.geometry * scale,
            fill: self.fill,
            stroke: self.stroke.map(|stroke| stroke.scaled(scale.get())),
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::{
        color::Color,
        math::{Point, ScreenScale, Size},
    };

    fn bounds() -> Rect<f32, Scaled> {
        Rect::new(Point::new(0., 0.), Size::new(100., 50.))
    }

    #[test]
    fn ellipse_geometry() {
        let shape = Shape::new(ShapeKind::Ellipse, bounds());
        match shape.geometry {
            ShapeGeometry::Ellipse { center, radii } => {
                assert_relative_eq!(center.x, 50.);
                assert_relative_eq!(center.y, 25.);
                assert_relative_eq!(radii.x, 50.);
                assert_relative_eq!(radii.y, 25.);
            }
            other => unreachable!("unexpected geometry {:?}", other),
        }
    }

    #[test]
    fn degenerate_bounds_are_empty() {
        let flat = Rect::<f32, Scaled>::new(Point::new(0., 0.), Size::new(10., 0.));
        assert!(Shape::rect(flat).is_empty());
        assert!(Shape::ellipse(flat).is_empty());
        assert!(!Shape::rect(bounds()).is_empty());
    }

    #[test]
    fn fill_then_stroke() {
        let shape = Shape::new(ShapeKind::Rectangle, bounds())
            .fill(Fill::new(Color::RED))
            .stroke(Stroke::new(Color::BLACK).line_width(4.))
            * ScreenScale::new(1.);
        let meshes = shape.build().unwrap();
        assert_eq!(meshes.len(), 2);
        assert_eq!(meshes[0].color, Color::RED);
        assert_eq!(meshes[1].color, Color::BLACK);
        assert!(meshes.iter().all(|mesh| mesh.triangles().count() > 0));
    }

    #[test]
    fn empty_stroke_is_skipped() {
        let shape = Shape::new(ShapeKind::Ellipse, bounds())
            .fill(Fill::new(Color::RED))
            .stroke(Stroke::new(Color::BLACK).line_width(0.))
            * ScreenScale::new(1.);
        let meshes = shape.build().unwrap();
        assert_eq!(meshes.len(), 1);
        assert_eq!(meshes[0].color, Color::RED);
    }

    #[test]
    fn transparent_fill_is_skipped() {
        let shape = Shape::new(ShapeKind::Rectangle, bounds())
            .fill(Fill::new(Color::CLEAR_BLACK))
            .stroke(Stroke::new(Color::BLACK).line_width(2.))
            * ScreenScale::new(1.);
        let meshes = shape.build().unwrap();
        assert_eq!(meshes.len(), 1);
        assert_eq!(meshes[0].color, Color::BLACK);
    }

    #[test]
    fn scaling_scales_the_stroke() {
        let shape = Shape::new(ShapeKind::Rectangle, bounds())
            .stroke(Stroke::new(Color::BLACK).line_width(3.))
            * ScreenScale::new(2.);
        assert_relative_eq!(shape.stroke.unwrap().width(), 6.);
        match shape.geometry {
            ShapeGeometry::Rect(rect) => assert_relative_eq!(rect.size.width, 200.),
            other => unreachable!("unexpected geometry {:?}", other),
        }
    }

    #[test]
    fn rectangle_vertices_stay_in_bounds() {
        let shape = Shape::rect(bounds()).fill(Fill::new(Color::RED)) * ScreenScale::new(1.);
        let meshes = shape.build().unwrap();
        for corner in meshes[0].triangles().flatten() {
            assert!((0. ..=100.).contains(&corner.x));
            assert!((0. ..=50.).contains(&corner.y));
        }
    }
}

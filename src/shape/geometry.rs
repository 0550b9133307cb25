use lyon_tessellation::{
    math::Angle, path::Winding, BuffersBuilder, FillOptions, FillTessellator, FillVertex,
    StrokeOptions, StrokeTessellator, StrokeVertex, VertexBuffers,
};

use crate::{
    color::Color,
    math::{lyon_box, lyon_point, lyon_vector, Point, Raw, Rect, Scale, Vector},
    Error,
};

/// Triangles produced by tessellating a shape, in pixel coordinates.
pub type Triangles = VertexBuffers<lyon_tessellation::math::Point, u32>;

/// A single color painted over a set of triangles.
#[derive(Debug)]
pub struct Mesh {
    /// The color every triangle is painted with.
    pub color: Color,
    /// The tessellated triangles.
    pub triangles: Triangles,
}

impl Mesh {
    /// Iterates over the corners of each triangle.
    pub fn triangles(&self) -> impl Iterator<Item = [lyon_tessellation::math::Point; 3]> + '_ {
        self.triangles.indices.chunks_exact(3).map(move |corners| {
            [
                self.triangles.vertices[corners[0] as usize],
                self.triangles.vertices[corners[1] as usize],
                self.triangles.vertices[corners[2] as usize],
            ]
        })
    }
}

#[derive(Clone, Debug)]
pub enum ShapeGeometry<S> {
    Empty,
    Rect(Rect<f32, S>),
    Ellipse {
        center: Point<f32, S>,
        radii: Vector<f32, S>,
    },
}

impl<S> Default for ShapeGeometry<S> {
    fn default() -> Self {
        Self::Empty
    }
}

impl ShapeGeometry<Raw> {
    pub fn fill(&self, options: &FillOptions) -> crate::Result<Triangles> {
        let mut triangles = Triangles::new();
        {
            let mut output =
                BuffersBuilder::new(&mut triangles, |vertex: FillVertex<'_>| vertex.position());
            let mut tessellator = FillTessellator::new();
            match self {
                Self::Empty => {}
                Self::Rect(rect) => {
                    tessellator
                        .tessellate_rectangle(&lyon_box(rect), options, &mut output)
                        .map_err(Error::Tessellation)?;
                }
                Self::Ellipse { center, radii } => {
                    tessellator
                        .tessellate_ellipse(
                            lyon_point(*center),
                            lyon_vector(*radii),
                            Angle::zero(),
                            Winding::Positive,
                            options,
                            &mut output,
                        )
                        .map_err(Error::Tessellation)?;
                }
            }
        }
        Ok(triangles)
    }

    pub fn stroke(&self, options: &StrokeOptions) -> crate::Result<Triangles> {
        let mut triangles = Triangles::new();
        {
            let mut output = BuffersBuilder::new(&mut triangles, |vertex: StrokeVertex<'_, '_>| {
                vertex.position()
            });
            let mut tessellator = StrokeTessellator::new();
            match self {
                Self::Empty => {}
                Self::Rect(rect) => {
                    tessellator
                        .tessellate_rectangle(&lyon_box(rect), options, &mut output)
                        .map_err(Error::Tessellation)?;
                }
                Self::Ellipse { center, radii } => {
                    tessellator
                        .tessellate_ellipse(
                            lyon_point(*center),
                            lyon_vector(*radii),
                            Angle::zero(),
                            Winding::Positive,
                            options,
                            &mut output,
                        )
                        .map_err(Error::Tessellation)?;
                }
            }
        }
        Ok(triangles)
    }
}

impl<Src, Dst> std::ops::Mul<Scale<f32, Src, Dst>> for ShapeGeometry<Src> {
    type Output = ShapeGeometry<Dst>;

    fn mul(self, rhs: Scale<f32, Src, Dst>) -> Self::Output {
        match self {
            Self::Empty => Self::Output::Empty,
            Self::Rect(rect) => Self::Output::Rect(rect * rhs),
            Self::Ellipse { center, radii } => Self::Output::Ellipse {
                center: center * rhs,
                radii: radii * rhs,
            },
        }
    }
}

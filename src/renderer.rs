use image::RgbaImage;

use crate::{
    canvas::Canvas,
    math::{self, Rect},
    shape::{DrawStyle, Shape, ShapeKind},
};

mod raster;
use raster::Raster;

/// Returns the rectangle, in points, that a `kind` shape painted with `style`
/// is built from.
///
/// Rectangles cover the whole canvas. Ellipses are inset by half of the
/// stroke width on every edge so that the outer half of the stroke, which
/// straddles the outline, stays on the canvas.
pub fn bounds(canvas: &Canvas, kind: ShapeKind, style: &DrawStyle) -> crate::Result<Rect> {
    canvas.validate()?;
    style.validate()?;

    let bounds = canvas.bounds();
    Ok(match kind {
        ShapeKind::Rectangle => bounds,
        ShapeKind::Ellipse => math::inset(bounds, style.stroke.width() / 2.),
    })
}

/// Renders a `kind` shape onto a transparent `canvas`, filling it and then
/// stroking its outline with `style`.
///
/// The returned image is `canvas.pixel_size()` pixels. Everything outside of
/// the canvas is clipped. Rendering has no side effects, so identical inputs
/// produce identical images.
///
/// # Errors
///
/// - [`Error::InvalidDimension`](crate::Error::InvalidDimension) if the
///   canvas size or scale isn't positive, if either side of the image would
///   exceed [`Canvas::MAX_PIXEL_DIMENSION`] pixels, or if the stroke width is
///   negative.
/// - [`Error::InvalidSampleCount`](crate::Error::InvalidSampleCount) if the
///   canvas sample count isn't supported.
/// - [`Error::Tessellation`](crate::Error::Tessellation) if the shape can't be
///   tessellated.
pub fn render(canvas: &Canvas, kind: ShapeKind, style: &DrawStyle) -> crate::Result<RgbaImage> {
    let size = canvas.pixel_size()?;
    let span = tracing::debug_span!("render", ?kind, width = size.width, height = size.height);
    let _entered = span.enter();

    let bounds = bounds(canvas, kind, style)?;
    let shape = Shape::new(kind, bounds)
        .fill(style.fill.clone())
        .stroke(style.stroke.clone())
        * canvas.screen_scale();
    if shape.is_empty() {
        tracing::debug!("shape has no area, leaving canvas empty");
    }

    let meshes = shape.build()?;
    let mut raster = Raster::new(size, canvas.samples_per_axis());
    for mesh in &meshes {
        tracing::trace!(
            vertices = mesh.triangles.vertices.len(),
            indices = mesh.triangles.indices.len(),
            "painting mesh"
        );
        raster.paint(mesh);
    }

    Ok(raster.into_image())
}

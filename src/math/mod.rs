#[cfg(feature = "serialization")]
use serde::{Deserialize, Serialize};

/// A type representing a width and height.
pub type Size<T = f32, Unit = Scaled> = euclid::Size2D<T, Unit>;
/// A type representing an x and y coordinate.
pub type Point<T = f32, Unit = Scaled> = euclid::Point2D<T, Unit>;
/// A type representing a vector with magnitudes x and y.
pub type Vector<T = f32, Unit = Scaled> = euclid::Vector2D<T, Unit>;
/// A type representing a [`Point`] and [`Size`].
pub type Rect<T = f32, Unit = Scaled> = euclid::Rect<T, Unit>;
pub use euclid::Scale;
/// The scale used to convert between [`Scaled`] points and [`Raw`] pixels.
pub type ScreenScale = Scale<f32, Scaled, Raw>;

/// A unit representing physical pixels of a rendered image.
#[derive(Clone, Copy, Debug, Default)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Raw;

/// A unit representing device-independent points. One point covers
/// `scale` pixels in a rendered image.
#[derive(Clone, Copy, Debug, Default)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Scaled;

/// Shrinks `rect` by `amount` on every edge. Negative amounts grow it. The
/// result may have a negative size if `amount` exceeds half of either side.
#[must_use]
pub fn inset<U>(rect: Rect<f32, U>, amount: f32) -> Rect<f32, U> {
    Rect::new(
        Point::new(rect.origin.x + amount, rect.origin.y + amount),
        Size::new(
            rect.size.width - amount * 2.,
            rect.size.height - amount * 2.,
        ),
    )
}

/// Returns true if `rect` covers no area.
#[must_use]
pub fn is_degenerate<U>(rect: &Rect<f32, U>) -> bool {
    !(rect.size.width > 0. && rect.size.height > 0.)
}

pub(crate) fn lyon_point<U>(point: Point<f32, U>) -> lyon_tessellation::math::Point {
    lyon_tessellation::math::point(point.x, point.y)
}

pub(crate) fn lyon_vector<U>(vector: Vector<f32, U>) -> lyon_tessellation::math::Vector {
    lyon_tessellation::math::vector(vector.x, vector.y)
}

pub(crate) fn lyon_box<U>(rect: &Rect<f32, U>) -> lyon_tessellation::math::Box2D {
    lyon_tessellation::math::Box2D::new(
        lyon_tessellation::math::point(rect.min_x(), rect.min_y()),
        lyon_tessellation::math::point(rect.max_x(), rect.max_y()),
    )
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn inset_shrinks_every_edge() {
        let bounds = Rect::<f32, Scaled>::new(Point::new(0., 0.), Size::new(512., 512.));
        let inset = inset(bounds, 5.);
        assert_relative_eq!(inset.min_x(), 5.);
        assert_relative_eq!(inset.min_y(), 5.);
        assert_relative_eq!(inset.max_x(), 507.);
        assert_relative_eq!(inset.max_y(), 507.);
        assert_relative_eq!(inset.size.width, 502.);
        assert_eq!(inset.center(), bounds.center());
    }

    #[test]
    fn degenerate_rects() {
        let bounds = Rect::<f32, Scaled>::new(Point::new(0., 0.), Size::new(10., 4.));
        assert!(!is_degenerate(&bounds));
        assert!(is_degenerate(&inset(bounds, 2.)));
        assert!(is_degenerate(&inset(bounds, 3.)));
        assert!(!is_degenerate(&inset(bounds, 1.9)));
    }

    #[test]
    fn scale_to_pixels() {
        let bounds = Rect::<f32, Scaled>::new(Point::new(1., 2.), Size::new(3., 4.));
        let pixels = bounds * ScreenScale::new(2.);
        assert_relative_eq!(pixels.min_x(), 2.);
        assert_relative_eq!(pixels.min_y(), 4.);
        assert_relative_eq!(pixels.size.width, 6.);
        assert_relative_eq!(pixels.size.height, 8.);
    }

    #[test]
    fn lyon_conversions() {
        let rect = Rect::<f32, Raw>::new(Point::new(1., 2.), Size::new(3., 4.));
        let lyon = lyon_box(&rect);
        assert_relative_eq!(lyon.min.x, 1.);
        assert_relative_eq!(lyon.max.y, 6.);
    }
}

use approx::relative_eq;
use palette::{rgb::Srgba, Component, IntoComponent, Shade, Srgb};
#[cfg(feature = "serialization")]
use serde::{Deserialize, Serialize};

/// A RGBA color with f32 components in the range `0.0..=1.0`. The color
/// channels are not premultiplied by alpha.
#[derive(Clone, Debug, Copy, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Color {
    red: f32,
    green: f32,
    blue: f32,
    alpha: f32,
}

impl Default for Color {
    fn default() -> Self {
        Self::CLEAR_BLACK
    }
}

impl<U: Component + IntoComponent<f32>> From<Srgba<U>> for Color {
    fn from(color: Srgba<U>) -> Self {
        let color = color.into_format::<_, f32>();
        Self::new(
            color.color.red,
            color.color.green,
            color.color.blue,
            color.alpha,
        )
    }
}

impl<U: Component + IntoComponent<f32>> From<Srgb<U>> for Color {
    fn from(color: Srgb<U>) -> Self {
        let color = color.into_format::<f32>();
        Self::new(color.red, color.green, color.blue, 1.)
    }
}

impl From<Color> for Srgba {
    fn from(color: Color) -> Self {
        Self::new(color.red, color.green, color.blue, color.alpha)
    }
}

impl From<Color> for image::Rgba<u8> {
    fn from(color: Color) -> Self {
        let clamped = Srgba::new(
            color.red.clamp(0., 1.),
            color.green.clamp(0., 1.),
            color.blue.clamp(0., 1.),
            color.alpha.clamp(0., 1.),
        );
        let pixel = clamped.into_format::<u8, u8>();
        Self([
            pixel.color.red,
            pixel.color.green,
            pixel.color.blue,
            pixel.alpha,
        ])
    }
}

impl Color {
    /// Creates a color from its components.
    #[must_use]
    pub const fn new(red: f32, green: f32, blue: f32, alpha: f32) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Lightens the color by `amount`.
    #[must_use]
    pub fn lighten(self, amount: f32) -> Self {
        let color: Srgba = self.into();
        let linear = color.into_linear();
        Srgba::from_linear(linear.lighten(amount)).into()
    }

    /// Darkens the color by `amount`.
    #[must_use]
    pub fn darken(self, amount: f32) -> Self {
        let color: Srgba = self.into();
        let linear = color.into_linear();
        Srgba::from_linear(linear.darken(amount)).into()
    }

    /// Returns the red component.
    #[must_use]
    pub const fn red(&self) -> f32 {
        self.red
    }

    /// Returns the green component.
    #[must_use]
    pub const fn green(&self) -> f32 {
        self.green
    }

    /// Returns the blue component.
    #[must_use]
    pub const fn blue(&self) -> f32 {
        self.blue
    }

    /// Returns the alpha component.
    #[must_use]
    pub const fn alpha(&self) -> f32 {
        self.alpha
    }

    /// Returns the components as `[red, green, blue, alpha]`.
    #[must_use]
    pub const fn rgba(&self) -> [f32; 4] {
        [self.red, self.green, self.blue, self.alpha]
    }

    /// Returns this color with its alpha multiplied by `coverage`.
    #[must_use]
    pub fn with_coverage(self, coverage: f32) -> Self {
        Self {
            alpha: self.alpha * coverage,
            ..self
        }
    }

    /// Composites `self` on top of `destination` using the source-over
    /// operator.
    #[must_use]
    pub fn over(self, destination: Self) -> Self {
        let alpha = self.alpha + destination.alpha * (1. - self.alpha);
        if relative_eq!(alpha, 0.) {
            return Self::CLEAR_BLACK;
        }

        let blend = |source: f32, dest: f32| {
            (source * self.alpha + dest * destination.alpha * (1. - self.alpha)) / alpha
        };
        Self {
            red: blend(self.red, destination.red),
            green: blend(self.green, destination.green),
            blue: blend(self.blue, destination.blue),
            alpha,
        }
    }
}

/// Equivalent to the [CSS color keywords](https://developer.mozilla.org/en-US/docs/Web/CSS/color_value) of the same name.
#[allow(missing_docs)]
impl Color {
    pub const AQUA: Self = Self::new(0., 1., 1., 1.);
    pub const BLACK: Self = Self::new(0., 0., 0., 1.);
    pub const BLUE: Self = Self::new(0., 0., 1., 1.);
    pub const CLEAR_BLACK: Self = Self::new(0., 0., 0., 0.);
    pub const CLEAR_WHITE: Self = Self::new(1., 1., 1., 0.);
    pub const CYAN: Self = Self::new(0., 1., 1., 1.);
    pub const FUCHSIA: Self = Self::new(1., 0., 1., 1.);
    pub const GRAY: Self = Self::new(0.501_960_8, 0.501_960_8, 0.501_960_8, 1.);
    pub const GREEN: Self = Self::new(0., 0.501_960_8, 0., 1.);
    pub const LIME: Self = Self::new(0., 1., 0., 1.);
    pub const MAGENTA: Self = Self::new(1., 0., 1., 1.);
    pub const MAROON: Self = Self::new(0.501_960_8, 0., 0., 1.);
    pub const NAVY: Self = Self::new(0., 0., 0.501_960_8, 1.);
    pub const OLIVE: Self = Self::new(0.501_960_8, 0.501_960_8, 0., 1.);
    pub const PURPLE: Self = Self::new(0.501_960_8, 0., 0.501_960_8, 1.);
    pub const RED: Self = Self::new(1., 0., 0., 1.);
    pub const SILVER: Self = Self::new(0.752_941_2, 0.752_941_2, 0.752_941_2, 1.);
    pub const TEAL: Self = Self::new(0., 0.501_960_8, 0.501_960_8, 1.);
    pub const WHITE: Self = Self::new(1., 1., 1., 1.);
    pub const YELLOW: Self = Self::new(1., 1., 0., 1.);
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn to_pixel() {
        assert_eq!(image::Rgba::from(Color::RED), image::Rgba([255, 0, 0, 255]));
        assert_eq!(
            image::Rgba::from(Color::CLEAR_BLACK),
            image::Rgba([0, 0, 0, 0])
        );
        assert_eq!(
            image::Rgba::from(Color::GRAY),
            image::Rgba([128, 128, 128, 255])
        );
        // Out of range components are clamped.
        assert_eq!(
            image::Rgba::from(Color::new(2., -1., 1., 1.)),
            image::Rgba([255, 0, 255, 255])
        );
    }

    #[test]
    fn opaque_over_replaces() {
        assert_eq!(Color::BLACK.over(Color::RED), Color::BLACK);
        assert_eq!(Color::RED.over(Color::CLEAR_BLACK), Color::RED);
    }

    #[test]
    fn clear_over_keeps_destination() {
        assert_eq!(Color::CLEAR_WHITE.over(Color::BLUE), Color::BLUE);
        assert_eq!(
            Color::CLEAR_WHITE.over(Color::CLEAR_BLACK),
            Color::CLEAR_BLACK
        );
    }

    #[test]
    fn partial_coverage() {
        let half_black = Color::BLACK.with_coverage(0.5);
        assert_relative_eq!(half_black.alpha(), 0.5);

        let blended = half_black.over(Color::WHITE);
        assert_relative_eq!(blended.red(), 0.5);
        assert_relative_eq!(blended.green(), 0.5);
        assert_relative_eq!(blended.blue(), 0.5);
        assert_relative_eq!(blended.alpha(), 1.);

        let stacked = half_black.over(Color::CLEAR_BLACK);
        assert_relative_eq!(stacked.alpha(), 0.5);
        assert_relative_eq!(stacked.red(), 0.);
    }

    #[test]
    fn palette_round_trip() {
        let srgb: Srgba = Color::TEAL.into();
        let color = Color::from(srgb);
        assert_relative_eq!(color.green(), Color::TEAL.green());
        assert_relative_eq!(color.alpha(), 1.);

        let opaque = Color::from(Srgb::new(255_u8, 0, 0));
        assert_eq!(opaque, Color::RED);
    }

    #[test]
    fn shading() {
        let white = Color::RED.lighten(1.);
        assert_relative_eq!(white.red(), 1., epsilon = 0.0001);
        assert_relative_eq!(white.green(), 1., epsilon = 0.0001);
        assert_relative_eq!(white.blue(), 1., epsilon = 0.0001);

        let black = Color::GRAY.with_coverage(0.5).darken(1.);
        assert_relative_eq!(black.red(), 0., epsilon = 0.0001);
        assert_relative_eq!(black.blue(), 0., epsilon = 0.0001);
        assert_relative_eq!(black.alpha(), 0.5);

        let unchanged = Color::TEAL.lighten(0.);
        assert_relative_eq!(unchanged.green(), Color::TEAL.green(), epsilon = 0.0001);
        assert_relative_eq!(unchanged.red(), 0., epsilon = 0.0001);
    }
}

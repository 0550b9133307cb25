#[cfg(feature = "serialization")]
use serde::{Deserialize, Serialize};

use crate::{
    error::Dimension,
    math::{Point, Raw, Rect, ScreenScale, Size},
    Error,
};

/// Describes the image a shape is rendered into: its size in points, how
/// many pixels each point covers, and how many samples each pixel takes.
///
/// The background of every canvas is transparent.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Canvas {
    size: Size,
    scale: f32,
    sample_count: u32,
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SIZE)
    }
}

impl Canvas {
    /// The size used by [`Canvas::default()`].
    pub const DEFAULT_SIZE: Size = Size::new(512., 512.);
    /// The sample counts accepted by [`Canvas::with_sample_count`].
    pub const SUPPORTED_SAMPLE_COUNTS: [u32; 3] = [1, 4, 16];
    /// The largest width or height, in pixels, a canvas may render at.
    pub const MAX_PIXEL_DIMENSION: u32 = 16_384;

    /// Returns a canvas of `size` points at a scale of 1 with one sample per
    /// pixel. The size is validated when rendering.
    #[must_use]
    pub fn new(size: impl Into<Size>) -> Self {
        Self {
            size: size.into(),
            scale: 1.,
            sample_count: 1,
        }
    }

    /// Builder-style function. Sets the number of pixels per point and
    /// returns self.
    #[must_use]
    pub const fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    /// Builder-style function. Sets the number of samples taken per pixel and
    /// returns self. Values above 1 antialias the shape's edges.
    #[must_use]
    pub const fn with_sample_count(mut self, sample_count: u32) -> Self {
        self.sample_count = sample_count;
        self
    }

    /// The size of the canvas, in points.
    #[must_use]
    pub const fn size(&self) -> Size {
        self.size
    }

    /// The number of pixels per point.
    #[must_use]
    pub const fn scale(&self) -> f32 {
        self.scale
    }

    /// The number of samples taken per pixel.
    #[must_use]
    pub const fn sample_count(&self) -> u32 {
        self.sample_count
    }

    /// The scale converting points into pixels.
    #[must_use]
    pub fn screen_scale(&self) -> ScreenScale {
        ScreenScale::new(self.scale)
    }

    /// The full area of the canvas, in points.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        Rect::new(Point::origin(), self.size)
    }

    /// Checks that every measurement is usable for rendering.
    pub fn validate(&self) -> crate::Result<()> {
        Dimension::Width.require_positive(self.size.width)?;
        Dimension::Height.require_positive(self.size.height)?;
        Dimension::Scale.require_positive(self.scale)?;
        if Self::SUPPORTED_SAMPLE_COUNTS.contains(&self.sample_count) {
            Ok(())
        } else {
            Err(Error::InvalidSampleCount(self.sample_count))
        }
    }

    /// The size of the rendered image in pixels. Fractional pixels are
    /// rounded up.
    ///
    /// Fails with [`Error::InvalidDimension`] if either side would exceed
    /// [`Self::MAX_PIXEL_DIMENSION`] pixels, or if the image's samples can't
    /// be addressed.
    pub fn pixel_size(&self) -> crate::Result<Size<u32, Raw>> {
        self.validate()?;
        let pixels = self.size * self.screen_scale();
        let width = Self::pixel_dimension(Dimension::Width, pixels.width)?;
        let height = Self::pixel_dimension(Dimension::Height, pixels.height)?;

        (width as usize)
            .checked_mul(height as usize)
            .and_then(|area| area.checked_mul(self.sample_count as usize))
            .ok_or(Error::InvalidDimension {
                dimension: Dimension::Height,
                value: pixels.height,
            })?;

        Ok(Size::new(width, height))
    }

    fn pixel_dimension(dimension: Dimension, pixels: f32) -> crate::Result<u32> {
        let pixels = dimension.require_positive(pixels)?.ceil();
        if pixels <= Self::MAX_PIXEL_DIMENSION as f32 {
            Ok(pixels as u32)
        } else {
            Err(Error::InvalidDimension {
                dimension,
                value: pixels,
            })
        }
    }

    /// The number of samples along each axis of a pixel.
    pub(crate) fn samples_per_axis(&self) -> u32 {
        match self.sample_count {
            16 => 4,
            4 => 2,
            _ => 1,
        }
    }
}

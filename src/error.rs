use std::fmt;

use lyon_tessellation::TessellationError;

/// All errors that `scribble` can return.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A canvas or stroke measurement was out of range.
    #[error("invalid {dimension}: {value}")]
    InvalidDimension {
        /// The measurement that was rejected.
        dimension: Dimension,
        /// The value that was provided.
        value: f32,
    },
    /// The canvas was configured with a sample count that isn't 1, 4, or 16.
    #[error("unsupported sample count {0}, expected 1, 4, or 16")]
    InvalidSampleCount(u32),
    /// An error while tessellating a shape.
    #[error("error tessellating shape: {0:?}")]
    Tessellation(TessellationError),
}

/// Identifies which measurement an [`Error::InvalidDimension`] refers to.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Dimension {
    /// The canvas width. Must be positive and finite.
    Width,
    /// The canvas height. Must be positive and finite.
    Height,
    /// The points-to-pixels scale of the canvas. Must be positive and finite.
    Scale,
    /// The stroke line width. Must be non-negative and finite.
    LineWidth,
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Width => "width",
            Self::Height => "height",
            Self::Scale => "scale",
            Self::LineWidth => "line width",
        })
    }
}

impl Dimension {
    /// Returns an error unless `value` is finite and greater than zero.
    pub(crate) fn require_positive(self, value: f32) -> crate::Result<f32> {
        if value.is_finite() && value > 0. {
            Ok(value)
        } else {
            Err(Error::InvalidDimension {
                dimension: self,
                value,
            })
        }
    }

    /// Returns an error unless `value` is finite and not negative.
    pub(crate) fn require_non_negative(self, value: f32) -> crate::Result<f32> {
        if value.is_finite() && value >= 0. {
            Ok(value)
        } else {
            Err(Error::InvalidDimension {
                dimension: self,
                value,
            })
        }
    }
}

use image::RgbaImage;

use crate::{canvas::Canvas, draw_mode::DrawMode, renderer, shape::DrawStyle};

/// A surface that shows rendered images.
pub trait ImageView {
    /// Replaces the currently shown image with `image`.
    fn display(&mut self, image: RgbaImage);
}

impl<F> ImageView for F
where
    F: FnMut(RgbaImage),
{
    fn display(&mut self, image: RgbaImage) {
        self(image);
    }
}

/// Draws shapes into an [`ImageView`], switching to the next [`DrawMode`]
/// each time it is asked to redraw.
#[derive(Debug)]
pub struct Sketchpad<V> {
    view: V,
    canvas: Canvas,
    style: DrawStyle,
    mode: DrawMode,
}

impl<V> Sketchpad<V>
where
    V: ImageView,
{
    /// Returns a sketchpad drawing into `view` with the default canvas and
    /// style. Nothing is drawn until [`Self::load()`] is called.
    #[must_use]
    pub fn new(view: V) -> Self {
        Self {
            view,
            canvas: Canvas::default(),
            style: DrawStyle::default(),
            mode: DrawMode::INITIAL,
        }
    }

    /// Builder-style function. Sets the canvas shapes are drawn onto and
    /// returns self.
    #[must_use]
    pub fn with_canvas(mut self, canvas: Canvas) -> Self {
        self.canvas = canvas;
        self
    }

    /// Builder-style function. Sets the style shapes are drawn with and
    /// returns self.
    #[must_use]
    pub fn with_style(mut self, style: DrawStyle) -> Self {
        self.style = style;
        self
    }

    /// The mode that was drawn most recently, or will be drawn by
    /// [`Self::load()`].
    #[must_use]
    pub const fn mode(&self) -> DrawMode {
        self.mode
    }

    /// Returns the view images are displayed in.
    #[must_use]
    pub const fn view(&self) -> &V {
        &self.view
    }

    /// Consumes the sketchpad and returns its view.
    #[must_use]
    pub fn into_view(self) -> V {
        self.view
    }

    /// Draws the current mode.
    pub fn load(&mut self) -> crate::Result<()> {
        self.draw()
    }

    /// Advances to the next mode and draws it, returning the new mode.
    ///
    /// The mode advances even if rendering fails, in which case the view keeps
    /// showing its previous image.
    pub fn redraw(&mut self) -> crate::Result<DrawMode> {
        let next = self.mode.next();
        tracing::debug!(from = ?self.mode, to = ?next, "switching draw mode");
        self.mode = next;
        self.draw()?;
        Ok(next)
    }

    fn draw(&mut self) -> crate::Result<()> {
        let image = renderer::render(&self.canvas, self.mode.shape(), &self.style)?;
        self.view.display(image);
        Ok(())
    }
}

use image::RgbaImage;
use lyon_tessellation::math::{point, Point};

use crate::{
    color::Color,
    math::{Raw, Size},
    shape::Mesh,
};

/// A pixel buffer that meshes are painted into, one at a time.
pub(crate) struct Raster {
    width: u32,
    height: u32,
    /// Offsets within a pixel of each sample point.
    samples: Vec<Point>,
    pixels: Vec<Color>,
}

impl Raster {
    /// Returns a transparent raster of `size` pixels, sampling each pixel on
    /// an evenly spaced `samples_per_axis` x `samples_per_axis` grid.
    pub fn new(size: Size<u32, Raw>, samples_per_axis: u32) -> Self {
        let step = 1. / samples_per_axis as f32;
        let samples = (0..samples_per_axis)
            .flat_map(|row| {
                (0..samples_per_axis).map(move |column| {
                    point((column as f32 + 0.5) * step, (row as f32 + 0.5) * step)
                })
            })
            .collect();
        Self {
            width: size.width,
            height: size.height,
            samples,
            pixels: vec![Color::CLEAR_BLACK; size.width as usize * size.height as usize],
        }
    }

    /// Composites `mesh` over the current contents. Each pixel is painted at
    /// most once per mesh, with its alpha scaled by the fraction of samples
    /// covered by any of the mesh's triangles.
    pub fn paint(&mut self, mesh: &Mesh) {
        let sample_count = self.samples.len();
        let mut covered = vec![false; self.pixels.len() * sample_count];
        for triangle in mesh.triangles() {
            self.cover(&mut covered, triangle);
        }

        for (pixel, samples) in self
            .pixels
            .iter_mut()
            .zip(covered.chunks_exact(sample_count))
        {
            let hits = samples.iter().filter(|hit| **hit).count();
            if hits > 0 {
                let coverage = hits as f32 / sample_count as f32;
                *pixel = mesh.color.with_coverage(coverage).over(*pixel);
            }
        }
    }

    /// Marks every sample inside `triangle`. Samples on an edge count as
    /// inside, which is harmless because coverage is tracked per sample.
    fn cover(&self, covered: &mut [bool], [a, b, c]: [Point; 3]) {
        let area = edge(a, b, c);
        if area == 0. || !area.is_finite() {
            return;
        }

        let (min_x, max_x) = pixel_span(
            a.x.min(b.x).min(c.x),
            a.x.max(b.x).max(c.x),
            self.width,
        );
        let (min_y, max_y) = pixel_span(
            a.y.min(b.y).min(c.y),
            a.y.max(b.y).max(c.y),
            self.height,
        );
        let sample_count = self.samples.len();
        for y in min_y..max_y {
            for x in min_x..max_x {
                let pixel = (y * self.width + x) as usize;
                for (index, offset) in self.samples.iter().enumerate() {
                    let sample = point(x as f32 + offset.x, y as f32 + offset.y);
                    let weights = [edge(b, c, sample), edge(c, a, sample), edge(a, b, sample)];
                    let inside = if area > 0. {
                        weights.iter().all(|weight| *weight >= 0.)
                    } else {
                        weights.iter().all(|weight| *weight <= 0.)
                    };
                    if inside {
                        covered[pixel * sample_count + index] = true;
                    }
                }
            }
        }
    }

    pub fn into_image(self) -> RgbaImage {
        let width = self.width;
        RgbaImage::from_fn(self.width, self.height, |x, y| {
            self.pixels[(y * width + x) as usize].into()
        })
    }
}

/// Clamps the span `min..=max` to whole pixels inside `0..limit`.
fn pixel_span(min: f32, max: f32, limit: u32) -> (u32, u32) {
    let limit = limit as f32;
    let start = min.floor().max(0.).min(limit);
    let end = max.ceil().max(0.).min(limit);
    (start as u32, end as u32)
}

/// Twice the signed area of the triangle `a`, `b`, `p`.
fn edge(a: Point, b: Point, p: Point) -> f32 {
    (b.x - a.x) * (p.y - a.y) - (b.y - a.y) * (p.x - a.x)
}

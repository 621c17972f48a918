// In-memory raster surface plus a coarse ASCII preview for terminals.

use crate::domain::{Rgb, Surface};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelCanvas {
    width: u32,
    height: u32,
    // Row-major; `None` is a cleared (transparent) pixel.
    pixels: Vec<Option<Rgb>>,
}

impl PixelCanvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![None; width as usize * height as usize],
        }
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels[self.index(x, y)]
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Downsamples the canvas into `cell_w` x `cell_h` blocks, one character each.
    ///
    /// A block takes the glyph of its last painted pixel in row-major order, or
    /// a space when nothing was painted there.
    pub fn to_ascii<F>(&self, cell_w: u32, cell_h: u32, glyph: F) -> String
    where
        F: Fn(Rgb) -> char,
    {
        let cell_w = cell_w.max(1);
        let cell_h = cell_h.max(1);
        let mut out = String::new();

        for row in (0..self.height).step_by(cell_h as usize) {
            for col in (0..self.width).step_by(cell_w as usize) {
                let mut cell = ' ';
                for y in row..(row + cell_h).min(self.height) {
                    for x in col..(col + cell_w).min(self.width) {
                        if let Some(color) = self.pixels[self.index(x, y)] {
                            cell = glyph(color);
                        }
                    }
                }
                out.push(cell);
            }
            out.push('\n');
        }

        out
    }
}

// Maps a span [start, start + len) onto pixel indices, clipped to [0, limit).
fn clip_span(start: f64, len: f64, limit: u32) -> (u32, u32) {
    let (start, len) = if len < 0.0 {
        (start + len, -len)
    } else {
        (start, len)
    };
    let limit = f64::from(limit);
    // NaN falls through both clamps and casts to 0, giving an empty span.
    let lo = start.round().clamp(0.0, limit) as u32;
    let hi = (start + len).round().clamp(0.0, limit) as u32;
    (lo, hi.max(lo))
}

impl Surface for PixelCanvas {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn clear(&mut self) {
        self.pixels.fill(None);
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Rgb) {
        let (x0, x1) = clip_span(x, w, self.width);
        let (y0, y1) = clip_span(y, h, self.height);

        for row in y0..y1 {
            let start = self.index(x0, row);
            let end = start + (x1 - x0) as usize;
            self.pixels[start..end].fill(Some(color));
        }
    }
}

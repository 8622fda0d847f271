//! Software rectangle rasterizer over an RGBA8 byte buffer

use super::{Canvas, Color, Rect};

/// Borrowed RGBA8 pixel buffer, row-major, top-left origin
pub struct Framebuffer<'a> {
    pixels: &'a mut [Color],
    width: u32,
    height: u32,
}

impl<'a> Framebuffer<'a> {
    /// Wrap raw bytes. Returns `None` if the buffer is not exactly
    /// `width * height` RGBA pixels.
    pub fn new(bytes: &'a mut [u8], width: u32, height: u32) -> Option<Self> {
        let pixels: &mut [Color] = bytemuck::try_cast_slice_mut(bytes).ok()?;
        if pixels.len() != width as usize * height as usize {
            return None;
        }
        Some(Self {
            pixels,
            width,
            height,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }

    /// Intersect `rect` with the buffer, in pixel index ranges
    fn clip(&self, rect: Rect) -> Option<(usize, usize, usize, usize)> {
        let x0 = i64::from(rect.x).max(0);
        let y0 = i64::from(rect.y).max(0);
        let x1 = (i64::from(rect.x) + i64::from(rect.w)).min(i64::from(self.width));
        let y1 = (i64::from(rect.y) + i64::from(rect.h)).min(i64::from(self.height));
        if x0 >= x1 || y0 >= y1 {
            return None;
        }
        Some((x0 as usize, y0 as usize, x1 as usize, y1 as usize))
    }
}

impl Canvas for Framebuffer<'_> {
    fn clear(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        let Some((x0, y0, x1, y1)) = self.clip(rect) else {
            return;
        };
        let stride = self.width as usize;
        for row in self.pixels.chunks_exact_mut(stride).skip(y0).take(y1 - y0) {
            row[x0..x1].fill(color);
        }
    }

    fn present(&mut self) {}
}

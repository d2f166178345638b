//! CPU framebuffer at the logical resolution, uploaded to a texture per frame.
use log::warn;
use raylib::core::texture::RaylibTexture2D; // trait for .update_texture()
use raylib::prelude::*;

pub struct Framebuffer {
    pub color_buffer: Vec<Color>,
    pub width: u32,
    pub height: u32,
    pub background_color: Color,
}

impl Framebuffer {
    pub fn new(width: u32, height: u32) -> Self {
        let size = (width * height) as usize;
        let bg = Color::BLACK;
        Self {
            color_buffer: vec![bg; size],
            width,
            height,
            background_color: bg,
        }
    }

    #[inline]
    pub fn clear(&mut self) {
        self.color_buffer.fill(self.background_color);
    }

    #[inline]
    pub fn set_pixel_color(&mut self, x: u32, y: u32, color: Color) {
        if x < self.width && y < self.height {
            self.color_buffer[(y * self.width + x) as usize] = color;
        }
    }

    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Color {
        if x < self.width && y < self.height {
            return self.color_buffer[(y * self.width + x) as usize];
        }
        self.background_color
    }

    /// Vertical run `[y0, y1)` in column `x`, `w` pixels wide.
    pub fn vline(&mut self, x: u32, y0: u32, y1: u32, w: u32, color: Color) {
        for xx in x..(x + w).min(self.width) {
            for y in y0..y1.min(self.height) {
                self.color_buffer[(y * self.width + xx) as usize] = color;
            }
        }
    }

    pub fn fill_rect(&mut self, x: u32, y: u32, w: u32, h: u32, color: Color) {
        for yy in y..(y + h).min(self.height) {
            for xx in x..(x + w).min(self.width) {
                self.color_buffer[(yy * self.width + xx) as usize] = color;
            }
        }
    }

    pub fn fill_circle(&mut self, cx: i32, cy: i32, r: i32, color: Color) {
        for dy in -r..=r {
            for dx in -r..=r {
                if dx * dx + dy * dy <= r * r {
                    let (x, y) = (cx + dx, cy + dy);
                    if x >= 0 && y >= 0 {
                        self.set_pixel_color(x as u32, y as u32, color);
                    }
                }
            }
        }
    }

    /// Uploads the pixels to a persistent RGBA8 texture of the same size.
    pub fn upload_to_texture(&self, tex: &mut Texture2D) {
        // &[Color] -> &[u8] (RGBA8) without copying
        let byte_len = self.color_buffer.len() * std::mem::size_of::<Color>();
        let bytes: &[u8] = unsafe {
            std::slice::from_raw_parts(self.color_buffer.as_ptr() as *const u8, byte_len)
        };
        if let Err(e) = tex.update_texture(bytes) {
            warn!("frame upload failed: {e}");
        }
    }
}

use raylib::prelude::*;

use crate::sprites::{ALPHA_SOLID, Pixmap};

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

    #[inline]
    pub fn set_background_color(&mut self, c: Color) {
        self.background_color = c;
    }

    /// Blitea un pixmap con su esquina superior izquierda en (pos_x, pos_y).
    /// Recorta contra los bordes y salta los pixeles casi transparentes.
    pub fn blit_pixmap(&mut self, pm: &Pixmap, pos_x: f32, pos_y: f32) {
        let ox = pos_x.floor() as i64;
        let oy = pos_y.floor() as i64;
        for y in 0..pm.h {
            let dy = oy + y as i64;
            if dy < 0 || dy >= self.height as i64 {
                continue;
            }
            for x in 0..pm.w {
                let dx = ox + x as i64;
                if dx < 0 || dx >= self.width as i64 {
                    continue;
                }
                let color = pm.pixel(x, y);
                if color.a < ALPHA_SOLID {
                    continue;
                }
                self.set_pixel_color(dx as u32, dy as u32, color);
            }
        }
    }
}

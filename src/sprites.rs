use raylib::prelude::*;
use std::collections::HashMap;

/// Cuadros de la carrera del jugador.
pub const RUN_FRAMES: usize = 12;
/// Variantes de spike en el suelo.
pub const SPIKE_VARIANTS: usize = 4;
/// Cuadros de la bola de fuego.
pub const FIREBALL_FRAMES: usize = 5;

/// Alpha mínima para que un pixel cuente (se dibuja y colisiona).
pub const ALPHA_SOLID: u8 = 8;

/// Clave de cada sprite del juego (familia + índice de cuadro/variante).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpriteKey {
    PlayerRun(usize),
    Spike(usize),
    Fireball(usize),
}

impl SpriteKey {
    fn candidate_paths(&self) -> [String; 2] {
        let name = match self {
            SpriteKey::PlayerRun(i) => format!("player_run_{}.png", i),
            SpriteKey::Spike(i) => format!("spike_{}.png", i),
            SpriteKey::Fireball(i) => format!("fireball_animation_{}.png", i),
        };
        [format!("Assets/{}", name), format!("assets/{}", name)]
    }
}

fn all_keys() -> impl Iterator<Item = SpriteKey> {
    (0..RUN_FRAMES)
        .map(SpriteKey::PlayerRun)
        .chain((0..SPIKE_VARIANTS).map(SpriteKey::Spike))
        .chain((0..FIREBALL_FRAMES).map(SpriteKey::Fireball))
}

/// Un pixmap inmutable (CPU) para blitear y testear solidez por pixel.
#[derive(Clone)]
pub struct Pixmap {
    pub w: u32,
    pub h: u32,
    px: Vec<Color>,
}

impl Pixmap {
    pub fn new(w: u32, h: u32, px: Vec<Color>) -> Self {
        Self { w, h, px }
    }

    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> Color {
        self.px[(y * self.w + x) as usize]
    }

    /// Solidez por pixel; fuera de rango nunca es sólido.
    #[inline]
    pub fn solid_at(&self, x: u32, y: u32) -> bool {
        if x >= self.w || y >= self.h {
            return false;
        }
        self.px[(y * self.w + x) as usize].a >= ALPHA_SOLID
    }
}

/// Colisión exacta por pixel: primero rectángulos, después alpha de ambos.
pub fn pixmaps_collide(a: &Pixmap, ax: f32, ay: f32, b: &Pixmap, bx: f32, by: f32) -> bool {
    let ax0 = ax.floor() as i64;
    let ay0 = ay.floor() as i64;
    let bx0 = bx.floor() as i64;
    let by0 = by.floor() as i64;

    let x0 = ax0.max(bx0);
    let y0 = ay0.max(by0);
    let x1 = (ax0 + a.w as i64).min(bx0 + b.w as i64);
    let y1 = (ay0 + a.h as i64).min(by0 + b.h as i64);
    if x0 >= x1 || y0 >= y1 {
        return false;
    }

    for y in y0..y1 {
        for x in x0..x1 {
            if a.solid_at((x - ax0) as u32, (y - ay0) as u32)
                && b.solid_at((x - bx0) as u32, (y - by0) as u32)
            {
                return true;
            }
        }
    }
    false
}

pub struct SpriteManager {
    maps: HashMap<SpriteKey, Pixmap>, // CPU pixmaps por clave
}

impl SpriteManager {
    pub fn new() -> Self {
        let mut maps = HashMap::new();

        // Candidatos en disco (si existe archivo lo usamos; si no, fallback procedural)
        for key in all_keys() {
            for path in key.candidate_paths() {
                if let Ok(img) = Image::load_image(&path) {
                    let w = img.width().max(1) as u32;
                    let h = img.height().max(1) as u32;
                    let data = img.get_image_data().to_vec(); // Vec<Color>
                    maps.insert(key, Pixmap::new(w, h, data));
                    break;
                }
            }
        }

        // Fallbacks si faltan
        for key in all_keys() {
            if !maps.contains_key(&key) {
                maps.insert(key, Self::fallback_for(key));
            }
        }

        Self { maps }
    }

    pub fn pixmap(&self, key: SpriteKey) -> Option<&Pixmap> {
        self.maps.get(&key)
    }

    fn fallback_for(key: SpriteKey) -> Pixmap {
        match key {
            // 365 de alto para que calce con la línea de suelo en 650
            SpriteKey::PlayerRun(i) => Self::make_runner(140, 365, i),
            SpriteKey::Spike(i) => Self::make_spike(100, 80, i),
            SpriteKey::Fireball(i) => Self::make_fireball(80, 80, i),
        }
    }

    /// Corredor de fallback: torso centrado, franja que baja con el cuadro y
    /// dos piernas hasta la última fila (la trasera alterna la zancada).
    fn make_runner(w: u32, h: u32, frame: usize) -> Pixmap {
        let mut px = vec![Color::new(0, 0, 0, 0); (w * h) as usize];
        let body = Color::new(40, 46, 60, 255);
        let trim = Color::new(230, 120, 40, 255);

        let x0 = w / 4;
        let x1 = w * 3 / 4;
        let y0 = h / 50;
        let y1 = h * 58 / 100;
        for y in y0..y1 {
            for x in x0..x1 {
                px[(y * w + x) as usize] = body;
            }
        }

        // marca visible del cuadro actual
        let band_y = y0 + (frame as u32) * (y1 - y0) / RUN_FRAMES as u32;
        for y in band_y..(band_y + 3).min(y1) {
            for x in x0..x1 {
                px[(y * w + x) as usize] = Self::mix(body, trim, 200);
            }
        }

        // pierna delantera fija, trasera oscila segun el cuadro
        let leg_w = w / 8;
        let front = w * 3 / 10;
        let back = w * 11 / 20 + (frame as u32 % 2) * (w / 20);
        for y in y1..h {
            for x in front..(front + leg_w).min(w) {
                px[(y * w + x) as usize] = body;
            }
            for x in back..(back + leg_w).min(w) {
                px[(y * w + x) as usize] = body;
            }
        }

        Pixmap::new(w, h, px)
    }

    /// Spike de fallback: la variante v dibuja v+1 dientes triangulares
    /// sobre una placa base que ocupa todo el ancho.
    fn make_spike(w: u32, h: u32, variant: usize) -> Pixmap {
        let mut px = vec![Color::new(0, 0, 0, 0); (w * h) as usize];
        let base = Color::new(90, 90, 100, 255);
        let edge = Color::new(150, 150, 160, 255);

        let teeth = variant as u32 + 1;
        let tw = w / teeth;
        for t in 0..teeth {
            let cx = t * tw + tw / 2;
            for y in 0..h {
                let half = ((y + 1) * tw) / (2 * h);
                let xs = cx.saturating_sub(half);
                let xe = (cx + half + 1).min(w);
                for x in xs..xe {
                    let c = if x == xs || x + 1 == xe { edge } else { base };
                    px[(y * w + x) as usize] = c;
                }
            }
        }

        // placa inferior continua
        for y in (h - 2)..h {
            for x in 0..w {
                px[(y * w + x) as usize] = base;
            }
        }

        Pixmap::new(w, h, px)
    }

    /// Bola de fuego de fallback: orbe con halo, el radio pulsa con el cuadro.
    fn make_fireball(w: u32, h: u32, frame: usize) -> Pixmap {
        let mut px = vec![Color::new(0, 0, 0, 0); (w * h) as usize];
        let color = Color::new(255, 140, 40, 255);
        let cx = (w as f32) * 0.5;
        let cy = (h as f32) * 0.5;
        let pulse = 0.8 + 0.05 * frame as f32;
        let r = (w.min(h) as f32) * 0.3 * pulse;
        for y in 0..h {
            for x in 0..w {
                let dx = x as f32 - cx;
                let dy = y as f32 - cy;
                let d = (dx * dx + dy * dy).sqrt();
                let i = (y * w + x) as usize;
                if d <= r {
                    let t = (1.0 - (d / r)).clamp(0.0, 1.0);
                    let mut core = Self::mix(color, Color::WHITE, (t * 220.0) as u8);
                    core.a = 255;
                    px[i] = core;
                } else {
                    let t = (1.0 - ((d - r) / (r * 0.9))).clamp(0.0, 1.0);
                    if t > 0.0 {
                        let mut halo = color;
                        halo.a = (t * 180.0) as u8;
                        px[i] = halo;
                    }
                }
            }
        }
        Pixmap::new(w, h, px)
    }

    #[inline]
    fn mix(a: Color, b: Color, t: u8) -> Color {
        let ta = t as u16;
        let na = 255u16 - ta;
        let mixc = |x: u8, y: u8| -> u8 { (((x as u16) * na + (y as u16) * ta) / 255) as u8 };
        Color::new(mixc(a.r, b.r), mixc(a.g, b.g), mixc(a.b, b.b), mixc(a.a, b.a))
    }
}

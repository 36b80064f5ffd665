use rand::Rng;

use crate::framebuffer::Framebuffer;
use crate::sprites::{FIREBALL_FRAMES, SPIKE_VARIANTS, SpriteKey, SpriteManager};

const FIREBALL_ANIM_MS: f32 = 100.0;

/// Qué clase de obstáculo es y el estado visual propio de cada una.
/// El spike elige su variante una sola vez; la bola de fuego anima en ciclo.
#[derive(Debug, Clone, PartialEq)]
pub enum ObstacleKind {
    Ground { spike: usize },
    Sky { frame: usize, anim_ms: f32 },
}

#[derive(Debug, Clone)]
pub struct Obstacle {
    pub x: f32,
    pub y: f32,
    pub speed: f32,
    pub kind: ObstacleKind,
}

impl Obstacle {
    pub fn ground<R: Rng>(x: f32, y: f32, speed: f32, rng: &mut R) -> Self {
        let spike = rng.gen_range(0..SPIKE_VARIANTS);
        Self {
            x,
            y,
            speed,
            kind: ObstacleKind::Ground { spike },
        }
    }

    pub fn sky(x: f32, y: f32, speed: f32) -> Self {
        Self {
            x,
            y,
            speed,
            kind: ObstacleKind::Sky { frame: 0, anim_ms: 0.0 },
        }
    }

    /// Avanza hacia el jugador a ritmo fijo por tick y anima si aplica.
    pub fn update(&mut self, dt_ms: f32) {
        self.x -= self.speed;
        if let ObstacleKind::Sky { frame, anim_ms } = &mut self.kind {
            *anim_ms += dt_ms;
            if *anim_ms > FIREBALL_ANIM_MS {
                *frame = (*frame + 1) % FIREBALL_FRAMES;
                *anim_ms = 0.0;
            }
        }
    }

    pub fn sprite_key(&self) -> SpriteKey {
        match self.kind {
            ObstacleKind::Ground { spike } => SpriteKey::Spike(spike),
            ObstacleKind::Sky { frame, .. } => SpriteKey::Fireball(frame),
        }
    }

    pub fn draw(&self, fb: &mut Framebuffer, sprites: &SpriteManager) {
        if let Some(pm) = sprites.pixmap(self.sprite_key()) {
            fb.blit_pixmap(pm, self.x, self.y);
        }
    }
}

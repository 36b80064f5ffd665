use rand::Rng;
use rand::rngs::StdRng;
use raylib::prelude::*;

use crate::framebuffer::Framebuffer;
use crate::input::InputSnapshot;
use crate::obstacles::Obstacle;
use crate::player::{PLAYER_START_X, Player};
use crate::sprites::{SpriteManager, pixmaps_collide};
use crate::{WINDOW_HEIGHT, WINDOW_WIDTH};

const SPAWN_INTERVAL_MS: f32 = 2500.0;
const SCORE_INTERVAL_MS: f32 = 1000.0;
const OBSTACLE_SPEED: f32 = 9.0; // px por tick
const SPAWN_X: f32 = WINDOW_WIDTH as f32;
/// Los spikes se asientan sobre la línea de suelo: 650 - 80 de alto.
const GROUND_OBSTACLE_Y: f32 = 650.0 - 80.0;
const SKY_Y_MIN: i32 = 150;
const SKY_Y_MAX: i32 = 250;
/// Margen generoso antes de destruir un obstáculo que salió por la izquierda.
const CLEANUP_MARGIN: f32 = 100.0;

/// Qué pasó en el tick, para que afuera suenen sfx o se enganche lo que sea.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickEvents {
    pub started: bool,
    pub jumped: bool,
    pub scored: bool,
    pub game_over: bool,
}

pub struct GameController {
    started: bool,
    game_over: bool,
    player: Player,
    obstacles: Vec<Obstacle>,
    score: u32,
    spawn_ms: f32,
    score_ms: f32,
    rng: StdRng,
}

impl GameController {
    pub fn new(rng: StdRng) -> Self {
        Self {
            started: false,
            game_over: false,
            player: Player::new(PLAYER_START_X),
            obstacles: Vec::new(),
            score: 0,
            spawn_ms: 0.0,
            score_ms: 0.0,
            rng,
        }
    }

    /// Un tick de simulación. En el menú solo espera el Enter;
    /// jugando corre entrada, física, obstáculos, colisiones y puntaje.
    pub fn update(&mut self, input: &InputSnapshot, dt_ms: f32, sprites: &SpriteManager) -> TickEvents {
        let mut events = TickEvents::default();

        if !self.started {
            if input.confirm_pressed {
                self.start_game();
                events.started = true;
            }
            return events;
        }

        let was_airborne = self.player.is_jumping();
        self.player.handle_input(input);
        if !was_airborne && self.player.is_jumping() {
            events.jumped = true;
        }
        self.player.update(dt_ms);

        self.update_obstacles(dt_ms);

        if self.check_collisions(sprites) {
            self.started = false;
            self.game_over = true;
            events.game_over = true;
        }

        self.score_ms += dt_ms;
        if self.score_ms >= SCORE_INTERVAL_MS {
            self.score += 1;
            self.score_ms = 0.0;
            events.scored = true;
        }

        events
    }

    fn start_game(&mut self) {
        self.started = true;
        self.game_over = false;
        self.player = Player::new(PLAYER_START_X);
        self.obstacles.clear();
        self.score = 0;
        self.spawn_ms = 0.0;
        self.score_ms = 0.0;
    }

    fn update_obstacles(&mut self, dt_ms: f32) {
        self.spawn_ms += dt_ms;
        if self.spawn_ms > SPAWN_INTERVAL_MS {
            // moneda al aire: spike en el suelo o bola de fuego en el aire
            if self.rng.gen_range(0..2) == 0 {
                self.obstacles
                    .push(Obstacle::ground(SPAWN_X, GROUND_OBSTACLE_Y, OBSTACLE_SPEED, &mut self.rng));
            } else {
                let y = self.rng.gen_range(SKY_Y_MIN..SKY_Y_MAX) as f32;
                self.obstacles.push(Obstacle::sky(SPAWN_X, y, OBSTACLE_SPEED));
            }
            self.spawn_ms = 0.0;
        }

        // en orden inverso para poder remover in-place
        for i in (0..self.obstacles.len()).rev() {
            self.obstacles[i].update(dt_ms);
            if self.obstacles[i].x + CLEANUP_MARGIN < 0.0 {
                self.obstacles.remove(i);
            }
        }
    }

    /// Colisión exacta por pixel contra cada obstáculo. La primera corta.
    fn check_collisions(&self, sprites: &SpriteManager) -> bool {
        let Some(player_pm) = sprites.pixmap(self.player.sprite_key()) else {
            return false;
        };
        for obs in &self.obstacles {
            if let Some(obs_pm) = sprites.pixmap(obs.sprite_key()) {
                if pixmaps_collide(player_pm, self.player.x, self.player.y, obs_pm, obs.x, obs.y) {
                    return true;
                }
            }
        }
        false
    }

    pub fn draw(&self, fb: &mut Framebuffer, sprites: &SpriteManager) {
        if !self.started {
            return; // en el menú solo hay texto, va por el HUD
        }
        self.player.draw(fb, sprites);
        for obs in &self.obstacles {
            obs.draw(fb, sprites);
        }
    }

    /// Texto sobre el frame ya presentado: menú, pantalla de game over o puntaje.
    pub fn draw_hud(&self, d: &mut RaylibDrawHandle, fps: u32) {
        if !self.started {
            let cx = WINDOW_WIDTH / 2 - 60;
            let cy = WINDOW_HEIGHT / 2;
            d.draw_text("RUNNER ESCAPE", cx, cy, 24, Color::BLACK);
            if self.game_over {
                d.draw_text("Game Over!", cx, cy + 20, 24, Color::RED);
                d.draw_text(&format!("Final Score: {}", self.score), cx, cy + 30, 24, Color::BLACK);
                d.draw_text("Press ENTER to restart", cx, cy + 50, 24, Color::GRAY);
            } else {
                d.draw_text("Press ENTER to start", cx, cy + 20, 24, Color::GRAY);
            }
        } else {
            d.draw_text(&format!("Score: {}", self.score), 20, 20, 20, Color::BLACK);
        }
        d.draw_text(&format!("FPS: {}", fps), 10, WINDOW_HEIGHT - 30, 20, Color::DARKGRAY);
    }
}

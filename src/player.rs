use crate::framebuffer::Framebuffer;
use crate::input::InputSnapshot;
use crate::sprites::{RUN_FRAMES, SpriteKey, SpriteManager};

/// Pie del jugador en pantalla: 650 (suelo) - 365 (alto del sprite).
pub const GROUND_Y: f32 = 650.0 - 365.0;
pub const PLAYER_START_X: f32 = 100.0;

const GRAVITY: f32 = 0.6; // por tick
const JUMP_FORCE: f32 = -15.0;
const SLIDE_OFFSET: f32 = 60.0;
const ANIM_INTERVAL_MS: f32 = 100.0;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum PlayerState {
    Running,
    Jumping,
    Sliding,
}

pub struct Player {
    pub x: f32,
    pub y: f32,
    velocity_y: f32,
    state: PlayerState,
    // animación de carrera
    frame: usize,
    anim_ms: f32,
}

impl Player {
    pub fn new(x: f32) -> Self {
        Self {
            x,
            y: GROUND_Y,
            velocity_y: 0.0,
            state: PlayerState::Running,
            frame: 0,
            anim_ms: 0.0,
        }
    }

    /// ¿Está saltando ahora?
    pub fn is_jumping(&self) -> bool {
        matches!(self.state, PlayerState::Jumping)
    }

    #[inline]
    pub fn is_grounded(&self) -> bool {
        self.y >= GROUND_Y
    }

    /// Aplica la foto de teclado del tick. En el aire no hay control:
    /// el salto se compromete hasta aterrizar.
    pub fn handle_input(&mut self, input: &InputSnapshot) {
        if !self.is_grounded() {
            return;
        }
        if input.jump_pressed {
            self.velocity_y = JUMP_FORCE;
            self.state = PlayerState::Jumping;
        } else if input.slide_held {
            self.state = PlayerState::Sliding;
            self.y = GROUND_Y + SLIDE_OFFSET;
        } else {
            self.state = PlayerState::Running;
            self.y = GROUND_Y;
        }
    }

    /// Física del salto por tick y avance de la animación de carrera.
    /// Solo corre el ciclo de cuadros mientras el estado es Running.
    pub fn update(&mut self, dt_ms: f32) {
        match self.state {
            PlayerState::Jumping => {
                self.velocity_y += GRAVITY;
                self.y += self.velocity_y;
                if self.y >= GROUND_Y {
                    self.y = GROUND_Y;
                    self.velocity_y = 0.0;
                    self.state = PlayerState::Running;
                }
            }
            PlayerState::Running => {
                self.anim_ms += dt_ms;
                if self.anim_ms > ANIM_INTERVAL_MS {
                    self.frame = (self.frame + 1) % RUN_FRAMES;
                    self.anim_ms = 0.0;
                }
            }
            PlayerState::Sliding => {}
        }
    }

    pub fn sprite_key(&self) -> SpriteKey {
        SpriteKey::PlayerRun(self.frame)
    }

    pub fn draw(&self, fb: &mut Framebuffer, sprites: &SpriteManager) {
        if let Some(pm) = sprites.pixmap(self.sprite_key()) {
            fb.blit_pixmap(pm, self.x, self.y);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TICK_MS: f32 = 16.0;

    fn no_input() -> InputSnapshot {
        InputSnapshot::default()
    }

    fn jump_input() -> InputSnapshot {
        InputSnapshot {
            jump_pressed: true,
            ..Default::default()
        }
    }

    fn slide_input() -> InputSnapshot {
        InputSnapshot {
            slide_held: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_new_player_runs_on_ground() {
        let p = Player::new(PLAYER_START_X);
        assert_eq!(p.x, PLAYER_START_X);
        assert_eq!(p.y, GROUND_Y);
        assert_eq!(p.state, PlayerState::Running);
        assert!(p.is_grounded());
        assert!(!p.is_jumping());
    }

    #[test]
    fn test_jump_applies_impulse() {
        let mut p = Player::new(PLAYER_START_X);
        p.handle_input(&jump_input());
        assert_eq!(p.state, PlayerState::Jumping);
        assert_eq!(p.velocity_y, JUMP_FORCE);
        // el impulso no mueve al jugador hasta el siguiente tick
        assert_eq!(p.y, GROUND_Y);
    }

    #[test]
    fn test_gravity_accumulates_every_tick() {
        let mut p = Player::new(PLAYER_START_X);
        p.handle_input(&jump_input());
        let mut last_v = p.velocity_y;
        for _ in 0..10 {
            p.update(TICK_MS);
            if p.state != PlayerState::Jumping {
                break;
            }
            assert_eq!(p.velocity_y, last_v + GRAVITY);
            last_v = p.velocity_y;
        }
    }

    #[test]
    fn test_jump_arc_lands_back_running() {
        let mut p = Player::new(PLAYER_START_X);
        p.handle_input(&jump_input());

        let mut ticks = 0;
        let mut apex = p.y;
        while p.is_jumping() {
            p.update(TICK_MS);
            apex = apex.min(p.y);
            ticks += 1;
            assert!(ticks < 200, "Jump never landed");
        }
        assert!(apex < GROUND_Y, "Jump should leave the ground");
        assert_eq!(p.y, GROUND_Y);
        assert_eq!(p.velocity_y, 0.0);
        assert_eq!(p.state, PlayerState::Running);
    }

    #[test]
    fn test_airborne_ignores_input() {
        let mut p = Player::new(PLAYER_START_X);
        p.handle_input(&jump_input());
        p.update(TICK_MS);
        assert!(!p.is_grounded());

        let y_before = p.y;
        p.handle_input(&slide_input());
        assert_eq!(p.state, PlayerState::Jumping);
        assert_eq!(p.y, y_before);

        // tampoco se puede re-saltar en el aire
        let v_before = p.velocity_y;
        p.handle_input(&jump_input());
        assert_eq!(p.velocity_y, v_before);
    }

    #[test]
    fn test_slide_offsets_and_release_restores() {
        let mut p = Player::new(PLAYER_START_X);
        p.handle_input(&slide_input());
        assert_eq!(p.state, PlayerState::Sliding);
        assert_eq!(p.y, GROUND_Y + SLIDE_OFFSET);
        assert!(p.is_grounded());

        p.handle_input(&no_input());
        assert_eq!(p.state, PlayerState::Running);
        assert_eq!(p.y, GROUND_Y);
    }

    #[test]
    fn test_jump_wins_over_slide() {
        let mut p = Player::new(PLAYER_START_X);
        let both = InputSnapshot {
            jump_pressed: true,
            slide_held: true,
            ..Default::default()
        };
        p.handle_input(&both);
        assert_eq!(p.state, PlayerState::Jumping);
    }

    #[test]
    fn test_jump_from_slide_pops_back_to_ground() {
        // saltar desde el slide parte debajo de GROUND_Y, asi que el primer
        // tick ya "aterriza" y clava al jugador de vuelta en el suelo
        let mut p = Player::new(PLAYER_START_X);
        p.handle_input(&slide_input());
        p.handle_input(&jump_input());
        assert_eq!(p.state, PlayerState::Jumping);
        p.update(TICK_MS);
        assert_eq!(p.y, GROUND_Y);
        assert_eq!(p.state, PlayerState::Running);
    }

    #[test]
    fn test_run_animation_advances_and_wraps() {
        let mut p = Player::new(PLAYER_START_X);
        assert_eq!(p.frame, 0);

        // justo en el umbral no avanza (comparación estricta)
        p.update(ANIM_INTERVAL_MS);
        assert_eq!(p.frame, 0);
        p.update(0.5);
        assert_eq!(p.frame, 1);
        assert_eq!(p.anim_ms, 0.0);

        // ciclo completo de vuelta al cuadro 0
        for _ in 0..(RUN_FRAMES - 1) {
            p.update(ANIM_INTERVAL_MS + 1.0);
        }
        assert_eq!(p.frame, 0);
    }

    #[test]
    fn test_animation_freezes_off_running() {
        let mut p = Player::new(PLAYER_START_X);
        p.handle_input(&jump_input());
        p.update(ANIM_INTERVAL_MS + 1.0);
        assert_eq!(p.frame, 0, "Frame should freeze while jumping");

        let mut p = Player::new(PLAYER_START_X);
        p.handle_input(&slide_input());
        p.update(ANIM_INTERVAL_MS + 1.0);
        assert_eq!(p.frame, 0, "Frame should freeze while sliding");
    }
}

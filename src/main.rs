// main.rs
mod audio;
mod framebuffer;
mod game;
mod input;
mod obstacles;
mod player;
mod sprites;

use raylib::prelude::*;
use std::thread;
use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;

use audio::AudioManager;
use framebuffer::Framebuffer;
use game::GameController;
use sprites::SpriteManager;

pub const WINDOW_WIDTH: i32 = 1280;
pub const WINDOW_HEIGHT: i32 = 720;

fn main() {
    let (mut window, raylib_thread) = raylib::init()
        .size(WINDOW_WIDTH, WINDOW_HEIGHT)
        .title("Runner Escape")
        .build();

    let sprites = SpriteManager::new();
    let mut framebuffer = Framebuffer::new(WINDOW_WIDTH as u32, WINDOW_HEIGHT as u32);
    framebuffer.set_background_color(Color::WHITE);

    let mut audio = AudioManager::new();
    match audio.as_mut() {
        Some(a) => {
            a.load_sfx_auto();
            a.play_music_loop_auto();
        }
        None => eprintln!("Audio no disponible; el juego sigue sin sonido"),
    }

    let mut game = GameController::new(StdRng::from_entropy());

    while !window.window_should_close() {
        let input = input::poll(&window);
        let dt_ms = window.get_frame_time() * 1000.0;

        let events = game.update(&input, dt_ms, &sprites);
        if let Some(a) = audio.as_ref() {
            if events.jumped {
                a.play_jump();
            }
            if events.game_over {
                a.play_game_over();
            }
        }

        framebuffer.clear();
        game.draw(&mut framebuffer, &sprites);

        // Precapturamos todo lo que use `window` antes de begin_drawing
        let fps_now = window.get_fps();

        {
            let mut d = window.begin_drawing(&raylib_thread);
            d.clear_background(Color::WHITE);

            // Dibujar el framebuffer en pantalla
            for y in 0..framebuffer.height {
                for x in 0..framebuffer.width {
                    let color = framebuffer.color_buffer[(y * framebuffer.width + x) as usize];
                    if color != framebuffer.background_color {
                        d.draw_pixel(x as i32, y as i32, color);
                    }
                }
            }

            game.draw_hud(&mut d, fps_now);
        }

        // ~60 FPS (16 ms)
        thread::sleep(Duration::from_millis(16));
    }
}

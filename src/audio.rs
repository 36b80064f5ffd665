use rodio::Source;
use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink};
use std::io::Cursor;
use std::{fs::File, io::BufReader, io::Read, sync::Arc};

fn load_bytes(path: &str) -> Option<Vec<u8>> {
    let mut f = File::open(path).ok()?;
    let mut buf = Vec::new();
    f.read_to_end(&mut buf).ok()?;
    Some(buf)
}

fn load_bytes_any(paths: &[&str]) -> Option<Vec<u8>> {
    for p in paths {
        if let Some(b) = load_bytes(p) {
            return Some(b);
        }
    }
    None
}

pub struct AudioManager {
    _stream: OutputStream,
    handle: OutputStreamHandle,
    bg_sink: Option<Sink>,
    sfx_sink: Sink,
    jump: Option<Arc<Vec<u8>>>,
    game_over: Option<Arc<Vec<u8>>>,
    jump_volume: f32,
}

impl AudioManager {
    /// None si no hay dispositivo de audio; el juego sigue sin sonido.
    pub fn new() -> Option<Self> {
        let (_stream, handle) = OutputStream::try_default().ok()?;
        let sfx_sink = Sink::try_new(&handle).ok()?;
        Some(Self {
            _stream,
            handle,
            bg_sink: None,
            sfx_sink,
            jump: None,
            game_over: None,
            jump_volume: 0.9,
        })
    }

    pub fn load_sfx_auto(&mut self) {
        self.jump = load_bytes_any(&[
            "Assets/sfx_jump.wav",
            "Assets/jump.wav",
            "assets/sfx_jump.wav",
        ])
        .map(Arc::new);
        self.game_over = load_bytes_any(&[
            "Assets/sfx_game_over.wav",
            "Assets/game_over.wav",
            "assets/sfx_game_over.wav",
        ])
        .map(Arc::new);
    }

    pub fn play_jump(&self) {
        // Sink propio y detach: saltos seguidos no se encolan uno tras otro
        if let Some(d) = self.jump.clone() {
            if let Ok(dec) = Decoder::new(BufReader::new(Cursor::new(d.as_ref().clone()))) {
                if let Ok(sink) = Sink::try_new(&self.handle) {
                    sink.append(dec.amplify(self.jump_volume.clamp(0.0, 2.5)));
                    sink.detach();
                }
            }
        }
    }

    pub fn play_game_over(&self) {
        self.play_data(self.game_over.clone());
    }

    fn play_data(&self, data: Option<Arc<Vec<u8>>>) {
        if let Some(d) = data {
            if let Ok(dec) = Decoder::new(BufReader::new(Cursor::new(d.as_ref().clone()))) {
                self.sfx_sink.append(dec);
            }
        }
    }

    pub fn play_music_loop_auto(&mut self) {
        if self.bg_sink.is_some() {
            return;
        }
        let candidates = [
            "Assets/music_bg.wav",
            "Assets/music.wav",
            "Assets/music.ogg",
            "assets/music_bg.wav",
        ];
        if let Some(bytes) = load_bytes_any(&candidates) {
            if let Ok(dec) = Decoder::new_looped(Cursor::new(bytes)) {
                if let Ok(sink) = Sink::try_new(&self.handle) {
                    sink.append(dec);
                    sink.set_volume(0.35);
                    self.bg_sink = Some(sink);
                }
            }
        }
    }
}

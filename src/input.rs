use raylib::prelude::*;

/// Foto del teclado en un tick. El estado del juego solo ve esto,
/// nunca a raylib directamente.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputSnapshot {
    /// Enter, por flanco (solo el frame en que baja).
    pub confirm_pressed: bool,
    /// Espacio, por flanco.
    pub jump_pressed: bool,
    /// Shift izquierdo, mantenido.
    pub slide_held: bool,
}

pub fn poll(rl: &RaylibHandle) -> InputSnapshot {
    InputSnapshot {
        confirm_pressed: rl.is_key_pressed(KeyboardKey::KEY_ENTER),
        jump_pressed: rl.is_key_pressed(KeyboardKey::KEY_SPACE),
        slide_held: rl.is_key_down(KeyboardKey::KEY_LEFT_SHIFT),
    }
}

//! Keyboard decoding: crossterm key events to discrete game commands
//!
//! Held-key repeat comes from the terminal's own auto-repeat; every event
//! decodes independently and unbound keys are ignored.

use crate::game::Action;
use crate::settings::Settings;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Per-action key bindings resolved from settings
#[derive(Debug, Clone)]
pub struct InputMap {
    move_left: Vec<KeyCode>,
    move_right: Vec<KeyCode>,
    rotate: Vec<KeyCode>,
    soft_drop: Vec<KeyCode>,
    hard_drop: Vec<KeyCode>,
    pause: Vec<KeyCode>,
    quit: Vec<KeyCode>,
}

impl InputMap {
    /// Resolve bindings from settings
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            move_left: parse_keys(&settings.keys.move_left),
            move_right: parse_keys(&settings.keys.move_right),
            rotate: parse_keys(&settings.keys.rotate),
            soft_drop: parse_keys(&settings.keys.soft_drop),
            hard_drop: parse_keys(&settings.keys.hard_drop),
            pause: parse_keys(&settings.keys.pause),
            quit: parse_keys(&settings.keys.quit),
        }
    }

    /// Decode one key event; unbound keys decode to nothing
    pub fn action(&self, key: KeyEvent) -> Option<Action> {
        // Ctrl+C always quits
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(Action::Quit);
        }

        let code = normalize_key(key.code);

        if self.move_left.contains(&code) {
            Some(Action::MoveLeft)
        } else if self.move_right.contains(&code) {
            Some(Action::MoveRight)
        } else if self.rotate.contains(&code) {
            Some(Action::Rotate)
        } else if self.soft_drop.contains(&code) {
            Some(Action::SoftDrop)
        } else if self.hard_drop.contains(&code) {
            Some(Action::HardDrop)
        } else if self.pause.contains(&code) {
            Some(Action::Pause)
        } else if self.quit.contains(&code) {
            Some(Action::Quit)
        } else {
            None
        }
    }
}

impl Default for InputMap {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}

/// Parse a key string into a KeyCode
fn parse_key(s: &str) -> KeyCode {
    match s.to_lowercase().as_str() {
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "space" => KeyCode::Char(' '),
        "enter" => KeyCode::Enter,
        "tab" => KeyCode::Tab,
        "esc" | "escape" => KeyCode::Esc,
        s if s.len() == 1 => KeyCode::Char(s.chars().next().unwrap()),
        _ => KeyCode::Null,
    }
}

fn parse_keys(keys: &[String]) -> Vec<KeyCode> {
    keys.iter().map(|s| parse_key(s)).collect()
}

/// Normalize key codes for consistent matching
fn normalize_key(code: KeyCode) -> KeyCode {
    match code {
        KeyCode::Char(c) => KeyCode::Char(c.to_ascii_lowercase()),
        other => other,
    }
}

//! Logical key roles recognised by the keyboard sensor.
//!
//! Space doubles as Lift and Drop; which one applies is decided by the sensor's
//! state, not here. Modifiers are ignored entirely.

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use std::fmt;

/// Physical keys the sensor assigns a role to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DragKey {
    Space,
    Escape,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
}

impl DragKey {
    /// Map a crossterm key code to its drag role, if any.
    pub fn from_code(code: KeyCode) -> Option<Self> {
        match code {
            KeyCode::Char(' ') => Some(DragKey::Space),
            KeyCode::Esc => Some(DragKey::Escape),
            KeyCode::Up => Some(DragKey::ArrowUp),
            KeyCode::Down => Some(DragKey::ArrowDown),
            KeyCode::Left => Some(DragKey::ArrowLeft),
            KeyCode::Right => Some(DragKey::ArrowRight),
            _ => None,
        }
    }

    pub fn from_key_event(event: &KeyEvent) -> Option<Self> {
        Self::from_code(event.code)
    }

    /// True for the four arrow keys.
    pub fn is_movement(self) -> bool {
        matches!(
            self,
            DragKey::ArrowUp | DragKey::ArrowDown | DragKey::ArrowLeft | DragKey::ArrowRight
        )
    }

    pub fn name(self) -> &'static str {
        match self {
            DragKey::Space => "Space",
            DragKey::Escape => "Escape",
            DragKey::ArrowUp => "ArrowUp",
            DragKey::ArrowDown => "ArrowDown",
            DragKey::ArrowLeft => "ArrowLeft",
            DragKey::ArrowRight => "ArrowRight",
        }
    }
}

impl fmt::Display for DragKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Whether the event counts as a key-down. Held keys produce `Repeat` events on
/// terminals with keyboard enhancement enabled; those are key-downs too.
pub fn is_key_down(event: &KeyEvent) -> bool {
    matches!(event.kind, KeyEventKind::Press | KeyEventKind::Repeat)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::crossterm::event::{KeyEventState, KeyModifiers};

    #[test]
    fn maps_recognised_keys() {
        assert_eq!(DragKey::from_code(KeyCode::Char(' ')), Some(DragKey::Space));
        assert_eq!(DragKey::from_code(KeyCode::Esc), Some(DragKey::Escape));
        assert_eq!(DragKey::from_code(KeyCode::Up), Some(DragKey::ArrowUp));
        assert_eq!(DragKey::from_code(KeyCode::Down), Some(DragKey::ArrowDown));
        assert_eq!(DragKey::from_code(KeyCode::Left), Some(DragKey::ArrowLeft));
        assert_eq!(DragKey::from_code(KeyCode::Right), Some(DragKey::ArrowRight));
    }

    #[test]
    fn unrecognised_keys_have_no_role() {
        assert_eq!(DragKey::from_code(KeyCode::Tab), None);
        assert_eq!(DragKey::from_code(KeyCode::Enter), None);
        assert_eq!(DragKey::from_code(KeyCode::Char('j')), None);
    }

    #[test]
    fn modifiers_do_not_change_the_role() {
        let event = KeyEvent::new(KeyCode::Char(' '), KeyModifiers::CONTROL);
        assert_eq!(DragKey::from_key_event(&event), Some(DragKey::Space));
    }

    #[test]
    fn release_is_not_a_key_down() {
        let press = KeyEvent::new(KeyCode::Down, KeyModifiers::NONE);
        let repeat =
            KeyEvent::new_with_kind(KeyCode::Down, KeyModifiers::NONE, KeyEventKind::Repeat);
        let release = KeyEvent {
            code: KeyCode::Down,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };

        assert!(is_key_down(&press));
        assert!(is_key_down(&repeat));
        assert!(!is_key_down(&release));
    }

    #[test]
    fn only_arrows_are_movement() {
        assert!(DragKey::ArrowLeft.is_movement());
        assert!(!DragKey::Space.is_movement());
        assert!(!DragKey::Escape.is_movement());
    }
}

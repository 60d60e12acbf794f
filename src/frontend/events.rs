//! Frontend-agnostic input events.
//!
//! The terminal frontend translates crossterm's event stream into this enum so
//! the main loop only handles one event shape.

use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers};

/// Events emitted by a frontend
#[derive(Debug, Clone, PartialEq)]
pub enum FrontendEvent {
    /// Keyboard input
    Key {
        code: KeyCode,
        modifiers: KeyModifiers,
    },
    /// Terminal resize
    Resize { width: u16, height: u16 },
    /// Bracketed paste
    Paste { text: String },
}

impl FrontendEvent {
    pub fn key(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self::Key { code, modifiers }
    }

    pub fn resize(width: u16, height: u16) -> Self {
        Self::Resize { width, height }
    }

    pub fn paste(text: String) -> Self {
        Self::Paste { text }
    }

    /// Convert a crossterm event, dropping the kinds the gallery ignores
    pub fn from_crossterm(event: Event) -> Option<Self> {
        match event {
            // Only key presses; repeats and releases would double-type on some terminals
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                Some(Self::key(key.code, key.modifiers))
            }
            Event::Resize(width, height) => Some(Self::resize(width, height)),
            Event::Paste(text) => Some(Self::paste(text)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyEventState};

    #[test]
    fn test_event_creation() {
        let key_event = FrontendEvent::key(KeyCode::Char('a'), KeyModifiers::NONE);
        assert!(matches!(key_event, FrontendEvent::Key { .. }));

        let resize_event = FrontendEvent::resize(120, 40);
        assert!(matches!(
            resize_event,
            FrontendEvent::Resize {
                width: 120,
                height: 40
            }
        ));
    }

    #[test]
    fn test_crossterm_conversion() {
        let press = Event::Key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
        assert_eq!(
            FrontendEvent::from_crossterm(press),
            Some(FrontendEvent::key(KeyCode::Enter, KeyModifiers::NONE))
        );

        let release = Event::Key(KeyEvent {
            code: KeyCode::Enter,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert_eq!(FrontendEvent::from_crossterm(release), None);

        assert_eq!(
            FrontendEvent::from_crossterm(Event::Paste("Paris".to_string())),
            Some(FrontendEvent::paste("Paris".to_string()))
        );
        assert_eq!(FrontendEvent::from_crossterm(Event::FocusGained), None);
    }
}

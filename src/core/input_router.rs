//! Input routing for gallery widgets
//!
//! Routes keyboard input to a `GalleryAction` based on which widget has focus.
//! Gallery-wide keys (quit, switch widget) are checked first.

use crate::core::actions::GalleryAction;
use crate::data::WidgetKind;
use crate::widgets::calculator::Operator;
use crossterm::event::{KeyCode, KeyModifiers};

/// Route a key to an action for the focused widget
pub fn route_input(code: KeyCode, modifiers: KeyModifiers, focused: WidgetKind) -> GalleryAction {
    if let Some(action) = global_action(code, modifiers) {
        return action;
    }

    let ctrl = modifiers.contains(KeyModifiers::CONTROL);
    if ctrl && code == KeyCode::Char('u') && is_text_widget(focused) {
        return GalleryAction::ClearField;
    }

    match focused {
        WidgetKind::Counter => match code {
            KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Up => GalleryAction::Increment,
            KeyCode::Char('-') | KeyCode::Down => GalleryAction::Decrement,
            KeyCode::Char('r') | KeyCode::Char('0') => GalleryAction::Reset,
            _ => GalleryAction::None,
        },
        WidgetKind::Stopwatch => match code {
            KeyCode::Char('s') => GalleryAction::Start,
            KeyCode::Char('x') | KeyCode::Char('p') => GalleryAction::Stop,
            KeyCode::Char('r') => GalleryAction::Reset,
            _ => GalleryAction::None,
        },
        WidgetKind::Clock => GalleryAction::None,
        WidgetKind::Todo => match code {
            KeyCode::Char('t') if ctrl => GalleryAction::ToggleSelected,
            KeyCode::Delete => GalleryAction::RemoveSelected,
            KeyCode::Up => GalleryAction::PreviousField,
            KeyCode::Down => GalleryAction::NextField,
            _ => text_action(code, modifiers),
        },
        WidgetKind::Calculator => match code {
            KeyCode::Char(c) if !ctrl && c != '-' => match Operator::from_char(c) {
                Some(op) => GalleryAction::Operate(op),
                None => text_action(code, modifiers),
            },
            KeyCode::Up => GalleryAction::PreviousField,
            KeyCode::Down => GalleryAction::NextField,
            _ => text_action(code, modifiers),
        },
        WidgetKind::Form => match code {
            KeyCode::Left | KeyCode::PageUp => GalleryAction::Back,
            KeyCode::Right | KeyCode::PageDown => GalleryAction::Forward,
            _ => text_action(code, modifiers),
        },
        WidgetKind::Expenses => match code {
            KeyCode::Up => GalleryAction::PreviousField,
            KeyCode::Down => GalleryAction::NextField,
            _ => text_action(code, modifiers),
        },
        WidgetKind::Quote => match code {
            KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('n') => GalleryAction::Submit,
            _ => GalleryAction::None,
        },
        WidgetKind::Toggle => match code {
            KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('t') => GalleryAction::Submit,
            _ => GalleryAction::None,
        },
        WidgetKind::Images | WidgetKind::Recipes | WidgetKind::Faq | WidgetKind::Products => {
            match code {
                KeyCode::Up => GalleryAction::PreviousField,
                KeyCode::Down => GalleryAction::NextField,
                KeyCode::Enter | KeyCode::Char(' ') => GalleryAction::Submit,
                KeyCode::Backspace | KeyCode::Left => GalleryAction::Back,
                _ => GalleryAction::None,
            }
        }
        WidgetKind::Tabs => match code {
            KeyCode::Left => GalleryAction::Back,
            KeyCode::Right => GalleryAction::Forward,
            _ => GalleryAction::None,
        },
        WidgetKind::Rating => match code {
            KeyCode::Char(c @ '0'..='5') => GalleryAction::Rate(c as u8 - b'0'),
            KeyCode::Char('+') | KeyCode::Right => GalleryAction::Increment,
            KeyCode::Char('-') | KeyCode::Left => GalleryAction::Decrement,
            _ => GalleryAction::None,
        },
        WidgetKind::Color
        | WidgetKind::NameForm
        | WidgetKind::Weather
        | WidgetKind::Fruits
        | WidgetKind::Movies => text_action(code, modifiers),
    }
}

fn global_action(code: KeyCode, modifiers: KeyModifiers) -> Option<GalleryAction> {
    match code {
        KeyCode::Esc => Some(GalleryAction::Quit),
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => Some(GalleryAction::Quit),
        KeyCode::Tab => Some(GalleryAction::NextWidget),
        KeyCode::BackTab => Some(GalleryAction::PreviousWidget),
        _ => None,
    }
}

/// Keys shared by every widget with a text field
fn text_action(code: KeyCode, modifiers: KeyModifiers) -> GalleryAction {
    match code {
        KeyCode::Char(c)
            if !modifiers.contains(KeyModifiers::CONTROL) && !modifiers.contains(KeyModifiers::ALT) =>
        {
            GalleryAction::Insert(c)
        }
        KeyCode::Backspace => GalleryAction::Backspace,
        KeyCode::Enter => GalleryAction::Submit,
        _ => GalleryAction::None,
    }
}

fn is_text_widget(kind: WidgetKind) -> bool {
    matches!(
        kind,
        WidgetKind::Todo
            | WidgetKind::Calculator
            | WidgetKind::Color
            | WidgetKind::NameForm
            | WidgetKind::Weather
            | WidgetKind::Expenses
            | WidgetKind::Fruits
            | WidgetKind::Form
            | WidgetKind::Movies
    )
}

/// Footer help for the focused widget
pub fn help_text(kind: WidgetKind) -> &'static str {
    match kind {
        WidgetKind::Counter => "+/↑ increment  -/↓ decrement  r reset",
        WidgetKind::Todo => "type + Enter add  ↑/↓ select  Ctrl-T done  Del delete",
        WidgetKind::Calculator => "type numbers  ↑/↓ switch field  + - * / compute",
        WidgetKind::Clock => "ticks once per period",
        WidgetKind::Stopwatch => "s start  x stop  r reset",
        WidgetKind::Form => "type value  Enter/→ next  ← back  Enter on last step submits",
        WidgetKind::Weather => "type a city  Enter look up",
        WidgetKind::Expenses => "type  ↑/↓ switch field  Enter add",
        WidgetKind::Fruits | WidgetKind::Movies => "type to filter",
        WidgetKind::Color => "type a #rrggbb color",
        WidgetKind::Quote => "Enter/n new quote",
        WidgetKind::Toggle => "Enter/t toggle",
        WidgetKind::NameForm => "type your name  Enter submit",
        WidgetKind::Images | WidgetKind::Products => "↑/↓ move  Enter view  ←/Backspace close",
        WidgetKind::Recipes => "↑/↓ move  Enter show recipe  ←/Backspace close",
        WidgetKind::Faq => "↑/↓ move  Enter expand/collapse",
        WidgetKind::Tabs => "←/→ switch tab",
        WidgetKind::Rating => "0-5 rate  ←/→ adjust",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, focused: WidgetKind) -> GalleryAction {
        route_input(code, KeyModifiers::NONE, focused)
    }

    #[test]
    fn test_global_keys_win() {
        assert_eq!(key(KeyCode::Esc, WidgetKind::Weather), GalleryAction::Quit);
        assert_eq!(key(KeyCode::Tab, WidgetKind::Form), GalleryAction::NextWidget);
        assert_eq!(
            route_input(KeyCode::Char('c'), KeyModifiers::CONTROL, WidgetKind::Todo),
            GalleryAction::Quit
        );
    }

    #[test]
    fn test_counter_keys() {
        assert_eq!(key(KeyCode::Char('+'), WidgetKind::Counter), GalleryAction::Increment);
        assert_eq!(key(KeyCode::Char('-'), WidgetKind::Counter), GalleryAction::Decrement);
        assert_eq!(key(KeyCode::Char('r'), WidgetKind::Counter), GalleryAction::Reset);
        assert_eq!(key(KeyCode::Char('q'), WidgetKind::Counter), GalleryAction::None);
    }

    #[test]
    fn test_text_widgets_take_letters() {
        // 's' starts the stopwatch but is just a letter in the weather box
        assert_eq!(key(KeyCode::Char('s'), WidgetKind::Stopwatch), GalleryAction::Start);
        assert_eq!(key(KeyCode::Char('s'), WidgetKind::Weather), GalleryAction::Insert('s'));
        assert_eq!(key(KeyCode::Enter, WidgetKind::Weather), GalleryAction::Submit);
    }

    #[test]
    fn test_calculator_operators() {
        assert_eq!(
            key(KeyCode::Char('*'), WidgetKind::Calculator),
            GalleryAction::Operate(Operator::Mul)
        );
        // Minus is resolved by the core: sign or subtraction
        assert_eq!(key(KeyCode::Char('-'), WidgetKind::Calculator), GalleryAction::Insert('-'));
        assert_eq!(key(KeyCode::Char('7'), WidgetKind::Calculator), GalleryAction::Insert('7'));
    }

    #[test]
    fn test_form_navigation() {
        assert_eq!(key(KeyCode::Left, WidgetKind::Form), GalleryAction::Back);
        assert_eq!(key(KeyCode::Right, WidgetKind::Form), GalleryAction::Forward);
    }

    #[test]
    fn test_rating_keys() {
        assert_eq!(key(KeyCode::Char('4'), WidgetKind::Rating), GalleryAction::Rate(4));
        assert_eq!(key(KeyCode::Char('0'), WidgetKind::Rating), GalleryAction::Rate(0));
        assert_eq!(key(KeyCode::Char('7'), WidgetKind::Rating), GalleryAction::None);
        assert_eq!(key(KeyCode::Right, WidgetKind::Rating), GalleryAction::Increment);
    }

    #[test]
    fn test_browsing_keys() {
        assert_eq!(key(KeyCode::Down, WidgetKind::Recipes), GalleryAction::NextField);
        assert_eq!(key(KeyCode::Enter, WidgetKind::Faq), GalleryAction::Submit);
        assert_eq!(key(KeyCode::Backspace, WidgetKind::Products), GalleryAction::Back);
        assert_eq!(key(KeyCode::Right, WidgetKind::Tabs), GalleryAction::Forward);
        assert_eq!(key(KeyCode::Char('n'), WidgetKind::Quote), GalleryAction::Submit);
        assert_eq!(key(KeyCode::Char('n'), WidgetKind::NameForm), GalleryAction::Insert('n'));
    }

    #[test]
    fn test_clear_field_only_for_text_widgets() {
        assert_eq!(
            route_input(KeyCode::Char('u'), KeyModifiers::CONTROL, WidgetKind::Fruits),
            GalleryAction::ClearField
        );
        assert_eq!(
            route_input(KeyCode::Char('u'), KeyModifiers::CONTROL, WidgetKind::Counter),
            GalleryAction::None
        );
    }
}

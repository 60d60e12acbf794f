//! Shared action vocabulary for the gallery.
//!
//! The input router turns raw key events into these semantic actions;
//! `AppCore::apply` decides what each one means for the focused widget.

use crate::widgets::calculator::Operator;

/// All possible gallery actions
#[derive(Debug, Clone, PartialEq)]
pub enum GalleryAction {
    // Application
    Quit,
    NextWidget,
    PreviousWidget,

    // Text editing (focused field of the focused widget)
    Insert(char),
    InsertText(String),
    Backspace,
    ClearField,

    // Field / row navigation
    NextField,
    PreviousField,

    // Confirmation: add todo, add expense, trigger lookup, next step or submit,
    // new quote, toggle, open the item under the cursor
    Submit,

    // Counter and star rating
    Increment,
    Decrement,
    Reset,
    Rate(u8),

    // Stopwatch
    Start,
    Stop,

    // Form steps, tabs; Back also closes an opened item
    Back,
    Forward,

    // Todo list
    ToggleSelected,
    RemoveSelected,

    // Calculator
    Operate(Operator),

    // Key not bound in this context
    None,
}

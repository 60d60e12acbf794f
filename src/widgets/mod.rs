//! Widget state structs (rendering-agnostic)
//!
//! Every widget in the gallery keeps its state here. These structs hold data
//! and the operations that change it, but no rendering logic; the TUI reads
//! them and draws.

pub mod calculator;
pub mod clock;
pub mod color;
pub mod counter;
pub mod expenses;
pub mod filter;
pub mod lookup;
pub mod name_form;
pub mod picker;
pub mod quote;
pub mod rating;
pub mod tabs;
pub mod timer;
pub mod todo;
pub mod toggle;
pub mod wizard;

pub use calculator::CalculatorState;
pub use clock::DigitalClock;
pub use color::ColorPicker;
pub use counter::CounterState;
pub use expenses::ExpenseTracker;
pub use filter::{FilterItem, SearchFilter};
pub use lookup::LookupController;
pub use name_form::NameForm;
pub use picker::Picker;
pub use quote::QuoteGenerator;
pub use rating::StarRating;
pub use tabs::TabsState;
pub use timer::{TimerEngine, TimerId};
pub use todo::TodoList;
pub use toggle::ToggleState;
pub use wizard::MultiStepForm;

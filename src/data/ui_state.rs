//! UI State - gallery focus and status line
//!
//! Independent of rendering; the TUI reads it to decide which panel to draw.

/// Every widget shown in the gallery, in sidebar order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WidgetKind {
    Counter,
    Todo,
    Calculator,
    Color,
    Clock,
    Quote,
    Toggle,
    NameForm,
    Weather,
    Images,
    Recipes,
    Expenses,
    Faq,
    Tabs,
    Rating,
    Products,
    Fruits,
    Stopwatch,
    Form,
    Movies,
}

impl WidgetKind {
    pub const ALL: [WidgetKind; 20] = [
        WidgetKind::Counter,
        WidgetKind::Todo,
        WidgetKind::Calculator,
        WidgetKind::Color,
        WidgetKind::Clock,
        WidgetKind::Quote,
        WidgetKind::Toggle,
        WidgetKind::NameForm,
        WidgetKind::Weather,
        WidgetKind::Images,
        WidgetKind::Recipes,
        WidgetKind::Expenses,
        WidgetKind::Faq,
        WidgetKind::Tabs,
        WidgetKind::Rating,
        WidgetKind::Products,
        WidgetKind::Fruits,
        WidgetKind::Stopwatch,
        WidgetKind::Form,
        WidgetKind::Movies,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            WidgetKind::Counter => "Counter",
            WidgetKind::Todo => "Todo List",
            WidgetKind::Calculator => "Calculator",
            WidgetKind::Color => "Color Picker",
            WidgetKind::Clock => "Digital Clock",
            WidgetKind::Quote => "Quote Generator",
            WidgetKind::Toggle => "Toggle",
            WidgetKind::NameForm => "Form Validation",
            WidgetKind::Weather => "Weather",
            WidgetKind::Images => "Image Gallery",
            WidgetKind::Recipes => "Recipes",
            WidgetKind::Expenses => "Expense Tracker",
            WidgetKind::Faq => "FAQs",
            WidgetKind::Tabs => "Tabs",
            WidgetKind::Rating => "Star Rating",
            WidgetKind::Products => "Products",
            WidgetKind::Fruits => "Fruit Search",
            WidgetKind::Stopwatch => "Stopwatch",
            WidgetKind::Form => "Multi-step Form",
            WidgetKind::Movies => "Movie Browser",
        }
    }

    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|k| k == self).unwrap_or(0)
    }

    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Application UI state
#[derive(Clone, Debug)]
pub struct UiState {
    /// Widget receiving keyboard input
    pub focused: WidgetKind,

    /// Status bar text (last notable event)
    pub status_text: String,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            focused: WidgetKind::Counter,
            status_text: String::new(),
        }
    }

    pub fn focus_next(&mut self) {
        self.focused = self.focused.next();
    }

    pub fn focus_prev(&mut self) {
        self.focused = self.focused.prev();
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}

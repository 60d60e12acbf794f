use crate::config::{Config, FaqDef, ProductDef, RecipeDef};
use crate::core::actions::GalleryAction;
use crate::data::{UiState, WidgetKind};
use crate::network::{OpenWeatherClient, WeatherReport};
use crate::widgets::calculator::{CalculatorState, Operator};
use crate::widgets::color::Rgb;
use crate::widgets::lookup::{LookupResolved, LookupSource};
use crate::widgets::timer::TimerTick;
use crate::widgets::{
    ColorPicker, CounterState, DigitalClock, ExpenseTracker, FilterItem, LookupController,
    MultiStepForm, NameForm, Picker, QuoteGenerator, SearchFilter, StarRating, TabsState,
    TimerEngine, TimerId, TodoList, ToggleState,
};
use anyhow::Result;
use tokio::sync::mpsc;

pub const STOPWATCH_TIMER: TimerId = TimerId(1);
pub const CLOCK_TIMER: TimerId = TimerId(2);

/// Core application state (frontend-agnostic)
///
/// Owns every widget in the gallery, applies routed actions to the focused
/// one, and drains the tick and lookup channels that background tasks feed.
/// All widget state is mutated here, on the UI thread.
pub struct AppCore<S: LookupSource<Output = WeatherReport> = OpenWeatherClient> {
    /// Application configuration
    pub config: Config,

    /// Focus and status line
    pub ui_state: UiState,

    /// Application running flag
    pub running: bool,

    /// Set whenever something visible changed
    pub needs_render: bool,

    pub counter: CounterState,
    pub todos: TodoList,
    pub calculator: CalculatorState,
    pub stopwatch: TimerEngine,
    pub clock_timer: TimerEngine,
    pub clock: DigitalClock,
    pub form: MultiStepForm,
    pub weather: LookupController<S>,
    pub expenses: ExpenseTracker,
    pub fruits: SearchFilter,
    pub movies: SearchFilter,
    pub color: ColorPicker,
    pub quote: QuoteGenerator,
    pub toggle: ToggleState,
    pub name_form: NameForm,
    pub images: Picker<String>,
    pub recipes: Picker<RecipeDef>,
    pub faqs: Picker<FaqDef>,
    pub tabs: TabsState,
    pub rating: StarRating,
    pub products: Picker<ProductDef>,

    tick_rx: mpsc::UnboundedReceiver<TimerTick>,
    lookup_rx: mpsc::UnboundedReceiver<LookupResolved<WeatherReport>>,
}

impl AppCore<OpenWeatherClient> {
    /// Build the gallery backed by the OpenWeather client
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        let source = OpenWeatherClient::new(&config.weather);
        Ok(Self::with_source(config, source))
    }
}

impl<S: LookupSource<Output = WeatherReport>> AppCore<S> {
    pub fn with_source(config: Config, source: S) -> Self {
        let (tick_tx, tick_rx) = mpsc::unbounded_channel();
        let (lookup_tx, lookup_rx) = mpsc::unbounded_channel();
        let period = config.timers.period();

        let fruits = config.filters.fruits.iter().map(|f| FilterItem::new(f)).collect();
        let movies = config
            .filters
            .movies
            .iter()
            .map(|m| FilterItem::with_detail(&m.title, m.year.to_string()))
            .collect();

        Self {
            ui_state: UiState::new(),
            running: true,
            needs_render: true,
            counter: CounterState::new(),
            todos: TodoList::new(),
            calculator: CalculatorState::new(),
            stopwatch: TimerEngine::new(STOPWATCH_TIMER, period, tick_tx.clone()),
            clock_timer: TimerEngine::new(CLOCK_TIMER, period, tick_tx),
            clock: DigitalClock::new(&config.clock.format),
            form: MultiStepForm::new(config.wizard.steps.clone()),
            weather: LookupController::new(source, lookup_tx),
            expenses: ExpenseTracker::new(&config.expenses.currency),
            fruits: SearchFilter::new("Fruits", fruits),
            movies: SearchFilter::new("Movies", movies),
            color: ColorPicker::new(
                Rgb::parse(&config.color.initial).unwrap_or(Rgb(255, 255, 255)),
            ),
            quote: QuoteGenerator::new(config.catalog.quotes.clone()),
            toggle: ToggleState::default(),
            name_form: NameForm::new(),
            images: Picker::new(config.catalog.images.clone()),
            recipes: Picker::new(config.catalog.recipes.clone()),
            faqs: Picker::new(config.catalog.faqs.clone()),
            tabs: TabsState::new(config.catalog.tabs.clone()),
            rating: StarRating::default(),
            products: Picker::new(config.catalog.products.clone()),
            tick_rx,
            lookup_rx,
            config,
        }
    }

    /// Start the always-on clock. Must be called from within a tokio runtime.
    pub fn mount(&mut self) {
        self.clock_timer.start();
        tracing::info!("Gallery mounted");
    }

    /// Cancel every tick schedule
    pub fn unmount(&mut self) {
        self.stopwatch.stop();
        self.clock_timer.stop();
        tracing::info!("Gallery unmounted");
    }

    /// Apply messages from tick and lookup tasks. Returns how many were applied.
    pub fn process_pending(&mut self) -> usize {
        let mut applied = 0;

        while let Ok(tick) = self.tick_rx.try_recv() {
            self.dispatch_tick(tick);
            applied += 1;
        }

        while let Ok(resolved) = self.lookup_rx.try_recv() {
            self.weather.resolve(resolved);
            self.ui_state.status_text = match self.weather.state().error_message() {
                Some(message) => format!("Weather lookup failed: {}", message),
                None => "Weather updated".to_string(),
            };
            applied += 1;
        }

        if applied > 0 {
            self.needs_render = true;
        }
        applied
    }

    fn dispatch_tick(&mut self, tick: TimerTick) {
        match tick.timer {
            STOPWATCH_TIMER => self.stopwatch.tick(),
            CLOCK_TIMER => {
                self.clock_timer.tick();
                self.clock.refresh(chrono::Local::now());
            }
            other => tracing::warn!(timer = ?other, "Tick for unknown timer"),
        }
    }

    /// Apply a routed action to the gallery or the focused widget
    pub fn apply(&mut self, action: GalleryAction) {
        if action == GalleryAction::None {
            return;
        }
        tracing::debug!(?action, focused = ?self.ui_state.focused, "Applying action");

        match action {
            GalleryAction::Quit => self.running = false,
            GalleryAction::NextWidget => self.ui_state.focus_next(),
            GalleryAction::PreviousWidget => self.ui_state.focus_prev(),
            GalleryAction::Insert(c) => self.insert_char(c),
            GalleryAction::InsertText(text) => {
                for c in text.chars().filter(|c| !c.is_control()) {
                    self.insert_char(c);
                }
            }
            GalleryAction::Backspace => self.edit_text(|text| {
                text.pop();
            }),
            GalleryAction::ClearField => self.edit_text(String::clear),
            GalleryAction::NextField => self.move_field(true),
            GalleryAction::PreviousField => self.move_field(false),
            GalleryAction::Submit => self.submit(),
            GalleryAction::Increment => match self.ui_state.focused {
                WidgetKind::Rating => self.rating.increase(),
                _ => self.counter.increment(),
            },
            GalleryAction::Decrement => match self.ui_state.focused {
                WidgetKind::Rating => self.rating.decrease(),
                _ => self.counter.decrement(),
            },
            GalleryAction::Reset => match self.ui_state.focused {
                WidgetKind::Stopwatch => self.stopwatch.reset(),
                _ => self.counter.reset(),
            },
            GalleryAction::Rate(stars) => self.rating.set(stars),
            GalleryAction::Start => self.stopwatch.start(),
            GalleryAction::Stop => self.stopwatch.stop(),
            GalleryAction::Back => self.back(),
            GalleryAction::Forward => match self.ui_state.focused {
                WidgetKind::Tabs => self.tabs.next(),
                _ => self.form.next(),
            },
            GalleryAction::ToggleSelected => self.todos.toggle_selected(),
            GalleryAction::RemoveSelected => self.todos.remove_selected(),
            GalleryAction::Operate(op) => self.operate(op),
            GalleryAction::None => {}
        }
        self.needs_render = true;
    }

    fn insert_char(&mut self, c: char) {
        if self.ui_state.focused == WidgetKind::Calculator {
            let current = self.calculator.operand(self.calculator.focused);
            if CalculatorState::accepts(current, c) {
                self.edit_text(|text| text.push(c));
            } else if let Some(op) = Operator::from_char(c) {
                self.operate(op);
            }
            return;
        }
        self.edit_text(|text| text.push(c));
    }

    /// Edit the focused text field through its widget's setter
    fn edit_text(&mut self, edit: impl FnOnce(&mut String)) {
        match self.ui_state.focused {
            WidgetKind::Todo => {
                let mut text = self.todos.draft.clone();
                edit(&mut text);
                self.todos.set_draft(&text);
            }
            WidgetKind::Calculator => {
                let which = self.calculator.focused;
                let mut text = self.calculator.operand(which).to_string();
                edit(&mut text);
                self.calculator.set_operand(which, &text);
            }
            WidgetKind::Form => {
                let mut text = self.form.current_value().to_string();
                edit(&mut text);
                self.form.set_current_value(&text);
            }
            WidgetKind::Weather => {
                let mut text = self.weather.state().query().to_string();
                edit(&mut text);
                self.weather.set_query(text);
            }
            WidgetKind::Expenses => {
                let which = self.expenses.focused;
                let mut text = self.expenses.field(which).to_string();
                edit(&mut text);
                self.expenses.set_field(which, &text);
            }
            WidgetKind::Fruits => {
                let mut text = self.fruits.query.clone();
                edit(&mut text);
                self.fruits.set_query(&text);
            }
            WidgetKind::Movies => {
                let mut text = self.movies.query.clone();
                edit(&mut text);
                self.movies.set_query(&text);
            }
            WidgetKind::Color => {
                let mut text = self.color.draft.clone();
                edit(&mut text);
                self.color.set_draft(&text);
            }
            WidgetKind::NameForm => {
                let mut text = self.name_form.name.clone();
                edit(&mut text);
                self.name_form.set_name(&text);
            }
            WidgetKind::Counter
            | WidgetKind::Clock
            | WidgetKind::Stopwatch
            | WidgetKind::Quote
            | WidgetKind::Toggle
            | WidgetKind::Images
            | WidgetKind::Recipes
            | WidgetKind::Faq
            | WidgetKind::Tabs
            | WidgetKind::Rating
            | WidgetKind::Products => {}
        }
    }

    fn move_field(&mut self, forward: bool) {
        match self.ui_state.focused {
            WidgetKind::Todo if forward => self.todos.select_next(),
            WidgetKind::Todo => self.todos.select_prev(),
            WidgetKind::Calculator => self.calculator.toggle_focus(),
            WidgetKind::Expenses => self.expenses.toggle_focus(),
            WidgetKind::Images if forward => self.images.cursor_next(),
            WidgetKind::Images => self.images.cursor_prev(),
            WidgetKind::Recipes if forward => self.recipes.cursor_next(),
            WidgetKind::Recipes => self.recipes.cursor_prev(),
            WidgetKind::Faq if forward => self.faqs.cursor_next(),
            WidgetKind::Faq => self.faqs.cursor_prev(),
            WidgetKind::Products if forward => self.products.cursor_next(),
            WidgetKind::Products => self.products.cursor_prev(),
            _ => {}
        }
    }

    fn back(&mut self) {
        match self.ui_state.focused {
            WidgetKind::Tabs => self.tabs.prev(),
            WidgetKind::Images => self.images.close(),
            WidgetKind::Recipes => self.recipes.close(),
            WidgetKind::Products => self.products.close(),
            WidgetKind::Faq => self.faqs.close(),
            _ => self.form.prev(),
        }
    }

    fn submit(&mut self) {
        match self.ui_state.focused {
            WidgetKind::Todo => {
                self.todos.add();
            }
            WidgetKind::Expenses => {
                if self.expenses.add() {
                    self.ui_state.status_text =
                        format!("Balance: {}", self.expenses.balance_display());
                }
            }
            WidgetKind::Form => {
                if self.form.state().is_last() {
                    if let Some(snapshot) = self.form.submit() {
                        self.ui_state.status_text = format!("Submitted {}", snapshot.to_json());
                    }
                } else {
                    self.form.next();
                }
            }
            WidgetKind::Quote => self.quote.next_quote(),
            WidgetKind::Toggle => self.toggle.toggle(),
            WidgetKind::NameForm => {
                if self.name_form.submit() {
                    if let Some(greeting) = self.name_form.greeting() {
                        self.ui_state.status_text = greeting.to_string();
                    }
                }
            }
            WidgetKind::Images => self.images.open_cursor(),
            WidgetKind::Recipes => self.recipes.open_cursor(),
            WidgetKind::Faq => self.faqs.toggle_cursor(),
            WidgetKind::Products => self.products.open_cursor(),
            WidgetKind::Weather => {
                if self.weather.trigger() {
                    self.ui_state.status_text =
                        format!("Looking up {}...", self.weather.state().query());
                }
            }
            _ => {}
        }
    }

    fn operate(&mut self, op: Operator) {
        if self.ui_state.focused != WidgetKind::Calculator {
            return;
        }
        let result = self.calculator.compute(op);
        tracing::debug!(op = %op.symbol(), %result, "Calculator computed");
    }
}

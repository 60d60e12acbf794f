//! Per-widget panels.
//!
//! Each panel turns one widget's state into lines; `render_panel` wraps them
//! in a bordered block titled after the focused widget.

use crate::core::AppCore;
use crate::data::WidgetKind;
use crate::network::WeatherReport;
use crate::widgets::calculator::Operand;
use crate::widgets::expenses::ExpenseField;
use crate::widgets::lookup::{LookupSource, LookupStatus};
use crate::widgets::{Picker, SearchFilter};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap},
};

const ACCENT: Color = Color::Cyan;
const DIM: Color = Color::DarkGray;

pub fn render_panel<S: LookupSource<Output = WeatherReport>>(
    core: &AppCore<S>,
    area: Rect,
    buf: &mut Buffer,
) {
    if area.width < 3 || area.height < 3 {
        return;
    }

    let focused = core.ui_state.focused;
    let lines = match focused {
        WidgetKind::Counter => counter_lines(core),
        WidgetKind::Todo => todo_lines(core),
        WidgetKind::Calculator => calculator_lines(core),
        WidgetKind::Clock => vec![Line::from(Span::styled(
            core.clock.display(),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ))],
        WidgetKind::Stopwatch => stopwatch_lines(core),
        WidgetKind::Form => form_lines(core),
        WidgetKind::Weather => {
            let mut lines = vec![input_line("City", core.weather.state().query(), true)];
            lines.push(Line::default());
            lines.extend(weather_lines(core.weather.state().status()));
            lines
        }
        WidgetKind::Expenses => expense_lines(core),
        WidgetKind::Fruits => filter_lines(&core.fruits),
        WidgetKind::Movies => filter_lines(&core.movies),
        WidgetKind::Color => color_lines(core),
        WidgetKind::Quote => vec![
            Line::from(Span::styled(
                core.quote.current().unwrap_or("Press Enter for a quote"),
                Style::default().add_modifier(Modifier::ITALIC),
            )),
        ],
        WidgetKind::Toggle => vec![match core.toggle.message() {
            Some(message) => Line::from(message),
            None => Line::from(Span::styled("(hidden)", Style::default().fg(DIM))),
        }],
        WidgetKind::NameForm => name_form_lines(core),
        WidgetKind::Images => picker_lines(&core.images, |src| src.as_str(), |src| {
            vec![Line::from(format!("Viewing {}", src))]
        }),
        WidgetKind::Recipes => picker_lines(&core.recipes, |r| r.name.as_str(), |r| {
            vec![
                Line::from(Span::styled(
                    r.name.as_str(),
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(format!("Ingredients: {}", r.ingredients.join(", "))),
                Line::from(format!("Steps: {}", r.steps)),
            ]
        }),
        WidgetKind::Faq => faq_lines(core),
        WidgetKind::Tabs => tab_lines(core),
        WidgetKind::Rating => vec![
            Line::from(Span::styled(
                core.rating.stars(),
                Style::default().fg(Color::Yellow),
            )),
            Line::from(format!("Rating: {}", core.rating.rating)),
        ],
        WidgetKind::Products => picker_lines(&core.products, |p| p.name.as_str(), |p| {
            vec![
                Line::from(Span::styled(
                    p.name.as_str(),
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(p.description.as_str()),
            ]
        }),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(ACCENT))
        .title(focused.title());

    Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .render(area, buf);
}

/// `label: value▏` with the cursor shown only on the active field
fn input_line<'a>(label: &'a str, value: &'a str, active: bool) -> Line<'a> {
    let label_style = if active {
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DIM)
    };
    let mut spans = vec![Span::styled(format!("{}: ", label), label_style), Span::raw(value)];
    if active {
        spans.push(Span::styled("▏", Style::default().fg(ACCENT)));
    }
    Line::from(spans)
}

fn counter_lines<S: LookupSource<Output = WeatherReport>>(core: &AppCore<S>) -> Vec<Line<'_>> {
    vec![Line::from(vec![
        Span::raw("Count: "),
        Span::styled(
            core.counter.value.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ])]
}

fn todo_lines<S: LookupSource<Output = WeatherReport>>(core: &AppCore<S>) -> Vec<Line<'_>> {
    let mut lines = vec![input_line("New", &core.todos.draft, true), Line::default()];
    if core.todos.items().is_empty() {
        lines.push(Line::from(Span::styled("Nothing to do", Style::default().fg(DIM))));
    }
    for (i, item) in core.todos.items().iter().enumerate() {
        let mark = if item.done { "[x] " } else { "[ ] " };
        let mut style = Style::default();
        if item.done {
            style = style.fg(DIM).add_modifier(Modifier::CROSSED_OUT);
        }
        if core.todos.selected() == Some(i) {
            style = style.add_modifier(Modifier::REVERSED);
        }
        lines.push(Line::from(vec![Span::raw(mark), Span::styled(item.text.as_str(), style)]));
    }
    lines
}

fn calculator_lines<S: LookupSource<Output = WeatherReport>>(core: &AppCore<S>) -> Vec<Line<'_>> {
    let calc = &core.calculator;
    let result = calc
        .result
        .map(|r| r.to_string())
        .unwrap_or_else(|| "-".to_string());
    vec![
        input_line("A", &calc.a, calc.focused == Operand::A),
        input_line("B", &calc.b, calc.focused == Operand::B),
        Line::default(),
        Line::from(vec![
            Span::raw("Result: "),
            Span::styled(result, Style::default().add_modifier(Modifier::BOLD)),
        ]),
    ]
}

fn stopwatch_lines<S: LookupSource<Output = WeatherReport>>(core: &AppCore<S>) -> Vec<Line<'_>> {
    let state = core.stopwatch.state();
    let (label, color) = if state.running {
        ("running", Color::Green)
    } else {
        ("stopped", Color::Yellow)
    };
    vec![
        Line::from(Span::styled(
            state.display(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(label, Style::default().fg(color))),
    ]
}

fn form_lines<S: LookupSource<Output = WeatherReport>>(core: &AppCore<S>) -> Vec<Line<'_>> {
    let state = core.form.state();
    let mut lines = Vec::new();

    if let Some(step) = core.form.current() {
        lines.push(Line::from(format!(
            "Step {} of {}: {}",
            state.current_step(),
            state.total_steps(),
            step.title
        )));
        lines.push(Line::default());

        let value = core.form.current_value();
        if value.is_empty() && !step.placeholder.is_empty() {
            lines.push(Line::from(vec![
                Span::styled(format!("{}: ", step.field), Style::default().fg(ACCENT)),
                Span::styled(step.placeholder.as_str(), Style::default().fg(DIM)),
            ]));
        } else {
            lines.push(input_line(&step.field, value, true));
        }
    }

    if let Some(snapshot) = core.form.last_submission() {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            format!("Submitted: {}", snapshot.to_json()),
            Style::default().fg(Color::Green),
        )));
    }
    lines
}

/// Lines for the lookup status below the query field
pub fn weather_lines(status: &LookupStatus<WeatherReport>) -> Vec<Line<'_>> {
    match status {
        LookupStatus::Idle => vec![Line::from(Span::styled(
            "Type a city and press Enter",
            Style::default().fg(DIM),
        ))],
        LookupStatus::Loading => vec![Line::from(Span::styled(
            "Loading...",
            Style::default().fg(Color::Yellow),
        ))],
        LookupStatus::Failed(message) => vec![Line::from(Span::styled(
            message.as_str(),
            Style::default().fg(Color::Red),
        ))],
        LookupStatus::Success(report) => vec![
            Line::from(Span::styled(
                format!("{}, {}", report.city, report.country),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(format!("{}  {}", report.temp, report.description)),
            Line::from(format!("Feels like {}", report.feels)),
            Line::from(format!("Humidity {}  Wind {}", report.humidity, report.wind)),
            Line::from(format!("Sunrise {}  Sunset {}", report.sunrise, report.sunset)),
            Line::from(Span::styled(report.icon_url.as_str(), Style::default().fg(DIM))),
        ],
    }
}

fn expense_lines<S: LookupSource<Output = WeatherReport>>(core: &AppCore<S>) -> Vec<Line<'_>> {
    let tracker = &core.expenses;
    let balance = tracker.balance();
    let balance_color = if balance < 0.0 { Color::Red } else { Color::Green };

    let mut lines = vec![
        Line::from(vec![
            Span::raw("Balance: "),
            Span::styled(
                tracker.balance_display(),
                Style::default().fg(balance_color).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::default(),
        input_line("Text", &tracker.text, tracker.focused == ExpenseField::Text),
        input_line("Amount", &tracker.amount, tracker.focused == ExpenseField::Amount),
        Line::default(),
    ];
    for tx in tracker.transactions().iter().rev() {
        let color = if tx.amount < 0.0 { Color::Red } else { Color::Green };
        lines.push(Line::from(vec![
            Span::raw(format!("{:<20}", tx.text)),
            Span::styled(tracker.money(tx.amount), Style::default().fg(color)),
        ]));
    }
    lines
}

fn filter_lines(filter: &SearchFilter) -> Vec<Line<'_>> {
    let mut lines = vec![input_line("Search", &filter.query, true), Line::default()];
    let matches = filter.filtered();
    let count = format!("{} {} shown", matches.len(), filter.title.to_lowercase());
    if matches.is_empty() {
        lines.push(Line::from(Span::styled("No matches", Style::default().fg(DIM))));
    }
    lines.extend(matches.into_iter().map(|item| Line::from(item.display())));
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(count, Style::default().fg(DIM))));
    lines
}

fn color_lines<S: LookupSource<Output = WeatherReport>>(core: &AppCore<S>) -> Vec<Line<'_>> {
    let rgb = core.color.color();
    let draft_style = if core.color.draft_is_valid() {
        Style::default()
    } else {
        Style::default().fg(Color::Red)
    };
    vec![
        Line::from(vec![
            Span::styled("Hex: ", Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)),
            Span::styled(core.color.draft.as_str(), draft_style),
            Span::styled("▏", Style::default().fg(ACCENT)),
        ]),
        Line::default(),
        Line::from(Span::styled(
            "          ",
            Style::default().bg(Color::Rgb(rgb.0, rgb.1, rgb.2)),
        )),
        Line::from(format!("Selected Color: {}", rgb)),
    ]
}

fn name_form_lines<S: LookupSource<Output = WeatherReport>>(core: &AppCore<S>) -> Vec<Line<'_>> {
    let form = &core.name_form;
    let mut lines = if form.name.is_empty() {
        vec![Line::from(vec![
            Span::styled("Name: ", Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)),
            Span::styled("Enter your name", Style::default().fg(DIM)),
        ])]
    } else {
        vec![input_line("Name", &form.name, true)]
    };
    if let Some(error) = form.error() {
        lines.push(Line::from(Span::styled(error, Style::default().fg(Color::Red))));
    }
    if let Some(greeting) = form.greeting() {
        lines.push(Line::from(Span::styled(greeting, Style::default().fg(Color::Green))));
    }
    lines
}

/// Item list with a cursor marker, then the opened item's detail
fn picker_lines<'a, T>(
    picker: &'a Picker<T>,
    label: impl Fn(&'a T) -> &'a str,
    detail: impl Fn(&'a T) -> Vec<Line<'a>>,
) -> Vec<Line<'a>> {
    let mut lines: Vec<Line> = picker
        .items()
        .iter()
        .enumerate()
        .map(|(i, item)| cursor_line(i == picker.cursor(), label(item)))
        .collect();
    if let Some(item) = picker.opened() {
        lines.push(Line::default());
        lines.extend(detail(item));
    }
    lines
}

fn cursor_line(at_cursor: bool, text: &str) -> Line<'_> {
    if at_cursor {
        Line::from(Span::styled(
            format!("> {}", text),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ))
    } else {
        Line::from(format!("  {}", text))
    }
}

/// Questions with the open one's answer directly beneath it
fn faq_lines<S: LookupSource<Output = WeatherReport>>(core: &AppCore<S>) -> Vec<Line<'_>> {
    let faqs = &core.faqs;
    let mut lines = Vec::new();
    for (i, faq) in faqs.items().iter().enumerate() {
        lines.push(cursor_line(i == faqs.cursor(), &faq.question));
        if faqs.open_index() == Some(i) {
            lines.push(Line::from(Span::styled(
                format!("    {}", faq.answer),
                Style::default().fg(DIM),
            )));
        }
    }
    lines
}

fn tab_lines<S: LookupSource<Output = WeatherReport>>(core: &AppCore<S>) -> Vec<Line<'_>> {
    let tabs = &core.tabs;
    let mut strip = Vec::new();
    for (i, tab) in tabs.tabs().iter().enumerate() {
        let style = if i == tabs.active_index() {
            Style::default().fg(ACCENT).add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        };
        strip.push(Span::styled(format!(" {} ", tab.name), style));
        strip.push(Span::raw(" "));
    }

    let mut lines = vec![Line::from(strip), Line::default()];
    if let Some(tab) = tabs.active() {
        lines.push(Line::from(tab.content.as_str()));
    }
    lines
}

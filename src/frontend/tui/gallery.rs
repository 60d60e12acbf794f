//! Gallery layout: widget sidebar, focused panel, status/help footer.

use super::panels::render_panel;
use crate::core::input_router::help_text;
use crate::core::AppCore;
use crate::data::WidgetKind;
use crate::network::WeatherReport;
use crate::widgets::lookup::LookupSource;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

const SIDEBAR_WIDTH: u16 = 20;
const FOOTER_HEIGHT: u16 = 4;

pub fn render_gallery<S: LookupSource<Output = WeatherReport>>(
    core: &AppCore<S>,
    area: Rect,
    buf: &mut Buffer,
) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(FOOTER_HEIGHT)])
        .split(area);
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(10)])
        .split(rows[0]);

    render_sidebar(core.ui_state.focused, columns[0], buf);
    render_panel(core, columns[1], buf);
    render_footer(&core.ui_state.status_text, core.ui_state.focused, rows[1], buf);
}

fn render_sidebar(focused: WidgetKind, area: Rect, buf: &mut Buffer) {
    let lines: Vec<Line> = WidgetKind::ALL
        .iter()
        .map(|kind| {
            if *kind == focused {
                Line::from(Span::styled(
                    format!("> {}", kind.title()),
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(format!("  {}", kind.title()))
            }
        })
        .collect();

    // Scroll just far enough to keep the focused entry visible
    let visible = area.height.saturating_sub(2).max(1) as usize;
    let offset = (focused.index() + 1).saturating_sub(visible) as u16;

    Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("Widgets"))
        .scroll((offset, 0))
        .render(area, buf);
}

fn render_footer(status: &str, focused: WidgetKind, area: Rect, buf: &mut Buffer) {
    let lines = vec![
        Line::from(Span::styled(
            format!("{}  Tab/Shift-Tab switch  Esc quit", help_text(focused)),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(status),
    ];
    Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL))
        .render(area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::core::actions::GalleryAction;
    use crate::widgets::lookup::LookupError;

    #[derive(Clone)]
    struct Offline;

    impl LookupSource for Offline {
        type Output = WeatherReport;

        async fn fetch(&self, _query: &str) -> Result<WeatherReport, LookupError> {
            Err(LookupError::Transport("offline".to_string()))
        }
    }

    fn row(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width).map(|x| buf[(x, y)].symbol()).collect()
    }

    #[test]
    fn test_sidebar_marks_focus_and_footer_shows_help() {
        let mut core = AppCore::with_source(Config::default(), Offline);
        core.apply(GalleryAction::NextWidget);

        let area = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(area);
        render_gallery(&core, area, &mut buf);

        assert!(row(&buf, 1).contains("  Counter"));
        assert!(row(&buf, 2).contains("> Todo List"));
        assert!(row(&buf, 21).contains("Ctrl-T done"));
    }

    #[test]
    fn test_sidebar_scrolls_to_focus() {
        let mut core = AppCore::with_source(Config::default(), Offline);
        core.apply(GalleryAction::PreviousWidget);
        assert_eq!(core.ui_state.focused, WidgetKind::Movies);

        let area = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(area);
        render_gallery(&core, area, &mut buf);

        // 20 rows above the footer leave 18 visible entries
        assert!(row(&buf, 18).contains("> Movie Browser"));
        assert!(!row(&buf, 1).contains("Counter"));
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        let core = AppCore::with_source(Config::default(), Offline);
        let area = Rect::new(0, 0, 8, 3);
        let mut buf = Buffer::empty(area);
        render_gallery(&core, area, &mut buf);
    }
}

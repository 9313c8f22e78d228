use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use super::{theme, util};
use crate::app::App;

/// Full-content viewer drawn over the main panes.
pub fn draw_content_modal(f: &mut Frame, area: Rect, app: &App) {
    f.render_widget(Clear, area);

    let title = app
        .view
        .modal_target()
        .map(|r| format!(" {} ", util::fit_width(&r.filename, area.width.saturating_sub(6) as usize)))
        .unwrap_or_else(|| " File ".to_string());

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(theme::MODAL_BORDER);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner);

    let modal = app.view.modal();
    if modal.is_loading() {
        let p = Paragraph::new(format!("{} Loading...", util::spinner(app.tick)))
            .style(theme::LOADING)
            .centered();
        f.render_widget(p, chunks[0]);
    } else if modal.is_empty() {
        let p = Paragraph::new("No content found")
            .style(theme::EMPTY_STATE)
            .centered();
        f.render_widget(p, chunks[0]);
    } else {
        let lines: Vec<Line> = modal
            .text()
            .lines()
            .skip(app.modal_scroll)
            .take(chunks[0].height as usize)
            .map(|l| Line::from(Span::styled(l, theme::PREVIEW_TEXT)))
            .collect();
        f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), chunks[0]);
    }

    let hints = Line::from(vec![
        Span::styled(" j/k", theme::HELP_KEY),
        Span::styled(": scroll  ", theme::HELP_DESC),
        Span::styled("d", theme::HELP_KEY),
        Span::styled(": download  ", theme::HELP_DESC),
        Span::styled("Esc", theme::HELP_KEY),
        Span::styled(": close ", theme::HELP_DESC),
    ]);
    f.render_widget(Paragraph::new(hints), chunks[1]);
}

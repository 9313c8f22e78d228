use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use super::{content_modal, details_view, files_view, folders_view, help_overlay, theme, util};
use crate::app::{App, Pane};
use crate::model::file_record::FileRecord;

/// Screen areas of every pane. Shared by drawing and mouse hit-testing so
/// both agree on where things are.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Regions {
    pub title: Rect,
    pub folders: Rect,
    pub files: Rect,
    pub details: Rect,
    pub status: Rect,
    pub modal: Rect,
}

pub fn regions(area: Rect) -> Regions {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title bar
            Constraint::Min(3),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
        .split(rows[1]);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(3)])
        .split(columns[0]);

    let modal_w = (area.width.saturating_mul(4) / 5).max(20);
    let modal_h = (area.height.saturating_mul(4) / 5).max(6);

    Regions {
        title: rows[0],
        folders: left[0],
        files: left[1],
        details: columns[1],
        status: rows[2],
        modal: util::centered(area, modal_w, modal_h),
    }
}

pub fn contains(r: Rect, col: u16, row: u16) -> bool {
    col >= r.x && col < r.x.saturating_add(r.width) && row >= r.y && row < r.y.saturating_add(r.height)
}

/// Row area of the file list, inside its border.
pub fn list_inner(files: Rect) -> Rect {
    Block::default().borders(Borders::ALL).inner(files)
}

/// First visible row so that `selected` stays on screen.
pub fn list_window(selected: usize, total: usize, height: usize) -> usize {
    if height == 0 || total <= height || selected < height {
        return 0;
    }
    (selected + 1 - height).min(total - height)
}

/// File index under a click, if the click hit a row.
pub fn file_row_at(files: Rect, col: u16, row: u16, selected: usize, total: usize) -> Option<usize> {
    let inner = list_inner(files);
    if !contains(inner, col, row) {
        return None;
    }
    let start = list_window(selected, total, inner.height as usize);
    let index = start + (row - inner.y) as usize;
    (index < total).then_some(index)
}

pub fn draw_layout(f: &mut Frame, app: &App) {
    let r = regions(f.area());

    draw_title_bar(f, r.title, app);
    folders_view::draw_folders(f, r.folders);
    files_view::draw_files(f, r.files, app);
    details_view::draw_details(f, r.details, app);
    draw_status_bar(f, r.status, app);

    if app.view.is_modal_open() {
        content_modal::draw_content_modal(f, r.modal, app);
    }

    if let Some(ref target) = app.delete_target {
        draw_delete_confirm(f, f.area(), target);
    }

    // Help overlay (on top of everything)
    if app.show_help {
        help_overlay::draw_help(f, f.area());
    }
}

fn draw_title_bar(f: &mut Frame, area: Rect, app: &App) {
    let title = " File Manager ";
    let right = format!(" {}  txtview v{} ", app.base_url, env!("CARGO_PKG_VERSION"));
    let right = util::fit_width(&right, (area.width as usize).saturating_sub(title.len() + 1));

    let used = title.len() + unicode_width::UnicodeWidthStr::width(right.as_str());
    let pad = (area.width as usize).saturating_sub(used);

    let line = Line::from(vec![
        Span::styled(title, theme::TITLE),
        Span::styled(" ".repeat(pad), theme::TITLE_DIM),
        Span::styled(right, theme::TITLE_DIM),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

fn draw_delete_confirm(f: &mut Frame, area: Rect, record: &FileRecord) {
    let width = 50u16.min(area.width.saturating_sub(4));
    let popup_area = util::centered(area, width, 5);

    f.render_widget(Clear, popup_area);

    let display_name = util::fit_width(&record.filename, 36);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("  Delete {}?", display_name),
            theme::CONFIRM_TEXT,
        )),
        Line::from(vec![
            Span::styled("  y", theme::HELP_KEY),
            Span::raw(" yes  "),
            Span::styled("n", theme::HELP_KEY),
            Span::raw(" no"),
        ]),
    ];

    let block = Block::default()
        .title(" Confirm Delete ")
        .borders(Borders::ALL)
        .border_style(theme::CONFIRM_BORDER);

    let paragraph = Paragraph::new(lines).block(block);
    f.render_widget(paragraph, popup_area);
}

fn hint_text(app: &App) -> Vec<(&'static str, &'static str)> {
    let mut hints: Vec<(&str, &str)> = if app.view.is_modal_open() {
        vec![("j/k", "scroll"), ("d", "download"), ("Esc", "close")]
    } else {
        match app.pane {
            Pane::Files => vec![
                ("j/k", "nav"),
                ("Enter", "open"),
                ("v", "view"),
                ("d", "download"),
                ("x", "delete"),
                ("r", "refresh"),
            ],
            Pane::Details => vec![("j/k", "scroll"), ("v", "view"), ("h/l", "panes")],
        }
    };
    hints.push(("?", "help"));
    hints
}

fn draw_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let mut left_spans: Vec<Span> = Vec::new();

    if let Some(ref err) = app.last_error {
        left_spans.push(Span::styled(format!(" ERR: {} ", err), theme::STATUS_ERROR));
    } else if let Some(ref msg) = app.status_message {
        left_spans.push(Span::styled(format!(" {} ", msg), theme::STATUS_INFO));
    }

    if app.is_busy() {
        left_spans.push(Span::styled(
            format!(" {} ", util::spinner(app.tick)),
            theme::STATUS_BAR,
        ));
    } else if let Some(at) = app.loaded_at {
        left_spans.push(Span::styled(
            format!(" {} files, updated {} ", app.view.files().len(), at.format("%H:%M:%S")),
            theme::STATUS_BAR,
        ));
    }

    let hints = hint_text(app);
    let mut hint_spans: Vec<Span> = Vec::new();
    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            hint_spans.push(Span::styled("  ", theme::STATUS_BAR));
        }
        hint_spans.push(Span::styled(*key, theme::HINT_KEY));
        hint_spans.push(Span::styled(":", theme::HINT_DESC));
        hint_spans.push(Span::styled(*desc, theme::HINT_DESC));
    }
    hint_spans.push(Span::styled(" ", theme::STATUS_BAR));

    let left_width: usize = left_spans.iter().map(|s| s.width()).sum();
    let hint_width: usize = hint_spans.iter().map(|s| s.width()).sum();
    let total = area.width as usize;
    let gap = total.saturating_sub(left_width + hint_width);

    let mut spans = left_spans;
    spans.push(Span::styled(" ".repeat(gap), theme::STATUS_BAR));
    spans.extend(hint_spans);

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panes_do_not_overlap() {
        let r = regions(Rect::new(0, 0, 120, 40));
        assert_eq!(r.title.height, 1);
        assert_eq!(r.status.y, 39);
        assert_eq!(r.folders.height, 5);
        assert_eq!(r.files.y, r.folders.y + 5);
        assert!(r.details.x >= r.files.x + r.files.width);
        assert!(contains(Rect::new(0, 0, 120, 40), r.modal.x, r.modal.y));
    }

    #[test]
    fn window_keeps_selection_visible() {
        assert_eq!(list_window(0, 100, 10), 0);
        assert_eq!(list_window(9, 100, 10), 0);
        assert_eq!(list_window(10, 100, 10), 1);
        assert_eq!(list_window(99, 100, 10), 90);
        assert_eq!(list_window(3, 5, 10), 0);
    }

    #[test]
    fn click_maps_to_row() {
        let files = Rect::new(0, 6, 40, 12);
        // Border row is not a file.
        assert_eq!(file_row_at(files, 5, 6, 0, 3), None);
        assert_eq!(file_row_at(files, 5, 7, 0, 3), Some(0));
        assert_eq!(file_row_at(files, 5, 9, 0, 3), Some(2));
        // Below the last file.
        assert_eq!(file_row_at(files, 5, 10, 0, 3), None);
        // Outside horizontally.
        assert_eq!(file_row_at(files, 45, 7, 0, 3), None);
    }

    #[test]
    fn click_accounts_for_scrolled_window() {
        let files = Rect::new(0, 0, 40, 7); // five visible rows
        assert_eq!(file_row_at(files, 2, 1, 7, 20), Some(3));
    }
}

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use super::layout::list_window;
use super::{theme, util};
use crate::app::{App, Pane};

pub fn draw_files(f: &mut Frame, area: Rect, app: &App) {
    let border_style = if app.pane == Pane::Files && !app.view.is_modal_open() {
        theme::BORDER_ACTIVE
    } else {
        theme::BORDER_INACTIVE
    };

    let block = Block::default()
        .title(Span::styled(" Recently Added ", theme::SECTION))
        .borders(Borders::ALL)
        .border_style(border_style);

    if app.view.is_initial_loading() {
        let p = Paragraph::new(format!("{} Loading files...", util::spinner(app.tick)))
            .style(theme::LOADING)
            .block(block);
        f.render_widget(p, area);
        return;
    }

    let files = app.view.files();
    if files.is_empty() {
        let p = Paragraph::new("No files available")
            .style(theme::EMPTY_STATE)
            .block(block);
        f.render_widget(p, area);
        return;
    }

    let inner = block.inner(area);
    f.render_widget(block, area);

    let height = inner.height as usize;
    let width = inner.width as usize;
    let selected = app.view.selected_index();
    let start = list_window(selected.unwrap_or(0), files.len(), height);

    let rows: Vec<Line> = files
        .iter()
        .enumerate()
        .skip(start)
        .take(height)
        .map(|(i, file)| {
            let size = file.size_label();
            let size_w = size.width();
            let name = util::fit_width(&file.filename, width.saturating_sub(size_w + 2));
            let gap = width.saturating_sub(name.width() + size_w + 1);
            let (name_style, size_style) = if Some(i) == selected {
                (theme::LIST_SELECTED, theme::LIST_SELECTED)
            } else {
                (theme::LIST_NORMAL, theme::FILE_SIZE)
            };
            Line::from(vec![
                Span::styled(name, name_style),
                Span::styled(" ".repeat(gap), name_style),
                Span::styled(format!("{} ", size), size_style),
            ])
        })
        .collect();

    f.render_widget(Paragraph::new(rows), inner);
}

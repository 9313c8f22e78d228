use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use super::{theme, util};
use crate::app::{App, Pane};

const DESCRIPTION: &str = "A text file stores plain, readable characters such as notes, \
lists, or simple data, usually with a .txt extension.";

pub fn draw_details(f: &mut Frame, area: Rect, app: &App) {
    let border_style = if app.pane == Pane::Details && !app.view.is_modal_open() {
        theme::BORDER_ACTIVE
    } else {
        theme::BORDER_INACTIVE
    };
    let block = Block::default()
        .title(" File Details ")
        .borders(Borders::ALL)
        .border_style(border_style);

    let Some(file) = app.view.selected() else {
        let p = Paragraph::new("Select a file to see details")
            .style(theme::EMPTY_STATE)
            .centered()
            .block(block);
        f.render_widget(p, area);
        return;
    };

    let inner = block.inner(area);
    f.render_widget(block, area);

    let preview = app.view.preview();
    let show_preview = preview.is_loading() || !preview.is_empty();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(if show_preview {
            [Constraint::Length(12), Constraint::Min(3)]
        } else {
            [Constraint::Min(0), Constraint::Length(0)]
        })
        .split(inner);

    let view_label = if preview.is_empty() { " View " } else { " Hide " };
    let info = vec![
        Line::from(Span::styled("File name", theme::DETAIL_LABEL)),
        Line::from(Span::styled(file.filename.as_str(), theme::DETAIL_VALUE)),
        Line::from(""),
        Line::from(Span::styled("Size", theme::DETAIL_LABEL)),
        Line::from(Span::styled(
            file.size.as_deref().filter(|s| !s.is_empty()).unwrap_or("Unknown"),
            theme::DETAIL_VALUE,
        )),
        Line::from(""),
        Line::from(Span::styled("Description", theme::DETAIL_LABEL)),
        Line::from(Span::styled(DESCRIPTION, theme::DETAIL_VALUE)),
        Line::from(""),
        Line::from(Span::styled("Actions", theme::DETAIL_LABEL)),
        Line::from(vec![
            Span::styled(format!("v{}", view_label), theme::ACTION_VIEW),
            Span::raw(" "),
            Span::styled("d Download ", theme::ACTION_DOWNLOAD),
            Span::raw(" "),
            Span::styled("x Delete ", theme::ACTION_DELETE),
        ]),
    ];
    f.render_widget(Paragraph::new(info).wrap(Wrap { trim: true }), chunks[0]);

    if show_preview {
        draw_preview(f, chunks[1], app);
    }
}

fn draw_preview(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(Span::styled(" Preview ", theme::SECTION))
        .borders(Borders::TOP);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let preview = app.view.preview();
    if preview.is_loading() {
        let p = Paragraph::new(format!("{} Loading preview...", util::spinner(app.tick)))
            .style(theme::LOADING);
        f.render_widget(p, inner);
        return;
    }

    let text = preview.text();
    let total = text.lines().count();
    let num_width = total.max(1).to_string().len();
    let text_width = (inner.width as usize).saturating_sub(num_width + 1);

    let lines: Vec<Line> = text
        .lines()
        .enumerate()
        .skip(app.preview_scroll)
        .take(inner.height as usize)
        .map(|(i, line)| {
            Line::from(vec![
                Span::styled(format!("{:>width$} ", i + 1, width = num_width), theme::LINE_NUMBER),
                Span::styled(util::fit_width(line, text_width), theme::PREVIEW_TEXT),
            ])
        })
        .collect();
    f.render_widget(Paragraph::new(lines), inner);
}

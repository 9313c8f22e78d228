use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use super::{theme, util};

pub fn draw_help(f: &mut Frame, area: Rect) {
    let bindings = [
        ("j/k or Up/Down", "Select file / scroll"),
        ("h/l or Tab", "Switch between list and details"),
        ("g / G", "Jump to top / bottom"),
        ("Enter / dbl-click", "Open file in viewer"),
        ("v / Space", "Show / hide preview"),
        ("d", "Download selected file"),
        ("x / Del", "Delete selected file"),
        ("r", "Refresh file list"),
        ("Esc", "Close viewer / dialog"),
        ("?", "Toggle this help"),
        ("q / Ctrl+C", "Quit"),
    ];

    let width = 60u16.min(area.width.saturating_sub(4));
    let height = (bindings.len() as u16 + 4).min(area.height.saturating_sub(2));
    let popup_area = util::centered(area, width, height);

    // Clear background
    f.render_widget(Clear, popup_area);

    let mut lines = vec![
        Line::from(Span::styled(" Keybindings", theme::HELP_TITLE)),
        Line::from(""),
    ];

    for (key, desc) in &bindings {
        lines.push(Line::from(vec![
            Span::styled(format!("  {:20}", key), theme::HELP_KEY),
            Span::styled(*desc, theme::HELP_DESC),
        ]));
    }

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(theme::BORDER_ACTIVE);

    let paragraph = Paragraph::new(lines).block(block);
    f.render_widget(paragraph, popup_area);
}

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use super::theme;

/// Shortcut tiles. Decoration only; they don't filter anything.
pub const FOLDERS: [&str; 5] = ["Assets", "Tutorials", "Agreements", "Videos", "Images"];

pub fn draw_folders(f: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(Span::styled(" Folders ", theme::SECTION))
        .borders(Borders::ALL)
        .border_style(theme::BORDER_INACTIVE);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let tiles = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, FOLDERS.len() as u32); FOLDERS.len()])
        .split(inner);

    for (name, tile) in FOLDERS.iter().zip(tiles.iter()) {
        let lines = vec![
            Line::from(Span::styled("[=]", theme::FOLDER)).centered(),
            Line::from(Span::styled(*name, theme::LIST_NORMAL)).centered(),
        ];
        f.render_widget(Paragraph::new(lines), *tile);
    }
}

use ratatui::style::{Color, Modifier, Style};

// Title bar
pub const TITLE: Style = Style::new()
    .fg(Color::Black)
    .bg(Color::Cyan)
    .add_modifier(Modifier::BOLD);
pub const TITLE_DIM: Style = Style::new().fg(Color::Gray).bg(Color::DarkGray);

// Status bar
pub const STATUS_BAR: Style = Style::new().fg(Color::White).bg(Color::DarkGray);
pub const STATUS_ERROR: Style = Style::new().fg(Color::Red).bg(Color::DarkGray);
pub const STATUS_INFO: Style = Style::new().fg(Color::Green).bg(Color::DarkGray);

// List items
pub const LIST_SELECTED: Style = Style::new()
    .fg(Color::White)
    .bg(Color::DarkGray)
    .add_modifier(Modifier::BOLD);
pub const LIST_NORMAL: Style = Style::new().fg(Color::White);
pub const FILE_SIZE: Style = Style::new().fg(Color::Gray);

// Borders
pub const BORDER_ACTIVE: Style = Style::new().fg(Color::Cyan);
pub const BORDER_INACTIVE: Style = Style::new().fg(Color::DarkGray);

// Folder shortcuts
pub const FOLDER: Style = Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD);
pub const SECTION: Style = Style::new().fg(Color::Gray).add_modifier(Modifier::BOLD);

// Details pane
pub const DETAIL_LABEL: Style = Style::new().fg(Color::White).add_modifier(Modifier::BOLD);
pub const DETAIL_VALUE: Style = Style::new().fg(Color::Gray);
pub const ACTION_VIEW: Style = Style::new().fg(Color::Black).bg(Color::Blue);
pub const ACTION_DOWNLOAD: Style = Style::new().fg(Color::Black).bg(Color::Green);
pub const ACTION_DELETE: Style = Style::new().fg(Color::Black).bg(Color::Red);
pub const PREVIEW_TEXT: Style = Style::new().fg(Color::White);
pub const LINE_NUMBER: Style = Style::new().fg(Color::DarkGray);

// Loading indicators
pub const LOADING: Style = Style::new().fg(Color::Yellow);

// Modal
pub const MODAL_BORDER: Style = Style::new().fg(Color::Magenta);

// Help overlay
pub const HELP_TITLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
pub const HELP_KEY: Style = Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD);
pub const HELP_DESC: Style = Style::new().fg(Color::White);

// Footer hints
pub const HINT_KEY: Style = Style::new().fg(Color::Yellow).bg(Color::DarkGray);
pub const HINT_DESC: Style = Style::new().fg(Color::Gray).bg(Color::DarkGray);

// Delete confirmation
pub const CONFIRM_BORDER: Style = Style::new().fg(Color::Red);
pub const CONFIRM_TEXT: Style = Style::new().fg(Color::Red).add_modifier(Modifier::BOLD);

// Empty state
pub const EMPTY_STATE: Style = Style::new().fg(Color::DarkGray);

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::theme::Theme;
use crate::tui::views::centered_rect;

const HOTKEYS: &[(&str, &str)] = &[
    ("Ctrl+N", "add a new service"),
    ("Ctrl+E", "edit the selected service"),
    ("Delete", "delete the selected service"),
    ("Ctrl+D", "delete all services"),
    ("Enter", "open the URL in the browser"),
    ("c / u", "copy password / login"),
    ("v", "show or hide the password"),
    ("/", "search by service name"),
    ("x / i", "export / import CSV"),
    ("g", "open the project page"),
    ("q", "quit"),
];

pub fn render_help(f: &mut Frame) {
    let theme = Theme::default();

    let mut lines = vec![
        Line::styled(
            format!("Passdesk v{}", env!("CARGO_PKG_VERSION")),
            theme.title_style(),
        ),
        Line::styled("Local password book backed by SQLite", theme.muted_style()),
        Line::raw(""),
    ];
    lines.extend(
        HOTKEYS
            .iter()
            .map(|(key, what)| Line::raw(format!("{key:<8} {what}"))),
    );
    lines.push(Line::raw(""));
    lines.push(Line::styled("Press any key to close", theme.muted_style()));

    let height = lines.len() as u16 + 2;
    let area = centered_rect(60, height, f.area());
    f.render_widget(Clear, area);
    f.render_widget(
        Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title("Help"))
            .style(theme.normal_style()),
        area,
    );
}

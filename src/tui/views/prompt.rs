use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::{App, Transfer, View};
use crate::tui::theme::Theme;
use crate::tui::views::centered_rect;

/// File path prompt for export and import.
pub fn render_prompt(f: &mut Frame, app: &App) {
    let theme = Theme::default();
    let title = match app.view {
        View::Prompt(Transfer::Export) => "Export to CSV",
        View::Prompt(Transfer::Import) => "Import from CSV",
        _ => return,
    };

    let area = centered_rect(60, 4, f.area());
    f.render_widget(Clear, area);
    let body = format!("File: {}\nEnter=confirm  Esc=cancel", app.prompt);
    let para = Paragraph::new(body)
        .block(Block::default().borders(Borders::ALL).title(title))
        .style(theme.normal_style());
    f.render_widget(para, area);
}

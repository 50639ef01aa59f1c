use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::tui::app::{App, View};
use crate::tui::theme::Theme;
use crate::tui::views::centered_rect;

pub fn render_confirm(f: &mut Frame, app: &App) {
    let theme = Theme::default();
    let text = match app.view {
        View::ConfirmDeleteAll => {
            "Are you sure you want to delete all entries? This cannot be undone. (y/N)".to_string()
        }
        _ => {
            let service = app.selected_service().unwrap_or("(none)");
            format!("Delete '{service}'? (y/N)")
        }
    };

    let area = centered_rect(50, 5, f.area());
    f.render_widget(Clear, area);
    let para = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Confirm"))
        .style(theme.warning_style());
    f.render_widget(para, area);
}

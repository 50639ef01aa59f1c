use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui::app::App;
use crate::tui::theme::Theme;

/// Login, URL and (masked) password of the selected entry.
pub fn render_details(f: &mut Frame, area: Rect, app: &App) {
    let theme = Theme::default();
    let block = Block::default().borders(Borders::ALL).title("Entry");

    let Some(details) = app.details() else {
        let para = Paragraph::new("(no entry selected)")
            .block(block)
            .style(theme.muted_style());
        f.render_widget(para, area);
        return;
    };

    let or_none = |v: &str| if v.is_empty() { "(none)".to_string() } else { v.to_string() };
    let password = if app.reveal_password {
        details.password.clone()
    } else {
        "********".to_string()
    };
    let body = format!(
        "URL: {}\nLogin: {}\nPassword: {password}  (v=show/hide  c=copy password  u=copy login)",
        or_none(&details.url),
        or_none(&details.login),
    );
    f.render_widget(Paragraph::new(body).block(block).style(theme.normal_style()), area);
}

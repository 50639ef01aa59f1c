use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::editor::{EditorField, EntryEditor};
use crate::tui::app::App;
use crate::tui::theme::Theme;
use crate::tui::views::centered_rect;

fn field_line<'a>(editor: &'a EntryEditor, field: EditorField, theme: &Theme) -> Paragraph<'a> {
    let (label, value) = match field {
        EditorField::Service => ("Service", editor.service.clone()),
        EditorField::Url => ("URL", editor.url.clone()),
        EditorField::Login => ("Login", editor.login.clone()),
        EditorField::Password => ("Password", "*".repeat(editor.password.chars().count())),
    };
    let style = if editor.focus == field {
        theme.selection_style()
    } else {
        theme.normal_style()
    };
    Paragraph::new(format!("{label}: {value}")).style(style)
}

/// Add/edit modal drawn over the list.
pub fn render_form(f: &mut Frame, app: &App) {
    let Some(editor) = app.editor.as_ref() else {
        return;
    };
    let theme = Theme::default();
    let area = centered_rect(60, 8, f.area());
    f.render_widget(Clear, area);

    let title = if editor.is_edit() {
        "Edit service"
    } else {
        "Add new service"
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .title_style(theme.title_style());
    let inner_area = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(inner_area);

    for (i, field) in [
        EditorField::Service,
        EditorField::Url,
        EditorField::Login,
        EditorField::Password,
    ]
    .into_iter()
    .enumerate()
    {
        f.render_widget(field_line(editor, field, &theme), rows[i]);
    }

    // Save is only offered while the service name is valid
    let footer = if editor.can_confirm() {
        Paragraph::new("Enter=save  Esc=cancel  Tab/Shift-Tab=switch").style(theme.toast_style())
    } else {
        Paragraph::new("Service is required  Esc=cancel  Tab/Shift-Tab=switch")
            .style(theme.warning_style())
    };
    f.render_widget(footer, rows[5]);
}

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState};

use crate::tui::app::{App, Mode};
use crate::tui::theme::Theme;
use crate::tui::views::details::render_details;

const HINTS: &str = "q=quit  /=search  Ctrl+N=new  Ctrl+E=edit  Del=delete  Enter=open URL  ?=help";

pub fn render_list(f: &mut Frame, app: &App) {
    let theme = Theme::default();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // title
            Constraint::Length(1), // search / hint
            Constraint::Min(3),    // table
            Constraint::Length(5), // selected entry
            Constraint::Length(1), // footer/toast
        ])
        .split(f.area());

    f.render_widget(
        Paragraph::new("Passdesk — Password Book").style(theme.title_style()),
        chunks[0],
    );

    let search_label = match app.mode {
        Mode::Normal if app.filter.is_empty() => {
            format!("Press / to search  |  {} items", app.rows().len())
        }
        Mode::Normal => format!("Filter: {}  |  {} items", app.filter, app.rows().len()),
        Mode::Search => format!("Search: {}", app.filter),
    };
    f.render_widget(Paragraph::new(search_label).style(theme.muted_style()), chunks[1]);

    // Only service and URL are listed; secrets stay in the details panel
    let rows: Vec<Row> = app
        .rows()
        .iter()
        .enumerate()
        .map(|(i, r)| {
            let style = if i == app.selected {
                theme.selection_style()
            } else {
                theme.normal_style()
            };
            Row::new(vec![Cell::from(r.service.as_str()), Cell::from(r.url.as_str())]).style(style)
        })
        .collect();

    let table = Table::new(rows, [Constraint::Percentage(40), Constraint::Percentage(60)])
        .header(Row::new(vec!["Service", "URL"]).style(theme.header_style()))
        .block(Block::default().borders(Borders::ALL).title("Entries"));
    let mut state = TableState::default().with_selected(Some(app.selected));
    f.render_stateful_widget(table, chunks[2], &mut state);

    render_details(f, chunks[3], app);

    let footer = match app.toast_message() {
        Some(msg) => Paragraph::new(msg).style(theme.toast_style()),
        None => Paragraph::new(HINTS).style(theme.muted_style()),
    };
    f.render_widget(footer, chunks[4]);
}

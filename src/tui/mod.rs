pub mod app;
pub mod theme;
pub mod views;

use crate::config::app_config::Config;
use crate::filesystem::browser::open_url;
use crate::filesystem::clipboard::{copy_to_system_clipboard, ttl_seconds};
use crate::store::{CredentialStore, Database, SqliteCredentialStore};
use crate::transfer::{export, import};
use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use ratatui::backend::CrosstermBackend;
use ratatui::{Frame, Terminal};
use std::io;
use std::path::Path;
use std::time::{Duration, Instant};

use self::app::{Action, App, CopyField, View};
use self::views::confirm::render_confirm;
use self::views::form::render_form;
use self::views::help::render_help;
use self::views::list::render_list;
use self::views::prompt::render_prompt;

/// Draw the list and whatever modal is open on top of it.
pub fn draw(f: &mut Frame, app: &App) {
    render_list(f, app);
    match app.view {
        View::List => {}
        View::Editor => render_form(f, app),
        View::ConfirmDelete | View::ConfirmDeleteAll => render_confirm(f, app),
        View::Prompt(_) => render_prompt(f, app),
        View::Help => render_help(f),
    }
}

pub async fn launch(config: &Config) -> Result<()> {
    let db = Database::open(&config.db_path)
        .with_context(|| format!("failed to open database {}", config.db_path.display()))?;
    let store = SqliteCredentialStore::new(&db)
        .with_duplicates_allowed(config.allow_duplicate_services);

    let mut app = App::new();
    app.refresh(&store)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    crossterm::execute!(stdout, crossterm::terminal::EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let ttl_secs = ttl_seconds(config, None);
    let mut last_tick = Instant::now();
    let tick_rate = Duration::from_millis(200);

    let res = async {
        loop {
            terminal.draw(|f| draw(f, &app))?;

            let timeout = tick_rate
                .checked_sub(last_tick.elapsed())
                .unwrap_or(Duration::from_millis(0));

            if event::poll(timeout)? {
                if let Event::Key(k) = event::read()? {
                    if k.kind == KeyEventKind::Press {
                        let action = match app.handle_key(&store, k) {
                            Ok(action) => action,
                            Err(e) => {
                                tracing::error!("store error: {e}");
                                app.toast(format!("Error: {e}"));
                                Action::None
                            }
                        };
                        match action {
                            Action::None => {}
                            Action::Quit => break,
                            Action::OpenUrl(url) => {
                                if let Err(e) = open_url(&url) {
                                    app.toast(format!("Can't open URL: {e}"));
                                }
                            }
                            Action::Copy(field, value) => {
                                let what = match field {
                                    CopyField::Login => "Login",
                                    CopyField::Password => "Password",
                                };
                                match copy_to_system_clipboard(&value, ttl_secs) {
                                    Ok(secs) => app.toast(format!("{what} copied ({secs}s)")),
                                    Err(_) => app.toast("Clipboard unavailable"),
                                }
                            }
                            Action::Export(path) => {
                                let msg = export_to(&store, &path).await;
                                app.toast(msg);
                            }
                            Action::Import(path) => {
                                let msg = import_from(&store, &path).await;
                                app.refresh(&store)?;
                                app.toast(msg);
                            }
                        }
                    }
                }
            }

            if last_tick.elapsed() >= tick_rate {
                app.tick();
                last_tick = Instant::now();
            }
        }
        Ok::<(), anyhow::Error>(())
    }
    .await;

    // Restore terminal
    disable_raw_mode()?;
    crossterm::execute!(
        terminal.backend_mut(),
        crossterm::terminal::LeaveAlternateScreen,
        crossterm::cursor::Show
    )?;
    terminal.show_cursor()?;

    res
}

async fn export_to(store: &dyn CredentialStore, path: &Path) -> String {
    let mut buf = Vec::new();
    let count = match export(store, &mut buf) {
        Ok(count) => count,
        Err(e) => return format!("Failed to save file: {e}"),
    };
    match tokio::fs::write(path, buf).await {
        Ok(()) => format!("Exported {count} records to {}", path.display()),
        Err(e) => format!("Failed to save file: {e}"),
    }
}

async fn import_from(store: &dyn CredentialStore, path: &Path) -> String {
    let bytes = match tokio::fs::read(path).await {
        Ok(bytes) => bytes,
        Err(e) => return format!("Failed to import data: {e}"),
    };
    match import(store, bytes.as_slice()) {
        Ok(summary) => format!(
            "Imported {} records ({} skipped)",
            summary.imported,
            summary.skipped()
        ),
        Err(e) => format!("Failed to import data: {e}"),
    }
}

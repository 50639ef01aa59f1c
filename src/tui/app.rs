use crate::editor::EntryEditor;
use crate::store::{CredentialDetails, CredentialStore, CredentialSummary, StoreError};
use crate::transfer::DEFAULT_EXPORT_FILE;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::path::PathBuf;

pub const PROJECT_URL: &str = "https://github.com/egorshkof/yandex_liceum_project_password_manager";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Mode {
    Normal,
    Search,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Transfer {
    Export,
    Import,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum View {
    List,
    Editor,
    ConfirmDelete,
    ConfirmDeleteAll,
    Prompt(Transfer),
    Help,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CopyField {
    Login,
    Password,
}

/// Side effects the event loop performs after a key press.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    None,
    Quit,
    OpenUrl(String),
    Copy(CopyField, String),
    Export(PathBuf),
    Import(PathBuf),
}

pub struct App {
    rows: Vec<CredentialSummary>,
    pub selected: usize,
    pub mode: Mode,
    pub filter: String,
    details: Option<CredentialDetails>,
    pub reveal_password: bool,
    pub view: View,
    pub editor: Option<EntryEditor>,
    pub prompt: String,
    toast: Option<String>,
    toast_ticks: u16,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            selected: 0,
            mode: Mode::Normal,
            filter: String::new(),
            details: None,
            reveal_password: false,
            view: View::List,
            editor: None,
            prompt: String::new(),
            toast: None,
            toast_ticks: 0,
        }
    }

    pub fn rows(&self) -> &[CredentialSummary] {
        &self.rows
    }

    pub fn details(&self) -> Option<&CredentialDetails> {
        self.details.as_ref()
    }

    pub fn selected_service(&self) -> Option<&str> {
        self.rows.get(self.selected).map(|r| r.service.as_str())
    }

    /// Re-run the search with the current filter and reload the selected entry.
    pub fn refresh(&mut self, store: &dyn CredentialStore) -> Result<(), StoreError> {
        self.rows = store.list_filtered(&self.filter)?;
        if self.selected >= self.rows.len() {
            self.selected = self.rows.len().saturating_sub(1);
        }
        self.load_details(store)
    }

    fn load_details(&mut self, store: &dyn CredentialStore) -> Result<(), StoreError> {
        self.reveal_password = false;
        self.details = match self.selected_service() {
            Some(service) => store.fetch(service)?,
            None => None,
        };
        Ok(())
    }

    fn select_service(&mut self, store: &dyn CredentialStore, service: &str) -> Result<(), StoreError> {
        if let Some(pos) = self.rows.iter().position(|r| r.service == service) {
            self.selected = pos;
        }
        self.load_details(store)
    }

    pub fn next(&mut self, store: &dyn CredentialStore) -> Result<(), StoreError> {
        if self.rows.is_empty() {
            return Ok(());
        }
        self.selected = (self.selected + 1).min(self.rows.len() - 1);
        self.load_details(store)
    }

    pub fn prev(&mut self, store: &dyn CredentialStore) -> Result<(), StoreError> {
        if self.rows.is_empty() {
            return Ok(());
        }
        self.selected = self.selected.saturating_sub(1);
        self.load_details(store)
    }

    pub fn toast(&mut self, msg: impl Into<String>) {
        self.toast = Some(msg.into());
        self.toast_ticks = 10; // ~2s at 200ms tick
    }

    pub fn toast_message(&self) -> Option<&str> {
        self.toast.as_deref()
    }

    pub fn tick(&mut self) {
        if self.toast_ticks > 0 {
            self.toast_ticks -= 1;
            if self.toast_ticks == 0 {
                self.toast = None;
            }
        }
    }

    pub fn open_add(&mut self) {
        self.editor = Some(EntryEditor::for_add());
        self.view = View::Editor;
    }

    pub fn open_edit(&mut self) {
        let Some(service) = self.selected_service().map(str::to_string) else {
            return;
        };
        if let Some(details) = &self.details {
            self.editor = Some(EntryEditor::for_edit(&service, details));
            self.view = View::Editor;
        }
    }

    pub fn cancel_modal(&mut self) {
        self.editor = None;
        self.prompt.clear();
        self.view = View::List;
    }

    /// Route a key press to the active view. Store failures on writes become toasts;
    /// failures while re-reading the list are returned.
    pub fn handle_key(
        &mut self,
        store: &dyn CredentialStore,
        key: KeyEvent,
    ) -> Result<Action, StoreError> {
        match self.view {
            View::List => match self.mode {
                Mode::Normal => self.on_list_key(store, key),
                Mode::Search => self.on_search_key(store, key),
            },
            View::Editor => self.on_editor_key(store, key),
            View::ConfirmDelete => self.on_confirm_delete_key(store, key, false),
            View::ConfirmDeleteAll => self.on_confirm_delete_key(store, key, true),
            View::Prompt(kind) => Ok(self.on_prompt_key(kind, key)),
            View::Help => {
                self.view = View::List;
                Ok(Action::None)
            }
        }
    }

    fn on_list_key(&mut self, store: &dyn CredentialStore, key: KeyEvent) -> Result<Action, StoreError> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('n') => self.open_add(),
                KeyCode::Char('e') => self.open_edit(),
                KeyCode::Char('d') => self.view = View::ConfirmDeleteAll,
                KeyCode::Char('c') => return Ok(Action::Quit),
                _ => {}
            }
            return Ok(Action::None);
        }

        match key.code {
            KeyCode::Char('q') => return Ok(Action::Quit),
            KeyCode::Down | KeyCode::Char('j') => self.next(store)?,
            KeyCode::Up | KeyCode::Char('k') => self.prev(store)?,
            KeyCode::Char('/') => self.mode = Mode::Search,
            KeyCode::Delete => {
                if self.selected_service().is_some() {
                    self.view = View::ConfirmDelete;
                }
            }
            KeyCode::Enter => {
                if let Some(d) = &self.details {
                    if !d.url.trim().is_empty() {
                        return Ok(Action::OpenUrl(d.url.clone()));
                    }
                    self.toast("No URL for this entry");
                }
            }
            KeyCode::Char('v') => {
                if self.details.is_some() {
                    self.reveal_password = !self.reveal_password;
                }
            }
            KeyCode::Char('c') => {
                if let Some(d) = &self.details {
                    if !d.password.is_empty() {
                        return Ok(Action::Copy(CopyField::Password, d.password.clone()));
                    }
                }
            }
            KeyCode::Char('u') => {
                if let Some(d) = &self.details {
                    if !d.login.is_empty() {
                        return Ok(Action::Copy(CopyField::Login, d.login.clone()));
                    }
                    self.toast("No login");
                }
            }
            KeyCode::Char('x') => {
                self.prompt = DEFAULT_EXPORT_FILE.to_string();
                self.view = View::Prompt(Transfer::Export);
            }
            KeyCode::Char('i') => {
                self.prompt.clear();
                self.view = View::Prompt(Transfer::Import);
            }
            KeyCode::Char('?') => self.view = View::Help,
            KeyCode::Char('g') => return Ok(Action::OpenUrl(PROJECT_URL.to_string())),
            _ => {}
        }
        Ok(Action::None)
    }

    fn on_search_key(&mut self, store: &dyn CredentialStore, key: KeyEvent) -> Result<Action, StoreError> {
        match key.code {
            KeyCode::Esc | KeyCode::Enter => self.mode = Mode::Normal,
            KeyCode::Backspace => {
                self.filter.pop();
                self.refresh(store)?;
            }
            KeyCode::Char(c) if !c.is_control() => {
                self.filter.push(c);
                self.refresh(store)?;
            }
            _ => {}
        }
        Ok(Action::None)
    }

    fn on_editor_key(&mut self, store: &dyn CredentialStore, key: KeyEvent) -> Result<Action, StoreError> {
        let Some(editor) = self.editor.as_mut() else {
            self.view = View::List;
            return Ok(Action::None);
        };
        match key.code {
            KeyCode::Esc => self.cancel_modal(),
            KeyCode::Tab | KeyCode::Down => editor.focus_next(),
            KeyCode::BackTab | KeyCode::Up => editor.focus_prev(),
            KeyCode::Backspace => editor.backspace(),
            KeyCode::Enter => match editor.confirm() {
                Some(draft) => {
                    match store.upsert(&draft.credential, draft.previous_service.as_deref()) {
                        Ok(_) => {
                            self.cancel_modal();
                            self.refresh(store)?;
                            self.select_service(store, &draft.credential.service)?;
                            self.toast("Saved");
                        }
                        Err(e) => {
                            tracing::warn!("save failed: {e}");
                            self.toast(format!("Can't save: {e}"));
                        }
                    }
                }
                None => self.toast("Service is required"),
            },
            KeyCode::Char(c) if !c.is_control() && !key.modifiers.contains(KeyModifiers::CONTROL) => {
                editor.push_char(c)
            }
            _ => {}
        }
        Ok(Action::None)
    }

    fn on_confirm_delete_key(
        &mut self,
        store: &dyn CredentialStore,
        key: KeyEvent,
        all: bool,
    ) -> Result<Action, StoreError> {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => {
                self.view = View::List;
                let result = if all {
                    store.delete_all()
                } else {
                    match self.selected_service().map(str::to_string) {
                        Some(service) => store.delete(&service),
                        None => Ok(0),
                    }
                };
                match result {
                    Ok(_) => {
                        self.refresh(store)?;
                        self.toast(if all { "All entries were deleted" } else { "Deleted" });
                    }
                    Err(e) => {
                        tracing::warn!("delete failed: {e}");
                        self.toast(format!("Can't delete data: {e}"));
                    }
                }
            }
            KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('N') => self.view = View::List,
            _ => {}
        }
        Ok(Action::None)
    }

    fn on_prompt_key(&mut self, kind: Transfer, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc => self.cancel_modal(),
            KeyCode::Backspace => {
                self.prompt.pop();
            }
            KeyCode::Enter => {
                let path = self.prompt.trim().to_string();
                if path.is_empty() {
                    self.toast("File path required");
                    return Action::None;
                }
                self.cancel_modal();
                let path = PathBuf::from(path);
                return match kind {
                    Transfer::Export => Action::Export(path),
                    Transfer::Import => Action::Import(path),
                };
            }
            KeyCode::Char(c) if !c.is_control() => self.prompt.push(c),
            _ => {}
        }
        Action::None
    }
}

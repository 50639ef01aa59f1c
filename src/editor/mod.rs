use crate::store::{Credential, CredentialDetails};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EditorField {
    Service,
    Url,
    Login,
    Password,
}

impl EditorField {
    pub fn next(self) -> Self {
        match self {
            EditorField::Service => EditorField::Url,
            EditorField::Url => EditorField::Login,
            EditorField::Login => EditorField::Password,
            EditorField::Password => EditorField::Service,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            EditorField::Service => EditorField::Password,
            EditorField::Url => EditorField::Service,
            EditorField::Login => EditorField::Url,
            EditorField::Password => EditorField::Login,
        }
    }
}

/// Confirmation is allowed only while the service name has a non-whitespace character.
pub fn service_is_valid(service: &str) -> bool {
    !service.trim().is_empty()
}

/// A confirmed form, ready for `CredentialStore::upsert`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draft {
    pub credential: Credential,
    /// The service name the record had when the editor was opened (edit mode only).
    pub previous_service: Option<String>,
}

/// Add/edit form state. Dropping it is the cancel path.
#[derive(Debug, Clone)]
pub struct EntryEditor {
    pub service: String,
    pub url: String,
    pub login: String,
    pub password: String,
    pub focus: EditorField,
    previous_service: Option<String>,
}

impl EntryEditor {
    pub fn for_add() -> Self {
        Self {
            service: String::new(),
            url: String::new(),
            login: String::new(),
            password: String::new(),
            focus: EditorField::Service,
            previous_service: None,
        }
    }

    pub fn for_edit(service: &str, details: &CredentialDetails) -> Self {
        Self {
            service: service.to_string(),
            url: details.url.clone(),
            login: details.login.clone(),
            password: details.password.clone(),
            focus: EditorField::Service,
            previous_service: Some(service.to_string()),
        }
    }

    pub fn is_edit(&self) -> bool {
        self.previous_service.is_some()
    }

    pub fn previous_service(&self) -> Option<&str> {
        self.previous_service.as_deref()
    }

    pub fn can_confirm(&self) -> bool {
        service_is_valid(&self.service)
    }

    pub fn field(&self, field: EditorField) -> &str {
        match field {
            EditorField::Service => &self.service,
            EditorField::Url => &self.url,
            EditorField::Login => &self.login,
            EditorField::Password => &self.password,
        }
    }

    fn field_mut(&mut self, field: EditorField) -> &mut String {
        match field {
            EditorField::Service => &mut self.service,
            EditorField::Url => &mut self.url,
            EditorField::Login => &mut self.login,
            EditorField::Password => &mut self.password,
        }
    }

    pub fn set(&mut self, field: EditorField, value: impl Into<String>) {
        *self.field_mut(field) = value.into();
    }

    pub fn push_char(&mut self, c: char) {
        let focus = self.focus;
        self.field_mut(focus).push(c);
    }

    pub fn backspace(&mut self) {
        let focus = self.focus;
        self.field_mut(focus).pop();
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Trimmed field values, or `None` while the service name is blank.
    pub fn confirm(&self) -> Option<Draft> {
        if !self.can_confirm() {
            return None;
        }
        Some(Draft {
            credential: Credential::new(
                self.service.trim(),
                self.url.trim(),
                self.login.trim(),
                self.password.trim(),
            ),
            previous_service: self.previous_service.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confirmation_tracks_service_field_on_every_edit() {
        let mut editor = EntryEditor::for_add();
        assert!(!editor.can_confirm());

        editor.push_char(' ');
        editor.push_char('\t');
        assert!(!editor.can_confirm(), "whitespace-only service must not confirm");

        editor.push_char('x');
        assert!(editor.can_confirm());

        editor.backspace();
        assert!(!editor.can_confirm());
    }

    #[test]
    fn confirm_trims_every_field() {
        let mut editor = EntryEditor::for_add();
        editor.set(EditorField::Service, "  github ");
        editor.set(EditorField::Url, " https://github.com ");
        editor.set(EditorField::Login, " octo ");
        editor.set(EditorField::Password, " pw ");
        let draft = editor.confirm().unwrap();
        assert_eq!(draft.credential, Credential::new("github", "https://github.com", "octo", "pw"));
        assert_eq!(draft.previous_service, None);
    }

    #[test]
    fn empty_password_is_accepted() {
        let mut editor = EntryEditor::for_add();
        editor.set(EditorField::Service, "nopw");
        let draft = editor.confirm().unwrap();
        assert_eq!(draft.credential.password, "");
    }

    #[test]
    fn blank_service_yields_no_draft() {
        let mut editor = EntryEditor::for_add();
        editor.set(EditorField::Service, "   ");
        editor.set(EditorField::Password, "pw");
        assert!(editor.confirm().is_none());
    }

    #[test]
    fn edit_mode_carries_original_service() {
        let details = CredentialDetails {
            url: "u".into(),
            login: "l".into(),
            password: "p".into(),
        };
        let mut editor = EntryEditor::for_edit("old", &details);
        assert!(editor.is_edit());
        assert!(editor.can_confirm());
        editor.set(EditorField::Service, "new");
        let draft = editor.confirm().unwrap();
        assert_eq!(draft.credential.service, "new");
        assert_eq!(draft.credential.password, "p");
        assert_eq!(draft.previous_service.as_deref(), Some("old"));
    }

    #[test]
    fn focus_cycles_through_all_fields() {
        let mut editor = EntryEditor::for_add();
        editor.focus_next();
        editor.push_char('u');
        editor.focus_next();
        editor.push_char('l');
        editor.focus_next();
        editor.push_char('p');
        editor.focus_next();
        assert_eq!(editor.focus, EditorField::Service);
        editor.focus_prev();
        assert_eq!(editor.focus, EditorField::Password);
        assert_eq!(editor.field(EditorField::Url), "u");
        assert_eq!(editor.field(EditorField::Login), "l");
        assert_eq!(editor.field(EditorField::Password), "p");
    }
}

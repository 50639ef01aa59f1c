use crate::config::app_config::Config;
use crate::editor::{EditorField, EntryEditor};
use crate::filesystem::browser::open_url;
use crate::filesystem::clipboard::{copy_to_system_clipboard, environment_warning, ttl_seconds};
use crate::store::{CredentialStore, Database, SqliteCredentialStore};
use crate::transfer::{export, import};
use anyhow::{anyhow, Context, Result};
use inquire::{Confirm, Password, Text};
use std::path::PathBuf;

#[derive(Copy, Clone, Debug)]
pub enum GetField {
    Password,
    Login,
    Url,
}

// Options for the add command, constructed by CLI layer
#[derive(Debug, Clone, Default)]
pub struct AddOptions {
    pub service: Option<String>,
    pub url: Option<String>,
    pub login: Option<String>,
    pub password: Option<String>,
}

// Options for the edit command; `None` keeps the stored value
#[derive(Debug, Clone, Default)]
pub struct EditOptions {
    pub rename: Option<String>,
    pub url: Option<String>,
    pub login: Option<String>,
    pub password: Option<String>,
}

impl EditOptions {
    fn is_empty(&self) -> bool {
        self.rename.is_none() && self.url.is_none() && self.login.is_none() && self.password.is_none()
    }
}

/// Command handlers. Owns the database handle for the lifetime of the command.
pub struct Manager<'a> {
    config: &'a Config,
    db: Database,
}

impl<'a> Manager<'a> {
    pub fn open(config: &'a Config) -> Result<Self> {
        let db = Database::open(&config.db_path)
            .with_context(|| format!("failed to open database {}", config.db_path.display()))?;
        Ok(Manager { config, db })
    }

    fn store(&self) -> SqliteCredentialStore<'_> {
        SqliteCredentialStore::new(&self.db)
            .with_duplicates_allowed(self.config.allow_duplicate_services)
    }

    pub async fn handle_add(&self, opts: AddOptions) -> Result<()> {
        // Prompt for optional fields only when the user is already being prompted
        let interactive = opts.service.is_none() || opts.password.is_none();

        let mut editor = EntryEditor::for_add();
        let service = match opts.service {
            Some(s) => s,
            None => Text::new("Service").prompt()?,
        };
        editor.set(EditorField::Service, service);
        if !editor.can_confirm() {
            anyhow::bail!("service name is required");
        }

        let url = match opts.url {
            Some(u) => u,
            None if interactive => Text::new("URL (optional)").with_default("").prompt()?,
            None => String::new(),
        };
        let login = match opts.login {
            Some(l) => l,
            None if interactive => Text::new("Login (optional)").with_default("").prompt()?,
            None => String::new(),
        };
        let password = match opts.password {
            Some(p) => p,
            None => Password::new("Password").without_confirmation().prompt()?,
        };
        editor.set(EditorField::Url, url);
        editor.set(EditorField::Login, login);
        editor.set(EditorField::Password, password);

        let draft = editor
            .confirm()
            .ok_or_else(|| anyhow!("service name is required"))?;
        self.store()
            .upsert(&draft.credential, None)
            .context("Can't save entry")?;
        println!("✅ Entry '{}' saved.", draft.credential.service);
        Ok(())
    }

    pub async fn handle_edit(&self, service: &str, opts: EditOptions) -> Result<()> {
        let store = self.store();
        let Some(details) = store.fetch(service)? else {
            anyhow::bail!("entry '{}' not found", service);
        };

        let mut editor = EntryEditor::for_edit(service, &details);
        if opts.is_empty() {
            for (field, label) in [
                (EditorField::Service, "Service"),
                (EditorField::Url, "URL"),
                (EditorField::Login, "Login"),
            ] {
                let current = editor.field(field).to_string();
                let value = Text::new(label).with_default(&current).prompt()?;
                editor.set(field, value);
            }
            // Never echo the stored secret; an empty answer keeps it
            let typed = Password::new("Password (empty keeps current)")
                .without_confirmation()
                .prompt()?;
            let password = keep_if_empty(typed, editor.field(EditorField::Password));
            editor.set(EditorField::Password, password);
        } else {
            if let Some(name) = opts.rename {
                editor.set(EditorField::Service, name);
            }
            if let Some(url) = opts.url {
                editor.set(EditorField::Url, url);
            }
            if let Some(login) = opts.login {
                editor.set(EditorField::Login, login);
            }
            if let Some(password) = opts.password {
                editor.set(EditorField::Password, password);
            }
        }

        let draft = editor
            .confirm()
            .ok_or_else(|| anyhow!("service name is required"))?;
        store
            .upsert(&draft.credential, draft.previous_service.as_deref())
            .context("Can't save entry")?;
        println!("✅ Entry '{}' updated.", draft.credential.service);
        Ok(())
    }

    pub async fn handle_show(&self, service: &str, reveal_password: bool) -> Result<()> {
        let Some(details) = self.store().fetch(service)? else {
            anyhow::bail!("entry '{}' not found", service);
        };
        println!("Service:  {service}");
        println!("URL:      {}", or_none(&details.url));
        println!("Login:    {}", or_none(&details.login));
        if reveal_password {
            println!("Password: {}", details.password);
        } else {
            println!("Password: ******** (use --reveal-password to show)");
        }
        Ok(())
    }

    pub async fn handle_get(
        &self,
        service: &str,
        field: GetField,
        no_copy: bool,
        ttl_override: Option<u64>,
        echo: bool,
    ) -> Result<()> {
        let Some(details) = self.store().fetch(service)? else {
            println!("❌ No entry found with service '{service}'");
            return Ok(());
        };

        let value = match field {
            GetField::Password => details.password,
            GetField::Login => details.login,
            GetField::Url => details.url,
        };
        if value.is_empty() {
            println!("❌ Field is empty for '{service}'");
            return Ok(());
        }

        if echo {
            println!("{value}");
        }
        if no_copy {
            return Ok(());
        }

        let ttl_secs = ttl_seconds(self.config, ttl_override);
        if let Some(warn) = environment_warning() {
            eprintln!("⚠️ {warn}");
        }
        if let Err(e) = copy_to_system_clipboard(&value, ttl_secs) {
            eprintln!("⚠️ Clipboard not available: {e}");
        }
        Ok(())
    }

    pub async fn handle_list(&self, query: Option<String>, json_mode: bool) -> Result<()> {
        let rows = self.store().list_filtered(query.as_deref().unwrap_or(""))?;

        if json_mode {
            println!("{}", serde_json::to_string_pretty(&rows)?);
            return Ok(());
        }

        if rows.is_empty() {
            println!("(empty)");
            return Ok(());
        }
        for row in rows {
            if row.url.is_empty() {
                println!("{}", row.service);
            } else {
                println!("{}\t{}", row.service, row.url);
            }
        }
        Ok(())
    }

    pub async fn handle_rm(&self, service: &str, yes: bool) -> Result<()> {
        let store = self.store();
        if !store.exists(service)? {
            println!("❌ No entry found with service '{service}'");
            return Ok(());
        }

        if !yes {
            let proceed = Confirm::new("Are you sure you want to delete this entry?")
                .with_default(false)
                .prompt()?;
            if !proceed {
                println!("❎ Deletion cancelled.");
                return Ok(());
            }
        }

        store.delete(service).context("Can't delete entry")?;
        println!("🗑️ Entry '{service}' removed.");
        Ok(())
    }

    pub async fn handle_clear(&self, yes: bool) -> Result<()> {
        if !yes {
            let proceed = Confirm::new("Are you sure you want to delete all entries?")
                .with_help_message("This action cannot be undone!")
                .with_default(false)
                .prompt()?;
            if !proceed {
                println!("❎ Deletion cancelled.");
                return Ok(());
            }
        }

        let removed = self.store().delete_all().context("Can't delete data")?;
        println!("🗑️ All entries were deleted ({removed}).");
        Ok(())
    }

    pub async fn handle_export(&self, path: PathBuf) -> Result<()> {
        let mut buf = Vec::new();
        let count = export(&self.store(), &mut buf).context("Failed to save file")?;
        tokio::fs::write(&path, buf)
            .await
            .with_context(|| format!("Failed to save file {}", path.display()))?;
        println!(
            "✅ Data successfully exported to {} ({count} records)",
            path.display()
        );
        Ok(())
    }

    pub async fn handle_import(&self, path: PathBuf) -> Result<()> {
        let bytes = tokio::fs::read(&path)
            .await
            .with_context(|| format!("Failed to import data from {}", path.display()))?;
        let summary = import(&self.store(), bytes.as_slice()).context("Failed to import data")?;
        println!(
            "✅ Successfully added records imported: {}",
            summary.imported
        );
        if summary.skipped() > 0 {
            println!(
                "   skipped {} row(s): {} short, {} without service/password, {} already present",
                summary.skipped(),
                summary.skipped_short,
                summary.skipped_incomplete,
                summary.skipped_existing
            );
        }
        Ok(())
    }

    pub async fn handle_open(&self, service: &str) -> Result<()> {
        let Some(details) = self.store().fetch(service)? else {
            anyhow::bail!("entry '{}' not found", service);
        };
        if !open_url(&details.url)? {
            println!("❌ No URL stored for '{service}'");
        }
        Ok(())
    }
}

fn keep_if_empty(typed: String, current: &str) -> String {
    if typed.is_empty() {
        current.to_string()
    } else {
        typed
    }
}

fn or_none(value: &str) -> &str {
    if value.is_empty() {
        "(none)"
    } else {
        value
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;

/// One row of the `passwords` table.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    pub service: String,
    pub url: String,
    pub login: String,
    pub password: String,
}

impl Credential {
    pub fn new(
        service: impl Into<String>,
        url: impl Into<String>,
        login: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            service: service.into(),
            url: url.into(),
            login: login.into(),
            password: password.into(),
        }
    }

    pub fn summary(&self) -> CredentialSummary {
        CredentialSummary {
            service: self.service.clone(),
            url: self.url.clone(),
        }
    }

    pub fn details(&self) -> CredentialDetails {
        CredentialDetails {
            url: self.url.clone(),
            login: self.login.clone(),
            password: self.password.clone(),
        }
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("service", &self.service)
            .field("url", &self.url)
            .field("login", &self.login)
            .field("password", &"<REDACTED>")
            .finish()
    }
}

/// A search result row: what the results table shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialSummary {
    pub service: String,
    pub url: String,
}

/// Fields shown for the selected service.
#[derive(Clone, PartialEq, Eq)]
pub struct CredentialDetails {
    pub url: String,
    pub login: String,
    pub password: String,
}

impl fmt::Debug for CredentialDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialDetails")
            .field("url", &self.url)
            .field("login", &self.login)
            .field("password", &"<REDACTED>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_output_redacts_password() {
        let cred = Credential::new("github", "https://github.com", "octo", "hunter2");
        let out = format!("{cred:?}");
        assert!(out.contains("github"));
        assert!(out.contains("<REDACTED>"));
        assert!(!out.contains("hunter2"));

        let details = format!("{:?}", cred.details());
        assert!(!details.contains("hunter2"));
    }

    #[test]
    fn summary_json_has_no_password_field() {
        let cred = Credential::new("mail", "https://mail.example", "me", "pw");
        let json = serde_json::to_string(&cred.summary()).unwrap();
        assert_eq!(json, r#"{"service":"mail","url":"https://mail.example"}"#);
    }
}

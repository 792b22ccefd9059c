//! Session identity supplied by the login collaborator

use serde::{Deserialize, Serialize};

/// Who is logged in
///
/// Blank strings count as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionIdentity {
    /// Login email
    #[serde(default)]
    pub email: Option<String>,
    /// Encryption password entered at login, if any
    #[serde(default, skip_serializing)]
    pub encrypt_password: Option<String>,
}

impl SessionIdentity {
    pub fn new(email: impl Into<String>, encrypt_password: Option<String>) -> Self {
        Self {
            email: Some(email.into()),
            encrypt_password,
        }
    }

    /// Nobody logged in
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Email, when present and non-blank
    pub fn email(&self) -> Option<&str> {
        non_blank(self.email.as_deref())
    }

    /// Encryption password, when present and non-empty
    pub fn encrypt_password(&self) -> Option<&str> {
        self.encrypt_password.as_deref().filter(|p| !p.is_empty())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_email_is_absent() {
        let identity = SessionIdentity::new("  ", None);
        assert_eq!(identity.email(), None);
    }

    #[test]
    fn empty_password_is_absent() {
        let identity = SessionIdentity::new("a@b.com", Some(String::new()));
        assert_eq!(identity.email(), Some("a@b.com"));
        assert_eq!(identity.encrypt_password(), None);
    }

    #[test]
    fn password_never_serialized() {
        let identity = SessionIdentity::new("a@b.com", Some("p".to_string()));
        let json = serde_json::to_string(&identity).unwrap_or_default();
        assert!(!json.contains("encryptPassword"));
    }
}

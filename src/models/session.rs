use super::UserId;
use serde::{Deserialize, Serialize};

/// Authenticated user context, passed explicitly to every networked
/// operation. Persisted to local storage by [`crate::core::session`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub token: String,
    pub user_id: UserId,
    pub user_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub is_manager: bool,
}

impl Session {
    pub fn has_token(&self) -> bool {
        !self.token.trim().is_empty()
    }

    /// First name shown on the profile page: the part of the user name
    /// before the first `.`, capitalized (`john.doe` → `John`).
    pub fn display_name(&self) -> String {
        let first = self.user_name.split('.').next().unwrap_or_default();
        let mut chars = first.chars();
        match chars.next() {
            Some(c) => c.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(name: &str) -> Session {
        Session {
            token: "t".into(),
            user_id: 1,
            user_name: name.into(),
            email: String::new(),
            is_manager: false,
        }
    }

    #[test]
    fn display_name_takes_first_segment() {
        assert_eq!(session("john.doe").display_name(), "John");
        assert_eq!(session("anna").display_name(), "Anna");
        assert_eq!(session("").display_name(), "");
    }

    #[test]
    fn login_payload_is_camel_case() {
        let json = r#"{"token":"abc","userId":7,"userName":"m.rossi","email":"m@x.it","isManager":true}"#;
        let s: Session = serde_json::from_str(json).unwrap();
        assert_eq!(s.user_id, 7);
        assert!(s.is_manager);
        assert!(s.has_token());
    }
}

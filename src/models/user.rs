use serde::{Deserialize, Serialize};

pub const GUEST_EMAIL: &str = "invitado@reciclaplus.com";
pub const GUEST_NAME: &str = "Invitado";

/// The profile backing the account screen and the per-user storage keys.
///
/// A guest profile has no email of its own; accessors fall back to the
/// guest identity so per-user keys stay well-formed while signed out.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub logged_in: bool,
    pub email: Option<String>,
    pub name: Option<String>,
    pub avatar_url: Option<String>,
}

impl UserProfile {
    pub fn guest() -> Self {
        Self {
            logged_in: false,
            email: None,
            name: None,
            avatar_url: None,
        }
    }

    pub fn email(&self) -> &str {
        self.email.as_deref().unwrap_or(GUEST_EMAIL)
    }

    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(GUEST_NAME)
    }
}

impl Default for UserProfile {
    fn default() -> Self {
        Self::guest()
    }
}

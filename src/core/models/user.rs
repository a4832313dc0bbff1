//! User models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Opaque stable identifier (UUIDv4)
    pub id: String,
    /// Login name, stored lowercase
    pub email: String,
    /// Given name
    pub first_name: Option<String>,
    /// Family name
    pub last_name: Option<String>,
    /// Password credential (PHC string), never the raw password
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user from a normalized profile and a hashed credential
    pub fn new(profile: UserProfile, password_hash: String) -> Self {
        let now = Utc::now();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            email: profile.email,
            first_name: profile.first_name,
            last_name: profile.last_name,
            password_hash,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace the profile fields, leaving the credential alone
    pub fn apply_profile(&mut self, profile: UserProfile) {
        self.email = profile.email;
        self.first_name = profile.first_name;
        self.last_name = profile.last_name;
        self.updated_at = Utc::now();
    }

    /// "First Last", falling back to the email when no name is set
    pub fn display_name(&self) -> String {
        let parts: Vec<&str> = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .collect();

        if parts.is_empty() {
            self.email.clone()
        } else {
            parts.join(" ")
        }
    }
}

/// Editable user profile
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Email address (login name)
    pub email: String,
    /// Given name
    #[serde(default)]
    pub first_name: Option<String>,
    /// Family name
    #[serde(default)]
    pub last_name: Option<String>,
}

impl UserProfile {
    /// Create a profile with just an email
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            first_name: None,
            last_name: None,
        }
    }

    /// Set the display name parts
    pub fn with_name(mut self, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        self.first_name = Some(first_name.into());
        self.last_name = Some(last_name.into());
        self
    }

    /// Lowercase the email and trim the names, turning blank names into `None`
    pub fn normalized(self) -> Self {
        Self {
            email: normalize_email(&self.email),
            first_name: trim_optional(self.first_name),
            last_name: trim_optional(self.last_name),
        }
    }
}

/// Canonical form of an email used for storage and lookup
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

fn trim_optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// User together with the names of the roles it holds
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserWithRoles {
    /// The user
    #[serde(flatten)]
    pub user: User,
    /// Role names, ordered by name
    pub roles: Vec<String>,
}

//! Request and response bodies of the HTTP surface

use crate::core::models::UserProfile;
use crate::utils::error::Result;
use crate::utils::validation::DataValidator;
use serde::{Deserialize, Serialize};

/// `POST /account/login`
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// `POST /account/forgot-password`
#[derive(Debug, Clone, Deserialize)]
pub struct ForgotPasswordRequest {
    pub email: String,
}

/// Reply to a forgot-password request
///
/// The message is the same whether or not the account exists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForgotPasswordResponse {
    pub message: String,
    /// Only set when `auth.expose_reset_link` is enabled
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reset_link: Option<String>,
}

/// Create or rename a role
#[derive(Debug, Clone, Deserialize)]
pub struct RoleRequest {
    pub name: String,
}

/// Id of a newly created record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedResponse {
    pub id: String,
}

/// `POST /admin/users`
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUserRequest {
    pub email: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    pub password: String,
    pub confirm_password: String,
    /// Name of one role to hold from the start
    #[serde(default)]
    pub role: Option<String>,
}

impl CreateUserRequest {
    /// Form-level checks, then the profile to store
    pub fn validated_profile(&self) -> Result<UserProfile> {
        DataValidator::validate_password_confirmation(&self.password, &self.confirm_password)?;
        Ok(profile(&self.email, &self.first_name, &self.last_name))
    }
}

/// `PUT /admin/users/{id}`
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateUserRequest {
    pub email: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    /// Left out (or blank) to keep the current credential
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub confirm_password: Option<String>,
}

impl UpdateUserRequest {
    /// Form-level checks, then the profile to store
    pub fn validated_profile(&self) -> Result<UserProfile> {
        if let Some(password) = self.new_password() {
            DataValidator::validate_password_confirmation(
                password,
                self.confirm_password.as_deref().unwrap_or_default(),
            )?;
        }
        Ok(profile(&self.email, &self.first_name, &self.last_name))
    }

    /// The replacement password, if one was supplied
    pub fn new_password(&self) -> Option<&str> {
        self.password.as_deref().filter(|p| !p.is_empty())
    }
}

/// `PUT /admin/users/{id}/roles`
#[derive(Debug, Clone, Deserialize)]
pub struct ReplaceRolesRequest {
    #[serde(default)]
    pub roles: Vec<String>,
}

fn profile(email: &str, first_name: &Option<String>, last_name: &Option<String>) -> UserProfile {
    UserProfile {
        email: email.to_string(),
        first_name: first_name.clone(),
        last_name: last_name.clone(),
    }
    .normalized()
}

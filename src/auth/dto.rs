use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AppError;
use crate::users::repo_types::{Gender, User};

pub const MIN_PASSWORD_LEN: usize = 6;

// The username ends up in the avatar query string, so keep it to a safe
// charset.
fn is_valid_username(username: &str) -> bool {
    lazy_static! {
        static ref USERNAME_RE: Regex = Regex::new(r"^[A-Za-z0-9._-]{1,32}$").unwrap();
    }
    USERNAME_RE.is_match(username)
}

/// Request body for signup.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub full_name: String,
    pub username: String,
    pub password: String,
    pub gender: String,
}

impl SignupRequest {
    /// Field-level checks; returns the resolved gender on success.
    pub fn validate(&self) -> Result<Gender, AppError> {
        if self.full_name.trim().is_empty() {
            return Err(AppError::Validation("Full name is required".into()));
        }
        if self.username.trim().is_empty() {
            return Err(AppError::Validation("Username is required".into()));
        }
        if !is_valid_username(self.username.trim()) {
            return Err(AppError::Validation(
                "Username contains invalid characters".into(),
            ));
        }
        if self.password.len() < MIN_PASSWORD_LEN {
            return Err(AppError::Validation(
                "Password must be at least 6 characters long".into(),
            ));
        }
        Gender::parse(&self.gender)
            .ok_or_else(|| AppError::Validation("Gender must be 'male' or 'female'".into()))
    }
}

/// Request body for login.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl LoginRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.username.trim().is_empty() {
            return Err(AppError::Validation("Username is required".into()));
        }
        if self.password.len() < MIN_PASSWORD_LEN {
            return Err(AppError::Validation(
                "Password must be at least 6 characters long".into(),
            ));
        }
        Ok(())
    }
}

/// Public part of the user returned after signup and login.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicUser {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub full_name: String,
    pub username: String,
    pub profile_pic: String,
}

impl From<User> for PublicUser {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            full_name: u.full_name,
            username: u.username,
            profile_pic: u.profile_pic,
        }
    }
}

/// Plain message body, used by logout.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

//! Wire DTOs for the auth API.
//!
//! DESIGN
//! ======
//! Field names follow the backend's camelCase JSON. Optional response fields
//! decode to empty values instead of failing so the flow decides what an
//! empty token or image URL means.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Email/password pair submitted for login.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self { email: email.into(), password: password.into() }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Full signup payload sent to the registration endpoint.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationRequest {
    pub full_name: String,
    pub email: String,
    pub password: String,
    /// Uploaded avatar URL, or `""` when no image was chosen.
    #[serde(default)]
    pub profile_image_url: String,
}

impl fmt::Debug for RegistrationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistrationRequest")
            .field("full_name", &self.full_name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("profile_image_url", &self.profile_image_url)
            .finish()
    }
}

/// Raw signup form values before the optional image upload.
///
/// `I` is whatever the API collaborator accepts as an image (a browser `File`
/// in the hydrate build, a test double elsewhere).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignUpForm<I> {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub profile_image: Option<I>,
}

impl<I> SignUpForm<I> {
    /// Build the registration payload once the image URL is known.
    pub fn into_request(self, profile_image_url: String) -> RegistrationRequest {
        RegistrationRequest {
            full_name: self.full_name,
            email: self.email,
            password: self.password,
            profile_image_url,
        }
    }
}

/// Result of the image upload endpoint.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResult {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub image_url: String,
}

/// Opaque user record forwarded untouched to the session context.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserRecord(pub serde_json::Value);

impl UserRecord {
    /// Read a top-level string field, if the record is an object that has one.
    pub fn str_field(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(serde_json::Value::as_str)
    }
}

/// Successful login/registration body.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub token: String,
    #[serde(default)]
    pub user: UserRecord,
}

/// Failure body; only `message` is meaningful to the client.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

//! User entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A registered user account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier
    pub id: Uuid,

    /// Email address, unique across all accounts
    pub email: String,

    /// bcrypt hash of the password; never leaves the backend
    #[serde(skip_serializing)]
    pub password_hash: String,

    /// Timestamp when the account was created
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Creates a new user with a freshly generated id
    ///
    /// The email is normalized to lowercase so the unique constraint
    /// is case-insensitive in practice.
    pub fn new(email: impl Into<String>, password_hash: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            email: email.into().trim().to_lowercase(),
            password_hash: password_hash.into(),
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_normalizes_email() {
        let user = User::new("  Frodo@Shire.ME ", "hash");
        assert_eq!(user.email, "frodo@shire.me");
    }

    #[test]
    fn password_hash_is_not_serialized() {
        let user = User::new("sam@shire.me", "secret-hash");
        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("secret-hash"));
        assert!(json.contains("sam@shire.me"));
    }
}

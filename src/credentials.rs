//! Credential storage
//!
//! Answers whether a username/password pair matches a known user. The
//! handlers only ever see the `CredentialStore` trait, so the in-memory
//! demo table can be swapped for a hashed or persistent store without
//! touching the endpoints.

use std::collections::HashMap;

use crate::models::User;

/// Lookup authority injected into the web handlers.
///
/// Implementations are read-only after construction and have no side
/// effects. Unknown usernames simply yield false.
pub trait CredentialStore: Send + Sync {
    fn verify(&self, username: &str, password: &str) -> bool;
}

/// In-memory user table compared by exact, case-sensitive string match.
pub struct MemoryCredentials {
    users: HashMap<String, User>,
}

impl MemoryCredentials {
    pub fn new(users: impl IntoIterator<Item = User>) -> Self {
        let users = users
            .into_iter()
            .map(|user| (user.username.clone(), user))
            .collect();
        Self { users }
    }

    /// Dummy user table used by the server binary.
    pub fn seeded() -> Self {
        Self::new([User {
            username: "admin".to_string(),
            password: "admin123".to_string(),
        }])
    }
}

impl CredentialStore for MemoryCredentials {
    fn verify(&self, username: &str, password: &str) -> bool {
        self.users
            .get(username)
            .is_some_and(|user| user.password == password)
    }
}

/// User table holding bcrypt hashes instead of plain passwords.
pub struct BcryptCredentials {
    hashes: HashMap<String, String>,
    // checked when the username is unknown, so a miss costs a hash
    // verification just like a mismatch does
    fallback_hash: String,
}

impl BcryptCredentials {
    pub fn new(users: impl IntoIterator<Item = User>) -> Result<Self, bcrypt::BcryptError> {
        let mut hashes = HashMap::new();
        for user in users {
            let hashed = bcrypt::hash(&user.password, bcrypt::DEFAULT_COST)?;
            hashes.insert(user.username, hashed);
        }
        let fallback_hash = bcrypt::hash("", bcrypt::DEFAULT_COST)?;
        Ok(Self {
            hashes,
            fallback_hash,
        })
    }
}

impl CredentialStore for BcryptCredentials {
    fn verify(&self, username: &str, password: &str) -> bool {
        match self.hashes.get(username) {
            Some(hash) => bcrypt::verify(password, hash).unwrap_or(false),
            None => {
                let _ = bcrypt::verify(password, &self.fallback_hash);
                false
            }
        }
    }
}

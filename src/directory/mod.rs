//! User Directory
//!
//! Read-only lookups into the user records the lobby connection has
//! accumulated. The registry resolves battle founders through this; the
//! directory itself is maintained elsewhere and never mutated from here.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A lobby user as reported by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique username.
    pub username: String,
    /// Two-letter country code.
    pub country: String,
    /// Server-assigned rank.
    pub rank: u8,
    /// Whether this account is an automated host.
    pub bot: bool,
}

/// Read-only username lookup.
pub trait UserDirectory: Send + Sync {
    /// Find the user record for `username`, if the directory has one.
    fn find_user(&self, username: &str) -> Option<User>;
}

/// Directory errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum DirectoryError {
    /// A battle's founder has no user record.
    ///
    /// Battle and user events race on a live connection, so a listed battle
    /// whose host the directory has not seen yet is degraded, not fatal.
    #[error("no user record for battle host {username}")]
    UnknownHostUser {
        /// The username that failed to resolve.
        username: String,
    },
}

/// In-memory directory, used by the demo and by tests.
#[derive(Debug, Default)]
pub struct MemoryDirectory {
    users: BTreeMap<String, User>,
}

impl MemoryDirectory {
    /// Empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a user record.
    pub fn insert(&mut self, user: User) {
        self.users.insert(user.username.clone(), user);
    }
}

impl UserDirectory for MemoryDirectory {
    fn find_user(&self, username: &str) -> Option<User> {
        self.users.get(username).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(name: &str) -> User {
        User {
            username: name.to_string(),
            country: "SE".to_string(),
            rank: 1,
            bot: false,
        }
    }

    #[test]
    fn test_lookup_hits_and_misses() {
        let mut directory = MemoryDirectory::new();
        directory.insert(user("alice"));

        assert_eq!(directory.find_user("alice"), Some(user("alice")));
        assert_eq!(directory.find_user("bob"), None);
    }

    #[test]
    fn test_insert_replaces_existing_record() {
        let mut directory = MemoryDirectory::new();
        directory.insert(user("alice"));
        let mut promoted = user("alice");
        promoted.rank = 7;
        directory.insert(promoted.clone());

        assert_eq!(directory.find_user("alice"), Some(promoted));
    }
}

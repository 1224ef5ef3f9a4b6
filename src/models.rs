use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

/// Account role stored in the users file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
}

/// File capability tags granted to a user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Permission {
    ListFiles,
    CreateFile,
    DeleteFile,
    MoveFile,
    ReadFile,
}

impl Permission {
    pub fn as_str(&self) -> &'static str {
        match self {
            Permission::ListFiles => "list_files",
            Permission::CreateFile => "create_file",
            Permission::DeleteFile => "delete_file",
            Permission::MoveFile => "move_file",
            Permission::ReadFile => "read_file",
        }
    }
}

/// One entry of the users file.
/// Field order here is the field order on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub username: String,
    /// hex SHA-256 of the plaintext
    pub password: String,
    pub role: Role,
    pub permissions: Vec<Permission>,
}

/// Root structure of `.users.json`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserStore {
    pub users: Vec<UserRecord>,
}

impl UserStore {
    pub fn with_user(user: UserRecord) -> Self {
        Self { users: vec![user] }
    }

    /// Read a users file back from disk
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("reading users from {}", path.display()))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("parsing users file at {}", path.display()))
    }

    /// Pretty JSON with 2-space indentation, no trailing newline
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("serializing users to json")
    }
}

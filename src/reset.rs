use anyhow::{Context, Result};
use std::{fs, path::Path};

use crate::auth::hash_password;
use crate::logger;
use crate::models::{Permission, Role, UserRecord, UserStore};
use crate::ui;

// ------------------ PARAMETERS ------------------
pub const USERS_FILE: &str = ".users.json";
pub const ADMIN_USERNAME: &str = "Methembe";
pub const ADMIN_PASSWORD: &str = "1111"; // printed in plaintext on reset

const ADMIN_PERMISSIONS: [Permission; 5] = [
    Permission::ListFiles,
    Permission::CreateFile,
    Permission::DeleteFile,
    Permission::MoveFile,
    Permission::ReadFile,
];

/// Build an admin record holding the hashed password and the full file permission set.
pub fn create_admin_user(username: &str, password: &str) -> UserRecord {
    UserRecord {
        username: username.to_string(),
        password: hash_password(password),
        role: Role::Admin,
        permissions: ADMIN_PERMISSIONS.to_vec(),
    }
}

/// Replace the users file at `path` with a store holding only the hardcoded admin.
/// Prior content is truncated, never merged.
pub fn reset_users_file_at(path: &Path) -> Result<UserStore> {
    let store = UserStore::with_user(create_admin_user(ADMIN_USERNAME, ADMIN_PASSWORD));
    let json = store.to_json()?;
    fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(store)
}

/// Reset `.users.json` in the working directory and report it on stdout.
pub fn reset_users_file() -> Result<()> {
    reset_users_file_at(Path::new(USERS_FILE))?;

    // The store is already written; a missing audit line is not fatal
    if let Err(e) = logger::log_event(ADMIN_USERNAME, "USERS_RESET") {
        eprintln!("Audit log error: {e:#}");
    }

    ui::reset_confirmation_ui(USERS_FILE, ADMIN_USERNAME, ADMIN_PASSWORD);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_admin_user() {
        let user = create_admin_user("Methembe", "1111");
        assert_eq!(user.username, "Methembe");
        assert_eq!(user.password, hash_password("1111"));
        assert_eq!(user.role, Role::Admin);
        let tags: Vec<&str> = user.permissions.iter().map(|p| p.as_str()).collect();
        assert_eq!(
            tags,
            ["list_files", "create_file", "delete_file", "move_file", "read_file"]
        );
    }

    #[test]
    fn test_reset_truncates_previous_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(USERS_FILE);
        fs::write(&path, "x".repeat(4096)).unwrap();

        let store = reset_users_file_at(&path).unwrap();
        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, store.to_json().unwrap());
        assert!(!written.contains("xxxx"));
    }

    #[test]
    fn test_reset_into_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(reset_users_file_at(dir.path()).is_err());
    }
}

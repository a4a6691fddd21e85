/*
[INPUT]:  Token storage directory
[OUTPUT]: Persisted API authorization token
[POS]:    Auth layer - file-backed token persistence
[UPDATE]: When token storage format or file naming conventions change
*/

use std::fs;
use std::io;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

/// Storage key the upstream web client persists its token under
const TOKEN_KEY: &str = "django_api_token";

/// File-backed store for the API authorization token.
///
/// The client only reads from the store; `save_token` and `clear_token`
/// exist for callers that obtain or revoke a credential out of band.
#[derive(Debug, Clone)]
pub struct TokenStore {
    store_dir: PathBuf,
}

impl TokenStore {
    /// Create a new token store backed by the given directory
    pub fn new(store_dir: impl AsRef<Path>) -> Self {
        Self {
            store_dir: store_dir.as_ref().to_path_buf(),
        }
    }

    /// Load the stored token, if any.
    ///
    /// An unreadable or missing token file is treated as an absent
    /// credential, never as an error.
    pub fn load_token(&self) -> Option<String> {
        let content = fs::read_to_string(self.token_file_path()).ok()?;
        let token = content.trim();
        if token.is_empty() {
            return None;
        }
        Some(token.to_string())
    }

    /// Save a token to disk, restricting the file to the owner
    pub fn save_token(&self, token: &str) -> io::Result<()> {
        if !self.store_dir.exists() {
            fs::create_dir_all(&self.store_dir)?;
        }

        let path = self.token_file_path();
        fs::write(&path, token)?;

        let mut perms = fs::metadata(&path)?.permissions();
        perms.set_mode(0o600);
        fs::set_permissions(&path, perms)?;

        Ok(())
    }

    /// Remove the stored token if present
    pub fn clear_token(&self) -> io::Result<()> {
        let path = self.token_file_path();
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }

    /// Get the expected file path for the token
    pub fn token_file_path(&self) -> PathBuf {
        self.store_dir.join(TOKEN_KEY)
    }
}

// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Session token storage.
//!
//! The bearer token returned by login is kept behind the [`TokenStore`]
//! trait so the gateway never touches storage directly:
//! - [`FileTokenStore`] persists it under a fixed key in a data directory
//!   and survives process restarts.
//! - [`MemoryTokenStore`] keeps it in process memory (tests, ephemeral use).
//!
//! [`Session`] is the cloneable handle injected into the gateway.

use crate::error::SessionError;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

/// Fixed key the token is stored under.
pub const TOKEN_KEY: &str = "access_token";

/// Storage backend for the current session token.
pub trait TokenStore: Send + Sync {
    /// Current token, or `None` if never set or cleared.
    fn get(&self) -> Result<Option<String>, SessionError>;

    /// Persist a token, replacing any previous one.
    fn set(&self, token: &str) -> Result<(), SessionError>;

    /// Remove the stored token.
    fn clear(&self) -> Result<(), SessionError>;
}

/// In-memory token store.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: RwLock<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self) -> Result<Option<String>, SessionError> {
        Ok(self
            .token
            .read()
            .map_err(|_| SessionError::Poisoned)?
            .clone())
    }

    fn set(&self, token: &str) -> Result<(), SessionError> {
        *self.token.write().map_err(|_| SessionError::Poisoned)? = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), SessionError> {
        *self.token.write().map_err(|_| SessionError::Poisoned)? = None;
        Ok(())
    }
}

/// Filesystem-backed token store.
///
/// Layout: `<base_dir>/access_token` containing the raw token. Every `get`
/// reads the file, so two stores opened on the same directory see each
/// other's writes.
#[derive(Debug)]
pub struct FileTokenStore {
    base: PathBuf,
    // Serializes writers within this process.
    write_lock: RwLock<()>,
}

impl FileTokenStore {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self {
            base: base.into(),
            write_lock: RwLock::new(()),
        }
    }

    /// Path of the token file.
    pub fn token_path(&self) -> PathBuf {
        self.base.join(TOKEN_KEY)
    }
}

fn io_error(path: &Path, source: std::io::Error) -> SessionError {
    SessionError::Io {
        path: path.display().to_string(),
        source,
    }
}

/// Create or truncate `path` readable by the owner only, then write `token`.
fn write_private(path: &Path, token: &str) -> std::io::Result<()> {
    let mut options = std::fs::OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }

    let mut file = options.open(path)?;
    file.write_all(token.as_bytes())?;
    file.sync_all()
}

impl TokenStore for FileTokenStore {
    fn get(&self) -> Result<Option<String>, SessionError> {
        let _guard = self.write_lock.read().map_err(|_| SessionError::Poisoned)?;
        let path = self.token_path();
        match std::fs::read_to_string(&path) {
            Ok(content) => {
                let token = content.trim();
                Ok((!token.is_empty()).then(|| token.to_string()))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(io_error(&path, e)),
        }
    }

    fn set(&self, token: &str) -> Result<(), SessionError> {
        let _guard = self.write_lock.write().map_err(|_| SessionError::Poisoned)?;
        std::fs::create_dir_all(&self.base).map_err(|e| io_error(&self.base, e))?;

        // Write to a sibling file and rename so readers never see a partial token.
        let path = self.token_path();
        let tmp = self.base.join(format!("{}.tmp", TOKEN_KEY));
        write_private(&tmp, token).map_err(|e| io_error(&tmp, e))?;
        std::fs::rename(&tmp, &path).map_err(|e| io_error(&path, e))?;

        tracing::debug!(path = %path.display(), "Session token persisted");
        Ok(())
    }

    fn clear(&self) -> Result<(), SessionError> {
        let _guard = self.write_lock.write().map_err(|_| SessionError::Poisoned)?;
        let path = self.token_path();
        match std::fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(io_error(&path, e)),
        }
    }
}

/// Shared handle to the session token store.
#[derive(Clone)]
pub struct Session {
    store: Arc<dyn TokenStore>,
}

impl Session {
    pub fn new(store: Arc<dyn TokenStore>) -> Self {
        Self { store }
    }

    /// Session backed by a fresh in-memory store.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryTokenStore::new()))
    }

    /// Session persisted under `dir`.
    pub fn persistent(dir: impl Into<PathBuf>) -> Self {
        Self::new(Arc::new(FileTokenStore::new(dir)))
    }

    pub fn token(&self) -> Result<Option<String>, SessionError> {
        self.store.get()
    }

    /// Store a token. A blank token clears the session instead, so both
    /// store kinds agree that "no token" means unauthenticated.
    pub fn set_token(&self, token: &str) -> Result<(), SessionError> {
        let token = token.trim();
        if token.is_empty() {
            return self.store.clear();
        }
        self.store.set(token)
    }

    pub fn clear(&self) -> Result<(), SessionError> {
        self.store.clear()
    }

    pub fn is_authenticated(&self) -> Result<bool, SessionError> {
        Ok(self.token()?.is_some())
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Never print the token itself.
        f.debug_struct("Session").finish_non_exhaustive()
    }
}

use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use thiserror::Error;
use tracing::debug;

use crate::domain::session::Session;
use crate::services::session_json::{
    SessionJsonError, deserialize_session_from_json_str, serialize_session_to_json_string,
};

#[derive(Error, Debug)]
pub enum SessionStoreError {
    #[error("failed to read session file {path}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to write session file {path}: {source}")]
    Write { path: PathBuf, source: io::Error },
    #[error("invalid session file {path}: {source}")]
    Invalid {
        path: PathBuf,
        source: SessionJsonError,
    },
    #[error("failed to encode session: {0}")]
    Encode(SessionJsonError),
    #[error("session store lock is poisoned")]
    Poisoned,
}

/// Loads and saves the single session document as a whole.
pub trait SessionRepository {
    fn load(&self) -> Result<Session, SessionStoreError>;
    fn save(&self, session: &Session) -> Result<(), SessionStoreError>;
}

/// Session document kept in a JSON file. A missing file is the empty session.
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl SessionRepository for JsonFileRepository {
    fn load(&self) -> Result<Session, SessionStoreError> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "session file not found, starting empty");
            return Ok(Session::new());
        }
        let contents =
            std::fs::read_to_string(&self.path).map_err(|source| SessionStoreError::Read {
                path: self.path.clone(),
                source,
            })?;
        deserialize_session_from_json_str(&contents).map_err(|source| {
            SessionStoreError::Invalid {
                path: self.path.clone(),
                source,
            }
        })
    }

    fn save(&self, session: &Session) -> Result<(), SessionStoreError> {
        let json = serialize_session_to_json_string(session).map_err(SessionStoreError::Encode)?;
        std::fs::write(&self.path, json).map_err(|source| SessionStoreError::Write {
            path: self.path.clone(),
            source,
        })?;
        debug!(path = %self.path.display(), state = %session.state(), "session saved");
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryRepository {
    session: Mutex<Session>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionRepository for InMemoryRepository {
    fn load(&self) -> Result<Session, SessionStoreError> {
        let guard = self.session.lock().map_err(|_| SessionStoreError::Poisoned)?;
        Ok(guard.clone())
    }

    fn save(&self, session: &Session) -> Result<(), SessionStoreError> {
        let mut guard = self.session.lock().map_err(|_| SessionStoreError::Poisoned)?;
        *guard = session.clone();
        Ok(())
    }
}

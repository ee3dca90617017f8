//! JSON-file session store owned by the CLI.
//!
//! The engine never touches storage; this file is the CLI's own session
//! collection, handed to the core library as a plain slice.

use std::path::PathBuf;

use studyflow_core::{CoreError, Result, Session};

/// Sessions persisted as a JSON array.
pub struct SessionStore {
    path: PathBuf,
    sessions: Vec<Session>,
}

impl SessionStore {
    /// Default store location under the user data directory.
    pub fn default_path() -> Option<PathBuf> {
        dirs::data_dir().map(|dir| dir.join("studyflow").join("sessions.json"))
    }

    /// Open a store, creating an empty one if the file does not exist.
    pub fn open(path: Option<PathBuf>) -> Result<Self> {
        let path = path.or_else(Self::default_path).ok_or_else(|| {
            CoreError::Custom("no data directory available for the session store".to_string())
        })?;

        let sessions = if path.exists() {
            let contents = std::fs::read_to_string(&path)?;
            serde_json::from_str(&contents)?
        } else {
            Vec::new()
        };

        Ok(Self { path, sessions })
    }

    /// Persist the store back to disk.
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(&self.sessions)?;
        std::fs::write(&self.path, contents)?;
        Ok(())
    }

    /// All sessions, in stored order.
    pub fn sessions(&self) -> &[Session] {
        &self.sessions
    }

    /// Append a session.
    pub fn add(&mut self, session: Session) {
        self.sessions.push(session);
    }

    /// Mark a session completed. Returns false if the id is unknown.
    pub fn complete(&mut self, id: &str) -> bool {
        match self.sessions.iter_mut().find(|s| s.id == id) {
            Some(session) => {
                session.completed = true;
                true
            }
            None => false,
        }
    }

    /// Remove a session. Returns false if the id is unknown.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.sessions.len();
        self.sessions.retain(|s| s.id != id);
        self.sessions.len() < before
    }
}

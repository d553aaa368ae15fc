use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::Context;
use log::debug;

use crate::core::{GameState, DEFAULT_NAMESPACE};
use crate::session::SessionStore;

/// Session stored as a JSON file named after its namespace.
#[derive(Debug, Clone)]
pub struct FileSession {
    path: PathBuf,
}

impl FileSession {
    /// Session `namespace` inside `dir`, stored at `dir/<namespace>.json`.
    pub fn new(dir: impl AsRef<Path>, namespace: &str) -> Self {
        Self {
            path: dir.as_ref().join(format!("{}.json", namespace)),
        }
    }

    /// Session under the default `game` namespace.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(dir, DEFAULT_NAMESPACE)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionStore for FileSession {
    fn load(&mut self) -> anyhow::Result<Option<GameState>> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(e).with_context(|| format!("reading {}", self.path.display()))
            }
        };
        let state = serde_json::from_str(&text)
            .with_context(|| format!("parsing {}", self.path.display()))?;
        debug!("loaded session from {}", self.path.display());
        Ok(Some(state))
    }

    fn save(&mut self, state: &GameState) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        let text = serde_json::to_string_pretty(state)?;
        fs::write(&self.path, text).with_context(|| format!("writing {}", self.path.display()))?;
        debug!("saved session to {}", self.path.display());
        Ok(())
    }

    fn clear(&mut self) -> anyhow::Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e).with_context(|| format!("removing {}", self.path.display())),
        }
    }
}

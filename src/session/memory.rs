use crate::core::GameState;
use crate::session::SessionStore;

/// Session kept in memory as `bincode` bytes, so every load goes through the
/// same encode/decode boundary a real store would.
#[derive(Debug, Default, Clone)]
pub struct MemorySession {
    bytes: Option<Vec<u8>>,
}

impl MemorySession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a game is currently saved.
    pub fn is_active(&self) -> bool {
        self.bytes.is_some()
    }
}

impl SessionStore for MemorySession {
    fn load(&mut self) -> anyhow::Result<Option<GameState>> {
        match &self.bytes {
            Some(bytes) => Ok(Some(bincode::deserialize(bytes)?)),
            None => Ok(None),
        }
    }

    fn save(&mut self, state: &GameState) -> anyhow::Result<()> {
        self.bytes = Some(bincode::serialize(state)?);
        Ok(())
    }

    fn clear(&mut self) -> anyhow::Result<()> {
        self.bytes = None;
        Ok(())
    }
}

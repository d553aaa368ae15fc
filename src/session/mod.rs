//! Persistence boundary between turns.
//!
//! The engine itself never stores anything. A [`SessionStore`] holds one
//! game's [`GameState`] under a namespace; [`play_turn`] loads it, applies one
//! input and saves it back (or discards it once the fleet is sunk).

use log::{info, warn};
use rand::Rng;

use crate::core::{GameEngine, GameError, GameState, TurnOutcome};
use crate::ui::render_board;

pub trait SessionStore {
    /// Previously saved state, or `None` if no game has started.
    fn load(&mut self) -> anyhow::Result<Option<GameState>>;
    fn save(&mut self, state: &GameState) -> anyhow::Result<()>;
    /// Forget the saved game.
    fn clear(&mut self) -> anyhow::Result<()>;
}

pub mod file;
pub mod memory;

pub use file::FileSession;
pub use memory::MemorySession;

/// Everything the presentation layer needs after one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// Rendered grid: the hidden one after `SHOW`, otherwise the visible one.
    pub board: String,
    /// Result of the action just taken (`"HIT AT A5"`, `"MISS AT B2"`, `"SHIP SUNK"`).
    pub message: Option<String>,
    /// Input was present but not a coordinate or `SHOW`.
    pub invalid_input: bool,
    pub game_over: bool,
    /// Turn count once the game is over.
    pub final_turns: Option<u32>,
}

/// Apply one optional input to `engine` and describe the result.
///
/// `None` means the request carried no input; the visible grid is rendered
/// and nothing changes. Malformed input is reported through
/// [`Response::invalid_input`] rather than as an error.
pub fn respond(engine: &mut GameEngine, input: Option<&str>) -> Result<Response, GameError> {
    let mut show_hidden = false;
    let mut message = None;
    let mut invalid_input = false;

    if let Some(raw) = input {
        match engine.handle_input(raw) {
            Ok(TurnOutcome::Shown) => show_hidden = true,
            Ok(outcome) => message = Some(outcome.to_string()),
            Err(GameError::InvalidCoordinate(raw)) => {
                warn!("rejected input {:?}", raw);
                invalid_input = true;
            }
            Err(e) => return Err(e),
        }
    }

    let grid = if show_hidden {
        engine.hidden()
    } else {
        engine.visible()
    };
    let game_over = engine.is_over();
    Ok(Response {
        board: render_board(grid),
        message,
        invalid_input,
        game_over,
        final_turns: game_over.then(|| engine.turns()),
    })
}

/// Load (or start) the game in `store`, process `input`, then persist.
///
/// A finished game is cleared from the store so the next call starts afresh.
pub fn play_turn<S, R>(store: &mut S, rng: &mut R, input: Option<&str>) -> anyhow::Result<Response>
where
    S: SessionStore + ?Sized,
    R: Rng + ?Sized,
{
    let mut engine = match store.load()? {
        Some(state) => GameEngine::from_state(state).map_err(|e| anyhow::anyhow!(e))?,
        None => {
            let engine = GameEngine::new(rng).map_err(|e| anyhow::anyhow!(e))?;
            store.save(&engine.state())?;
            engine
        }
    };

    let response = respond(&mut engine, input).map_err(|e| anyhow::anyhow!(e))?;
    if response.game_over {
        info!("game over in {} turns, clearing session", engine.turns());
        store.clear()?;
    } else {
        store.save(&engine.state())?;
    }
    Ok(response)
}

//! Single-player "sink the fleet": a hidden fleet on a 10x10 grid, shot at
//! one coordinate per turn until every ship is sunk.

pub mod core;
mod logging;
pub mod prelude;
pub mod session;
pub mod ui;

pub use crate::core::*;
pub use logging::{init_logging, LOG_ENV};
pub use session::{play_turn, respond, FileSession, MemorySession, Response, SessionStore};
pub use ui::{render, render_board, render_columns};

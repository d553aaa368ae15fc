//! Plain-text grid rendering.

use std::fmt::Write;

use crate::core::{config::BOARD_SIZE, Grid, Tile};

/// Three-character cell glyph. Every tile has its own glyph.
pub fn glyph(tile: Tile) -> &'static str {
    match tile {
        Tile::EmptyUnknown => " . ",
        Tile::Miss => " - ",
        Tile::Hit => " X ",
        Tile::Ship => " S ",
        Tile::EmptyNoShip => "   ",
    }
}

/// Column number header, aligned with [`render`].
pub fn render_columns() -> String {
    let mut out = String::from("   ");
    for c in 1..=BOARD_SIZE as usize {
        let _ = write!(out, " {} ", c);
    }
    out
}

/// Render `grid` one row per line, each prefixed with its row letter.
pub fn render(grid: &Grid) -> String {
    let mut out = String::new();
    for r in 0..BOARD_SIZE as usize {
        let letter = (b'A' + r as u8) as char;
        let _ = write!(out, "\n {} ", letter);
        for tile in grid.row(r).unwrap_or_default() {
            out.push_str(glyph(*tile));
        }
    }
    out
}

/// Header plus grid, ready to print.
pub fn render_board(grid: &Grid) -> String {
    let mut out = render_columns();
    out.push_str(&render(grid));
    out
}

//! Board-to-glyph rendering for chat front-ends.
//!
//! Every distinct cell value maps to exactly one glyph. Rows come out
//! top to bottom, cells left to right.

use crate::games::{Mark, MarkingBoard, MergeBoard};

/// Glyph for tiles the table doesn't list.
pub const UNKNOWN_TILE: &str = "⬛";

const TILE_GLYPHS: [(u32, &str); 12] = [
    (0, "⬜"),
    (2, "🟩"),
    (4, "🟦"),
    (8, "🟧"),
    (16, "🟥"),
    (32, "🟨"),
    (64, "🟪"),
    (128, "🔶"),
    (256, "🔷"),
    (512, "💠"),
    (1024, "🔥"),
    (2048, "🏆"),
];

/// Glyph for a merge tile.
#[must_use]
pub fn tile_glyph(value: u32) -> &'static str {
    TILE_GLYPHS
        .iter()
        .find(|(v, _)| *v == value)
        .map_or(UNKNOWN_TILE, |&(_, glyph)| glyph)
}

/// Glyph for a marking cell.
#[must_use]
pub fn mark_glyph(mark: Mark) -> &'static str {
    match mark {
        Mark::Empty => "⬜",
        Mark::Player => "❌",
        Mark::Opponent => "⭕",
    }
}

/// Merge board as rows of glyphs.
#[must_use]
pub fn merge_glyphs(board: &MergeBoard) -> Vec<Vec<&'static str>> {
    board
        .rows()
        .iter()
        .map(|row| row.iter().map(|&v| tile_glyph(v)).collect())
        .collect()
}

/// Marking board as rows of glyphs.
#[must_use]
pub fn marking_glyphs(board: &MarkingBoard) -> Vec<Vec<&'static str>> {
    board
        .rows()
        .iter()
        .map(|row| row.iter().map(|&m| mark_glyph(m)).collect())
        .collect()
}

/// Merge board as text: cells joined by spaces, rows by newlines.
#[must_use]
pub fn merge_text(board: &MergeBoard) -> String {
    join_rows(&merge_glyphs(board))
}

/// Marking board as text: cells joined by spaces, rows by newlines.
#[must_use]
pub fn marking_text(board: &MarkingBoard) -> String {
    join_rows(&marking_glyphs(board))
}

fn join_rows(rows: &[Vec<&str>]) -> String {
    rows.iter()
        .map(|row| row.join(" "))
        .collect::<Vec<_>>()
        .join("\n")
}

//! Perft (performance test) for move generation correctness verification.

use crate::game::Game;

/// Count the number of leaf nodes at the given depth.
///
/// Depth 0 returns 1 (the current position). Depth 1 returns the number
/// of legal moves without playing any of them.
pub fn perft(game: &Game, depth: usize) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = game.legal_moves();

    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0u64;
    for mv in &moves {
        let mut child = *game;
        child.apply(*mv);
        nodes += perft(&child, depth - 1);
    }
    nodes
}

/// Run perft with per-move breakdown (useful for debugging).
///
/// Returns `(token, node_count)` pairs sorted by token. Moves sharing a
/// token each get their own entry.
pub fn divide(game: &Game, depth: usize) -> Vec<(String, u64)> {
    let moves = game.legal_moves();
    let mut results: Vec<(String, u64)> = moves
        .iter()
        .map(|mv| {
            let mut child = *game;
            child.apply(*mv);
            let count = if depth <= 1 { 1 } else { perft(&child, depth - 1) };
            (mv.token(), count)
        })
        .collect();
    results.sort_by(|a, b| a.0.cmp(&b.0));
    results
}

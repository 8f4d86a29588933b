//! Rule-level checks through the public API only.

use rookery_core::notation::{find_token, is_ambiguous};
use rookery_core::{
    Board, Color, File, Game, GameError, Move, Piece, PieceKind, Square, generate_legal_moves,
};

fn sq(s: &str) -> Square {
    Square::from_algebraic(s).unwrap()
}

/// Play up to `plies` moves picking by a fixed index sequence, calling
/// `visit` on every position reached (including the first).
fn walk(seed: usize, plies: usize, mut visit: impl FnMut(&Game)) {
    let mut game = Game::standard();
    let mut pick = seed;
    visit(&game);
    for _ in 0..plies {
        let moves = game.legal_moves();
        if moves.is_empty() {
            break;
        }
        pick = pick.wrapping_mul(31).wrapping_add(17);
        game.apply(moves[pick % moves.len()]);
        visit(&game);
    }
}

#[test]
fn every_reachable_position_has_one_king_per_side() {
    for seed in 0..8 {
        walk(seed, 80, |game| {
            for color in Color::ALL {
                let king = Piece::new(PieceKind::King, color);
                assert_eq!(
                    game.board().count(king),
                    1,
                    "seed {seed}: {color:?} king count wrong in {game}"
                );
            }
        });
    }
}

#[test]
fn legal_moves_never_leave_the_king_attacked() {
    for seed in 0..8 {
        walk(seed, 60, |game| {
            let mover = game.side_to_move();
            for mv in &game.legal_moves() {
                let after = game.board().after_move(*mv, game.en_passant());
                assert!(
                    !after.is_king_attacked(mover),
                    "seed {seed}: {mv:?} exposes the king in {game}"
                );
            }
        });
    }
}

#[test]
fn unambiguous_tokens_decode_to_their_move() {
    for seed in 0..4 {
        walk(seed, 60, |game| {
            let moves = game.legal_moves();
            for mv in &moves {
                let token = mv.token();
                if is_ambiguous(&moves, &token) {
                    continue;
                }
                assert_eq!(find_token(&moves, &token), Some(*mv), "token {token} in {game}");
            }
        });
    }
}

#[test]
fn ambiguous_token_picks_first_generated() {
    // Knights on b1 and f1 both reach d2.
    let game: Game = "4k3/8/8/8/8/8/8/1N2KN2 w - -".parse().unwrap();
    let moves = game.legal_moves();
    assert!(is_ambiguous(&moves, "Nd2"));
    let chosen = moves.find_token("Nd2").unwrap();
    assert_eq!(chosen.source(), sq("b1"));
}

#[test]
fn en_passant_capture_removes_the_passed_pawn() {
    let mut game = Game::standard();
    for token in ["e4", "a5", "e5", "f5"] {
        game.play(token).unwrap();
    }
    assert_eq!(game.en_passant(), Some(File::FileF));

    let mv = game.play("exf6").unwrap();
    assert!(mv.is_capture());
    assert_eq!(game.board().piece_on(sq("f6")), Some(Piece::WHITE_PAWN));
    assert_eq!(game.board().piece_on(sq("f5")), None, "captured pawn stays behind");
    assert_eq!(game.board().piece_on(sq("e5")), None);
    assert_eq!(game.board().pieces().count(), 31);
}

#[test]
fn en_passant_window_closes_after_one_move() {
    let mut game = Game::standard();
    for token in ["e4", "a5", "e5", "f5", "Nf3", "Nc6"] {
        game.play(token).unwrap();
    }
    assert_eq!(game.en_passant(), None);

    let moves = game.legal_moves();
    let ep_count = moves
        .iter()
        .filter(|mv| mv.is_en_passant(game.board(), Some(File::FileF)))
        .count();
    assert_eq!(ep_count, 0);
    assert!(moves.find_token("exf6").is_none());

    let err = game.play("exf6").unwrap_err();
    assert_eq!(err, GameError::InvalidToken { token: "exf6".to_string() });
}

#[test]
fn friendly_blocker_shuts_the_ray() {
    let mut board = Board::EMPTY;
    board.put(sq("a1"), Piece::WHITE_ROOK);
    board.put(sq("a2"), Piece::WHITE_PAWN);
    board.put(sq("a3"), Piece::BLACK_KNIGHT);
    board.put(sq("h1"), Piece::WHITE_KING);
    board.put(sq("h8"), Piece::BLACK_KING);

    let moves = generate_legal_moves(&board, Color::White, None);
    let north: Vec<&Move> = moves
        .iter()
        .filter(|mv| mv.source() == sq("a1") && mv.dest().file() == File::FileA)
        .collect();
    assert!(north.is_empty(), "rook moved through its own pawn: {north:?}");
}

#[test]
fn terminal_positions_are_detected() {
    assert!(!Game::standard().is_game_over());

    // Back-rank mate.
    let mate: Game = "R5k1/5ppp/8/8/8/8/8/6K1 b - -".parse().unwrap();
    assert!(mate.is_game_over());
    assert!(mate.board().is_king_attacked(Color::Black));

    // Stalemate reads the same.
    let stalemate: Game = "7k/5Q2/6K1/8/8/8/8/8 b - -".parse().unwrap();
    assert!(stalemate.is_game_over());
    assert!(!stalemate.board().is_king_attacked(Color::Black));
}

#[test]
fn rejected_token_leaves_game_untouched() {
    let mut game = Game::standard();
    game.play("d4").unwrap();
    let before = game;
    assert!(game.play("d4").is_err());
    assert_eq!(game, before);
}

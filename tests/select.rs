use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::collections::HashSet;
use woodpusher::board::{Board, Move, Side};
use woodpusher::search::eval::{evaluate, INF};
use woodpusher::search::minimax::minimax;
use woodpusher::search::{select_move, Difficulty};

fn rng(seed: u64) -> SmallRng {
    SmallRng::seed_from_u64(seed)
}

#[test]
fn no_moves_means_no_selection() {
    let b = Board::empty();
    for tier in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
        assert_eq!(select_move(&b, Side::Black, tier, &mut rng(0)), None);
        assert_eq!(select_move(&b, Side::White, tier, &mut rng(0)), None);
    }
}

#[test]
fn easy_always_plays_the_only_legal_move() {
    // A lone black pawn on a2 can only push to a1.
    let b = Board::from_fen("8/8/8/8/8/8/p7/8").unwrap();
    let only: Move = "a2a1".parse().unwrap();
    for seed in 0..50 {
        assert_eq!(
            select_move(&b, Side::Black, Difficulty::Easy, &mut rng(seed)),
            Some(only)
        );
    }
}

#[test]
fn easy_spreads_over_the_legal_moves() {
    // Lone black king in the corner has three moves; over many seeds a
    // uniform pick must hit more than one of them.
    let b = Board::from_fen("k7/8/8/8/8/8/8/8").unwrap();
    let mut seen = HashSet::new();
    for seed in 0..100 {
        let mv = select_move(&b, Side::Black, Difficulty::Easy, &mut rng(seed)).unwrap();
        seen.insert(mv);
    }
    assert!(seen.len() > 1, "easy tier never varied: {seen:?}");
}

#[test]
fn medium_takes_the_unique_biggest_capture() {
    // Black queen a8 sees the undefended rook h8 (5) and the pawn a7 (1);
    // nothing else captures. The rook must be taken every time.
    let b = Board::from_fen("q6R/P7/8/8/8/8/8/K6k").unwrap();
    let rook_grab: Move = "a8h8".parse().unwrap();
    for seed in 0..50 {
        assert_eq!(
            select_move(&b, Side::Black, Difficulty::Medium, &mut rng(seed)),
            Some(rook_grab)
        );
    }
}

#[test]
fn medium_breaks_capture_ties_at_random() {
    // Black queen d5 can capture either white pawn (b3 or f3), value 1 each.
    let b = Board::from_fen("8/8/8/3q4/8/1P3P2/8/8").unwrap();
    let grabs: HashSet<Move> =
        ["d5b3".parse().unwrap(), "d5f3".parse().unwrap()].into_iter().collect();
    let mut seen = HashSet::new();
    for seed in 0..100 {
        let mv = select_move(&b, Side::Black, Difficulty::Medium, &mut rng(seed)).unwrap();
        assert!(grabs.contains(&mv), "expected a pawn grab, got {mv}");
        seen.insert(mv);
    }
    assert_eq!(seen, grabs, "both tied captures should occur across seeds");
}

#[test]
fn hard_declines_the_defended_rook_for_the_free_knight() {
    // Grabbing the d2 rook (5) loses the queen to Kxd2; the h4 knight (3)
    // is free. Medium is value-greedy and walks into it, hard does not.
    let b = Board::from_fen("k2q4/8/8/8/7N/8/3R4/4K3").unwrap();
    let knight_grab: Move = "d8h4".parse().unwrap();
    let rook_grab: Move = "d8d2".parse().unwrap();

    assert_eq!(
        select_move(&b, Side::Black, Difficulty::Hard, &mut rng(7)),
        Some(knight_grab)
    );
    assert_eq!(
        select_move(&b, Side::Black, Difficulty::Medium, &mut rng(7)),
        Some(rook_grab)
    );
}

#[test]
fn hard_takes_the_hanging_queen() {
    // Black queen d2 takes the undefended white queen e2; any quieter move
    // lets White play Qxd2 instead.
    let b = Board::from_fen("k7/8/8/8/8/8/3qQ3/7K").unwrap();
    assert_eq!(
        select_move(&b, Side::Black, Difficulty::Hard, &mut rng(0)),
        Some("d2e2".parse().unwrap())
    );
}

#[test]
fn hard_plays_for_white_by_minimizing() {
    // Mirror position: white queen d1, black rook d7 defended by its king,
    // free black knight h5.
    let b = Board::from_fen("4k3/3r4/8/7n/8/8/8/K2Q4").unwrap();
    assert_eq!(
        select_move(&b, Side::White, Difficulty::Hard, &mut rng(0)),
        Some("d1h5".parse().unwrap())
    );
}

#[test]
fn minimax_scores_empty_move_positions_as_terminal() {
    // Only a black king on the board: White to move has nothing.
    let b = Board::from_fen("k7/8/8/8/8/8/8/8").unwrap();
    assert_eq!(minimax(&b, 1, false), INF);
    // Only a white king: Black to move has nothing.
    let b = Board::from_fen("8/8/8/8/8/8/8/K7").unwrap();
    assert_eq!(minimax(&b, 1, true), -INF);
}

#[test]
fn minimax_at_zero_plies_is_the_evaluation() {
    let b = Board::initial();
    assert_eq!(minimax(&b, 0, true), evaluate(&b));
    assert_eq!(evaluate(&b), 0);

    // Black up a rook reads +5.
    let b = Board::from_fen("r3k3/8/8/8/8/8/8/4K3").unwrap();
    assert_eq!(evaluate(&b), 5);
    assert_eq!(minimax(&b, 0, false), 5);
}

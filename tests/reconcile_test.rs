//! Property-style tests over real game lines: every reconciliation result is
//! legal, illegal edits truncate exactly, pairing round-trips.

use scribe_core::{
    flatten, legal_moves_at, match_options, pair, reconcile, MoveSequence, RulesEngine,
    StandardRules,
};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

const GAMES: &[&str] = &[
    // Opera game
    "1. e4 e5 2. Nf3 d6 3. d4 Bg4 4. dxe5 Bxf3 5. Qxf3 dxe5 6. Bc4 Nf6 7. Qb3 Qe7 \
     8. Nc3 c6 9. Bg5 b5 10. Nxb5 cxb5 11. Bxb5+ Nbd7 12. O-O-O Rd8 \
     13. Rxd7 Rxd7 14. Rd1 Qe6 15. Bxd7+ Nxd7 16. Qb8+ Nxb8 17. Rd8#",
    // Queen's Gambit Declined
    "1. d4 d5 2. c4 e6 3. Nc3 Nf6 4. Bg5 Be7 5. e3 O-O 6. Nf3 h6 7. Bh4 b6",
    // En passant and promotion
    "1. e4 Nf6 2. e5 d5 3. exd6 e5 4. dxc7 Qe7 5. cxb8=Q",
];

fn load(pgn: &str) -> MoveSequence {
    let rules = StandardRules::new();
    let game = rules.load_from_text(pgn).expect("test game should load");
    MoveSequence::from(rules.history_tokens(&game))
}

fn replays(rules: &StandardRules, s: &MoveSequence) -> bool {
    rules.replay(s.iter().map(String::as_str)).is_ok()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[test]
fn illegal_edit_truncates_to_edited_ply() {
    let rules = StandardRules::new();
    for pgn in GAMES {
        let s = load(pgn);
        for k in 0..s.len() {
            let out = reconcile(&rules, &s, k, "Kh9");
            assert_eq!(out.len(), k, "edit at ply {k} of {pgn}");
            assert_eq!(out.as_slice(), &s.as_slice()[..k]);
        }
    }
}

#[test]
fn every_reconcile_result_is_legal() {
    let rules = StandardRules::new();
    for pgn in GAMES {
        let s = load(pgn);
        for k in 0..=s.len() {
            for token in legal_moves_at(&rules, &s, k).unwrap() {
                let out = reconcile(&rules, &s, k, &token);
                assert!(replays(&rules, &out));
                assert!(out.len() > k, "a legal option must survive at ply {k}");
                assert_eq!(out.get(k), Some(token.as_str()));
            }
        }
    }
}

#[test]
fn reconcile_with_same_token_is_identity() {
    let rules = StandardRules::new();
    for pgn in GAMES {
        let s = load(pgn);
        for k in 0..s.len() {
            let same = s.get(k).unwrap().to_string();
            assert_eq!(reconcile(&rules, &s, k, &same), s);
        }
    }
}

#[test]
fn stale_bishop_move_dropped_after_d4() {
    let rules = StandardRules::new();
    // With 1. d4 the e2 pawn never moves, so 2. Bc4 is no longer playable.
    let s = MoveSequence::from(["e4", "e5", "Bc4"]);
    assert_eq!(reconcile(&rules, &s, 0, "d4"), MoveSequence::from(["d4", "e5"]));
}

#[test]
fn pairing_padding_and_round_trip() {
    assert_eq!(pair(&[]).len(), 1);

    for pgn in GAMES {
        let s = load(pgn);
        for n in 0..=s.len() {
            let prefix = &s.as_slice()[..n];
            let pairs = pair(prefix);
            let last = pairs.last().unwrap();

            assert_eq!(pairs.len(), n / 2 + 1);
            assert!(last.black.is_none());
            assert_eq!(last.white.is_some(), n % 2 == 1);
            assert_eq!(flatten(&pairs), prefix);
        }
    }
}

#[test]
fn captures_found_by_marker_free_query() {
    let rules = StandardRules::new();
    for pgn in GAMES {
        let s = load(pgn);
        for k in 0..=s.len() {
            let options = legal_moves_at(&rules, &s, k).unwrap();
            for capture in options.iter().filter(|o| o.contains('x')) {
                let typed = capture.replace('x', "");
                assert!(match_options(&options, &typed).contains(capture));
            }
        }
    }
}

#[test]
fn reconcile_drops_garbage_tail() {
    let rules = StandardRules::new();
    let game = load(GAMES[1]);
    let mut tokens = game.clone().into_inner();
    tokens.push("Qxh8".to_string());
    tokens.push("e4".to_string());
    let s = MoveSequence::from(tokens);

    let last = game.len() - 1;
    let out = reconcile(&rules, &s, last, game.get(last).unwrap());
    assert_eq!(out, game);
}

//! Session tests with scripted dice.
//!
//! Each round with items consumes randomness in a fixed order: the CPU's
//! item pick, then the player's roll, then the CPU's roll.

mod common;

use common::{run_session, ScriptedRng};
use dice_duel::{GameConfig, Item, Outcome, Session, Tally};

/// Two wins and one loss take the match.
#[test]
fn test_two_wins_one_loss_wins_match() {
    let rng = ScriptedRng::new(&[5, 3, 2, 5, 6, 1], &[]);
    let mut session = Session::new(GameConfig::classic(), rng).unwrap();

    let (tally, text) = run_session(&mut session, "");

    assert_eq!(tally, Tally { wins: 2, losses: 1, draws: 0 });
    assert_eq!(tally.verdict(), Outcome::Win);
    assert!(text.contains("2 wins, 1 losses, 0 draws"));
    assert!(text.ends_with("Congratulations! You won the match!!\n"));
}

/// Equal wins and losses draw the match, whatever the draw count.
#[test]
fn test_even_match_is_a_draw() {
    let rng = ScriptedRng::new(&[6, 1, 3, 3, 1, 6], &[]);
    let mut session = Session::new(GameConfig::classic(), rng).unwrap();

    let (tally, text) = run_session(&mut session, "");

    assert_eq!(tally, Tally { wins: 1, losses: 1, draws: 1 });
    assert!(text.contains("So close! It's a draw."));
    assert!(text.ends_with("So close! The match is a draw.\n"));
}

#[test]
fn test_losing_match() {
    let rng = ScriptedRng::new(&[1, 2, 3, 3, 2, 4], &[]);
    let mut session = Session::new(GameConfig::classic(), rng).unwrap();

    let (tally, text) = run_session(&mut session, "");

    assert_eq!(tally.verdict(), Outcome::Lose);
    assert!(text.ends_with("Too bad. You lost the match...\n"));
}

/// The player's item modifies their roll and is printed in the battle line.
#[test]
fn test_player_item_applied() {
    // CPU picks "no item" (index 2 of 3 options), player rolls 4, CPU rolls 5
    let rng = ScriptedRng::new(&[4, 5], &[2]);
    let config = GameConfig::new().with_rounds(1);
    let mut session = Session::new(config, rng).unwrap();

    let (tally, text) = run_session(&mut session, "1\n");

    assert_eq!(tally.verdict(), Outcome::Win);
    assert!(text.contains("You: 6 | roll: 4, item: 2up"));
    assert!(text.contains("CPU: 5 | roll: 5, item: none"));

    let report = &session.history()[0];
    assert_eq!(report.player.raw, 4);
    assert_eq!(report.player.value, 6);
    assert_eq!(report.outcome, Outcome::Win);
}

/// A capped item never pushes a six past the cap.
#[test]
fn test_two_up_capped_on_six() {
    let rng = ScriptedRng::new(&[6, 6], &[2]);
    let mut session = Session::new(GameConfig::new().with_rounds(1), rng).unwrap();

    run_session(&mut session, "1\n");

    let report = &session.history()[0];
    assert_eq!(report.player.value, 6);
    assert_eq!(report.outcome, Outcome::Draw);
}

/// Items used by either side are gone for the rest of the session.
#[test]
fn test_used_items_leave_pools() {
    // Round 1: CPU takes 1up, player takes 1up.
    // Round 2: CPU takes 2up (now index 0), player takes 2up (now index 0).
    // Round 3: both pools empty; CPU can only pick "no item".
    let rng = ScriptedRng::new(&[3, 3, 3, 3, 3, 3], &[0, 0, 0]);
    let mut session = Session::new(GameConfig::new(), rng).unwrap();

    let mut input = "0\n".as_bytes();
    let mut out = Vec::new();

    session.play_round(&mut input, &mut out).unwrap();
    assert_eq!(session.player_items().len(), 1);
    assert_eq!(session.cpu_items().len(), 1);
    assert!(session.player_items().iter().all(|i| i.name != "1up"));
    assert!(session.cpu_items().iter().all(|i| i.name != "1up"));

    let mut input = "0\n".as_bytes();
    session.play_round(&mut input, &mut out).unwrap();
    assert!(session.player_items().is_empty());
    assert!(session.cpu_items().is_empty());

    // No prompt is shown and no line is read once the pool is empty
    let mut input = "0\n".as_bytes();
    session.play_round(&mut input, &mut out).unwrap();
    assert_eq!(input, b"0\n");

    let names: Vec<_> = session
        .history()
        .iter()
        .map(|r| (r.player.item.clone(), r.cpu.item.clone()))
        .collect();
    assert_eq!(
        names,
        vec![
            (Some("1up".to_string()), Some("1up".to_string())),
            (Some("2up".to_string()), Some("2up".to_string())),
            (None, None),
        ]
    );

    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("You have no items available."));
    assert!(text.contains("The CPU has no items available."));
    assert!(session.is_finished());
}

/// Garbage input means no item, not an error.
#[test]
fn test_invalid_player_input_uses_no_item() {
    for bad in ["abc\n", "5\n", "-1\n", "\n", ""] {
        let rng = ScriptedRng::new(&[4, 4], &[2]);
        let mut session = Session::new(GameConfig::new().with_rounds(1), rng).unwrap();

        let (tally, text) = run_session(&mut session, bad);

        assert_eq!(tally.draws, 1, "input {:?}", bad);
        assert!(text.contains("You: 4 | roll: 4, item: none"), "input {:?}", bad);
        assert_eq!(session.player_items().len(), 2, "input {:?}", bad);
    }
}

/// The CPU's item is applied to its own roll.
#[test]
fn test_cpu_item_applied() {
    // CPU picks 1up, player enters nothing
    let rng = ScriptedRng::new(&[5, 5], &[0]);
    let mut session = Session::new(GameConfig::new().with_rounds(1), rng).unwrap();

    let (tally, text) = run_session(&mut session, "\n");

    assert_eq!(tally.losses, 1);
    assert!(text.contains("CPU: 6 | roll: 5, item: 1up"));
    assert_eq!(session.cpu_items().len(), 1);
}

/// Custom item sets and dice flow through the session.
#[test]
fn test_custom_items_and_die() {
    let big = Item::new(
        "big",
        "Adds 10.",
        dice_duel::ItemEffect::Bonus { amount: 10, cap: None },
    );
    let config = GameConfig::new()
        .with_rounds(1)
        .with_sides(20)
        .with_items(vec![big]);

    let rng = ScriptedRng::new(&[15, 20], &[1]);
    let mut session = Session::new(config, rng).unwrap();

    let (tally, text) = run_session(&mut session, "0\n");

    assert_eq!(tally.wins, 1);
    assert!(text.contains("each roll a d20"));
    assert!(text.contains("You: 25 | roll: 15, item: big"));
}

/// Rolls are drawn player first, round by round.
#[test]
fn test_roll_order() {
    let rng = ScriptedRng::new(&[1, 2, 3, 4, 5, 6], &[2, 2, 2]);
    let mut session = Session::new(GameConfig::new(), rng).unwrap();

    run_session(&mut session, "\n\n\n");

    assert_eq!(session.rounds_played(), 3);
    let raws: Vec<_> = session
        .history()
        .iter()
        .flat_map(|r| [r.player.raw, r.cpu.raw])
        .collect();
    assert_eq!(raws, vec![1, 2, 3, 4, 5, 6]);
}

use showmatch_terminal::prediction::{
    PredictionBoard, SubmitBlocker, SubmitOutcome, TeamSlot, parse_score_input,
};

fn board() -> PredictionBoard {
    PredictionBoard::new("500Bros", "Theanh96")
}

#[test]
fn winner_pick_forces_tied_loser_below() {
    let mut b = board();
    b.set_score(TeamSlot::Home, 5);
    b.set_score(TeamSlot::Away, 5);
    b.set_winner(TeamSlot::Home);

    assert_eq!(b.scores(), (5, 4));
    assert_eq!(b.winner(), Some(TeamSlot::Home));
}

#[test]
fn winner_pick_at_zero_keeps_both_at_zero_and_blocks_submit() {
    let mut b = board();
    b.set_winner(TeamSlot::Home);

    assert_eq!(b.scores(), (0, 0));
    assert_eq!(
        b.submit(),
        SubmitOutcome::Rejected(SubmitBlocker::ScorelessTeam)
    );
    assert!(!b.is_submitted());
    assert_eq!(b.scores(), (0, 0));
    assert_eq!(b.winner(), Some(TeamSlot::Home));
}

#[test]
fn valid_prediction_submits_and_locks() {
    let mut b = board();
    b.set_score(TeamSlot::Home, 10);
    b.set_score(TeamSlot::Away, 3);
    b.set_winner(TeamSlot::Home);

    let outcome = b.submit();
    assert_eq!(outcome, SubmitOutcome::Accepted);
    assert!(outcome.accepted());
    assert!(b.is_submitted());

    // Locked: mutations are ignored, re-submit is an accepted no-op.
    assert!(!b.set_score(TeamSlot::Home, 99));
    assert!(!b.set_winner(TeamSlot::Away));
    assert_eq!(b.scores(), (10, 3));
    assert_eq!(b.winner(), Some(TeamSlot::Home));

    let again = b.submit();
    assert_eq!(again, SubmitOutcome::AlreadySubmitted);
    assert!(again.accepted());
}

#[test]
fn raising_loser_score_is_pushed_back_below_winner() {
    let mut b = board();
    b.set_winner(TeamSlot::Away);
    b.set_score(TeamSlot::Away, 2);
    b.set_score(TeamSlot::Home, 2);

    assert_eq!(b.scores(), (1, 2));
}

#[test]
fn lowering_winner_score_adjusts_opponent_not_winner() {
    let mut b = board();
    b.set_score(TeamSlot::Home, 5);
    b.set_score(TeamSlot::Away, 4);
    b.set_winner(TeamSlot::Home);

    b.set_score(TeamSlot::Home, 3);
    assert_eq!(b.scores(), (3, 2));
}

#[test]
fn winner_at_zero_pulls_opponent_down_to_zero() {
    let mut b = board();
    b.set_score(TeamSlot::Away, 4);
    b.set_winner(TeamSlot::Home);

    assert_eq!(b.scores(), (0, 0));
    assert_eq!(b.submit_blocker(), Some(SubmitBlocker::ScorelessTeam));
}

#[test]
fn submit_without_winner_reports_no_winner_first() {
    let mut b = board();
    assert_eq!(b.submit(), SubmitOutcome::Rejected(SubmitBlocker::NoWinner));

    b.set_score(TeamSlot::Home, 3);
    b.set_score(TeamSlot::Away, 1);
    assert_eq!(b.submit(), SubmitOutcome::Rejected(SubmitBlocker::NoWinner));
    assert!(!b.is_submitted());
}

#[test]
fn winner_stays_strictly_ahead_through_an_editing_session() {
    let mut b = board();
    b.set_winner(TeamSlot::Home);
    for score in [3, 7, 1, 4] {
        b.set_score(TeamSlot::Home, score);
        assert!(b.score(TeamSlot::Home) > b.score(TeamSlot::Away) || score == 0);
    }
    for score in [2, 9, 3] {
        b.set_score(TeamSlot::Away, score);
        assert!(b.score(TeamSlot::Home) > b.score(TeamSlot::Away));
    }
}

#[test]
fn reset_returns_to_editing_with_same_teams() {
    let mut b = board();
    b.set_score(TeamSlot::Home, 2);
    b.set_score(TeamSlot::Away, 1);
    b.set_winner(TeamSlot::Home);
    assert_eq!(b.submit(), SubmitOutcome::Accepted);

    b.reset();
    assert!(!b.is_submitted());
    assert_eq!(b.scores(), (0, 0));
    assert_eq!(b.winner(), None);
    assert_eq!(b.team_name(TeamSlot::Home), "500Bros");
    assert_eq!(b.team_name(TeamSlot::Away), "Theanh96");
    assert!(b.set_score(TeamSlot::Home, 1));
}

#[test]
fn submitted_snapshot_matches_locked_state() {
    let mut b = board();
    assert!(b.submitted_snapshot().is_none());

    b.set_score(TeamSlot::Home, 2);
    b.set_score(TeamSlot::Away, 1);
    b.set_winner(TeamSlot::Home);
    b.submit();

    let snap = b.submitted_snapshot().expect("submitted");
    assert_eq!(snap.home, "500Bros");
    assert_eq!(snap.away, "Theanh96");
    assert_eq!(snap.score_home, 2);
    assert_eq!(snap.score_away, 1);
    assert_eq!(snap.winner, "500Bros");
}

#[test]
fn score_input_parsing_normalizes_instead_of_rejecting() {
    assert_eq!(parse_score_input("7"), 7);
    assert_eq!(parse_score_input(" 12 "), 12);
    assert_eq!(parse_score_input("003"), 3);
    assert_eq!(parse_score_input(""), 0);
    assert_eq!(parse_score_input("   "), 0);
    assert_eq!(parse_score_input("abc"), 0);
    assert_eq!(parse_score_input("1a"), 0);
    assert_eq!(parse_score_input("-3"), 0);
    assert_eq!(parse_score_input("999999999999"), u16::MAX);
}

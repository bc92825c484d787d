use showmatch_terminal::prediction::TeamSlot;
use showmatch_terminal::state::{AppState, Focus, PredictionRow, RegistrationRow};

#[test]
fn focus_cycles_through_all_sections_and_wraps() {
    let mut state = AppState::new();
    assert_eq!(state.focus, Focus::Voting);

    state.cycle_focus_next();
    assert_eq!(state.focus, Focus::Prediction);
    state.cycle_focus_next();
    assert_eq!(state.focus, Focus::Registration);
    state.cycle_focus_next();
    assert_eq!(state.focus, Focus::Voting);

    state.cycle_focus_prev();
    assert_eq!(state.focus, Focus::Registration);
}

#[test]
fn vote_selection_wraps_and_casting_logs() {
    let mut state = AppState::new();
    let total = state.votes.len();
    for _ in 0..total {
        state.select_vote_next();
    }
    assert_eq!(state.vote_selected, 0);

    state.select_vote_prev();
    assert_eq!(state.vote_selected, total - 1);

    state.cast_vote();
    assert_eq!(state.votes.total_votes(), 1);
    assert!(state.logs.back().is_some_and(|l| l.contains("Vote:")));
}

#[test]
fn vote_entry_commit_appends_and_selects_new_option() {
    let mut state = AppState::new();
    let before = state.votes.len();

    state.begin_vote_entry();
    for ch in "Backflip".chars() {
        state.vote_entry_push(ch);
    }
    state.commit_vote_entry();

    assert_eq!(state.votes.len(), before + 1);
    assert_eq!(state.vote_selected, before);
    assert!(state.vote_entry.is_none());
}

#[test]
fn empty_vote_entry_is_ignored_with_a_warning() {
    let mut state = AppState::new();
    let before = state.votes.len();

    state.begin_vote_entry();
    state.commit_vote_entry();

    assert_eq!(state.votes.len(), before);
    assert!(state.logs.back().is_some_and(|l| l.starts_with("[WARN]")));
}

#[test]
fn score_keystrokes_flow_through_the_raw_parser() {
    let mut state = AppState::new();
    state.focus = Focus::Prediction;
    assert_eq!(state.prediction_row, PredictionRow::HomeScore);

    state.score_entry_backspace();
    state.score_entry_push('5');
    assert_eq!(state.board.score(TeamSlot::Home), 5);

    // "5-" no longer parses, so the stored score collapses to 0.
    state.score_entry_push('-');
    assert_eq!(state.board.score(TeamSlot::Home), 0);

    state.score_entry_backspace();
    assert_eq!(state.board.score(TeamSlot::Home), 5);
}

#[test]
fn typing_past_the_winner_snaps_the_entry_back() {
    let mut state = AppState::new();
    state.focus = Focus::Prediction;

    state.prediction_row_next();
    assert_eq!(state.prediction_row, PredictionRow::AwayScore);
    state.score_entry_backspace();
    state.score_entry_push('2');
    assert_eq!(state.board.score(TeamSlot::Away), 2);

    state.pick_winner(TeamSlot::Away);

    // Back around to the home score row.
    state.prediction_row_next();
    state.prediction_row_next();
    state.prediction_row_next();
    state.prediction_row_next();
    assert_eq!(state.prediction_row, PredictionRow::HomeScore);

    state.score_entry_backspace();
    state.score_entry_push('2');

    assert_eq!(state.board.scores(), (1, 2));
    assert_eq!(state.score_entry, "1");
}

#[test]
fn accepted_submit_is_echoed_as_json() {
    let mut state = AppState::new();
    state.focus = Focus::Prediction;

    state.score_entry_backspace();
    state.score_entry_push('3');
    state.prediction_row_next();
    state.score_entry_backspace();
    state.score_entry_push('1');
    state.pick_winner(TeamSlot::Home);
    state.submit_prediction();

    assert!(state.board.is_submitted());
    let last = state.logs.back().expect("log line");
    assert!(last.contains("Prediction submitted:"));
    assert!(last.contains("\"score_home\":3"));
    assert!(last.contains("\"score_away\":1"));
}

#[test]
fn blocked_submit_warns_and_changes_nothing() {
    let mut state = AppState::new();
    state.submit_prediction();

    assert!(!state.board.is_submitted());
    let last = state.logs.back().expect("log line");
    assert!(last.contains("[WARN] Submit blocked"));
    assert!(last.contains("pick a winner"));
}

#[test]
fn locked_board_ignores_further_edits() {
    let mut state = AppState::new();
    state.focus = Focus::Prediction;

    state.score_entry_push('4');
    state.prediction_row_next();
    state.score_entry_push('2');
    state.pick_winner(TeamSlot::Home);
    state.submit_prediction();
    let scores = state.board.scores();

    state.pick_winner(TeamSlot::Away);
    state.prediction_row_prev();
    state.score_entry_push('9');

    assert_eq!(state.board.scores(), scores);
    assert_eq!(state.board.winner(), Some(TeamSlot::Home));
}

#[test]
fn registration_requires_name_rank_and_role() {
    let mut state = AppState::new();
    state.focus = Focus::Registration;

    state.register_player();
    assert!(!state.registration.is_registered());
    assert!(state.logs.back().is_some_and(|l| l.starts_with("[WARN]")));

    state.begin_reg_editing();
    for ch in "danial".chars() {
        state.reg_text_push(ch);
    }
    state.end_reg_editing();
    state.registration.cycle_rank_next();
    state.registration.cycle_role_next();

    state.register_player();
    assert!(state.registration.is_registered());

    state.register_player();
    assert!(
        state
            .logs
            .back()
            .is_some_and(|l| l.contains("Already registered"))
    );
}

#[test]
fn reset_session_rebuilds_every_widget() {
    let mut state = AppState::new();
    state.cast_vote();
    state.focus = Focus::Prediction;
    state.score_entry_push('4');
    state.pick_winner(TeamSlot::Home);

    state.reset_session();

    assert_eq!(state.votes.total_votes(), 0);
    assert_eq!(state.board.scores(), (0, 0));
    assert_eq!(state.board.winner(), None);
    assert!(!state.board.is_submitted());
    assert_eq!(state.focus, Focus::Voting);
    assert_eq!(state.registration_row, RegistrationRow::Name);
    assert!(state.logs.back().is_some_and(|l| l.contains("Session reset")));
}

#[test]
fn log_ring_is_bounded() {
    let mut state = AppState::new();
    for idx in 0..300 {
        state.push_log(format!("[INFO] line {idx}"));
    }
    assert_eq!(state.logs.len(), 200);
    assert!(state.logs.front().is_some_and(|l| l.contains("line 100")));
}

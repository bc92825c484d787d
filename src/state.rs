use std::collections::VecDeque;
use std::env;

use crate::match_info::MatchInfo;
use crate::prediction::{
    PredictionBoard, SubmitBlocker, SubmitOutcome, TeamSlot, parse_score_input,
};
use crate::registration::RegistrationForm;
use crate::vote::VoteBoard;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Voting,
    Prediction,
    Registration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredictionRow {
    HomeScore,
    AwayScore,
    PickHome,
    PickAway,
    Submit,
}

impl PredictionRow {
    pub fn score_slot(self) -> Option<TeamSlot> {
        match self {
            PredictionRow::HomeScore => Some(TeamSlot::Home),
            PredictionRow::AwayScore => Some(TeamSlot::Away),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationRow {
    Name,
    Rank,
    Role,
    Discord,
    Register,
}

pub const DEFAULT_VOTE_OPTIONS: &[&str] = &["Sing", "Dance", "Act"];

#[derive(Debug, Clone)]
pub struct AppState {
    pub match_info: MatchInfo,
    pub votes: VoteBoard,
    pub board: PredictionBoard,
    pub registration: RegistrationForm,
    pub focus: Focus,
    pub vote_selected: usize,
    // Some while the user is typing a new vote option.
    pub vote_entry: Option<String>,
    pub prediction_row: PredictionRow,
    // Raw text behind the focused score row; re-parsed on every keystroke so
    // malformed input degrades to 0 instead of erroring.
    pub score_entry: String,
    pub registration_row: RegistrationRow,
    pub reg_editing: bool,
    pub logs: VecDeque<String>,
    pub help_overlay: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        let match_info = MatchInfo::from_env();
        let board = PredictionBoard::new(match_info.home.clone(), match_info.away.clone());
        let labels = vote_labels_env_or_default("SHOWMATCH_VOTE_OPTIONS", DEFAULT_VOTE_OPTIONS);
        let mut state = Self {
            votes: VoteBoard::new(&labels),
            board,
            registration: RegistrationForm::new(),
            focus: Focus::Voting,
            vote_selected: 0,
            vote_entry: None,
            prediction_row: PredictionRow::HomeScore,
            score_entry: "0".to_string(),
            registration_row: RegistrationRow::Name,
            reg_editing: false,
            logs: VecDeque::with_capacity(200),
            help_overlay: false,
            match_info,
        };
        state.push_log(format!(
            "[INFO] Session started: {}",
            state.match_info.title()
        ));
        state
    }

    // Everything is per-session; a reset rebuilds the lot from the same env.
    pub fn reset_session(&mut self) {
        *self = Self::new();
        self.push_log("[INFO] Session reset");
    }

    pub fn push_log(&mut self, msg: impl Into<String>) {
        const MAX_LOGS: usize = 200;
        self.logs.push_back(msg.into());
        while self.logs.len() > MAX_LOGS {
            self.logs.pop_front();
        }
    }

    pub fn cycle_focus_next(&mut self) {
        self.focus = match self.focus {
            Focus::Voting => Focus::Prediction,
            Focus::Prediction => Focus::Registration,
            Focus::Registration => Focus::Voting,
        };
        self.on_focus_changed();
    }

    pub fn cycle_focus_prev(&mut self) {
        self.focus = match self.focus {
            Focus::Voting => Focus::Registration,
            Focus::Prediction => Focus::Voting,
            Focus::Registration => Focus::Prediction,
        };
        self.on_focus_changed();
    }

    fn on_focus_changed(&mut self) {
        self.vote_entry = None;
        self.reg_editing = false;
        self.sync_score_entry();
    }

    // ---- Voting ----

    pub fn select_vote_next(&mut self) {
        let total = self.votes.len();
        if total == 0 {
            self.vote_selected = 0;
            return;
        }
        self.vote_selected = (self.vote_selected + 1) % total;
    }

    pub fn select_vote_prev(&mut self) {
        let total = self.votes.len();
        if total == 0 {
            self.vote_selected = 0;
            return;
        }
        if self.vote_selected == 0 {
            self.vote_selected = total - 1;
        } else {
            self.vote_selected -= 1;
        }
    }

    pub fn cast_vote(&mut self) {
        match self.votes.vote(self.vote_selected) {
            Some(option) => {
                let line = format!("[INFO] Vote: {} ({})", option.label, option.votes);
                self.push_log(line);
            }
            None => self.push_log("[WARN] No vote option selected"),
        }
    }

    pub fn begin_vote_entry(&mut self) {
        self.vote_entry = Some(String::new());
    }

    pub fn vote_entry_push(&mut self, ch: char) {
        if let Some(entry) = self.vote_entry.as_mut() {
            entry.push(ch);
        }
    }

    pub fn vote_entry_backspace(&mut self) {
        if let Some(entry) = self.vote_entry.as_mut() {
            entry.pop();
        }
    }

    pub fn cancel_vote_entry(&mut self) {
        self.vote_entry = None;
    }

    pub fn commit_vote_entry(&mut self) {
        let Some(entry) = self.vote_entry.take() else {
            return;
        };
        match self.votes.add_option(&entry) {
            Some(option) => {
                let line = format!("[INFO] Vote option added: {}", option.label);
                self.vote_selected = self.votes.len() - 1;
                self.push_log(line);
            }
            None => self.push_log("[WARN] Ignored empty vote option"),
        }
    }

    // ---- Prediction ----

    pub fn prediction_row_next(&mut self) {
        self.prediction_row = match self.prediction_row {
            PredictionRow::HomeScore => PredictionRow::AwayScore,
            PredictionRow::AwayScore => PredictionRow::PickHome,
            PredictionRow::PickHome => PredictionRow::PickAway,
            PredictionRow::PickAway => PredictionRow::Submit,
            PredictionRow::Submit => PredictionRow::HomeScore,
        };
        self.sync_score_entry();
    }

    pub fn prediction_row_prev(&mut self) {
        self.prediction_row = match self.prediction_row {
            PredictionRow::HomeScore => PredictionRow::Submit,
            PredictionRow::AwayScore => PredictionRow::HomeScore,
            PredictionRow::PickHome => PredictionRow::AwayScore,
            PredictionRow::PickAway => PredictionRow::PickHome,
            PredictionRow::Submit => PredictionRow::PickAway,
        };
        self.sync_score_entry();
    }

    pub fn score_entry_push(&mut self, ch: char) {
        let Some(slot) = self.prediction_row.score_slot() else {
            return;
        };
        self.score_entry.push(ch);
        self.apply_score_entry(slot);
    }

    pub fn score_entry_backspace(&mut self) {
        let Some(slot) = self.prediction_row.score_slot() else {
            return;
        };
        self.score_entry.pop();
        self.apply_score_entry(slot);
    }

    fn apply_score_entry(&mut self, slot: TeamSlot) {
        let score = parse_score_input(&self.score_entry);
        let other = slot.other();
        let other_before = self.board.score(other);
        if !self.board.set_score(slot, score) {
            self.push_log("[WARN] Prediction locked, score ignored");
            self.sync_score_entry();
            return;
        }
        let other_after = self.board.score(other);
        if other_after != other_before {
            let line = format!(
                "[INFO] Adjusted {} to {} to keep {} ahead",
                self.board.team_name(other),
                other_after,
                self.board.winner_name().unwrap_or("the winner"),
            );
            self.push_log(line);
        }
        // The margin pass can rewrite the side being typed when it is the
        // non-winner; snap the entry text back to the stored value then.
        if self.board.score(slot) != score {
            self.sync_score_entry();
        }
    }

    fn sync_score_entry(&mut self) {
        if let Some(slot) = self.prediction_row.score_slot() {
            self.score_entry = self.board.score(slot).to_string();
        }
    }

    pub fn pick_winner(&mut self, slot: TeamSlot) {
        let other = slot.other();
        let other_before = self.board.score(other);
        if !self.board.set_winner(slot) {
            self.push_log("[WARN] Prediction locked, pick ignored");
            return;
        }
        let line = format!("[INFO] Winner pick: {}", self.board.team_name(slot));
        self.push_log(line);
        let other_after = self.board.score(other);
        if other_after != other_before {
            let line = format!(
                "[INFO] Adjusted {} to {} to keep {} ahead",
                self.board.team_name(other),
                other_after,
                self.board.team_name(slot),
            );
            self.push_log(line);
        }
        self.sync_score_entry();
    }

    pub fn submit_prediction(&mut self) {
        match self.board.submit() {
            SubmitOutcome::Accepted => {
                let line = match self
                    .board
                    .submitted_snapshot()
                    .and_then(|snap| serde_json::to_string(&snap).ok())
                {
                    Some(json) => format!("[INFO] Prediction submitted: {json}"),
                    None => "[INFO] Prediction submitted".to_string(),
                };
                self.push_log(line);
            }
            SubmitOutcome::AlreadySubmitted => {
                self.push_log("[INFO] Prediction already submitted");
            }
            SubmitOutcome::Rejected(blocker) => {
                let line = format!("[WARN] Submit blocked: {}", blocker_label(blocker));
                self.push_log(line);
            }
        }
    }

    // ---- Registration ----

    pub fn registration_row_next(&mut self) {
        self.registration_row = match self.registration_row {
            RegistrationRow::Name => RegistrationRow::Rank,
            RegistrationRow::Rank => RegistrationRow::Role,
            RegistrationRow::Role => RegistrationRow::Discord,
            RegistrationRow::Discord => RegistrationRow::Register,
            RegistrationRow::Register => RegistrationRow::Name,
        };
        self.reg_editing = false;
    }

    pub fn registration_row_prev(&mut self) {
        self.registration_row = match self.registration_row {
            RegistrationRow::Name => RegistrationRow::Register,
            RegistrationRow::Rank => RegistrationRow::Name,
            RegistrationRow::Role => RegistrationRow::Rank,
            RegistrationRow::Discord => RegistrationRow::Role,
            RegistrationRow::Register => RegistrationRow::Discord,
        };
        self.reg_editing = false;
    }

    pub fn registration_text_row(&self) -> bool {
        matches!(
            self.registration_row,
            RegistrationRow::Name | RegistrationRow::Discord
        )
    }

    pub fn begin_reg_editing(&mut self) {
        if self.registration.is_registered() {
            self.push_log("[WARN] Registration locked");
            return;
        }
        if self.registration_text_row() {
            self.reg_editing = true;
        }
    }

    pub fn end_reg_editing(&mut self) {
        self.reg_editing = false;
    }

    pub fn reg_text_push(&mut self, ch: char) {
        match self.registration_row {
            RegistrationRow::Name => self.registration.name.push(ch),
            RegistrationRow::Discord => self.registration.discord.push(ch),
            _ => {}
        }
    }

    pub fn reg_text_backspace(&mut self) {
        match self.registration_row {
            RegistrationRow::Name => {
                self.registration.name.pop();
            }
            RegistrationRow::Discord => {
                self.registration.discord.pop();
            }
            _ => {}
        }
    }

    pub fn register_player(&mut self) {
        if self.registration.is_registered() {
            self.push_log("[INFO] Already registered");
            return;
        }
        if self.registration.register() {
            let rank = self.registration.rank.map(|r| r.label()).unwrap_or("-");
            let role = self.registration.role.map(|r| r.label()).unwrap_or("-");
            let line = format!(
                "[INFO] Registered: {} ({rank}, {role})",
                self.registration.name.trim()
            );
            self.push_log(line);
        } else {
            self.push_log("[WARN] Registration incomplete: name, rank, and role required");
        }
    }
}

pub fn blocker_label(blocker: SubmitBlocker) -> &'static str {
    match blocker {
        SubmitBlocker::NoWinner => "pick a winner first",
        SubmitBlocker::ScorelessTeam => "both scores must be above zero",
        SubmitBlocker::WinnerNotAhead => "winner must be strictly ahead",
    }
}

fn vote_labels_env_or_default(key: &str, default: &[&str]) -> Vec<String> {
    let parsed: Vec<String> = env::var(key)
        .map(|raw| {
            raw.split(',')
                .map(str::trim)
                .filter(|label| !label.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();
    if parsed.is_empty() {
        default.iter().map(|label| label.to_string()).collect()
    } else {
        parsed
    }
}

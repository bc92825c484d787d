use std::env;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchStatus {
    Upcoming,
    Live,
    Completed,
}

impl MatchStatus {
    pub fn label(self) -> &'static str {
        match self {
            MatchStatus::Upcoming => "UPCOMING",
            MatchStatus::Live => "LIVE",
            MatchStatus::Completed => "COMPLETED",
        }
    }
}

// Fixed display data for the showmatch. Set once per session; the widgets
// never write back into it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchInfo {
    pub home: String,
    pub home_subtitle: String,
    pub away: String,
    pub away_subtitle: String,
    pub map: String,
    pub mode: String,
    pub best_of: u8,
    pub side_format: String,
    pub kickoff: String,
    pub status: MatchStatus,
}

impl MatchInfo {
    pub fn from_env() -> Self {
        Self {
            home: env_or("SHOWMATCH_HOME", "500Bros"),
            home_subtitle: "Professional Team".to_string(),
            away: env_or("SHOWMATCH_AWAY", "Theanh96"),
            away_subtitle: "Content Creator".to_string(),
            map: env_or("SHOWMATCH_MAP", "Ascent"),
            mode: "Standard".to_string(),
            best_of: parse_best_of_env("SHOWMATCH_BEST_OF", 3),
            side_format: "5v5".to_string(),
            kickoff: env_or("SHOWMATCH_KICKOFF", "2024-03-15T20:00"),
            status: MatchStatus::Upcoming,
        }
    }

    pub fn title(&self) -> String {
        format!("{} vs {}", self.home, self.away)
    }

    pub fn kickoff_display(&self) -> String {
        format_kickoff(&self.kickoff)
    }
}

fn env_or(key: &str, default: &str) -> String {
    match env::var(key) {
        Ok(value) if !value.trim().is_empty() => value.trim().to_string(),
        _ => default.to_string(),
    }
}

fn parse_best_of_env(key: &str, default: u8) -> u8 {
    env::var(key)
        .ok()
        .and_then(|value| value.trim().parse::<u8>().ok())
        .filter(|n| *n >= 1 && n % 2 == 1)
        .unwrap_or(default)
}

pub fn format_kickoff(raw: &str) -> String {
    let cleaned = raw.trim();
    if cleaned.is_empty() {
        return "TBD".to_string();
    }
    if let Some(dt) = parse_kickoff(cleaned) {
        return format!("{} UTC", dt.format("%b %d, %Y %H:%M"));
    }
    cleaned.replace('T', " ")
}

fn parse_kickoff(raw: &str) -> Option<NaiveDateTime> {
    const FORMATS: [&str; 4] = [
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%d %H:%M:%S",
    ];

    for fmt in FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(dt);
        }
    }
    None
}

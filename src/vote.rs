use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoteOption {
    pub id: String,
    pub label: String,
    pub votes: u32,
}

// Audience poll for what the streamer should do between maps. Options keep
// their insertion order; ids stay stable for the whole session.
#[derive(Debug, Clone)]
pub struct VoteBoard {
    options: Vec<VoteOption>,
    next_id: usize,
}

impl VoteBoard {
    pub fn new<S: AsRef<str>>(labels: &[S]) -> Self {
        let mut board = Self {
            options: Vec::with_capacity(labels.len()),
            next_id: 0,
        };
        for label in labels {
            board.add_option(label.as_ref());
        }
        board
    }

    pub fn options(&self) -> &[VoteOption] {
        &self.options
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    pub fn total_votes(&self) -> u32 {
        self.options.iter().map(|option| option.votes).sum()
    }

    // None when the index is stale (e.g. a cursor past the end).
    pub fn vote(&mut self, index: usize) -> Option<&VoteOption> {
        let option = self.options.get_mut(index)?;
        option.votes = option.votes.saturating_add(1);
        Some(&self.options[index])
    }

    // Blank labels are dropped rather than rejected with an error.
    pub fn add_option(&mut self, label: &str) -> Option<&VoteOption> {
        let label = label.trim();
        if label.is_empty() {
            return None;
        }
        self.next_id += 1;
        self.options.push(VoteOption {
            id: format!("opt-{}", self.next_id),
            label: label.to_string(),
            votes: 0,
        });
        self.options.last()
    }
}

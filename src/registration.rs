use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rank {
    Iron,
    Bronze,
    Silver,
    Gold,
    Platinum,
    Diamond,
    Ascendant,
    Immortal,
    Radiant,
}

impl Rank {
    pub fn label(self) -> &'static str {
        match self {
            Rank::Iron => "Iron",
            Rank::Bronze => "Bronze",
            Rank::Silver => "Silver",
            Rank::Gold => "Gold",
            Rank::Platinum => "Platinum",
            Rank::Diamond => "Diamond",
            Rank::Ascendant => "Ascendant",
            Rank::Immortal => "Immortal",
            Rank::Radiant => "Radiant",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Rank::Iron => Rank::Bronze,
            Rank::Bronze => Rank::Silver,
            Rank::Silver => Rank::Gold,
            Rank::Gold => Rank::Platinum,
            Rank::Platinum => Rank::Diamond,
            Rank::Diamond => Rank::Ascendant,
            Rank::Ascendant => Rank::Immortal,
            Rank::Immortal => Rank::Radiant,
            Rank::Radiant => Rank::Iron,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Rank::Iron => Rank::Radiant,
            Rank::Bronze => Rank::Iron,
            Rank::Silver => Rank::Bronze,
            Rank::Gold => Rank::Silver,
            Rank::Platinum => Rank::Gold,
            Rank::Diamond => Rank::Platinum,
            Rank::Ascendant => Rank::Diamond,
            Rank::Immortal => Rank::Ascendant,
            Rank::Radiant => Rank::Immortal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Duelist,
    Initiator,
    Controller,
    Sentinel,
}

impl Role {
    pub fn label(self) -> &'static str {
        match self {
            Role::Duelist => "Duelist",
            Role::Initiator => "Initiator",
            Role::Controller => "Controller",
            Role::Sentinel => "Sentinel",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Role::Duelist => Role::Initiator,
            Role::Initiator => Role::Controller,
            Role::Controller => Role::Sentinel,
            Role::Sentinel => Role::Duelist,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Role::Duelist => Role::Sentinel,
            Role::Initiator => Role::Duelist,
            Role::Controller => Role::Initiator,
            Role::Sentinel => Role::Controller,
        }
    }
}

// Sign-up form for the community slot. Rank and role cycle through the fixed
// tiers; both start unset, like an empty <select>.
#[derive(Debug, Clone, Default)]
pub struct RegistrationForm {
    pub name: String,
    pub rank: Option<Rank>,
    pub role: Option<Role>,
    pub discord: String,
    registered: bool,
}

impl RegistrationForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_registered(&self) -> bool {
        self.registered
    }

    pub fn cycle_rank_next(&mut self) {
        if self.registered {
            return;
        }
        self.rank = Some(self.rank.map_or(Rank::Iron, Rank::next));
    }

    pub fn cycle_rank_prev(&mut self) {
        if self.registered {
            return;
        }
        self.rank = Some(self.rank.map_or(Rank::Radiant, Rank::prev));
    }

    pub fn cycle_role_next(&mut self) {
        if self.registered {
            return;
        }
        self.role = Some(self.role.map_or(Role::Duelist, Role::next));
    }

    pub fn cycle_role_prev(&mut self) {
        if self.registered {
            return;
        }
        self.role = Some(self.role.map_or(Role::Sentinel, Role::prev));
    }

    // Discord handle stays optional; name, rank, and role are required.
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty() && self.rank.is_some() && self.role.is_some()
    }

    // One-shot: a completed form locks on the first successful call.
    pub fn register(&mut self) -> bool {
        if self.registered || !self.is_complete() {
            return false;
        }
        self.registered = true;
        true
    }
}

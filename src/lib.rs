pub mod match_info;
pub mod prediction;
pub mod registration;
pub mod state;
pub mod vote;

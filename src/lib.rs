//! Cornhole Scorer - two-team cornhole scoring engine
//!
//! Core modules:
//! - `sim`: Scoring rules (throws, rounds, game state, demo player)
//! - `settings`: Rules configuration loaded from JSON
//! - `announce`: Scoreboard snapshots and round/game announcements

pub mod announce;
pub mod settings;
pub mod sim;

pub use announce::{Announcement, Scoreboard};
pub use settings::{Rules, Settings, SettingsError};
pub use sim::{GameScorer, GameState, RoundResult, Team, Throw};

/// Game configuration constants
pub mod consts {
    /// Bags each team throws per round
    pub const THROWS_PER_ROUND: usize = 4;
    /// Default score needed to win
    pub const WINNING_SCORE: u32 = 21;
    /// Default lead required at the winning score
    pub const WIN_BY: u32 = 2;
    /// Demo games stop here if nobody has won
    pub const MAX_DEMO_ROUNDS: usize = 200;
}

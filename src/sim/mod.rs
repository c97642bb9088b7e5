//! Scoring engine
//!
//! All game rules live here. This module must stay pure:
//! - No I/O or platform dependencies
//! - Derived state recomputed on every query
//! - Only `GameScorer` mutates the game record

pub mod autoplay;
pub mod scorer;
pub mod state;

pub use autoplay::{Autoplay, ThrowOdds};
pub use scorer::{GameScorer, GameState, RoundResult};
pub use state::{Game, Round, Team, Throw};

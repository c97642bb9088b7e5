//! Display-facing views of a game
//!
//! A `Scoreboard` snapshot for the HUD and the round/game announcements a
//! front end shows between rounds.

use serde::Serialize;

use crate::sim::{GameScorer, GameState, RoundResult, Team};

/// Per-team numbers shown on the scoreboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TeamLine {
    pub team: Team,
    pub game_score: u32,
    pub round_score: u32,
    pub bags_remaining: usize,
}

/// Everything a front end needs to redraw after a command
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Scoreboard {
    pub round_number: usize,
    pub red: TeamLine,
    pub blue: TeamLine,
    pub next_team: Option<Team>,
    pub state: GameState,
}

impl Scoreboard {
    pub fn capture(scorer: &GameScorer) -> Self {
        let line = |team: Team| TeamLine {
            team,
            game_score: scorer.score(team),
            round_score: scorer.round_score(scorer.current_round(), team),
            bags_remaining: scorer.bags_remaining(team),
        };

        Self {
            round_number: scorer.current_round_number(),
            red: line(Team::Red),
            blue: line(Team::Blue),
            next_team: scorer.next_team_to_throw(),
            state: scorer.game_state(),
        }
    }
}

/// A title and message pair, as shown in an alert
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Announcement {
    pub title: String,
    pub message: String,
}

/// Result of the current round, once it is complete
pub fn round_over(scorer: &GameScorer) -> Option<Announcement> {
    let round_number = scorer.current_round_number();
    match scorer.round_result(scorer.current_round()) {
        RoundResult::InProgress => None,
        RoundResult::Over {
            winner: Some(team),
            margin,
        } => Some(Announcement {
            title: format!("{} Team wins round {}!", team, round_number),
            message: format!(
                "{} {} added to their total score",
                margin,
                if margin == 1 { "point" } else { "points" }
            ),
        }),
        RoundResult::Over { winner: None, .. } => Some(Announcement {
            title: format!("Round {} is a tie!", round_number),
            message: "No point will be added to either team".to_string(),
        }),
    }
}

/// Final result, once a team has won
pub fn game_over(scorer: &GameScorer) -> Option<Announcement> {
    let winner = scorer.winner()?;
    Some(Announcement {
        title: format!("{} Team Wins!", winner),
        message: format!(
            "Final score:\n{} Team: {}, {} Team: {}",
            Team::Red,
            scorer.score(Team::Red),
            Team::Blue,
            scorer.score(Team::Blue)
        ),
    })
}

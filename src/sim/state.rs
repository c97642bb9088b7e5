//! Teams, throws, rounds and the game record
//!
//! These are plain data. Mutation is crate-private so that only the
//! scorer can append throws or rounds.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::THROWS_PER_ROUND;

/// One of the two sides of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Team {
    #[default]
    Red,
    Blue,
}

impl Team {
    pub const ALL: [Team; 2] = [Team::Red, Team::Blue];

    pub fn name(&self) -> &'static str {
        match self {
            Team::Red => "Red",
            Team::Blue => "Blue",
        }
    }

    /// The opposing team
    pub fn other(&self) -> Team {
        match self {
            Team::Red => Team::Blue,
            Team::Blue => Team::Red,
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Outcome of a single bag toss
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Throw {
    /// Landed off the board
    Miss,
    /// Stayed on the board
    OnBoard,
    /// Went through the hole
    InHole,
}

impl Throw {
    pub fn points(&self) -> u32 {
        match self {
            Throw::Miss => 0,
            Throw::OnBoard => 1,
            Throw::InHole => 3,
        }
    }
}

/// A single round: up to four throws per team
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Round {
    starting_team: Team,
    red_throws: Vec<Throw>,
    blue_throws: Vec<Throw>,
}

impl Round {
    pub fn new(starting_team: Team) -> Self {
        Self {
            starting_team,
            red_throws: Vec::with_capacity(THROWS_PER_ROUND),
            blue_throws: Vec::with_capacity(THROWS_PER_ROUND),
        }
    }

    /// Team that throws first in this round
    pub fn starting_team(&self) -> Team {
        self.starting_team
    }

    /// Throws recorded for `team`, in order
    pub fn throws(&self, team: Team) -> &[Throw] {
        match team {
            Team::Red => &self.red_throws,
            Team::Blue => &self.blue_throws,
        }
    }

    /// True when no throw has been recorded yet
    pub fn is_new(&self) -> bool {
        self.red_throws.is_empty() && self.blue_throws.is_empty()
    }

    /// Both teams have thrown all their bags
    pub fn is_complete(&self) -> bool {
        self.red_throws.len() == THROWS_PER_ROUND && self.blue_throws.len() == THROWS_PER_ROUND
    }

    /// Append a throw for `team`. Full sequences are left untouched.
    pub(crate) fn push_throw(&mut self, team: Team, throw: Throw) {
        let throws = match team {
            Team::Red => &mut self.red_throws,
            Team::Blue => &mut self.blue_throws,
        };
        if throws.len() < THROWS_PER_ROUND {
            throws.push(throw);
        }
    }

    /// Empty both sequences; the starting team is kept
    pub(crate) fn clear(&mut self) {
        self.red_throws.clear();
        self.blue_throws.clear();
    }
}

/// The full round history of one game. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Game {
    rounds: Vec<Round>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new(Team::default())
    }
}

impl Game {
    /// Start a game whose first round is opened by `starting_team`
    pub fn new(starting_team: Team) -> Self {
        Self {
            rounds: vec![Round::new(starting_team)],
        }
    }

    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }

    /// 1-based number of the round being played
    pub fn current_round_number(&self) -> usize {
        self.rounds.len()
    }

    pub fn current_round(&self) -> &Round {
        // `rounds` is created non-empty and only ever grows
        &self.rounds[self.rounds.len() - 1]
    }

    pub(crate) fn current_round_mut(&mut self) -> &mut Round {
        let last = self.rounds.len() - 1;
        &mut self.rounds[last]
    }

    pub(crate) fn push_round(&mut self, round: Round) {
        self.rounds.push(round);
    }
}

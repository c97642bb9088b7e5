//! Seeded demo player
//!
//! Throws bags at random with fixed odds. The same seed always produces the
//! same game.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::scorer::{GameScorer, GameState};
use super::state::Throw;

/// Probability of each throw outcome. Whatever is left over goes in the hole.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThrowOdds {
    pub miss: f32,
    pub on_board: f32,
}

impl Default for ThrowOdds {
    fn default() -> Self {
        Self {
            miss: 0.35,
            on_board: 0.45,
        }
    }
}

/// Random thrower driving a `GameScorer`
#[derive(Debug, Clone)]
pub struct Autoplay {
    rng: Pcg32,
    odds: ThrowOdds,
}

impl Autoplay {
    pub fn new(seed: u64, odds: ThrowOdds) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            odds,
        }
    }

    pub fn next_throw(&mut self) -> Throw {
        let roll: f32 = self.rng.random();
        if roll < self.odds.miss {
            Throw::Miss
        } else if roll < self.odds.miss + self.odds.on_board {
            Throw::OnBoard
        } else {
            Throw::InHole
        }
    }

    /// Throw until the current round is complete
    pub fn play_round(&mut self, scorer: &mut GameScorer) {
        while scorer.next_team_to_throw().is_some() {
            let throw = self.next_throw();
            scorer.add_throw(throw);
        }
    }

    /// Play rounds until the game ends or `max_rounds` rounds exist.
    ///
    /// `on_round` sees the scorer after every completed round, before the
    /// next one is started.
    pub fn play_game(
        &mut self,
        scorer: &mut GameScorer,
        max_rounds: usize,
        mut on_round: impl FnMut(&GameScorer),
    ) -> GameState {
        loop {
            self.play_round(scorer);
            on_round(&*scorer);
            let state = scorer.game_state();
            if state == GameState::GameOver || scorer.current_round_number() >= max_rounds {
                if state != GameState::GameOver {
                    log::warn!("Stopped after {} rounds without a winner", max_rounds);
                }
                return state;
            }
            scorer.start_new_round();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Team;

    #[test]
    fn test_play_round_completes_round() {
        let mut scorer = GameScorer::new();
        let mut player = Autoplay::new(7, ThrowOdds::default());
        player.play_round(&mut scorer);

        assert!(scorer.current_round().is_complete());
        assert_eq!(scorer.next_team_to_throw(), None);

        // Already complete: nothing changes
        let before = scorer.game().clone();
        player.play_round(&mut scorer);
        assert_eq!(scorer.game(), &before);
    }

    #[test]
    fn test_play_game_reaches_game_over() {
        let mut scorer = GameScorer::new();
        let mut player = Autoplay::new(12345, ThrowOdds::default());
        let state = player.play_game(&mut scorer, 500, |_| {});

        assert_eq!(state, GameState::GameOver);
        assert!(scorer.winner().is_some());
    }

    #[test]
    fn test_determinism() {
        let mut first = GameScorer::new();
        let mut second = GameScorer::new();
        Autoplay::new(99999, ThrowOdds::default()).play_game(&mut first, 500, |_| {});
        Autoplay::new(99999, ThrowOdds::default()).play_game(&mut second, 500, |_| {});

        assert_eq!(first.game(), second.game());
        assert_eq!(first.score(Team::Red), second.score(Team::Red));
    }

    #[test]
    fn test_max_rounds_stops_game() {
        // Nobody ever scores, so only the round cap can end this
        let odds = ThrowOdds {
            miss: 1.0,
            on_board: 0.0,
        };
        let mut scorer = GameScorer::new();
        let mut seen = Vec::new();
        let state = Autoplay::new(1, odds).play_game(&mut scorer, 3, |s| {
            assert!(s.current_round().is_complete());
            seen.push(s.current_round_number());
        });

        assert_eq!(seen, vec![1, 2, 3]);
        assert_eq!(state, GameState::RoundOver);
        assert_eq!(scorer.current_round_number(), 3);
        assert_eq!(scorer.winner(), None);
    }

    #[test]
    fn test_odds() {
        let mut player = Autoplay::new(
            3,
            ThrowOdds {
                miss: 0.0,
                on_board: 0.0,
            },
        );
        assert!((0..20).all(|_| player.next_throw() == Throw::InHole));
    }
}

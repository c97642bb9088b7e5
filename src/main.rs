//! Cornhole Scorer entry point
//!
//! Plays a seeded demo game and prints the announcements a front end would
//! show, followed by the final scoreboard as JSON.
//!
//! Usage: `cornhole-scorer [SETTINGS.json]`

use cornhole_scorer::announce::{self, Scoreboard};
use cornhole_scorer::consts::MAX_DEMO_ROUNDS;
use cornhole_scorer::sim::{Autoplay, GameScorer, ThrowOdds};
use cornhole_scorer::Settings;

fn main() {
    env_logger::init();
    log::info!("Cornhole Scorer starting...");

    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load_or_default(path),
        None => Settings::default(),
    };
    let seed = settings.seed();
    log::info!("Demo game with seed: {}", seed);

    let mut scorer = GameScorer::with_rules(settings.rules);
    let mut player = Autoplay::new(seed, ThrowOdds::default());
    player.play_game(&mut scorer, MAX_DEMO_ROUNDS, |scorer| {
        if let Some(round) = announce::round_over(scorer) {
            println!("{}\n  {}", round.title, round.message);
        }
    });

    if let Some(result) = announce::game_over(&scorer) {
        println!("\n{}\n{}", result.title, result.message);
    }

    match serde_json::to_string_pretty(&Scoreboard::capture(&scorer)) {
        Ok(json) => println!("\n{}", json),
        Err(e) => {
            log::error!("Failed to serialize scoreboard: {}", e);
            std::process::exit(1);
        }
    }
}

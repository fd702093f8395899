//! Main simulation runner driving real sessions.
//!
//! Each run is an independent [`Session`] seeded from the config, so a given
//! seed always reproduces the same report.

use super::config::SimConfig;
use super::report::{RunStats, SimReport};
use crate::character::types::Character;
use crate::combat::logic::Winner;
use crate::combat::types::default_roster;
use crate::items::market::Market;
use crate::session::{SequenceState, Session};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Name given to every simulated character.
pub const SIM_PLAYER_NAME: &str = "SimPlayer";

/// Run the full simulation and return a report.
pub fn run_simulation(config: &SimConfig) -> SimReport {
    let mut all_runs = Vec::with_capacity(config.num_runs as usize);

    for run_idx in 0..config.num_runs {
        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed.wrapping_add(run_idx as u64)),
            None => ChaCha8Rng::from_entropy(),
        };

        let run_stats = simulate_single_run(config, &mut rng);

        if config.verbosity >= 2 {
            println!(
                "Run {}/{} - Cleared {}, Score {}, Wins {}, Consumables {}, Lost to {}",
                run_idx + 1,
                config.num_runs,
                run_stats.cleared,
                run_stats.score,
                run_stats.wins,
                run_stats.consumables_used,
                run_stats.lost_to.as_deref().unwrap_or("-")
            );
        }
        all_runs.push(run_stats);
    }

    SimReport::from_runs(all_runs)
}

fn build_session(config: &SimConfig) -> Session {
    let character = Character::with_stats(
        SIM_PLAYER_NAME,
        config.base_attack,
        config.base_defense,
        config.life,
    );
    let mut session = Session::with_parts(character, Market::new(), default_roster());

    // One purchase per entry so repeated names buy repeated copies.
    for name in &config.loadout {
        let Some(index) = session.market.position(name) else {
            tracing::warn!("Loadout item '{}' is not in the catalog", name);
            continue;
        };
        let bought = session
            .toggle_selection(index)
            .and_then(|_| session.purchase());
        if let Err(err) = bought {
            tracing::warn!("Could not buy '{}': {}", name, err);
            session.reset_selection();
        }
    }
    session
}

/// Plays one full battle sequence.
fn simulate_single_run(config: &SimConfig, rng: &mut ChaCha8Rng) -> RunStats {
    let mut session = build_session(config);
    session.start_sequence(rng);

    let mut consumables_used = 0u32;
    let mut lost_to = None;

    while session.sequence_state() == SequenceState::InProgress {
        let opponent = session
            .current_opponent()
            .map(|o| o.name.clone())
            .unwrap_or_default();
        match session.fight() {
            Ok(outcome) => {
                consumables_used += outcome.consumed.len() as u32;
                if outcome.winner == Winner::Enemy {
                    lost_to = Some(opponent);
                }
            }
            Err(err) => {
                tracing::warn!("Simulated fight rejected: {}", err);
                lost_to = Some(opponent);
                break;
            }
        }
    }

    RunStats {
        cleared: lost_to.is_none(),
        score: session.character.score,
        currency: session.character.currency,
        wins: session.character.wins,
        consumables_used,
        category: session.final_category(),
        lost_to,
    }
}

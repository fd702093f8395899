//! Simulation configuration.

use crate::core::constants::{CREATION_STAT_BUDGET, DEFAULT_LIFE};

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of simulated battle sequences
    pub num_runs: u32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Catalog names bought before the sequence starts, in order.
    /// Repeating a name buys another copy.
    pub loadout: Vec<String>,

    pub base_attack: u32,
    pub base_defense: u32,
    pub life: u32,

    /// Log verbosity (0 = silent, 1 = summary, 2 = detailed)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 1000,
            seed: None,
            loadout: Vec::new(),
            base_attack: CREATION_STAT_BUDGET - DEFAULT_LIFE,
            base_defense: 0,
            life: DEFAULT_LIFE,
            verbosity: 1,
        }
    }
}

impl SimConfig {
    /// Cheap weapon plus two potions
    pub fn starter_kit() -> Self {
        Self {
            num_runs: 500,
            loadout: vec![
                "Espada Basica".to_string(),
                "Pocion de vida".to_string(),
                "Pocion de vida".to_string(),
            ],
            ..Default::default()
        }
    }

    /// Spends the whole starting purse on epic gear and a revive
    pub fn full_kit() -> Self {
        Self {
            num_runs: 500,
            loadout: vec![
                "Hacha".to_string(),
                "Escudo Antiguo".to_string(),
                "Revivir".to_string(),
            ],
            ..Default::default()
        }
    }

    /// Build with every creation point in defense
    pub fn tank(num_runs: u32) -> Self {
        Self {
            num_runs,
            base_attack: 0,
            base_defense: CREATION_STAT_BUDGET - DEFAULT_LIFE,
            loadout: vec!["Espada Basica".to_string()],
            ..Default::default()
        }
    }
}

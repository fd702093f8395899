use crate::core::constants::DEFAULT_BOSS_MULTIPLIER;
use rand::Rng;
use serde::{Deserialize, Serialize};

fn default_boss_multiplier() -> f64 {
    DEFAULT_BOSS_MULTIPLIER
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum OpponentKind {
    Standard,
    Boss {
        /// Scales outgoing damage only, never the attack level.
        #[serde(default = "default_boss_multiplier")]
        multiplier: f64,
        ability: String,
    },
}

/// A roster-defined combatant. Opponents carry no equipment and no defense.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Opponent {
    pub name: String,
    pub attack: u32,
    pub life: u32,
    pub kind: OpponentKind,
}

impl Opponent {
    pub fn new(name: impl Into<String>, attack: u32, life: u32) -> Self {
        Self {
            name: name.into(),
            attack,
            life,
            kind: OpponentKind::Standard,
        }
    }

    pub fn boss(
        name: impl Into<String>,
        attack: u32,
        life: u32,
        ability: impl Into<String>,
        multiplier: f64,
    ) -> Self {
        Self {
            name: name.into(),
            attack,
            life,
            kind: OpponentKind::Boss {
                multiplier,
                ability: ability.into(),
            },
        }
    }

    pub fn is_boss(&self) -> bool {
        matches!(self.kind, OpponentKind::Boss { .. })
    }

    /// 1.0 for standard opponents.
    pub fn damage_multiplier(&self) -> f64 {
        match self.kind {
            OpponentKind::Standard => 1.0,
            OpponentKind::Boss { multiplier, .. } => multiplier,
        }
    }

    pub fn ability(&self) -> Option<&str> {
        match &self.kind {
            OpponentKind::Standard => None,
            OpponentKind::Boss { ability, .. } => Some(ability),
        }
    }

    pub fn introduce(&self) -> String {
        match &self.kind {
            OpponentKind::Standard => format!(
                "I am {}, with {} attack and {} life",
                self.name, self.attack, self.life
            ),
            OpponentKind::Boss { ability, .. } => format!(
                "I am {}, the final boss. My special ability is {}",
                self.name, ability
            ),
        }
    }
}

/// The fixed roster built at startup.
pub fn default_roster() -> Vec<Opponent> {
    vec![
        Opponent::new("Goblin", 20, 50),
        Opponent::new("Lobo", 30, 60),
        Opponent::new("Orco", 40, 80),
        Opponent::new("Demonio", 40, 90),
        Opponent::boss("Dragón", 55, 100, "Llamarada", DEFAULT_BOSS_MULTIPLIER),
    ]
}

/// Samples `size` opponents from `roster` with replacement. Each entry is an
/// independent copy so its life pool is tracked separately.
pub fn draw_queue(roster: &[Opponent], size: usize, rng: &mut impl Rng) -> Vec<Opponent> {
    if roster.is_empty() {
        return Vec::new();
    }
    (0..size)
        .map(|_| roster[rng.gen_range(0..roster.len())].clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_standard_opponent_has_unit_multiplier() {
        let goblin = Opponent::new("Goblin", 20, 50);
        assert!(!goblin.is_boss());
        assert_eq!(goblin.damage_multiplier(), 1.0);
        assert!(goblin.ability().is_none());
    }

    #[test]
    fn test_boss_keeps_attack_level_unscaled() {
        let dragon = Opponent::boss("Dragón", 55, 100, "Llamarada", 2.0);
        assert!(dragon.is_boss());
        assert_eq!(dragon.attack, 55);
        assert_eq!(dragon.damage_multiplier(), 2.0);
        assert_eq!(dragon.ability(), Some("Llamarada"));
        assert!(dragon.introduce().contains("Llamarada"));
    }

    #[test]
    fn test_default_roster_has_one_boss() {
        let roster = default_roster();
        assert_eq!(roster.len(), 5);
        assert_eq!(roster.iter().filter(|o| o.is_boss()).count(), 1);
    }

    #[test]
    fn test_draw_queue_samples_from_roster() {
        let roster = default_roster();
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let queue = draw_queue(&roster, 3, &mut rng);
        assert_eq!(queue.len(), 3);
        for entry in &queue {
            assert!(roster.contains(entry));
        }
    }

    #[test]
    fn test_draw_queue_is_reproducible_with_seed() {
        let roster = default_roster();
        let a = draw_queue(&roster, 3, &mut ChaCha8Rng::seed_from_u64(9));
        let b = draw_queue(&roster, 3, &mut ChaCha8Rng::seed_from_u64(9));
        assert_eq!(a, b);
    }

    #[test]
    fn test_draw_queue_from_empty_roster() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert!(draw_queue(&[], 3, &mut rng).is_empty());
    }

    #[test]
    fn test_boss_multiplier_defaults_when_missing() {
        let json = r#"{"name":"Dragón","attack":55,"life":100,"kind":{"Boss":{"ability":"Llamarada"}}}"#;
        let boss: Opponent = serde_json::from_str(json).unwrap();
        assert_eq!(boss.damage_multiplier(), DEFAULT_BOSS_MULTIPLIER);
    }
}

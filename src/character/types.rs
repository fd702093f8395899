use crate::core::constants::{DEFAULT_LIFE, STARTING_FUNDS};
use crate::items::types::{Item, ItemCategory};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The player-controlled combatant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    #[serde(default)]
    pub name: String,
    pub score: u32,
    pub life: u32,
    pub life_max: u32,
    pub base_attack: u32,
    pub base_defense: u32,
    pub currency: u32,
    pub wins: u32,
    /// Owned item copies in purchase order.
    pub inventory: Vec<Item>,
}

/// Display snapshot of a character.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterProfile {
    pub name: String,
    pub score: u32,
    pub currency: u32,
    pub life: u32,
    pub life_max: u32,
    pub attack: u32,
    pub defense: u32,
    pub inventory: BTreeMap<ItemCategory, Vec<Item>>,
}

impl Character {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            score: 0,
            life: DEFAULT_LIFE,
            life_max: DEFAULT_LIFE,
            base_attack: 0,
            base_defense: 0,
            currency: STARTING_FUNDS,
            wins: 0,
            inventory: Vec::new(),
        }
    }

    /// Creates a character with chosen base stats. Life starts full.
    pub fn with_stats(name: impl Into<String>, attack: u32, defense: u32, life: u32) -> Self {
        Self {
            life,
            life_max: life,
            base_attack: attack,
            base_defense: defense,
            ..Self::new(name)
        }
    }

    /// Stores a copy of `item`; later changes to the source never reach it.
    pub fn add_item(&mut self, item: &Item) {
        self.inventory.push(item.clone());
    }

    pub fn add_score(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
    }

    /// Sets current life, clamped to [0, life_max].
    pub fn set_life(&mut self, life: i64) {
        self.life = life.clamp(0, self.life_max as i64) as u32;
    }

    pub fn take_damage(&mut self, amount: u32) {
        self.life = self.life.saturating_sub(amount);
    }

    /// Index of the first inventory item whose name contains `keyword`
    /// (case-insensitive).
    pub fn find_item(&self, keyword: &str) -> Option<usize> {
        self.inventory
            .iter()
            .position(|item| item.name_contains(keyword))
    }

    /// Removes the item at `index`, keeping the order of the rest.
    pub fn remove_item_at(&mut self, index: usize) -> Option<Item> {
        (index < self.inventory.len()).then(|| self.inventory.remove(index))
    }

    pub fn count_items(&self, keyword: &str) -> usize {
        self.inventory
            .iter()
            .filter(|item| item.name_contains(keyword))
            .count()
    }

    /// Restart: wipes progress and inventory, restores life and funds.
    pub fn reset(&mut self) {
        self.score = 0;
        self.wins = 0;
        self.currency = STARTING_FUNDS;
        self.life = self.life_max;
        self.inventory.clear();
    }

    pub fn profile(&self) -> CharacterProfile {
        CharacterProfile {
            name: self.name.clone(),
            score: self.score,
            currency: self.currency,
            life: self.life,
            life_max: self.life_max,
            attack: self.total_attack(),
            defense: self.total_defense(),
            inventory: self
                .inventory_by_category()
                .into_iter()
                .map(|(category, items)| (category, items.into_iter().cloned().collect()))
                .collect(),
        }
    }
}

impl Default for Character {
    fn default() -> Self {
        Self::new(crate::core::constants::DEFAULT_CHARACTER_NAME)
    }
}

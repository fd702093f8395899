use serde::{Deserialize, Serialize};
use std::fmt;

/// What an item is for. The bonus payload is read according to this tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemCategory {
    Weapon,
    Armor,
    Consumable,
}

impl ItemCategory {
    pub fn label(&self) -> &'static str {
        match self {
            ItemCategory::Weapon => "weapon",
            ItemCategory::Armor => "armor",
            ItemCategory::Consumable => "consumable",
        }
    }
}

impl fmt::Display for ItemCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rarity {
    #[default]
    Common = 0,
    Rare = 1,
    Epic = 2,
    Legendary = 3,
}

impl Rarity {
    /// Returns the display name for this rarity tier.
    pub fn name(&self) -> &'static str {
        match self {
            Rarity::Common => "Común",
            Rarity::Rare => "Raro",
            Rarity::Epic => "Épico",
            Rarity::Legendary => "Legendario",
        }
    }
}

/// Bonus payload. Every field is optional so partially-formed catalog data
/// still loads; a missing field contributes 0.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemBonus {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attack: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub defense: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heal: Option<u32>,
}

impl ItemBonus {
    pub fn attack(value: u32) -> Self {
        Self {
            attack: Some(value),
            ..Self::default()
        }
    }

    pub fn defense(value: u32) -> Self {
        Self {
            defense: Some(value),
            ..Self::default()
        }
    }

    pub fn heal(value: u32) -> Self {
        Self {
            heal: Some(value),
            ..Self::default()
        }
    }

    /// "attack: +5, heal: +50" style summary of the fields that are set.
    pub fn summary(&self) -> String {
        [
            ("attack", self.attack),
            ("defense", self.defense),
            ("heal", self.heal),
        ]
        .iter()
        .filter_map(|(key, value)| value.map(|v| format!("{}: +{}", key, v)))
        .collect::<Vec<_>>()
        .join(", ")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    #[serde(default)]
    pub name: String,
    pub category: ItemCategory,
    #[serde(default)]
    pub bonus: ItemBonus,
    #[serde(default)]
    pub rarity: Rarity,
    /// Price in cents.
    #[serde(default)]
    pub price: u32,
}

impl Item {
    pub fn new(
        name: impl Into<String>,
        price: u32,
        rarity: Rarity,
        category: ItemCategory,
        bonus: ItemBonus,
    ) -> Self {
        Self {
            name: name.into(),
            category,
            bonus,
            rarity,
            price,
        }
    }

    /// Attack granted while owned. Only weapons contribute.
    pub fn attack_bonus(&self) -> u32 {
        match self.category {
            ItemCategory::Weapon => self.bonus.attack.unwrap_or(0),
            _ => 0,
        }
    }

    /// Defense granted while owned. Only armor contributes.
    pub fn defense_bonus(&self) -> u32 {
        match self.category {
            ItemCategory::Armor => self.bonus.defense.unwrap_or(0),
            _ => 0,
        }
    }

    pub fn heal_amount(&self) -> u32 {
        match self.category {
            ItemCategory::Consumable => self.bonus.heal.unwrap_or(0),
            _ => 0,
        }
    }

    /// Case-insensitive substring match on the item name.
    pub fn name_contains(&self, keyword: &str) -> bool {
        self.name.to_lowercase().contains(keyword)
    }

    pub fn formatted_price(&self) -> String {
        format!("{:.2}€", self.price as f64 / 100.0)
    }

    /// Applies a percentage discount (clamped to 0..=100) and returns the new price.
    pub fn apply_discount(&mut self, percent: u32) -> u32 {
        let percent = percent.min(100);
        let discounted = self.price as f64 * (1.0 - percent as f64 / 100.0);
        self.price = discounted.round() as u32;
        self.price
    }

    pub fn describe(&self) -> String {
        format!(
            "{} ({}, {}) costs {} and grants {}",
            self.name,
            self.category,
            self.rarity.name(),
            self.formatted_price(),
            self.bonus.summary()
        )
    }
}

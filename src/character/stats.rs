//! Stat aggregation: effective attack/defense derived from base stats plus
//! owned equipment. Nothing here is stored; everything is recomputed from
//! the current inventory on each call.

use super::types::Character;
use crate::core::constants::{CREATION_STAT_BUDGET, MIN_CREATION_LIFE};
use crate::items::types::{Item, ItemCategory};
use std::collections::BTreeMap;

impl Character {
    /// Base attack plus the attack bonus of every owned weapon.
    pub fn total_attack(&self) -> u32 {
        self.inventory
            .iter()
            .fold(self.base_attack, |acc, item| acc.saturating_add(item.attack_bonus()))
    }

    /// Base defense plus the defense bonus of every owned armor piece.
    pub fn total_defense(&self) -> u32 {
        self.inventory
            .iter()
            .fold(self.base_defense, |acc, item| acc.saturating_add(item.defense_bonus()))
    }

    /// Groups owned items by category. Only categories with at least one
    /// item appear, and purchase order is kept inside each group.
    pub fn inventory_by_category(&self) -> BTreeMap<ItemCategory, Vec<&Item>> {
        let mut groups: BTreeMap<ItemCategory, Vec<&Item>> = BTreeMap::new();
        for item in &self.inventory {
            groups.entry(item.category).or_default().push(item);
        }
        groups
    }
}

/// Checks submitted creation stats against the creation policy.
/// Returns every violation found, or an empty list when the stats are valid.
pub fn creation_violations(attack: u32, defense: u32, life: u32) -> Vec<String> {
    let mut errors = Vec::new();
    if life < MIN_CREATION_LIFE {
        errors.push(format!("life must be at least {}", MIN_CREATION_LIFE));
    }
    let total = attack as u64 + defense as u64 + life as u64;
    if total > CREATION_STAT_BUDGET as u64 {
        errors.push(format!(
            "stat total ({}) exceeds the limit of {}",
            total, CREATION_STAT_BUDGET
        ));
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::types::{ItemBonus, Rarity};

    fn item(name: &str, category: ItemCategory, bonus: ItemBonus) -> Item {
        Item::new(name, 10, Rarity::Common, category, bonus)
    }

    #[test]
    fn test_empty_inventory_totals_equal_base() {
        for (atk, def) in [(0, 0), (3, 7), (10, 0), (0, 10)] {
            let c = Character::with_stats("Base", atk, def, 100);
            assert_eq!(c.total_attack(), atk);
            assert_eq!(c.total_defense(), def);
        }
    }

    #[test]
    fn test_totals_sum_matching_categories_only() {
        let mut c = Character::with_stats("Geared", 2, 3, 100);
        c.add_item(&item("Espada", ItemCategory::Weapon, ItemBonus::attack(5)));
        c.add_item(&item("Hacha", ItemCategory::Weapon, ItemBonus::attack(15)));
        c.add_item(&item("Escudo", ItemCategory::Armor, ItemBonus::defense(20)));
        c.add_item(&item("Pocion", ItemCategory::Consumable, ItemBonus::heal(50)));

        assert_eq!(c.total_attack(), 22);
        assert_eq!(c.total_defense(), 23);
    }

    #[test]
    fn test_missing_bonus_counts_as_zero() {
        let mut c = Character::with_stats("Lenient", 1, 1, 100);
        c.add_item(&item("Blunt", ItemCategory::Weapon, ItemBonus::default()));
        c.add_item(&item("Rags", ItemCategory::Armor, ItemBonus::default()));
        assert_eq!(c.total_attack(), 1);
        assert_eq!(c.total_defense(), 1);
    }

    #[test]
    fn test_mutating_source_after_add_keeps_totals() {
        let mut c = Character::with_stats("Copy", 0, 0, 100);
        let mut sword = item("Espada", ItemCategory::Weapon, ItemBonus::attack(5));
        c.add_item(&sword);
        sword.bonus.attack = Some(500);
        sword.category = ItemCategory::Armor;
        assert_eq!(c.total_attack(), 5);
        assert_eq!(c.total_defense(), 0);
    }

    #[test]
    fn test_inventory_by_category_groups_in_order() {
        let mut c = Character::new("Groups");
        c.add_item(&item("Pocion A", ItemCategory::Consumable, ItemBonus::heal(50)));
        c.add_item(&item("Espada", ItemCategory::Weapon, ItemBonus::attack(5)));
        c.add_item(&item("Pocion B", ItemCategory::Consumable, ItemBonus::heal(50)));

        let groups = c.inventory_by_category();
        assert_eq!(groups.len(), 2);
        assert!(!groups.contains_key(&ItemCategory::Armor));
        let potions: Vec<_> = groups[&ItemCategory::Consumable]
            .iter()
            .map(|i| i.name.as_str())
            .collect();
        assert_eq!(potions, vec!["Pocion A", "Pocion B"]);
    }

    #[test]
    fn test_inventory_by_category_empty() {
        assert!(Character::new("Empty").inventory_by_category().is_empty());
    }

    #[test]
    fn test_creation_violations() {
        assert!(creation_violations(5, 5, 100).is_empty());
        assert_eq!(creation_violations(0, 0, 90).len(), 1);
        assert_eq!(creation_violations(20, 0, 95).len(), 2);
        assert_eq!(creation_violations(11, 0, 100).len(), 1);
    }
}

//! The market catalog: the source of every item a character can own.

use super::types::{Item, ItemBonus, ItemCategory, Rarity};
use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Market {
    products: Vec<Item>,
    /// Prices as listed before any discount, index-aligned with `products`.
    original_prices: Vec<u32>,
}

/// The fixed catalog offered at game start.
pub fn default_catalog() -> Vec<Item> {
    use ItemCategory::*;
    use Rarity::*;

    vec![
        Item::new("Espada Basica", 30, Common, Weapon, ItemBonus::attack(5)),
        Item::new("Espada Normal", 60, Rare, Weapon, ItemBonus::attack(10)),
        Item::new("Armadura Ligera", 100, Rare, Armor, ItemBonus::defense(10)),
        Item::new("Pocion de vida", 30, Common, Consumable, ItemBonus::heal(50)),
        Item::new("Revivir", 100, Rare, Consumable, ItemBonus::heal(100)),
        Item::new("Hacha", 200, Epic, Weapon, ItemBonus::attack(15)),
        Item::new("Escudo Antiguo", 200, Epic, Armor, ItemBonus::defense(20)),
        Item::new("Escudo Legendario", 400, Legendary, Armor, ItemBonus::defense(40)),
    ]
}

impl Market {
    pub fn new() -> Self {
        Self::with_catalog(default_catalog())
    }

    pub fn with_catalog(products: Vec<Item>) -> Self {
        let original_prices = products.iter().map(|p| p.price).collect();
        Self {
            products,
            original_prices,
        }
    }

    pub fn products(&self) -> &[Item] {
        &self.products
    }

    pub fn get(&self, index: usize) -> Option<&Item> {
        self.products.get(index)
    }

    pub fn find(&self, name: &str) -> Option<&Item> {
        self.products.iter().find(|p| p.name == name)
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.products.iter().position(|p| p.name == name)
    }

    pub fn filter_by_rarity(&self, rarity: Rarity) -> Vec<&Item> {
        self.products.iter().filter(|p| p.rarity == rarity).collect()
    }

    /// Discounts every product of the given rarity.
    pub fn apply_discount(&mut self, rarity: Rarity, percent: u32) {
        for product in self.products.iter_mut().filter(|p| p.rarity == rarity) {
            product.apply_discount(percent);
        }
    }

    /// Discounts one product picked at random. Returns its name, or `None`
    /// when the catalog is empty.
    pub fn apply_random_discount(&mut self, rng: &mut impl Rng, percent: u32) -> Option<String> {
        if self.products.is_empty() {
            return None;
        }
        let index = rng.gen_range(0..self.products.len());
        let product = &mut self.products[index];
        let new_price = product.apply_discount(percent);
        tracing::info!(
            "Discounted {} by {}% (now {})",
            product.name,
            percent,
            new_price
        );
        Some(product.name.clone())
    }

    pub fn reset_prices(&mut self) {
        for (product, price) in self.products.iter_mut().zip(&self.original_prices) {
            product.price = *price;
        }
    }

    /// One line per product.
    pub fn describe(&self) -> String {
        self.products
            .iter()
            .map(Item::describe)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for Market {
    fn default() -> Self {
        Self::new()
    }
}

//! The session controller: owns everything one player touches between
//! start and restart, and routes requests into the combat core.

use super::results::{ResultLog, ResultRecord};
use crate::character::stats::creation_violations;
use crate::character::types::Character;
use crate::combat::logic::{try_resolve, BattleOutcome, Winner};
use crate::combat::types::{default_roster, draw_queue, Opponent};
use crate::core::constants::{DEFAULT_CHARACTER_NAME, QUEUE_SIZE, RANDOM_DISCOUNT_PERCENT};
use crate::core::error::{Result, SessionError};
use crate::items::market::Market;
use crate::ranking::logic::{categorize, report, Category, CategoryEntry};
use crate::ranking::report::{FightRecord, Report, Round};
use rand::Rng;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceState {
    /// No battle sequence has been started since the last restart or retreat.
    Idle,
    InProgress,
    /// The last sequence ended, by defeat or by clearing the queue.
    Finished,
}

#[derive(Debug, Clone)]
pub struct Session {
    pub character: Character,
    pub market: Market,
    roster: Vec<Opponent>,
    queue: Vec<Opponent>,
    current: usize,
    state: SequenceState,
    /// Catalog indices picked but not yet bought.
    selected: Vec<usize>,
    rounds: Vec<Round>,
    results: ResultLog,
}

impl Session {
    pub fn new(name: &str) -> Self {
        let name = if name.trim().is_empty() {
            DEFAULT_CHARACTER_NAME
        } else {
            name.trim()
        };
        Self::with_parts(Character::new(name), Market::new(), default_roster())
    }

    pub fn with_parts(character: Character, market: Market, roster: Vec<Opponent>) -> Self {
        Self {
            character,
            market,
            roster,
            queue: Vec::new(),
            current: 0,
            state: SequenceState::Idle,
            selected: Vec::new(),
            rounds: Vec::new(),
            results: ResultLog::new(),
        }
    }

    /// Carries over previously persisted results (used for categorization).
    pub fn with_results(mut self, results: ResultLog) -> Self {
        self.results = results;
        self
    }

    /// Applies submitted creation stats. All policy violations are reported
    /// together and nothing changes when any is found.
    pub fn create_character(&mut self, name: &str, attack: u32, defense: u32, life: u32) -> Result<()> {
        let violations = creation_violations(attack, defense, life);
        if !violations.is_empty() {
            return Err(SessionError::InvalidCreation(violations));
        }
        let name = name.trim();
        self.character.name = if name.is_empty() {
            DEFAULT_CHARACTER_NAME.to_string()
        } else {
            name.to_string()
        };
        self.character.base_attack = attack;
        self.character.base_defense = defense;
        self.character.life = life;
        self.character.life_max = life;
        tracing::info!(
            "Created {} (atk {}, def {}, life {})",
            self.character.name,
            attack,
            defense,
            life
        );
        Ok(())
    }

    pub fn roster(&self) -> &[Opponent] {
        &self.roster
    }

    // =========================================================================
    // Shop
    // =========================================================================

    /// Entering the shop discounts one random product.
    pub fn open_shop(&mut self, rng: &mut impl Rng) -> Option<String> {
        self.market.apply_random_discount(rng, RANDOM_DISCOUNT_PERCENT)
    }

    pub fn selected(&self) -> &[usize] {
        &self.selected
    }

    pub fn selected_total(&self) -> u32 {
        self.selected
            .iter()
            .filter_map(|&i| self.market.get(i))
            .map(|p| p.price)
            .sum()
    }

    pub fn available_funds(&self) -> u32 {
        self.character.currency.saturating_sub(self.selected_total())
    }

    pub fn can_afford(&self, price: u32) -> bool {
        self.selected_total() as u64 + price as u64 <= self.character.currency as u64
    }

    /// Selects or deselects a catalog product. Returns whether it is now
    /// selected.
    pub fn toggle_selection(&mut self, index: usize) -> Result<bool> {
        let price = self
            .market
            .get(index)
            .map(|p| p.price)
            .ok_or(SessionError::UnknownProduct(index))?;

        if let Some(pos) = self.selected.iter().position(|&i| i == index) {
            self.selected.remove(pos);
            return Ok(false);
        }
        if !self.can_afford(price) {
            return Err(SessionError::InsufficientFunds {
                needed: self.selected_total().saturating_add(price),
                available: self.character.currency,
            });
        }
        self.selected.push(index);
        Ok(true)
    }

    pub fn reset_selection(&mut self) {
        self.selected.clear();
    }

    /// Buys every selected product, debiting the character and storing
    /// copies of the catalog items. Returns the names bought.
    pub fn purchase(&mut self) -> Result<Vec<String>> {
        if self.selected.is_empty() {
            return Err(SessionError::NothingSelected);
        }
        let total = self.selected_total();
        if total > self.character.currency {
            return Err(SessionError::InsufficientFunds {
                needed: total,
                available: self.character.currency,
            });
        }

        self.character.currency -= total;
        let mut bought = Vec::with_capacity(self.selected.len());
        for index in std::mem::take(&mut self.selected) {
            if let Some(product) = self.market.get(index) {
                self.character.add_item(product);
                bought.push(product.name.clone());
            }
        }
        tracing::info!(
            "{} bought {} for {} (left: {})",
            self.character.name,
            bought.join(", "),
            total,
            self.character.currency
        );
        Ok(bought)
    }

    // =========================================================================
    // Battle sequence
    // =========================================================================

    /// Draws a fresh opponent queue and opens a new round.
    pub fn start_sequence(&mut self, rng: &mut impl Rng) {
        self.queue = draw_queue(&self.roster, QUEUE_SIZE, rng);
        self.current = 0;
        self.state = SequenceState::InProgress;
        self.rounds.push(Round::default());
        tracing::info!(
            "Battle sequence started: {}",
            self.queue
                .iter()
                .map(|o| o.name.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        );
    }

    /// Leaves the current sequence without recording a result.
    pub fn retreat(&mut self) {
        self.queue.clear();
        self.current = 0;
        self.state = SequenceState::Idle;
    }

    pub fn sequence_state(&self) -> SequenceState {
        self.state
    }

    pub fn queue(&self) -> &[Opponent] {
        &self.queue
    }

    pub fn current_opponent(&self) -> Option<&Opponent> {
        match self.state {
            SequenceState::InProgress => self.queue.get(self.current),
            _ => None,
        }
    }

    /// `(fight number, queue length)` for an "Enemy 2/3" counter.
    pub fn progress(&self) -> (usize, usize) {
        (self.current + 1, self.queue.len())
    }

    /// Resolves the fight against the current opponent. A win or draw moves
    /// on to the next opponent; a defeat or an emptied queue ends the
    /// sequence and appends a result record.
    pub fn fight(&mut self) -> Result<BattleOutcome> {
        if self.state != SequenceState::InProgress {
            return Err(SessionError::NoActiveOpponent);
        }
        let opponent = self
            .queue
            .get_mut(self.current)
            .ok_or(SessionError::NoActiveOpponent)?;

        let outcome = try_resolve(&mut self.character, opponent)?;
        let record = FightRecord {
            player_name: self.character.name.clone(),
            opponent_name: opponent.name.clone(),
            winner: outcome.winner,
            points_awarded: outcome.points_awarded,
        };
        tracing::info!(
            "{} vs {}: {} (+{} pts)",
            record.player_name,
            record.opponent_name,
            record.winner,
            record.points_awarded
        );
        if let Some(round) = self.rounds.last_mut() {
            round.fights.push(record);
        }

        match outcome.winner {
            Winner::Player | Winner::Draw => {
                self.current += 1;
                if self.current >= self.queue.len() {
                    self.finish_sequence();
                }
            }
            Winner::Enemy | Winner::Error => self.finish_sequence(),
        }
        Ok(outcome)
    }

    fn finish_sequence(&mut self) {
        self.state = SequenceState::Finished;
        self.results.append(ResultRecord::new(
            self.character.name.clone(),
            self.character.score,
            self.character.currency,
        ));
    }

    // =========================================================================
    // Results and ranking
    // =========================================================================

    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }

    pub fn results(&self) -> &ResultLog {
        &self.results
    }

    /// Writes the result log to `path`.
    pub fn save_results(&self, path: &Path) -> Result<()> {
        self.results.save(path)?;
        Ok(())
    }

    pub fn final_category(&self) -> Category {
        Category::for_score(self.character.score)
    }

    /// Categorizes the character against the persisted history.
    pub fn categorize(&self) -> Vec<CategoryEntry> {
        categorize(
            std::slice::from_ref(&self.character),
            self.results.records(),
        )
    }

    pub fn report(&self) -> Report {
        report(&self.rounds, std::slice::from_ref(&self.character))
    }

    /// Returns to the starting state, keeping the character's base stats and
    /// the result log. Queued opponents are copies, so the roster's life
    /// pools are still at their starting values and need no reset.
    pub fn restart(&mut self) {
        self.character.reset();
        self.market.reset_prices();
        self.selected.clear();
        self.retreat();
        self.rounds.clear();
        tracing::info!("Session restarted for {}", self.character.name);
    }
}

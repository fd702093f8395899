//! Simulation report generation.

use crate::ranking::logic::Category;
use crate::session::results::{ResultLog, ResultRecord};
use serde::Serialize;
use std::collections::BTreeMap;

/// Outcome of one simulated battle sequence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunStats {
    pub cleared: bool,
    pub score: u32,
    /// Funds left after the loadout was bought.
    pub currency: u32,
    pub wins: u32,
    pub consumables_used: u32,
    pub category: Category,
    /// Opponent that ended the run, if it was lost.
    pub lost_to: Option<String>,
}

/// Aggregated results from multiple simulation runs.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub num_runs: u32,
    pub sequences_cleared: u32,

    pub avg_score: f64,
    pub avg_wins: f64,
    pub avg_consumables_used: f64,

    /// Keyed by category name ("pro" / "rookie").
    pub category_counts: BTreeMap<String, u32>,
    pub loss_by_opponent: BTreeMap<String, u32>,

    #[serde(skip)]
    pub run_stats: Vec<RunStats>,
}

impl SimReport {
    pub fn from_runs(runs: Vec<RunStats>) -> Self {
        let num_runs = runs.len() as u32;
        let divisor = num_runs.max(1) as f64;
        let sequences_cleared = runs.iter().filter(|r| r.cleared).count() as u32;

        let avg_score = runs.iter().map(|r| r.score as f64).sum::<f64>() / divisor;
        let avg_wins = runs.iter().map(|r| r.wins as f64).sum::<f64>() / divisor;
        let avg_consumables_used =
            runs.iter().map(|r| r.consumables_used as f64).sum::<f64>() / divisor;

        let mut category_counts = BTreeMap::new();
        for category in [Category::Pro, Category::Rookie] {
            category_counts.insert(category.as_str().to_string(), 0);
        }
        for run in &runs {
            *category_counts
                .entry(run.category.as_str().to_string())
                .or_insert(0) += 1;
        }

        let mut loss_by_opponent = BTreeMap::new();
        for name in runs.iter().filter_map(|r| r.lost_to.as_ref()) {
            *loss_by_opponent.entry(name.clone()).or_insert(0) += 1;
        }

        Self {
            num_runs,
            sequences_cleared,
            avg_score,
            avg_wins,
            avg_consumables_used,
            category_counts,
            loss_by_opponent,
            run_stats: runs,
        }
    }

    pub fn clear_rate(&self) -> f64 {
        if self.num_runs == 0 {
            return 0.0;
        }
        self.sequences_cleared as f64 / self.num_runs as f64 * 100.0
    }

    /// Appends one record per run, named after the simulated character.
    pub fn append_to(&self, log: &mut ResultLog, name: &str) {
        for run in &self.run_stats {
            log.append(ResultRecord::new(name, run.score, run.currency));
        }
    }

    /// Generate a text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                    SIMULATION REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!(
            "Runs: {} total, {} cleared ({:.1}%)\n\n",
            self.num_runs,
            self.sequences_cleared,
            self.clear_rate()
        ));

        report.push_str("── RESULTS ──────────────────────────────────────────────────────\n");
        report.push_str(&format!("  Avg Score:           {:.1}\n", self.avg_score));
        report.push_str(&format!("  Avg Wins:            {:.2}\n", self.avg_wins));
        report.push_str(&format!(
            "  Avg Consumables:     {:.2}\n\n",
            self.avg_consumables_used
        ));

        report.push_str("── CATEGORIES ───────────────────────────────────────────────────\n");
        for (category, count) in &self.category_counts {
            let pct = *count as f64 / self.num_runs.max(1) as f64 * 100.0;
            let bar: String = "█".repeat((pct / 5.0) as usize);
            report.push_str(&format!("  {:<7} {:>5.1}% {}\n", category, pct, bar));
        }
        report.push('\n');

        report.push_str("── DEFEATS BY OPPONENT ──────────────────────────────────────────\n");
        if self.loss_by_opponent.is_empty() {
            report.push_str("  (no defeats)\n");
        }
        for (opponent, count) in &self.loss_by_opponent {
            report.push_str(&format!("  {:<10} {}\n", opponent, count));
        }

        report.push_str("\n═══════════════════════════════════════════════════════════════\n");

        report
    }

    /// Generate a JSON report for further analysis.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

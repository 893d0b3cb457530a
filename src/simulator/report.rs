//! Simulation report generation.

use super::config::SimConfig;
use super::runner::RunStats;
use crate::rarity::{get_tier, TierId};
use serde::Serialize;
use std::collections::BTreeMap;

/// Aggregated results from multiple simulation runs.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub mode: String,
    pub num_runs: u32,
    pub events_per_run: u32,
    pub total_events: u64,
    pub failed_events: u64,

    // Event outcomes
    pub drop_events: u64,
    pub consolation_events: u64,
    pub total_items: u64,
    pub drop_event_rate: f64,
    pub consolation_rate: f64,
    pub avg_items_per_event: f64,
    pub avg_gold_per_run: f64,
    pub avg_finder_rewards: f64,

    // Rarity distribution of recorded finds
    pub tier_totals: BTreeMap<TierId, u64>,
    pub best_tier: TierId,

    // Individual run stats for detailed analysis
    #[serde(skip)]
    pub run_stats: Vec<RunStats>,
}

fn ratio(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64
    }
}

impl SimReport {
    /// Create a new report from completed run stats.
    pub fn from_runs(config: &SimConfig, runs: Vec<RunStats>) -> Self {
        let num_runs = runs.len() as u32;
        let total_events: u64 = runs.iter().map(|r| r.events).sum();
        let failed_events: u64 = runs.iter().map(|r| r.failed_events).sum();
        let drop_events: u64 = runs.iter().map(|r| r.drop_events).sum();
        let consolation_events: u64 = runs.iter().map(|r| r.consolation_events).sum();
        let total_items: u64 = runs.iter().map(|r| r.items_received).sum();

        let mut tier_totals: BTreeMap<TierId, u64> =
            TierId::ALL.iter().map(|&tier| (tier, 0)).collect();
        for run in &runs {
            for tier in TierId::ALL {
                *tier_totals.entry(tier).or_insert(0) += run.tier_counts[tier.rank()];
            }
        }
        let best_tier = runs
            .iter()
            .map(|r| r.highest_tier)
            .max()
            .unwrap_or(TierId::Common);

        let per_run = |f: fn(&RunStats) -> u64| {
            ratio(runs.iter().map(f).sum(), num_runs as u64)
        };
        let avg_gold_per_run = per_run(|r| r.gold_earned);
        let avg_finder_rewards = per_run(|r| r.finder_rewards);

        Self {
            mode: config.mode.label(),
            num_runs,
            events_per_run: config.events_per_run,
            total_events,
            failed_events,
            drop_events,
            consolation_events,
            total_items,
            drop_event_rate: ratio(drop_events, total_events),
            consolation_rate: ratio(consolation_events, total_events),
            avg_items_per_event: ratio(total_items, total_events),
            avg_gold_per_run,
            avg_finder_rewards,
            tier_totals,
            best_tier,
            run_stats: runs,
        }
    }

    /// Share of recorded finds at `tier`, as a fraction.
    pub fn tier_share(&self, tier: TierId) -> f64 {
        let total: u64 = self.tier_totals.values().sum();
        ratio(self.tier_totals.get(&tier).copied().unwrap_or(0), total)
    }

    /// Generate a text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                      LOOT SIMULATION REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!("Mode: {}\n", self.mode));
        report.push_str(&format!(
            "Runs: {} x {} events ({} total, {} failed)\n\n",
            self.num_runs, self.events_per_run, self.total_events, self.failed_events
        ));

        report.push_str("── EVENTS ───────────────────────────────────────────────────────\n");
        report.push_str(&format!(
            "  Drop Rate:           {:.1}%\n",
            self.drop_event_rate * 100.0
        ));
        report.push_str(&format!(
            "  Consolation Rate:    {:.1}%\n",
            self.consolation_rate * 100.0
        ));
        report.push_str(&format!(
            "  Items per Event:     {:.2}\n",
            self.avg_items_per_event
        ));
        report.push_str(&format!(
            "  Gold per Run:        {:.0}\n",
            self.avg_gold_per_run
        ));
        report.push_str(&format!(
            "  Finder Rewards/Run:  {:.2}\n\n",
            self.avg_finder_rewards
        ));

        report.push_str("── RARITY DISTRIBUTION ──────────────────────────────────────────\n");
        for (&tier, &count) in &self.tier_totals {
            let pct = self.tier_share(tier) * 100.0;
            let bar_len = (pct / 2.0) as usize;
            let bar: String = "█".repeat(bar_len);
            report.push_str(&format!(
                "  {:<10} {:>8} {:>6.2}% {}\n",
                get_tier(tier).name,
                count,
                pct,
                bar
            ));
        }
        report.push_str(&format!(
            "\n  Best Tier Found: {}\n",
            get_tier(self.best_tier).name
        ));

        report.push_str("\n═══════════════════════════════════════════════════════════════\n");

        report
    }

    /// Generate a JSON report for further analysis.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

//! Simulation report generation.

use super::runner::RunStats;
use crate::core::constants::EXIT_DOOR_WINS;
use serde::Serialize;

/// Aggregated results from multiple simulation runs.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub num_runs: u32,
    pub runs_completed: u32,
    pub runs_timed_out: u32,

    // Aggregated stats
    pub avg_total_draws: f64,
    pub avg_total_wins: f64,
    pub avg_lifetime_money: f64,
    pub avg_upgrades_bought: f64,
    pub avg_achievements: f64,

    // Draws per flush
    pub avg_draws_per_win: f64,
    pub median_draws_per_win: u64,
    pub min_draws_per_win: u64,
    pub max_draws_per_win: u64,

    /// Average draws taken by the n-th flush of a run
    pub avg_draws_by_win: Vec<f64>,
    /// Average lifetime money after the n-th flush of a run
    pub money_curve: Vec<f64>,

    // Prestige timing
    pub avg_draws_per_prestige: f64,
    pub avg_points_per_prestige: f64,

    // Individual run stats for detailed analysis
    #[serde(skip)]
    pub run_stats: Vec<RunStats>,
}

impl SimReport {
    /// Create a new report from completed run stats.
    pub fn from_runs(runs: Vec<RunStats>, max_draws: u64) -> Self {
        let num_runs = runs.len() as u32;
        let runs_completed = runs.iter().filter(|r| r.reached_target).count() as u32;
        let runs_timed_out = runs
            .iter()
            .filter(|r| !r.reached_target && r.total_draws >= max_draws)
            .count() as u32;

        let avg_total_draws = mean(runs.iter().map(|r| r.total_draws));
        let avg_total_wins = mean(runs.iter().map(|r| r.total_wins));
        let avg_lifetime_money = mean(runs.iter().map(|r| r.lifetime_money));
        let avg_upgrades_bought = mean(runs.iter().map(|r| r.upgrades_bought as u64));
        let avg_achievements = mean(runs.iter().map(|r| r.achievements_unlocked as u64));

        let mut all_wins: Vec<u64> = runs
            .iter()
            .flat_map(|r| r.draws_per_win.iter().copied())
            .collect();
        all_wins.sort_unstable();
        let avg_draws_per_win = mean(all_wins.iter().copied());
        let median_draws_per_win = all_wins.get(all_wins.len() / 2).copied().unwrap_or(0);
        let min_draws_per_win = all_wins.first().copied().unwrap_or(0);
        let max_draws_per_win = all_wins.last().copied().unwrap_or(0);

        let longest = runs.iter().map(|r| r.draws_per_win.len()).max().unwrap_or(0);
        let avg_draws_by_win = (0..longest)
            .map(|i| mean(runs.iter().filter_map(|r| r.draws_per_win.get(i).copied())))
            .collect();
        let money_curve = (0..longest)
            .map(|i| mean(runs.iter().filter_map(|r| r.money_at_win.get(i).copied())))
            .collect();

        let cycles: Vec<_> = runs.iter().flat_map(|r| r.prestige_cycles.iter()).collect();
        let avg_draws_per_prestige = mean(cycles.iter().map(|c| c.draws));
        let avg_points_per_prestige = mean(cycles.iter().map(|c| c.points_gained));

        Self {
            num_runs,
            runs_completed,
            runs_timed_out,
            avg_total_draws,
            avg_total_wins,
            avg_lifetime_money,
            avg_upgrades_bought,
            avg_achievements,
            avg_draws_per_win,
            median_draws_per_win,
            min_draws_per_win,
            max_draws_per_win,
            avg_draws_by_win,
            money_curve,
            avg_draws_per_prestige,
            avg_points_per_prestige,
            run_stats: runs,
        }
    }

    /// Generate a text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                    SIMULATION REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!(
            "Runs: {} total, {} completed, {} timed out\n\n",
            self.num_runs, self.runs_completed, self.runs_timed_out
        ));

        report.push_str("── PROGRESSION ──────────────────────────────────────────────────\n");
        report.push_str(&format!("  Avg Draws:           {:.0}\n", self.avg_total_draws));
        report.push_str(&format!("  Avg Flushes:         {:.1}\n", self.avg_total_wins));
        report.push_str(&format!("  Avg Lifetime Money:  ${:.0}\n", self.avg_lifetime_money));
        report.push_str(&format!("  Avg Upgrades Bought: {:.1}\n", self.avg_upgrades_bought));
        report.push_str(&format!("  Avg Achievements:    {:.1}\n\n", self.avg_achievements));

        report.push_str("── DRAWS PER FLUSH ──────────────────────────────────────────────\n");
        report.push_str(&format!("  Average: {:.1}\n", self.avg_draws_per_win));
        report.push_str(&format!("  Median:  {}\n", self.median_draws_per_win));
        report.push_str(&format!("  Min:     {}\n", self.min_draws_per_win));
        report.push_str(&format!("  Max:     {}\n\n", self.max_draws_per_win));

        if !self.avg_draws_by_win.is_empty() {
            report.push_str("── MONEY CURVE ──────────────────────────────────────────────────\n");
            report.push_str("  Win    Draws    Lifetime $\n");
            report.push_str("  ───    ─────    ──────────\n");
            for (i, (draws, money)) in self
                .avg_draws_by_win
                .iter()
                .zip(&self.money_curve)
                .enumerate()
            {
                report.push_str(&format!("  {:3}   {:6.1}    {:10.0}\n", i + 1, draws, money));
            }
            report.push('\n');
        }

        report.push_str("── PRESTIGE ─────────────────────────────────────────────────────\n");
        report.push_str(&format!(
            "  Avg Draws per Cycle:  {:.0}\n",
            self.avg_draws_per_prestige
        ));
        report.push_str(&format!(
            "  Avg Points per Cycle: {:.1}\n\n",
            self.avg_points_per_prestige
        ));

        report.push_str("── BALANCE ASSESSMENT ───────────────────────────────────────────\n");
        let completion_rate = (self.runs_completed as f64 / self.num_runs.max(1) as f64) * 100.0;
        report.push_str(&format!("  Completion Rate: {:.1}%\n", completion_rate));

        if self.runs_timed_out > self.num_runs / 2 {
            report.push_str("  ⚠️  Most runs hit the draw cap - early game too slow?\n");
        }
        let curve = &self.avg_draws_by_win;
        if let (Some(first), Some(last)) = (curve.first(), curve.last()) {
            if curve.len() > 1 && last >= first {
                report.push_str("  ⚠️  Later flushes are not getting faster - upgrades too weak?\n");
            }
        }
        if self.avg_total_wins >= EXIT_DOOR_WINS as f64 {
            report.push_str("  Most runs reach the exit door.\n");
        }

        report.push_str("\n═══════════════════════════════════════════════════════════════\n");

        report
    }

    /// Generate a JSON report for further analysis.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

/// Average of `values`, 0 when empty.
fn mean(values: impl Iterator<Item = u64>) -> f64 {
    let (sum, count) = values.fold((0u64, 0u64), |(s, c), v| (s + v, c + 1));
    if count == 0 {
        0.0
    } else {
        sum as f64 / count as f64
    }
}

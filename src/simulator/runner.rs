//! Auto-player driving the real command engine.
//!
//! Every timer is fired as soon as it is scheduled, so a run costs no wall
//! time. Statistics are collected from the emitted events.

use super::config::SimConfig;
use super::report::SimReport;
use crate::core::engine::apply;
use crate::core::events::{Command, GameEvent};
use crate::core::game_state::GameState;
use crate::core::scheduler::ManualScheduler;
use crate::progression::can_prestige;
use crate::shop::{next_cost, UpgradeId};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use tracing::info;

/// One completed prestige.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrestigeCycle {
    /// Prestige level reached
    pub level: u32,
    /// Picks made during the cycle
    pub draws: u64,
    /// Flushes completed during the cycle
    pub wins: u32,
    pub points_gained: u64,
}

/// Outcome of a single simulated session.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunStats {
    pub total_draws: u64,
    pub total_wins: u64,
    pub final_prestige: u32,
    pub final_money: u64,
    pub lifetime_money: u64,
    pub upgrades_bought: u32,
    pub achievements_unlocked: usize,
    /// Picks each flush took, in order
    pub draws_per_win: Vec<u64>,
    /// Lifetime money right after each flush
    pub money_at_win: Vec<u64>,
    pub prestige_cycles: Vec<PrestigeCycle>,
    pub reached_target: bool,
}

/// Run the full simulation and return a report.
pub fn run_simulation(config: &SimConfig) -> SimReport {
    let mut all_runs = Vec::with_capacity(config.num_runs as usize);

    for run_idx in 0..config.num_runs {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(run_idx as u64)),
            None => StdRng::from_entropy(),
        };

        let run = simulate_single_run(config, &mut rng);
        if config.verbosity >= 2 {
            info!(
                run = run_idx + 1,
                draws = run.total_draws,
                wins = run.total_wins,
                prestige = run.final_prestige,
                lifetime_money = run.lifetime_money,
                "run finished"
            );
        }
        all_runs.push(run);
    }

    SimReport::from_runs(all_runs, config.max_draws_per_run)
}

/// Play one session until the target is met or the draw cap is hit.
fn simulate_single_run<R: Rng>(config: &SimConfig, rng: &mut R) -> RunStats {
    let mut state = GameState::new();
    let mut scheduler = ManualScheduler::new();
    let mut run = RunStats::default();
    let mut cycle_start_draws = 0;

    loop {
        if state.prestige_level >= config.target_prestige && state.total_wins >= config.target_wins
        {
            run.reached_target = true;
            break;
        }
        if run.total_draws >= config.max_draws_per_run {
            break;
        }

        if state.prestige_level < config.target_prestige && can_prestige(&state) {
            let wins = state.total_wins;
            let result = apply(&mut state, Command::Prestige, rng, &mut scheduler);
            for event in result.events {
                if let GameEvent::PrestigeCompleted { level, points } = event {
                    run.prestige_cycles.push(PrestigeCycle {
                        level,
                        draws: run.total_draws - cycle_start_draws,
                        wins,
                        points_gained: points,
                    });
                    cycle_start_draws = run.total_draws;
                }
            }
        }

        if config.buy_upgrades {
            run.upgrades_bought += buy_cheapest_upgrades(&mut state, rng, &mut scheduler);
        }

        if state.royal_flush.is_complete() {
            apply(&mut state, Command::ResetRound, rng, &mut scheduler);
        }

        for event in play_round(&mut state, rng, &mut scheduler) {
            match event {
                GameEvent::CardCollected { .. } | GameEvent::WrongCard { .. } => {
                    run.total_draws += 1;
                }
                GameEvent::RoundWon { draws, .. } => {
                    run.total_wins += 1;
                    run.draws_per_win.push(draws);
                    run.money_at_win.push(state.lifetime_money);
                }
                _ => {}
            }
        }
    }

    run.final_prestige = state.prestige_level;
    run.final_money = state.money;
    run.lifetime_money = state.lifetime_money;
    run.achievements_unlocked = state.achievements.unlocked_count();
    run
}

/// Shuffle, pick a random card and let every timer run out.
fn play_round<R: Rng>(
    state: &mut GameState,
    rng: &mut R,
    scheduler: &mut ManualScheduler,
) -> Vec<GameEvent> {
    let mut events = apply(state, Command::StartShuffle, rng, scheduler).events;

    while let Some(timer) = scheduler.fire_next() {
        events.extend(apply(state, Command::TimerElapsed(timer), rng, scheduler).events);

        let pick = state
            .cards_laid_out()
            .filter(|cards| !cards.is_empty())
            .map(|cards| cards.len());
        if let Some(len) = pick {
            let index = rng.gen_range(0..len);
            events.extend(apply(state, Command::SelectCard { index }, rng, scheduler).events);
        }
    }

    events
}

/// Greedy shop policy: keep buying the cheapest affordable upgrade.
///
/// The dog is skipped since it has no gameplay effect.
fn buy_cheapest_upgrades<R: Rng>(
    state: &mut GameState,
    rng: &mut R,
    scheduler: &mut ManualScheduler,
) -> u32 {
    let mut bought = 0;
    loop {
        let cheapest = UpgradeId::ALL
            .iter()
            .copied()
            .filter(|id| *id != UpgradeId::Dog)
            .filter_map(|id| next_cost(state, id).map(|cost| (cost, id)))
            .filter(|(cost, _)| *cost <= state.money)
            .min_by_key(|(cost, _)| *cost);

        let Some((_, id)) = cheapest else {
            break;
        };
        if apply(state, Command::PurchaseUpgrade { id }, rng, scheduler).was_rejected() {
            break;
        }
        bought += 1;
    }
    bought
}

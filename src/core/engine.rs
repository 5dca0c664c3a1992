//! Command dispatch: the single entry point that mutates a session.
//!
//! Every command runs to completion before the next is processed. Rejected
//! commands leave the state untouched and produce an
//! [`GameEvent::ActionRejected`] instead of an error.

use super::constants::{CLEAR_DELAY_MS, REVEAL_DELAY_MS};
use super::events::{Command, GameEvent};
use super::game_state::{GameState, RoundPhase};
use super::scheduler::{Scheduler, Timer, TimerKind};
use crate::achievements::check_achievements;
use crate::cards::draw::shuffle_duration;
use crate::cards::{build_deck, draw_round, resolve_pick, DeckRecipe, PickOutcome};
use crate::error::RejectedAction;
use crate::progression::{self, MoneyChange};
use crate::shop;
use rand::Rng;
use std::time::Duration;
use tracing::{debug, info};

/// Outcome of applying one command.
#[derive(Debug, Default)]
pub struct ApplyResult {
    /// Events produced by this command, in order.
    pub events: Vec<GameEvent>,

    /// True if persisted state changed and the session should be saved.
    pub state_changed: bool,
}

impl ApplyResult {
    fn reject(&mut self, reason: RejectedAction) {
        debug!(%reason, "action rejected");
        self.events.push(GameEvent::ActionRejected { reason });
    }

    fn money(&mut self, change: MoneyChange) {
        if change.old != change.new {
            self.events.push(GameEvent::MoneyChanged {
                old: change.old,
                new: change.new,
            });
        }
    }

    /// Whether the command was turned away.
    pub fn was_rejected(&self) -> bool {
        self.events
            .iter()
            .any(|e| matches!(e, GameEvent::ActionRejected { .. }))
    }
}

/// Apply a command to the session.
pub fn apply<R: Rng>(
    state: &mut GameState,
    command: Command,
    rng: &mut R,
    scheduler: &mut dyn Scheduler,
) -> ApplyResult {
    let mut result = ApplyResult::default();

    match command {
        Command::StartShuffle => start_shuffle(state, scheduler, &mut result),
        Command::SelectCard { index } => select_card(state, index, scheduler, &mut result),
        Command::TimerElapsed(timer) => on_timer(state, timer, rng, scheduler, &mut result),
        Command::PurchaseUpgrade { id } => match shop::purchase(state, id) {
            Ok(purchase) => {
                info!(upgrade = ?id, level = purchase.new_level, cost = purchase.cost, "upgrade purchased");
                result.events.push(GameEvent::UpgradePurchased {
                    id,
                    level: purchase.new_level,
                    cost: purchase.cost,
                });
                result.money(purchase.money);
                if purchase.dog_adopted {
                    result.events.push(GameEvent::DogAdopted);
                }
                result.state_changed = true;
            }
            Err(reason) => result.reject(reason),
        },
        Command::ClaimDailyBonus { today } => {
            match progression::claim_daily_bonus(state, today) {
                Ok(grant) => {
                    info!(amount = grant.amount, streak = grant.streak, "daily bonus claimed");
                    result.events.push(GameEvent::DailyBonusGranted {
                        amount: grant.amount,
                        streak: grant.streak,
                    });
                    result.money(grant.money);
                    result.state_changed = true;
                }
                Err(reason) => result.reject(reason),
            }
        }
        Command::Prestige => match progression::perform_prestige(state) {
            Ok(report) => {
                info!(
                    level = report.level,
                    points = report.points_gained,
                    "prestige completed"
                );
                result.events.push(GameEvent::PrestigeCompleted {
                    level: report.level,
                    points: report.points_gained,
                });
                result.money(report.money);
                result.state_changed = true;
            }
            Err(reason) => result.reject(reason),
        },
        Command::ResetRound => {
            state.reset_round();
            result.events.push(GameEvent::RoundReset);
            result.state_changed = true;
        }
        Command::FullReset => {
            let old = state.money;
            state.full_reset();
            info!("full reset");
            result.events.push(GameEvent::FullReset);
            result.money(MoneyChange {
                old,
                new: state.money,
            });
            result.state_changed = true;
        }
        Command::Tick { elapsed_secs } => {
            state.stats.time_played += elapsed_secs;
        }
    }

    if result.state_changed {
        for id in check_achievements(state) {
            info!(achievement = ?id, "achievement unlocked");
            result.events.push(GameEvent::AchievementUnlocked { id });
        }
    }

    result
}

fn start_shuffle(state: &mut GameState, scheduler: &mut dyn Scheduler, result: &mut ApplyResult) {
    match state.phase {
        RoundPhase::Idle => {}
        RoundPhase::Shuffling => return result.reject(RejectedAction::ShuffleInProgress),
        _ => return result.reject(RejectedAction::RoundInProgress),
    }
    if state.royal_flush.is_complete() {
        return result.reject(RejectedAction::RoundComplete);
    }

    state.round_epoch += 1;
    state.phase = RoundPhase::Shuffling;
    let duration = shuffle_duration(&state.upgrades);
    scheduler.after(
        duration,
        Timer {
            kind: TimerKind::ShuffleComplete,
            epoch: state.round_epoch,
        },
    );
    result.events.push(GameEvent::ShuffleStarted {
        duration_ms: duration.as_millis() as u64,
    });
}

fn select_card(
    state: &mut GameState,
    index: usize,
    scheduler: &mut dyn Scheduler,
    result: &mut ApplyResult,
) {
    let card = match &state.phase {
        RoundPhase::CardsLaidOut { cards } => match cards.get(index) {
            Some(card) => *card,
            None => return result.reject(RejectedAction::InvalidCardIndex { index }),
        },
        RoundPhase::Shuffling => return result.reject(RejectedAction::ShuffleInProgress),
        _ => return result.reject(RejectedAction::NoCardsLaidOut),
    };

    state.phase = RoundPhase::Revealing { index, card };
    scheduler.after(
        Duration::from_millis(REVEAL_DELAY_MS),
        Timer {
            kind: TimerKind::RevealComplete,
            epoch: state.round_epoch,
        },
    );
    result.events.push(GameEvent::CardRevealed { index, card });
}

fn on_timer<R: Rng>(
    state: &mut GameState,
    timer: Timer,
    rng: &mut R,
    scheduler: &mut dyn Scheduler,
    result: &mut ApplyResult,
) {
    if timer.epoch != state.round_epoch {
        debug!(?timer, epoch = state.round_epoch, "stale timer ignored");
        return;
    }

    match timer.kind {
        TimerKind::ShuffleComplete if state.is_shuffling() => {
            let recipe = DeckRecipe::from_state(state);
            let cards = draw_round(build_deck(&recipe, rng), rng);
            result.events.push(GameEvent::CardsLaidOut { count: cards.len() });
            state.phase = RoundPhase::CardsLaidOut { cards };
        }
        TimerKind::RevealComplete => {
            let RoundPhase::Revealing { card, .. } = state.phase else {
                debug!(?timer, "no card being revealed");
                return;
            };
            match resolve_pick(state, card) {
                PickOutcome::Collected { report, round_win } => {
                    result.events.push(GameEvent::CardCollected {
                        card: report.card,
                        combo: report.combo,
                        multiplier: report.multiplier,
                        money_earned: report.money_earned,
                    });
                    result.money(report.money);
                    if let Some(win) = round_win {
                        info!(total_wins = win.total_wins, draws = win.draws, "royal flush completed");
                        result.events.push(GameEvent::RoundWon {
                            total_wins: win.total_wins,
                            draws: win.draws,
                            exit_progress: win.exit_progress,
                            door_open: win.door_open,
                        });
                    }
                }
                PickOutcome::Wrong { card, ranks_lost } => {
                    result.events.push(GameEvent::WrongCard { card, ranks_lost });
                }
            }
            state.phase = RoundPhase::Clearing;
            scheduler.after(
                Duration::from_millis(CLEAR_DELAY_MS),
                Timer {
                    kind: TimerKind::ClearComplete,
                    epoch: state.round_epoch,
                },
            );
            result.state_changed = true;
        }
        TimerKind::ClearComplete if state.phase == RoundPhase::Clearing => {
            state.phase = RoundPhase::Idle;
            result.events.push(GameEvent::TableCleared);
        }
        _ => debug!(?timer, phase = ?state.phase, "timer does not match table phase"),
    }
}

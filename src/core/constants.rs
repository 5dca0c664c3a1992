// Starting economy
pub const STARTING_MONEY: u64 = 50;
pub const FULL_DECK_SIZE: u32 = 52;
pub const MIN_DECK_SIZE: u32 = 5;
pub const CARDS_PER_ROUND: usize = 5;

// Card rewards: floor((BASE + moneyBoost) * multiplier)
pub const BASE_CARD_REWARD: f64 = 10.0;
pub const PRESTIGE_MULTIPLIER_PER_LEVEL: f64 = 0.1;

// Luck copies: 1 + floor(luck_bonus * LUCK_COPIES_SCALE)
pub const LUCK_COPIES_SCALE: f64 = 10.0;
pub const PRESTIGE_LUCK_PER_LEVEL: f64 = 0.02;

// Upgrade cost curve: floor(base * GROWTH^level * discount)
pub const UPGRADE_COST_GROWTH: f64 = 1.5;
pub const PRESTIGE_DISCOUNT_PERCENT_PER_LEVEL: u32 = 5;
pub const MIN_DISCOUNT_PERCENT: u32 = 5;
pub const MIN_UPGRADE_COST: u64 = 1;

// Prestige
pub const PRESTIGE_WIN_REQUIREMENT: u32 = 5;
pub const PRESTIGE_WINS_PER_POINT: u32 = 5;
pub const PRESTIGE_MONEY_PER_POINT: u64 = 10_000;
pub const PRESTIGE_MONEY_BASE: u64 = 50;
pub const PRESTIGE_MONEY_PER_LEVEL: u64 = 25;

// Daily bonus: BASE + streak * PER_STREAK + prestige * PER_PRESTIGE
pub const DAILY_BONUS_BASE: u64 = 50;
pub const DAILY_BONUS_PER_STREAK: u64 = 25;
pub const DAILY_BONUS_PER_PRESTIGE: u64 = 10;

// Exit sign reaches the door at this many wins
pub const EXIT_DOOR_WINS: u32 = 15;

// Speedrun achievement threshold (draws in the winning round)
pub const SPEEDRUN_MAX_DRAWS: u64 = 20;

// Timing
pub const BASE_SHUFFLE_MS: u64 = 1000;
pub const MIN_SHUFFLE_MS: u64 = 100;
pub const REVEAL_DELAY_MS: u64 = 500;
pub const CLEAR_DELAY_MS: u64 = 1500;
pub const AUTOSAVE_INTERVAL_SECONDS: u64 = 30;

// Persistence
pub const SAVE_KEY: &str = "royal_flush_save";
pub const SAVE_VERSION: u32 = 1;

// Small tolerance so float products like 0.3 * 10 floor to 3, not 2
pub const FLOOR_EPSILON: f64 = 1e-9;

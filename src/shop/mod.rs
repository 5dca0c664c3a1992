//! Upgrade shop: catalog, cost curve and purchases.

pub mod logic;
pub mod types;

pub use logic::{can_afford, next_cost, purchase, upgrade_cost, Purchase};
pub use types::{UpgradeDef, UpgradeId, Upgrades, UPGRADE_DEFS};

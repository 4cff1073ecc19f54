use super::state::Controller;
use crate::storage::LocalDismissalStore;
use anyhow::Context;
use livecost_core::{AmenityFixtures, ExpenseConfig, rng_from_seed, seed_from_entropy};

/// Seed used when no browser entropy is available.
pub const FALLBACK_SEED: u64 = 0x4C49_5645_434F_5354;

/// Embedded expense configuration, validated.
///
/// # Errors
/// Returns an error when `expenses.json` does not parse or fails validation.
pub fn load_expense_config() -> anyhow::Result<ExpenseConfig> {
    ExpenseConfig::try_load_from_static().context("loading static/assets/data/expenses.json")
}

/// Embedded amenity fixtures.
///
/// # Errors
/// Returns an error when `amenities.json` does not parse.
pub fn load_amenity_fixtures() -> anyhow::Result<AmenityFixtures> {
    AmenityFixtures::try_load_from_static().context("loading static/assets/data/amenities.json")
}

fn or_default<T: Default>(loaded: anyhow::Result<T>) -> T {
    loaded.unwrap_or_else(|err| {
        log::warn!("{err:#}; using built-in defaults");
        T::default()
    })
}

/// Seed for this page load: wall clock plus `Math.random` in the browser.
#[must_use]
pub fn entropy_seed() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        let now = js_sys::Date::now().to_bits();
        let noise = js_sys::Math::random().to_bits();
        seed_from_entropy(&[now, noise])
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        seed_from_entropy(&[FALLBACK_SEED])
    }
}

/// Controller for a fresh page load.
#[must_use]
pub fn build_controller() -> Controller {
    Controller::new(
        or_default(load_expense_config()),
        or_default(load_amenity_fixtures()),
        rng_from_seed(entropy_seed()),
        LocalDismissalStore,
    )
}

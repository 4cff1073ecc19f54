//! Livecost Core
//!
//! Platform-agnostic logic for the Livecost cost-of-living demo page.
//! This crate draws placeholder expense figures, prepares pie chart data,
//! builds amenity lists, and models the page's modal and panel states
//! without any browser dependency.

pub mod amenities;
pub mod chart;
pub mod collapsible;
pub mod controller;
pub mod disclaimer;
pub mod error;
pub mod expenses;
pub mod format;
pub mod report;
pub mod seed;
pub mod submission;

// Re-export commonly used types
pub use amenities::{
    AmenityCategory, AmenityFixtures, AmenityLists, AmenityRecord, WorkListPolicy,
    no_secondary_work_placeholder, no_work_placeholder,
};
pub use chart::{
    ChartHandle, ChartRegistry, ChartSpec, ColorScheme, base_label, labels_with_percent,
    legend_color, percent_of, tooltip_label,
};
pub use collapsible::{Collapsible, DETAILS_TITLE, PanelState};
pub use controller::PageController;
pub use disclaimer::{
    DISMISS_KEY, DISMISSED_VALUE, Disclaimer, DismissalStore, MemoryDismissalStore, ModalState,
    StorageError, is_dismissed,
};
pub use error::CoreError;
pub use expenses::{
    ExpenseBreakdown, ExpenseCategory, ExpenseConfig, ExpenseRange, HousingPolicy, IncomeSplit,
    random_cost, required_income,
};
pub use format::{format_currency, format_number, group_thousands};
pub use report::{COST_CHART_ID, CostReport, INCOME_CHART_ID};
pub use seed::{DemoRng, rng_from_seed, seed_from_entropy};
pub use submission::{AddressSubmission, parse_mpg};

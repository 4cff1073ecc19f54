//! Expense categories, their configured ranges, and the randomized breakdown.
use crate::error::CoreError;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

const DEFAULT_EXPENSE_DATA: &str =
    include_str!("../../livecost-web/static/assets/data/expenses.json");

/// Demo rent used by the fixed housing policy, per month.
pub const DEMO_MONTHLY_RENT: u64 = 3314;
/// Share of gross income assumed to remain after taxes.
pub const DEFAULT_AFTER_TAX_RATE: f64 = 0.7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpenseCategory {
    Housing,
    Transportation,
    Childcare,
    Healthcare,
    Food,
    InternetMobile,
    Civic,
}

impl ExpenseCategory {
    /// Display order for cards and chart slices.
    pub const ALL: [Self; 7] = [
        Self::Housing,
        Self::Transportation,
        Self::Childcare,
        Self::Healthcare,
        Self::Food,
        Self::InternetMobile,
        Self::Civic,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Housing => "Housing",
            Self::Transportation => "Transportation",
            Self::Childcare => "Childcare",
            Self::Healthcare => "Healthcare",
            Self::Food => "Food",
            Self::InternetMobile => "Internet & Mobile",
            Self::Civic => "Civic",
        }
    }

    /// Element id of the card that displays this category.
    #[must_use]
    pub const fn card_id(self) -> &'static str {
        match self {
            Self::Housing => "housingCard",
            Self::Transportation => "transportCard",
            Self::Childcare => "childcareCard",
            Self::Healthcare => "healthCard",
            Self::Food => "foodCard",
            Self::InternetMobile => "internetMobileCard",
            Self::Civic => "civicCard",
        }
    }

    #[must_use]
    pub const fn i18n_key(self) -> &'static str {
        match self {
            Self::Housing => "expenses.housing",
            Self::Transportation => "expenses.transportation",
            Self::Childcare => "expenses.childcare",
            Self::Healthcare => "expenses.healthcare",
            Self::Food => "expenses.food",
            Self::InternetMobile => "expenses.internet_mobile",
            Self::Civic => "expenses.civic",
        }
    }

    const fn index(self) -> usize {
        self as usize
    }
}

/// Inclusive annual dollar range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseRange {
    pub min: u64,
    pub max: u64,
}

impl ExpenseRange {
    #[must_use]
    pub const fn new(min: u64, max: u64) -> Self {
        Self { min, max }
    }

    #[must_use]
    pub const fn contains(&self, value: u64) -> bool {
        value >= self.min && value <= self.max
    }

    const fn is_inverted(&self) -> bool {
        self.min > self.max
    }
}

/// Draw a uniformly distributed amount from `range`, both ends included.
///
/// An inverted range yields its lower bound; `ExpenseConfig::validate`
/// reports such ranges before they reach the generator.
pub fn random_cost<R: Rng + ?Sized>(rng: &mut R, range: ExpenseRange) -> u64 {
    if range.is_inverted() {
        return range.min;
    }
    rng.gen_range(range.min..=range.max)
}

/// Strategy that produces the annual housing figure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum HousingPolicy {
    /// Constant rent, annualized.
    Fixed { monthly: u64 },
    /// Drawn like every other category.
    Randomized { min: u64, max: u64 },
}

impl Default for HousingPolicy {
    fn default() -> Self {
        Self::Fixed {
            monthly: DEMO_MONTHLY_RENT,
        }
    }
}

impl HousingPolicy {
    pub fn annual<R: Rng + ?Sized>(&self, rng: &mut R) -> u64 {
        match *self {
            Self::Fixed { monthly } => monthly.saturating_mul(12),
            Self::Randomized { min, max } => random_cost(rng, ExpenseRange::new(min, max)),
        }
    }

    /// Bounds every value produced by this policy falls within.
    #[must_use]
    pub fn bounds(&self) -> ExpenseRange {
        match *self {
            Self::Fixed { monthly } => {
                let annual = monthly.saturating_mul(12);
                ExpenseRange::new(annual, annual)
            }
            Self::Randomized { min, max } => ExpenseRange::new(min, max),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseConfig {
    #[serde(default)]
    pub housing: HousingPolicy,
    /// Ranges for every category except housing.
    #[serde(default)]
    pub ranges: BTreeMap<ExpenseCategory, ExpenseRange>,
    #[serde(default = "default_after_tax_rate")]
    pub after_tax_rate: f64,
    #[serde(default)]
    pub expense_palette: Vec<String>,
    #[serde(default)]
    pub income_palette: Vec<String>,
}

impl Default for ExpenseConfig {
    fn default() -> Self {
        let ranges = [
            (ExpenseCategory::Transportation, ExpenseRange::new(5000, 12000)),
            (ExpenseCategory::Childcare, ExpenseRange::new(3000, 10000)),
            (ExpenseCategory::Healthcare, ExpenseRange::new(2000, 6000)),
            (ExpenseCategory::Food, ExpenseRange::new(4000, 8000)),
            (ExpenseCategory::InternetMobile, ExpenseRange::new(900, 2400)),
            (ExpenseCategory::Civic, ExpenseRange::new(400, 1500)),
        ]
        .into_iter()
        .collect();
        Self {
            housing: HousingPolicy::default(),
            ranges,
            after_tax_rate: DEFAULT_AFTER_TAX_RATE,
            expense_palette: [
                "#4e79a7", "#f28e2b", "#e15759", "#76b7b2", "#59a14f", "#9c755f", "#ff9da7",
            ]
            .map(String::from)
            .to_vec(),
            income_palette: ["#8cd17d", "#b6992d"].map(String::from).to_vec(),
        }
    }
}

impl ExpenseConfig {
    #[must_use]
    pub fn load_from_static() -> Self {
        serde_json::from_str(DEFAULT_EXPENSE_DATA).unwrap_or_default()
    }

    /// Parse a configuration document.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse the embedded configuration and validate it.
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded JSON is malformed or fails validation.
    pub fn try_load_from_static() -> Result<Self, CoreError> {
        let config = Self::from_json(DEFAULT_EXPENSE_DATA)?;
        config.validate()?;
        Ok(config)
    }

    /// Check ranges, the after-tax rate, and palette sizes.
    ///
    /// # Errors
    ///
    /// Returns the first problem found.
    pub fn validate(&self) -> Result<(), CoreError> {
        if !(self.after_tax_rate > 0.0 && self.after_tax_rate <= 1.0) {
            return Err(CoreError::InvalidAfterTaxRate(self.after_tax_rate));
        }
        let housing = self.housing.bounds();
        if housing.is_inverted() {
            return Err(CoreError::InvertedRange {
                category: ExpenseCategory::Housing,
                min: housing.min,
                max: housing.max,
            });
        }
        for category in ExpenseCategory::ALL.into_iter().skip(1) {
            let range = self
                .ranges
                .get(&category)
                .ok_or(CoreError::MissingRange(category))?;
            if range.is_inverted() {
                return Err(CoreError::InvertedRange {
                    category,
                    min: range.min,
                    max: range.max,
                });
            }
        }
        if self.expense_palette.len() != ExpenseCategory::ALL.len() {
            return Err(CoreError::PaletteSize {
                name: "expense_palette",
                expected: ExpenseCategory::ALL.len(),
                found: self.expense_palette.len(),
            });
        }
        if self.income_palette.len() != 2 {
            return Err(CoreError::PaletteSize {
                name: "income_palette",
                expected: 2,
                found: self.income_palette.len(),
            });
        }
        Ok(())
    }

    /// Declared bounds for `category`, housing included.
    #[must_use]
    pub fn bounds(&self, category: ExpenseCategory) -> Option<ExpenseRange> {
        match category {
            ExpenseCategory::Housing => Some(self.housing.bounds()),
            other => self.ranges.get(&other).copied(),
        }
    }

    /// Generate one randomized breakdown.
    ///
    /// Categories missing from `ranges` contribute zero.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> ExpenseBreakdown {
        let mut amounts = [0_u64; 7];
        for category in ExpenseCategory::ALL {
            amounts[category.index()] = match category {
                ExpenseCategory::Housing => self.housing.annual(rng),
                other => self
                    .ranges
                    .get(&other)
                    .map_or(0, |range| random_cost(rng, *range)),
            };
        }
        ExpenseBreakdown { amounts }
    }
}

fn default_after_tax_rate() -> f64 {
    DEFAULT_AFTER_TAX_RATE
}

/// Annual amounts per category, in `ExpenseCategory::ALL` order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseBreakdown {
    amounts: [u64; 7],
}

impl ExpenseBreakdown {
    #[must_use]
    pub const fn from_amounts(amounts: [u64; 7]) -> Self {
        Self { amounts }
    }

    #[must_use]
    pub const fn get(&self, category: ExpenseCategory) -> u64 {
        self.amounts[category.index()]
    }

    #[must_use]
    pub const fn amounts(&self) -> &[u64; 7] {
        &self.amounts
    }

    pub fn iter(&self) -> impl Iterator<Item = (ExpenseCategory, u64)> + '_ {
        ExpenseCategory::ALL
            .into_iter()
            .map(|category| (category, self.get(category)))
    }

    #[must_use]
    pub fn total(&self) -> u64 {
        self.amounts.iter().sum()
    }
}

/// Gross income needed to cover a total after taxes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeSplit {
    pub after_tax: u64,
    pub taxes: u64,
}

impl IncomeSplit {
    #[must_use]
    pub fn from_total(total: u64, after_tax_rate: f64) -> Self {
        let required = required_income(total, after_tax_rate);
        Self {
            after_tax: total,
            taxes: required.saturating_sub(total),
        }
    }

    #[must_use]
    pub const fn required_income(&self) -> u64 {
        self.after_tax + self.taxes
    }
}

/// `round(total / after_tax_rate)`; a non-positive rate leaves the total as is.
#[must_use]
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn required_income(total: u64, after_tax_rate: f64) -> u64 {
    if after_tax_rate <= 0.0 || !after_tax_rate.is_finite() {
        return total;
    }
    (total as f64 / after_tax_rate).round() as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn static_config_matches_defaults() {
        let config = ExpenseConfig::load_from_static();
        assert_eq!(config, ExpenseConfig::default());
        config.validate().unwrap();
    }

    #[test]
    fn fixed_housing_is_annualized_rent() {
        let mut rng = ChaCha20Rng::seed_from_u64(7);
        let breakdown = ExpenseConfig::default().generate(&mut rng);
        assert_eq!(breakdown.get(ExpenseCategory::Housing), 3314 * 12);
    }

    #[test]
    fn randomized_housing_stays_in_bounds() {
        let config = ExpenseConfig {
            housing: HousingPolicy::Randomized {
                min: 24_000,
                max: 48_000,
            },
            ..ExpenseConfig::default()
        };
        let mut rng = ChaCha20Rng::seed_from_u64(11);
        for _ in 0..200 {
            let housing = config.generate(&mut rng).get(ExpenseCategory::Housing);
            assert!((24_000..=48_000).contains(&housing));
        }
    }

    #[test]
    fn random_cost_handles_degenerate_ranges() {
        let mut rng = ChaCha20Rng::seed_from_u64(3);
        assert_eq!(random_cost(&mut rng, ExpenseRange::new(5, 5)), 5);
        assert_eq!(random_cost(&mut rng, ExpenseRange::new(9, 2)), 9);
    }

    #[test]
    fn required_income_rounds_like_the_page() {
        assert_eq!(required_income(70, 0.7), 100);
        assert_eq!(required_income(65_000, 0.7), 92_857);
        assert_eq!(required_income(1, 0.7), 1);
        assert_eq!(required_income(500, 0.0), 500);
    }

    #[test]
    fn income_split_sums_to_required_income() {
        let split = IncomeSplit::from_total(61_234, 0.7);
        assert_eq!(split.required_income(), required_income(61_234, 0.7));
        assert_eq!(split.after_tax, 61_234);
    }

    #[test]
    fn validate_rejects_bad_configs() {
        let mut config = ExpenseConfig::default();
        config.after_tax_rate = 1.5;
        assert!(matches!(
            config.validate(),
            Err(CoreError::InvalidAfterTaxRate(_))
        ));

        let mut config = ExpenseConfig::default();
        config.ranges.remove(&ExpenseCategory::Food);
        assert!(matches!(
            config.validate(),
            Err(CoreError::MissingRange(ExpenseCategory::Food))
        ));

        let mut config = ExpenseConfig::default();
        config
            .ranges
            .insert(ExpenseCategory::Civic, ExpenseRange::new(10, 1));
        assert!(matches!(
            config.validate(),
            Err(CoreError::InvertedRange { .. })
        ));

        let mut config = ExpenseConfig::default();
        config.income_palette.pop();
        assert!(matches!(config.validate(), Err(CoreError::PaletteSize { .. })));
    }

    #[test]
    fn housing_policy_parses_from_tagged_json() {
        let fixed: HousingPolicy = serde_json::from_str(r#"{"kind":"fixed","monthly":2000}"#).unwrap();
        assert_eq!(fixed, HousingPolicy::Fixed { monthly: 2000 });
        let random: HousingPolicy =
            serde_json::from_str(r#"{"kind":"randomized","min":1,"max":2}"#).unwrap();
        assert_eq!(random, HousingPolicy::Randomized { min: 1, max: 2 });
    }
}

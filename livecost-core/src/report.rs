//! One submission's worth of placeholder figures, charts, and amenities.
use crate::amenities::{AmenityFixtures, AmenityLists};
use crate::chart::ChartSpec;
use crate::error::CoreError;
use crate::expenses::{ExpenseBreakdown, ExpenseCategory, ExpenseConfig, IncomeSplit};
use crate::submission::AddressSubmission;
use rand::Rng;

pub const COST_CHART_ID: &str = "costChart";
pub const INCOME_CHART_ID: &str = "incomeChart";
pub const INCOME_LABELS: [&str; 2] = ["After-Tax Income", "Taxes (Estimated)"];

#[derive(Debug, Clone, PartialEq)]
pub struct CostReport {
    pub submission: AddressSubmission,
    pub expenses: ExpenseBreakdown,
    pub income: IncomeSplit,
    pub expense_chart: ChartSpec,
    pub income_chart: ChartSpec,
    pub amenities: AmenityLists,
}

impl CostReport {
    /// Draw new figures for `submission`.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::MisalignedChart` when a configured palette does not
    /// match its chart's slice count.
    pub fn compute<R: Rng + ?Sized>(
        submission: AddressSubmission,
        config: &ExpenseConfig,
        fixtures: &AmenityFixtures,
        rng: &mut R,
    ) -> Result<Self, CoreError> {
        let expenses = config.generate(rng);
        let income = IncomeSplit::from_total(expenses.total(), config.after_tax_rate);
        let expense_chart = expense_chart(&expenses, config)?;
        let income_chart = income_chart(&income, config)?;
        let amenities = fixtures.build(&submission);
        Ok(Self {
            submission,
            expenses,
            income,
            expense_chart,
            income_chart,
            amenities,
        })
    }

    #[must_use]
    pub fn total(&self) -> u64 {
        self.expenses.total()
    }

    #[must_use]
    pub const fn required_income(&self) -> u64 {
        self.income.required_income()
    }

    pub fn charts(&self) -> [&ChartSpec; 2] {
        [&self.expense_chart, &self.income_chart]
    }
}

#[allow(clippy::cast_precision_loss)]
fn expense_chart(expenses: &ExpenseBreakdown, config: &ExpenseConfig) -> Result<ChartSpec, CoreError> {
    ChartSpec::new(
        COST_CHART_ID,
        ExpenseCategory::ALL
            .iter()
            .map(|c| c.label().to_string())
            .collect(),
        expenses.amounts().iter().map(|v| *v as f64).collect(),
        config.expense_palette.clone(),
    )
}

#[allow(clippy::cast_precision_loss)]
fn income_chart(income: &IncomeSplit, config: &ExpenseConfig) -> Result<ChartSpec, CoreError> {
    ChartSpec::new(
        INCOME_CHART_ID,
        INCOME_LABELS.iter().map(ToString::to_string).collect(),
        vec![income.after_tax as f64, income.taxes as f64],
        config.income_palette.clone(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::rng_from_seed;

    #[test]
    fn report_charts_follow_the_breakdown() {
        let mut rng = rng_from_seed(99);
        let report = CostReport::compute(
            AddressSubmission::from_raw("1 A St", "2 B St", "", "30"),
            &ExpenseConfig::default(),
            &AmenityFixtures::load_from_static(),
            &mut rng,
        )
        .unwrap();
        assert_eq!(report.expense_chart.canvas_id(), COST_CHART_ID);
        assert_eq!(report.expense_chart.labels().len(), 7);
        assert_eq!(report.expense_chart.labels()[5], "Internet & Mobile");
        #[allow(clippy::cast_precision_loss)]
        let total = report.total() as f64;
        assert!((report.expense_chart.total() - total).abs() < 0.5);
        #[allow(clippy::cast_precision_loss)]
        let required = report.required_income() as f64;
        assert!((report.income_chart.total() - required).abs() < 0.5);
        assert_eq!(report.submission.mpg, Some(30.0));
    }

    #[test]
    fn short_palette_is_reported() {
        let mut config = ExpenseConfig::default();
        config.expense_palette.truncate(3);
        let mut rng = rng_from_seed(1);
        let err = CostReport::compute(
            AddressSubmission::default(),
            &config,
            &AmenityFixtures::default(),
            &mut rng,
        )
        .unwrap_err();
        assert!(matches!(err, CoreError::MisalignedChart { colors: 3, .. }));
    }
}

use crate::expenses::ExpenseCategory;

/// Errors raised while validating configuration or assembling chart data.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("chart `{canvas_id}` has {labels} labels, {data} values and {colors} colors")]
    MisalignedChart {
        canvas_id: String,
        labels: usize,
        data: usize,
        colors: usize,
    },
    #[error("range for {category:?} is inverted: {min} > {max}")]
    InvertedRange {
        category: ExpenseCategory,
        min: u64,
        max: u64,
    },
    #[error("no range configured for {0:?}")]
    MissingRange(ExpenseCategory),
    #[error("after-tax rate {0} must be within (0, 1]")]
    InvalidAfterTaxRate(f64),
    #[error("palette `{name}` needs {expected} colors, found {found}")]
    PaletteSize {
        name: &'static str,
        expected: usize,
        found: usize,
    },
    #[error("configuration parse error: {0}")]
    Config(#[from] serde_json::Error),
}

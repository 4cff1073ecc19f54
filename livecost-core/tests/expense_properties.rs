use livecost_core::{
    ExpenseCategory, ExpenseConfig, HousingPolicy, IncomeSplit, labels_with_percent,
    required_income, rng_from_seed,
};
use proptest::prelude::*;

fn shown_percent(label: &str) -> i64 {
    label
        .rsplit(' ')
        .next()
        .and_then(|p| p.trim_end_matches('%').parse().ok())
        .unwrap_or(-1)
}

proptest! {
    #[test]
    fn generated_values_stay_within_declared_bounds(seed in any::<u64>()) {
        let config = ExpenseConfig::load_from_static();
        let mut rng = rng_from_seed(seed);
        let breakdown = config.generate(&mut rng);
        for (category, value) in breakdown.iter() {
            let bounds = config.bounds(category).unwrap();
            prop_assert!(bounds.contains(value), "{category:?} = {value} outside {bounds:?}");
        }
        prop_assert_eq!(breakdown.total(), breakdown.amounts().iter().sum::<u64>());
    }

    #[test]
    fn randomized_housing_is_bounded_too(seed in any::<u64>(), min in 0_u64..50_000, span in 0_u64..50_000) {
        let config = ExpenseConfig {
            housing: HousingPolicy::Randomized { min, max: min + span },
            ..ExpenseConfig::default()
        };
        let mut rng = rng_from_seed(seed);
        let housing = config.generate(&mut rng).get(ExpenseCategory::Housing);
        prop_assert!(housing >= min && housing <= min + span);
    }

    #[test]
    fn income_split_always_sums_to_required_income(total in 0_u64..10_000_000) {
        let split = IncomeSplit::from_total(total, 0.7);
        prop_assert_eq!(split.after_tax + split.taxes, required_income(total, 0.7));
        prop_assert!(split.required_income() >= total);
    }

    #[test]
    fn percent_labels_stay_within_rounding_of_one_hundred(
        data in prop::collection::vec(1_u32..100_000, 1..8)
    ) {
        let labels: Vec<String> = (0..data.len()).map(|i| format!("L{i}")).collect();
        let values: Vec<f64> = data.iter().map(|v| f64::from(*v)).collect();
        let shown: i64 = labels_with_percent(&labels, &values)
            .iter()
            .map(|l| shown_percent(l))
            .sum();
        let slack = i64::try_from(data.len()).unwrap();
        prop_assert!((shown - 100).abs() <= slack, "sum {shown}");
    }
}

#[test]
fn page_palette_percentages_sum_to_one_hundred() {
    let labels = ["Housing", "Transportation", "Childcare", "Healthcare", "Food", "Internet & Mobile", "Civic"];
    let data = [39_768.0, 8_000.0, 6_000.0, 4_000.0, 6_000.0, 1_500.0, 1_000.0];
    let shown: i64 = labels_with_percent(&labels, &data)
        .iter()
        .map(|l| shown_percent(l))
        .sum();
    assert_eq!(shown, 100);
}

#[test]
fn zero_total_shows_zero_percent_everywhere() {
    let labels = ["After-Tax Income", "Taxes (Estimated)"];
    let shown = labels_with_percent(&labels, &[0.0, 0.0]);
    assert_eq!(shown, vec!["After-Tax Income — 0%", "Taxes (Estimated) — 0%"]);
}

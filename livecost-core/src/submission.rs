use serde::{Deserialize, Serialize};

/// Trimmed values from the address form.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AddressSubmission {
    pub home_address: String,
    pub work_address: String,
    pub second_work_address: String,
    pub mpg: Option<f64>,
}

impl AddressSubmission {
    #[must_use]
    pub fn from_raw(home: &str, work: &str, second_work: &str, mpg: &str) -> Self {
        Self {
            home_address: home.trim().to_string(),
            work_address: work.trim().to_string(),
            second_work_address: second_work.trim().to_string(),
            mpg: parse_mpg(mpg),
        }
    }

    #[must_use]
    pub fn has_second_work(&self) -> bool {
        !self.second_work_address.is_empty()
    }
}

/// Positive, finite miles-per-gallon; anything else counts as not given.
#[must_use]
pub fn parse_mpg(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|mpg| mpg.is_finite() && *mpg > 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_values_are_trimmed() {
        let sub = AddressSubmission::from_raw("  1 Main St ", "42 Example Rd\n", "   ", " 31.5 ");
        assert_eq!(sub.home_address, "1 Main St");
        assert_eq!(sub.work_address, "42 Example Rd");
        assert!(!sub.has_second_work());
        assert_eq!(sub.mpg, Some(31.5));
    }

    #[test]
    fn mpg_rejects_junk() {
        assert_eq!(parse_mpg(""), None);
        assert_eq!(parse_mpg("fast"), None);
        assert_eq!(parse_mpg("-4"), None);
        assert_eq!(parse_mpg("0"), None);
        assert_eq!(parse_mpg("NaN"), None);
        assert_eq!(parse_mpg("28"), Some(28.0));
    }
}

//! Chart.js pie configuration as serde structs.
use livecost_core::ChartSpec;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieConfig {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub data: PieData,
    pub options: PieOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieData {
    pub labels: Vec<String>,
    pub datasets: Vec<PieDataset>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PieDataset {
    pub data: Vec<f64>,
    pub background_color: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PieOptions {
    pub responsive: bool,
    pub maintain_aspect_ratio: bool,
    pub plugins: Plugins,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Plugins {
    pub legend: Legend,
    pub tooltip: Tooltip,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    pub position: &'static str,
    pub labels: LegendLabels,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendLabels {
    pub color: String,
}

/// The label callback is attached after serialization; only the container
/// object is emitted here.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Tooltip {
    pub callbacks: TooltipCallbacks,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct TooltipCallbacks {}

/// Path to the legend label options inside a live chart's `options`.
pub const LEGEND_LABELS_PATH: [&str; 3] = ["plugins", "legend", "labels"];
/// Path to the tooltip callbacks inside a chart config.
pub const TOOLTIP_CALLBACKS_PATH: [&str; 4] = ["options", "plugins", "tooltip", "callbacks"];

impl PieConfig {
    #[must_use]
    pub fn from_spec(spec: &ChartSpec, legend_color: &str) -> Self {
        Self {
            kind: "pie",
            data: PieData {
                labels: spec.display_labels(),
                datasets: vec![PieDataset {
                    data: spec.data().to_vec(),
                    background_color: spec.colors().to_vec(),
                }],
            },
            options: PieOptions {
                responsive: true,
                maintain_aspect_ratio: false,
                plugins: Plugins {
                    legend: Legend {
                        position: "bottom",
                        labels: LegendLabels {
                            color: legend_color.to_string(),
                        },
                    },
                    tooltip: Tooltip::default(),
                },
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn spec() -> ChartSpec {
        ChartSpec::new(
            "incomeChart",
            vec!["After-Tax Income".into(), "Taxes (Estimated)".into()],
            vec![70.0, 30.0],
            vec!["#8cd17d".into(), "#b6992d".into()],
        )
        .unwrap()
    }

    #[test]
    fn config_matches_chartjs_shape() {
        let value = serde_json::to_value(PieConfig::from_spec(&spec(), "#333333")).unwrap();
        assert_eq!(value["type"], "pie");
        assert_eq!(value["options"]["responsive"], json!(true));
        assert_eq!(value["options"]["maintainAspectRatio"], json!(false));
        assert_eq!(value["options"]["plugins"]["legend"]["position"], "bottom");
        assert_eq!(
            value["options"]["plugins"]["legend"]["labels"]["color"],
            "#333333"
        );
        assert_eq!(
            value["data"]["datasets"][0]["backgroundColor"],
            json!(["#8cd17d", "#b6992d"])
        );
        assert!(value["options"]["plugins"]["tooltip"]["callbacks"].is_object());
    }

    #[test]
    fn labels_carry_percentages() {
        let config = PieConfig::from_spec(&spec(), "#eeeeee");
        assert_eq!(
            config.data.labels,
            vec!["After-Tax Income — 70%", "Taxes (Estimated) — 30%"]
        );
        assert_eq!(config.data.datasets[0].data, vec![70.0, 30.0]);
    }
}

//! Pie chart data, percentage labels, and the per-canvas chart registry.
use crate::error::CoreError;
use crate::format::format_number;
use serde::Serialize;
use std::collections::BTreeMap;

/// Separates a label from its percentage suffix.
pub const PERCENT_SEPARATOR: char = '—';
/// Legend text color when the page color is unknown and the scheme is light.
pub const LIGHT_LEGEND_COLOR: &str = "#333333";
/// Legend text color when the page color is unknown and the scheme is dark.
pub const DARK_LEGEND_COLOR: &str = "#eeeeee";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

impl ColorScheme {
    #[must_use]
    pub const fn from_prefers_dark(prefers_dark: bool) -> Self {
        if prefers_dark { Self::Dark } else { Self::Light }
    }
}

/// Legend color: the computed body text color when there is one, otherwise
/// the scheme's fallback.
#[must_use]
pub fn legend_color(computed: Option<&str>, scheme: ColorScheme) -> String {
    match computed.map(str::trim) {
        Some(color) if !color.is_empty() => color.to_string(),
        _ => match scheme {
            ColorScheme::Light => LIGHT_LEGEND_COLOR.to_string(),
            ColorScheme::Dark => DARK_LEGEND_COLOR.to_string(),
        },
    }
}

/// Non-finite values count as zero.
#[must_use]
pub fn sanitize_value(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}

fn sum_values(data: &[f64]) -> f64 {
    data.iter().copied().map(sanitize_value).sum()
}

/// `round(value / total * 100)`, or 0 when the total is 0.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn percent_of(value: f64, total: f64) -> i64 {
    let total = sanitize_value(total);
    if total == 0.0 {
        return 0;
    }
    (sanitize_value(value) / total * 100.0).round() as i64
}

/// Suffix each label with its share of the data total: `Food — 12%`.
///
/// Labels without a matching data entry are treated as zero.
#[must_use]
pub fn labels_with_percent<S: AsRef<str>>(labels: &[S], data: &[f64]) -> Vec<String> {
    let total = sum_values(data);
    labels
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let value = data.get(i).copied().unwrap_or(0.0);
            let pct = percent_of(value, total);
            format!("{} {PERCENT_SEPARATOR} {pct}%", label.as_ref())
        })
        .collect()
}

/// Label with any percentage suffix removed.
#[must_use]
pub fn base_label(label: &str) -> &str {
    label
        .split(PERCENT_SEPARATOR)
        .next()
        .unwrap_or_default()
        .trim()
}

/// Tooltip text recomputed from the live dataset: `Food: 6,120 (10%)`.
#[must_use]
pub fn tooltip_label(label: &str, value: f64, dataset: &[f64]) -> String {
    let value = sanitize_value(value);
    let pct = percent_of(value, sum_values(dataset));
    format!("{}: {} ({pct}%)", base_label(label), format_number(value))
}

/// Positionally aligned inputs for one pie chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    canvas_id: String,
    labels: Vec<String>,
    data: Vec<f64>,
    colors: Vec<String>,
}

impl ChartSpec {
    /// # Errors
    ///
    /// Returns `CoreError::MisalignedChart` when the three lists differ in length.
    pub fn new(
        canvas_id: impl Into<String>,
        labels: Vec<String>,
        data: Vec<f64>,
        colors: Vec<String>,
    ) -> Result<Self, CoreError> {
        let canvas_id = canvas_id.into();
        if labels.len() != data.len() || labels.len() != colors.len() {
            return Err(CoreError::MisalignedChart {
                canvas_id,
                labels: labels.len(),
                data: data.len(),
                colors: colors.len(),
            });
        }
        let data = data.into_iter().map(sanitize_value).collect();
        Ok(Self {
            canvas_id,
            labels,
            data,
            colors,
        })
    }

    #[must_use]
    pub fn canvas_id(&self) -> &str {
        &self.canvas_id
    }

    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    #[must_use]
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    #[must_use]
    pub fn colors(&self) -> &[String] {
        &self.colors
    }

    #[must_use]
    pub fn total(&self) -> f64 {
        sum_values(&self.data)
    }

    #[must_use]
    pub fn display_labels(&self) -> Vec<String> {
        labels_with_percent(&self.labels, &self.data)
    }
}

/// A live chart bound to a canvas.
pub trait ChartHandle {
    /// Release the rendering context; the handle is not used afterwards.
    fn destroy(&mut self);
    fn set_legend_color(&mut self, color: &str);
    /// Request a redraw after option changes.
    fn update(&mut self);
}

/// At most one live chart per canvas id.
pub struct ChartRegistry<H: ChartHandle> {
    charts: BTreeMap<String, H>,
}

impl<H: ChartHandle> Default for ChartRegistry<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: ChartHandle> ChartRegistry<H> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            charts: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn get(&self, canvas_id: &str) -> Option<&H> {
        self.charts.get(canvas_id)
    }

    #[must_use]
    pub fn contains(&self, canvas_id: &str) -> bool {
        self.charts.contains_key(canvas_id)
    }

    pub fn get_mut(&mut self, canvas_id: &str) -> Option<&mut H> {
        self.charts.get_mut(canvas_id)
    }

    /// Bind `handle` to `canvas_id`, destroying whatever was bound before.
    /// Returns `true` when an earlier chart was replaced.
    pub fn insert(&mut self, canvas_id: impl Into<String>, handle: H) -> bool {
        match self.charts.insert(canvas_id.into(), handle) {
            Some(mut previous) => {
                previous.destroy();
                true
            }
            None => false,
        }
    }

    /// Destroy the chart on `canvas_id` first, then bind whatever `create`
    /// returns. Canvas-backed libraries refuse a second chart on a busy
    /// canvas, so the old one must be gone before the new one is built.
    pub fn rebuild<F>(&mut self, canvas_id: &str, create: F) -> bool
    where
        F: FnOnce() -> Option<H>,
    {
        self.destroy(canvas_id);
        match create() {
            Some(handle) => {
                self.charts.insert(canvas_id.to_string(), handle);
                true
            }
            None => false,
        }
    }

    /// Returns `true` when a chart was bound to `canvas_id`.
    pub fn destroy(&mut self, canvas_id: &str) -> bool {
        self.charts.remove(canvas_id).is_some_and(|mut chart| {
            chart.destroy();
            true
        })
    }

    pub fn clear(&mut self) {
        for (_, mut chart) in std::mem::take(&mut self.charts) {
            chart.destroy();
        }
    }

    /// Push a legend color into every live chart and redraw it.
    pub fn restyle_legends(&mut self, color: &str) -> usize {
        for chart in self.charts.values_mut() {
            chart.set_legend_color(color);
            chart.update();
        }
        self.charts.len()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.charts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.charts.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.charts.keys().map(String::as_str)
    }
}

impl<H: ChartHandle> Drop for ChartRegistry<H> {
    fn drop(&mut self) {
        self.clear();
    }
}

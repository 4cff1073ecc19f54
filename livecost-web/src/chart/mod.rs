//! Chart.js instances behind the core `ChartHandle` seam.
//!
//! Chart.js is loaded as a page script and reached through the global
//! `Chart` constructor. Each live chart owns the tooltip closure it was
//! configured with, so the callback stays valid for the chart's lifetime.
pub mod config;

use crate::dom::js_error_message;
use config::{LEGEND_LABELS_PATH, PieConfig, TOOLTIP_CALLBACKS_PATH};
use js_sys::{Array, Function, Object, Reflect};
use livecost_core::{ChartHandle, ChartSpec, tooltip_label};
use serde::Serialize;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlCanvasElement;

#[derive(Debug, thiserror::Error)]
pub enum ChartError {
    #[error("canvas `{0}` is not in the document")]
    MissingCanvas(String),
    #[error("canvas `{0}` has no 2d context")]
    NoContext(String),
    #[error("Chart.js is not loaded")]
    LibraryMissing,
    #[error("chart config for `{id}` could not be serialized: {message}")]
    Config { id: String, message: String },
    #[error("Chart.js rejected `{id}`: {message}")]
    Js { id: String, message: String },
}

type TooltipCallback = Closure<dyn Fn(JsValue) -> JsValue>;

fn key(name: &str) -> JsValue {
    JsValue::from_str(name)
}

fn call_method(target: &JsValue, name: &str) -> Result<JsValue, JsValue> {
    let method: Function = Reflect::get(target, &key(name))?.dyn_into()?;
    method.call0(target)
}

/// Walk `path` from `root`, creating empty objects for missing links.
fn object_at(root: &JsValue, path: &[&str]) -> Result<JsValue, JsValue> {
    let mut current = root.clone();
    for name in path {
        let mut next = Reflect::get(&current, &key(name))?;
        if !next.is_object() {
            next = Object::new().into();
            Reflect::set(&current, &key(name), &next)?;
        }
        current = next;
    }
    Ok(current)
}

fn dataset_values(ctx: &JsValue) -> Vec<f64> {
    Reflect::get(ctx, &key("dataset"))
        .and_then(|dataset| Reflect::get(&dataset, &key("data")))
        .ok()
        .and_then(|data| data.dyn_into::<Array>().ok())
        .map(|data| {
            data.iter()
                .map(|value| value.as_f64().unwrap_or(0.0))
                .collect()
        })
        .unwrap_or_default()
}

fn tooltip_callback() -> TooltipCallback {
    Closure::wrap(Box::new(|ctx: JsValue| {
        let label = Reflect::get(&ctx, &key("label"))
            .ok()
            .and_then(|label| label.as_string())
            .unwrap_or_default();
        let value = Reflect::get(&ctx, &key("parsed"))
            .ok()
            .and_then(|parsed| parsed.as_f64())
            .unwrap_or(0.0);
        JsValue::from_str(&tooltip_label(&label, value, &dataset_values(&ctx)))
    }) as Box<dyn Fn(JsValue) -> JsValue>)
}

fn chart_constructor() -> Option<Function> {
    let win = crate::dom::window()?;
    Reflect::get(&win, &key("Chart"))
        .ok()?
        .dyn_into::<Function>()
        .ok()
}

pub struct JsChart {
    instance: JsValue,
    _tooltip: TooltipCallback,
    destroyed: bool,
}

impl JsChart {
    /// Build a pie chart on the canvas named by `spec`.
    ///
    /// # Errors
    ///
    /// Returns an error when the canvas or Chart.js is missing, or when
    /// Chart.js throws while constructing the chart.
    pub fn create(spec: &ChartSpec, legend_color: &str) -> Result<Self, ChartError> {
        let id = spec.canvas_id();
        let js = |err: JsValue| ChartError::Js {
            id: id.to_string(),
            message: js_error_message(&err),
        };

        let canvas = crate::dom::document()
            .and_then(|doc| doc.get_element_by_id(id))
            .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
            .ok_or_else(|| ChartError::MissingCanvas(id.to_string()))?;
        let context = canvas
            .get_context("2d")
            .map_err(js)?
            .ok_or_else(|| ChartError::NoContext(id.to_string()))?;

        let config = PieConfig::from_spec(spec, legend_color)
            .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
            .map_err(|err| ChartError::Config {
                id: id.to_string(),
                message: err.to_string(),
            })?;
        let tooltip = tooltip_callback();
        let callbacks = object_at(&config, &TOOLTIP_CALLBACKS_PATH).map_err(js)?;
        Reflect::set(&callbacks, &key("label"), tooltip.as_ref()).map_err(js)?;

        let constructor = chart_constructor().ok_or(ChartError::LibraryMissing)?;
        let instance =
            Reflect::construct(&constructor, &Array::of2(&context, &config)).map_err(js)?;
        Ok(Self {
            instance,
            _tooltip: tooltip,
            destroyed: false,
        })
    }
}

impl ChartHandle for JsChart {
    fn destroy(&mut self) {
        if self.destroyed {
            return;
        }
        self.destroyed = true;
        if let Err(err) = call_method(&self.instance, "destroy") {
            log::warn!("chart destroy failed: {}", js_error_message(&err));
        }
    }

    fn set_legend_color(&mut self, color: &str) {
        let result = Reflect::get(&self.instance, &key("options"))
            .and_then(|options| object_at(&options, &LEGEND_LABELS_PATH))
            .and_then(|labels| Reflect::set(&labels, &key("color"), &JsValue::from_str(color)));
        if let Err(err) = result {
            log::warn!("legend color not applied: {}", js_error_message(&err));
        }
    }

    fn update(&mut self) {
        if self.destroyed {
            return;
        }
        if let Err(err) = call_method(&self.instance, "update") {
            log::warn!("chart update failed: {}", js_error_message(&err));
        }
    }
}

impl Drop for JsChart {
    fn drop(&mut self) {
        self.destroy();
    }
}

/// Chart factory for the page controller. Failures are reported to the
/// console and leave the canvas empty.
#[must_use]
pub fn draw(spec: &ChartSpec, legend_color: &str) -> Option<JsChart> {
    match JsChart::create(spec, legend_color) {
        Ok(chart) => Some(chart),
        Err(ChartError::MissingCanvas(id)) => {
            log::debug!("no canvas `{id}`, chart skipped");
            None
        }
        Err(err) => {
            crate::dom::console_error(&err.to_string());
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_name_the_canvas() {
        assert_eq!(
            ChartError::MissingCanvas("costChart".into()).to_string(),
            "canvas `costChart` is not in the document"
        );
        let js = ChartError::Js {
            id: "incomeChart".into(),
            message: "Canvas is already in use".into(),
        };
        assert!(js.to_string().contains("incomeChart"));
    }
}

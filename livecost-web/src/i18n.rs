//! UI strings and locale-aware number formatting.
use serde_json::Value;
use std::collections::BTreeMap;

#[cfg(target_arch = "wasm32")]
use js_sys::{Array, Function, Intl, Object};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;

const LOCALE: &str = "en-US";
const EN_STRINGS: &str = include_str!("../static/i18n/en.json");

thread_local! {
    static STRINGS: Value = serde_json::from_str(EN_STRINGS).unwrap_or(Value::Null);
}

fn get_nested_value<'a>(obj: &'a Value, key: &str) -> Option<&'a Value> {
    let mut current = obj;
    for k in key.split('.') {
        current = current.get(k)?;
    }
    Some(current)
}

fn render_value(value: &Value, args: Option<&BTreeMap<&str, &str>>) -> Option<String> {
    let mut text = value.as_str()?.to_string();
    if let Some(args_map) = args {
        for (k, v) in args_map {
            text = text.replace(&format!("{{{k}}}"), v);
        }
    }
    Some(text)
}

/// Translate a key. Missing keys come back unchanged.
#[must_use]
pub fn t(key: &str) -> String {
    tr(key, None)
}

/// Translate a key, replacing `{name}` placeholders from `args`.
#[must_use]
pub fn tr(key: &str, args: Option<&BTreeMap<&str, &str>>) -> String {
    STRINGS
        .with(|strings| get_nested_value(strings, key).and_then(|v| render_value(v, args)))
        .unwrap_or_else(|| key.to_string())
}

/// Format a number using the page locale via Intl
#[must_use]
pub fn fmt_number(num: f64) -> String {
    #[cfg(target_arch = "wasm32")]
    {
        let locales = Array::new();
        locales.push(&JsValue::from_str(LOCALE));
        let nf = Intl::NumberFormat::new(&locales, &Object::new());
        let format_fn: Function = nf.format();
        format_fn
            .call1(&nf, &JsValue::from_f64(num))
            .ok()
            .and_then(|v| v.as_string())
            .unwrap_or_else(|| livecost_core::format_number(num))
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = LOCALE;
        livecost_core::format_number(num)
    }
}

/// Whole-dollar amount for a card, e.g. `$46,123`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn fmt_currency(amount: u64) -> String {
    format!("${}", fmt_number(amount as f64))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_keys_resolve() {
        assert_eq!(t("form.submit"), "Calculate");
        assert_eq!(t("expenses.internet_mobile"), "Internet & Mobile");
    }

    #[test]
    fn missing_keys_echo_back() {
        assert_eq!(t("nope.missing"), "nope.missing");
        assert_eq!(t("form"), "form");
    }

    #[test]
    fn placeholders_are_substituted() {
        let mut vars = BTreeMap::new();
        vars.insert("mpg", "28");
        assert_eq!(
            tr("expenses.mpg_note", Some(&vars)),
            "Fuel economy assumption: 28 MPG"
        );
    }

    #[test]
    fn currency_matches_card_format() {
        assert_eq!(fmt_currency(39_768), "$39,768");
        assert_eq!(fmt_currency(0), "$0");
    }
}

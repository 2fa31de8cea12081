// Small helpers shared by the views and the store
use chrono::{Locale, NaiveDate};

pub fn clog(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::log_1(&wasm_bindgen::JsValue::from_str(msg));
    #[cfg(not(target_arch = "wasm32"))]
    let _ = msg; // console only exists in the browser
}

pub fn cwarn(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::warn_1(&wasm_bindgen::JsValue::from_str(msg));
    #[cfg(not(target_arch = "wasm32"))]
    let _ = msg;
}

/// Formats a `YYYY-MM-DD` date as `01 Mayıs 24`. Anything unparseable is shown as entered.
pub fn format_note_date(raw: &str) -> String {
    let parsed = NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0));
    match parsed {
        Some(dt) => dt
            .and_utc()
            .format_localized("%d %B %y", Locale::tr_TR)
            .to_string(),
        None => raw.to_string(),
    }
}

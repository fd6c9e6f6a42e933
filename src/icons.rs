use dioxus::prelude::*;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{JsCast, JsValue};

use crate::timers::{periodic_supported, sleep_ms};

pub const FEATHER_SCRIPT: &str = "https://unpkg.com/feather-icons@4.29.2/dist/feather.min.js";
const RETRY_DELAY_MS: u32 = 100;
const MAX_RETRIES: u32 = 50;

/// Wait before looking for `window.feather` again, or `None` once it is time to give up.
fn retry_delay(attempt: u32) -> Option<u32> {
    (attempt < MAX_RETRIES).then_some(RETRY_DELAY_MS)
}

/// Feather placeholder. The wrapper span is what the virtual DOM owns, so
/// swapping the inner `<i>` for an `<svg>` never orphans a node on removal.
#[component]
pub fn Icon(name: &'static str, class: Option<&'static str>) -> Element {
    let class = class.unwrap_or("w-5 h-5");
    rsx! {
        span { class: "icon-slot",
            i { "data-feather": name, class: "{class}" }
        }
    }
}

/// Re-renders icon placeholders currently in the tree.
///
/// Called after any mutation that adds placeholders. Returns false while the
/// feather script is not available yet.
pub fn refresh_icons() -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        match try_refresh_icons() {
            Ok(()) => true,
            Err(message) => {
                tracing::debug!("icons: {message}");
                false
            }
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        false
    }
}

#[cfg(target_arch = "wasm32")]
fn try_refresh_icons() -> Result<(), String> {
    let window = web_sys::window().ok_or_else(|| "window missing".to_string())?;
    let feather = js_sys::Reflect::get(&window, &JsValue::from_str("feather"))
        .map_err(|_| "feather missing".to_string())?;
    if feather.is_undefined() || feather.is_null() {
        return Err("feather missing".to_string());
    }
    let replace = js_sys::Reflect::get(&feather, &JsValue::from_str("replace"))
        .map_err(|_| "feather.replace missing".to_string())?;
    let replace = replace
        .dyn_ref::<js_sys::Function>()
        .ok_or_else(|| "feather.replace is not callable".to_string())?;
    replace
        .call0(&feather)
        .map_err(|_| "feather.replace failed".to_string())?;
    Ok(())
}

/// Runs [`refresh_icons`] after mount and whenever a signal read by `track` changes.
pub fn use_icon_refresh(track: impl Fn() + 'static) {
    use_effect(move || {
        track();
        refresh_icons();
    });
}

/// Loads the feather script and renders every placeholder once it is ready.
///
/// The script loads asynchronously, so besides `onload` the placeholders are
/// retried for a few seconds in case the load event fired before mounting.
#[component]
pub fn IconScript() -> Element {
    use_hook(|| {
        if !periodic_supported() {
            return;
        }
        spawn(async move {
            let mut attempt = 0;
            while !refresh_icons() {
                let Some(delay) = retry_delay(attempt) else {
                    tracing::warn!("icons: feather never loaded, keeping placeholders");
                    return;
                };
                sleep_ms(delay).await;
                attempt += 1;
            }
        });
    });

    rsx! {
        script {
            src: FEATHER_SCRIPT,
            defer: true,
            onload: move |_| {
                refresh_icons();
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn retries_are_bounded() {
        assert_eq!(retry_delay(0), Some(RETRY_DELAY_MS));
        assert_eq!(retry_delay(MAX_RETRIES - 1), Some(RETRY_DELAY_MS));
        assert_eq!(retry_delay(MAX_RETRIES), None);
        let waited: u32 = (0..).map_while(retry_delay).sum();
        assert_eq!(waited, MAX_RETRIES * RETRY_DELAY_MS);
    }

    #[test]
    fn refresh_reports_missing_feather() {
        assert!(!refresh_icons());
    }
}

//! Thin wrappers over the browser globals the page touches.
//!
//! Every helper is a no-op (or reports "unavailable") off the web target so
//! the components above stay free of `cfg` noise where possible.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;

#[cfg(target_arch = "wasm32")]
fn document() -> Option<web_sys::Document> {
    web_sys::window().and_then(|window| window.document())
}

/// Adds or removes `class` on the `<html>` element.
pub fn set_root_class(class: &str, enabled: bool) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(root) = document().and_then(|document| document.document_element()) else {
            return;
        };
        let classes = root.class_list();
        let _ = if enabled {
            classes.add_1(class)
        } else {
            classes.remove_1(class)
        };
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (class, enabled);
    }
}

/// Adds or removes `class` on `<body>`.
pub fn set_body_class(class: &str, enabled: bool) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(body) = document().and_then(|document| document.body()) else {
            return;
        };
        let classes = body.class_list();
        let _ = if enabled {
            classes.add_1(class)
        } else {
            classes.remove_1(class)
        };
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (class, enabled);
    }
}

pub fn prefers_dark_scheme() -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|window| window.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .map(|query| query.matches())
            .unwrap_or(false)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        false
    }
}

pub fn intersection_observer_supported() -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .map(|window| {
                js_sys::Reflect::has(&window, &JsValue::from_str("IntersectionObserver"))
                    .unwrap_or(false)
            })
            .unwrap_or(false)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        false
    }
}

#[cfg(target_arch = "wasm32")]
pub fn local_storage() -> Result<web_sys::Storage, String> {
    let window = web_sys::window().ok_or_else(|| "window missing".to_string())?;
    window
        .local_storage()
        .map_err(|err| format!("localStorage blocked: {err:?}"))?
        .ok_or_else(|| "localStorage disabled".to_string())
}

pub fn scroll_y() -> f64 {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|window| window.scroll_y().ok())
            .unwrap_or(0.0)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        0.0
    }
}

pub fn smooth_scroll_to(top: f64) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let options = web_sys::ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = top;
    }
}

/// Document-relative top offset of the element with `id`.
pub fn element_offset_top(id: &str) -> Option<f64> {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        let element = document()?.get_element_by_id(id)?;
        let element: web_sys::HtmlElement = element.dyn_into().ok()?;
        Some(f64::from(element.offset_top()))
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = id;
        None
    }
}

/// Reassigns an iframe's own `src`, which stops whatever it was playing.
pub fn reload_iframe(id: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        let Some(frame) = document()
            .and_then(|document| document.get_element_by_id(id))
            .and_then(|element| element.dyn_into::<web_sys::HtmlIFrameElement>().ok())
        else {
            return;
        };
        frame.set_src(&frame.src());
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = id;
    }
}

use dioxus::prelude::*;
#[cfg(target_arch = "wasm32")]
use dioxus::web::WebEventExt;
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{JsCast, JsValue};

use crate::config::LandingConfig;
use crate::dom;

/// Viewport insets in percent, applied before intersection is computed.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EdgeMargin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealOptions {
    pub trigger_fraction: f64,
    pub edge_margin: EdgeMargin,
}

impl RevealOptions {
    pub fn with_threshold(trigger_fraction: f64) -> Self {
        Self {
            trigger_fraction,
            edge_margin: EdgeMargin::default(),
        }
    }

    /// Insets become negative root margins (CSS shorthand order).
    pub fn root_margin(&self) -> String {
        let margin = self.edge_margin;
        [margin.top, margin.right, margin.bottom, margin.left]
            .into_iter()
            .map(|inset| {
                if inset == 0.0 {
                    "0%".to_string()
                } else {
                    format!("{}%", -inset)
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn clamped_threshold(&self) -> f64 {
        self.trigger_fraction.clamp(0.0, 1.0)
    }
}

/// One-way "has been seen" flag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealState {
    revealed: bool,
}

impl RevealState {
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Returns true only for the first intersecting observation.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        if self.revealed || !intersecting {
            return false;
        }
        self.revealed = true;
        true
    }
}

#[cfg(target_arch = "wasm32")]
struct ObserverHandle {
    observer: web_sys::IntersectionObserver,
    _closure: Rc<wasm_bindgen::closure::Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>>,
}

/// Watches the mounted element and flips the returned state once it is seen.
///
/// Without `IntersectionObserver` the state starts revealed.
pub fn use_reveal(options: RevealOptions) -> (Signal<RevealState>, Callback<MountedEvent>) {
    let state = use_signal(|| {
        let mut state = RevealState::default();
        if !dom::intersection_observer_supported() {
            state.observe(true);
        }
        state
    });
    #[cfg(target_arch = "wasm32")]
    let mut target = use_signal(|| None::<web_sys::Element>);
    #[cfg(target_arch = "wasm32")]
    let mut observer_handle = use_signal(|| None::<ObserverHandle>);

    #[cfg(target_arch = "wasm32")]
    use_effect(move || {
        use wasm_bindgen::closure::Closure;

        let Some(element) = target.read().as_ref().cloned() else {
            return;
        };
        if observer_handle.peek().is_some() || state.peek().is_revealed() {
            return;
        }
        let mut state = state;
        let closure = Rc::new(Closure::wrap(Box::new(
            move |entries: js_sys::Array, _observer: web_sys::IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: web_sys::IntersectionObserverEntry = entry.unchecked_into();
                    if state.peek().is_revealed() {
                        return;
                    }
                    if state.write().observe(entry.is_intersecting()) {
                        tracing::debug!("reveal: element entered view");
                    }
                }
            },
        )
            as Box<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>));
        let init = web_sys::IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.clamped_threshold()));
        init.set_root_margin(&options.root_margin());
        let Ok(observer) = web_sys::IntersectionObserver::new_with_options(
            closure.as_ref().as_ref().unchecked_ref(),
            &init,
        ) else {
            tracing::warn!("reveal: observer rejected options, revealing now");
            state.write().observe(true);
            return;
        };
        observer.observe(&element);
        observer_handle.set(Some(ObserverHandle {
            observer,
            _closure: closure,
        }));
    });

    #[cfg(target_arch = "wasm32")]
    use_drop(move || {
        if let Some(handle) = observer_handle.read().as_ref() {
            handle.observer.disconnect();
        }
    });

    #[cfg(not(target_arch = "wasm32"))]
    let _ = options;

    let on_mounted = use_callback(move |_event: MountedEvent| {
        #[cfg(target_arch = "wasm32")]
        {
            let element = _event.data.as_ref().as_web_event();
            target.set(Some(element));
        }
    });

    (state, on_mounted)
}

/// A page section that fades in the first time it scrolls into view.
#[component]
pub fn Reveal(id: Option<&'static str>, class: Option<&'static str>, children: Element) -> Element {
    let config = use_context::<LandingConfig>();
    let (state, on_mounted) = use_reveal(config.reveal.options());
    let base = class.unwrap_or("");
    let revealed = if state.read().is_revealed() {
        "reveal animate-fade-in-up"
    } else {
        "reveal"
    };
    rsx! {
        section {
            id: id,
            class: "{base} {revealed}",
            onmounted: move |event| on_mounted.call(event),
            {children}
        }
    }
}

/// Bar that fills to `width` once half of it is visible.
#[component]
pub fn ProgressBar(label: &'static str, width: Option<&'static str>) -> Element {
    let (state, on_mounted) = use_reveal(RevealOptions::with_threshold(0.5));
    let fill = if state.read().is_revealed() {
        width.unwrap_or("100%")
    } else {
        "0%"
    };
    rsx! {
        div { class: "progress",
            div { class: "progress-label", "{label}" }
            div { class: "progress-track",
                div {
                    class: "progress-fill",
                    style: "width: {fill}",
                    onmounted: move |event| on_mounted.call(event),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn bottom_inset_becomes_negative_margin() {
        let options = RevealOptions {
            trigger_fraction: 0.1,
            edge_margin: EdgeMargin {
                bottom: 10.0,
                ..EdgeMargin::default()
            },
        };
        assert_eq!(options.root_margin(), "0% 0% -10% 0%");
    }

    #[test]
    fn no_insets_render_zero_margins() {
        assert_eq!(RevealOptions::with_threshold(0.5).root_margin(), "0% 0% 0% 0%");
    }

    #[test]
    fn threshold_is_clamped() {
        assert_eq!(RevealOptions::with_threshold(1.5).clamped_threshold(), 1.0);
        assert_eq!(RevealOptions::with_threshold(-0.2).clamped_threshold(), 0.0);
    }

    #[test]
    fn reveal_is_one_way() {
        let mut state = RevealState::default();
        assert!(!state.observe(false));
        assert!(!state.is_revealed());
        assert!(state.observe(true));
        assert!(!state.observe(false));
        assert!(state.is_revealed());
        assert!(!state.observe(true));
        assert!(state.is_revealed());
    }

    mod hook {
        use std::cell::Cell;

        use dioxus::dioxus_core::VirtualDom;
        use dioxus::prelude::*;
        use pretty_assertions::assert_eq;

        use crate::reveal::{use_reveal, RevealOptions};

        thread_local! {
            static REVEALED_ON_FIRST_RENDER: Cell<Option<bool>> = const { Cell::new(None) };
        }

        fn section() -> Element {
            let (state, _on_mounted) = use_reveal(RevealOptions::with_threshold(0.1));
            let revealed = state.peek().is_revealed();
            REVEALED_ON_FIRST_RENDER.with(|cell| {
                if cell.get().is_none() {
                    cell.set(Some(revealed));
                }
            });
            rsx! {}
        }

        #[test]
        fn starts_revealed_without_intersection_observer() {
            let mut dom = VirtualDom::new(section);
            dom.rebuild_in_place();
            assert_eq!(REVEALED_ON_FIRST_RENDER.with(Cell::get), Some(true));
        }
    }
}

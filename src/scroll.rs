use dioxus::prelude::*;
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

use crate::dom;
use crate::icons::Icon;

/// Height of the fixed navigation bar.
pub const NAV_OFFSET_PX: f64 = 80.0;
pub const BACK_TO_TOP_AFTER_PX: f64 = 300.0;
pub const DEFAULT_PARALLAX_SPEED: f64 = 0.5;

/// Where a scrolled-to section should come to rest.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SectionAlign {
    /// Just under the fixed navigation bar.
    BelowNav,
    /// Flush with the top of the viewport.
    Top,
}

pub fn anchor_scroll_top(offset_top: f64) -> f64 {
    offset_top - NAV_OFFSET_PX
}

pub fn section_scroll_top(offset_top: f64, align: SectionAlign) -> f64 {
    match align {
        SectionAlign::BelowNav => anchor_scroll_top(offset_top),
        SectionAlign::Top => offset_top,
    }
}

pub fn parallax_offset(scroll_y: f64, speed: f64) -> f64 {
    -(scroll_y * speed)
}

pub fn back_to_top_visible(scroll_y: f64) -> bool {
    scroll_y > BACK_TO_TOP_AFTER_PX
}

/// `"#pricing"` -> `Some("pricing")`; anything else is not an in-page link.
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Smoothly scrolls to the section. Missing ids are ignored.
pub fn scroll_to_section(id: &str, align: SectionAlign) {
    let Some(offset_top) = dom::element_offset_top(id) else {
        tracing::debug!("scroll: no #{id} on the page");
        return;
    };
    dom::smooth_scroll_to(section_scroll_top(offset_top, align));
}

#[cfg(target_arch = "wasm32")]
struct ScrollListener {
    closure: Rc<wasm_bindgen::closure::Closure<dyn FnMut(web_sys::Event)>>,
}

/// Current vertical scroll, kept in sync by one window listener per caller.
pub fn use_scroll_y() -> Signal<f64> {
    let scroll_y = use_signal(dom::scroll_y);
    #[cfg(target_arch = "wasm32")]
    let mut listener = use_signal(|| None::<ScrollListener>);

    #[cfg(target_arch = "wasm32")]
    use_hook(move || {
        use wasm_bindgen::closure::Closure;

        let Some(window) = web_sys::window() else {
            return;
        };
        let mut on_scroll_y = scroll_y;
        let closure = Rc::new(Closure::wrap(Box::new(move |_event: web_sys::Event| {
            on_scroll_y.set(dom::scroll_y());
        }) as Box<dyn FnMut(_)>));
        let _ = window.add_event_listener_with_callback(
            "scroll",
            closure.as_ref().as_ref().unchecked_ref(),
        );
        listener.set(Some(ScrollListener { closure }));
    });

    #[cfg(target_arch = "wasm32")]
    use_drop(move || {
        let binding = listener.read();
        let Some(listener) = binding.as_ref() else {
            return;
        };
        if let Some(window) = web_sys::window() {
            let _ = window.remove_event_listener_with_callback(
                "scroll",
                listener.closure.as_ref().as_ref().unchecked_ref(),
            );
        }
    });

    scroll_y
}

/// In-page link that scrolls smoothly instead of jumping.
#[component]
pub fn AnchorLink(href: &'static str, class: Option<&'static str>, children: Element) -> Element {
    rsx! {
        a {
            href: "{href}",
            class: class.unwrap_or(""),
            onclick: move |event| {
                if let Some(id) = anchor_target(href) {
                    event.prevent_default();
                    scroll_to_section(id, SectionAlign::BelowNav);
                }
            },
            {children}
        }
    }
}

#[component]
pub fn Parallax(speed: Option<f64>, class: Option<&'static str>, children: Element) -> Element {
    let scroll_y = use_scroll_y();
    let offset = parallax_offset(scroll_y(), speed.unwrap_or(DEFAULT_PARALLAX_SPEED));
    let extra = class.unwrap_or_default();
    rsx! {
        div {
            class: "parallax {extra}",
            style: "transform: translateY({offset}px)",
            {children}
        }
    }
}

#[component]
pub fn BackToTop() -> Element {
    let scroll_y = use_scroll_y();
    let visibility = if back_to_top_visible(scroll_y()) {
        "opacity-100 pointer-events-auto"
    } else {
        "opacity-0 pointer-events-none"
    };
    rsx! {
        button {
            r#type: "button",
            class: "back-to-top {visibility}",
            aria_label: "Voltar ao topo",
            onclick: move |_| dom::smooth_scroll_to(0.0),
            Icon { name: "arrow-up" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchor_scroll_clears_nav() {
        assert_eq!(anchor_scroll_top(1000.0), 920.0);
        assert_eq!(anchor_scroll_top(40.0), -40.0);
    }

    #[test]
    fn top_alignment_ignores_nav() {
        assert_eq!(section_scroll_top(1000.0, SectionAlign::Top), 1000.0);
        assert_eq!(section_scroll_top(1000.0, SectionAlign::BelowNav), 920.0);
    }

    #[test]
    fn parallax_moves_against_scroll() {
        assert_eq!(parallax_offset(200.0, DEFAULT_PARALLAX_SPEED), -100.0);
        assert_eq!(parallax_offset(200.0, 0.25), -50.0);
        assert_eq!(parallax_offset(0.0, 0.7), 0.0);
    }

    #[test]
    fn back_to_top_appears_after_threshold() {
        assert!(!back_to_top_visible(0.0));
        assert!(!back_to_top_visible(300.0));
        assert!(back_to_top_visible(300.5));
    }

    #[test]
    fn only_fragment_links_are_anchors() {
        assert_eq!(anchor_target("#faq"), Some("faq"));
        assert_eq!(anchor_target("#"), None);
        assert_eq!(anchor_target("https://example.com/#faq"), None);
    }
}

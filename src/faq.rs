use dioxus::prelude::*;

use crate::content::FaqEntry;
use crate::icons::Icon;
use crate::overlay::{Overlay, OverlayKind};

/// FAQ group where at most one panel is open.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Accordion {
    panels: Vec<Overlay>,
}

impl Accordion {
    pub fn new(len: usize) -> Self {
        Self {
            panels: vec![Overlay::new(OverlayKind::Panel); len],
        }
    }

    pub fn is_open(&self, item: usize) -> bool {
        self.panels.get(item).is_some_and(Overlay::is_open)
    }

    pub fn panel_class(&self, item: usize) -> &'static str {
        self.panels
            .get(item)
            .map(|panel| panel.classes().panel)
            .unwrap_or_default()
    }

    pub fn close_all(&mut self) {
        self.panels.iter_mut().for_each(Overlay::close);
    }

    /// Closes every sibling, then opens `item`.
    pub fn open(&mut self, item: usize) {
        if item >= self.panels.len() {
            return;
        }
        self.close_all();
        self.panels[item].open();
    }

    /// Clicking the open question closes it; any other opens it alone.
    pub fn toggle(&mut self, item: usize) {
        if self.is_open(item) {
            self.close_all();
        } else {
            self.open(item);
        }
    }
}

#[component]
pub fn FaqList(entries: Vec<FaqEntry>) -> Element {
    if entries.is_empty() {
        tracing::debug!("faq: no entries, skipping");
        return rsx! {};
    }
    rsx! {
        FaqGroup { entries }
    }
}

#[component]
fn FaqGroup(entries: Vec<FaqEntry>) -> Element {
    let count = entries.len();
    let mut accordion = use_signal(|| Accordion::new(count));
    let state = accordion.read().clone();

    rsx! {
        div { class: "faq-list",
            for (index, entry) in entries.iter().enumerate() {
                div { key: "{index}", class: "faq-item",
                    button {
                        r#type: "button",
                        class: "faq-question",
                        aria_expanded: if state.is_open(index) { "true" } else { "false" },
                        onclick: move |_| accordion.write().toggle(index),
                        span { "{entry.question}" }
                        span {
                            class: "faq-icon",
                            style: if state.is_open(index) { "transform: rotate(180deg)" } else { "transform: rotate(0deg)" },
                            Icon { name: "chevron-down" }
                        }
                    }
                    div {
                        class: format!("faq-answer {}", state.panel_class(index)),
                        p { "{entry.answer}" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn open_items(accordion: &Accordion, len: usize) -> Vec<usize> {
        (0..len).filter(|item| accordion.is_open(*item)).collect()
    }

    #[test]
    fn opening_one_closes_the_other() {
        let mut accordion = Accordion::new(3);
        accordion.open(0);
        accordion.toggle(1);
        assert_eq!(open_items(&accordion, 3), vec![1]);
        assert_eq!(accordion.panel_class(1), "open");
        assert_eq!(accordion.panel_class(0), "");
    }

    #[test]
    fn toggling_the_open_item_closes_it() {
        let mut accordion = Accordion::new(2);
        accordion.toggle(1);
        accordion.toggle(1);
        assert_eq!(open_items(&accordion, 2), Vec::<usize>::new());
    }

    #[test]
    fn never_more_than_one_open() {
        let mut accordion = Accordion::new(4);
        for item in [0, 2, 2, 3, 1, 1, 0, 3, 3, 2] {
            accordion.toggle(item);
            assert!(open_items(&accordion, 4).len() <= 1);
        }
    }

    #[test]
    fn out_of_range_is_ignored() {
        let mut accordion = Accordion::new(2);
        accordion.open(1);
        accordion.open(5);
        accordion.toggle(9);
        assert_eq!(open_items(&accordion, 2), vec![1]);
        assert!(!accordion.is_open(5));
        assert_eq!(accordion.panel_class(5), "");
    }

    #[test]
    fn close_all_resets_every_panel() {
        let mut accordion = Accordion::new(3);
        accordion.open(2);
        accordion.close_all();
        assert_eq!(open_items(&accordion, 3), Vec::<usize>::new());
    }
}

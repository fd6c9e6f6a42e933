use dioxus::prelude::*;

use crate::config::LandingConfig;
use crate::dom;
use crate::icons::Icon;
use crate::scroll::{anchor_target, scroll_to_section, SectionAlign};

const SCROLL_LOCK_CLASS: &str = "overflow-hidden";
const VIDEO_FRAME_ID: &str = "video-frame";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OverlayKind {
    /// Off-canvas navigation drawer.
    Drawer,
    /// Centered full-screen dialog.
    Modal,
    /// Inline collapsible panel.
    Panel,
}

impl OverlayKind {
    pub fn locks_scroll(&self) -> bool {
        matches!(self, OverlayKind::Drawer | OverlayKind::Modal)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OverlayClasses {
    pub panel: &'static str,
    pub backdrop: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Overlay {
    kind: OverlayKind,
    open: bool,
}

impl Overlay {
    pub fn new(kind: OverlayKind) -> Self {
        Self { kind, open: false }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    pub fn classes(&self) -> OverlayClasses {
        let backdrop = if self.open {
            "opacity-100 pointer-events-auto"
        } else {
            "opacity-0 pointer-events-none"
        };
        let panel = match (self.kind, self.open) {
            (OverlayKind::Drawer, true) => "translate-x-0",
            (OverlayKind::Drawer, false) => "-translate-x-full",
            (OverlayKind::Modal, true) => "opacity-100 pointer-events-auto",
            (OverlayKind::Modal, false) => "opacity-0 pointer-events-none",
            (OverlayKind::Panel, true) => "open",
            (OverlayKind::Panel, false) => "",
        };
        OverlayClasses { panel, backdrop }
    }

    pub fn suppresses_scroll(&self) -> bool {
        self.open && self.kind.locks_scroll()
    }
}

/// Keeps `<body>` scroll in sync with a full-screen overlay.
fn use_scroll_lock(locked: impl Fn() -> bool + 'static) {
    use_effect(move || dom::set_body_class(SCROLL_LOCK_CLASS, locked()));
    use_drop(move || dom::set_body_class(SCROLL_LOCK_CLASS, false));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VideoPlayer {
    overlay: Overlay,
    source_generation: u32,
}

impl Default for VideoPlayer {
    fn default() -> Self {
        Self {
            overlay: Overlay::new(OverlayKind::Modal),
            source_generation: 0,
        }
    }
}

impl VideoPlayer {
    pub fn overlay(&self) -> Overlay {
        self.overlay
    }

    pub fn source_generation(&self) -> u32 {
        self.source_generation
    }

    pub fn open(&mut self) {
        self.overlay.open();
    }

    /// Closing reassigns the media source so playback stops.
    pub fn close(&mut self) {
        self.overlay.close();
        self.source_generation = self.source_generation.wrapping_add(1);
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
}

/// Closes the drawer and returns the in-page section the link points at.
pub fn follow_menu_link(menu: &mut Overlay, link: &NavLink) -> Option<&'static str> {
    menu.close();
    anchor_target(link.href)
}

#[component]
pub fn MobileMenu(links: Vec<NavLink>) -> Element {
    let mut menu = use_signal(|| Overlay::new(OverlayKind::Drawer));
    use_scroll_lock(move || menu.read().suppresses_scroll());
    let classes = menu.read().classes();
    let expanded = if menu.read().is_open() { "true" } else { "false" };

    rsx! {
        button {
            id: "mobile-menu-button",
            r#type: "button",
            class: "md:hidden",
            aria_label: "Abrir menu",
            aria_expanded: "{expanded}",
            onclick: move |_| {
                menu.write().toggle();
            },
            Icon { name: "menu" }
        }
        div {
            id: "menu-overlay",
            class: "menu-overlay {classes.backdrop}",
            onclick: move |_| menu.write().close(),
        }
        nav {
            id: "mobile-menu",
            class: "mobile-menu {classes.panel}",
            aria_label: "Menu",
            for link in links {
                a {
                    key: "{link.href}",
                    href: "{link.href}",
                    class: "mobile-menu-link",
                    onclick: {
                        let link = link.clone();
                        move |event: MouseEvent| {
                            if let Some(id) = follow_menu_link(&mut menu.write(), &link) {
                                event.prevent_default();
                                scroll_to_section(id, SectionAlign::BelowNav);
                            }
                        }
                    },
                    "{link.label}"
                }
            }
        }
    }
}

#[component]
pub fn VideoModal(label: &'static str) -> Element {
    let config = use_context::<LandingConfig>();
    let Some(video) = config.video else {
        tracing::debug!("video: no embed configured, skipping");
        return rsx! {};
    };
    rsx! {
        VideoDialog { label, src: video.embed_url }
    }
}

#[component]
fn VideoDialog(label: &'static str, src: String) -> Element {
    let mut player = use_signal(VideoPlayer::default);
    use_scroll_lock(move || player.read().overlay().suppresses_scroll());
    use_effect(move || {
        if player.read().source_generation() > 0 {
            dom::reload_iframe(VIDEO_FRAME_ID);
        }
    });
    let classes = player.read().overlay().classes();

    rsx! {
        button {
            id: "video-modal-btn",
            r#type: "button",
            class: "video-trigger",
            onclick: move |_| player.write().open(),
            Icon { name: "play-circle" }
            " {label}"
        }
        div {
            id: "video-modal",
            class: "video-modal {classes.panel}",
            role: "dialog",
            aria_modal: "true",
            div {
                id: "modal-overlay",
                class: "modal-overlay",
                onclick: move |_| player.write().close(),
            }
            div { class: "video-frame",
                button {
                    id: "close-modal",
                    r#type: "button",
                    aria_label: "Fechar vídeo",
                    onclick: move |_| player.write().close(),
                    Icon { name: "x" }
                }
                iframe {
                    id: VIDEO_FRAME_ID,
                    src: "{src}",
                    title: "{label}",
                    allow: "autoplay; encrypted-media",
                    allowfullscreen: true,
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
    fn drawer_open_close_classes() {
        let mut drawer = Overlay::new(OverlayKind::Drawer);
        assert_eq!(
            drawer.classes(),
            OverlayClasses {
                panel: "-translate-x-full",
                backdrop: "opacity-0 pointer-events-none",
            }
        );
        drawer.open();
        assert_eq!(
            drawer.classes(),
            OverlayClasses {
                panel: "translate-x-0",
                backdrop: "opacity-100 pointer-events-auto",
            }
        );
        assert!(drawer.suppresses_scroll());
        drawer.close();
        assert!(!drawer.suppresses_scroll());
    }

    #[test]
    fn toggle_flips_state() {
        let mut overlay = Overlay::new(OverlayKind::Modal);
        assert!(overlay.toggle());
        assert!(!overlay.toggle());
        assert!(!overlay.is_open());
    }

    #[test]
    fn panels_never_lock_scroll() {
        let mut panel = Overlay::new(OverlayKind::Panel);
        panel.open();
        assert!(panel.is_open());
        assert!(!panel.suppresses_scroll());
        assert_eq!(panel.classes().panel, "open");
    }

    #[test]
    fn closing_video_reassigns_source() {
        let mut player = VideoPlayer::default();
        player.open();
        assert!(player.overlay().is_open());
        assert!(player.overlay().suppresses_scroll());
        player.close();
        assert!(!player.overlay().is_open());
        assert_eq!(player.source_generation(), 1);
        player.close();
        assert_eq!(player.source_generation(), 2);
    }

    #[test]
    fn opening_video_keeps_source() {
        let mut player = VideoPlayer::default();
        player.open();
        assert_eq!(player.source_generation(), 0);
    }

    #[test]
    fn menu_links_close_drawer_and_target_section() {
        let mut menu = Overlay::new(OverlayKind::Drawer);
        menu.open();
        let link = NavLink { href: "#precos", label: "Preços" };
        assert_eq!(follow_menu_link(&mut menu, &link), Some("precos"));
        assert!(!menu.is_open());
        assert!(!menu.suppresses_scroll());
    }

    #[test]
    fn external_menu_links_only_close_drawer() {
        let mut menu = Overlay::new(OverlayKind::Drawer);
        menu.open();
        let link = NavLink { href: "https://example.com", label: "Blog" };
        assert_eq!(follow_menu_link(&mut menu, &link), None);
        assert!(!menu.is_open());
    }
}

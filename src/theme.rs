use dioxus::prelude::*;
use thiserror::Error;

use crate::config::ThemeConfig;
use crate::dom;
use crate::icons::Icon;

const DARK_CLASS: &str = "dark";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("storage write failed: {0}")]
    Write(String),
}

/// Where the preference lives between page loads.
pub trait PreferenceStore {
    fn load(&self) -> Result<Option<Theme>, StoreError>;
    fn save(&mut self, theme: Theme) -> Result<(), StoreError>;
}

/// `localStorage` under a fixed key, raw `"light"`/`"dark"` values.
#[derive(Clone, Debug)]
pub struct BrowserStore {
    key: String,
}

impl BrowserStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

#[cfg(target_arch = "wasm32")]
impl PreferenceStore for BrowserStore {
    fn load(&self) -> Result<Option<Theme>, StoreError> {
        let storage = dom::local_storage().map_err(StoreError::Unavailable)?;
        let value = storage
            .get_item(&self.key)
            .map_err(|err| StoreError::Unavailable(format!("{err:?}")))?;
        Ok(value.as_deref().and_then(Theme::parse))
    }

    fn save(&mut self, theme: Theme) -> Result<(), StoreError> {
        let storage = dom::local_storage().map_err(StoreError::Unavailable)?;
        storage
            .set_item(&self.key, theme.as_str())
            .map_err(|err| StoreError::Write(format!("{err:?}")))
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl PreferenceStore for BrowserStore {
    fn load(&self) -> Result<Option<Theme>, StoreError> {
        Err(StoreError::Unavailable(format!(
            "no localStorage for {} off the web target",
            self.key
        )))
    }

    fn save(&mut self, _theme: Theme) -> Result<(), StoreError> {
        Err(StoreError::Write("no localStorage off the web target".to_string()))
    }
}

pub struct ThemeController<S> {
    store: S,
    applied: Theme,
}

impl<S: PreferenceStore> ThemeController<S> {
    /// Stored value wins over the OS signal, the OS signal wins over light.
    pub fn init(store: S, os_prefers_dark: bool) -> Self {
        let stored = store.load().unwrap_or_else(|err| {
            tracing::warn!("theme: {err}, keeping preference in memory");
            None
        });
        let initial = stored.unwrap_or(if os_prefers_dark {
            Theme::Dark
        } else {
            Theme::Light
        });
        Self {
            store,
            applied: initial,
        }
    }

    pub fn preference(&self) -> Theme {
        self.applied
    }

    pub fn set_preference(&mut self, theme: Theme) {
        if let Err(err) = self.store.save(theme) {
            tracing::warn!("theme: {err}, keeping preference in memory");
        }
        self.apply(theme);
    }

    pub fn toggle(&mut self) -> Theme {
        let next = self.applied.flipped();
        self.set_preference(next);
        next
    }

    pub fn apply(&mut self, theme: Theme) {
        self.applied = theme;
        apply_to_dom(theme);
    }

    #[cfg(test)]
    fn store(&self) -> &S {
        &self.store
    }
}

pub fn apply_to_dom(theme: Theme) {
    dom::set_root_class(DARK_CLASS, theme == Theme::Dark);
}

pub type PageTheme = Signal<ThemeController<BrowserStore>>;

/// Builds the page's theme controller and applies the initial theme.
pub fn use_theme_provider(config: &ThemeConfig) -> PageTheme {
    let controller = use_context_provider(|| {
        let store = BrowserStore::new(config.storage_key.clone());
        Signal::new(ThemeController::init(store, dom::prefers_dark_scheme()))
    });
    use_hook(move || apply_to_dom(controller.peek().preference()));
    controller
}

#[component]
pub fn ThemeToggle() -> Element {
    let mut controller = use_context::<PageTheme>();
    let theme = controller.read().preference();
    let (label, sun_class, moon_class) = match theme {
        Theme::Dark => ("Ativar tema claro", "theme-icon", "theme-icon hidden"),
        Theme::Light => ("Ativar tema escuro", "theme-icon hidden", "theme-icon"),
    };
    rsx! {
        button {
            id: "theme-toggle",
            r#type: "button",
            class: "theme-toggle",
            aria_label: "{label}",
            onclick: move |_| {
                let next = controller.write().toggle();
                tracing::debug!("theme: switched to {}", next.as_str());
            },
            span { class: "{sun_class}", Icon { name: "sun" } }
            span { class: "{moon_class}", Icon { name: "moon" } }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct MemoryStore {
        value: Option<Theme>,
    }

    impl MemoryStore {
        fn with(theme: Theme) -> Self {
            Self { value: Some(theme) }
        }
    }

    impl PreferenceStore for MemoryStore {
        fn load(&self) -> Result<Option<Theme>, StoreError> {
            Ok(self.value)
        }

        fn save(&mut self, theme: Theme) -> Result<(), StoreError> {
            self.value = Some(theme);
            Ok(())
        }
    }

    struct BrokenStore;

    impl PreferenceStore for BrokenStore {
        fn load(&self) -> Result<Option<Theme>, StoreError> {
            Err(StoreError::Unavailable("disabled".to_string()))
        }

        fn save(&mut self, _theme: Theme) -> Result<(), StoreError> {
            Err(StoreError::Write("quota".to_string()))
        }
    }

    #[test]
    fn parses_only_known_values() {
        assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
        assert_eq!(Theme::parse("light"), Some(Theme::Light));
        assert_eq!(Theme::parse("Dark"), None);
        assert_eq!(Theme::parse("\"dark\""), None);
    }

    #[test]
    fn stored_value_beats_os_signal() {
        let controller = ThemeController::init(MemoryStore::with(Theme::Light), true);
        assert_eq!(controller.preference(), Theme::Light);
    }

    #[test]
    fn os_signal_beats_default() {
        let controller = ThemeController::init(MemoryStore::default(), true);
        assert_eq!(controller.preference(), Theme::Dark);
        let controller = ThemeController::init(MemoryStore::default(), false);
        assert_eq!(controller.preference(), Theme::Light);
    }

    #[test]
    fn toggle_persists_new_value() {
        let mut controller = ThemeController::init(MemoryStore::default(), false);
        assert_eq!(controller.toggle(), Theme::Dark);
        assert_eq!(controller.store().load().unwrap(), Some(Theme::Dark));
    }

    #[test]
    fn double_toggle_restores_applied_and_persisted() {
        let mut controller = ThemeController::init(MemoryStore::with(Theme::Dark), false);
        let before = controller.store().load().unwrap();
        controller.toggle();
        controller.toggle();
        assert_eq!(controller.preference(), Theme::Dark);
        assert_eq!(controller.store().load().unwrap(), before);
    }

    #[test]
    fn broken_storage_degrades_to_memory() {
        let mut controller = ThemeController::init(BrokenStore, true);
        assert_eq!(controller.preference(), Theme::Dark);
        controller.set_preference(Theme::Light);
        assert_eq!(controller.preference(), Theme::Light);
        assert_eq!(controller.toggle(), Theme::Dark);
    }

    #[test]
    fn browser_store_is_unavailable_off_web() {
        let mut controller = ThemeController::init(BrowserStore::new("theme"), false);
        assert_eq!(controller.preference(), Theme::Light);
        assert!(matches!(controller.store().load(), Err(StoreError::Unavailable(_))));
        assert_eq!(controller.toggle(), Theme::Dark);
        assert_eq!(controller.preference(), Theme::Dark);
    }
}

use dioxus::prelude::*;
use dioxus_router::{Link, Routable, Router};

use crate::config::{use_landing_config, LandingConfig};
use crate::icons::IconScript;
use crate::landing::LandingPage;
use crate::theme::use_theme_provider;
use crate::toast::use_notifier_provider;

const MAIN_CSS: Asset = asset!("/assets/main.css");

#[component]
pub fn App() -> Element {
    let config_resource = use_landing_config();
    let Some(config) = config_resource() else {
        return rsx! {
            document::Title { "Midas Marketing Mastery" }
            div { class: "page loading",
                p { "Carregando..." }
            }
        };
    };

    rsx! {
        Shell { config }
    }
}

/// Owns the page-wide contexts once the config is known.
#[component]
fn Shell(config: LandingConfig) -> Element {
    use_notifier_provider(config.toast.timeline());
    use_theme_provider(&config.theme);
    use_context_provider(|| config.clone());

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Meta { name: "theme-color", content: "#d4af37" }
        IconScript {}
        Router::<Route> {}
    }
}

#[derive(Clone, PartialEq, Routable)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

#[component]
fn Home() -> Element {
    rsx! {
        LandingPage {}
    }
}

#[component]
fn NotFound(route: Vec<String>) -> Element {
    let path = route.join("/");
    rsx! {
        document::Title { "Página não encontrada | Midas" }
        div { class: "page not-found",
            h1 { "404" }
            p { "Nada por aqui: /{path}" }
            Link { to: Route::Home {}, class: "btn-primary", "Voltar ao início" }
        }
    }
}

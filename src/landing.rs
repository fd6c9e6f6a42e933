use dioxus::prelude::*;

use crate::carousel::TestimonialCarousel;
use crate::content::{faq_entries, nav_links, plans, stats, testimonials};
use crate::countdown::CountdownTimer;
use crate::date::current_year;
use crate::faq::FaqList;
use crate::icons::Icon;
use crate::overlay::{MobileMenu, VideoModal};
use crate::pricing::PricingTable;
use crate::reveal::{ProgressBar, Reveal};
use crate::scroll::{AnchorLink, BackToTop, Parallax};
use crate::stub::{ContactForm, NewsletterForm, PurchaseButton, SUCCESS_SECTION_ID};
use crate::theme::ThemeToggle;
use crate::toast::ToastHost;

const MODULES: &[(&str, &str, &str)] = &[
    ("target", "Posicionamento", "Encontre o público que compra e a mensagem que converte."),
    ("trending-up", "Tráfego pago", "Campanhas lucrativas no Meta e Google desde o primeiro real."),
    ("filter", "Funis de venda", "Páginas, sequências de email e ofertas que vendem no automático."),
    ("bar-chart-2", "Métricas", "Os cinco números que dizem se o seu marketing está funcionando."),
];

#[component]
pub fn LandingPage() -> Element {
    let year = current_year();

    rsx! {
        document::Title { "Midas Marketing Mastery" }
        document::Meta {
            name: "description",
            content: "O método completo para transformar marketing digital em vendas previsíveis.",
        }
        header { class: "site-nav",
            AnchorLink { href: "#inicio", class: "nav-logo", "Midas" }
            nav { class: "nav-links", aria_label: "Navegação principal",
                for link in nav_links() {
                    AnchorLink { key: "{link.href}", href: link.href, class: "nav-link", "{link.label}" }
                }
            }
            div { class: "nav-actions",
                ThemeToggle {}
                MobileMenu { links: nav_links() }
            }
        }
        main {
            Reveal { id: "inicio", class: "hero",
                Parallax { class: "hero-glow", speed: 0.3 }
                h1 { class: "hero-title", "Domine o marketing que transforma cliques em ouro" }
                p { class: "hero-subtitle",
                    "O método Midas reúne posicionamento, tráfego e funis em um só programa prático."
                }
                div { class: "hero-offer",
                    p { class: "offer-label", "A oferta de lançamento termina em:" }
                    CountdownTimer {}
                }
                div { class: "hero-actions",
                    PurchaseButton { label: "Quero entrar agora" }
                    VideoModal { label: "Assistir apresentação" }
                }
            }
            Reveal { id: "beneficios", class: "benefits",
                h2 { "Resultados de quem já aplicou" }
                for stat in stats() {
                    ProgressBar { key: "{stat.label}", label: stat.label, width: stat.width }
                }
            }
            Reveal { id: "modulos", class: "modules",
                h2 { "O que você vai aprender" }
                div { class: "module-grid",
                    for (icon, title, summary) in MODULES.iter().copied() {
                        div { key: "{title}", class: "module-card",
                            Icon { name: icon, class: "w-8 h-8 text-secondary" }
                            h3 { "{title}" }
                            p { "{summary}" }
                        }
                    }
                }
            }
            Reveal { id: "depoimentos", class: "testimonials",
                h2 { "Quem fez, recomenda" }
                TestimonialCarousel { slides: testimonials() }
            }
            Reveal { id: "precos", class: "pricing",
                h2 { "Escolha seu plano" }
                PricingTable { plans: plans() }
            }
            Reveal { id: "faq", class: "faq",
                h2 { "Perguntas frequentes" }
                FaqList { entries: faq_entries() }
            }
            section { id: SUCCESS_SECTION_ID, class: "success",
                h2 { "Bem-vindo ao Midas!" }
                p { "Depois da compra, confira seu email para receber o acesso." }
            }
            Reveal { id: "contato", class: "contact",
                h2 { "Fale com a gente" }
                ContactForm {}
            }
        }
        footer { class: "site-footer",
            div { class: "newsletter",
                p { "Receba conteúdos exclusivos toda semana" }
                NewsletterForm {}
            }
            p { class: "copyright",
                "© "
                span { class: "current-year", "{year}" }
                " Midas Marketing Mastery. Todos os direitos reservados."
            }
        }
        BackToTop {}
        ToastHost {}
    }
}

mod carousel;
mod config;
mod content;
mod countdown;
mod date;
mod dom;
mod faq;
mod icons;
mod landing;
mod overlay;
mod pricing;
mod reveal;
mod routes;
mod scroll;
mod stub;
mod theme;
mod timers;
mod toast;

fn main() {
    dioxus::launch(routes::App);
}

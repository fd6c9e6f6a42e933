use dioxus::prelude::*;

use crate::config::LandingConfig;
use crate::content::Testimonial;
use crate::icons::Icon;
use crate::timers::{periodic_supported, sleep_ms};

/// Cyclic index over a fixed, non-empty set of slides.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    index: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Option<Self> {
        (len > 0).then_some(Self { len, index: 0 })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_shown(&self, slide: usize) -> bool {
        slide == self.index
    }

    pub fn next(&mut self) -> usize {
        self.index = (self.index + 1) % self.len;
        self.index
    }

    pub fn prev(&mut self) -> usize {
        self.index = (self.index + self.len - 1) % self.len;
        self.index
    }

    pub fn go_to(&mut self, slide: usize) -> usize {
        self.index = slide % self.len;
        self.index
    }
}

#[component]
pub fn TestimonialCarousel(slides: Vec<Testimonial>) -> Element {
    let Some(initial) = Carousel::new(slides.len()) else {
        tracing::debug!("carousel: no slides, skipping");
        return rsx! {};
    };
    rsx! {
        CarouselTrack { slides, initial }
    }
}

#[component]
fn CarouselTrack(slides: Vec<Testimonial>, initial: Carousel) -> Element {
    let config = use_context::<LandingConfig>();
    let mut carousel = use_signal(|| initial);

    use_hook(move || {
        if !periodic_supported() {
            return;
        }
        let interval_ms = config.carousel.interval_ms;
        spawn(async move {
            loop {
                sleep_ms(interval_ms).await;
                carousel.write().next();
            }
        });
    });

    let current = carousel();
    let position = format!("Depoimento {} de {}", current.index() + 1, current.len());
    rsx! {
        div { id: "testimonial-carousel", class: "relative",
            p { class: "sr-only", aria_live: "polite", "{position}" }
            for (index, slide) in slides.iter().enumerate() {
                div {
                    key: "{index}",
                    class: if current.is_shown(index) { "testimonial-slide" } else { "testimonial-slide hidden" },
                    blockquote { class: "testimonial-quote", "“{slide.quote}”" }
                    p { class: "testimonial-author", "{slide.author}" }
                    p { class: "testimonial-role", "{slide.role}" }
                }
            }
            div { class: "carousel-controls",
                button {
                    id: "prev-btn",
                    r#type: "button",
                    aria_label: "Depoimento anterior",
                    onclick: move |_| {
                        carousel.write().prev();
                    },
                    Icon { name: "chevron-left" }
                }
                div { class: "carousel-dots",
                    for index in 0..current.len() {
                        button {
                            key: "dot-{index}",
                            r#type: "button",
                            class: if current.is_shown(index) { "carousel-dot active" } else { "carousel-dot" },
                            aria_label: format!("Ir para depoimento {}", index + 1),
                            onclick: move |_| {
                                carousel.write().go_to(index);
                            },
                        }
                    }
                }
                button {
                    id: "next-btn",
                    r#type: "button",
                    aria_label: "Próximo depoimento",
                    onclick: move |_| {
                        carousel.write().next();
                    },
                    Icon { name: "chevron-right" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_set_has_no_carousel() {
        assert!(Carousel::new(0).is_none());
    }

    #[test]
    fn k_nexts_land_on_k_mod_n() {
        for len in 1..6 {
            let mut carousel = Carousel::new(len).unwrap();
            for k in 1..20 {
                carousel.next();
                assert_eq!(carousel.index(), k % len);
            }
        }
    }

    #[test]
    fn interleaved_moves_sum_modulo_len() {
        let len = 4;
        let mut carousel = Carousel::new(len).unwrap();
        let moves = [1i64, -1, -1, -1, 1, 1, 1, 1, 1, -1, -1];
        for step in moves {
            if step > 0 {
                carousel.next();
            } else {
                carousel.prev();
            }
        }
        let sum: i64 = moves.iter().sum();
        assert_eq!(carousel.index() as i64, sum.rem_euclid(len as i64));
    }

    #[test]
    fn prev_from_zero_wraps_to_last() {
        let mut carousel = Carousel::new(3).unwrap();
        assert_eq!(carousel.prev(), 2);
    }

    #[test]
    fn go_to_wraps_and_shows_one_slide() {
        let mut carousel = Carousel::new(3).unwrap();
        assert_eq!(carousel.go_to(7), 1);
        let shown = (0..3).filter(|slide| carousel.is_shown(*slide)).count();
        assert_eq!(shown, 1);
    }

    #[test]
    fn single_slide_stays_put() {
        let mut carousel = Carousel::new(1).unwrap();
        assert_eq!(carousel.next(), 0);
        assert_eq!(carousel.prev(), 0);
    }
}

//! Client testimonials as a stack of flipping cards.

use dioxus::prelude::*;
use gloo::timers::future::sleep;
use space_core::carousel::{CardSlot, FlipCarousel, FLIP_DURATION, TESTIMONIAL_INTERVAL};
use space_core::catalog::TESTIMONIALS;
use space_ui::{SectionHeader, StarRating};

const STATS: [(&str, &str); 3] = [
    ("500+", "Happy Clients"),
    ("4.9/5", "Average Rating"),
    ("98%", "Satisfaction"),
];

#[component]
pub fn Testimonials() -> Element {
    let mut carousel = use_signal(|| FlipCarousel::new(TESTIMONIALS.len()));
    let mut autoplay = use_signal(|| true);

    // Starting a flip also schedules its end
    let mut flip = move |start: fn(&mut FlipCarousel) -> bool| {
        if start(&mut carousel.write()) {
            spawn(async move {
                sleep(FLIP_DURATION).await;
                carousel.write().finish_flip();
            });
        }
    };

    use_future(move || async move {
        loop {
            sleep(TESTIMONIAL_INTERVAL).await;
            if *autoplay.peek() {
                flip(FlipCarousel::begin_next);
            }
        }
    });

    let state = carousel();
    let flip_class = state.flipping().map(|d| d.class()).unwrap_or_default();

    rsx! {
        section { class: "testimonials", "aria-label": "Client testimonials",
            div { class: "testimonials-header",
                SectionHeader {
                    badge: "💬 Client Stories",
                    title: "What Our",
                    highlight: "Clients Say",
                    subtitle: "Real feedback from researchers, students, and businesses we've partnered with",
                }
                div { class: "testimonial-stats",
                    for (value, label) in STATS {
                        div { key: "{label}", class: "stat",
                            span { class: "stat-num", "{value}" }
                            span { class: "stat-label", "{label}" }
                        }
                    }
                }
            }

            div {
                class: "card-stack",
                onmouseenter: move |_| autoplay.set(false),
                onmouseleave: move |_| autoplay.set(true),
                div { class: "stack-container",
                    for (i, testimonial) in TESTIMONIALS.iter().enumerate() {
                        {
                            let slot = state.slot(i);
                            let initial = testimonial.name.chars().next().unwrap_or('?');
                            let class = match slot {
                                CardSlot::Active => format!("testimonial-card active {}", flip_class),
                                other => format!("testimonial-card {}", other.class()),
                            };
                            rsx! {
                                div {
                                    key: "{i}",
                                    class: "{class}",
                                    style: "--card-color: {testimonial.color}; --card-gradient: {testimonial.gradient}",
                                    onclick: move |_| {
                                        if carousel.write().click(i) {
                                            spawn(async move {
                                                sleep(FLIP_DURATION).await;
                                                carousel.write().finish_flip();
                                            });
                                        }
                                    },
                                    div { class: "quote-icon", "“" }
                                    StarRating { rating: testimonial.rating }
                                    p { class: "review", "{testimonial.review}" }
                                    div { class: "client-info",
                                        div { class: "client-avatar", "{initial}" }
                                        div { class: "client-details",
                                            h4 { class: "client-name", "{testimonial.name}" }
                                            p { class: "client-role", "{testimonial.role}, {testimonial.company}" }
                                            span { class: "project-tag", "📁 {testimonial.project_type}" }
                                        }
                                    }
                                    if slot == CardSlot::Active {
                                        span { class: "tap-hint", "Tap to flip →" }
                                    }
                                }
                            }
                        }
                    }
                }

                button {
                    class: "nav-btn nav-prev",
                    "aria-label": "Previous testimonial",
                    disabled: state.is_flipping(),
                    onclick: move |_| flip(FlipCarousel::begin_prev),
                    "←"
                }
                button {
                    class: "nav-btn nav-next",
                    "aria-label": "Next testimonial",
                    disabled: state.is_flipping(),
                    onclick: move |_| flip(FlipCarousel::begin_next),
                    "→"
                }
            }

            div { class: "carousel-dots",
                for i in 0..TESTIMONIALS.len() {
                    span {
                        key: "{i}",
                        class: if i == state.current() { "dot active" } else { "dot" },
                    }
                }
            }
        }
    }
}

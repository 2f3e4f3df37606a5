//! Landing hero with the rotating headline word.

use dioxus::prelude::*;
use gloo::timers::future::sleep;
use space_core::carousel::{WordRotation, WORD_FADE, WORD_INTERVAL};
use space_core::catalog::{HERO_TECH, HERO_TRUST, HERO_WORDS};

use crate::app::Route;

#[component]
pub fn Hero() -> Element {
    let mut rotation = use_signal(|| WordRotation::new(HERO_WORDS.len()));

    // Fade out, swap the word, fade back in
    use_future(move || async move {
        loop {
            sleep(WORD_INTERVAL).await;
            rotation.write().fade_out();
            sleep(WORD_FADE).await;
            rotation.write().advance();
        }
    });

    let state = rotation();
    let word = HERO_WORDS[state.current()];
    let word_class = if state.is_shown() {
        "dynamic-word typing"
    } else {
        "dynamic-word erasing"
    };

    rsx! {
        section { class: "hero-section visible", "aria-label": "Hero section",
            div { class: "background-effects",
                div { class: "gradient-orb orb-1" }
                div { class: "gradient-orb orb-2" }
                div { class: "gradient-orb orb-3" }
                div { class: "grid-pattern" }
            }

            div { class: "hero-container",
                div { class: "hero-content",
                    div { class: "badge",
                        span { class: "badge-icon", "✦" }
                        span { "Award-Winning Tech Solutions" }
                    }

                    h1 { class: "headline",
                        span { class: "headline-top", "Building the Future with" }
                        span { class: "headline-main",
                            span { class: "static-text", "Tech " }
                            span { class: "{word_class}",
                                "{word}"
                                span { class: "cursor", "|" }
                            }
                        }
                        span { class: "headline-bottom",
                            "Scalable. Powerful. "
                            span { class: "accent-gradient", "Professional." }
                        }
                    }

                    p { class: "sub-headline",
                        "From "
                        strong { class: "highlight", "Full Stack Development" }
                        " to "
                        strong { class: "highlight", "AI/Deep Learning" }
                        " and "
                        strong { class: "highlight", "IEEE Research" }
                        ", we deliver enterprise-grade solutions that drive real results."
                    }

                    div { class: "cta-group",
                        Link { to: Route::Quote {}, class: "cta-button primary",
                            span { class: "button-icon", "💎" }
                            span { "Get Custom Quote" }
                            span { class: "button-arrow", "→" }
                        }
                        Link { to: Route::Services {}, class: "cta-button secondary",
                            span { class: "button-icon", "🚀" }
                            span { "Explore Services" }
                        }
                    }

                    div { class: "trust-indicators",
                        for metric in HERO_TRUST {
                            div { key: "{metric.label}", class: "indicator",
                                div { class: "indicator-icon", "{metric.icon}" }
                                div { class: "indicator-content",
                                    span { class: "indicator-value", "{metric.value}" }
                                    span { class: "indicator-label", "{metric.label}" }
                                }
                            }
                        }
                    }
                }

                div { class: "hero-visual",
                    div { class: "tech-orbit",
                        div { class: "orbit-center", "SPACE" }
                        for (i, (icon, title)) in HERO_TECH.iter().enumerate() {
                            div {
                                key: "{title}",
                                class: "tech-icon",
                                style: "--orbit-index: {i}",
                                title: "{title}",
                                "{icon}"
                            }
                        }
                    }
                    p { class: "powered-by", "Powered by modern technology" }
                }
            }

            div { class: "scroll-indicator", "aria-hidden": "true",
                span { "Scroll to explore" }
                div { class: "scroll-mouse", div { class: "scroll-wheel" } }
            }
        }
    }
}

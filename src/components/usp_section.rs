//! "Why choose us" cards on the home page.

use dioxus::prelude::*;
use space_core::catalog::SELLING_POINTS;
use space_core::RevealOptions;
use space_ui::SectionHeader;

use crate::browser::use_scroll_reveal;

#[component]
pub fn UspSection() -> Element {
    let reveal = use_scroll_reveal(RevealOptions::STANDARD);

    rsx! {
        section { class: "usp-section", "aria-label": "Why choose SPACE",
            SectionHeader {
                badge: "⭐ Why Choose Us",
                title: "What Makes Us",
                highlight: "Different",
                subtitle: "We combine technical excellence with a relentless focus on delivering results.",
            }
            div { class: "usp-grid",
                for (i, point) in SELLING_POINTS.iter().enumerate() {
                    div {
                        key: "{point.title}",
                        class: reveal.class(i, if point.featured { "usp-card featured" } else { "usp-card" }),
                        style: "--card-color: {point.color}",
                        "data-reveal-index": "{i}",
                        onmounted: move |e| reveal.observe(e),
                        if point.featured {
                            span { class: "featured-badge", "Most Valued" }
                        }
                        div { class: "usp-icon", "{point.icon}" }
                        h3 { class: "usp-title", "{point.title}" }
                        p { class: "usp-description", "{point.description}" }
                        div { class: "usp-stats", "{point.stats}" }
                    }
                }
            }
        }
    }
}

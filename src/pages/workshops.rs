//! Training programs, filterable by level, with rotating student reviews.

use dioxus::prelude::*;
use gloo::timers::future::sleep;
use space_core::carousel::{RotatingIndex, WORKSHOP_TESTIMONIAL_INTERVAL};
use space_core::catalog::{
    filter_workshops, LevelFilter, Workshop, BENEFITS, CORPORATE_PERKS, WORKSHOP_REVIEWS,
    WORKSHOP_STATS,
};
use space_core::RevealOptions;
use space_ui::{FeatureCard, FilterPills, Pill, StarRating};

use crate::app::Route;
use crate::browser::use_scroll_reveal;

fn level_pills() -> Vec<Pill> {
    LevelFilter::ALL
        .iter()
        .map(|l| Pill::new(l.id(), l.label()))
        .collect()
}

#[component]
pub fn Workshops() -> Element {
    let mut level = use_signal(LevelFilter::default);
    let mut review = use_signal(|| RotatingIndex::new(WORKSHOP_REVIEWS.len()));
    let reveal = use_scroll_reveal(RevealOptions::FAST);

    use_future(move || async move {
        loop {
            sleep(WORKSHOP_TESTIMONIAL_INTERVAL).await;
            review.write().advance();
        }
    });

    use_effect(move || {
        let _ = level();
        reveal.reset();
    });

    let workshops = filter_workshops(level());
    let active_review = review().current();

    rsx! {
        div { class: "workshops-page",
            header { class: "page-hero",
                div { class: "hero-badge", "🎓 Professional Training Programs" }
                h1 { class: "page-title",
                    "Transform Your Career with "
                    span { class: "gradient-text", "Industry-Leading" }
                    " Workshops"
                }
                p { class: "page-subtitle",
                    "Hands-on, project-based training programs designed to get you job-ready. \
                     Learn from industry experts and build a portfolio that stands out."
                }
                div { class: "quick-stats",
                    for (value, label) in WORKSHOP_STATS {
                        div { key: "{label}", class: "quick-stat",
                            span { class: "stat-number", "{value}" }
                            span { class: "stat-label", "{label}" }
                        }
                    }
                }
                FilterPills {
                    pills: level_pills(),
                    selected: level().id().to_string(),
                    aria_label: "Skill level",
                    on_select: move |id: String| {
                        if let Some(l) = LevelFilter::from_id(&id) {
                            level.set(l);
                        }
                    },
                }
            }

            section { class: "section benefits-section",
                h2 { class: "section-title", "Why Choose Our Workshops?" }
                div { class: "card-grid",
                    for benefit in BENEFITS {
                        FeatureCard { key: "{benefit.title}", feature: *benefit }
                    }
                }
            }

            section { class: "section workshops-section",
                div { class: "section-header",
                    h2 { class: "section-title", "Featured Workshops" }
                    p { class: "section-subtitle",
                        "Choose from our curated selection of practical, career-focused training programs"
                    }
                }
                div { class: "workshops-grid",
                    for (i, workshop) in workshops.iter().copied().enumerate() {
                        article {
                            key: "{workshop.id}",
                            class: reveal.class(i, if workshop.featured { "workshop-card featured reveal" } else { "workshop-card reveal" }),
                            "data-reveal-index": "{i}",
                            onmounted: move |e| reveal.observe(e),
                            WorkshopDetails { workshop: *workshop }
                        }
                    }
                }
                if workshops.is_empty() {
                    div { class: "empty-state",
                        div { class: "empty-icon", "🔍" }
                        h3 { "No workshops found" }
                        p { "Try selecting a different skill level" }
                        button {
                            class: "btn btn-primary",
                            onclick: move |_| level.set(LevelFilter::All),
                            "Show All Workshops"
                        }
                    }
                }
            }

            section { class: "section reviews-section",
                h2 { class: "section-title", "Student Success Stories" }
                p { class: "section-subtitle",
                    "Hear from professionals who transformed their careers with our training"
                }
                div { class: "review-carousel",
                    for (i, r) in WORKSHOP_REVIEWS.iter().enumerate() {
                        div {
                            key: "{r.name}",
                            class: if i == active_review { "review-card active" } else { "review-card" },
                            div { class: "review-header",
                                div { class: "review-avatar", "{r.avatar}" }
                                div { class: "review-info",
                                    h4 { "{r.name}" }
                                    p { class: "review-role", "{r.role}" }
                                    p { class: "review-context", "🎓 {r.context}" }
                                }
                                StarRating { rating: r.rating }
                            }
                            p { class: "review-text", "\"{r.text}\"" }
                        }
                    }
                    div { class: "carousel-dots",
                        for i in 0..WORKSHOP_REVIEWS.len() {
                            button {
                                key: "{i}",
                                class: if i == active_review { "dot active" } else { "dot" },
                                "aria-label": format!("Go to testimonial {}", i + 1),
                                onclick: move |_| {
                                    review.write().set(i);
                                },
                            }
                        }
                    }
                }
            }

            section { class: "cta-section corporate-cta",
                div { class: "hero-badge", "🏢 Enterprise Solutions" }
                h2 { "Looking for Corporate Training?" }
                p {
                    "We design custom training modules tailored to your company's specific needs, \
                     technology stack, and business objectives. Upskill your entire team efficiently."
                }
                ul { class: "cta-features",
                    for perk in CORPORATE_PERKS {
                        li { key: "{perk}", span { class: "check-icon", "✓" } "{perk}" }
                    }
                }
                div { class: "cta-buttons",
                    Link { to: Route::Contact {}, class: "btn btn-primary", "Request Corporate Quote →" }
                    Link { to: Route::Quote {}, class: "btn btn-secondary", "Schedule Consultation" }
                }
            }
        }
    }
}

#[component]
fn WorkshopDetails(workshop: Workshop) -> Element {
    rsx! {
        if workshop.featured {
            div { class: "featured-badge", "⭐ Most Popular" }
        }
        div { class: "card-header",
            span { class: "card-icon", "{workshop.icon}" }
            span { class: "rating-badge", "★ {workshop.rating}" }
        }
        h3 { class: "card-title", "{workshop.title}" }
        div { class: "meta-info",
            span { "🕒 {workshop.duration}" }
            span { "📊 {workshop.level}" }
            span { "🎥 {workshop.mode}" }
        }
        div { class: "price-section",
            div { class: "price-tag",
                span { class: "price-label", "Investment" }
                span { class: "price", "{workshop.price}" }
            }
            span { class: "next-batch", "📅 {workshop.next_batch}" }
        }
        div { class: "card-block",
            h4 { "✨ What You'll Get" }
            ul { class: "detail-list",
                for item in workshop.highlights {
                    li { key: "{item}", span { class: "check-icon", "✓" } "{item}" }
                }
            }
        }
        div { class: "card-block",
            h4 { "📚 Topics Covered" }
            div { class: "tools",
                for topic in workshop.topics {
                    span { key: "{topic}", class: "tool-tag", "{topic}" }
                }
            }
        }
        div { class: "card-block",
            h4 { "🎯 Skills You'll Master" }
            div { class: "tools",
                for skill in workshop.skills_gained {
                    span { key: "{skill}", class: "skill-tag", "{skill}" }
                }
            }
        }
        div { class: "card-footer",
            span { class: "participants",
                "👥 {workshop.participants} trained"
                if workshop.certificate {
                    " • 🏆 Certificate"
                }
                if workshop.live_projects > 0 {
                    " • {workshop.live_projects} live projects"
                }
            }
            Link { to: Route::Contact {}, class: "btn btn-primary", "Enroll Now →" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_pills_cover_every_level() {
        let ids: Vec<String> = level_pills().into_iter().map(|p| p.id).collect();
        assert_eq!(ids, ["all", "beginner", "intermediate", "advanced"]);
    }
}

//! Case studies.

use dioxus::prelude::*;
use space_core::catalog::{CaseStudy, ProjectLink, CASE_STUDIES};
use space_core::RevealOptions;

use crate::app::Route;
use crate::browser::use_scroll_reveal;

fn category_icon(tag: &str) -> &'static str {
    match tag {
        "Frontend" => "💻",
        "Full Stack" => "🧱",
        "AI/DL" => "🤖",
        _ => "✨",
    }
}

#[component]
pub fn Portfolio() -> Element {
    let reveal = use_scroll_reveal(RevealOptions::RELAXED);
    let mut active = use_signal(|| None::<u32>);
    let project_count = CASE_STUDIES.len();

    rsx! {
        div { class: "portfolio-page",
            header { class: "page-hero",
                div { class: "hero-badge", "💼 Featured Work" }
                h1 { class: "page-title",
                    "Our "
                    span { class: "gradient-text", "Portfolio" }
                }
                p { class: "page-subtitle",
                    "Showcasing exceptional projects across full-stack development, \
                     AI innovation, and cutting-edge frontend experiences."
                }
                div { class: "quick-stats",
                    div { class: "quick-stat",
                        span { class: "stat-number", "{project_count}" }
                        span { class: "stat-label", "Featured Projects" }
                    }
                    div { class: "quick-stat",
                        span { class: "stat-number", "3" }
                        span { class: "stat-label", "Technology Domains" }
                    }
                    div { class: "quick-stat",
                        span { class: "stat-number", "100%" }
                        span { class: "stat-label", "Client Satisfaction" }
                    }
                }
            }

            section { class: "section projects-section",
                for (i, project) in CASE_STUDIES.iter().enumerate() {
                    article {
                        key: "{project.id}",
                        class: reveal.class(i, if active() == Some(project.id) { "case-study active reveal" } else { "case-study reveal" }),
                        "data-reveal-index": "{i}",
                        onmounted: move |e| reveal.observe(e),
                        onmouseenter: move |_| active.set(Some(project.id)),
                        onmouseleave: move |_| active.set(None),
                        CaseStudyCard { project: *project }
                    }
                }
            }

            section { class: "cta-section",
                h2 { "Ready to Build Something Amazing?" }
                p { "Let's collaborate on your next project and create something extraordinary together." }
                div { class: "cta-buttons",
                    Link { to: Route::Contact {}, class: "btn btn-primary", "Start Your Project →" }
                    Link { to: Route::Services {}, class: "btn btn-secondary", "Explore Services" }
                }
            }
        }
    }
}

#[component]
fn CaseStudyCard(project: CaseStudy) -> Element {
    let (metric, metric_label) = project.impact;
    let icon = category_icon(project.category_tag);
    let link_cta = match project.link {
        ProjectLink::Live(_) => "View Live Project →",
        ProjectLink::Source(_) => "View on GitHub →",
    };

    rsx! {
        div {
            class: "project-image",
            style: "background-image: url({project.image})",
            div { class: "category-badge", "{icon} {project.category_tag}" }
            div { class: "impact-badge",
                span { class: "impact-value", "{metric}" }
                span { class: "impact-label", "{metric_label}" }
            }
        }
        div { class: "project-content",
            div { class: "project-meta",
                span { "👤 {project.client}" }
                span { " • {project.year} • " }
                span { "⏱️ {project.duration}" }
            }
            h3 { class: "project-title", "{project.title}" }
            p { class: "project-subtitle", "{project.subtitle}" }
            p { class: "project-description", "{project.description}" }
            h4 { "🛠️ Tech Stack" }
            div { class: "tools",
                for tech in project.tech_stack {
                    span {
                        key: "{tech}",
                        class: "tool-tag",
                        style: "--accent-color: {project.color}",
                        "{tech}"
                    }
                }
            }
            h4 { "✨ Key Features" }
            ul { class: "detail-list",
                for item in project.highlights {
                    li { key: "{item}", span { class: "check-icon", "✓" } "{item}" }
                }
            }
            a {
                href: project.link.url(),
                target: "_blank",
                rel: "noopener noreferrer",
                class: "btn btn-primary",
                style: "--accent-color: {project.color}",
                "{link_cta}"
            }
        }
        div { class: "accent-line", style: "background: {project.color}" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_case_study_has_an_icon() {
        for project in CASE_STUDIES {
            assert_ne!(category_icon(project.category_tag), "", "{}", project.title);
        }
        assert_eq!(category_icon("AI/DL"), "🤖");
        assert_eq!(category_icon("Blockchain"), "✨");
    }
}

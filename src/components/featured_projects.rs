//! Featured projects on the home page, with the AI guide beside them.

use dioxus::prelude::*;
use space_core::chat::ask_about;
use space_core::catalog::{ProjectLink, FEATURED_PROJECTS};
use space_ui::SectionHeader;

use crate::app::Route;
use crate::components::ChatWidget;

fn overlay_label(link: ProjectLink) -> &'static str {
    match link {
        ProjectLink::Live(_) => "🚀 Live Demo",
        ProjectLink::Source(_) => "💻 GitHub",
    }
}

#[component]
pub fn FeaturedProjects() -> Element {
    let mut chat_open = use_signal(|| false);
    let question = use_signal(String::new);

    rsx! {
        section { class: "featured-projects", "aria-label": "Featured work",
            div { class: "featured-header",
                SectionHeader {
                    badge: "💼 Featured Work",
                    title: "Selected",
                    highlight: "Projects",
                    subtitle: "A curated showcase of our best work across web development and AI",
                }
                button { class: "ai-toggle", onclick: move |_| chat_open.toggle(),
                    span { class: "ai-icon", "🤖" }
                    span { if chat_open() { "Close" } else { "Ask AI" } }
                    if !chat_open() {
                        span { class: "ai-pulse" }
                    }
                }
            }

            if chat_open() {
                ChatWidget { input: question, on_close: move |_| chat_open.set(false) }
            }

            div { class: "projects-grid",
                for project in FEATURED_PROJECTS {
                    div {
                        key: "{project.title}",
                        class: "project-card",
                        style: "--gradient: {project.gradient}",
                        div { class: "image-wrapper",
                            img { src: project.image, alt: project.title, class: "project-image", loading: "lazy" }
                            div { class: "overlay",
                                a {
                                    href: project.link.url(),
                                    target: "_blank",
                                    rel: "noopener noreferrer",
                                    class: "overlay-btn",
                                    "{overlay_label(project.link)}"
                                }
                            }
                            div { class: "category-tag", "{project.category}" }
                        }
                        div { class: "project-content",
                            h3 { class: "card-title", "{project.title}" }
                            div { class: "tags",
                                for tech in project.tech_stack.iter().take(3) {
                                    span { key: "{tech}", class: "tag", "{tech}" }
                                }
                            }
                            p { class: "desc", "{project.description}" }
                            div { class: "project-footer",
                                span { class: "impact", "📊 {project.impact}" }
                                button {
                                    class: "ask-btn",
                                    onclick: move |_| {
                                        let mut question = question;
                                        question.set(ask_about(project.title));
                                        chat_open.set(true);
                                    },
                                    "Ask AI"
                                }
                            }
                        }
                    }
                }
            }

            div { class: "featured-cta",
                h3 { "Want to see more?" }
                p { "Explore our complete portfolio with detailed case studies" }
                Link { to: Route::Portfolio {}, class: "btn btn-primary", "View Full Portfolio →" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlay_label_follows_link_kind() {
        assert_eq!(overlay_label(ProjectLink::Live("https://x.dev")), "🚀 Live Demo");
        assert_eq!(overlay_label(ProjectLink::Source("https://github.com/x")), "💻 GitHub");
    }
}

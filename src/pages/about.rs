//! Company story, values and the team.

use dioxus::prelude::*;
use space_core::catalog::{TeamMember, ACHIEVEMENTS, TEAM, VALUES};
use space_core::RevealOptions;
use space_ui::{FeatureCard, SectionHeader, StatTile};

use crate::app::Route;
use crate::browser::use_scroll_reveal;

const PILLARS: [(&str, &str, &str); 4] = [
    (
        "01",
        "Unmatched Experience",
        "Years of hands-on experience delivering complex projects for both corporate giants and agile startups across diverse industries.",
    ),
    (
        "02",
        "Quality Guaranteed",
        "Rigorous testing, comprehensive code reviews, and adherence to industry best practices ensure every deliverable exceeds expectations.",
    ),
    (
        "03",
        "Transparent Communication",
        "Clear, frequent updates keep you informed at every stage. We believe in partnership, not just project delivery.",
    ),
    (
        "04",
        "Competitive Pricing",
        "Enterprise-quality services delivered at transparent, fair rates suitable for startups, students, and established businesses alike.",
    ),
];

#[component]
pub fn About() -> Element {
    let reveal = use_scroll_reveal(RevealOptions::RELAXED);
    let mut active_member = use_signal(|| None::<usize>);

    rsx! {
        div { class: "about-page",
            section { class: "page-hero",
                div { class: "hero-badge", "🌟 About Our Company" }
                h1 { class: "page-title",
                    "Welcome to "
                    span { class: "gradient-text", "SPACE" }
                    "."
                }
                p { class: "page-subtitle",
                    "Your trusted partner for scalable tech solutions, professional excellence, and innovation that matters."
                }
                div { class: "stats-grid",
                    for metric in ACHIEVEMENTS {
                        StatTile { key: "{metric.label}", metric: *metric }
                    }
                }
            }

            section {
                class: reveal.class(0, "section story-section reveal"),
                "data-reveal-index": "0",
                onmounted: move |e| reveal.observe(e),
                div { class: "story-text",
                    span { class: "section-badge", "📖 Our Story" }
                    h2 { class: "section-title", "Who We Are" }
                    p {
                        "SPACE is a technology consultancy and development hub dedicated to bridging \
                         the gap between cutting-edge research and practical, scalable applications. \
                         Founded by passionate technologists, we empower startups, students, and \
                         corporate teams with expertise across the full technology spectrum."
                    }
                    p {
                        "What makes us unique is our integrated approach: top-tier development skills \
                         combined with deep academic knowledge. We offer specialized services like IEEE \
                         paper implementation that few agencies can match, while keeping the agility \
                         of a modern tech startup."
                    }
                    blockquote { class: "story-highlight",
                        "💡 \"We don't just build technology. We create solutions that drive measurable success and lasting impact.\""
                    }
                }
                div { class: "story-visual",
                    div { class: "visual-card",
                        h3 { "Our Mission" }
                        p {
                            "To deliver innovative, high-quality, and transparent technology services \
                             that empower our clients to achieve their goals in the digital age."
                        }
                    }
                    div { class: "visual-card",
                        h3 { "Our Vision" }
                        p {
                            "To be the global benchmark for technical excellence, known for combining \
                             cutting-edge innovation with unwavering commitment to quality."
                        }
                    }
                }
            }

            section {
                class: reveal.class(1, "section values-section reveal"),
                "data-reveal-index": "1",
                onmounted: move |e| reveal.observe(e),
                SectionHeader {
                    badge: "💎 Core Values",
                    title: "What Drives",
                    highlight: "Us",
                    subtitle: "The principles that guide every decision we make and every project we deliver",
                }
                div { class: "card-grid",
                    for value in VALUES {
                        FeatureCard { key: "{value.title}", feature: *value }
                    }
                }
            }

            section {
                class: reveal.class(2, "section team-section reveal"),
                "data-reveal-index": "2",
                onmounted: move |e| reveal.observe(e),
                SectionHeader {
                    badge: "👥 Our Team",
                    title: "Meet the Minds Behind",
                    highlight: "SPACE",
                    subtitle: "Talented individuals passionate about technology, innovation, and making a difference",
                }
                div { class: "team-grid",
                    for (i, member) in TEAM.iter().enumerate() {
                        div {
                            key: "{member.name}",
                            onmouseenter: move |_| active_member.set(Some(i)),
                            onmouseleave: move |_| active_member.set(None),
                            MemberCard { member: *member, active: active_member() == Some(i) }
                        }
                    }
                }
            }

            section {
                class: reveal.class(3, "section trust-section reveal"),
                "data-reveal-index": "3",
                onmounted: move |e| reveal.observe(e),
                SectionHeader { badge: "✨ Why Choose Us", title: "What Sets Us", highlight: "Apart" }
                div { class: "trust-grid",
                    for (number, title, text) in PILLARS {
                        div { key: "{number}", class: "trust-card",
                            div { class: "trust-number", "{number}" }
                            h3 { "{title}" }
                            p { "{text}" }
                        }
                    }
                }
            }

            section { class: "cta-section",
                h2 { "Ready to Work Together?" }
                p {
                    "Let's discuss how we can help bring your vision to life with cutting-edge \
                     technology and expert guidance."
                }
                div { class: "cta-buttons",
                    Link { to: Route::Contact {}, class: "btn btn-primary", "Get in Touch →" }
                    Link { to: Route::Services {}, class: "btn btn-secondary", "Explore Services" }
                }
            }
        }
    }
}

#[component]
fn MemberCard(member: TeamMember, active: bool) -> Element {
    let mut class = String::from("team-card");
    if member.featured {
        class.push_str(" featured");
    }
    if active {
        class.push_str(" active");
    }
    let initial = member.initial();

    rsx! {
        div { class: "{class}",
            if member.featured {
                div { class: "featured-badge", "⭐ Founder" }
            }
            div { class: "member-image",
                if member.photo.is_empty() {
                    div { class: "member-initial", "{initial}" }
                } else {
                    img { src: member.photo, alt: member.name, class: "member-photo", loading: "lazy" }
                }
                div { class: "image-overlay",
                    a { href: member.linkedin, target: "_blank", rel: "noopener noreferrer", "aria-label": "LinkedIn", "in" }
                    a { href: member.github, target: "_blank", rel: "noopener noreferrer", "aria-label": "GitHub", "gh" }
                }
            }
            div { class: "member-content",
                h3 { class: "member-name", "{member.name}" }
                p { class: "member-role", "{member.role}" }
                p { class: "member-expertise", "{member.expertise}" }
                p { class: "member-bio", "{member.bio}" }
                div { class: "member-skills",
                    for skill in member.skills {
                        span { key: "{skill}", class: "skill-tag", "{skill}" }
                    }
                }
            }
        }
    }
}

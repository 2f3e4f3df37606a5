//! Research paper support: domains, methodology, tooling and quality bar.

use dioxus::prelude::*;
use space_core::catalog::{DOMAINS, METHODOLOGY, RESEARCH_AREAS, SUCCESS_METRICS, TOOLS};
use space_core::RevealOptions;
use space_ui::{SectionHeader, StatTile};

use crate::app::Route;
use crate::browser::use_scroll_reveal;

const QUALITY: [(&str, &str, &str); 4] = [
    (
        "🔍",
        "Originality & Plagiarism-Free",
        "Every research project is original work. We ensure complete academic integrity with proper citations and zero tolerance for plagiarism.",
    ),
    (
        "📊",
        "Rigorous Validation",
        "Comprehensive experimental validation with statistical analysis, performance metrics, and comparison with established baseline methods.",
    ),
    (
        "✍️",
        "Professional Documentation",
        "Publication-quality writing with clear explanations, proper formatting, and adherence to IEEE/ACM conference guidelines.",
    ),
    (
        "🤝",
        "Collaborative Learning",
        "We guide and teach throughout the process, ensuring you understand every aspect of your research for future academic growth.",
    ),
];

const SAMPLES: [(&str, &str); 3] = [
    ("📈", "Performance Graphs & Metric Comparisons"),
    ("🖼️", "Simulation Outputs & Visualizations"),
    ("📄", "Formatted Research Papers & Documentation"),
];

#[component]
pub fn IeeeSupport() -> Element {
    let reveal = use_scroll_reveal(RevealOptions::STANDARD);
    let mut active_step = use_signal(|| 0usize);

    rsx! {
        div { class: "ieee-page",
            header { class: "page-hero",
                div { class: "hero-badge", "🎓 Research Guidance & Mentorship" }
                h1 { class: "page-title",
                    "IEEE Research Paper "
                    span { class: "gradient-text", "Publication Support" }
                }
                p { class: "page-subtitle",
                    "End-to-end academic guidance for implementing quality research, \
                     from conceptualization to successful conference publication."
                }
                div { class: "stats-grid",
                    for metric in SUCCESS_METRICS {
                        StatTile { key: "{metric.label}", metric: *metric }
                    }
                }
            }

            section { class: "section philosophy-section",
                div { class: "philosophy-grid",
                    for (title, points) in RESEARCH_AREAS {
                        div { key: "{title}", class: "philosophy-card",
                            h3 { "{title}" }
                            ul { class: "detail-list",
                                for point in points {
                                    li { key: "{point}", span { class: "check-icon", "✓" } "{point}" }
                                }
                            }
                        }
                    }
                }
            }

            section { class: "section",
                SectionHeader {
                    title: "Research Domains We",
                    highlight: "Support",
                    subtitle: "Specialized guidance across cutting-edge areas of computer science and engineering",
                }
                div { class: "domain-grid",
                    for (i, domain) in DOMAINS.iter().enumerate() {
                        div {
                            key: "{domain.name}",
                            class: reveal.class(i, "domain-card reveal"),
                            "data-reveal-index": "{i}",
                            onmounted: move |e| reveal.observe(e),
                            div { class: "domain-icon", "{domain.icon}" }
                            h3 { "{domain.name}" }
                            div { class: "tools",
                                for topic in domain.topics {
                                    span { key: "{topic}", class: "tool-tag", "{topic}" }
                                }
                            }
                        }
                    }
                }
            }

            section { class: "section methodology-section",
                SectionHeader {
                    title: "Our Research",
                    highlight: "Methodology",
                    subtitle: "A systematic, proven approach to quality research output",
                }
                div { class: "timeline",
                    for (i, step) in METHODOLOGY.iter().enumerate() {
                        div {
                            key: "{step.step}",
                            class: if active_step() == i { "step-card active" } else { "step-card" },
                            onmouseenter: move |_| active_step.set(i),
                            div { class: "step-header",
                                span { class: "step-icon", "{step.icon}" }
                                span { class: "step-number", "Step {step.step}" }
                                span { class: "step-duration", "{step.duration}" }
                            }
                            h3 { "{step.title}" }
                            p { "{step.description}" }
                        }
                    }
                }
                p { class: "total-duration",
                    "⏱️ Typical Duration: "
                    strong { "6-10 weeks" }
                    " for implementation + 2-3 weeks for documentation"
                }
            }

            section { class: "section",
                SectionHeader {
                    title: "Tools & Technologies We",
                    highlight: "Work With",
                    subtitle: "Industry-standard platforms and frameworks for robust research implementation",
                }
                div { class: "tools-grid",
                    for tool in TOOLS {
                        div { key: "{tool.name}", class: "tool-card",
                            span { class: "tool-icon", "{tool.icon}" }
                            span { class: "tool-name", "{tool.name}" }
                            span { class: "tool-category", "{tool.category}" }
                        }
                    }
                }
            }

            section { class: "section quality-section",
                SectionHeader { title: "Our Quality", highlight: "Standards" }
                div { class: "card-grid",
                    for (icon, title, text) in QUALITY {
                        div { key: "{title}", class: "feature-card",
                            div { class: "feature-icon", "{icon}" }
                            h3 { class: "feature-title", "{title}" }
                            p { class: "feature-description", "{text}" }
                        }
                    }
                }
            }

            section { class: "section sample-section",
                SectionHeader {
                    title: "Research Output",
                    highlight: "Examples",
                    subtitle: "Sample visualizations, simulation results, and formatted papers (available for detailed discussion during consultation)",
                }
                div { class: "sample-grid",
                    for (icon, text) in SAMPLES {
                        div { key: "{text}", class: "sample-placeholder",
                            div { class: "placeholder-icon", "{icon}" }
                            p { "{text}" }
                        }
                    }
                }
                p { class: "sample-note",
                    "💡 Complete research portfolios and case studies shared during consultation sessions"
                }
            }

            section { class: "cta-section",
                div { class: "hero-badge", "🚀 Start Your Research Journey" }
                h2 { "Ready to Begin Your Research Project?" }
                p {
                    "Let's discuss your research ideas and chart a path toward successful publication. \
                     We're here to guide you every step of the way."
                }
                div { class: "cta-buttons",
                    Link { to: Route::Contact {}, class: "btn btn-primary", "Discuss Your Research Idea →" }
                    Link { to: Route::Quote {}, class: "btn btn-secondary", "Schedule Consultation" }
                }
                p { class: "cta-footnote",
                    "📧 Free initial consultation to explore your research interests and goals"
                }
            }
        }
    }
}

//! Full service catalog with search, category pills and a comparison table.

use dioxus::prelude::*;
use space_core::catalog::{filter_services, CategoryFilter, ServiceOffering, HERO_TRUST};
use space_core::RevealOptions;
use space_ui::{FilterPills, Pill};

use crate::app::Route;
use crate::browser::{scroll_to_element, use_scroll_reveal, use_scrolled};

/// The comparison table shows at most this many services.
const COMPARE_COLUMNS: usize = 3;

/// The sidebar sticks once the hero has scrolled away.
const STICKY_AFTER_PX: f64 = 300.0;

fn category_pills() -> Vec<Pill> {
    CategoryFilter::pills()
        .map(|f| Pill::new(f.id(), f.label()).with_icon(f.icon()))
        .collect()
}

/// "Showing 2 services matching "react" in Development"
fn results_summary(count: usize, query: &str, filter: CategoryFilter) -> String {
    let noun = if count == 1 { "service" } else { "services" };
    let mut text = format!("Showing {} {}", count, noun);
    if !query.is_empty() {
        text.push_str(&format!(" matching \"{}\"", query));
    }
    if filter != CategoryFilter::All {
        text.push_str(&format!(" in {}", filter.label()));
    }
    text
}

fn tick(flag: bool) -> &'static str {
    if flag {
        "✓"
    } else {
        "—"
    }
}

#[component]
pub fn Services() -> Element {
    let mut filter = use_signal(CategoryFilter::default);
    let mut query = use_signal(String::new);
    let mut comparing = use_signal(|| false);
    let sticky = use_scrolled(STICKY_AFTER_PX);
    let reveal = use_scroll_reveal(RevealOptions::FAST);

    // A new result set animates in from scratch
    use_effect(move || {
        let _ = filter();
        let _ = query();
        reveal.reset();
    });

    let results = filter_services(filter(), &query());
    let filtered = filter() != CategoryFilter::All || !query().is_empty();
    let summary = results_summary(results.len(), &query(), filter());
    let compared: Vec<&ServiceOffering> = results.iter().copied().take(COMPARE_COLUMNS).collect();

    let mut clear_filters = move || {
        query.set(String::new());
        filter.set(CategoryFilter::All);
    };

    rsx! {
        div { class: "services-page",
            header { class: "page-hero",
                div { class: "hero-badge", "⚡ Premium Tech Services" }
                h1 { class: "page-title",
                    "Comprehensive Tech "
                    span { class: "gradient-text", "Solutions" }
                    " for Every Need"
                }
                p { class: "page-subtitle",
                    "From foundational development to cutting-edge AI and academic publishing, \
                     we deliver excellence across the complete technology spectrum."
                }

                div { class: "search-container",
                    span { class: "search-icon", "🔍" }
                    input {
                        r#type: "text",
                        class: "search-input",
                        placeholder: "Search services, technologies, or features...",
                        "aria-label": "Search services",
                        value: "{query}",
                        oninput: move |e| query.set(e.value()),
                    }
                    if !query().is_empty() {
                        button {
                            class: "clear-search",
                            "aria-label": "Clear search",
                            onclick: move |_| query.set(String::new()),
                            "✕"
                        }
                    }
                }

                FilterPills {
                    pills: category_pills(),
                    selected: filter().id().to_string(),
                    aria_label: "Service categories",
                    on_select: move |id: String| {
                        if let Some(f) = CategoryFilter::from_id(&id) {
                            filter.set(f);
                        }
                    },
                }

                div { class: "quick-stats",
                    for metric in HERO_TRUST {
                        div { key: "{metric.label}", class: "quick-stat",
                            span { class: "stat-number", "{metric.value}" }
                            span { class: "stat-label", "{metric.label}" }
                        }
                    }
                }
            }

            div { class: "content-wrapper",
                aside { class: if sticky() { "sidebar sticky" } else { "sidebar" },
                    div { class: "sidebar-header",
                        h4 { "📑 Quick Jump" }
                        span { class: "service-count", "{results.len()}" }
                    }
                    ul { class: "sidebar-nav",
                        for service in results.iter().copied() {
                            li { key: "{service.id}",
                                button {
                                    class: "sidebar-link",
                                    onclick: move |_| scroll_to_element(service.id),
                                    span { class: "service-icon", "{service.icon}" }
                                    span { class: "sidebar-link-content",
                                        span { class: "sidebar-link-title", "{service.title}" }
                                        span { class: "sidebar-link-price", "{service.price}" }
                                    }
                                    if service.popular {
                                        span { class: "popular-badge", "🔥" }
                                    }
                                }
                            }
                        }
                    }
                    button { class: "comparison-button", onclick: move |_| comparing.toggle(),
                        if comparing() { "📊 Hide Services ↑" } else { "📊 Compare Services →" }
                    }
                }

                main { class: "services-main",
                    if filtered {
                        div { class: "results-info",
                            p { class: "results-text", "{summary}" }
                            button { class: "clear-filters", onclick: move |_| clear_filters(), "Clear Filters" }
                        }
                    }

                    if comparing() && compared.len() >= 2 {
                        ComparisonTable { services: compared.clone() }
                    }

                    div { class: "services-grid",
                        for (i, service) in results.iter().copied().enumerate() {
                            article {
                                key: "{service.id}",
                                id: service.id,
                                class: reveal.class(i, if service.popular { "service-card popular reveal" } else { "service-card reveal" }),
                                "data-reveal-index": "{i}",
                                onmounted: move |e| reveal.observe(e),
                                ServiceDetails { service: *service }
                            }
                        }
                    }

                    if results.is_empty() {
                        div { class: "empty-state",
                            div { class: "empty-icon", "🔍" }
                            h3 { "No services found" }
                            p {
                                "We couldn't find any services matching your criteria. \
                                 Try adjusting your search or filter settings."
                            }
                            button { class: "btn btn-primary", onclick: move |_| clear_filters(), "Reset All Filters ↻" }
                        }
                    } else {
                        div { class: "services-cta",
                            h3 { "Not sure which service fits?" }
                            p { "Tell us about your project and we'll recommend the right approach." }
                            div { class: "cta-buttons",
                                Link { to: Route::Quote {}, class: "btn btn-primary", "Get Custom Quote →" }
                                Link { to: Route::Contact {}, class: "btn btn-secondary", "Talk to an Expert" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ComparisonTable(services: Vec<&'static ServiceOffering>) -> Element {
    rsx! {
        div { class: "comparison-table",
            h3 { "📊 Service Comparison" }
            p { "Compare features, pricing, and delivery times side-by-side" }
            div { class: "table-wrapper",
                table {
                    thead {
                        tr {
                            th { "Feature" }
                            for s in services.iter() {
                                th { key: "{s.id}",
                                    span { "{s.icon} {s.title}" }
                                    if s.popular {
                                        span { class: "table-popular", "Most Popular" }
                                    }
                                }
                            }
                        }
                    }
                    tbody {
                        tr {
                            td { "⏱️ Delivery Time" }
                            for s in services.iter() { td { key: "{s.id}", "{s.delivery_time}" } }
                        }
                        tr {
                            td { "💰 Starting Price" }
                            for s in services.iter() { td { key: "{s.id}", strong { "{s.price}" } } }
                        }
                        tr {
                            td { "📱 Responsive Design" }
                            for s in services.iter() { td { key: "{s.id}", "{tick(s.features.responsive)}" } }
                        }
                        tr {
                            td { "🚀 Deployment" }
                            for s in services.iter() { td { key: "{s.id}", "{tick(s.features.deployment)}" } }
                        }
                        tr {
                            td { "🛠️ Support Period" }
                            for s in services.iter() { td { key: "{s.id}", "{s.features.support}" } }
                        }
                        tr {
                            td { "🔄 Revisions" }
                            for s in services.iter() { td { key: "{s.id}", "{s.features.revisions}" } }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ServiceDetails(service: ServiceOffering) -> Element {
    let (quote, author) = service.testimonial;

    rsx! {
        if service.popular {
            div { class: "popular-tag", "🔥 Most Popular" }
        }
        if !service.badge.is_empty() {
            div { class: "service-badge", "{service.badge}" }
        }
        div { class: "card-header",
            span { class: "card-icon", "{service.icon}" }
            div { class: "title-content",
                h3 { class: "card-title", "{service.title}" }
                span { class: "price-tag", "💎 {service.price}" }
            }
            span { class: "delivery-badge", "⚡ {service.delivery_time}" }
        }
        p { class: "card-description", "{service.description}" }
        div { class: "card-details-grid",
            div { class: "detail-column",
                h4 { "🎯 What's Included" }
                ul { class: "detail-list",
                    for detail in service.details {
                        li { key: "{detail}", span { class: "check-icon", "✓" } "{detail}" }
                    }
                }
            }
            div { class: "detail-column",
                h4 { "🛠️ Technology Stack" }
                div { class: "tools",
                    for tool in service.tools {
                        span { key: "{tool}", class: "tool-tag", "{tool}" }
                    }
                }
                h4 { "✨ Included Features" }
                div { class: "feature-list",
                    if service.features.deployment {
                        span { class: "feature-badge", "✓ Deployment" }
                    }
                    if service.features.maintenance {
                        span { class: "feature-badge", "✓ Maintenance" }
                    }
                    span { class: "feature-badge", "✓ {service.features.support} Support" }
                    span { class: "feature-badge", "✓ {service.features.revisions} Revisions" }
                }
            }
        }
        if !quote.is_empty() {
            blockquote { class: "service-testimonial",
                p { "“{quote}”" }
                cite { "{author}" }
            }
        }
        div { class: "portfolio-section",
            span { "⭐ Portfolio: " }
            a { href: service.portfolio_link, target: "_blank", rel: "noopener noreferrer",
                "{service.portfolio_example} ↗"
            }
        }
        div { class: "card-actions",
            Link { to: Route::Quote {}, class: "btn btn-primary", "Start This Project →" }
            Link { to: Route::Contact {}, class: "btn btn-secondary", "📞 Consult Now" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use space_core::catalog::ServiceCategory;

    #[test]
    fn test_pills_start_with_all() {
        let pills = category_pills();
        assert_eq!(pills[0].id, "all");
        assert_eq!(pills.len(), ServiceCategory::ALL.len() + 1);
    }

    #[test]
    fn test_summary_mentions_query_and_category() {
        assert_eq!(results_summary(1, "", CategoryFilter::All), "Showing 1 service");
        let filter = CategoryFilter::Only(ServiceCategory::ALL[0]);
        let text = results_summary(3, "react", filter);
        assert!(text.starts_with("Showing 3 services matching \"react\" in "));
        assert!(text.ends_with(filter.label()));
    }
}

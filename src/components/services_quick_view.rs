//! Auto-scrolling strip of core services with flip cards and a grid mode.

use std::time::Duration;

use dioxus::prelude::*;
use gloo::timers::future::sleep;
use space_core::carousel::{Marquee, ViewMode};
use space_core::catalog::{QuickService, QUICK_SERVICES};
use space_ui::SectionHeader;

use crate::app::Route;

/// Roughly one animation frame.
const FRAME: Duration = Duration::from_millis(16);

#[component]
pub fn ServicesQuickView() -> Element {
    let mut marquee = use_signal(|| Marquee::new(QUICK_SERVICES.len()));

    use_future(move || async move {
        loop {
            sleep(FRAME).await;
            if marquee.peek().is_running() {
                marquee.write().tick();
            }
        }
    });

    let state = marquee();
    let grid = state.mode() == ViewMode::Grid;
    let (toggle_icon, toggle_label) = if grid {
        ("⇄", "Carousel View")
    } else {
        ("▦", "Grid View")
    };
    let offset = state.position();
    let status = if state.is_paused() {
        "Paused - Hover to resume"
    } else {
        "Auto-scrolling - Hover to pause"
    };

    rsx! {
        section { class: "services-quick-view", "aria-label": "Our core services",
            div { class: "header-wrapper",
                SectionHeader {
                    badge: "⚡ What We Offer",
                    title: "Our Core",
                    highlight: "Services",
                    subtitle: "Explore our specialized offerings, from scalable development to advanced AI and academic support.",
                }
                button {
                    class: "view-toggle",
                    "aria-label": "Switch to {toggle_label}",
                    onclick: move |_| {
                        marquee.write().toggle_mode();
                    },
                    span { class: "toggle-icon", "{toggle_icon}" }
                    span { "{toggle_label}" }
                }
            }

            if grid {
                div { class: "services-grid",
                    for (i, service) in QUICK_SERVICES.iter().enumerate() {
                        ServiceCard {
                            key: "{i}",
                            service: *service,
                            flipped: state.active_card() == Some(i),
                            onclick: move |_| marquee.write().click_card(i),
                        }
                    }
                }
            } else {
                div { class: "carousel-section",
                    div { class: "carousel-wrapper",
                        div { class: "fade-left" }
                        div { class: "fade-right" }
                        div {
                            class: "carousel-track",
                            style: "transform: translateX(-{offset}px)",
                            onmouseenter: move |_| marquee.write().set_paused(true),
                            onmouseleave: move |_| marquee.write().set_paused(false),
                            for i in 0..QUICK_SERVICES.len() * Marquee::COPIES {
                                ServiceCard {
                                    key: "{i}",
                                    service: QUICK_SERVICES[i % QUICK_SERVICES.len()],
                                    flipped: state.active_card() == Some(i),
                                    onclick: move |_| marquee.write().click_card(i),
                                }
                            }
                        }
                    }
                    div { class: "carousel-controls",
                        span { class: if state.is_paused() { "status-dot" } else { "status-dot active" } }
                        span { class: "status-text", "{status}" }
                    }
                }
            }

            div { class: "quick-view-cta",
                Link { to: Route::Services {}, class: "btn btn-secondary", "View All Services →" }
            }
        }
    }
}

#[component]
fn ServiceCard(service: QuickService, flipped: bool, onclick: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: if flipped { "service-card flipped" } else { "service-card" },
            style: "--card-color: {service.color}; --card-gradient: {service.gradient}",
            onclick: move |_| onclick.call(()),
            div { class: "card-inner",
                div { class: "card-front",
                    span { class: "card-icon", "{service.icon}" }
                    h3 { class: "card-title", "{service.title}" }
                    p { class: "card-description", "{service.details}" }
                    span { class: "flip-prompt", "Click to explore ↻" }
                }
                div { class: "card-back",
                    span { class: "back-icon", "{service.icon}" }
                    h3 { class: "back-title", "In-Depth Details" }
                    p { class: "back-description", "{service.back_details}" }
                    Link { to: Route::Services {}, class: "details-btn", "View Full Details →" }
                }
            }
        }
    }
}

//! Top navigation bar with the mobile slide-in menu.

use dioxus::prelude::*;

use crate::app::Route;
use crate::browser::{lock_body_scroll, use_scrolled};

/// Navbar turns solid after this many pixels of scroll.
const SCROLLED_AFTER_PX: f64 = 20.0;

/// Label, icon for the mobile menu, target.
const NAV_LINKS: [(&str, &str, &str); 7] = [
    ("Home", "🏠", "/"),
    ("Services", "⚙️", "/services"),
    ("Workshops", "🎓", "/workshops"),
    ("IEEE", "📝", "/ieee-support"),
    ("Portfolio", "💼", "/portfolio"),
    ("About", "ℹ️", "/about"),
    ("Contact", "📧", "/contact"),
];

#[component]
pub fn Navbar() -> Element {
    let route = use_route::<Route>();
    let scrolled = use_scrolled(SCROLLED_AFTER_PX);
    let mut menu_open = use_signal(|| false);

    // Any navigation closes the menu
    use_effect(use_reactive!(|route| {
        tracing::trace!(%route, "Route changed");
        menu_open.set(false);
    }));

    use_effect(move || lock_body_scroll(menu_open()));
    use_drop(|| lock_body_scroll(false));

    let header_class = if scrolled() { "navbar scrolled" } else { "navbar" };
    let toggle = move |_| menu_open.toggle();

    rsx! {
        header { class: "{header_class}", role: "banner",
            div { class: "navbar-container",
                Link { to: Route::Home {}, class: "logo",
                    span { class: "logo-text", "SPACE" }
                    span { class: "logo-dot", "." }
                }

                nav { class: "nav-links", role: "navigation", "aria-label": "Main navigation",
                    for (label, _, path) in NAV_LINKS {
                        Link { key: "{path}", to: path, class: "nav-link", active_class: "active",
                            span { class: "link-text", "{label}" }
                            span { class: "link-underline" }
                        }
                    }
                }

                Link { to: Route::Quote {}, class: "nav-cta",
                    span { "Get Quote" }
                    span { class: "cta-arrow", "→" }
                }

                button {
                    class: if menu_open() { "hamburger open" } else { "hamburger" },
                    "aria-label": if menu_open() { "Close menu" } else { "Open menu" },
                    "aria-expanded": "{menu_open}",
                    onclick: toggle,
                    span { class: "line" }
                    span { class: "line" }
                    span { class: "line" }
                }
            }
        }

        div {
            class: if menu_open() { "nav-overlay active" } else { "nav-overlay" },
            "aria-hidden": "true",
            onclick: toggle,
        }

        nav {
            class: if menu_open() { "mobile-menu open" } else { "mobile-menu" },
            role: "navigation",
            "aria-label": "Mobile navigation",
            div { class: "mobile-header",
                span { class: "mobile-logo", "SPACE" span { class: "logo-dot", "." } }
                button { class: "close-btn", "aria-label": "Close menu", onclick: toggle, "✕" }
            }
            div { class: "mobile-links",
                for (label, icon, path) in NAV_LINKS {
                    Link { key: "{path}", to: path, class: "mobile-link", active_class: "active",
                        span { class: "mobile-link-icon", "{icon}" }
                        span { "{label}" }
                    }
                }
            }
            Link { to: Route::Quote {}, class: "mobile-cta", "Get Free Quote →" }
        }
    }
}

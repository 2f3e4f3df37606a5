use dioxus::prelude::*;
use space_core::SiteConfig;

use crate::components::{Footer, Navbar};
use crate::pages::{About, Contact, Home, IeeeSupport, NotFound, Portfolio, Quote, Services, Workshops};
use crate::theme::{colors, GLOBAL_STYLES};

/// Application routes.
///
/// Every page sits inside [`Shell`], which draws the navbar and footer and
/// scrolls back to the top on navigation.
#[derive(Clone, Routable, PartialEq, Debug)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Shell)]
        #[route("/")]
        Home {},
        #[route("/about")]
        About {},
        #[route("/services")]
        Services {},
        #[route("/workshops")]
        Workshops {},
        #[route("/ieee-support")]
        IeeeSupport {},
        #[route("/portfolio")]
        Portfolio {},
        #[route("/contact")]
        Contact {},
        #[route("/quote")]
        Quote {},
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

/// Root application component.
///
/// Provides global styles, the site config and routing.
#[component]
pub fn App() -> Element {
    use_context_provider(|| {
        let config = SiteConfig::from_build_env();
        if !config.relay.is_configured() {
            tracing::warn!(
                missing = config.relay.missing_credential().unwrap_or_default(),
                "Email relay not configured; CTA messages will fall back to WhatsApp"
            );
        }
        config
    });

    rsx! {
        document::Title { "SPACE | Web, AI & Research Solutions" }
        document::Meta { name: "theme-color", content: colors::SPACE_BLACK.to_string() }
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}

/// Navbar, page, footer.
#[component]
fn Shell() -> Element {
    let route = use_route::<Route>();

    // New page, start at the top
    use_effect(use_reactive!(|route| {
        tracing::debug!(?route, "Navigated");
        crate::browser::scroll_to_top();
    }));

    rsx! {
        div { class: "container",
            Navbar {}
            main { class: "main-content", Outlet::<Route> {} }
            Footer {}
        }
    }
}

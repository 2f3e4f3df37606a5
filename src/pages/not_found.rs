use dioxus::prelude::*;

use crate::app::Route;

/// Catch-all for unknown paths.
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    tracing::debug!(%path, "No route matched");

    rsx! {
        div { class: "not-found",
            h1 { class: "not-found-code", "404" }
            h2 { "Page Not Found" }
            p { "The page you're looking for doesn't exist in this universe." }
            Link { to: Route::Home {}, class: "btn btn-primary", "Return Home" }
        }
    }
}

//! Section header: optional badge, title with a gradient-highlighted tail,
//! optional subtitle.

use dioxus::prelude::*;

#[derive(Clone, PartialEq, Props)]
pub struct SectionHeaderProps {
    pub title: String,
    /// Rendered after the title in the gradient style
    #[props(default)]
    pub highlight: Option<String>,
    #[props(default)]
    pub badge: Option<String>,
    #[props(default)]
    pub subtitle: Option<String>,
    /// Extra classes, typically the reveal class
    #[props(default)]
    pub class: Option<String>,
}

#[component]
pub fn SectionHeader(props: SectionHeaderProps) -> Element {
    let class = super::button::join_class("section-header", props.class.as_deref());

    rsx! {
        div { class: "{class}",
            if let Some(badge) = &props.badge {
                span { class: "section-badge", "{badge}" }
            }
            h2 { class: "section-title",
                "{props.title}"
                if let Some(highlight) = &props.highlight {
                    " "
                    span { class: "gradient-text", "{highlight}" }
                }
            }
            if let Some(subtitle) = &props.subtitle {
                p { class: "section-subtitle", "{subtitle}" }
            }
        }
    }
}

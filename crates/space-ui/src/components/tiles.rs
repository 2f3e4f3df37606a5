//! Small content tiles used across pages.

use dioxus::prelude::*;
use space_core::catalog::{stars, Feature, Metric};

/// Five-star rating row
#[component]
pub fn StarRating(rating: u8) -> Element {
    let label = format!("{} out of 5 stars", rating.min(5));
    let row = stars(rating);
    rsx! {
        div { class: "star-rating", "aria-label": "{label}", "{row}" }
    }
}

/// Headline figure, e.g. `500+ Projects Delivered`
#[derive(Clone, PartialEq, Props)]
pub struct StatTileProps {
    pub metric: Metric,
    #[props(default)]
    pub class: Option<String>,
}

#[component]
pub fn StatTile(props: StatTileProps) -> Element {
    let class = super::button::join_class("stat-tile", props.class.as_deref());
    let Metric { value, label, icon } = props.metric;

    rsx! {
        div { class: "{class}",
            span { class: "stat-icon", "{icon}" }
            span { class: "stat-value", "{value}" }
            span { class: "stat-label", "{label}" }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct FeatureCardProps {
    pub feature: Feature,
    #[props(default)]
    pub class: Option<String>,
}

/// Icon, title and a line of text
#[component]
pub fn FeatureCard(props: FeatureCardProps) -> Element {
    let class = super::button::join_class("feature-card", props.class.as_deref());
    let Feature {
        icon,
        title,
        description,
    } = props.feature;

    rsx! {
        div { class: "{class}",
            div { class: "feature-icon", "{icon}" }
            h3 { class: "feature-title", "{title}" }
            p { class: "feature-description", "{description}" }
        }
    }
}

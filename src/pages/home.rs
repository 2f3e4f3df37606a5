use dioxus::prelude::*;

use crate::components::{
    CtaBanner, FeaturedProjects, Hero, ServicesQuickView, Testimonials, UspSection,
};

/// The landing page: hero, selling points, services, work and testimonials.
#[component]
pub fn Home() -> Element {
    rsx! {
        div { class: "home-page",
            Hero {}
            UspSection {}
            ServicesQuickView {}
            FeaturedProjects {}
            Testimonials {}
            CtaBanner {}
        }
    }
}

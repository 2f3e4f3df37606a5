//! Site footer: brand, newsletter signup, link columns and contact details.

use dioxus::prelude::*;
use space_core::catalog::{FOOTER_SECTIONS, HERO_TRUST, SOCIAL_LINKS};
use space_core::form::is_valid_email;

use crate::app::Route;
use crate::context::use_site_config;

#[component]
pub fn Footer() -> Element {
    let config = use_site_config();
    let mut email = use_signal(String::new);
    let year = js_sys::Date::new_0().get_full_year();

    let subscribe = move |evt: FormEvent| {
        evt.prevent_default();
        let address = email();
        // No newsletter backend; the signup is only recorded in the log
        if is_valid_email(&address) {
            tracing::debug!("Newsletter signup received");
            email.set(String::new());
        }
    };

    let mailto = format!("mailto:{}", config.contact.email);
    let tel = config.contact.tel_link();

    rsx! {
        footer { class: "footer",
            div { class: "footer-container",
                div { class: "footer-top",
                    div { class: "brand-col",
                        Link { to: Route::Home {}, class: "logo",
                            span { class: "logo-text", "SPACE" }
                            span { class: "logo-dot", "." }
                        }
                        p { class: "tagline", "Building the future with innovative tech solutions" }
                        p { class: "footer-description",
                            "We specialize in Full Stack Development, AI/Deep Learning, and IEEE Paper \
                             assistance, delivering fast, high-quality, and professional services."
                        }
                        div { class: "social-section",
                            h4 { class: "social-title", "Follow Us" }
                            div { class: "social-links",
                                for social in SOCIAL_LINKS {
                                    a {
                                        key: "{social.name}",
                                        href: social.url,
                                        target: "_blank",
                                        rel: "noopener noreferrer",
                                        class: "social-link",
                                        style: "--social-color: {social.color}",
                                        "aria-label": social.name,
                                        span { class: "social-icon", "{social.icon}" }
                                    }
                                }
                            }
                        }
                    }

                    div { class: "newsletter-col",
                        h3 { class: "newsletter-title", "Stay Updated" }
                        p { class: "newsletter-text",
                            "Subscribe to our newsletter for the latest tech insights and updates"
                        }
                        form { class: "newsletter-form", onsubmit: subscribe,
                            div { class: "input-wrapper",
                                input {
                                    r#type: "email",
                                    class: "email-input",
                                    placeholder: "Enter your email",
                                    required: true,
                                    value: "{email}",
                                    oninput: move |e| email.set(e.value()),
                                }
                                button { r#type: "submit", class: "subscribe-btn",
                                    span { "Subscribe" }
                                    span { class: "btn-arrow", "→" }
                                }
                            }
                        }
                        div { class: "quick-stats",
                            for stat in HERO_TRUST {
                                div { key: "{stat.label}", class: "stat-item",
                                    span { class: "stat-num", "{stat.value}" }
                                    span { class: "stat-label", "{stat.label}" }
                                }
                            }
                        }
                    }
                }

                div { class: "links-grid",
                    for (title, links) in FOOTER_SECTIONS {
                        div { key: "{title}", class: "link-col",
                            h4 { class: "link-title", "{title}" }
                            ul { class: "link-list",
                                for link in links.iter() {
                                    li { key: "{link.name}",
                                        Link { to: link.path, class: "footer-link",
                                            span { class: "link-icon", "→" }
                                            span { "{link.name}" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }

                div { class: "contact-info",
                    a { href: "{mailto}", class: "contact-link",
                        span { class: "contact-icon", "📧" }
                        span { "{config.contact.email}" }
                    }
                    a { href: "{tel}", class: "contact-link",
                        span { class: "contact-icon", "📞" }
                        span { "{config.contact.phone}" }
                    }
                }
            }

            div { class: "bottom-bar",
                div { class: "bottom-container",
                    p { class: "copyright",
                        "© {year} SPACE. All rights reserved. Made with ❤️ in India"
                    }
                    div { class: "badges",
                        span { class: "badge", "🔒 Secure" }
                        span { class: "badge", "✓ Verified" }
                        span { class: "badge", "🚀 Fast" }
                    }
                }
            }
        }
    }
}

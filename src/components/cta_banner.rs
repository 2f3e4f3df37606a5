//! Closing call-to-action with the quote modal and WhatsApp quick-connect.

use dioxus::prelude::*;
use gloo::timers::future::sleep;
use space_core::cta::{validate_cta, whatsapp_intro, CtaErrors, CLOSE_DELAY};
use space_core::form::FormField;
use space_core::{CtaDraft, CtaField, CtaService, RelayStatus};
use space_ui::{
    Button, ButtonVariant, CloseButton, SelectField, SelectOption, TextAreaField, TextField,
};

use crate::browser::{navigate_to, open_in_new_tab};
use crate::context::use_site_config;
use crate::relay::send_enquiry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Modal {
    Closed,
    Quote,
    WhatsApp,
}

const QUICK_STATS: [(&str, &str); 3] = [
    ("⚡", "24hr Response"),
    ("💬", "Free Consultation"),
    ("🎯", "Custom Solutions"),
];

fn service_options() -> Vec<SelectOption> {
    CtaService::ALL
        .iter()
        .map(|s| SelectOption::new(s.label(), s.label()))
        .collect()
}

fn error_for(errors: &CtaErrors, field: CtaField) -> Option<String> {
    errors.get(field).map(str::to_string)
}

#[component]
pub fn CtaBanner() -> Element {
    let config = use_site_config();
    let mut modal = use_signal(|| Modal::Closed);
    let mut draft = use_signal(CtaDraft::new);
    let mut errors = use_signal(CtaErrors::new);
    let mut status = use_signal(RelayStatus::default);

    let tel = config.contact.tel_link();

    let relay_config = config.relay.clone();
    let send = move |evt: FormEvent| {
        evt.prevent_default();
        if status().is_sending() {
            return;
        }
        let found = validate_cta(&draft.read());
        if !found.is_empty() {
            errors.set(found);
            return;
        }
        errors.set(CtaErrors::new());
        status.set(RelayStatus::Sending);

        let relay_config = relay_config.clone();
        let snapshot = draft();
        spawn(async move {
            match send_enquiry(&relay_config, &snapshot).await {
                Ok(()) => {
                    status.set(RelayStatus::Sent);
                    draft.set(CtaDraft::new());
                    sleep(CLOSE_DELAY).await;
                    modal.set(Modal::Closed);
                    status.set(RelayStatus::Idle);
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Quote modal send failed");
                    status.set(RelayStatus::Failed);
                }
            }
        });
    };

    let whatsapp_config = config.clone();
    let quick_connect = move |evt: FormEvent| {
        evt.prevent_default();
        let snapshot = draft();
        open_in_new_tab(&whatsapp_config.contact.whatsapp_link(&whatsapp_intro(&snapshot)));

        // A name and email are enough to also leave a copy in the inbox
        if snapshot.can_relay() {
            let relay_config = whatsapp_config.relay.clone();
            spawn(async move {
                if let Err(e) = send_enquiry(&relay_config, &snapshot).await {
                    tracing::debug!(error = %e, "Background enquiry copy not sent");
                }
            });
        }
        modal.set(Modal::Closed);
    };

    let mut close = move || {
        modal.set(Modal::Closed);
        status.set(RelayStatus::Idle);
    };

    let current = modal();
    let form = draft();
    let field_errors = errors();
    let mailto = format!("mailto:{}", config.contact.email);

    rsx! {
        section { class: "cta-banner", "aria-label": "Start a project",
            div { class: "cta-content",
                div { class: "badge",
                    span { class: "badge-icon", "🚀" }
                    span { "Let's Build Together" }
                }
                h2 { class: "cta-title",
                    "Ready to Launch Your "
                    span { class: "highlight", "Next Project?" }
                }
                p { class: "cta-subtitle",
                    "Get in touch with our expert team today for a consultation and customized quote."
                }
                div { class: "quick-stats",
                    for (icon, label) in QUICK_STATS {
                        div { key: "{label}", class: "quick-stat",
                            span { class: "stat-icon", "{icon}" }
                            span { "{label}" }
                        }
                    }
                }
            }
            div { class: "cta-buttons",
                Button { onclick: move |_| modal.set(Modal::Quote), "Get a Quote Now →" }
                Button {
                    variant: ButtonVariant::WhatsApp,
                    onclick: move |_| modal.set(Modal::WhatsApp),
                    "💬 WhatsApp Us"
                }
                button {
                    class: "btn btn-ghost",
                    onclick: {
                        let tel = tel.clone();
                        move |_| navigate_to(&tel)
                    },
                    "📞 Call Now"
                }
            }
        }

        if current != Modal::Closed {
            div { class: "modal-overlay", onclick: move |_| close(),
                div {
                    class: "modal",
                    role: "dialog",
                    "aria-modal": "true",
                    onclick: move |e| e.stop_propagation(),
                    CloseButton { onclick: move |_| close() }

                    if current == Modal::Quote {
                        div { class: "modal-header",
                            h3 { "Get Your Free Quote" }
                            p { "Fill out the form below and we'll get back to you within 24 hours!" }
                        }
                        form { class: "contact-form", onsubmit: send, novalidate: true,
                            TextField {
                                id: "cta-name",
                                label: "👤 Full Name",
                                value: form.name.clone(),
                                placeholder: "John Doe",
                                required: true,
                                error: error_for(&field_errors, CtaField::Name),
                                oninput: move |v| draft.write().set(CtaField::Name, v),
                            }
                            div { class: "form-row",
                                TextField {
                                    id: "cta-email",
                                    label: "📧 Email Address",
                                    input_type: "email",
                                    value: form.email.clone(),
                                    placeholder: "john@example.com",
                                    required: true,
                                    error: error_for(&field_errors, CtaField::Email),
                                    oninput: move |v| draft.write().set(CtaField::Email, v),
                                }
                                TextField {
                                    id: "cta-phone",
                                    label: "📱 Phone Number",
                                    input_type: "tel",
                                    value: form.phone.clone(),
                                    placeholder: "+91 9876543210",
                                    required: true,
                                    error: error_for(&field_errors, CtaField::Phone),
                                    oninput: move |v| draft.write().set(CtaField::Phone, v),
                                }
                            }
                            SelectField {
                                id: "cta-service",
                                label: "🎯 Service Interested In",
                                value: form.service.label().to_string(),
                                options: service_options(),
                                required: true,
                                onchange: move |v| draft.write().set(CtaField::Service, v),
                            }
                            TextAreaField {
                                id: "cta-message",
                                label: "💬 Project Details",
                                value: form.message.clone(),
                                rows: 4,
                                placeholder: "Tell us about your project requirements...",
                                oninput: move |v| draft.write().set(CtaField::Message, v),
                            }
                            Button {
                                button_type: "submit",
                                class: "submit-button",
                                loading: status().is_sending(),
                                disabled: status().is_sending(),
                                if status().is_sending() { "Sending..." } else { "Send Message →" }
                            }
                            if let Some(text) = status().message() {
                                div {
                                    class: if status() == RelayStatus::Sent { "status-message success" } else { "status-message error" },
                                    role: "status",
                                    "{text}"
                                }
                            }
                        }
                        div { class: "alternate-contact",
                            p { "Prefer other methods?" }
                            div { class: "alternate-buttons",
                                button { onclick: move |_| modal.set(Modal::WhatsApp), "💬 WhatsApp" }
                                button {
                                    onclick: {
                                        let tel = tel.clone();
                                        move |_| {
                                            modal.set(Modal::Closed);
                                            navigate_to(&tel);
                                        }
                                    },
                                    "📞 Call"
                                }
                                a { href: "{mailto}", class: "email-link", "📧 Email" }
                            }
                        }
                    } else {
                        div { class: "modal-header",
                            div { class: "whatsapp-icon", "💬" }
                            h3 { "Connect via WhatsApp" }
                            p { "Fill in your details to start a conversation" }
                        }
                        form { class: "contact-form", onsubmit: quick_connect,
                            TextField {
                                id: "wa-name",
                                label: "Your Name",
                                value: form.name.clone(),
                                placeholder: "Enter your name",
                                oninput: move |v| draft.write().set(CtaField::Name, v),
                            }
                            TextField {
                                id: "wa-email",
                                label: "Email (optional)",
                                input_type: "email",
                                value: form.email.clone(),
                                placeholder: "your@email.com",
                                oninput: move |v| draft.write().set(CtaField::Email, v),
                            }
                            SelectField {
                                id: "wa-service",
                                label: "Service",
                                value: form.service.label().to_string(),
                                options: service_options(),
                                onchange: move |v| draft.write().set(CtaField::Service, v),
                            }
                            TextAreaField {
                                id: "wa-message",
                                label: "Message",
                                value: form.message.clone(),
                                rows: 3,
                                placeholder: "Brief message about your project...",
                                oninput: move |v| draft.write().set(CtaField::Message, v),
                            }
                            Button {
                                variant: ButtonVariant::WhatsApp,
                                button_type: "submit",
                                "💬 Open WhatsApp Chat"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_options_use_labels_as_values() {
        let options = service_options();
        assert_eq!(options.len(), CtaService::ALL.len());
        assert!(options.iter().all(|o| o.value == o.label));
        assert_eq!(options.last().map(|o| o.value.as_str()), Some("General Inquiry"));
    }

    #[test]
    fn test_field_errors_are_copied_out() {
        let errors = validate_cta(&CtaDraft::new());
        assert!(error_for(&errors, CtaField::Name).is_some());
        assert_eq!(error_for(&errors, CtaField::Message), None);
        assert_eq!(CtaField::Phone.name(), "phone");
    }
}

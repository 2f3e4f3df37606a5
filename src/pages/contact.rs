//! Contact page: the message form plus direct channels.

use dioxus::prelude::*;
use gloo::timers::future::sleep;
use space_core::contact::{
    contact_email, contact_whatsapp, direct_email_link, validate_contact, ContactErrors,
    RESET_DELAY, SUBMIT_DELAY,
};
use space_core::{ContactDraft, ContactField, InquiryKind, RevealOptions};
use space_ui::{Button, SelectField, SelectOption, TextAreaField, TextField};

use crate::browser::{open_in_new_tab, use_scroll_reveal};
use crate::context::use_site_config;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum Phase {
    #[default]
    Editing,
    Submitting,
    Sent,
}

fn inquiry_options() -> Vec<SelectOption> {
    InquiryKind::ALL
        .iter()
        .map(|k| SelectOption::new(k.code(), k.label()))
        .collect()
}

fn submit_label(phase: Phase) -> &'static str {
    match phase {
        Phase::Editing => "Send Message →",
        Phase::Submitting => "Sending...",
        Phase::Sent => "✓ Message Sent!",
    }
}

#[component]
pub fn Contact() -> Element {
    let config = use_site_config();
    let reveal = use_scroll_reveal(RevealOptions::STANDARD);
    let mut draft = use_signal(ContactDraft::new);
    let mut errors = use_signal(ContactErrors::new);
    let mut phase = use_signal(Phase::default);

    let mut edit = move |field: ContactField, value: String| {
        draft.write().set(field, value);
        // Typing into a flagged field clears its message
        if errors.peek().contains(field) {
            errors.write().clear_field(field);
        }
    };

    let inbox = config.contact.email.clone();
    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        if phase() != Phase::Editing {
            return;
        }
        let found = validate_contact(&draft.read());
        if !found.is_empty() {
            tracing::debug!(fields = found.len(), "Contact form rejected");
            errors.set(found);
            return;
        }
        phase.set(Phase::Submitting);
        open_in_new_tab(&contact_email(&draft.read()).mailto(&inbox));
        tracing::info!("Contact enquiry handed to the mail client");

        spawn(async move {
            sleep(SUBMIT_DELAY).await;
            phase.set(Phase::Sent);
            sleep(RESET_DELAY).await;
            draft.set(ContactDraft::new());
            phase.set(Phase::Editing);
        });
    };

    // Several buttons share these, so they are Copy callbacks
    let channels = config.contact.clone();
    let whatsapp = use_callback(move |_: MouseEvent| {
        let text = contact_whatsapp(&draft.read());
        open_in_new_tab(&channels.whatsapp_link(&text));
    });
    let direct = direct_email_link(&config.contact.email);
    let email_us = use_callback(move |_: MouseEvent| open_in_new_tab(&direct));
    let tel = config.contact.tel_link();

    let form = draft();
    let field_errors = errors();
    let error = move |field: ContactField| field_errors.get(field).map(str::to_string);
    let button_text = submit_label(phase());
    let counter = format!("{} characters", form.message.chars().count());

    rsx! {
        div { class: "contact-page",
            header { class: "page-hero",
                div { class: "hero-badge", "✉️ Get In Touch" }
                h1 { class: "page-title",
                    "Let's Start a "
                    span { class: "gradient-text", "Conversation" }
                }
                p { class: "page-subtitle",
                    "Have a project in mind? We're here to answer your questions and help bring your vision to life."
                }
                div { class: "quick-contact",
                    button { class: "quick-contact-btn", onclick: whatsapp, "💬 WhatsApp" }
                    button { class: "quick-contact-btn", onclick: email_us, "📧 Email Us" }
                    a { class: "quick-contact-btn", href: "{tel}", "📞 Call Now" }
                }
            }

            div { class: "contact-content",
                section {
                    class: reveal.class(0, "form-container reveal"),
                    "data-reveal-index": "0",
                    onmounted: move |e| reveal.observe(e),
                    div { class: "form-header",
                        h2 { "Send Us a Message" }
                        p { "Fill out the form below and we'll get back to you within 24 hours" }
                    }
                    form { class: "contact-form", onsubmit: submit, novalidate: true,
                        TextField {
                            id: "name",
                            label: "Full Name",
                            value: form.name.clone(),
                            placeholder: "John Doe",
                            required: true,
                            error: error(ContactField::Name),
                            oninput: move |v| edit(ContactField::Name, v),
                        }
                        TextField {
                            id: "email",
                            label: "Email Address",
                            input_type: "email",
                            value: form.email.clone(),
                            placeholder: "john@example.com",
                            required: true,
                            error: error(ContactField::Email),
                            oninput: move |v| edit(ContactField::Email, v),
                        }
                        TextField {
                            id: "phone",
                            label: "Phone Number (Optional)",
                            input_type: "tel",
                            value: form.phone.clone(),
                            placeholder: "+91 98765 43210",
                            oninput: move |v| edit(ContactField::Phone, v),
                        }
                        SelectField {
                            id: "projectType",
                            label: "Service Needed",
                            value: form.project_type.clone(),
                            options: inquiry_options(),
                            placeholder: "Select a service...",
                            required: true,
                            error: error(ContactField::ProjectType),
                            onchange: move |v| edit(ContactField::ProjectType, v),
                        }
                        TextAreaField {
                            id: "message",
                            label: "Your Message",
                            value: form.message.clone(),
                            rows: 6,
                            placeholder: "Tell us about your project requirements, timeline, budget, or any questions you have...",
                            required: true,
                            error: error(ContactField::Message),
                            counter: counter,
                            oninput: move |v| edit(ContactField::Message, v),
                        }
                        Button {
                            button_type: "submit",
                            class: "submit-button",
                            loading: phase() == Phase::Submitting,
                            disabled: phase() != Phase::Editing,
                            "{button_text}"
                        }
                        p { class: "form-note",
                            "🔒 Your information is secure and will never be shared with third parties."
                        }
                    }
                }

                section {
                    class: reveal.class(1, "info-container reveal"),
                    "data-reveal-index": "1",
                    onmounted: move |e| reveal.observe(e),
                    div { class: "info-header",
                        h2 { "Contact Information" }
                        p { "Prefer to reach out directly? Here's how you can contact us" }
                    }
                    div { class: "info-cards",
                        div { class: "info-card",
                            div { class: "card-icon", "📧" }
                            h3 { "Email Us" }
                            p { class: "card-detail", "{config.contact.email}" }
                            button { class: "card-action", onclick: email_us, "Send Email →" }
                        }
                        div { class: "info-card",
                            div { class: "card-icon", "📱" }
                            h3 { "Call or WhatsApp" }
                            p { class: "card-detail", "{config.contact.phone}" }
                            div { class: "card-actions",
                                a { class: "card-action-small", href: "{tel}", "Call" }
                                button { class: "card-action-small", onclick: whatsapp, "WhatsApp" }
                            }
                        }
                        div { class: "info-card",
                            div { class: "card-icon", "📍" }
                            h3 { "Visit Us" }
                            p { class: "card-detail", "{config.contact.address}" }
                            a {
                                class: "card-action",
                                href: "{config.contact.map_link}",
                                target: "_blank",
                                rel: "noopener noreferrer",
                                "View on Map →"
                            }
                        }
                        div { class: "info-card",
                            div { class: "card-icon", "⏰" }
                            h3 { "Business Hours" }
                            p { class: "card-detail", "Mon - Sat: 9:00 AM - 7:00 PM" br {} "Sunday: Closed" }
                            p { class: "card-note", "IST (Indian Standard Time)" }
                        }
                    }
                    div { class: "whatsapp-cta",
                        div { class: "whatsapp-content",
                            div { class: "whatsapp-icon", "💬" }
                            div {
                                h3 { "Prefer instant messaging?" }
                                p { "Chat with us on WhatsApp for quick responses" }
                            }
                        }
                        button { class: "btn btn-whatsapp", onclick: whatsapp, "Start WhatsApp Chat" }
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
    fn test_inquiry_options_submit_codes() {
        let options = inquiry_options();
        assert_eq!(options.len(), 6);
        assert_eq!(options[2].value, "AIDL");
        assert_eq!(options[2].label, "AI/Deep Learning Project");
        assert!(options.iter().all(|o| o.value.parse::<InquiryKind>().is_ok()));
    }

    #[test]
    fn test_submit_label_tracks_phase() {
        assert_eq!(submit_label(Phase::Editing), "Send Message →");
        assert_eq!(submit_label(Phase::Submitting), "Sending...");
        assert!(submit_label(Phase::Sent).contains("Sent"));
    }
}

//! Four-step custom quote request.

use dioxus::prelude::*;
use gloo::timers::future::sleep;
use space_core::quote::{
    description_counter, BudgetRange, QuoteDraft, ReferralSource, ServiceKind, SUBMIT_DELAY,
};
use space_core::{QuoteField, QuoteStep, QuoteSubmission, QuoteWizard};
use space_ui::{
    Button, ButtonVariant, IconButton, SelectField, SelectOption, StepProgress, TextAreaField,
    TextField,
};

use crate::browser::{open_in_new_tab, scroll_to_top, today};
use crate::context::use_site_config;

const ACCEPTED_FILES: &str = ".pdf,.doc,.docx,.png,.jpg,.jpeg,.zip";

fn step_icon(step: QuoteStep) -> &'static str {
    match step {
        QuoteStep::Contact => "👤",
        QuoteStep::Project => "🎯",
        QuoteStep::Budget => "💰",
        QuoteStep::Review => "📋",
    }
}

fn step_intro(step: QuoteStep) -> &'static str {
    match step {
        QuoteStep::Contact => "Let us know who you are and how to reach you",
        QuoteStep::Project => "Tell us about your project and what you need",
        QuoteStep::Budget => "Help us understand your budget and timeline expectations",
        QuoteStep::Review => "Please review your information before submitting",
    }
}

fn service_options() -> Vec<SelectOption> {
    ServiceKind::ALL
        .iter()
        .map(|s| SelectOption::new(s.code(), s.option_label()))
        .collect()
}

fn budget_options() -> Vec<SelectOption> {
    BudgetRange::ALL
        .iter()
        .map(|b| SelectOption::new(b.code(), b.label()))
        .collect()
}

fn referral_options() -> Vec<SelectOption> {
    ReferralSource::ALL
        .iter()
        .map(|r| SelectOption::new(r.code(), r.label()))
        .collect()
}

/// Label/value pairs for the review step. Empty optional fields are left out.
fn review_rows(draft: &QuoteDraft) -> Vec<(&'static str, String)> {
    QuoteField::ALL
        .into_iter()
        .filter_map(|field| {
            let raw = draft.get(field);
            if raw.trim().is_empty() {
                return None;
            }
            let shown = match field {
                QuoteField::ServiceNeeded => draft.service().map(|s| s.option_label()),
                QuoteField::BudgetRange => draft.budget().map(|b| b.label()),
                QuoteField::ReferralSource => draft.referral().map(|r| r.label()),
                _ => None,
            };
            Some((field.label(), shown.unwrap_or(raw).to_string()))
        })
        .collect()
}

#[component]
pub fn Quote() -> Element {
    let config = use_site_config();
    let mut wizard = use_signal(QuoteWizard::new);
    let mut submitting = use_signal(|| false);
    let mut submission = use_signal(|| None::<QuoteSubmission>);
    let mut upload_error = use_signal(|| None::<String>);

    let submit_config = config.clone();
    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        if submitting() || !wizard.read().step().is_last() {
            return;
        }
        let result = wizard.write().submit(&submit_config, today());
        match result {
            Ok(done) => {
                open_in_new_tab(&done.mailto);
                submission.set(Some(done));
                submitting.set(true);
                spawn(async move {
                    sleep(SUBMIT_DELAY).await;
                    submitting.set(false);
                    scroll_to_top();
                });
            }
            Err(e) => tracing::warn!(error = %e, "Quote submit refused"),
        }
    };

    let next = move |_: ()| {
        if wizard.write().next().is_ok() {
            scroll_to_top();
        }
    };
    let previous = move |_: ()| {
        wizard.write().previous();
        scroll_to_top();
    };

    let on_file = move |evt: FormEvent| async move {
        let Some(engine) = evt.files() else {
            return;
        };
        let Some(name) = engine.files().into_iter().next() else {
            return;
        };
        let size = engine.file_size(&name).await;
        match wizard.write().attach_reported(name, size) {
            Ok(()) => upload_error.set(None),
            Err(e) => upload_error.set(Some(e.to_string())),
        }
    };

    let start_over = move |_: ()| {
        wizard.write().reset();
        submission.set(None);
        upload_error.set(None);
        scroll_to_top();
    };

    let state = wizard.read().clone();

    if state.is_submitted() && !submitting() {
        let whatsapp_link = submission
            .read()
            .as_ref()
            .map(|s| s.whatsapp_link.clone())
            .unwrap_or_default();
        let service = state
            .draft()
            .service()
            .map(|s| s.option_label())
            .unwrap_or_default();
        return rsx! {
            div { class: "quote-page",
                div { class: "success-container",
                    div { class: "checkmark-circle", "✓" }
                    h1 { "Quote Request Submitted!" }
                    p { class: "success-message",
                        "Thank you for your detailed request. Your email client has been opened with your quote details. \
                         Our team will review your requirements and respond within "
                        strong { "24 hours" }
                        "."
                    }
                    div { class: "success-details",
                        div { class: "success-info", "📧 Email sent to: {config.contact.email}" }
                        div { class: "success-info", "📋 Service: {service}" }
                        if let Some(estimate) = state.estimate() {
                            div { class: "success-info", "💰 Estimated: {estimate}" }
                        }
                    }
                    div { class: "success-actions",
                        Button {
                            variant: ButtonVariant::WhatsApp,
                            onclick: move |_| open_in_new_tab(&whatsapp_link),
                            "💬 Send via WhatsApp Too"
                        }
                        Button { variant: ButtonVariant::Secondary, onclick: start_over, "Submit Another Request" }
                    }
                }
            }
        };
    }

    let step = state.step();
    let draft = state.draft();
    let error = |field: QuoteField| state.error(field).map(str::to_string);
    let icon = step_icon(step);
    let intro = step_intro(step);
    let title = step.title();

    rsx! {
        div { class: "quote-page",
            header { class: "page-hero",
                div { class: "hero-badge", "💎 Custom Quote Request" }
                h1 { class: "page-title",
                    "Get Your "
                    span { class: "gradient-text", "Custom Quote" }
                }
                p { class: "page-subtitle",
                    "Tell us about your project in detail. We'll analyze your requirements \
                     and respond with a comprehensive estimate within 24 hours."
                }
                StepProgress { current: step }
            }

            div { class: "quote-form-container",
                form { class: "quote-form", onsubmit: submit, novalidate: true,
                    section { class: "form-step",
                        div { class: "step-header",
                            h2 { class: "step-title",
                                span { class: "step-icon", "{icon}" }
                                "{title}"
                            }
                            p { class: "step-subtitle", "{intro}" }
                        }

                        {match step {
                            QuoteStep::Contact => rsx! {
                                div { class: "form-grid",
                                    TextField {
                                        id: "fullName",
                                        label: QuoteField::FullName.label().to_string(),
                                        value: draft.full_name.clone(),
                                        placeholder: "John Doe",
                                        required: true,
                                        error: error(QuoteField::FullName),
                                        oninput: move |v| wizard.write().set_field(QuoteField::FullName, v),
                                    }
                                    TextField {
                                        id: "email",
                                        label: QuoteField::Email.label().to_string(),
                                        input_type: "email",
                                        value: draft.email.clone(),
                                        placeholder: "john@company.com",
                                        required: true,
                                        error: error(QuoteField::Email),
                                        oninput: move |v| wizard.write().set_field(QuoteField::Email, v),
                                    }
                                    TextField {
                                        id: "phone",
                                        label: QuoteField::Phone.label().to_string(),
                                        input_type: "tel",
                                        value: draft.phone.clone(),
                                        placeholder: "+91 98765 43210",
                                        required: true,
                                        error: error(QuoteField::Phone),
                                        oninput: move |v| wizard.write().set_field(QuoteField::Phone, v),
                                    }
                                    TextField {
                                        id: "company",
                                        label: QuoteField::Company.label().to_string(),
                                        value: draft.company.clone(),
                                        placeholder: "Your Company Name",
                                        oninput: move |v| wizard.write().set_field(QuoteField::Company, v),
                                    }
                                }
                            },
                            QuoteStep::Project => rsx! {
                                SelectField {
                                    id: "serviceNeeded",
                                    label: QuoteField::ServiceNeeded.label().to_string(),
                                    value: draft.service_needed.clone(),
                                    options: service_options(),
                                    placeholder: "Select a service...",
                                    required: true,
                                    error: error(QuoteField::ServiceNeeded),
                                    onchange: move |v| wizard.write().set_field(QuoteField::ServiceNeeded, v),
                                }
                                if let Some(estimate) = state.estimate() {
                                    div { class: "price-estimate",
                                        span { class: "estimate-label", "💡 Estimated Range" }
                                        span { class: "estimate-value", "{estimate}" }
                                    }
                                }
                                TextAreaField {
                                    id: "projectDescription",
                                    label: QuoteField::ProjectDescription.label().to_string(),
                                    value: draft.project_description.clone(),
                                    rows: 8,
                                    placeholder: "Describe your project: key features, goals, target audience, existing platform (if any), specific requirements...",
                                    required: true,
                                    error: error(QuoteField::ProjectDescription),
                                    counter: description_counter(draft),
                                    oninput: move |v| wizard.write().set_field(QuoteField::ProjectDescription, v),
                                }
                                TextAreaField {
                                    id: "additionalRequirements",
                                    label: QuoteField::AdditionalRequirements.label().to_string(),
                                    value: draft.additional_requirements.clone(),
                                    rows: 4,
                                    placeholder: "Any specific technologies, integrations, or features you require...",
                                    oninput: move |v| wizard.write().set_field(QuoteField::AdditionalRequirements, v),
                                }
                            },
                            QuoteStep::Budget => rsx! {
                                SelectField {
                                    id: "budgetRange",
                                    label: QuoteField::BudgetRange.label().to_string(),
                                    value: draft.budget_range.clone(),
                                    options: budget_options(),
                                    placeholder: "Select budget range...",
                                    required: true,
                                    error: error(QuoteField::BudgetRange),
                                    onchange: move |v| wizard.write().set_field(QuoteField::BudgetRange, v),
                                }
                                TextField {
                                    id: "deadline",
                                    label: QuoteField::Deadline.label().to_string(),
                                    value: draft.deadline.clone(),
                                    placeholder: "e.g., Q1 2026, 8 weeks, Urgent, Flexible",
                                    required: true,
                                    error: error(QuoteField::Deadline),
                                    oninput: move |v| wizard.write().set_field(QuoteField::Deadline, v),
                                }
                                div { class: "form-group",
                                    label { class: "form-label", r#for: "attachment", "Attach Project Brief (Optional)" }
                                    if let Some(file) = state.attachment() {
                                        div { class: "uploaded-file",
                                            span { class: "file-icon", "📄" }
                                            span { class: "file-name", "{file.name}" }
                                            span { class: "file-size", {file.size_label()} }
                                            IconButton {
                                                class: "remove-file".to_string(),
                                                aria_label: "Remove file".to_string(),
                                                onclick: move |_| wizard.write().remove_attachment(),
                                                "✕"
                                            }
                                        }
                                    } else {
                                        label { class: "upload-area", r#for: "attachment",
                                            span { class: "upload-icon", "📎" }
                                            span { "Click to upload or drag and drop" }
                                            span { class: "upload-hint", "PDF, DOC, PNG, JPG, ZIP (Max 10MB)" }
                                        }
                                        input {
                                            id: "attachment",
                                            class: "file-input",
                                            r#type: "file",
                                            accept: ACCEPTED_FILES,
                                            onchange: on_file,
                                        }
                                    }
                                    if let Some(message) = upload_error() {
                                        span { class: "error-message", role: "alert", "{message}" }
                                    }
                                }
                                SelectField {
                                    id: "referralSource",
                                    label: QuoteField::ReferralSource.label().to_string(),
                                    value: draft.referral_source.clone(),
                                    options: referral_options(),
                                    placeholder: "Select an option...",
                                    onchange: move |v| wizard.write().set_field(QuoteField::ReferralSource, v),
                                }
                            },
                            QuoteStep::Review => rsx! {
                                div { class: "review-card",
                                    for (label, value) in review_rows(draft) {
                                        div { key: "{label}", class: "review-item",
                                            span { class: "review-label", "{label}" }
                                            span { class: "review-value", "{value}" }
                                        }
                                    }
                                    if let Some(file) = state.attachment() {
                                        div { class: "review-item",
                                            span { class: "review-label", "Attachment" }
                                            span { class: "review-value", {format!("{} ({})", file.name, file.size_label())} }
                                        }
                                    }
                                }
                                if let Some(estimate) = state.estimate() {
                                    div { class: "price-estimate",
                                        span { class: "estimate-label", "💰 Estimated Investment" }
                                        span { class: "estimate-value", "{estimate}" }
                                        p { class: "estimate-note",
                                            "*Final quote will be provided within 24 hours based on detailed requirements"
                                        }
                                    }
                                }
                                if !state.errors().is_empty() {
                                    div { class: "status-message error", role: "alert",
                                        "Some details are missing. Go back and complete the highlighted fields."
                                    }
                                }
                            },
                        }}
                    }

                    div { class: "form-navigation",
                        if step != QuoteStep::Contact {
                            Button { variant: ButtonVariant::Secondary, onclick: previous, "← Previous" }
                        }
                        if step.is_last() {
                            Button {
                                button_type: "submit",
                                class: "submit-button",
                                loading: submitting(),
                                disabled: submitting(),
                                if submitting() { "Submitting..." } else { "Submit Quote Request 🚀" }
                            }
                        } else {
                            Button { onclick: next, "Next Step →" }
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
    fn test_select_options_carry_codes() {
        assert_eq!(service_options().len(), ServiceKind::ALL.len());
        assert_eq!(budget_options()[0].value, BudgetRange::ALL[0].code());
        assert_eq!(referral_options().len(), ReferralSource::ALL.len());
    }

    #[test]
    fn test_review_rows_skip_blank_and_use_labels() {
        let draft = QuoteDraft::new()
            .with(QuoteField::FullName, "Jane Doe")
            .with(QuoteField::ServiceNeeded, "Frontend")
            .with(QuoteField::Company, "   ");
        let rows = review_rows(&draft);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], ("Full Name", "Jane Doe".to_string()));
        assert_eq!(rows[1].0, "Primary Service Needed");
        assert_eq!(rows[1].1, ServiceKind::Frontend.option_label());
    }

    #[test]
    fn test_every_step_has_copy() {
        for step in QuoteStep::ALL {
            assert!(!step_icon(step).is_empty());
            assert!(!step_intro(step).is_empty());
        }
    }
}

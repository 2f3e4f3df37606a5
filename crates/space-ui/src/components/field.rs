//! Form Field Components
//!
//! Labelled inputs that render their validation message underneath. The
//! field gets an `error` class while a message is present so the border
//! turns red.

use dioxus::prelude::*;

use super::button::join_class;

/// Class for the input element itself.
pub fn input_class(base: &str, error: Option<&str>) -> String {
    join_class(base, error.map(|_| "error"))
}

/// Label text, with ` *` appended for required fields.
pub fn label_text(label: &str, required: bool) -> String {
    if required {
        format!("{} *", label)
    } else {
        label.to_string()
    }
}

#[derive(Clone, PartialEq, Props)]
struct FieldShellProps {
    id: String,
    label: String,
    required: bool,
    error: Option<String>,
    #[props(default)]
    footer: Option<String>,
    children: Element,
}

#[component]
fn FieldShell(props: FieldShellProps) -> Element {
    let label = label_text(&props.label, props.required);
    rsx! {
        div { class: "form-group",
            label { class: "form-label", r#for: "{props.id}", "{label}" }
            {props.children}
            if let Some(footer) = &props.footer {
                span { class: "char-counter", "{footer}" }
            }
            if let Some(error) = &props.error {
                span { class: "error-message", role: "alert", "{error}" }
            }
        }
    }
}

/// Properties for the TextField component
#[derive(Clone, PartialEq, Props)]
pub struct TextFieldProps {
    /// DOM id, also used for the label's `for`
    pub id: String,
    pub label: String,
    pub value: String,
    pub oninput: EventHandler<String>,
    #[props(default)]
    pub placeholder: Option<String>,
    /// `text`, `email`, `tel`, ...
    #[props(default = "text".to_string())]
    pub input_type: String,
    #[props(default = false)]
    pub required: bool,
    #[props(default)]
    pub error: Option<String>,
}

/// Single-line input with label and inline error
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     TextField {
///         id: "fullName".to_string(),
///         label: "Full Name".to_string(),
///         value: wizard.read().draft().full_name.clone(),
///         oninput: move |v| wizard.write().set_field(QuoteField::FullName, v),
///         required: true,
///         error: wizard.read().error(QuoteField::FullName).map(str::to_string),
///     }
/// }
/// ```
#[component]
pub fn TextField(props: TextFieldProps) -> Element {
    let class = input_class("form-input", props.error.as_deref());

    rsx! {
        FieldShell {
            id: props.id.clone(),
            label: props.label.clone(),
            required: props.required,
            error: props.error.clone(),
            input {
                id: "{props.id}",
                name: "{props.id}",
                class: "{class}",
                r#type: "{props.input_type}",
                value: "{props.value}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                oninput: move |e| props.oninput.call(e.value()),
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct TextAreaFieldProps {
    pub id: String,
    pub label: String,
    pub value: String,
    pub oninput: EventHandler<String>,
    #[props(default)]
    pub placeholder: Option<String>,
    #[props(default = 5)]
    pub rows: u32,
    #[props(default = false)]
    pub required: bool,
    #[props(default)]
    pub error: Option<String>,
    /// Shown under the textarea, e.g. `12 / 50 characters`
    #[props(default)]
    pub counter: Option<String>,
}

/// Multi-line input with optional character counter
#[component]
pub fn TextAreaField(props: TextAreaFieldProps) -> Element {
    let class = input_class("form-textarea", props.error.as_deref());

    rsx! {
        FieldShell {
            id: props.id.clone(),
            label: props.label.clone(),
            required: props.required,
            error: props.error.clone(),
            footer: props.counter.clone(),
            textarea {
                id: "{props.id}",
                name: "{props.id}",
                class: "{class}",
                rows: "{props.rows}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                value: "{props.value}",
                oninput: move |e| props.oninput.call(e.value()),
            }
        }
    }
}

/// One `<option>`: submitted value and visible label.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct SelectFieldProps {
    pub id: String,
    pub label: String,
    pub value: String,
    pub onchange: EventHandler<String>,
    pub options: Vec<SelectOption>,
    /// Label of the empty first option
    #[props(default = "Select an option".to_string())]
    pub placeholder: String,
    #[props(default = false)]
    pub required: bool,
    #[props(default)]
    pub error: Option<String>,
}

/// Drop-down with an empty placeholder option
#[component]
pub fn SelectField(props: SelectFieldProps) -> Element {
    let class = input_class("form-select", props.error.as_deref());
    let current = props.value.clone();

    rsx! {
        FieldShell {
            id: props.id.clone(),
            label: props.label.clone(),
            required: props.required,
            error: props.error.clone(),
            select {
                id: "{props.id}",
                name: "{props.id}",
                class: "{class}",
                value: "{props.value}",
                onchange: move |e| props.onchange.call(e.value()),
                option { value: "", selected: current.is_empty(), "{props.placeholder}" }
                for opt in props.options.iter() {
                    option {
                        key: "{opt.value}",
                        value: "{opt.value}",
                        selected: opt.value == current,
                        "{opt.label}"
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
    fn input_class_marks_errors() {
        assert_eq!(input_class("form-input", None), "form-input");
        assert_eq!(
            input_class("form-input", Some("Name is required")),
            "form-input error"
        );
    }

    #[test]
    fn required_labels_get_asterisk() {
        assert_eq!(label_text("Email", true), "Email *");
        assert_eq!(label_text("Company", false), "Company");
    }
}

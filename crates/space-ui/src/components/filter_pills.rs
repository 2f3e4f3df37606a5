//! Filter Pills Component
//!
//! Horizontal row of mutually exclusive filter buttons, used for the
//! services category filter and the workshop level filter.

use dioxus::prelude::*;

/// One pill: stable id plus what the user sees.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pill {
    pub id: String,
    pub label: String,
    pub icon: Option<String>,
}

impl Pill {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            icon: None,
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct FilterPillsProps {
    pub pills: Vec<Pill>,
    /// Id of the active pill
    pub selected: String,
    /// Called with the clicked pill's id
    pub on_select: EventHandler<String>,
    #[props(default = "Filter".to_string())]
    pub aria_label: String,
}

/// # Example
///
/// ```rust,ignore
/// let pills = CategoryFilter::pills()
///     .map(|f| Pill::new(f.id(), f.label()).with_icon(f.icon()))
///     .collect::<Vec<_>>();
///
/// rsx! {
///     FilterPills {
///         pills,
///         selected: filter().id().to_string(),
///         on_select: move |id| select(id),
///     }
/// }
/// ```
#[component]
pub fn FilterPills(props: FilterPillsProps) -> Element {
    rsx! {
        div {
            class: "filter-pills",
            role: "radiogroup",
            "aria-label": "{props.aria_label}",
            for pill in props.pills.iter() {
                {
                    let id = pill.id.clone();
                    let is_selected = props.selected == pill.id;
                    let on_select = props.on_select;
                    rsx! {
                        button {
                            key: "{pill.id}",
                            r#type: "button",
                            class: if is_selected { "pill active" } else { "pill" },
                            role: "radio",
                            "aria-checked": if is_selected { "true" } else { "false" },
                            onclick: move |_| on_select.call(id.clone()),
                            if let Some(icon) = &pill.icon {
                                span { class: "pill-icon", "{icon}" }
                            }
                            "{pill.label}"
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
    fn pill_builder() {
        let pill = Pill::new("web", "Web Development").with_icon("🌐");
        assert_eq!(pill.id, "web");
        assert_eq!(pill.icon.as_deref(), Some("🌐"));
        assert_eq!(Pill::new("all", "All").icon, None);
    }
}

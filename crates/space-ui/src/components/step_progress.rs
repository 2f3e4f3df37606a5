//! Quote Wizard Progress
//!
//! Numbered step markers over a filled bar. Finished steps show a check,
//! the current one is highlighted.

use dioxus::prelude::*;
use space_core::QuoteStep;

/// How a marker relates to the current step
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum StepState {
    Done,
    Current,
    Upcoming,
}

impl StepState {
    pub fn of(step: QuoteStep, current: QuoteStep) -> Self {
        match step.cmp(&current) {
            std::cmp::Ordering::Less => StepState::Done,
            std::cmp::Ordering::Equal => StepState::Current,
            std::cmp::Ordering::Greater => StepState::Upcoming,
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            StepState::Done => "progress-step completed",
            StepState::Current => "progress-step active",
            StepState::Upcoming => "progress-step",
        }
    }

    /// Marker content: a check once done, else the step number.
    pub fn marker(&self, step: QuoteStep) -> String {
        match self {
            StepState::Done => "✓".to_string(),
            _ => step.number().to_string(),
        }
    }
}

#[component]
pub fn StepProgress(current: QuoteStep) -> Element {
    let width = current.progress_percent();

    rsx! {
        div { class: "quote-progress",
            div { class: "progress-bar",
                div { class: "progress-fill", style: "width: {width}%" }
            }
            div { class: "progress-steps",
                for step in QuoteStep::ALL {
                    {
                        let state = StepState::of(step, current);
                        let marker = state.marker(step);
                        let number = step.number();
                        let class = state.class();
                        let label = step.label();
                        rsx! {
                            div { key: "{number}", class: "{class}",
                                span { class: "step-number", "{marker}" }
                                span { class: "step-label", "{label}" }
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
    fn states_follow_current_step() {
        let current = QuoteStep::Budget;
        assert_eq!(StepState::of(QuoteStep::Contact, current), StepState::Done);
        assert_eq!(StepState::of(QuoteStep::Budget, current), StepState::Current);
        assert_eq!(StepState::of(QuoteStep::Review, current), StepState::Upcoming);
    }

    #[test]
    fn done_steps_show_check() {
        assert_eq!(StepState::Done.marker(QuoteStep::Project), "✓");
        assert_eq!(StepState::Upcoming.marker(QuoteStep::Review), "4");
        assert_eq!(StepState::Current.class(), "progress-step active");
    }
}

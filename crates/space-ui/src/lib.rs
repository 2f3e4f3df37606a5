//! SPACE Website UI Components
//!
//! Dioxus building blocks shared by the site's pages: buttons, labelled form
//! fields with inline errors, filter pills, section headers and the quote
//! wizard's progress bar.
//!
//! ## Palette
//!
//! - **Sky (#4AB1F1)**: primary actions, links, focus rings
//! - **Mint (#2AF598)**: success states, gradients' far end
//! - **Violet (#9D4EDD)**: accents, badges
//!
//! Styling lives in the app's stylesheet; components only emit class names.

pub mod components;

pub use components::*;

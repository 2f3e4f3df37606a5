//! One component per route.

mod about;
mod contact;
mod home;
mod ieee_support;
mod not_found;
mod portfolio;
mod quote;
mod services;
mod workshops;

pub use about::About;
pub use contact::Contact;
pub use home::Home;
pub use ieee_support::IeeeSupport;
pub use not_found::NotFound;
pub use portfolio::Portfolio;
pub use quote::Quote;
pub use services::Services;
pub use workshops::Workshops;

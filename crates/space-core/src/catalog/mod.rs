//! Static site content.
//!
//! Everything here is `const` data compiled into the binary, plus the two
//! filters the services and workshops pages apply to it.

mod company;
mod projects;
mod research;
mod services;
mod workshops;

pub use company::*;
pub use projects::*;
pub use research::*;
pub use services::*;
pub use workshops::*;

/// Icon, title and one-line description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

/// Headline figure such as `500+ Projects Delivered`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Metric {
    pub value: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

/// A short review attached to some offering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Review {
    pub name: &'static str,
    pub role: &'static str,
    /// What was reviewed, e.g. the workshop name
    pub context: &'static str,
    pub text: &'static str,
    pub rating: u8,
    pub avatar: &'static str,
}

//! Site-wide sections: chrome shared by every page and the home page blocks.

mod chat_widget;
mod cta_banner;
mod featured_projects;
mod footer;
mod hero;
mod navbar;
mod services_quick_view;
mod testimonials;
mod usp_section;

pub use chat_widget::ChatWidget;
pub use cta_banner::CtaBanner;
pub use featured_projects::FeaturedProjects;
pub use footer::Footer;
pub use hero::Hero;
pub use navbar::Navbar;
pub use services_quick_view::ServicesQuickView;
pub use testimonials::Testimonials;
pub use usp_section::UspSection;

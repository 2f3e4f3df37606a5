//! Reusable components. Each one renders plain markup plus class names from
//! the site stylesheet.

mod button;
mod field;
mod filter_pills;
mod section;
mod step_progress;
mod tiles;

pub use button::*;
pub use field::*;
pub use filter_pills::*;
pub use section::*;
pub use step_progress::*;
pub use tiles::*;

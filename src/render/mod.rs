//! Derived artifacts: map links and localized markdown.

pub mod links;
pub mod markdown;

pub use links::{build_dir_link, build_search_link};
pub use markdown::{day_title, headings, render_day};

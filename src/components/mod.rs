//! UI Components
//!
//! Leptos components rendering the controller's screens.

mod auth_dialog;
mod course_detail;
mod course_grid;
mod lesson_item;
mod site_header;

pub use auth_dialog::AuthDialog;
pub use course_detail::CourseDetail;
pub use course_grid::CourseGrid;
pub use lesson_item::LessonItem;
pub use site_header::SiteHeader;

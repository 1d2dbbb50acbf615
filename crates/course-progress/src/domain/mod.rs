//! Domain Layer
//!
//! Course records, per-course progress and the shared error type.
//! No browser or storage dependencies live here.

mod course;
mod error;
mod progress;

pub use course::{Course, CourseId};
pub use error::{DomainError, DomainResult};
pub use progress::{Progress, ProgressEntry};

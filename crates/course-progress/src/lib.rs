//! Course Progress
//!
//! Browser-independent core of the course tracker:
//! - domain: courses, progress entries and errors
//! - catalog / config: the bundled, read-only course data
//! - storage: key-value persistence and the progress store
//! - route / view / auth: location encoding and render models
//! - controller: the Home / CourseDetail state machine

pub mod domain;
pub mod catalog;
pub mod config;
pub mod storage;
pub mod route;
pub mod view;
pub mod auth;
pub mod controller;


pub use auth::{AuthMode, AuthModal};
pub use catalog::Catalog;
pub use config::SiteConfig;
pub use controller::{Controller, Effect, Event, ViewState};
pub use domain::{Course, CourseId, DomainError, DomainResult, Progress, ProgressEntry};
pub use route::Route;
pub use storage::{KeyValueStore, MemoryStore, ProgressStore};
pub use view::{CourseCard, CourseDetailView, DetailFooter, HomeView, LessonRow, Screen};

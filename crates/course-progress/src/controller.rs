//! View Controller
//!
//! Two-state machine (`Home`, `CourseDetail`) driven by a single dispatch
//! entry point. The controller owns the progress store; the browser layer
//! feeds it events and applies the effects it returns.

use log::{debug, info};

use crate::auth::{AuthMode, AuthModal};
use crate::catalog::Catalog;
use crate::domain::{CourseId, Progress};
use crate::route::Route;
use crate::storage::{KeyValueStore, ProgressStore};
use crate::view::{CourseDetailView, HomeView, Screen};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
    Home,
    CourseDetail(CourseId),
}

/// User and browser events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A course card's button was clicked
    SelectCourse(CourseId),
    /// The detail view's back link was clicked
    Back,
    /// Browser back/forward moved to a location with this search string
    LocationChanged(String),
    ToggleLesson {
        course_id: CourseId,
        lesson_index: usize,
        checked: bool,
    },
    MarkCourseCompleted(CourseId),
    OpenAuth(AuthMode),
    CloseAuth,
    SubmitAuth,
}

/// Side effects for the browser layer to carry out
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Push a history entry with this URL, without reloading
    PushLocation(String),
    /// Show a message to the user
    Notify(&'static str),
}

pub struct Controller<S: KeyValueStore> {
    catalog: Catalog,
    store: ProgressStore<S>,
    state: ViewState,
    auth: AuthModal,
    base_path: String,
    query_param: String,
}

impl<S: KeyValueStore> Controller<S> {
    /// Build the initial state from the current location.
    ///
    /// `path` is the location's pathname, used when returning home; `search`
    /// is its query string.
    pub fn start(
        catalog: Catalog,
        store: ProgressStore<S>,
        query_param: impl Into<String>,
        path: impl Into<String>,
        search: &str,
    ) -> Self {
        let mut controller = Self {
            catalog,
            store,
            state: ViewState::Home,
            auth: AuthModal::default(),
            base_path: path.into(),
            query_param: query_param.into(),
        };
        controller.store.sanitize(&controller.catalog);
        controller.follow_location(search);
        info!(
            "started with {} courses, {} progress entries, state {:?}",
            controller.catalog.len(),
            controller.store.progress().len(),
            controller.state
        );
        controller
    }

    /// Handle one event to completion
    pub fn dispatch(&mut self, event: Event) -> Vec<Effect> {
        debug!("dispatch {:?} in {:?}", event, self.state);
        match event {
            Event::SelectCourse(course_id) => {
                if self.enter_course(course_id) {
                    vec![Effect::PushLocation(self.url_for(Route::CourseDetail(course_id)))]
                } else {
                    Vec::new()
                }
            }
            Event::Back => {
                self.reinitialize();
                vec![Effect::PushLocation(self.url_for(Route::Home))]
            }
            Event::LocationChanged(search) => {
                self.follow_location(&search);
                Vec::new()
            }
            Event::ToggleLesson { course_id, lesson_index, checked } => {
                self.toggle_lesson(course_id, lesson_index, checked);
                Vec::new()
            }
            Event::MarkCourseCompleted(course_id) => {
                self.mark_completed(course_id);
                Vec::new()
            }
            Event::OpenAuth(mode) => {
                self.auth.open(mode);
                Vec::new()
            }
            Event::CloseAuth => {
                self.auth.close();
                Vec::new()
            }
            Event::SubmitAuth => vec![Effect::Notify(self.auth.submit())],
        }
    }

    /// Render model for the current state
    pub fn render(&self) -> Screen {
        if let ViewState::CourseDetail(id) = self.state {
            if let Some(course) = self.catalog.find_by_id(id) {
                return Screen::CourseDetail(CourseDetailView::build(course, self.store.progress()));
            }
        }
        Screen::Home(HomeView::build(&self.catalog, self.store.progress()))
    }

    pub fn state(&self) -> ViewState {
        self.state
    }

    pub fn auth(&self) -> &AuthModal {
        &self.auth
    }

    pub fn progress(&self) -> &Progress {
        self.store.progress()
    }

    pub fn store(&self) -> &ProgressStore<S> {
        &self.store
    }

    fn url_for(&self, route: Route) -> String {
        route.to_url(&self.base_path, &self.query_param)
    }

    /// Switch to a course's detail view; unknown ids leave the state as is
    fn enter_course(&mut self, course_id: CourseId) -> bool {
        if self.catalog.find_by_id(course_id).is_none() {
            debug!("ignoring navigation to unknown course {}", course_id);
            return false;
        }
        self.state = ViewState::CourseDetail(course_id);
        true
    }

    /// Same outcome as loading the page fresh at `search`
    fn follow_location(&mut self, search: &str) {
        match Route::from_search(search, &self.query_param) {
            Route::CourseDetail(course_id) => {
                self.enter_course(course_id);
            }
            Route::Home => self.reinitialize(),
        }
    }

    /// Rebuild the home state from storage, dropping everything not persisted
    fn reinitialize(&mut self) {
        self.store.reload();
        self.store.sanitize(&self.catalog);
        self.auth.close();
        self.state = ViewState::Home;
    }

    fn toggle_lesson(&mut self, course_id: CourseId, lesson_index: usize, checked: bool) {
        if self.state != ViewState::CourseDetail(course_id) {
            debug!("ignoring lesson toggle for course {} outside its detail view", course_id);
            return;
        }
        let Some(lesson_count) = self.catalog.lesson_count(course_id) else {
            return;
        };
        if let Err(e) = self.store.toggle_lesson(course_id, lesson_index, checked, lesson_count) {
            debug!("lesson toggle rejected: {}", e);
        }
    }

    fn mark_completed(&mut self, course_id: CourseId) {
        if self.state != ViewState::CourseDetail(course_id) {
            debug!("ignoring completion for course {} outside its detail view", course_id);
            return;
        }
        let Some(lesson_count) = self.catalog.lesson_count(course_id) else {
            return;
        };
        self.store.mark_course_completed(course_id, lesson_count);
        // Re-enter as a fresh navigation; the location already names this course
        self.enter_course(course_id);
    }
}

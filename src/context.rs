//! Application Context
//!
//! The controller lives in one signal provided via the Leptos Context API.
//! Components send events through `dispatch`; effects are applied here.

use leptos::prelude::*;

use course_progress::{AuthMode, Controller, Effect, Event, Screen};

use crate::browser::{self, LocalStore};

#[derive(Clone, Copy)]
pub struct TrackerContext {
    tracker: RwSignal<Controller<LocalStore>>,
}

impl TrackerContext {
    pub fn new(controller: Controller<LocalStore>) -> Self {
        Self {
            tracker: RwSignal::new(controller),
        }
    }

    /// Run one event to completion, then apply its effects
    pub fn dispatch(&self, event: Event) {
        let effects = self
            .tracker
            .try_update(|controller| controller.dispatch(event))
            .unwrap_or_default();
        for effect in effects {
            match effect {
                Effect::PushLocation(url) => browser::push_location(&url),
                Effect::Notify(message) => browser::alert(message),
            }
        }
    }

    /// Render model for the current state (tracked)
    pub fn screen(&self) -> Screen {
        self.tracker.with(|controller| controller.render())
    }

    /// Open auth field set, if any (tracked)
    pub fn auth_mode(&self) -> Option<AuthMode> {
        self.tracker.with(|controller| controller.auth().mode())
    }
}

/// Get the tracker context
pub fn use_tracker() -> TrackerContext {
    expect_context::<TrackerContext>()
}

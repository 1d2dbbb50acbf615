//! Course Tracker App
//!
//! Builds the controller from the bundled site config and the current
//! location, then renders whichever screen it reports.

use leptos::prelude::*;

use course_progress::{Catalog, Controller, Event, ProgressStore, Screen, SiteConfig};

use crate::browser::{self, LocalStore};
use crate::components::{AuthDialog, CourseDetail, CourseGrid, SiteHeader};
use crate::context::TrackerContext;
use crate::logging;

fn load_config() -> SiteConfig {
    SiteConfig::bundled().unwrap_or_else(|e| {
        web_sys::console::error_1(&format!("[APP] Bundled site config unusable: {}", e).into());
        SiteConfig::default()
    })
}

#[component]
pub fn App() -> impl IntoView {
    let config = load_config();
    logging::init(config.level_filter());

    let catalog = config.catalog().unwrap_or_else(|e| {
        log::error!("catalog rejected: {}", e);
        Catalog::default()
    });
    let store = ProgressStore::load(LocalStore, config.storage_key.clone());
    let controller = Controller::start(
        catalog,
        store,
        config.query_param.clone(),
        browser::current_path(),
        &browser::current_search(),
    );

    let ctx = TrackerContext::new(controller);
    provide_context(ctx);

    // Browser back/forward
    let _ = window_event_listener(leptos::ev::popstate, move |_| {
        ctx.dispatch(Event::LocationChanged(browser::current_search()));
    });

    view! {
        <SiteHeader />

        <main>
            {move || match ctx.screen() {
                Screen::Home(home) => view! { <CourseGrid home=home /> }.into_any(),
                Screen::CourseDetail(detail) => view! { <CourseDetail detail=detail /> }.into_any(),
            }}
        </main>

        <AuthDialog />
    }
}

//! Site Header Component
//!
//! Brand and the login / signup buttons that open the auth dialog.

use leptos::prelude::*;

use course_progress::{AuthMode, Event};

use crate::context::use_tracker;

#[component]
pub fn SiteHeader() -> impl IntoView {
    let ctx = use_tracker();

    view! {
        <header class="site-header">
            <div class="logo">"Course Tracker"</div>
            <nav class="auth-buttons">
                <button id="loginBtn" class="btn-secondary" on:click=move |_| ctx.dispatch(Event::OpenAuth(AuthMode::Login))>
                    "Log In"
                </button>
                <button id="signupBtn" class="btn-primary" on:click=move |_| ctx.dispatch(Event::OpenAuth(AuthMode::Signup))>
                    "Sign Up"
                </button>
            </nav>
        </header>
    }
}

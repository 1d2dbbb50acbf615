//! Auth Dialog Component
//!
//! Shared overlay for the placeholder login and signup forms. Closes on the
//! × control or a click on the backdrop outside the content box.

use leptos::prelude::*;

use course_progress::{AuthMode, Event};

use crate::context::use_tracker;

/// Labelled input row
#[component]
fn FormField(
    #[prop(into)] id: String,
    #[prop(into)] label: String,
    #[prop(into)] input_type: String,
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label for=id.clone()>{label}</label>
            <input type=input_type id=id.clone() name=id required=true />
        </div>
    }
}

fn fields(mode: AuthMode) -> AnyView {
    match mode {
        AuthMode::Login => view! {
            <div id="loginFields">
                <FormField id="loginEmail" label="Email" input_type="email" />
                <FormField id="loginPassword" label="Password" input_type="password" />
            </div>
        }.into_any(),
        AuthMode::Signup => view! {
            <div id="signupFields">
                <FormField id="signupName" label="Full Name" input_type="text" />
                <FormField id="signupEmail" label="Email" input_type="email" />
                <FormField id="signupPassword" label="Password" input_type="password" />
            </div>
        }.into_any(),
    }
}

#[component]
pub fn AuthDialog() -> impl IntoView {
    let ctx = use_tracker();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.dispatch(Event::SubmitAuth);
    };

    view! {
        {move || ctx.auth_mode().map(|mode| view! {
            <div id="authModal" class="modal" on:click=move |_| ctx.dispatch(Event::CloseAuth)>
                <div class="modal-content" on:click=|ev| ev.stop_propagation()>
                    <span class="close-btn" on:click=move |_| ctx.dispatch(Event::CloseAuth)>"×"</span>
                    <h2 id="modalTitle">{mode.title()}</h2>
                    <form id="authForm" on:submit=on_submit>
                        {fields(mode)}
                        <button type="submit" class="btn-primary">{mode.submit_label()}</button>
                    </form>
                </div>
            </div>
        })}
    }
}

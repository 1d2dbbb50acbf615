//! Course Grid Component
//!
//! Home screen: one card per catalog course.

use leptos::prelude::*;

use course_progress::view::COMPLETED_BADGE;
use course_progress::{CourseCard, Event, HomeView};

use crate::context::use_tracker;

/// A single course card
#[component]
fn CourseCardItem(card: CourseCard) -> impl IntoView {
    let ctx = use_tracker();
    let id = card.course_id;

    view! {
        <div class="course-card">
            <div class="course-card-image">{card.image}</div>
            <div class="course-card-content">
                <h3>{card.title}</h3>
                <p>{card.description}</p>
                <button
                    class="btn-primary view-course"
                    data-id=id.to_string()
                    on:click=move |_| ctx.dispatch(Event::SelectCourse(id))
                >
                    {card.button_label}
                </button>
                {card.show_completed_badge.then(|| view! {
                    <div class="completed-badge">{COMPLETED_BADGE}</div>
                })}
            </div>
        </div>
    }
}

#[component]
pub fn CourseGrid(home: HomeView) -> impl IntoView {
    view! {
        <section class="courses">
            <h2>"Available Courses"</h2>
            <div id="coursesContainer" class="courses-container">
                {home.cards.into_iter()
                    .map(|card| view! { <CourseCardItem card=card /> })
                    .collect_view()}
            </div>
        </section>
    }
}

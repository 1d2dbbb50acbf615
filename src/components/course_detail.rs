//! Course Detail Component
//!
//! Lesson checklist, progress readout and the completion footer.

use leptos::prelude::*;

use course_progress::{CourseDetailView, DetailFooter, Event};

use super::LessonItem;
use crate::context::use_tracker;

#[component]
pub fn CourseDetail(detail: CourseDetailView) -> impl IntoView {
    let ctx = use_tracker();
    let course_id = detail.course_id;
    let footer = detail.footer;

    view! {
        <section class="course-detail">
            <a
                href="#"
                class="back-button"
                on:click=move |ev| {
                    ev.prevent_default();
                    ctx.dispatch(Event::Back);
                }
            >
                "← Back to Courses"
            </a>

            <div class="course-hero">
                <h2>{detail.title}</h2>
                <p>{detail.description}</p>
            </div>

            <div class="course-description">
                <p>{detail.summary}</p>
            </div>

            <div class="lessons-list">
                <h3>"Course Lessons"</h3>
                {detail.lessons.into_iter()
                    .map(|lesson| view! { <LessonItem course_id=course_id lesson=lesson /> })
                    .collect_view()}
            </div>

            <div class="completion-section">
                <p class="progress-text">{detail.progress_text}</p>
                {match footer {
                    DetailFooter::MarkCompletedButton => view! {
                        <button
                            class="btn-primary"
                            on:click=move |_| ctx.dispatch(Event::MarkCourseCompleted(course_id))
                        >
                            {footer.label()}
                        </button>
                    }.into_any(),
                    DetailFooter::CompletedBadge => view! {
                        <div class="completed-badge">{footer.label()}</div>
                    }.into_any(),
                }}
            </div>
        </section>
    }
}

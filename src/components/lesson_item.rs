//! Lesson Item Component
//!
//! One lesson row with its completion checkbox.

use leptos::prelude::*;

use course_progress::{CourseId, Event, LessonRow};

use crate::context::use_tracker;

#[component]
pub fn LessonItem(course_id: CourseId, lesson: LessonRow) -> impl IntoView {
    let ctx = use_tracker();
    let lesson_index = lesson.index;
    let row_class = if lesson.checked { "lesson-item completed" } else { "lesson-item" };

    view! {
        <div class=row_class>
            <input
                type="checkbox"
                class="lesson-checkbox"
                checked=lesson.checked
                on:change=move |ev| {
                    ctx.dispatch(Event::ToggleLesson {
                        course_id,
                        lesson_index,
                        checked: event_target_checked(&ev),
                    });
                }
            />
            <span>{lesson.title}</span>
        </div>
    }
}

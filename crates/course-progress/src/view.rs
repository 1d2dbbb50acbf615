//! Render Models
//!
//! Plain data describing what each screen shows. Always computed from the
//! catalog and the current progress, never cached between renders.

use crate::catalog::Catalog;
use crate::domain::{Course, CourseId, Progress};

pub const VIEW_COURSE_LABEL: &str = "View Course";
pub const VIEW_PROGRESS_LABEL: &str = "View Progress";
pub const COMPLETED_BADGE: &str = "Completed";
pub const MARK_COMPLETED_LABEL: &str = "Mark Course as Completed";
pub const COURSE_COMPLETED_BADGE: &str = "Course Completed!";

/// What the widget currently shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Home(HomeView),
    CourseDetail(CourseDetailView),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeView {
    pub cards: Vec<CourseCard>,
}

/// One course on the home grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseCard {
    pub course_id: CourseId,
    pub title: String,
    pub description: String,
    pub image: String,
    pub button_label: &'static str,
    /// Gated on the explicit completion flag, not on lesson coverage
    pub show_completed_badge: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseDetailView {
    pub course_id: CourseId,
    pub title: String,
    pub description: String,
    pub summary: String,
    pub lessons: Vec<LessonRow>,
    pub progress_text: String,
    pub footer: DetailFooter,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LessonRow {
    pub index: usize,
    pub title: String,
    pub checked: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailFooter {
    MarkCompletedButton,
    CompletedBadge,
}

impl DetailFooter {
    pub fn label(&self) -> &'static str {
        match self {
            DetailFooter::MarkCompletedButton => MARK_COMPLETED_LABEL,
            DetailFooter::CompletedBadge => COURSE_COMPLETED_BADGE,
        }
    }
}

impl HomeView {
    pub fn build(catalog: &Catalog, progress: &Progress) -> Self {
        let cards = catalog
            .courses()
            .iter()
            .map(|course| {
                let completed = progress.is_marked_completed(course.id);
                CourseCard {
                    course_id: course.id,
                    title: course.title.clone(),
                    description: course.description.clone(),
                    image: course.image.clone(),
                    button_label: if completed { VIEW_PROGRESS_LABEL } else { VIEW_COURSE_LABEL },
                    show_completed_badge: completed,
                }
            })
            .collect();
        Self { cards }
    }
}

impl CourseDetailView {
    pub fn build(course: &Course, progress: &Progress) -> Self {
        let total = course.lesson_count();
        let lessons = course
            .lessons
            .iter()
            .enumerate()
            .map(|(index, title)| LessonRow {
                index,
                title: title.clone(),
                checked: progress.is_lesson_completed(course.id, index),
            })
            .collect();
        let footer = if progress.is_fully_completed(course.id, total) {
            DetailFooter::CompletedBadge
        } else {
            DetailFooter::MarkCompletedButton
        };

        Self {
            course_id: course.id,
            title: course.title.clone(),
            description: course.description.clone(),
            summary: format!(
                "This course contains {} lessons designed to help you master the topic. \
                 Work through each lesson and mark them as complete as you progress.",
                total
            ),
            lessons,
            progress_text: format!(
                "Progress: {} of {} lessons completed",
                progress.completed_count(course.id),
                total
            ),
            footer,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::new(vec![
            Course {
                id: 1,
                title: "One".to_string(),
                description: "First".to_string(),
                image: "1".to_string(),
                lessons: vec!["a".to_string(), "b".to_string()],
            },
            Course {
                id: 2,
                title: "Two".to_string(),
                description: "Second".to_string(),
                image: "2".to_string(),
                lessons: vec!["c".to_string()],
            },
        ])
        .unwrap()
    }

    #[test]
    fn test_home_cards_follow_completion_flag() {
        let catalog = catalog();
        let mut progress = Progress::new();
        progress.mark_completed(2, 1);

        let home = HomeView::build(&catalog, &progress);
        assert_eq!(home.cards.len(), 2);
        assert_eq!(home.cards[0].button_label, VIEW_COURSE_LABEL);
        assert!(!home.cards[0].show_completed_badge);
        assert_eq!(home.cards[1].button_label, VIEW_PROGRESS_LABEL);
        assert!(home.cards[1].show_completed_badge);
        assert_eq!(home.cards[1].image, "2");
    }

    #[test]
    fn test_detail_rows_mirror_checked_lessons() {
        let catalog = catalog();
        let mut progress = Progress::new();
        progress.toggle_lesson(1, 1, true, 2).unwrap();

        let detail = CourseDetailView::build(catalog.find_by_id(1).unwrap(), &progress);
        assert_eq!(detail.title, "One");
        assert!(!detail.lessons[0].checked);
        assert!(detail.lessons[1].checked);
        assert_eq!(detail.progress_text, "Progress: 1 of 2 lessons completed");
        assert_eq!(detail.footer, DetailFooter::MarkCompletedButton);
        assert!(detail.summary.starts_with("This course contains 2 lessons"));
    }

    #[test]
    fn test_detail_footer_switches_on_full_coverage() {
        let catalog = catalog();
        let mut progress = Progress::new();
        progress.toggle_lesson(2, 0, true, 1).unwrap();

        let detail = CourseDetailView::build(catalog.find_by_id(2).unwrap(), &progress);
        assert_eq!(detail.footer, DetailFooter::CompletedBadge);
        assert_eq!(detail.footer.label(), "Course Completed!");
    }
}

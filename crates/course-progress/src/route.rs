//! Location Routing
//!
//! The only navigation state visible outside the widget is one optional
//! query parameter naming the active course.

use percent_encoding::percent_decode_str;

use crate::domain::CourseId;

/// Navigation target encoded in the location
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    CourseDetail(CourseId),
}

impl Route {
    /// Parse a location search string such as `?course=2`.
    ///
    /// The first occurrence of `param` wins and its leading digits name the
    /// course, so `2abc` and `2.5` both mean course 2. A value with no leading
    /// digits means `Home`.
    pub fn from_search(search: &str, param: &str) -> Self {
        let query = search.strip_prefix('?').unwrap_or(search);
        let value = query
            .split('&')
            .filter_map(|pair| {
                let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
                (decode(key) == param).then(|| decode(value))
            })
            .next();

        match value.as_deref().and_then(leading_id) {
            Some(id) => Route::CourseDetail(id),
            None => Route::Home,
        }
    }

    /// URL to push for this route, relative to `path`
    pub fn to_url(&self, path: &str, param: &str) -> String {
        match self {
            Route::Home => path.to_string(),
            Route::CourseDetail(id) => format!("{}?{}={}", path, param, id),
        }
    }
}

/// Digits at the start of `value`, after any leading whitespace
fn leading_id(value: &str) -> Option<CourseId> {
    let value = value.trim_start();
    let end = value
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(value.len());
    value[..end].parse().ok()
}

fn decode(raw: &str) -> String {
    percent_decode_str(&raw.replace('+', " "))
        .decode_utf8_lossy()
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_course_param() {
        assert_eq!(Route::from_search("?course=2", "course"), Route::CourseDetail(2));
        assert_eq!(Route::from_search("course=3", "course"), Route::CourseDetail(3));
        assert_eq!(
            Route::from_search("?ref=mail&course=1&course=3", "course"),
            Route::CourseDetail(1)
        );
        assert_eq!(Route::from_search("?%63ourse=%32", "course"), Route::CourseDetail(2));
    }

    #[test]
    fn test_missing_or_invalid_param_is_home() {
        assert_eq!(Route::from_search("", "course"), Route::Home);
        assert_eq!(Route::from_search("?", "course"), Route::Home);
        assert_eq!(Route::from_search("?course=", "course"), Route::Home);
        assert_eq!(Route::from_search("?course", "course"), Route::Home);
        assert_eq!(Route::from_search("?course=abc", "course"), Route::Home);
        assert_eq!(Route::from_search("?lesson=2", "course"), Route::Home);
    }

    #[test]
    fn test_leading_digits_name_the_course() {
        assert_eq!(Route::from_search("?course=2abc", "course"), Route::CourseDetail(2));
        assert_eq!(Route::from_search("?course=2.5", "course"), Route::CourseDetail(2));
        assert_eq!(Route::from_search("?course=%202", "course"), Route::CourseDetail(2));
        assert_eq!(Route::from_search("?course=-2", "course"), Route::Home);
        assert_eq!(Route::from_search("?course=99999999999", "course"), Route::Home);
    }

    #[test]
    fn test_to_url() {
        assert_eq!(Route::Home.to_url("/app/", "course"), "/app/");
        assert_eq!(Route::CourseDetail(9).to_url("/", "course"), "/?course=9");
    }
}

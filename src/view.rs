use crate::data::model::FieldValue;
use crate::state::AppState;

pub const EMPTY_LIST_TEXT: &str = "No courses to display.";
pub const NOTHING_LOADED_TEXT: &str = "No courses loaded.";
pub const NOTHING_SELECTED_TEXT: &str = "Select a course to see its details.";

// ---------------------------------------------------------------------------
// Course list
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub enum ListEntry {
    Placeholder(&'static str),
    Course {
        id: String,
        department: String,
        selected: bool,
    },
}

/// Rows for the course list, in view order.
///
/// At most one row is marked selected: the first one whose id matches the
/// selection. A selection that is filtered out marks nothing.
pub fn list_entries(state: &AppState) -> Vec<ListEntry> {
    if state.view.is_empty() {
        return vec![ListEntry::Placeholder(EMPTY_LIST_TEXT)];
    }

    let mut highlighted = false;
    state
        .visible_courses()
        .map(|course| {
            let selected =
                !highlighted && state.selected_id.as_deref() == Some(course.id.as_str());
            highlighted |= selected;
            ListEntry::Course {
                id: course.id.clone(),
                department: course.department.clone(),
                selected,
            }
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Detail panel
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub enum DetailView {
    Placeholder(&'static str),
    Course(Vec<DetailField>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct DetailField {
    pub label: &'static str,
    pub value: String,
}

pub fn detail_view(state: &AppState) -> DetailView {
    if state.courses.is_empty() {
        return DetailView::Placeholder(NOTHING_LOADED_TEXT);
    }
    let Some(course) = state.selected_course() else {
        return DetailView::Placeholder(NOTHING_SELECTED_TEXT);
    };

    let optional =
        |v: &Option<FieldValue>| v.as_ref().map(ToString::to_string).unwrap_or_default();
    let fields = [
        ("ID", course.id.clone()),
        ("Title", course.title.clone()),
        ("Department", course.department.clone()),
        ("Level", optional(&course.level)),
        ("Credits", optional(&course.credits)),
        ("Instructor", course.instructor_or_tba().to_string()),
        ("Semester", course.semester.clone().unwrap_or_default()),
        ("Description", course.description.clone()),
    ];

    DetailView::Course(
        fields
            .into_iter()
            .map(|(label, value)| DetailField { label, value })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::filter::{FilterChoice, FilterField};
    use crate::data::model::course;
    use crate::state::Message;

    impl DetailView {
        fn field(&self, label: &str) -> Option<&str> {
            match self {
                DetailView::Course(fields) => fields
                    .iter()
                    .find(|f| f.label == label)
                    .map(|f| f.value.as_str()),
                DetailView::Placeholder(_) => None,
            }
        }
    }

    fn state() -> AppState {
        let mut a = course("CS101", "Intro", "CS");
        a.level = Some(FieldValue::Number(100.0));
        a.credits = Some(FieldValue::Number(3.0));
        a.semester = Some("Fall 2026".into());
        a.description = "Basics".into();
        let b = course("MA201", "Algebra", "Math");
        let mut state = AppState::default();
        state.set_courses(vec![a, b]);
        state
    }

    fn selected_rows(entries: &[ListEntry]) -> Vec<&str> {
        entries
            .iter()
            .filter_map(|e| match e {
                ListEntry::Course { id, selected: true, .. } => Some(id.as_str()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn empty_view_renders_placeholder_row() {
        let state = AppState::default();
        assert_eq!(list_entries(&state), [ListEntry::Placeholder(EMPTY_LIST_TEXT)]);
    }

    #[test]
    fn rows_are_labelled_by_id() {
        let entries = list_entries(&state());
        assert_eq!(entries.len(), 2);
        assert!(matches!(
            &entries[0],
            ListEntry::Course { id, selected: false, .. } if id == "CS101"
        ));
        assert!(selected_rows(&entries).is_empty());
    }

    #[test]
    fn clicking_a_row_highlights_it() {
        let mut state = state();
        state.update(Message::SelectCourse("MA201".into()));
        assert_eq!(selected_rows(&list_entries(&state)), ["MA201"]);
    }

    #[test]
    fn duplicate_ids_highlight_one_row() {
        let mut state = AppState::default();
        state.set_courses(vec![course("X", "a", "D"), course("X", "b", "D")]);
        state.update(Message::SelectCourse("X".into()));
        assert_eq!(selected_rows(&list_entries(&state)), ["X"]);
        assert_eq!(detail_view(&state).field("Title"), Some("a"));
    }

    #[test]
    fn filtered_out_selection_keeps_details_but_no_highlight() {
        let mut state = state();
        state.update(Message::SelectCourse("MA201".into()));
        state.update(Message::SetFilter(
            FilterField::Department,
            FilterChoice::Value("CS".into()),
        ));
        assert!(selected_rows(&list_entries(&state)).is_empty());
        assert_eq!(detail_view(&state).field("ID"), Some("MA201"));
    }

    #[test]
    fn detail_shows_all_fields_with_fallback() {
        let mut state = state();
        state.update(Message::SelectCourse("CS101".into()));
        let detail = detail_view(&state);
        assert_eq!(detail.field("Level"), Some("100"));
        assert_eq!(detail.field("Credits"), Some("3"));
        assert_eq!(detail.field("Instructor"), Some("TBA"));
        assert_eq!(detail.field("Semester"), Some("Fall 2026"));
        assert_eq!(detail.field("Description"), Some("Basics"));
    }

    #[test]
    fn placeholders_distinguish_empty_catalog_from_no_selection() {
        assert_eq!(
            detail_view(&AppState::default()),
            DetailView::Placeholder(NOTHING_LOADED_TEXT)
        );
        assert_eq!(
            detail_view(&state()),
            DetailView::Placeholder(NOTHING_SELECTED_TEXT)
        );
    }
}

use std::io;
use std::path::{Path, PathBuf};

use crate::color::DepartmentColors;
use crate::data::error::LoadError;
use crate::data::filter::{Controls, FilterChoice, FilterField, SortKey, query};
use crate::data::loader::{SourceFormat, parse_courses};
use crate::data::model::Course;
use crate::data::options::FilterOptions;
use crate::data::reader::ReadCompletion;

// ---------------------------------------------------------------------------
// Messages
// ---------------------------------------------------------------------------

/// Every state transition the UI can request.
#[derive(Debug)]
pub enum Message {
    /// A file was picked and its background read has begun.
    ReadStarted { path: PathBuf },
    /// The current background read finished.
    ReadFinished {
        path: PathBuf,
        result: io::Result<String>,
    },
    SetFilter(FilterField, FilterChoice),
    SetSort(SortKey),
    SelectCourse(String),
    /// Reset all filters and the sort key to their defaults.
    ClearFilters,
}

impl From<ReadCompletion> for Message {
    fn from(done: ReadCompletion) -> Self {
        Message::ReadFinished {
            path: done.path,
            result: done.result,
        }
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
#[derive(Debug, Default)]
pub struct AppState {
    /// Loaded catalog in file order. Replaced wholesale on every load.
    pub courses: Vec<Course>,

    /// Option lists for the four filter controls.
    pub options: FilterOptions,

    /// Active filter and sort selections.
    pub controls: Controls,

    /// Indices into `courses` of the filtered, ordered view (cached).
    pub view: Vec<usize>,

    /// Course whose details are shown. Survives filtering.
    pub selected_id: Option<String>,

    /// Name of the most recently picked file.
    pub file_name: Option<String>,

    /// Error message shown in the UI.
    pub status_message: Option<String>,

    /// Whether a file read is in progress.
    pub loading: bool,

    pub department_colors: DepartmentColors,
}

impl AppState {
    /// Apply one message.
    pub fn update(&mut self, message: Message) {
        match message {
            Message::ReadStarted { path } => {
                self.file_name = Some(display_name(&path));
                self.loading = true;
            }
            Message::ReadFinished { path, result } => {
                self.loading = false;
                let loaded = result
                    .map_err(|source| LoadError::Read {
                        path: path.clone(),
                        source,
                    })
                    .and_then(|text| parse_courses(SourceFormat::from_path(&path), &text));

                match loaded {
                    Ok(courses) => {
                        log::info!("Loaded {} courses from {}", courses.len(), path.display());
                        self.set_courses(courses);
                    }
                    Err(e) => {
                        log::error!("Failed to load {}: {e:#}", path.display());
                        self.fail_load(&e);
                    }
                }
            }
            Message::SetFilter(field, choice) => {
                *self.controls.filter_mut(field) = choice;
                self.refilter();
            }
            Message::SetSort(sort) => {
                self.controls.sort = sort;
                self.refilter();
            }
            Message::SelectCourse(id) => {
                self.selected_id = Some(id);
            }
            Message::ClearFilters => {
                self.controls = Controls::default();
                self.refilter();
            }
        }
    }

    /// Install a validated catalog and rebuild everything derived from it.
    pub fn set_courses(&mut self, courses: Vec<Course>) {
        self.courses = courses;
        self.selected_id = None;
        self.status_message = None;
        self.rebuild_options();
        self.refilter();
    }

    /// Drop the catalog after a failed load and surface the error.
    fn fail_load(&mut self, error: &LoadError) {
        self.courses.clear();
        self.selected_id = None;
        self.status_message = Some(error.to_string());
        self.rebuild_options();
        self.refilter();
    }

    fn rebuild_options(&mut self) {
        self.options = FilterOptions::from_courses(&self.courses);
        self.options.reconcile(&mut self.controls);
        self.department_colors =
            DepartmentColors::new(self.options.values(FilterField::Department));
    }

    /// Recompute `view` after a catalog or control change.
    pub fn refilter(&mut self) {
        self.view = query(&self.courses, &self.controls);
        log::debug!("View recomputed: {} of {} courses", self.view.len(), self.courses.len());
    }

    /// The selected course, looked up in the full catalog so that filtering
    /// never hides its details. The first match wins for duplicate ids.
    pub fn selected_course(&self) -> Option<&Course> {
        let id = self.selected_id.as_deref()?;
        self.courses.iter().find(|c| c.id == id)
    }

    pub fn visible_courses(&self) -> impl Iterator<Item = &Course> + '_ {
        self.view.iter().map(|&i| &self.courses[i])
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG: &str = r#"[
        {"id": "CS101", "title": "Intro", "department": "CS", "semester": "Fall 2026"},
        {"id": "MA201", "title": "Algebra", "department": "Math", "instructor": "Noether"},
        {"id": "CS300", "title": "Compilers", "department": "CS"}
    ]"#;

    fn load(state: &mut AppState, name: &str, text: &str) {
        let path = PathBuf::from(name);
        state.update(Message::ReadStarted { path: path.clone() });
        state.update(Message::ReadFinished {
            path,
            result: Ok(text.to_string()),
        });
    }

    fn loaded() -> AppState {
        let mut state = AppState::default();
        load(&mut state, "courses.json", CATALOG);
        state
    }

    fn visible_ids(state: &AppState) -> Vec<&str> {
        state.visible_courses().map(|c| c.id.as_str()).collect()
    }

    #[test]
    fn successful_load_installs_everything() {
        let state = loaded();
        assert_eq!(state.courses.len(), 3);
        assert_eq!(visible_ids(&state), ["CS101", "MA201", "CS300"]);
        assert_eq!(state.file_name.as_deref(), Some("courses.json"));
        assert_eq!(state.status_message, None);
        assert!(!state.loading);
        assert_eq!(state.options.values(FilterField::Department), ["CS", "Math"]);
    }

    #[test]
    fn reload_clears_selection() {
        let mut state = loaded();
        state.update(Message::SelectCourse("MA201".into()));
        load(&mut state, "other.json", CATALOG);
        assert_eq!(state.selected_id, None);
    }

    #[test]
    fn shape_error_leaves_catalog_empty() {
        let mut state = loaded();
        load(&mut state, "bad.json", r#"{"courses": []}"#);
        assert!(state.courses.is_empty());
        assert!(state.view.is_empty());
        assert!(state.status_message.is_some());
    }

    #[test]
    fn field_error_installs_nothing() {
        let mut state = loaded();
        state.update(Message::SelectCourse("CS101".into()));
        load(
            &mut state,
            "partial.json",
            r#"[{"id": "X1", "title": "T", "department": "D"}, {"id": "X2", "title": "T"}]"#,
        );
        assert!(state.courses.is_empty());
        assert_eq!(state.selected_id, None);
        let msg = state.status_message.expect("error message");
        assert!(msg.contains("department"), "{msg}");
    }

    #[test]
    fn read_error_clears_catalog() {
        let mut state = loaded();
        state.update(Message::ReadFinished {
            path: PathBuf::from("gone.json"),
            result: Err(io::Error::new(io::ErrorKind::NotFound, "no such file")),
        });
        assert!(state.courses.is_empty());
        let msg = state.status_message.expect("error message");
        assert!(msg.starts_with("Could not read gone.json"), "{msg}");
    }

    #[test]
    fn successful_load_clears_previous_error() {
        let mut state = AppState::default();
        load(&mut state, "bad.json", "not json");
        assert!(state.status_message.is_some());
        load(&mut state, "good.json", CATALOG);
        assert_eq!(state.status_message, None);
    }

    #[test]
    fn filter_selection_survives_reload_when_value_remains() {
        let mut state = loaded();
        state.update(Message::SetFilter(
            FilterField::Department,
            FilterChoice::Value("Math".into()),
        ));
        state.update(Message::SetFilter(
            FilterField::Instructor,
            FilterChoice::Value("Noether".into()),
        ));
        load(
            &mut state,
            "next.json",
            r#"[{"id": "MA1", "title": "T", "department": "Math"}]"#,
        );
        assert_eq!(state.controls.department, FilterChoice::Value("Math".into()));
        assert_eq!(state.controls.instructor, FilterChoice::All);
        assert_eq!(visible_ids(&state), ["MA1"]);
    }

    #[test]
    fn filtering_out_the_selection_keeps_it() {
        let mut state = loaded();
        state.update(Message::SelectCourse("MA201".into()));
        state.update(Message::SetFilter(
            FilterField::Department,
            FilterChoice::Value("CS".into()),
        ));
        assert_eq!(visible_ids(&state), ["CS101", "CS300"]);
        assert_eq!(state.selected_id.as_deref(), Some("MA201"));
        assert_eq!(state.selected_course().map(|c| c.title.as_str()), Some("Algebra"));
    }

    #[test]
    fn sort_and_clear_filters() {
        let mut state = loaded();
        state.update(Message::SetSort(SortKey::IdDesc));
        assert_eq!(visible_ids(&state), ["MA201", "CS300", "CS101"]);

        state.update(Message::SetFilter(
            FilterField::Department,
            FilterChoice::Value("CS".into()),
        ));
        state.update(Message::SelectCourse("CS300".into()));
        state.update(Message::ClearFilters);
        assert_eq!(state.controls, Controls::default());
        assert_eq!(visible_ids(&state), ["CS101", "MA201", "CS300"]);
        assert_eq!(state.selected_id.as_deref(), Some("CS300"));
    }

    #[test]
    fn csv_files_are_parsed_as_csv() {
        let mut state = AppState::default();
        load(&mut state, "courses.csv", "id,title,department\nCS101,Intro,CS\n");
        assert_eq!(visible_ids(&state), ["CS101"]);
    }
}

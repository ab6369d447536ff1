use std::cmp::Ordering;
use std::fmt;

use super::model::Course;

// ---------------------------------------------------------------------------
// Filterable fields
// ---------------------------------------------------------------------------

/// The four course fields exposed as exact-match filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FilterField {
    Department,
    Level,
    Credits,
    Instructor,
}

impl FilterField {
    pub const ALL: [FilterField; 4] = [
        FilterField::Department,
        FilterField::Level,
        FilterField::Credits,
        FilterField::Instructor,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FilterField::Department => "Department",
            FilterField::Level => "Level",
            FilterField::Credits => "Credits",
            FilterField::Instructor => "Instructor",
        }
    }

    /// The course's value for this field in the string form filters compare
    /// against. `None` when the course has no real value (a missing
    /// instructor is never "TBA" here).
    pub fn value_of(self, course: &Course) -> Option<String> {
        match self {
            FilterField::Department => Some(course.department.clone()),
            FilterField::Level => course.level.as_ref().map(|v| v.to_string()),
            FilterField::Credits => course.credits.as_ref().map(|v| v.to_string()),
            FilterField::Instructor => course.instructor.clone().filter(|s| !s.is_empty()),
        }
    }
}

/// A single filter control: the wildcard or one exact value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum FilterChoice {
    #[default]
    All,
    Value(String),
}

impl FilterChoice {
    pub fn matches(&self, value: Option<&str>) -> bool {
        match self {
            FilterChoice::All => true,
            FilterChoice::Value(wanted) => value == Some(wanted.as_str()),
        }
    }
}

impl fmt::Display for FilterChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterChoice::All => write!(f, "All"),
            FilterChoice::Value(v) => write!(f, "{v}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Sorting
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortKey {
    #[default]
    None,
    IdAsc,
    IdDesc,
    TitleAsc,
    TitleDesc,
    SemesterAsc,
    SemesterDesc,
}

impl SortKey {
    pub const ALL: [SortKey; 7] = [
        SortKey::None,
        SortKey::IdAsc,
        SortKey::IdDesc,
        SortKey::TitleAsc,
        SortKey::TitleDesc,
        SortKey::SemesterAsc,
        SortKey::SemesterDesc,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SortKey::None => "None",
            SortKey::IdAsc => "ID (A-Z)",
            SortKey::IdDesc => "ID (Z-A)",
            SortKey::TitleAsc => "Title (A-Z)",
            SortKey::TitleDesc => "Title (Z-A)",
            SortKey::SemesterAsc => "Semester (oldest first)",
            SortKey::SemesterDesc => "Semester (newest first)",
        }
    }

    fn compare(self, a: &Course, b: &Course) -> Ordering {
        match self {
            SortKey::None => Ordering::Equal,
            SortKey::IdAsc => a.id.cmp(&b.id),
            SortKey::IdDesc => b.id.cmp(&a.id),
            SortKey::TitleAsc => a.title.cmp(&b.title),
            SortKey::TitleDesc => b.title.cmp(&a.title),
            SortKey::SemesterAsc => a.semester_numeric().cmp(&b.semester_numeric()),
            SortKey::SemesterDesc => b.semester_numeric().cmp(&a.semester_numeric()),
        }
    }
}

// ---------------------------------------------------------------------------
// Query
// ---------------------------------------------------------------------------

/// The five active control values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Controls {
    pub department: FilterChoice,
    pub level: FilterChoice,
    pub credits: FilterChoice,
    pub instructor: FilterChoice,
    pub sort: SortKey,
}

impl Controls {
    pub fn filter(&self, field: FilterField) -> &FilterChoice {
        match field {
            FilterField::Department => &self.department,
            FilterField::Level => &self.level,
            FilterField::Credits => &self.credits,
            FilterField::Instructor => &self.instructor,
        }
    }

    pub fn filter_mut(&mut self, field: FilterField) -> &mut FilterChoice {
        match field {
            FilterField::Department => &mut self.department,
            FilterField::Level => &mut self.level,
            FilterField::Credits => &mut self.credits,
            FilterField::Instructor => &mut self.instructor,
        }
    }

    /// Whether a course passes all four filters.
    pub fn accepts(&self, course: &Course) -> bool {
        FilterField::ALL.iter().all(|&field| {
            self.filter(field)
                .matches(field.value_of(course).as_deref())
        })
    }
}

/// Return indices into `courses` of the filtered, ordered view.
///
/// Sorting is stable: courses with equal keys keep their catalog order, and
/// [`SortKey::None`] leaves the filtered subset untouched.
pub fn query(courses: &[Course], controls: &Controls) -> Vec<usize> {
    let mut view: Vec<usize> = courses
        .iter()
        .enumerate()
        .filter(|(_, course)| controls.accepts(course))
        .map(|(i, _)| i)
        .collect();

    if controls.sort != SortKey::None {
        view.sort_by(|&a, &b| controls.sort.compare(&courses[a], &courses[b]));
    }
    view
}

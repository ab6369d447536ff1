use std::cmp::Ordering;
use std::fmt;

/// Placeholder shown wherever a course has no instructor.
pub const INSTRUCTOR_FALLBACK: &str = "TBA";

// ---------------------------------------------------------------------------
// FieldValue – a loosely typed catalog cell (level, credits, ...)
// ---------------------------------------------------------------------------

/// A catalog value that may arrive as either a number or a string.
///
/// Ordering puts every number before every string; numbers compare
/// numerically, strings byte-wise (case-respecting).
#[derive(Debug, Clone)]
pub enum FieldValue {
    Number(f64),
    Text(String),
}

impl FieldValue {
    /// Numeric value with negative zero folded into zero.
    pub fn number(v: f64) -> Self {
        FieldValue::Number(if v == 0.0 { 0.0 } else { v })
    }
}

impl PartialEq for FieldValue {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FieldValue {}

impl PartialOrd for FieldValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FieldValue {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            // Adding 0.0 turns -0.0 into 0.0 so both zeros compare equal.
            (FieldValue::Number(a), FieldValue::Number(b)) => (a + 0.0).total_cmp(&(b + 0.0)),
            (FieldValue::Text(a), FieldValue::Text(b)) => a.cmp(b),
            (FieldValue::Number(_), FieldValue::Text(_)) => Ordering::Less,
            (FieldValue::Text(_), FieldValue::Number(_)) => Ordering::Greater,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // f64's Display drops a trailing ".0", so 3.0 renders as "3".
            FieldValue::Number(v) if *v == 0.0 => write!(f, "0"),
            FieldValue::Number(v) => write!(f, "{v}"),
            FieldValue::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<f64> for FieldValue {
    fn from(v: f64) -> Self {
        FieldValue::number(v)
    }
}

// ---------------------------------------------------------------------------
// Semester ordering key
// ---------------------------------------------------------------------------

fn season_ordinal(season: &str) -> i64 {
    match season {
        "Winter" => 1,
        "Spring" => 2,
        "Summer" => 3,
        "Fall" => 4,
        _ => 0,
    }
}

/// Chronological key for a `"<Season> <Year>"` string: `year * 10 + season`.
///
/// Anything that is not exactly two whitespace-separated tokens, or whose
/// year is not an integer, maps to 0. An unknown season contributes 0. A
/// year too large for the key also maps to 0.
pub fn semester_numeric(semester: Option<&str>) -> i64 {
    let Some(text) = semester else {
        return 0;
    };
    let tokens: Vec<&str> = text.split_whitespace().collect();
    let [season, year] = tokens.as_slice() else {
        return 0;
    };
    year.parse::<i64>()
        .ok()
        .and_then(|year| year.checked_mul(10))
        .and_then(|key| key.checked_add(season_ordinal(season)))
        .unwrap_or(0)
}

// ---------------------------------------------------------------------------
// Course – one catalog entry
// ---------------------------------------------------------------------------

/// A validated catalog entry. `id`, `title` and `department` are never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Course {
    pub id: String,
    pub title: String,
    pub department: String,
    pub level: Option<FieldValue>,
    pub credits: Option<FieldValue>,
    pub instructor: Option<String>,
    pub description: String,
    pub semester: Option<String>,
}

impl Course {
    /// Instructor name, or [`INSTRUCTOR_FALLBACK`] when none is recorded.
    pub fn instructor_or_tba(&self) -> &str {
        match self.instructor.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => INSTRUCTOR_FALLBACK,
        }
    }

    pub fn semester_numeric(&self) -> i64 {
        semester_numeric(self.semester.as_deref())
    }
}

#[cfg(test)]
pub(crate) fn course(id: &str, title: &str, department: &str) -> Course {
    Course {
        id: id.to_string(),
        title: title.to_string(),
        department: department.to_string(),
        level: None,
        credits: None,
        instructor: None,
        description: String::new(),
        semester: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn semester_key_combines_year_and_season() {
        assert_eq!(semester_numeric(Some("Fall 2026")), 20264);
        assert_eq!(semester_numeric(Some("Spring 2025")), 20252);
        assert_eq!(semester_numeric(Some("Winter 2026")), 20261);
        assert_eq!(semester_numeric(Some("  Summer   2024 ")), 20243);
    }

    #[test]
    fn malformed_semesters_map_to_zero() {
        assert_eq!(semester_numeric(Some("")), 0);
        assert_eq!(semester_numeric(Some("Gibberish")), 0);
        assert_eq!(semester_numeric(None), 0);
        assert_eq!(semester_numeric(Some("Fall 2026 extra")), 0);
        assert_eq!(semester_numeric(Some("Fall twenty")), 0);
    }

    #[test]
    fn overflowing_years_map_to_zero() {
        assert_eq!(semester_numeric(Some("Fall 922337203685477581")), 0);
        assert_eq!(semester_numeric(Some("Winter -922337203685477581")), 0);
        assert_eq!(semester_numeric(Some("Fall 9223372036854775807")), 0);
        assert_eq!(semester_numeric(Some("Fall 922337203685477580")), 9223372036854775804);
    }

    #[test]
    fn unknown_season_sorts_before_winter_of_same_year() {
        let unknown = semester_numeric(Some("Monsoon 2025"));
        assert_eq!(unknown, 20250);
        assert!(unknown < semester_numeric(Some("Winter 2025")));
    }

    #[test]
    fn instructor_falls_back_to_tba() {
        let mut c = course("CS101", "Intro", "CS");
        assert_eq!(c.instructor_or_tba(), "TBA");
        c.instructor = Some(String::new());
        assert_eq!(c.instructor_or_tba(), "TBA");
        c.instructor = Some("Dr. Lovelace".into());
        assert_eq!(c.instructor_or_tba(), "Dr. Lovelace");
    }

    #[test]
    fn numbers_order_before_text_and_numerically() {
        let mut values = vec![
            FieldValue::from("Graduate"),
            FieldValue::from(300.0),
            FieldValue::from(100.0),
            FieldValue::from("Advanced"),
        ];
        values.sort();
        let labels: Vec<String> = values.iter().map(|v| v.to_string()).collect();
        assert_eq!(labels, ["100", "300", "Advanced", "Graduate"]);
    }

    #[test]
    fn negative_zero_is_zero() {
        let neg = FieldValue::number(-0.0);
        assert_eq!(neg.to_string(), "0");
        assert_eq!(FieldValue::Number(-0.0).to_string(), "0");
        assert_eq!(neg, FieldValue::Number(0.0));
        assert_eq!(neg.cmp(&FieldValue::Number(0.0)), Ordering::Equal);
        assert_eq!(FieldValue::Number(-0.0), FieldValue::Number(0.0));
    }

    #[test]
    fn whole_numbers_render_without_fraction() {
        assert_eq!(FieldValue::Number(3.0).to_string(), "3");
        assert_eq!(FieldValue::Number(1.5).to_string(), "1.5");
    }
}

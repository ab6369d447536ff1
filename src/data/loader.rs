use std::path::Path;

use serde::Deserialize;
use serde_json::{Map, Value as JsonValue};

use super::error::LoadError;
use super::model::{Course, FieldValue};

// ---------------------------------------------------------------------------
// Source formats
// ---------------------------------------------------------------------------

/// Catalog encodings understood by [`parse_courses`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Json,
    Csv,
}

impl SourceFormat {
    /// Pick a format from the file extension. Anything that is not `.csv`
    /// is read as JSON.
    pub fn from_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_ascii_lowercase();

        match ext.as_str() {
            "csv" => SourceFormat::Csv,
            _ => SourceFormat::Json,
        }
    }
}

/// Parse and validate a whole catalog.
///
/// Validation is all-or-nothing: the first bad record rejects the document
/// and no course from it is returned.
pub fn parse_courses(format: SourceFormat, text: &str) -> Result<Vec<Course>, LoadError> {
    match format {
        SourceFormat::Json => parse_json(text),
        SourceFormat::Csv => parse_csv(text),
    }
}

// ---------------------------------------------------------------------------
// JSON
// ---------------------------------------------------------------------------

/// Expected schema:
///
/// ```json
/// [
///   {
///     "id": "CS101",
///     "title": "Intro to Programming",
///     "department": "Computer Science",
///     "level": 100,
///     "credits": 3,
///     "instructor": "Dr. Lovelace",
///     "description": "...",
///     "semester": "Fall 2026"
///   }
/// ]
/// ```
fn parse_json(text: &str) -> Result<Vec<Course>, LoadError> {
    let root: JsonValue = serde_json::from_str(text)?;

    let records = match &root {
        JsonValue::Array(records) => records,
        other => {
            return Err(LoadError::Shape {
                found: json_kind(other),
            })
        }
    };

    records
        .iter()
        .enumerate()
        .map(|(i, rec)| match rec.as_object() {
            Some(obj) => course_from_record(i, obj),
            None => Err(LoadError::Field { index: i, field: "id" }),
        })
        .collect()
}

fn json_kind(val: &JsonValue) -> &'static str {
    match val {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "a boolean",
        JsonValue::Number(_) => "a number",
        JsonValue::String(_) => "a string",
        JsonValue::Array(_) => "a list",
        JsonValue::Object(_) => "an object",
    }
}

fn course_from_record(index: usize, obj: &Map<String, JsonValue>) -> Result<Course, LoadError> {
    let id = required_text(obj, index, "id")?;
    let title = required_text(obj, index, "title")?;
    let department = required_text(obj, index, "department")?;

    Ok(Course {
        id,
        title,
        department,
        level: obj.get("level").and_then(json_to_field),
        credits: obj.get("credits").and_then(json_to_field),
        instructor: optional_text(obj, "instructor").filter(|s| !s.is_empty()),
        description: optional_text(obj, "description").unwrap_or_default(),
        semester: optional_text(obj, "semester"),
    })
}

/// A required field must be a non-empty string or a non-zero number.
fn required_text(
    obj: &Map<String, JsonValue>,
    index: usize,
    field: &'static str,
) -> Result<String, LoadError> {
    match obj.get(field) {
        Some(JsonValue::String(s)) if !s.is_empty() => Ok(s.clone()),
        Some(JsonValue::Number(n)) if n.as_f64().is_some_and(|v| v != 0.0) => Ok(n.to_string()),
        _ => Err(LoadError::Field { index, field }),
    }
}

fn optional_text(obj: &Map<String, JsonValue>, field: &str) -> Option<String> {
    obj.get(field).and_then(|v| v.as_str()).map(str::to_string)
}

fn json_to_field(val: &JsonValue) -> Option<FieldValue> {
    match val {
        JsonValue::String(s) => Some(FieldValue::Text(s.clone())),
        JsonValue::Number(n) => n.as_f64().map(FieldValue::number),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// CSV
// ---------------------------------------------------------------------------

/// One CSV row. Columns may appear in any order and may be left out.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CsvRow {
    id: Option<String>,
    title: Option<String>,
    department: Option<String>,
    level: Option<String>,
    credits: Option<String>,
    instructor: Option<String>,
    description: Option<String>,
    semester: Option<String>,
}

/// CSV layout: a header row naming the same fields as the JSON records.
/// Empty cells are absent values; numeric `level`/`credits` cells become
/// numbers.
fn parse_csv(text: &str) -> Result<Vec<Course>, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let mut courses = Vec::new();
    for (i, result) in reader.deserialize::<CsvRow>().enumerate() {
        let row = result?;
        courses.push(course_from_record(i, &csv_row_to_record(row))?);
    }
    Ok(courses)
}

fn csv_row_to_record(row: CsvRow) -> Map<String, JsonValue> {
    let mut obj = Map::new();
    let mut put = |key: &str, val: Option<JsonValue>| {
        if let Some(val) = val {
            obj.insert(key.to_string(), val);
        }
    };

    put("id", row.id.map(JsonValue::String));
    put("title", row.title.map(JsonValue::String));
    put("department", row.department.map(JsonValue::String));
    put("level", row.level.as_deref().map(guess_cell_type));
    put("credits", row.credits.as_deref().map(guess_cell_type));
    put("instructor", row.instructor.map(JsonValue::String));
    put("description", row.description.map(JsonValue::String));
    put("semester", row.semester.map(JsonValue::String));
    obj
}

fn guess_cell_type(s: &str) -> JsonValue {
    s.parse::<f64>()
        .ok()
        .and_then(serde_json::Number::from_f64)
        .map(JsonValue::Number)
        .unwrap_or_else(|| JsonValue::String(s.to_string()))
}

use std::collections::{BTreeMap, BTreeSet, HashSet};

use super::filter::{Controls, FilterChoice, FilterField};
use super::model::{Course, FieldValue};

// ---------------------------------------------------------------------------
// Selectable option lists for the four filter controls
// ---------------------------------------------------------------------------

/// For each filterable field, the distinct values observed in the catalog,
/// already sorted and rendered as strings. The "All" entry is implicit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterOptions {
    values: BTreeMap<FilterField, Vec<String>>,
}

impl FilterOptions {
    /// Collect option lists from a catalog.
    ///
    /// Numbers sort numerically ahead of strings; strings sort
    /// lexicographically. Values that render identically appear once.
    /// Absent values (including a missing instructor) are never offered.
    pub fn from_courses(courses: &[Course]) -> Self {
        let values = FilterField::ALL
            .iter()
            .map(|&field| {
                let distinct: BTreeSet<FieldValue> = courses
                    .iter()
                    .filter_map(|c| raw_value(field, c))
                    .collect();

                let mut seen = HashSet::new();
                let labels = distinct
                    .into_iter()
                    .map(|v| v.to_string())
                    .filter(|label| seen.insert(label.clone()))
                    .collect();
                (field, labels)
            })
            .collect();

        FilterOptions { values }
    }

    /// Sorted values for a field, without the "All" entry.
    pub fn values(&self, field: FilterField) -> &[String] {
        self.values.get(&field).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The full option list as shown in a control: "All" first.
    pub fn choices(&self, field: FilterField) -> Vec<FilterChoice> {
        std::iter::once(FilterChoice::All)
            .chain(self.values(field).iter().cloned().map(FilterChoice::Value))
            .collect()
    }

    pub fn contains(&self, field: FilterField, value: &str) -> bool {
        self.values(field).iter().any(|v| v == value)
    }

    /// Keep each filter selection that still exists in these options and
    /// reset the rest to "All". The sort key is untouched.
    pub fn reconcile(&self, controls: &mut Controls) {
        for field in FilterField::ALL {
            let choice = controls.filter_mut(field);
            let stale = matches!(choice, FilterChoice::Value(v) if !self.contains(field, v));
            if stale {
                log::debug!("{} filter '{choice}' no longer available, resetting", field.label());
                *choice = FilterChoice::All;
            }
        }
    }
}

fn raw_value(field: FilterField, course: &Course) -> Option<FieldValue> {
    match field {
        FilterField::Department => Some(FieldValue::Text(course.department.clone())),
        FilterField::Level => course.level.clone(),
        FilterField::Credits => course.credits.clone(),
        FilterField::Instructor => course
            .instructor
            .as_deref()
            .filter(|s| !s.is_empty())
            .map(FieldValue::from),
    }
}

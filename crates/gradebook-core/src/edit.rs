//! Form-style edits.
//!
//! Front ends receive field values as strings. An absent or empty field means
//! "leave unchanged"; numeric fields are parsed here so a bad value surfaces
//! as [`GradeError::InvalidInput`] before anything is mutated.

use serde::{Deserialize, Serialize};

use crate::course::Course;
use crate::error::{GradeError, Result};
use crate::mark::Mark;

/// Requested changes to a mark.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarkEdit {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub score: Option<String>,
    #[serde(default)]
    pub max_score: Option<String>,
    #[serde(default)]
    pub weightage: Option<String>,
}

impl MarkEdit {
    /// Returns `true` when no field requests a change.
    pub fn is_empty(&self) -> bool {
        requested(&self.name).is_none()
            && requested(&self.score).is_none()
            && requested(&self.max_score).is_none()
            && requested(&self.weightage).is_none()
    }

    /// Apply every requested field to `mark`.
    ///
    /// Fields are applied in the order name, max score, score, weightage.
    /// Either all of them take effect or the mark is left untouched.
    pub fn apply(&self, mark: &mut Mark) -> Result<()> {
        let score = parse_field("score", &self.score)?;
        let max_score = parse_field("max score", &self.max_score)?;
        let weightage = parse_field("weightage", &self.weightage)?;

        let mut updated = mark.clone();
        if let Some(name) = requested(&self.name) {
            updated.update_name(name);
        }
        if let Some(max_score) = max_score {
            updated.update_max_score(max_score)?;
        }
        if let Some(score) = score {
            updated.update_score(score)?;
        }
        if let Some(weightage) = weightage {
            updated.update_weightage(weightage)?;
        }

        *mark = updated;
        Ok(())
    }
}

/// Requested changes to a course's descriptive fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CourseEdit {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

impl CourseEdit {
    pub fn is_empty(&self) -> bool {
        requested(&self.code).is_none() && requested(&self.name).is_none()
    }

    pub fn apply(&self, course: &mut Course) {
        if let Some(code) = requested(&self.code) {
            course.update_code(code);
        }
        if let Some(name) = requested(&self.name) {
            course.update_name(name);
        }
    }
}

/// Parse a form value as a grade number.
pub fn parse_number(field: &str, raw: &str) -> Result<f32> {
    raw.trim()
        .parse::<f32>()
        .map_err(|e| GradeError::InvalidInput(format!("{field} {raw:?} is not a number: {e}")))
}

fn requested(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

fn parse_field(field: &str, value: &Option<String>) -> Result<Option<f32>> {
    requested(value).map(|raw| parse_number(field, raw)).transpose()
}

//! The root collection of tracked courses.

use std::path::Path;

use anyhow::Context;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::course::Course;
use crate::edit::{CourseEdit, MarkEdit};
use crate::error::{GradeError, Result};
use crate::generate::{unique_code, SeedOptions};
use crate::mark::Mark;

/// Every course being tracked, in insertion order.
///
/// Lookups scan the collection by identifier; there are no stored
/// back-references between courses and marks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CourseCatalog {
    #[serde(default)]
    courses: Vec<Course>,
}

impl CourseCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    pub fn add_course(&mut self, course: Course) {
        tracing::debug!(course = %course.id(), "adding course");
        self.courses.push(course);
    }

    pub fn remove_course(&mut self, course_id: &str) -> Result<Course> {
        let index = self
            .position(course_id)
            .ok_or_else(|| GradeError::course_not_found(course_id))?;
        tracing::debug!(course = %course_id, "removing course");
        Ok(self.courses.remove(index))
    }

    pub fn find_course(&self, course_id: &str) -> Result<&Course> {
        self.courses
            .iter()
            .find(|c| c.id() == course_id)
            .ok_or_else(|| GradeError::course_not_found(course_id))
    }

    pub fn find_course_mut(&mut self, course_id: &str) -> Result<&mut Course> {
        self.courses
            .iter_mut()
            .find(|c| c.id() == course_id)
            .ok_or_else(|| GradeError::course_not_found(course_id))
    }

    /// Add `n` random courses built with the default seed bounds.
    pub fn seed_random<R: Rng + ?Sized>(&mut self, rng: &mut R, n: usize) {
        let opts = SeedOptions {
            courses: n,
            ..SeedOptions::default()
        };
        self.seed_with(rng, &opts);
    }

    /// Add `opts.courses` random courses.
    pub fn seed_with<R: Rng + ?Sized>(&mut self, rng: &mut R, opts: &SeedOptions) {
        for _ in 0..opts.courses {
            self.seed_course(rng, opts);
        }
        tracing::info!(courses = opts.courses, total = self.len(), "seeded catalog");
    }

    /// Add one random course whose id is unique within the catalog.
    pub fn seed_course<R: Rng + ?Sized>(&mut self, rng: &mut R, opts: &SeedOptions) -> &Course {
        let id = unique_code(rng, opts.id_length, |candidate| {
            self.position(candidate).is_some()
        });
        self.courses.push(Course::seed_with(rng, id, opts));
        let index = self.courses.len() - 1;
        &self.courses[index]
    }

    /// Apply a form edit to a course's code and name.
    pub fn edit_course(&mut self, course_id: &str, edit: &CourseEdit) -> Result<&Course> {
        let course = self.find_course_mut(course_id)?;
        edit.apply(course);
        Ok(&*course)
    }

    /// Apply a form edit to one mark and refresh its course's totals.
    pub fn edit_mark(&mut self, course_id: &str, mark_id: &str, edit: &MarkEdit) -> Result<&Mark> {
        let course = self.find_course_mut(course_id)?;
        course.update_mark(mark_id, |mark| edit.apply(mark))?;
        course.find_mark(mark_id)
    }

    /// Save the catalog as pretty-printed JSON.
    pub fn save_json(&self, path: &Path) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize catalog")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write catalog to {}", path.display()))?;
        Ok(())
    }

    /// Load a catalog from JSON, recomputing every course's totals.
    pub fn load_json(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read catalog from {}", path.display()))?;
        let mut catalog: CourseCatalog =
            serde_json::from_str(&content).context("failed to parse catalog JSON")?;
        for course in &mut catalog.courses {
            course.recalculate_totals();
        }
        Ok(catalog)
    }

    fn position(&self, course_id: &str) -> Option<usize> {
        self.courses.iter().position(|c| c.id() == course_id)
    }
}

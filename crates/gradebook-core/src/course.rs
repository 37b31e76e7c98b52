//! A course and the totals derived from its marks.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{GradeError, Result};
use crate::generate::{generate_code, generate_course_code, unique_code, SeedOptions};
use crate::mark::Mark;

/// A named collection of marks with aggregate totals.
///
/// The course exclusively owns its marks, in insertion order. Totals are
/// recomputed from scratch after every mutation made through the course's
/// own API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    id: String,
    code: String,
    name: String,
    #[serde(default)]
    marks: Vec<Mark>,
    #[serde(default)]
    total_weightage: f32,
    #[serde(default)]
    total_weighted: f32,
}

impl Course {
    /// Create a course with no marks and zero totals.
    pub fn new(id: impl Into<String>, code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            code: code.into(),
            name: name.into(),
            marks: Vec::new(),
            total_weightage: 0.0,
            total_weighted: 0.0,
        }
    }

    /// Create a demo course with three random marks and the default bounds.
    pub fn seed_random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let opts = SeedOptions::default();
        let id = generate_code(rng, opts.id_length);
        Self::seed_with(rng, id, &opts)
    }

    /// Create a demo course with `opts.marks_per_course` random marks.
    pub fn seed_with<R: Rng + ?Sized>(rng: &mut R, id: String, opts: &SeedOptions) -> Self {
        let code = generate_course_code(rng);
        let name = generate_code(rng, opts.name_length);
        let mut course = Self::new(id, code, name);
        for _ in 0..opts.marks_per_course {
            course.push_seeded_mark(rng, opts);
        }
        course.recalculate_totals();
        tracing::debug!(
            course = %course.id,
            marks = course.marks.len(),
            "seeded course"
        );
        course
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn marks(&self) -> &[Mark] {
        &self.marks
    }

    /// Sum of every mark's weightage.
    pub fn total_weightage(&self) -> f32 {
        self.total_weightage
    }

    /// Sum of every mark's weighted value.
    pub fn total_weighted(&self) -> f32 {
        self.total_weighted
    }

    pub fn update_code(&mut self, code: impl Into<String>) {
        self.code = code.into();
    }

    pub fn update_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Append a mark and recompute totals.
    pub fn add_mark(&mut self, mark: Mark) {
        tracing::debug!(course = %self.id, mark = %mark.id(), "adding mark");
        self.marks.push(mark);
        self.recalculate_totals();
    }

    /// Append a random mark whose id is unique within this course.
    pub fn seed_mark<R: Rng + ?Sized>(&mut self, rng: &mut R, opts: &SeedOptions) -> &Mark {
        self.push_seeded_mark(rng, opts);
        self.recalculate_totals();
        let index = self.marks.len() - 1;
        &self.marks[index]
    }

    /// Remove the mark with `mark_id` and recompute totals.
    pub fn remove_mark(&mut self, mark_id: &str) -> Result<Mark> {
        let index = self
            .position(mark_id)
            .ok_or_else(|| GradeError::mark_not_found(mark_id))?;
        let mark = self.marks.remove(index);
        self.recalculate_totals();
        tracing::debug!(course = %self.id, mark = %mark_id, "removed mark");
        Ok(mark)
    }

    /// Re-derive both totals from the current marks.
    pub fn recalculate_totals(&mut self) {
        self.total_weightage = self.marks.iter().map(Mark::weightage).sum();
        self.total_weighted = self.marks.iter().map(Mark::weighted).sum();
    }

    pub fn find_mark(&self, mark_id: &str) -> Result<&Mark> {
        self.marks
            .iter()
            .find(|m| m.id() == mark_id)
            .ok_or_else(|| GradeError::mark_not_found(mark_id))
    }

    /// Mutable access to a mark.
    ///
    /// Totals are not refreshed automatically; call
    /// [`recalculate_totals`](Self::recalculate_totals) after changing the
    /// mark's weightage or scores, or use [`update_mark`](Self::update_mark).
    pub fn find_mark_mut(&mut self, mark_id: &str) -> Result<&mut Mark> {
        self.marks
            .iter_mut()
            .find(|m| m.id() == mark_id)
            .ok_or_else(|| GradeError::mark_not_found(mark_id))
    }

    /// Run `f` against the mark with `mark_id`, then recompute totals.
    ///
    /// Totals are recomputed whether or not `f` succeeds.
    pub fn update_mark<T, F>(&mut self, mark_id: &str, f: F) -> Result<T>
    where
        F: FnOnce(&mut Mark) -> Result<T>,
    {
        let mark = self.find_mark_mut(mark_id)?;
        let outcome = f(mark);
        self.recalculate_totals();
        outcome
    }

    fn position(&self, mark_id: &str) -> Option<usize> {
        self.marks.iter().position(|m| m.id() == mark_id)
    }

    fn push_seeded_mark<R: Rng + ?Sized>(&mut self, rng: &mut R, opts: &SeedOptions) {
        let id = unique_code(rng, opts.id_length, |candidate| {
            self.position(candidate).is_some()
        });
        self.marks.push(Mark::seed_with(rng, id, opts));
    }
}

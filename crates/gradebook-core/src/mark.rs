//! A single graded assessment item.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{GradeError, Result};
use crate::generate::{generate_code, SeedOptions};

/// A scored assessment item and its derived contribution to a course.
///
/// `percentage` and `weighted` are derived fields. Every mutator that
/// changes one of their inputs refreshes them before returning, so a `Mark`
/// never exposes stale derived state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mark {
    id: String,
    name: String,
    score: f32,
    max_score: f32,
    weightage: f32,
    percentage: f32,
    weighted: f32,
}

impl Mark {
    /// Create a mark with all derived fields computed.
    ///
    /// Fails with [`GradeError::InvalidInput`] if `max_score` is zero, any
    /// numeric input is not finite, or a derived field would overflow `f32`.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        score: f32,
        max_score: f32,
        weightage: f32,
    ) -> Result<Self> {
        check_finite("score", score)?;
        check_max_score(max_score)?;
        check_finite("weightage", weightage)?;

        let (percentage, weighted) = derive(score, max_score, weightage)?;
        Ok(Self {
            id: id.into(),
            name: name.into(),
            score,
            max_score,
            weightage,
            percentage,
            weighted,
        })
    }

    /// Create a mark with random demo values and the default seed bounds.
    pub fn seed_random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let opts = SeedOptions::default();
        let id = generate_code(rng, opts.id_length);
        Self::seed_with(rng, id, &opts)
    }

    /// Create a mark with random demo values under `opts`, keeping `id`.
    ///
    /// The sampled values always satisfy `max_score > score >= 0`.
    pub fn seed_with<R: Rng + ?Sized>(rng: &mut R, id: String, opts: &SeedOptions) -> Self {
        let name = generate_code(rng, opts.name_length);
        let (score, max_score, weightage) = opts.sample_scores(rng);
        let percentage = percentage_of(score, max_score);
        Self {
            id,
            name,
            score,
            max_score,
            weightage,
            percentage,
            weighted: weighted_of(weightage, percentage),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn score(&self) -> f32 {
        self.score
    }

    pub fn max_score(&self) -> f32 {
        self.max_score
    }

    pub fn weightage(&self) -> f32 {
        self.weightage
    }

    /// `score / max_score * 100`.
    pub fn percentage(&self) -> f32 {
        self.percentage
    }

    /// `weightage * percentage / 100`.
    pub fn weighted(&self) -> f32 {
        self.weighted
    }

    pub fn update_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Set the score and refresh `percentage` and `weighted`.
    pub fn update_score(&mut self, score: f32) -> Result<()> {
        check_finite("score", score)?;
        check_max_score(self.max_score)?;
        let (percentage, weighted) = derive(score, self.max_score, self.weightage)?;

        self.score = score;
        self.percentage = percentage;
        self.weighted = weighted;
        Ok(())
    }

    /// Set the max score and refresh `percentage` and `weighted` from the
    /// existing score.
    pub fn update_max_score(&mut self, max_score: f32) -> Result<()> {
        check_max_score(max_score)?;
        let (percentage, weighted) = derive(self.score, max_score, self.weightage)?;

        self.max_score = max_score;
        self.percentage = percentage;
        self.weighted = weighted;
        Ok(())
    }

    /// Set the weightage and refresh `weighted` only.
    ///
    /// `percentage` is reused as-is rather than recomputed from
    /// `score / max_score`.
    pub fn update_weightage(&mut self, weightage: f32) -> Result<()> {
        check_finite("weightage", weightage)?;
        let weighted = derive_weighted(weightage, self.percentage)?;

        self.weightage = weightage;
        self.weighted = weighted;
        Ok(())
    }
}

/// Derive `(percentage, weighted)`, rejecting results that overflow `f32`.
fn derive(score: f32, max_score: f32, weightage: f32) -> Result<(f32, f32)> {
    let percentage = percentage_of(score, max_score);
    check_derived("percentage", percentage)?;
    Ok((percentage, derive_weighted(weightage, percentage)?))
}

fn derive_weighted(weightage: f32, percentage: f32) -> Result<f32> {
    let weighted = weighted_of(weightage, percentage);
    check_derived("weighted", weighted)?;
    Ok(weighted)
}

fn percentage_of(score: f32, max_score: f32) -> f32 {
    score / max_score * 100.0
}

fn weighted_of(weightage: f32, percentage: f32) -> f32 {
    weightage * percentage / 100.0
}

fn check_finite(field: &str, value: f32) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(GradeError::InvalidInput(format!(
            "{field} must be a finite number (got {value})"
        )))
    }
}

fn check_derived(field: &str, value: f32) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(GradeError::InvalidInput(format!(
            "{field} is out of range (got {value})"
        )))
    }
}

fn check_max_score(max_score: f32) -> Result<()> {
    check_finite("max score", max_score)?;
    if max_score == 0.0 {
        return Err(GradeError::InvalidInput(
            "max score must be non-zero".into(),
        ));
    }
    Ok(())
}

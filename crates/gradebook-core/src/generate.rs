//! Random identifiers, course codes, and demo-data seeding parameters.
//!
//! Generators take any [`Rng`] so callers can pass `rand::rng()` in
//! production and a seeded `StdRng` in tests.

use rand::distr::Alphanumeric;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Draws at the requested length before [`unique_code`] widens the code.
const MAX_ATTEMPTS_PER_LENGTH: usize = 32;

/// Largest accepted seeding bound. Below `2^24`, adding 1 to an `f32` score
/// always yields a strictly larger max score.
pub const MAX_SEED_BOUND: f32 = 16_777_215.0;

/// Generate a code of `len` characters drawn uniformly from `[A-Za-z0-9]`.
pub fn generate_code<R: Rng + ?Sized>(rng: &mut R, len: usize) -> String {
    (0..len).map(|_| rng.sample(Alphanumeric) as char).collect()
}

/// Generate a course code such as `"CS 101"`: two uppercase letters, a
/// space, and a number in `100..=999`.
pub fn generate_course_code<R: Rng + ?Sized>(rng: &mut R) -> String {
    let first = rng.random_range(b'A'..=b'Z') as char;
    let second = rng.random_range(b'A'..=b'Z') as char;
    let number: u16 = rng.random_range(100..=999);
    format!("{first}{second} {number}")
}

/// Generate a code that `is_taken` rejects nothing for.
///
/// Short random codes collide, so this retries at the requested length and
/// then widens the code one character at a time until a free one is found.
pub fn unique_code<R, F>(rng: &mut R, len: usize, is_taken: F) -> String
where
    R: Rng + ?Sized,
    F: Fn(&str) -> bool,
{
    let mut len = len.max(1);
    loop {
        for _ in 0..MAX_ATTEMPTS_PER_LENGTH {
            let code = generate_code(rng, len);
            if !is_taken(&code) {
                return code;
            }
        }
        tracing::warn!("identifier space of length {len} looks exhausted, widening");
        len += 1;
    }
}

/// Parameters for demo-data seeding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedOptions {
    /// Courses created by a catalog seed.
    pub courses: usize,
    /// Marks created per seeded course.
    pub marks_per_course: usize,
    /// Length of generated identifiers.
    pub id_length: usize,
    /// Length of generated names.
    pub name_length: usize,
    /// Scores are drawn from `[0, score_ceiling)`.
    pub score_ceiling: f32,
    /// Max score exceeds the score by `1 + [0, max_score_headroom)`.
    pub max_score_headroom: f32,
    /// Weightages are drawn from `[0, weightage_ceiling)`.
    pub weightage_ceiling: f32,
}

impl Default for SeedOptions {
    fn default() -> Self {
        Self {
            courses: 3,
            marks_per_course: 3,
            id_length: 4,
            name_length: 6,
            score_ceiling: 100.0,
            max_score_headroom: 10.0,
            weightage_ceiling: 50.0,
        }
    }
}

impl SeedOptions {
    /// Check that every bound is usable for seeding.
    pub fn validate(&self) -> crate::Result<()> {
        if self.id_length == 0 {
            return Err(crate::GradeError::InvalidInput(
                "seed.id_length must be at least 1".into(),
            ));
        }
        for (key, value) in [
            ("seed.score_ceiling", self.score_ceiling),
            ("seed.max_score_headroom", self.max_score_headroom),
            ("seed.weightage_ceiling", self.weightage_ceiling),
        ] {
            if !(0.0..=MAX_SEED_BOUND).contains(&value) {
                return Err(crate::GradeError::InvalidInput(format!(
                    "{key} must be between 0 and {MAX_SEED_BOUND} (got {value})"
                )));
            }
        }
        Ok(())
    }

    /// Sample `(score, max_score, weightage)` with `max_score > score >= 0`.
    pub(crate) fn sample_scores<R: Rng + ?Sized>(&self, rng: &mut R) -> (f32, f32, f32) {
        let score = rng.random::<f32>() * clamp_bound(self.score_ceiling);
        let max_score = score + 1.0 + rng.random::<f32>() * clamp_bound(self.max_score_headroom);
        let weightage = rng.random::<f32>() * clamp_bound(self.weightage_ceiling);
        (score, max_score, weightage)
    }
}

// NaN clamps to 0.
fn clamp_bound(value: f32) -> f32 {
    value.max(0.0).min(MAX_SEED_BOUND)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn is_course_code(code: &str) -> bool {
        let bytes = code.as_bytes();
        bytes.len() == 6
            && bytes[0].is_ascii_uppercase()
            && bytes[1].is_ascii_uppercase()
            && bytes[2] == b' '
            && bytes[3..].iter().all(u8::is_ascii_digit)
    }

    #[test]
    fn code_has_requested_length_and_alphabet() {
        let mut rng = StdRng::seed_from_u64(7);
        for len in [0, 1, 4, 32] {
            let code = generate_code(&mut rng, len);
            assert_eq!(code.len(), len);
            assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
        }
    }

    #[test]
    fn course_code_matches_pattern() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..500 {
            let code = generate_course_code(&mut rng);
            assert!(is_course_code(&code), "bad course code: {code:?}");
            let number: u16 = code[3..].parse().unwrap();
            assert!((100..=999).contains(&number));
        }
    }

    #[test]
    fn unique_code_avoids_taken() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut taken = HashSet::new();
        for _ in 0..200 {
            let code = unique_code(&mut rng, 2, |c| taken.contains(c));
            assert!(taken.insert(code));
        }
    }

    #[test]
    fn unique_code_widens_when_length_is_exhausted() {
        let mut rng = StdRng::seed_from_u64(3);
        // Every single-character code is taken.
        let code = unique_code(&mut rng, 1, |c| c.len() == 1);
        assert_eq!(code.len(), 2);
    }

    #[test]
    fn sampled_scores_respect_bounds() {
        let mut rng = StdRng::seed_from_u64(9);
        let opts = SeedOptions::default();
        for _ in 0..1000 {
            let (score, max_score, weightage) = opts.sample_scores(&mut rng);
            assert!(score >= 0.0 && score < opts.score_ceiling);
            assert!(max_score > score);
            assert!((0.0..opts.weightage_ceiling).contains(&weightage));
        }
    }

    #[test]
    fn sampled_scores_at_largest_bound() {
        let opts = SeedOptions {
            score_ceiling: MAX_SEED_BOUND,
            max_score_headroom: 0.0,
            weightage_ceiling: MAX_SEED_BOUND,
            ..SeedOptions::default()
        };
        assert!(opts.validate().is_ok());

        let mut rng = StdRng::seed_from_u64(13);
        for _ in 0..1000 {
            let (score, max_score, weightage) = opts.sample_scores(&mut rng);
            assert!(max_score > score, "{max_score} <= {score}");
            assert!(max_score.is_finite() && weightage.is_finite());
        }
    }

    #[test]
    fn oversized_bounds_are_rejected_and_clamped() {
        let opts = SeedOptions {
            score_ceiling: 1e9,
            max_score_headroom: 0.0,
            ..SeedOptions::default()
        };
        assert!(opts.validate().is_err());

        let opts = SeedOptions {
            score_ceiling: 16_777_216.0,
            ..SeedOptions::default()
        };
        assert!(opts.validate().is_err());

        let opts = SeedOptions {
            score_ceiling: f32::MAX,
            max_score_headroom: f32::MAX,
            ..SeedOptions::default()
        };
        let mut rng = StdRng::seed_from_u64(21);
        for _ in 0..1000 {
            let (score, max_score, _) = opts.sample_scores(&mut rng);
            assert!(max_score > score && max_score.is_finite());
        }
    }

    #[test]
    fn validate_rejects_bad_bounds() {
        assert!(SeedOptions::default().validate().is_ok());

        let opts = SeedOptions {
            id_length: 0,
            ..SeedOptions::default()
        };
        assert!(opts.validate().is_err());

        let opts = SeedOptions {
            weightage_ceiling: f32::NAN,
            ..SeedOptions::default()
        };
        assert!(opts.validate().is_err());

        let opts = SeedOptions {
            score_ceiling: -1.0,
            ..SeedOptions::default()
        };
        assert!(opts.validate().is_err());
    }
}

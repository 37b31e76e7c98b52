//! Catalog summaries with JSON persistence and markdown rendering.

use std::fmt::Write as _;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::CourseCatalog;
use crate::course::Course;

/// A point-in-time summary of every course's totals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogReport {
    /// When the report was generated.
    pub generated_at: DateTime<Utc>,
    /// One entry per course, in catalog order.
    pub courses: Vec<CourseSummary>,
}

/// Totals for one course (without the individual marks).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseSummary {
    pub id: String,
    pub code: String,
    pub name: String,
    pub mark_count: usize,
    pub total_weightage: f32,
    pub total_weighted: f32,
}

impl From<&Course> for CourseSummary {
    fn from(course: &Course) -> Self {
        Self {
            id: course.id().to_string(),
            code: course.code().to_string(),
            name: course.name().to_string(),
            mark_count: course.marks().len(),
            total_weightage: course.total_weightage(),
            total_weighted: course.total_weighted(),
        }
    }
}

impl CatalogReport {
    pub fn from_catalog(catalog: &CourseCatalog) -> Self {
        Self {
            generated_at: Utc::now(),
            courses: catalog.courses().iter().map(CourseSummary::from).collect(),
        }
    }

    /// Save the report as JSON to a file.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize report")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        Ok(())
    }

    /// Load a report from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read report from {}", path.display()))?;
        let report: CatalogReport =
            serde_json::from_str(&content).context("failed to parse report JSON")?;
        Ok(report)
    }

    /// Render as a markdown table, rounding totals to `decimals` places.
    pub fn to_markdown(&self, decimals: usize) -> String {
        let mut md = String::new();
        md.push_str("# Course Totals\n\n");
        let _ = writeln!(
            md,
            "Generated {}\n",
            self.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        );

        if self.courses.is_empty() {
            md.push_str("No courses tracked.\n");
            return md;
        }

        md.push_str("| Code | Name | Marks | Total Weightage | Total Weighted |\n");
        md.push_str("|------|------|-------|-----------------|----------------|\n");
        for c in &self.courses {
            let _ = writeln!(
                md,
                "| {} | {} | {} | {:.decimals$} | {:.decimals$} |",
                c.code, c.name, c.mark_count, c.total_weightage, c.total_weighted,
            );
        }
        md
    }
}

/// The two total lines shown for a course, e.g. `Total Weightage: 40.00`.
pub fn format_totals(total_weightage: f32, total_weighted: f32, decimals: usize) -> [String; 2] {
    [
        format!("Total Weightage: {total_weightage:.decimals$}"),
        format!("Total Weighted: {total_weighted:.decimals$}"),
    ]
}

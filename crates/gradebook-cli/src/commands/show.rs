//! The `gradebook show` and `gradebook total` commands.

use anyhow::Result;
use comfy_table::{Cell, Table};

use gradebook_core::report::{format_totals, CatalogReport};
use gradebook_core::Course;

use super::Session;

pub fn execute(session: &Session, format: &str) -> Result<()> {
    match format {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&session.catalog)?);
        }
        "markdown" | "md" => {
            let report = CatalogReport::from_catalog(&session.catalog);
            println!("{}", report.to_markdown(session.decimals()));
        }
        "table" => {
            if session.catalog.is_empty() {
                println!("No courses tracked. Run `gradebook seed` to add demo data.");
            }
            for course in session.catalog.courses() {
                print_course(course, session.decimals());
            }
        }
        other => anyhow::bail!("unknown format: {other} (expected table, json, markdown)"),
    }
    Ok(())
}

pub fn total(session: &Session, course_id: &str) -> Result<()> {
    let course = session.catalog.find_course(course_id)?;
    print_totals(course, session.decimals());
    Ok(())
}

pub fn print_course(course: &Course, decimals: usize) {
    println!("{} {} [{}]", course.code(), course.name(), course.id());

    let mut table = Table::new();
    table.set_header(vec![
        "Mark",
        "Name",
        "Score",
        "Max Score",
        "Percentage",
        "Weightage",
        "Weighted",
    ]);
    for mark in course.marks() {
        table.add_row(vec![
            Cell::new(mark.id()),
            Cell::new(mark.name()),
            Cell::new(format!("{:.decimals$}", mark.score())),
            Cell::new(format!("{:.decimals$}", mark.max_score())),
            Cell::new(format!("{:.decimals$}%", mark.percentage())),
            Cell::new(format!("{:.decimals$}", mark.weightage())),
            Cell::new(format!("{:.decimals$}", mark.weighted())),
        ]);
    }
    println!("{table}");
    print_totals(course, decimals);
    println!();
}

pub fn print_totals(course: &Course, decimals: usize) {
    for line in format_totals(course.total_weightage(), course.total_weighted(), decimals) {
        println!("{line}");
    }
}

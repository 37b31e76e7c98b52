//! The `gradebook mark` subcommands.

use anyhow::Result;

use gradebook_core::edit::MarkEdit;
use gradebook_core::Mark;

use super::show::print_totals;
use super::Session;
use crate::MarkCommand;

pub fn execute(session: &mut Session, command: MarkCommand) -> Result<()> {
    let decimals = session.decimals();
    match command {
        MarkCommand::Add { course } => {
            let opts = session.config.seed.clone();
            let course = session.catalog.find_course_mut(&course)?;
            let mark_id = course.seed_mark(&mut rand::rng(), &opts).id().to_string();
            println!("Added mark {mark_id} to course {}", course.id());
            print_mark(course.find_mark(&mark_id)?, decimals);
            print_totals(course, decimals);
        }
        MarkCommand::Update {
            course,
            id,
            name,
            score,
            max_score,
            weightage,
        } => {
            let edit = MarkEdit {
                name,
                score,
                max_score,
                weightage,
            };
            if edit.is_empty() {
                println!("Nothing to update.");
                return Ok(());
            }
            let mark = session.catalog.edit_mark(&course, &id, &edit)?;
            print_mark(mark, decimals);
            print_totals(session.catalog.find_course(&course)?, decimals);
        }
        MarkCommand::Remove { course, id } => {
            let course = session.catalog.find_course_mut(&course)?;
            let mark = course.remove_mark(&id)?;
            println!("Removed mark {} from course {}", mark.id(), course.id());
            print_totals(course, decimals);
        }
    }
    session.save()
}

fn print_mark(mark: &Mark, decimals: usize) {
    println!(
        "{} {}: {:.decimals$}/{:.decimals$} = {:.decimals$}% x {:.decimals$} weightage = {:.decimals$} weighted",
        mark.id(),
        mark.name(),
        mark.score(),
        mark.max_score(),
        mark.percentage(),
        mark.weightage(),
        mark.weighted(),
    );
}

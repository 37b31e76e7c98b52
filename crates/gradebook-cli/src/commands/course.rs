//! The `gradebook course` subcommands.

use anyhow::Result;

use gradebook_core::edit::CourseEdit;

use super::Session;
use crate::CourseCommand;

pub fn execute(session: &mut Session, command: CourseCommand) -> Result<()> {
    match command {
        CourseCommand::Add => {
            let opts = session.config.seed.clone();
            let course = session.catalog.seed_course(&mut rand::rng(), &opts);
            println!(
                "Added course {} ({} {})",
                course.id(),
                course.code(),
                course.name()
            );
        }
        CourseCommand::Update { id, code, name } => {
            let edit = CourseEdit { code, name };
            if edit.is_empty() {
                println!("Nothing to update.");
                return Ok(());
            }
            let course = session.catalog.edit_course(&id, &edit)?;
            println!(
                "Updated course {}: {} {}",
                course.id(),
                course.code(),
                course.name()
            );
        }
        CourseCommand::Remove { id } => {
            let course = session.catalog.remove_course(&id)?;
            println!("Removed course {} ({})", course.id(), course.code());
        }
    }
    session.save()
}

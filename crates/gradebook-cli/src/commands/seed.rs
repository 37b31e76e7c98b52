//! The `gradebook seed` command.

use anyhow::Result;

use super::Session;

pub fn execute(session: &mut Session, courses: Option<usize>) -> Result<()> {
    let mut opts = session.config.seed.clone();
    if let Some(n) = courses {
        opts.courses = n;
    }

    let before = session.catalog.len();
    session.catalog.seed_with(&mut rand::rng(), &opts);
    session.save()?;

    for course in &session.catalog.courses()[before..] {
        println!(
            "Added course {} ({} {}) with {} marks",
            course.id(),
            course.code(),
            course.name(),
            course.marks().len()
        );
    }
    println!(
        "Seeded {} course(s) into {}",
        opts.courses,
        session.state_file.display()
    );
    Ok(())
}

//! The `gradebook init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    if std::path::Path::new("gradebook.toml").exists() {
        println!("gradebook.toml already exists, skipping.");
    } else {
        std::fs::write("gradebook.toml", SAMPLE_CONFIG)?;
        println!("Created gradebook.toml");
    }

    println!("\nNext steps:");
    println!("  1. Run: gradebook seed");
    println!("  2. Run: gradebook show");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# gradebook configuration

state_file = "gradebook.json"
decimals = 2

[seed]
courses = 3
marks_per_course = 3
id_length = 4
name_length = 6
score_ceiling = 100.0
max_score_headroom = 10.0
weightage_ceiling = 50.0
"#;

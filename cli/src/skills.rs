use anyhow::Result;
use console::style;
use skillport_core::skills::catalog::{self, SKILL_METADATA};
use skillport_core::{Config, EntryStatus};

fn selected_names(only: Vec<String>) -> Vec<String> {
    if only.is_empty() {
        catalog::names().map(str::to_string).collect()
    } else {
        only
    }
}

pub fn convert(config: &Config, only: Vec<String>) -> Result<()> {
    println!("Converting agents from: {}", config.source_dir.display());
    println!("To skills directory: {}", config.dest_dir.display());
    println!();

    let report = skillport_core::run(config, selected_names(only));

    for (name, status) in &report.entries {
        match status {
            EntryStatus::Converted(_) => {
                println!("{} Converted: {}", style("✓").green().bold(), name)
            }
            EntryStatus::Missing(path) => println!(
                "{} Source file not found: {}",
                style("!").yellow().bold(),
                path.display()
            ),
            EntryStatus::Failed(err) => {
                println!("{} Failed: {}: {}", style("✗").red().bold(), name, err)
            }
        }
    }

    println!();
    println!("{} Conversion complete: {}", style("✓").green().bold(), report);

    Ok(())
}

pub fn list_catalog() -> Result<()> {
    println!(
        "{} Catalog skills ({})",
        style("✓").green().bold(),
        SKILL_METADATA.len()
    );
    println!();

    for meta in SKILL_METADATA {
        println!(
            "  {} {}",
            style(meta.name).white().bold(),
            style(format!("[{}]", meta.allowed_tools.join(", "))).dim()
        );
        println!("    Triggers: {}", meta.trigger_terms);
        println!();
    }

    Ok(())
}

pub fn verify(config: &Config, only: Vec<String>) -> Result<()> {
    let results = skillport_core::verify(config, selected_names(only));
    let total = results.len();
    let mut valid = 0;

    for (name, result) in &results {
        match result {
            Ok(skill) => {
                valid += 1;
                println!(
                    "  {} {} — {}",
                    style("✓").green().bold(),
                    style(&skill.name).white().bold(),
                    skill.summary()
                );
                println!("    Tools: {}", skill.allowed_tools.join(", "));
                println!("    Path:  {}", skill.location.display());
            }
            Err(e) => println!("  {} {}: {:#}", style("✗").red().bold(), name, e),
        }
    }

    println!();
    println!("{}/{} skills valid", valid, total);

    Ok(())
}

//! Switch command implementation

use colored::Colorize;

use bunch_core::{ChangeKind, GitRecorder, SwitchConfig, SwitchReport, switch};

use crate::error::Result;

/// Run a switch and print its report.
pub fn run_switch(config: &SwitchConfig, json: bool) -> Result<()> {
    if !json {
        println!(
            "{} Switching {} with rule {}...",
            "=>".blue().bold(),
            config.repo_path.to_string().cyan(),
            config.rule.yellow()
        );
    }

    let report = switch(config, &GitRecorder::new())?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }
    Ok(())
}

fn print_report(report: &SwitchReport) {
    println!("{}:   {}", "Rule".dimmed(), report.rule.to_string().cyan());

    if report.dry_run {
        println!("{}:", "Would switch".bold());
        if report.origins.is_empty() {
            println!("  {}", "None".dimmed());
        }
        for origin in &report.origins {
            println!("  {} {}", "~".yellow(), origin);
        }
        return;
    }

    println!("{}:", "Changes".bold());
    if report.changes.is_empty() {
        println!("  {}", "None".dimmed());
    }
    for change in report.changes.sorted() {
        println!("  {} {}", kind_marker(change.kind), change.path);
    }
    println!();

    match &report.commit {
        Some(id) => println!(
            "{} Recorded commit {} ({} changes)",
            "OK".green().bold(),
            id.chars().take(7).collect::<String>().yellow(),
            report.changes.len()
        ),
        None => println!("{} Nothing to commit", "OK".green().bold()),
    }
}

fn kind_marker(kind: ChangeKind) -> colored::ColoredString {
    match kind {
        ChangeKind::Add => "+".green(),
        ChangeKind::Modify => "~".yellow(),
        ChangeKind::Remove => "-".red(),
    }
}

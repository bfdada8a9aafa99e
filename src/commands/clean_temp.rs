use anyhow::Result;
use colored::Colorize;

use crate::core::tasks::purge_temp;
use crate::platform::temp_root;

pub fn execute(matches: &clap::ArgMatches) -> Result<()> {
    let dry_run = matches.get_flag("dry-run");
    let root = temp_root();

    if dry_run {
        println!("{}", "DRY RUN MODE - No files will be deleted".yellow().bold());
        println!();
    }

    println!(
        "{} {}",
        "Temp directory:".white().bold(),
        root.display().to_string().cyan()
    );
    println!();

    // Ask for confirmation unless it's a dry run
    if !dry_run {
        println!(
            "{}",
            "⚠️  Warning: this deletes every entry under the directory above.".yellow().bold()
        );
        print!("{}", "Do you want to continue? (y/n): ".white().bold());

        use std::io::Write;
        std::io::stdout().flush().ok();

        let mut input = String::new();
        std::io::stdin().read_line(&mut input).ok();

        let response = input.trim().to_lowercase();
        if response != "y" && response != "yes" {
            println!();
            println!("{}", "Operation cancelled by user.".yellow());
            return Ok(());
        }
        println!();
    }

    let stats = purge_temp(&root, dry_run);

    println!("{}", "─".repeat(50));
    if dry_run {
        println!(
            "{} {}",
            "Would remove:".white(),
            format!("{} entries", stats.removed).yellow().bold()
        );
    } else {
        println!(
            "{} {}",
            "Removed:".green().bold(),
            format!("{} entries", stats.removed).yellow().bold()
        );
        if stats.failed > 0 {
            println!(
                "{} {} (entries in use or protected)",
                "Skipped:".red().bold(),
                format!("{} entries", stats.failed).red()
            );
        }
    }
    println!();

    Ok(())
}

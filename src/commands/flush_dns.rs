use anyhow::Result;
use colored::Colorize;

use crate::core::tasks::dns_flush;

pub fn execute() -> Result<()> {
    println!("{}", "Flushing DNS cache...".cyan().bold());

    let outcome = dns_flush::run();

    if outcome.is_success() {
        println!("{} {}", "OK:".green().bold(), outcome.message);
    } else {
        println!("{} {}", "Failed:".red().bold(), outcome.message);
    }

    Ok(())
}

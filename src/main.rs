use anyhow::Result;
use clap::{Arg, Command};

use systune::commands;

fn main() -> Result<()> {
    systune::init_logging();

    let matches = Command::new("systune")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Terminal dashboard for system telemetry, optimization and productivity widgets")
        .subcommand(
            Command::new("dashboard")
                .about("Launch the interactive dashboard (default)")
                .arg(
                    Arg::new("interval")
                        .short('i')
                        .long("interval")
                        .value_name("MS")
                        .help("Telemetry poll interval in milliseconds")
                        .value_parser(clap::value_parser!(u64)),
                )
                .arg(
                    Arg::new("top")
                        .short('t')
                        .long("top")
                        .value_name("N")
                        .help("Number of top memory processes to show")
                        .value_parser(clap::value_parser!(usize)),
                ),
        )
        .subcommand(
            Command::new("clean-temp")
                .about("Clean temporary files from the system")
                .arg(
                    Arg::new("dry-run")
                        .long("dry-run")
                        .help("Show what would be deleted without actually deleting")
                        .action(clap::ArgAction::SetTrue),
                ),
        )
        .subcommand(Command::new("flush-dns").about("Flush the OS DNS resolver cache"))
        .subcommand(Command::new("info").about("Show hardware identity"))
        .get_matches();

    match matches.subcommand() {
        Some(("clean-temp", sub)) => commands::clean_temp(sub),
        Some(("flush-dns", _)) => commands::flush_dns(),
        Some(("info", _)) => commands::info(),
        Some(("dashboard", sub)) => commands::dashboard(Some(sub)),
        // No subcommand launches the dashboard with defaults
        _ => commands::dashboard(None),
    }
}

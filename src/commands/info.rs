use anyhow::Result;
use colored::Colorize;

use crate::platform::HardwareInfo;
use crate::ui::format_size;

pub fn execute() -> Result<()> {
    let info = HardwareInfo::detect();

    println!("{}", "Hardware".white().bold());
    println!("{}", "─".repeat(50));
    println!("{}  {}", "CPU".cyan().bold(), info.cpu_name);
    println!("{}  {}", "GPU".cyan().bold(), info.gpu_name);
    println!("{}  {}", "RAM".cyan().bold(), format_size(info.ram_total_bytes));

    Ok(())
}

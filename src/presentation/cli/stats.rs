use chrono::Local;

use crate::domain::ReadingStats;
use crate::domain::formatting::format_count;
use crate::infrastructure::library;

use super::{StatsCommand, print_json};

pub fn run(command: StatsCommand) -> anyhow::Result<()> {
    let records = library::load_records(&command.library)?;
    let today = Local::now().date_naive();
    let stats = ReadingStats::compute(&records, today);

    if command.json {
        return print_json(&stats);
    }

    if stats.yearly.is_empty() {
        println!("No finished books yet.");
    } else {
        for (year, count) in &stats.yearly {
            let noun = if *count == 1 { "book" } else { "books" };
            println!("{year}: {count} {noun}");
        }
    }
    println!("Average reading time: {} days per book", stats.avg_days);
    println!("Finished this year: {}", stats.this_year_count);
    println!(
        "Finished this month: {}",
        format_count(stats.this_month_count)
    );

    Ok(())
}

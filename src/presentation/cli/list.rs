use crate::domain::formatting::{EM_DASH, format_duration};
use crate::domain::records::{ReadingRecord, ReadingStatus};
use crate::domain::shelf::Bookshelf;
use crate::infrastructure::library;

use super::{ListCommand, parse_status, print_json};

pub fn run(command: ListCommand) -> anyhow::Result<()> {
    let mut records = library::load_records(&command.library)?;
    let status = command.status.as_deref().map(parse_status).transpose()?;

    if let Some(query) = &command.query {
        records.retain(|record| record.matches(query));
    }

    let shelf = Bookshelf::build(&records);

    let selected: Vec<ReadingRecord> = match status {
        Some(ReadingStatus::Reading) => shelf.reading.clone(),
        Some(ReadingStatus::NotStarted) => records
            .iter()
            .filter(|record| record.status() == ReadingStatus::NotStarted)
            .cloned()
            .collect(),
        Some(ReadingStatus::Finished) => match command.year {
            Some(year) => shelf.finished_in_year(year).into_iter().cloned().collect(),
            None => shelf.finished.clone(),
        },
        None => match command.year {
            Some(year) => shelf.finished_in_year(year).into_iter().cloned().collect(),
            None => {
                let mut all = shelf.reading.clone();
                all.extend(shelf.finished.iter().cloned());
                all
            }
        },
    };

    if command.json {
        return print_json(&selected);
    }

    if selected.is_empty() {
        println!("No books matched.");
        return Ok(());
    }

    for record in &selected {
        println!("{}", render_line(record));
    }

    Ok(())
}

fn render_line(record: &ReadingRecord) -> String {
    let author = non_empty(&record.author);
    let kind = non_empty(&record.kind);
    let span = format_duration(record.duration_days(), record.status());
    format!("{:<40} {:<24} {:<18} {span}", record.title, author, kind)
}

fn non_empty(value: &str) -> &str {
    if value.is_empty() { EM_DASH } else { value }
}

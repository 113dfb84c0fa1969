use chrono::Datelike;

use crate::domain::records::{ReadingRecord, ReadingStatus};

/// The two sections of the rendered bookshelf.
#[derive(Debug, Clone, Default)]
pub struct Bookshelf {
    /// Books currently being read, newest start first.
    pub reading: Vec<ReadingRecord>,
    /// Finished books, newest start first.
    pub finished: Vec<ReadingRecord>,
}

impl Bookshelf {
    /// Partition `records` into shelf sections.
    ///
    /// Both sections order by start date, newest first. Records without a
    /// start date belong to neither section.
    pub fn build(records: &[ReadingRecord]) -> Self {
        let mut reading: Vec<ReadingRecord> = Vec::new();
        let mut finished: Vec<ReadingRecord> = Vec::new();

        for record in records {
            match record.status() {
                ReadingStatus::Reading => reading.push(record.clone()),
                ReadingStatus::Finished => finished.push(record.clone()),
                ReadingStatus::NotStarted => {}
            }
        }

        sort_newest_first(&mut reading);
        sort_newest_first(&mut finished);

        Self { reading, finished }
    }

    /// Finished books whose reading span touches `year` on either end.
    ///
    /// Matches the yearly attribution rule: a book spanning a year boundary
    /// shows up under both years.
    pub fn finished_in_year(&self, year: i32) -> Vec<&ReadingRecord> {
        self.finished
            .iter()
            .filter(|record| match (record.start, record.end) {
                (Some(start), Some(end)) => start.year() == year || end.year() == year,
                _ => false,
            })
            .collect()
    }
}

/// Records matching a case-insensitive search query over title, author and
/// kind.
pub fn search<'a>(records: &'a [ReadingRecord], query: &str) -> Vec<&'a ReadingRecord> {
    records
        .iter()
        .filter(|record| record.matches(query))
        .collect()
}

fn sort_newest_first(records: &mut [ReadingRecord]) {
    records.sort_by(|a, b| b.start.cmp(&a.start));
}

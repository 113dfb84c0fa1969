use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// One book's metadata plus an optional reading span.
///
/// Records come straight from the library JSON document. Dates are lenient on
/// the way in: `null`, the empty string, and strings that don't parse as
/// `YYYY-MM-DD` all deserialize to `None`, so a single bad date downgrades
/// that record instead of failing the whole document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadingRecord {
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default, deserialize_with = "lenient_date")]
    pub start: Option<NaiveDate>,
    #[serde(default, deserialize_with = "lenient_date")]
    pub end: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl ReadingRecord {
    /// Reading status derived from which span dates are set.
    ///
    /// An end date without a start date does not make a finished book; the
    /// record counts as not started.
    pub fn status(&self) -> ReadingStatus {
        match (self.start, self.end) {
            (Some(_), None) => ReadingStatus::Reading,
            (Some(_), Some(_)) => ReadingStatus::Finished,
            (None, _) => ReadingStatus::NotStarted,
        }
    }

    /// Whole-day length of the reading span, `None` unless both dates are set.
    ///
    /// Same-day spans yield 0. An end before the start yields a negative
    /// count, passed through to the caller unchanged.
    pub fn duration_days(&self) -> Option<i64> {
        match (self.start, self.end) {
            (Some(start), Some(end)) => Some((end - start).num_days()),
            _ => None,
        }
    }

    /// Case-insensitive substring match over title, author and kind.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.title.to_lowercase().contains(&query)
            || self.author.to_lowercase().contains(&query)
            || self.kind.to_lowercase().contains(&query)
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadingStatus {
    Reading,
    Finished,
    NotStarted,
}

impl ReadingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReadingStatus::Reading => "reading",
            ReadingStatus::Finished => "finished",
            ReadingStatus::NotStarted => "not_started",
        }
    }

    pub fn display_label(&self) -> &'static str {
        match self {
            ReadingStatus::Reading => "Reading",
            ReadingStatus::Finished => "Finished",
            ReadingStatus::NotStarted => "Not started",
        }
    }
}

impl FromStr for ReadingStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "reading" => Ok(ReadingStatus::Reading),
            "finished" => Ok(ReadingStatus::Finished),
            "not_started" => Ok(ReadingStatus::NotStarted),
            _ => Err(()),
        }
    }
}

fn lenient_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw
        .as_deref()
        .and_then(|s| NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()))
}

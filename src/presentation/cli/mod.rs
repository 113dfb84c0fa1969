pub mod list;
pub mod stats;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::domain::records::ReadingStatus;

#[derive(Debug, Parser)]
#[command(author, version, about = "Render a personal bookshelf from a reading log", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show reading statistics
    Stats(StatsCommand),

    /// List books on the shelf
    List(ListCommand),
}

#[derive(Debug, Args)]
pub struct StatsCommand {
    /// Path to the reading log JSON document
    #[arg(long, env = "BOOKSHELF_LIBRARY", default_value = "bookData.json")]
    pub library: PathBuf,

    /// Print the statistics as JSON instead of text
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct ListCommand {
    /// Path to the reading log JSON document
    #[arg(long, env = "BOOKSHELF_LIBRARY", default_value = "bookData.json")]
    pub library: PathBuf,

    /// Only show books with this status (reading, finished, not-started)
    #[arg(long)]
    pub status: Option<String>,

    /// Only show finished books whose reading span touches this year
    #[arg(long)]
    pub year: Option<i32>,

    /// Case-insensitive search over title, author and type
    #[arg(long)]
    pub query: Option<String>,

    /// Print matching records as JSON instead of text
    #[arg(long)]
    pub json: bool,
}

pub fn parse_status(value: &str) -> anyhow::Result<ReadingStatus> {
    value.parse().map_err(|()| {
        anyhow::anyhow!("invalid status {value:?}: expected reading, finished or not-started")
    })
}

pub(crate) fn print_json<T>(value: &T) -> anyhow::Result<()>
where
    T: serde::Serialize,
{
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_status_accepts_known_values() {
        assert_eq!(parse_status("reading").unwrap(), ReadingStatus::Reading);
        assert_eq!(parse_status("finished").unwrap(), ReadingStatus::Finished);
        assert_eq!(
            parse_status("not-started").unwrap(),
            ReadingStatus::NotStarted
        );
    }

    #[test]
    fn parse_status_rejects_unknown_values() {
        assert!(parse_status("done").is_err());
    }
}

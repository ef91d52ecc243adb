//! Render projection of the past searches screen
//!
//! Formatting follows the default `en-US` output of `toLocaleDateString` and
//! `toLocaleTimeString`, e.g. `1/5/2024` and `10:30:00 AM`.

use super::search::SearchRecord;
use chrono::TimeZone;
use std::fmt::Display;

pub const SCREEN_TITLE: &str = "Your Past Searches";
pub const LOADING_CAPTION: &str = "Loading your past search history...";
pub const EMPTY_MESSAGE: &str = "You haven’t searched anything yet. Start exploring properties now!";
pub const TABLE_HEADERS: [&str; 3] = ["Search Term", "Date", "Time"];

const DATE_FORMAT: &str = "%-m/%-d/%Y";
const TIME_FORMAT: &str = "%-I:%M:%S %p";

#[derive(Debug, Clone, PartialEq)]
pub struct HistoryRow {
    pub search_text: String,
    pub date: String,
    pub time: String,
}

impl HistoryRow {
    pub fn from_record<Tz>(record: &SearchRecord, tz: &Tz) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let local = record.search_datetime.with_timezone(tz);
        Self {
            search_text: record.search_text.clone(),
            date: local.format(DATE_FORMAT).to_string(),
            time: local.format(TIME_FORMAT).to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum HistoryContent {
    Loading,
    Table(Vec<HistoryRow>),
    Empty,
}

/// What the screen shows: main content plus an optional error line below it
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryLayout {
    pub content: HistoryContent,
    pub error: Option<String>,
}

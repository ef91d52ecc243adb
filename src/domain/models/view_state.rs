use super::layout::{HistoryContent, HistoryLayout, HistoryRow};
use super::search::SearchRecord;
use crate::shared::errors::HistoryError;
use chrono::{Local, TimeZone};
use std::fmt::Display;

/// Settled result of one load sequence
#[derive(Debug, PartialEq)]
pub enum LoadOutcome {
    /// Nothing stored under the credential key; no request was sent
    NoCredential,
    Loaded(Vec<SearchRecord>),
    Failed(HistoryError),
}

/// State driving the past searches screen
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pub loading: bool,
    pub error: Option<String>,
    pub records: Vec<SearchRecord>,
}

impl Default for ViewState {
    /// Starts in the loading state so the empty state never flashes before the fetch
    fn default() -> Self {
        Self {
            loading: true,
            error: None,
            records: Vec::new(),
        }
    }
}

impl ViewState {
    pub fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Apply a settled outcome; `loading` ends false on every path
    pub fn settle(&mut self, outcome: LoadOutcome) {
        match outcome {
            LoadOutcome::NoCredential => {}
            LoadOutcome::Loaded(records) => self.records = records,
            LoadOutcome::Failed(err) => {
                self.error = Some(err.user_message().to_string());
                self.records.clear();
            }
        }
        self.loading = false;
    }

    pub fn layout(&self) -> HistoryLayout {
        self.layout_in(&Local)
    }

    /// Render projection with dates and times shown in `tz`
    pub fn layout_in<Tz>(&self, tz: &Tz) -> HistoryLayout
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        if self.loading {
            return HistoryLayout {
                content: HistoryContent::Loading,
                error: None,
            };
        }

        let content = if self.records.is_empty() {
            HistoryContent::Empty
        } else {
            HistoryContent::Table(
                self.records
                    .iter()
                    .map(|record| HistoryRow::from_record(record, tz))
                    .collect(),
            )
        };

        HistoryLayout {
            content,
            error: self.error.clone(),
        }
    }
}

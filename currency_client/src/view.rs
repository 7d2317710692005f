//! Form state behind the converter and directory views.
//!
//! `AppState` owns every field the user edits plus what is shown back to them.
//! Front ends mutate the fields, call `convert` or `set_search`, and render the
//! result; the rate source is handed in per call rather than stored.
use currency_common::RateSource;
use currency_common::converter;
use currency_common::directory::{self, DirectoryEntry};
use log::{info, warn};

/// Outcome of a form action, as shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feedback {
    /// Text for the result label.
    Result(String),
    /// Message for an error dialog.
    Error(String),
}

/// Converter form plus directory listing.
#[derive(Debug)]
pub struct AppState {
    /// Base currency field, code or name as typed.
    pub base_input: String,
    /// Target currency field, code or name as typed.
    pub target_input: String,
    /// Amount field, parsed only on convert.
    pub amount_input: String,
    search_input: String,
    result_label: String,
    listing: Vec<DirectoryEntry>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Empty form with the unfiltered directory loaded.
    pub fn new() -> Self {
        Self {
            base_input: String::new(),
            target_input: String::new(),
            amount_input: String::new(),
            search_input: String::new(),
            result_label: String::new(),
            listing: directory::search(""),
        }
    }

    /// Convert using the current form fields.
    ///
    /// The result label only changes on success; a failed action keeps the last result.
    pub fn convert<S: RateSource + ?Sized>(&mut self, source: &S) -> Feedback {
        match converter::convert_request(
            source,
            &self.base_input,
            &self.target_input,
            &self.amount_input,
        ) {
            Ok(conversion) => {
                info!("Converted: {}", conversion);
                self.result_label = conversion.to_string();
                Feedback::Result(self.result_label.clone())
            }
            Err(e) => {
                warn!("Conversion failed: {}", e);
                Feedback::Error(e.to_string())
            }
        }
    }

    /// Update the search box and refresh the listing.
    pub fn set_search(&mut self, term: &str) {
        self.search_input = term.to_string();
        self.listing = directory::search(term);
    }

    /// Current search box text.
    pub fn search_input(&self) -> &str {
        &self.search_input
    }

    /// Text of the last successful conversion, empty until one succeeds.
    pub fn result_label(&self) -> &str {
        &self.result_label
    }

    /// Directory rows matching the current search.
    pub fn listing(&self) -> &[DirectoryEntry] {
        &self.listing
    }
}

//! View-state values produced by the workflows.
//!
//! Nothing here touches a rendering surface. A front end applies
//! [`ViewUpdate`]s to its [`ViewState`] and draws whatever it holds.

use crate::core::query::format_number;
use crate::models::{ListingRecord, PreferenceRecord};
use std::fmt;

pub const NO_RESULTS: &str = "No matching apartments found.";

/// Form section an update belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    User,
    Preferences,
    Search,
}

impl Section {
    /// Message shown while the section's request is in flight
    pub fn pending_message(self) -> &'static str {
        match self {
            Section::User => "Creating user…",
            Section::Preferences => "Saving preferences…",
            Section::Search => "Searching with preferences…",
        }
    }
}

/// Status line of one section
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Status {
    #[default]
    Idle,
    Pending(String),
    Succeeded(String),
    Failed(String),
}

impl Status {
    /// Submit stays disabled while a request is in flight
    pub fn is_busy(&self) -> bool {
        matches!(self, Status::Pending(_))
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Status::Idle => None,
            Status::Pending(m) | Status::Succeeded(m) | Status::Failed(m) => Some(m),
        }
    }
}

/// Search outcome ready for display
#[derive(Debug, Clone, PartialEq)]
pub struct SearchView {
    pub preferences: PreferenceRecord,
    pub listings: Vec<ListingRecord>,
}

impl SearchView {
    /// `Using preferences: ...` line, `?` for values the service omitted
    pub fn preferences_summary(&self) -> String {
        let budget = self
            .preferences
            .max_budget
            .map(format_number)
            .unwrap_or_else(|| "?".to_string());
        let rooms = self
            .preferences
            .rooms
            .map(|r| r.to_string())
            .unwrap_or_else(|| "?".to_string());
        let area = self.preferences.location_area.as_deref().unwrap_or("?");

        format!(
            "Using preferences: Max Budget = ${}, Rooms = {}, Area = {}",
            budget, rooms, area
        )
    }
}

impl fmt::Display for SearchView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.listings.is_empty() {
            return f.write_str(NO_RESULTS);
        }

        writeln!(f, "{}", self.preferences_summary())?;
        for listing in &self.listings {
            writeln!(f)?;
            write_card(f, listing)?;
        }
        Ok(())
    }
}

fn write_card(f: &mut fmt::Formatter<'_>, listing: &ListingRecord) -> fmt::Result {
    let title = listing.title.as_deref().unwrap_or("Apartment");
    let (city, state) = listing
        .address
        .as_ref()
        .map(|a| (a.city.as_deref().unwrap_or(""), a.state.as_deref().unwrap_or("")))
        .unwrap_or(("", ""));
    let bedrooms = listing
        .num_bedrooms
        .map(|n| n.to_string())
        .unwrap_or_else(|| "?".to_string());

    writeln!(f, "{}", title)?;
    writeln!(f, "{}", format!("{} {}", city, state).trim())?;
    writeln!(
        f,
        "Rent: ${} - {} BR",
        format_number(listing.monthly_rent),
        bedrooms
    )?;
    writeln!(f, "ID: {}", listing.id)
}

/// One change to the view, returned by a workflow step
#[derive(Debug, Clone, PartialEq)]
pub struct ViewUpdate {
    pub section: Section,
    pub status: Status,
    /// Set after a successful registration
    pub current_user_id: Option<String>,
    pub results: Option<SearchView>,
}

impl ViewUpdate {
    pub fn pending(section: Section) -> Self {
        Self::status(section, Status::Pending(section.pending_message().to_string()))
    }

    pub fn succeeded(section: Section, message: impl Into<String>) -> Self {
        Self::status(section, Status::Succeeded(message.into()))
    }

    pub fn failed(section: Section, message: impl Into<String>) -> Self {
        Self::status(section, Status::Failed(message.into()))
    }

    fn status(section: Section, status: Status) -> Self {
        Self {
            section,
            status,
            current_user_id: None,
            results: None,
        }
    }

    pub fn with_user_id(mut self, user_id: impl Into<String>) -> Self {
        self.current_user_id = Some(user_id.into());
        self
    }

    pub fn with_results(mut self, results: SearchView) -> Self {
        self.results = Some(results);
        self
    }
}

/// Everything a front end needs to draw the three forms
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    pub user_status: Status,
    pub preferences_status: Status,
    pub search_status: Status,
    /// Prefills the user id of the preferences and search forms
    pub current_user_id: Option<String>,
    pub results: Option<SearchView>,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, update: ViewUpdate) {
        if let Some(id) = update.current_user_id {
            self.current_user_id = Some(id);
        }

        match update.section {
            Section::User => self.user_status = update.status,
            Section::Preferences => self.preferences_status = update.status,
            Section::Search => {
                // Results of an earlier search are cleared when a new one starts or fails
                self.results = update.results;
                self.search_status = update.status;
            }
        }
    }

    pub fn status(&self, section: Section) -> &Status {
        match section {
            Section::User => &self.user_status,
            Section::Preferences => &self.preferences_status,
            Section::Search => &self.search_status,
        }
    }

    pub fn can_submit(&self, section: Section) -> bool {
        !self.status(section).is_busy()
    }
}

//! Nest Finder - client workflows for the apartment finder services
//!
//! This library registers users, stores their search preferences and runs
//! preference-driven listing searches against three independent REST
//! services. Results come back as plain values and view updates, so any
//! front end can render them.

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod services;
pub mod telemetry;
pub mod workflow;

// Re-export commonly used types
pub use crate::core::{listing_query, SearchView, Section, Status, ViewState, ViewUpdate};
pub use error::WorkflowError;
pub use models::{
    ListingQuery, ListingRecord, NewPreferences, NewUser, PreferenceRecord, UserRecord,
};
pub use workflow::{SearchOutcome, WorkflowClient};

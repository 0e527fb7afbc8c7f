// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Address, ListingQuery, ListingRecord, PreferenceRecord, UserRecord};
pub use requests::{NewPreferences, NewUser, PreferencePayload};
pub use responses::ErrorResponse;

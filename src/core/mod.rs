// Pure workflow logic, no I/O
pub mod query;
pub mod view;

pub use query::{listing_query, to_query_params};
pub use view::{SearchView, Section, Status, ViewState, ViewUpdate};

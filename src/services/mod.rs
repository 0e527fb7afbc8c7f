// Service exports
pub mod http;
pub mod listings;
pub mod preferences;
pub mod users;

pub use self::http::{remote_message, ServiceError};
pub use listings::ListingsService;
pub use preferences::PreferencesService;
pub use users::UsersService;

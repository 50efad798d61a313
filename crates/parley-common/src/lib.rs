pub mod errors;
pub mod notifications;
pub mod types;

pub use errors::{ConfigError, ParleyError};
pub use notifications::{Notification, NotificationLevel};
pub use types::{ModelDescriptor, ProviderKind};

pub type Result<T> = std::result::Result<T, ParleyError>;

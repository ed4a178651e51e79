pub mod email;

pub use email::Email;

/// Internal UUID identifier for users
pub use kernel::id::UserId;

//! Authentication module

pub mod error_handler;
pub mod error_messages;
pub mod login;

// Re-export commonly used items
pub use error_handler::{AuthErrorFlag, SessionExpiryInterceptor};
pub use error_messages::login_error_message;
pub use login::{login_action, login_demo_user};

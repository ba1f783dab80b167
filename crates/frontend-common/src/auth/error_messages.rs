//! User-facing error messages

use jobtrack_http::ClientError;

/// Shown when the backend gave no message of its own
pub const FALLBACK_LOGIN_ERROR: &str = "Login failed, please try again";

/// Message to toast for a failed login: the backend's `msg` when it sent one
pub fn login_error_message(error: &ClientError) -> String {
    error
        .server_message()
        .filter(|message| !message.trim().is_empty())
        .unwrap_or(FALLBACK_LOGIN_ERROR)
        .to_string()
}

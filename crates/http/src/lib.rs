//! Jobtrack HTTP client
//!
//! Typed access to the jobtrack backend API plus the response interceptor
//! chain the frontend uses to observe session expiry.

pub mod client;
pub mod types;

pub use client::error::{ClientError, ErrorMessage};
pub use client::interceptor::{InterceptorChain, InterceptorHandle, ResponseInterceptor};
pub use client::{JobtrackClient, JobtrackClientBuilder};
pub use types::{ErrorBody, LoginRequest, Session, UserId, UserSummary};

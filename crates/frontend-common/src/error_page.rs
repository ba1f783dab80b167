//! What the routing error boundary shows

use crate::router::DASHBOARD_PATH;

/// A failure caught while routing or rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteError {
    pub status: Option<u16>,
    pub message: String,
}

impl RouteError {
    pub fn not_found(path: &str) -> Self {
        Self {
            status: Some(404),
            message: format!("no route matches {path}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorView {
    NotFound {
        title: &'static str,
        text: &'static str,
        link_to: &'static str,
        link_label: &'static str,
    },
    Generic {
        title: &'static str,
    },
}

impl ErrorView {
    pub fn from_error(error: &RouteError) -> Self {
        if error.status == Some(404) {
            Self::NotFound {
                title: "Ohh! Page not found",
                text: "We can't seem to find the page you're looking for",
                link_to: DASHBOARD_PATH,
                link_label: "Back home",
            }
        } else {
            Self::Generic {
                title: "Something went Wrong",
            }
        }
    }
}

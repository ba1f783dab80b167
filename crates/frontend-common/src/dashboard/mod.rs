//! Dashboard layout module

mod links;
mod shell;

pub use links::{NAV_LINKS, NavLink};
pub use shell::{DashboardShell, ExpiryWatch, OutletContext, ShellContent, ShellServices, UiState};

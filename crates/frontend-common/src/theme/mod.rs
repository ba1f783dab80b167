//! Theme management module

mod context;

pub use context::{Theme, ThemeSwitch, check_default_theme};

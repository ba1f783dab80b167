mod navbar;
mod sidebar;
mod spinner;
pub mod toast;

pub use navbar::Navbar;
pub use sidebar::Sidebar;
pub use spinner::LoadingSpinner;
pub use toast::ToastContainer;

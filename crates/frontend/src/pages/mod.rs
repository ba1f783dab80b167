mod dashboard;
mod error;
mod landing;
mod login;
mod register;

pub use dashboard::{AddJob, AllJobs, DashboardLayout, Profile, Stats};
pub use error::ErrorPage;
pub use landing::Landing;
pub use login::Login;
pub use register::Register;

mod layout;
mod outlet;

pub use layout::DashboardLayout;
pub use outlet::{AddJob, AllJobs, Profile, Stats};

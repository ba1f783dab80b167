//! Sidebar navigation

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub text: &'static str,
    pub path: &'static str,
}

/// Links shown by both the big and the small sidebar
pub const NAV_LINKS: [NavLink; 4] = [
    NavLink {
        text: "add job",
        path: "/dashboard",
    },
    NavLink {
        text: "all jobs",
        path: "/dashboard/all-jobs",
    },
    NavLink {
        text: "stats",
        path: "/dashboard/stats",
    },
    NavLink {
        text: "profile",
        path: "/dashboard/profile",
    },
];

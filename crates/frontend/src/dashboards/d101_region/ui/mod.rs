pub mod dashboard;

pub use dashboard::RegionDashboard;

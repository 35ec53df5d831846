pub mod dashboard;

pub use dashboard::ThreeWDashboard;

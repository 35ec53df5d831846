pub mod d100_home;
pub mod d101_region;
pub mod d102_three_w;

pub use d100_home::ui::HomeDashboard;
pub use d101_region::ui::RegionDashboard;
pub use d102_three_w::ui::ThreeWDashboard;

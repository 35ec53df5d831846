pub mod a001_surge_alert;
pub mod a002_appeal;
pub mod a003_emergency;
pub mod a004_field_report;
pub mod a005_three_w_project;

pub use a001_surge_alert::ui::list::SurgeAlertList;
pub use a002_appeal::ui::list::AppealList;
pub use a003_emergency::ui::list::EmergencyList;
pub use a004_field_report::ui::list::FieldReportList;
pub use a005_three_w_project::ui::list::ProjectList;

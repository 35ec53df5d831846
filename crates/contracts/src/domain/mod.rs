pub mod a001_surge_alert;
pub mod a002_appeal;
pub mod a003_emergency;
pub mod a004_field_report;
pub mod a005_three_w_project;
pub mod common;

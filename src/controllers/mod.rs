pub mod dashboard_controller;
pub mod records_controller;
